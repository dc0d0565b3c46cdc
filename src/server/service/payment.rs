//! Payments, refunds and revenue summaries.

use chrono::{NaiveDate, Utc};
use entity::payment::PaymentStatus;
use sea_orm::{ActiveEnum, DatabaseConnection, TransactionTrait};

use crate::server::{
    config::Defaults,
    data::{
        member::MemberRepository,
        payment::{PaymentRepository, RefundUpdate},
        product::ProductRepository,
    },
    error::AppError,
    model::{
        member_product::{LedgerChange, LedgerLinks, PurchaseParams},
        payment::{CreatePaymentParams, Payment, PaymentFilter, PaymentSummary, RefundParams},
    },
    service::member_product::ledger::Ledger,
};

pub struct PaymentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PaymentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a payment.
    ///
    /// A COMPLETED payment naming both a member and a product issues the pass
    /// in the same transaction; its CHARGE entry links back to the payment.
    ///
    /// # Returns
    /// - `Ok(Payment)` - The stored payment, with `member_product_id` when a pass was issued
    /// - `Err(AppError::BadRequest)` - Non-positive amount
    /// - `Err(AppError::NotFound)` - Member or product does not exist
    pub async fn create(
        &self,
        param: CreatePaymentParams,
        defaults: &Defaults,
    ) -> Result<Payment, AppError> {
        if param.amount <= 0 {
            return Err(AppError::BadRequest(
                "Payment amount must be greater than 0".to_string(),
            ));
        }

        let now = Utc::now();
        let txn = self.db.begin().await?;

        if let Some(member_id) = param.member_id {
            MemberRepository::new(&txn)
                .find_by_id(member_id)
                .await?
                .ok_or_else(|| AppError::not_found("Member", member_id))?;
        }
        if let Some(product_id) = param.product_id {
            ProductRepository::new(&txn)
                .find_by_id(product_id)
                .await?
                .ok_or_else(|| AppError::not_found("Product", product_id))?;
        }

        let payment_repo = PaymentRepository::new(&txn);
        let mut payment = payment_repo
            .create(&param, param.paid_at.unwrap_or(now))
            .await?;

        if let (PaymentStatus::Completed, Some(member_id), Some(product_id)) =
            (param.status, param.member_id, param.product_id)
        {
            let (pass, _) = Ledger::new(&txn)
                .purchase(
                    PurchaseParams {
                        member_id,
                        product_id,
                        coach_id: param.coach_id,
                        starts_on: param.starts_on,
                        total_count: None,
                        payment_id: Some(payment.id),
                        created_by: param.created_by.clone(),
                    },
                    defaults,
                    now.date_naive(),
                )
                .await?;

            payment.member_product_id = Some(pass.id);
        }

        txn.commit().await?;

        tracing::info!(
            payment_id = payment.id,
            amount = payment.amount,
            status = %payment.status.to_value(),
            member_product_id = ?payment.member_product_id,
            "Payment recorded"
        );

        Ok(payment)
    }

    /// Refunds part or all of a payment.
    ///
    /// With `revoke_count` the issued pass loses up to that many sessions,
    /// bounded by what it has left.
    ///
    /// # Returns
    /// - `Ok(Payment)` - Updated payment, REFUNDED or PARTIALLY_REFUNDED
    /// - `Err(AppError::BadRequest)` - Wrong status, amount out of range, or
    ///   revocation requested for a payment without a pass
    pub async fn refund(&self, id: i32, param: RefundParams) -> Result<Payment, AppError> {
        if param.amount <= 0 {
            return Err(AppError::BadRequest(
                "Refund amount must be greater than 0".to_string(),
            ));
        }

        let txn = self.db.begin().await?;
        let payment_repo = PaymentRepository::new(&txn);

        let payment = payment_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Payment", id))?;
        if !matches!(
            payment.status,
            PaymentStatus::Completed | PaymentStatus::PartiallyRefunded
        ) {
            return Err(AppError::BadRequest(format!(
                "Payment {} is {} and cannot be refunded",
                id,
                payment.status.to_value()
            )));
        }
        if param.amount > payment.refundable() {
            return Err(AppError::BadRequest(format!(
                "Refund amount {} exceeds the refundable {}",
                param.amount,
                payment.refundable()
            )));
        }

        let refunded_amount = payment.refunded_amount + param.amount;
        let status = if refunded_amount == payment.amount {
            PaymentStatus::Refunded
        } else {
            PaymentStatus::PartiallyRefunded
        };

        let updated = payment_repo
            .apply_refund(
                id,
                RefundUpdate {
                    refunded_amount,
                    status,
                    reason: param.reason.clone(),
                    approver: param.approver.clone(),
                    at: Utc::now(),
                },
            )
            .await?
            .ok_or_else(|| AppError::not_found("Payment", id))?;

        if let Some(count) = param.revoke_count.filter(|count| *count > 0) {
            let Some(pass_id) = payment.member_product_id else {
                return Err(AppError::BadRequest(format!(
                    "Payment {} did not issue a pass",
                    id
                )));
            };

            let revoked = Ledger::new(&txn)
                .revoke(
                    pass_id,
                    LedgerChange::new(count)
                        .links(LedgerLinks::payment(id))
                        .description(format!("Refund: {}", param.reason))
                        .created_by(param.approver.clone()),
                )
                .await?;
            if revoked.is_none() {
                tracing::debug!(payment_id = id, pass_id, "No sessions left to revoke");
            }
        }

        txn.commit().await?;

        tracing::info!(
            payment_id = id,
            amount = param.amount,
            status = %status.to_value(),
            "Payment refunded"
        );

        Ok(updated)
    }

    /// Cancels a PENDING payment.
    pub async fn cancel(&self, id: i32) -> Result<Payment, AppError> {
        let payment_repo = PaymentRepository::new(self.db);

        let payment = payment_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Payment", id))?;
        if payment.status != PaymentStatus::Pending {
            return Err(AppError::BadRequest(format!(
                "Payment {} is {}; only pending payments can be cancelled",
                id,
                payment.status.to_value()
            )));
        }

        let payment = payment_repo
            .set_status(id, PaymentStatus::Cancelled)
            .await?
            .ok_or_else(|| AppError::not_found("Payment", id))?;

        tracing::info!(payment_id = id, "Payment cancelled");

        Ok(payment)
    }

    pub async fn get(&self, id: i32) -> Result<Payment, AppError> {
        PaymentRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Payment", id))
    }

    pub async fn list(&self, filter: PaymentFilter) -> Result<Vec<Payment>, AppError> {
        Ok(PaymentRepository::new(self.db).list(&filter).await?)
    }

    /// Paid and refunded totals of settled payments in `[from, to]`.
    pub async fn summary(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<PaymentSummary, AppError> {
        let payments = PaymentRepository::new(self.db)
            .find_settled_in_range(from, to)
            .await?;

        Ok(PaymentSummary {
            from,
            to,
            count: payments.len() as u64,
            paid: payments.iter().map(|p| p.amount).sum(),
            refunded: payments.iter().map(|p| p.refunded_amount).sum(),
        })
    }
}
