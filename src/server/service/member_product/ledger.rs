//! Balance changes on issued passes.
//!
//! Every write re-reads the pass on the caller's connection, stores the new
//! balance with a compare-and-set on the count it read, and appends one ledger
//! entry whose `remaining_after` is the balance just stored. Callers run these
//! inside a transaction so the balance and its entry commit together.

use chrono::NaiveDate;
use entity::{member::MemberStatus, member_product::MemberProductStatus, member_product_history::LedgerKind};
use sea_orm::{ActiveEnum, ConnectionTrait};

use crate::server::{
    config::Defaults,
    data::{
        coach::CoachRepository, member::MemberRepository, member_product::MemberProductRepository,
        member_product_history::MemberProductHistoryRepository, payment::PaymentRepository,
        product::ProductRepository,
    },
    error::AppError,
    model::member_product::{
        is_overdue, resolve_expiry, resolve_total_count, LedgerChange, LedgerEntry, LedgerLinks,
        MemberProduct, NewLedgerEntry, NewMemberProduct, PurchaseParams,
    },
};

/// A pass together with the ledger entry written for its latest change.
pub type LedgerWrite = (MemberProduct, LedgerEntry);

pub struct Ledger<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> Ledger<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Issues a pass and writes its CHARGE entry.
    ///
    /// The session count is resolved from the product type, the override, the
    /// product's usage count and finally `defaults.product_total_count`. A linked
    /// payment gets the new pass recorded on it.
    ///
    /// # Returns
    /// - `Ok((MemberProduct, LedgerEntry))` - The new pass and its CHARGE entry
    /// - `Err(AppError::NotFound)` - Member, product, coach or payment does not exist
    /// - `Err(AppError::BadRequest)` - Member withdrawn or product inactive
    pub async fn purchase(
        &self,
        param: PurchaseParams,
        defaults: &Defaults,
        today: NaiveDate,
    ) -> Result<LedgerWrite, AppError> {
        let member = MemberRepository::new(self.db)
            .find_by_id(param.member_id)
            .await?
            .ok_or_else(|| AppError::not_found("Member", param.member_id))?;
        if member.status == MemberStatus::Withdrawn {
            return Err(AppError::BadRequest(format!(
                "Member {} has withdrawn",
                member.id
            )));
        }

        let product = ProductRepository::new(self.db)
            .find_by_id(param.product_id)
            .await?
            .ok_or_else(|| AppError::not_found("Product", param.product_id))?;
        if !product.active {
            return Err(AppError::BadRequest(format!(
                "Product {} is not on sale",
                product.id
            )));
        }

        if let Some(coach_id) = param.coach_id {
            CoachRepository::new(self.db)
                .find_by_id(coach_id)
                .await?
                .ok_or_else(|| AppError::not_found("Coach", coach_id))?;
        }

        let starts_on = param.starts_on.unwrap_or(today);
        let total_count = resolve_total_count(
            product.product_type,
            param.total_count,
            product.usage_count,
            defaults.product_total_count,
        );

        let pass = MemberProductRepository::new(self.db)
            .create(NewMemberProduct {
                member_id: member.id,
                product_id: product.id,
                coach_id: param.coach_id.or(product.coach_id),
                total_count,
                starts_on,
                expires_on: resolve_expiry(product.product_type, product.valid_days, starts_on),
            })
            .await?;

        if let Some(payment_id) = param.payment_id {
            PaymentRepository::new(self.db)
                .set_member_product(payment_id, pass.id)
                .await?
                .ok_or_else(|| AppError::not_found("Payment", payment_id))?;
        }

        let entry = MemberProductHistoryRepository::new(self.db)
            .create(NewLedgerEntry {
                member_product_id: pass.id,
                member_id: pass.member_id,
                kind: LedgerKind::Charge,
                change_amount: total_count.unwrap_or(0),
                remaining_after: total_count,
                links: LedgerLinks {
                    payment_id: param.payment_id,
                    ..Default::default()
                },
                description: Some(format!("Purchased {}", product.name)),
                created_by: param.created_by,
            })
            .await?;

        tracing::info!(
            member_product_id = pass.id,
            member_id = pass.member_id,
            product_id = pass.product_id,
            total_count = ?total_count,
            "Issued pass"
        );

        Ok((pass, entry))
    }

    /// Consumes `change.amount` sessions.
    ///
    /// Uncounted passes record a zero-amount DEDUCT and keep their balance.
    ///
    /// # Returns
    /// - `Ok((MemberProduct, LedgerEntry))` - Updated pass and its DEDUCT entry
    /// - `Err(AppError::BadRequest)` - Pass not ACTIVE, past expiry or short of sessions
    /// - `Err(AppError::Conflict)` - The balance changed after it was read
    pub async fn deduct(
        &self,
        id: i32,
        change: LedgerChange,
        today: NaiveDate,
    ) -> Result<LedgerWrite, AppError> {
        if change.amount < 1 {
            return Err(AppError::BadRequest(
                "Deduction amount must be at least 1".to_string(),
            ));
        }

        let pass = self.load(id).await?;
        if pass.status != MemberProductStatus::Active {
            return Err(AppError::BadRequest(format!(
                "Pass {} is {}",
                pass.id,
                pass.status.to_value()
            )));
        }
        if is_overdue(pass.expires_on, today) {
            return Err(AppError::BadRequest(format!("Pass {} has expired", pass.id)));
        }

        let Some(remaining) = pass.remaining_count else {
            let entry = self
                .append(&pass, LedgerKind::Deduct, 0, None, change)
                .await?;
            return Ok((pass, entry));
        };

        if remaining < change.amount {
            return Err(AppError::BadRequest(format!(
                "Insufficient sessions on pass {}: {} remaining, {} requested",
                pass.id, remaining, change.amount
            )));
        }

        let after = remaining - change.amount;
        let status = if after == 0 {
            MemberProductStatus::UsedUp
        } else {
            MemberProductStatus::Active
        };
        let amount = -change.amount;

        self.store(&pass, remaining, after, status, LedgerKind::Deduct, amount, change)
            .await
    }

    /// Restores sessions after a cancellation or undo.
    ///
    /// The balance never exceeds `total_count`; the entry records the amount
    /// actually restored. A USED_UP pass becomes ACTIVE again, an EXPIRED one
    /// stays EXPIRED.
    ///
    /// # Returns
    /// - `Ok((MemberProduct, LedgerEntry))` - Updated pass and its ADJUST entry
    /// - `Err(AppError::Conflict)` - The balance changed after it was read
    pub async fn credit(&self, id: i32, change: LedgerChange) -> Result<LedgerWrite, AppError> {
        if change.amount < 1 {
            return Err(AppError::BadRequest(
                "Credit amount must be at least 1".to_string(),
            ));
        }

        let pass = self.load(id).await?;

        let (Some(total), Some(remaining)) = (pass.total_count, pass.remaining_count) else {
            let entry = self
                .append(&pass, LedgerKind::Adjust, 0, None, change)
                .await?;
            return Ok((pass, entry));
        };

        let after = remaining.saturating_add(change.amount).min(total);
        let status = match pass.status {
            MemberProductStatus::UsedUp if after > 0 => MemberProductStatus::Active,
            status => status,
        };
        let amount = after - remaining;

        self.store(&pass, remaining, after, status, LedgerKind::Adjust, amount, change)
            .await
    }

    /// Sets the remaining count of a counted pass to `new_remaining`.
    ///
    /// # Returns
    /// - `Ok((MemberProduct, LedgerEntry))` - Updated pass and an ADJUST entry with the delta
    /// - `Err(AppError::BadRequest)` - Uncounted pass or value outside `[0, total]`
    /// - `Err(AppError::Conflict)` - The balance changed after it was read
    pub async fn adjust(
        &self,
        id: i32,
        new_remaining: i32,
        change: LedgerChange,
    ) -> Result<LedgerWrite, AppError> {
        let pass = self.load(id).await?;

        let (Some(total), Some(remaining)) = (pass.total_count, pass.remaining_count) else {
            return Err(AppError::BadRequest(format!(
                "Pass {} has no session count",
                pass.id
            )));
        };
        if !(0..=total).contains(&new_remaining) {
            return Err(AppError::BadRequest(format!(
                "Remaining count must be between 0 and {}",
                total
            )));
        }

        let status = match pass.status {
            MemberProductStatus::Expired => MemberProductStatus::Expired,
            _ if new_remaining == 0 => MemberProductStatus::UsedUp,
            _ => MemberProductStatus::Active,
        };
        let amount = new_remaining - remaining;

        self.store(&pass, remaining, new_remaining, status, LedgerKind::Adjust, amount, change)
            .await
    }

    /// Takes back up to `change.amount` sessions, bounded by the remaining count.
    ///
    /// # Returns
    /// - `Ok(Some(_))` - Sessions removed and ADJUST entry written
    /// - `Ok(None)` - Nothing to take back (uncounted or empty pass)
    pub async fn revoke(&self, id: i32, change: LedgerChange) -> Result<Option<LedgerWrite>, AppError> {
        let pass = self.load(id).await?;

        let Some(remaining) = pass.remaining_count else {
            return Ok(None);
        };
        let revoked = change.amount.min(remaining);
        if revoked <= 0 {
            return Ok(None);
        }

        let after = remaining - revoked;
        let status = match pass.status {
            MemberProductStatus::Expired => MemberProductStatus::Expired,
            _ if after == 0 => MemberProductStatus::UsedUp,
            status => status,
        };

        self.store(&pass, remaining, after, status, LedgerKind::Adjust, -revoked, change)
            .await
            .map(Some)
    }

    async fn load(&self, id: i32) -> Result<MemberProduct, AppError> {
        MemberProductRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Pass", id))
    }

    #[allow(clippy::too_many_arguments)]
    async fn store(
        &self,
        pass: &MemberProduct,
        expected: i32,
        after: i32,
        status: MemberProductStatus,
        kind: LedgerKind,
        amount: i32,
        change: LedgerChange,
    ) -> Result<LedgerWrite, AppError> {
        let repo = MemberProductRepository::new(self.db);

        if !repo
            .compare_and_set_remaining(pass.id, expected, after, status)
            .await?
        {
            return Err(AppError::Conflict(format!(
                "Pass {} was modified concurrently; retry the request",
                pass.id
            )));
        }

        let entry = self.append(pass, kind, amount, Some(after), change).await?;
        let pass = self.load(pass.id).await?;

        tracing::debug!(
            member_product_id = pass.id,
            change = amount,
            remaining = after,
            "Ledger entry written"
        );

        Ok((pass, entry))
    }

    async fn append(
        &self,
        pass: &MemberProduct,
        kind: LedgerKind,
        amount: i32,
        remaining_after: Option<i32>,
        change: LedgerChange,
    ) -> Result<LedgerEntry, AppError> {
        let entry = MemberProductHistoryRepository::new(self.db)
            .create(NewLedgerEntry {
                member_product_id: pass.id,
                member_id: pass.member_id,
                kind,
                change_amount: amount,
                remaining_after,
                links: change.links,
                description: change.description,
                created_by: change.created_by,
            })
            .await?;

        Ok(entry)
    }
}
