//! Payment repository.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use entity::payment::PaymentStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Select,
};

use crate::server::model::payment::{CreatePaymentParams, Payment, PaymentFilter};

/// Refund values written by `apply_refund`.
#[derive(Debug, Clone)]
pub struct RefundUpdate {
    pub refunded_amount: i64,
    pub status: PaymentStatus,
    pub reason: String,
    pub approver: Option<String>,
    pub at: DateTime<Utc>,
}

/// Repository providing database operations for payments.
pub struct PaymentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PaymentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a payment with no refund and no issued pass yet.
    ///
    /// # Arguments
    /// - `param` - Payment values with defaults already resolved
    /// - `paid_at` - Payment timestamp
    pub async fn create(
        &self,
        param: &CreatePaymentParams,
        paid_at: DateTime<Utc>,
    ) -> Result<Payment, DbErr> {
        let entity = entity::payment::ActiveModel {
            member_id: ActiveValue::Set(param.member_id),
            booking_id: ActiveValue::Set(param.booking_id),
            product_id: ActiveValue::Set(param.product_id),
            member_product_id: ActiveValue::Set(None),
            amount: ActiveValue::Set(param.amount),
            refunded_amount: ActiveValue::Set(0),
            method: ActiveValue::Set(param.method),
            status: ActiveValue::Set(param.status),
            category: ActiveValue::Set(param.category),
            paid_at: ActiveValue::Set(paid_at),
            refund_reason: ActiveValue::Set(None),
            refund_approved_by: ActiveValue::Set(None),
            refunded_at: ActiveValue::Set(None),
            memo: ActiveValue::Set(param.memo.clone()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Payment::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Payment>, DbErr> {
        let entity = entity::prelude::Payment::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Payment::from_entity))
    }

    /// Links the pass issued by a payment.
    pub async fn set_member_product(
        &self,
        id: i32,
        member_product_id: i32,
    ) -> Result<Option<Payment>, DbErr> {
        let Some(entity) = entity::prelude::Payment::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::payment::ActiveModel = entity.into();
        active_model.member_product_id = ActiveValue::Set(Some(member_product_id));
        let entity = active_model.update(self.db).await?;

        Ok(Some(Payment::from_entity(entity)))
    }

    pub async fn apply_refund(
        &self,
        id: i32,
        refund: RefundUpdate,
    ) -> Result<Option<Payment>, DbErr> {
        let Some(entity) = entity::prelude::Payment::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::payment::ActiveModel = entity.into();
        active_model.refunded_amount = ActiveValue::Set(refund.refunded_amount);
        active_model.status = ActiveValue::Set(refund.status);
        active_model.refund_reason = ActiveValue::Set(Some(refund.reason));
        active_model.refund_approved_by = ActiveValue::Set(refund.approver);
        active_model.refunded_at = ActiveValue::Set(Some(refund.at));
        let entity = active_model.update(self.db).await?;

        Ok(Some(Payment::from_entity(entity)))
    }

    pub async fn set_status(
        &self,
        id: i32,
        status: PaymentStatus,
    ) -> Result<Option<Payment>, DbErr> {
        let Some(entity) = entity::prelude::Payment::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::payment::ActiveModel = entity.into();
        active_model.status = ActiveValue::Set(status);
        let entity = active_model.update(self.db).await?;

        Ok(Some(Payment::from_entity(entity)))
    }

    /// Gets payments matching the filter, newest first.
    pub async fn list(&self, filter: &PaymentFilter) -> Result<Vec<Payment>, DbErr> {
        let mut query = date_range(entity::prelude::Payment::find(), filter.from, filter.to);

        if let Some(member_id) = filter.member_id {
            query = query.filter(entity::payment::Column::MemberId.eq(member_id));
        }
        if let Some(status) = filter.status {
            query = query.filter(entity::payment::Column::Status.eq(status));
        }

        let entities = query
            .order_by_desc(entity::payment::Column::PaidAt)
            .order_by_desc(entity::payment::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Payment::from_entity).collect())
    }

    /// Payments counted in revenue totals: every status except PENDING and CANCELLED.
    pub async fn find_settled_in_range(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Vec<Payment>, DbErr> {
        let entities = date_range(entity::prelude::Payment::find(), from, to)
            .filter(
                entity::payment::Column::Status
                    .is_not_in([PaymentStatus::Pending, PaymentStatus::Cancelled]),
            )
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Payment::from_entity).collect())
    }

    pub async fn exists_for_product(&self, product_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Payment::find()
            .filter(entity::payment::Column::ProductId.eq(product_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}

/// Restricts `paid_at` to the inclusive calendar range `[from, to]` in UTC.
fn date_range(
    query: Select<entity::prelude::Payment>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Select<entity::prelude::Payment> {
    let mut query = query;
    if let Some(from) = from {
        query = query.filter(
            entity::payment::Column::PaidAt.gte(from.and_time(NaiveTime::MIN).and_utc()),
        );
    }
    if let Some(next_day) = to.and_then(|to| to.succ_opt()) {
        query = query.filter(
            entity::payment::Column::PaidAt.lt(next_day.and_time(NaiveTime::MIN).and_utc()),
        );
    }
    query
}
