//! Pass repository.
//!
//! Balance changes go through `compare_and_set_remaining`, which only writes
//! when the stored remaining count still equals the value the caller read.
//! Ledger rows are written separately by `MemberProductHistoryRepository`.

use chrono::{NaiveDate, Utc};
use entity::member_product::MemberProductStatus;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::member_product::{
    MemberProduct, NewMemberProduct, UpdateMemberProductParams,
};

/// Repository providing database operations for issued passes.
pub struct MemberProductRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MemberProductRepository<'a, C> {
    /// Creates a new MemberProductRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an ACTIVE pass with its full balance remaining.
    ///
    /// # Arguments
    /// - `param` - Resolved member, product, coach, count and validity
    ///
    /// # Returns
    /// - `Ok(MemberProduct)` - The created pass
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: NewMemberProduct) -> Result<MemberProduct, DbErr> {
        let now = Utc::now();
        let entity = entity::member_product::ActiveModel {
            member_id: ActiveValue::Set(param.member_id),
            product_id: ActiveValue::Set(param.product_id),
            coach_id: ActiveValue::Set(param.coach_id),
            total_count: ActiveValue::Set(param.total_count),
            remaining_count: ActiveValue::Set(param.total_count),
            purchased_at: ActiveValue::Set(now),
            starts_on: ActiveValue::Set(param.starts_on),
            expires_on: ActiveValue::Set(param.expires_on),
            status: ActiveValue::Set(MemberProductStatus::Active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(MemberProduct::from_entity(entity))
    }

    /// Reads a pass through the repository's connection.
    ///
    /// Inside a transaction this is the authoritative read used before a
    /// compare-and-set write.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<MemberProduct>, DbErr> {
        let entity = entity::prelude::MemberProduct::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(MemberProduct::from_entity))
    }

    /// Gets the passes of a member, newest first.
    ///
    /// # Arguments
    /// - `member_id` - Owner of the passes
    /// - `status` - Optional status filter
    pub async fn find_by_member(
        &self,
        member_id: i32,
        status: Option<MemberProductStatus>,
    ) -> Result<Vec<MemberProduct>, DbErr> {
        let mut query = entity::prelude::MemberProduct::find()
            .filter(entity::member_product::Column::MemberId.eq(member_id));
        if let Some(status) = status {
            query = query.filter(entity::member_product::Column::Status.eq(status));
        }

        let entities = query
            .order_by_desc(entity::member_product::Column::PurchasedAt)
            .order_by_desc(entity::member_product::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(MemberProduct::from_entity).collect())
    }

    /// Writes a new balance if the stored remaining count still equals `expected`.
    ///
    /// # Arguments
    /// - `id` - Pass to update
    /// - `expected` - Remaining count read earlier in the same transaction
    /// - `remaining` - New remaining count
    /// - `status` - Status matching the new balance
    ///
    /// # Returns
    /// - `Ok(true)` - Balance written
    /// - `Ok(false)` - The stored count changed since it was read; nothing written
    /// - `Err(DbErr)` - Database error during update
    pub async fn compare_and_set_remaining(
        &self,
        id: i32,
        expected: i32,
        remaining: i32,
        status: MemberProductStatus,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::MemberProduct::update_many()
            .filter(entity::member_product::Column::Id.eq(id))
            .filter(entity::member_product::Column::RemainingCount.eq(expected))
            .col_expr(
                entity::member_product::Column::RemainingCount,
                Expr::value(remaining),
            )
            .col_expr(entity::member_product::Column::Status, Expr::value(status))
            .col_expr(entity::member_product::Column::UpdatedAt, Expr::value(Utc::now()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    pub async fn set_status(&self, id: i32, status: MemberProductStatus) -> Result<u64, DbErr> {
        let result = entity::prelude::MemberProduct::update_many()
            .filter(entity::member_product::Column::Id.eq(id))
            .col_expr(entity::member_product::Column::Status, Expr::value(status))
            .col_expr(entity::member_product::Column::UpdatedAt, Expr::value(Utc::now()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Marks one ACTIVE pass EXPIRED if `expires_on` is before `today`.
    ///
    /// # Returns
    /// - `Ok(true)` - The pass was overdue and is now EXPIRED
    /// - `Ok(false)` - The pass is not ACTIVE or not overdue
    pub async fn expire_if_overdue(&self, id: i32, today: NaiveDate) -> Result<bool, DbErr> {
        let result = entity::prelude::MemberProduct::update_many()
            .filter(entity::member_product::Column::Id.eq(id))
            .filter(entity::member_product::Column::Status.eq(MemberProductStatus::Active))
            .filter(entity::member_product::Column::ExpiresOn.lt(today))
            .col_expr(
                entity::member_product::Column::Status,
                Expr::value(MemberProductStatus::Expired),
            )
            .col_expr(entity::member_product::Column::UpdatedAt, Expr::value(Utc::now()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Marks every ACTIVE pass with `expires_on` before `today` EXPIRED.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of passes expired
    /// - `Err(DbErr)` - Database error during update
    pub async fn expire_overdue(&self, today: NaiveDate) -> Result<u64, DbErr> {
        let result = entity::prelude::MemberProduct::update_many()
            .filter(entity::member_product::Column::Status.eq(MemberProductStatus::Active))
            .filter(entity::member_product::Column::ExpiresOn.lt(today))
            .col_expr(
                entity::member_product::Column::Status,
                Expr::value(MemberProductStatus::Expired),
            )
            .col_expr(entity::member_product::Column::UpdatedAt, Expr::value(Utc::now()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Marks ACTIVE passes with nothing left USED_UP. Returns the number changed.
    pub async fn mark_exhausted_used_up(&self) -> Result<u64, DbErr> {
        let result = entity::prelude::MemberProduct::update_many()
            .filter(entity::member_product::Column::Status.eq(MemberProductStatus::Active))
            .filter(entity::member_product::Column::RemainingCount.eq(0))
            .col_expr(
                entity::member_product::Column::Status,
                Expr::value(MemberProductStatus::UsedUp),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Applies a coach override and/or a new expiry date.
    pub async fn update(
        &self,
        id: i32,
        param: UpdateMemberProductParams,
    ) -> Result<Option<MemberProduct>, DbErr> {
        let Some(entity) = entity::prelude::MemberProduct::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::member_product::ActiveModel = entity.into();
        if let Some(coach_id) = param.coach_id {
            active_model.coach_id = ActiveValue::Set(coach_id);
        }
        if let Some(expires_on) = param.expires_on {
            active_model.expires_on = ActiveValue::Set(Some(expires_on));
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Some(MemberProduct::from_entity(entity)))
    }

    pub async fn exists_for_product(&self, product_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::MemberProduct::find()
            .filter(entity::member_product::Column::ProductId.eq(product_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Owners of passes whose coach override is `coach_id`.
    pub async fn member_ids_by_coach(&self, coach_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::MemberProduct::find()
            .select_only()
            .column(entity::member_product::Column::MemberId)
            .filter(entity::member_product::Column::CoachId.eq(coach_id))
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    pub async fn clear_coach(&self, coach_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::MemberProduct::update_many()
            .filter(entity::member_product::Column::CoachId.eq(coach_id))
            .col_expr(
                entity::member_product::Column::CoachId,
                Expr::value(Option::<i32>::None),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
