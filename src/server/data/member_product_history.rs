//! Ledger repository for pass balance changes.
//!
//! Entries are append-only. The only mutation is `unlink_attendance`, which
//! detaches entries from an attendance record that is being deleted.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::member_product::{LedgerEntry, NewLedgerEntry};

/// Repository providing database operations for ledger entries.
pub struct MemberProductHistoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MemberProductHistoryRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Appends a ledger entry.
    ///
    /// # Arguments
    /// - `param` - Entry values; `remaining_after` must be the balance just written
    ///
    /// # Returns
    /// - `Ok(LedgerEntry)` - The created entry
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: NewLedgerEntry) -> Result<LedgerEntry, DbErr> {
        let entity = entity::member_product_history::ActiveModel {
            member_product_id: ActiveValue::Set(param.member_product_id),
            member_id: ActiveValue::Set(param.member_id),
            kind: ActiveValue::Set(param.kind),
            change_amount: ActiveValue::Set(param.change_amount),
            remaining_after: ActiveValue::Set(param.remaining_after),
            attendance_id: ActiveValue::Set(param.links.attendance_id),
            payment_id: ActiveValue::Set(param.links.payment_id),
            booking_id: ActiveValue::Set(param.links.booking_id),
            description: ActiveValue::Set(param.description),
            created_by: ActiveValue::Set(param.created_by),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(LedgerEntry::from_entity(entity))
    }

    /// Gets the entries of a pass in the order they were written.
    pub async fn find_by_member_product(
        &self,
        member_product_id: i32,
    ) -> Result<Vec<LedgerEntry>, DbErr> {
        let entities = entity::prelude::MemberProductHistory::find()
            .filter(entity::member_product_history::Column::MemberProductId.eq(member_product_id))
            .order_by_asc(entity::member_product_history::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(LedgerEntry::from_entity).collect())
    }

    /// Sum of `change_amount` over every entry of a pass.
    pub async fn sum_changes(&self, member_product_id: i32) -> Result<i64, DbErr> {
        let amounts = entity::prelude::MemberProductHistory::find()
            .select_only()
            .column(entity::member_product_history::Column::ChangeAmount)
            .filter(entity::member_product_history::Column::MemberProductId.eq(member_product_id))
            .into_tuple::<i32>()
            .all(self.db)
            .await?;

        Ok(amounts.into_iter().map(i64::from).sum())
    }

    /// Net balance change per pass of the entries linked to an attendance.
    ///
    /// # Returns
    /// - `Ok(Vec<(member_product_id, net_change)>)` - One row per pass, in pass id order
    /// - `Err(DbErr)` - Database error during query
    pub async fn net_change_by_attendance(
        &self,
        attendance_id: i32,
    ) -> Result<Vec<(i32, i64)>, DbErr> {
        let rows = entity::prelude::MemberProductHistory::find()
            .select_only()
            .column(entity::member_product_history::Column::MemberProductId)
            .column(entity::member_product_history::Column::ChangeAmount)
            .filter(entity::member_product_history::Column::AttendanceId.eq(attendance_id))
            .into_tuple::<(i32, i32)>()
            .all(self.db)
            .await?;

        let mut totals: std::collections::BTreeMap<i32, i64> = std::collections::BTreeMap::new();
        for (member_product_id, change) in rows {
            *totals.entry(member_product_id).or_default() += i64::from(change);
        }

        Ok(totals.into_iter().collect())
    }

    /// Clears `attendance_id` on every entry linked to an attendance.
    pub async fn unlink_attendance(&self, attendance_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::MemberProductHistory::update_many()
            .filter(entity::member_product_history::Column::AttendanceId.eq(attendance_id))
            .col_expr(
                entity::member_product_history::Column::AttendanceId,
                Expr::value(Option::<i32>::None),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
