//! Pass issuing and balance management.
//!
//! `MemberProductService` runs each ledger operation in its own transaction.
//! Services that change a balance as part of a larger write (booking
//! confirmation, check-in, payments) use [`ledger::Ledger`] directly on their
//! own transaction instead.

pub mod ledger;

use chrono::{NaiveDate, Utc};
use entity::member_product::MemberProductStatus;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    config::Defaults,
    data::{
        coach::CoachRepository, member::MemberRepository,
        member_product::MemberProductRepository,
        member_product_history::MemberProductHistoryRepository,
    },
    error::AppError,
    model::member_product::{
        LedgerChange, LedgerCheck, LedgerEntry, MemberProduct, PurchaseParams,
        UpdateMemberProductParams,
    },
    service::member_product::ledger::{Ledger, LedgerWrite},
};

/// Marks the pass EXPIRED when it is past its expiry date.
///
/// Runs outside any caller transaction so the status change survives the
/// rejected ledger write that follows.
pub async fn expire_if_overdue(
    db: &DatabaseConnection,
    id: i32,
    today: NaiveDate,
) -> Result<(), AppError> {
    if MemberProductRepository::new(db)
        .expire_if_overdue(id, today)
        .await?
    {
        tracing::info!(member_product_id = id, "Pass expired on use");
    }

    Ok(())
}

pub struct MemberProductService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberProductService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Issues a pass and its CHARGE entry in one transaction.
    pub async fn purchase(
        &self,
        param: PurchaseParams,
        defaults: &Defaults,
    ) -> Result<MemberProduct, AppError> {
        let today = Utc::now().date_naive();
        let txn = self.db.begin().await?;

        let (pass, _) = Ledger::new(&txn).purchase(param, defaults, today).await?;

        txn.commit().await?;

        Ok(pass)
    }

    /// Consumes sessions from a pass.
    ///
    /// # Returns
    /// - `Ok((MemberProduct, LedgerEntry))` - Updated pass and its DEDUCT entry
    /// - `Err(AppError::NotFound)` - Pass does not exist
    /// - `Err(AppError::BadRequest)` - Pass not usable or short of sessions
    /// - `Err(AppError::Conflict)` - Concurrent balance change
    pub async fn deduct(&self, id: i32, change: LedgerChange) -> Result<LedgerWrite, AppError> {
        let today = Utc::now().date_naive();
        expire_if_overdue(self.db, id, today).await?;

        let txn = self.db.begin().await?;
        let result = Ledger::new(&txn).deduct(id, change, today).await?;
        txn.commit().await?;

        Ok(result)
    }

    pub async fn credit(&self, id: i32, change: LedgerChange) -> Result<LedgerWrite, AppError> {
        let txn = self.db.begin().await?;
        let result = Ledger::new(&txn).credit(id, change).await?;
        txn.commit().await?;

        Ok(result)
    }

    /// Manual correction of the remaining count.
    pub async fn adjust(
        &self,
        id: i32,
        new_remaining: i32,
        change: LedgerChange,
    ) -> Result<LedgerWrite, AppError> {
        let txn = self.db.begin().await?;
        let result = Ledger::new(&txn).adjust(id, new_remaining, change).await?;
        txn.commit().await?;

        tracing::info!(
            member_product_id = id,
            remaining = new_remaining,
            "Pass balance adjusted"
        );

        Ok(result)
    }

    /// Changes the coach override or the expiry date.
    ///
    /// An EXPIRED pass whose new expiry date is today or later becomes ACTIVE
    /// again (USED_UP when nothing is left).
    pub async fn update(
        &self,
        id: i32,
        param: UpdateMemberProductParams,
    ) -> Result<MemberProduct, AppError> {
        if let Some(Some(coach_id)) = param.coach_id {
            CoachRepository::new(self.db)
                .find_by_id(coach_id)
                .await?
                .ok_or_else(|| AppError::not_found("Coach", coach_id))?;
        }

        let repo = MemberProductRepository::new(self.db);
        let extends = param.expires_on;
        let pass = repo
            .update(id, param)
            .await?
            .ok_or_else(|| AppError::not_found("Pass", id))?;

        let today = Utc::now().date_naive();
        if pass.status == MemberProductStatus::Expired && extends.is_some_and(|d| d >= today) {
            let status = if pass.remaining_count == Some(0) {
                MemberProductStatus::UsedUp
            } else {
                MemberProductStatus::Active
            };
            repo.set_status(id, status).await?;

            return repo
                .find_by_id(id)
                .await?
                .ok_or_else(|| AppError::not_found("Pass", id));
        }

        Ok(pass)
    }

    pub async fn get(&self, id: i32) -> Result<MemberProduct, AppError> {
        MemberProductRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Pass", id))
    }

    /// Ledger entries of a pass, oldest first.
    pub async fn history(&self, id: i32) -> Result<Vec<LedgerEntry>, AppError> {
        self.get(id).await?;

        let entries = MemberProductHistoryRepository::new(self.db)
            .find_by_member_product(id)
            .await?;

        Ok(entries)
    }

    pub async fn list_by_member(
        &self,
        member_id: i32,
        status: Option<MemberProductStatus>,
    ) -> Result<Vec<MemberProduct>, AppError> {
        MemberRepository::new(self.db)
            .find_by_id(member_id)
            .await?
            .ok_or_else(|| AppError::not_found("Member", member_id))?;

        let passes = MemberProductRepository::new(self.db)
            .find_by_member(member_id, status)
            .await?;

        Ok(passes)
    }

    /// Remaining count read from storage in a fresh transaction.
    pub async fn fresh_remaining(&self, id: i32) -> Result<Option<i32>, AppError> {
        let txn = self.db.begin().await?;

        let pass = MemberProductRepository::new(&txn)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Pass", id))?;

        txn.commit().await?;

        Ok(pass.remaining_count)
    }

    /// Compares the ledger sum with the stored balance.
    pub async fn verify(&self, id: i32) -> Result<LedgerCheck, AppError> {
        let pass = self.get(id).await?;
        let ledger_sum = MemberProductHistoryRepository::new(self.db)
            .sum_changes(id)
            .await?;

        let check = LedgerCheck {
            member_product_id: id,
            stored_remaining: pass.remaining_count,
            ledger_sum,
        };
        if !check.is_consistent() {
            tracing::warn!(
                member_product_id = id,
                stored = ?check.stored_remaining,
                ledger_sum,
                "Pass balance does not match its ledger"
            );
        }

        Ok(check)
    }

    /// Bulk ACTIVE → EXPIRED for passes with `expires_on` before `today`.
    pub async fn expire_overdue(&self, today: NaiveDate) -> Result<u64, AppError> {
        let expired = MemberProductRepository::new(self.db)
            .expire_overdue(today)
            .await?;

        if expired > 0 {
            tracing::info!(expired, %today, "Expired overdue passes");
        }

        Ok(expired)
    }
}
