//! Coach management and student lookup.

use std::collections::BTreeSet;

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        booking::BookingRepository, coach::CoachRepository, member::MemberRepository,
        member_product::MemberProductRepository, product::ProductRepository,
        user::UserRepository,
    },
    error::AppError,
    model::{
        coach::{Coach, CreateCoachParams, UpdateCoachParams},
        member::Member,
    },
};

pub struct CoachService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CoachService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateCoachParams) -> Result<Coach, AppError> {
        let coach = CoachRepository::new(self.db).create(param).await?;

        tracing::info!(coach_id = coach.id, "Coach created");

        Ok(coach)
    }

    pub async fn get(&self, id: i32) -> Result<Coach, AppError> {
        CoachRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Coach", id))
    }

    pub async fn list(&self, active_only: bool) -> Result<Vec<Coach>, AppError> {
        let coaches = CoachRepository::new(self.db).get_all(active_only).await?;

        Ok(coaches)
    }

    pub async fn update(&self, id: i32, param: UpdateCoachParams) -> Result<Coach, AppError> {
        CoachRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(|| AppError::not_found("Coach", id))
    }

    /// Deletes a coach after unlinking it from accounts, members, products,
    /// passes and bookings, all in one transaction.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let users = UserRepository::new(&txn).clear_coach(id).await?;
        let members = MemberRepository::new(&txn).clear_coach(id).await?;
        let products = ProductRepository::new(&txn).clear_coach(id).await?;
        let passes = MemberProductRepository::new(&txn).clear_coach(id).await?;
        let bookings = BookingRepository::new(&txn).clear_coach(id).await?;

        let deleted = CoachRepository::new(&txn).delete(id).await?;
        if deleted == 0 {
            return Err(AppError::not_found("Coach", id));
        }

        txn.commit().await?;

        tracing::info!(
            coach_id = id,
            users,
            members,
            products,
            passes,
            bookings,
            "Coach deleted and references cleared"
        );

        Ok(())
    }

    /// Members taught by a coach.
    ///
    /// Union of members assigned to the coach, owners of passes with the coach
    /// as override and members of bookings with the coach, each member once,
    /// ordered by member id.
    pub async fn students(&self, coach_id: i32) -> Result<Vec<Member>, AppError> {
        self.get(coach_id).await?;

        let member_repo = MemberRepository::new(self.db);
        let mut ids: BTreeSet<i32> = member_repo
            .find_by_coach(coach_id)
            .await?
            .into_iter()
            .map(|member| member.id)
            .collect();

        ids.extend(
            MemberProductRepository::new(self.db)
                .member_ids_by_coach(coach_id)
                .await?,
        );
        ids.extend(
            BookingRepository::new(self.db)
                .member_ids_by_coach(coach_id)
                .await?,
        );

        let ids: Vec<i32> = ids.into_iter().collect();
        let members = member_repo.find_by_ids(&ids).await?;

        Ok(members)
    }

    pub async fn student_count(&self, coach_id: i32) -> Result<usize, AppError> {
        Ok(self.students(coach_id).await?.len())
    }
}
