//! Staff account management.
//!
//! This module provides the `UserService` for listing, approving, updating and
//! removing staff accounts. It works with domain models rather than DTOs.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{coach::CoachRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::{
        page::Paginated,
        user::{UpdateUserParams, User},
    },
    util::password::{hash_password, verify_password},
};

/// Service providing business logic for staff accounts.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves all accounts with pagination, ordered by username.
    ///
    /// # Arguments
    /// - `page` - Zero-based page number
    /// - `per_page` - Accounts per page
    ///
    /// # Returns
    /// - `Ok(Paginated<User>)` - Accounts for the requested page with pagination metadata
    /// - `Err(AppError::DbErr)` - Database error during pagination query
    pub async fn list(&self, page: u64, per_page: u64) -> Result<Paginated<User>, AppError> {
        let (users, total) = UserRepository::new(self.db)
            .get_all_paginated(page, per_page)
            .await?;

        Ok(Paginated {
            items: users,
            total,
            page,
            per_page,
        })
    }

    pub async fn get(&self, id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("User", id))
    }

    /// Applies name, role, active flag and coach link changes.
    ///
    /// # Returns
    /// - `Ok(User)` - Updated account
    /// - `Err(AppError::NotFound)` - Account or linked coach does not exist
    pub async fn update(&self, id: i32, param: UpdateUserParams) -> Result<User, AppError> {
        if let Some(Some(coach_id)) = param.coach_id {
            CoachRepository::new(self.db)
                .find_by_id(coach_id)
                .await?
                .ok_or_else(|| AppError::not_found("Coach", coach_id))?;
        }

        let user = UserRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(|| AppError::not_found("User", id))?;

        Ok(user)
    }

    /// Approves a registered account so it can log in.
    pub async fn approve(&self, id: i32) -> Result<User, AppError> {
        let user = UserRepository::new(self.db)
            .set_approved(id, true)
            .await?
            .ok_or_else(|| AppError::not_found("User", id))?;

        tracing::info!(user_id = id, "Account approved");

        Ok(user)
    }

    /// Replaces an account's password.
    ///
    /// `current_password` is required when users change their own password;
    /// administrators resetting someone else's password pass `None`.
    ///
    /// # Returns
    /// - `Ok(())` - Password replaced
    /// - `Err(AppError::NotFound)` - Account does not exist
    /// - `Err(AuthError::InvalidCredentials)` - Current password missing or wrong
    pub async fn change_password(
        &self,
        id: i32,
        current_password: Option<&str>,
        new_password: &str,
        verify_current: bool,
    ) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);

        let stored_hash = user_repo
            .find_password_hash(id)
            .await?
            .ok_or_else(|| AppError::not_found("User", id))?;

        if verify_current {
            let matches = current_password
                .map(|current| verify_password(current, &stored_hash))
                .unwrap_or(false);
            if !matches {
                return Err(AuthError::InvalidCredentials.into());
            }
        }

        user_repo
            .set_password_hash(id, hash_password(new_password)?)
            .await?;

        tracing::info!(user_id = id, "Password changed");

        Ok(())
    }

    /// Deletes an account. Users cannot delete themselves.
    pub async fn delete(&self, id: i32, actor_id: i32) -> Result<(), AppError> {
        if id == actor_id {
            return Err(AppError::BadRequest(
                "You cannot delete your own account".to_string(),
            ));
        }

        let deleted = UserRepository::new(self.db).delete(id).await?;
        if deleted == 0 {
            return Err(AppError::not_found("User", id));
        }

        tracing::info!(user_id = id, "Account deleted");

        Ok(())
    }
}
