//! Login, registration and token validation.
//!
//! Accounts are created unapproved; an administrator approves them before the
//! first login. The very first administrator is created through `init_admin`,
//! which refuses to run once any ADMIN account exists.

use entity::user::Role;
use sea_orm::{ActiveEnum, DatabaseConnection};

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::{permission::AreaPermission, user::CreateUserParams, user::User},
    service::role_permission::RolePermissionService,
    util::{
        jwt::JwtService,
        password::{hash_password, verify_password},
    },
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    jwt: &'a JwtService,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, jwt: &'a JwtService) -> Self {
        Self { db, jwt }
    }

    /// Verifies credentials and issues an access token.
    ///
    /// # Returns
    /// - `Ok((token, User))` - Signed token and the logged-in account
    /// - `Err(AuthError::InvalidCredentials)` - Unknown username or wrong password
    /// - `Err(AuthError::Deactivated)` - Account deactivated
    /// - `Err(AuthError::PendingApproval)` - Account not approved yet
    pub async fn login(&self, username: &str, password: &str) -> Result<(String, User), AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some((user, password_hash)) = user_repo.find_credentials(username).await? else {
            tracing::debug!(username, "Login for unknown username");
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &password_hash) {
            tracing::debug!(user_id = user.id, "Login with wrong password");
            return Err(AuthError::InvalidCredentials.into());
        }

        ensure_usable(&user)?;

        let token = self.jwt.issue(user.id, &user.username, user.role)?;
        user_repo.touch_last_login(user.id).await?;

        tracing::info!(user_id = user.id, role = %user.role.to_value(), "User logged in");

        Ok((token, user))
    }

    /// Creates an unapproved account.
    ///
    /// # Returns
    /// - `Ok(User)` - The new account, `approved = false`
    /// - `Err(AppError::BadRequest)` - Username already taken
    pub async fn register(
        &self,
        username: &str,
        password: &str,
        name: &str,
        role: Role,
    ) -> Result<User, AppError> {
        let user = self.create_account(username, password, name, role, false).await?;

        tracing::info!(user_id = user.id, "Registered account awaiting approval");

        Ok(user)
    }

    /// Decodes a token and re-checks the account it names.
    ///
    /// # Returns
    /// - `Ok(User)` - Token valid and account active and approved
    /// - `Err(AuthError::*)` - Invalid or expired token, unknown user, unusable account
    pub async fn validate(&self, token: &str) -> Result<User, AppError> {
        let claims = self.jwt.validate(token)?;

        let user = UserRepository::new(self.db)
            .find_by_id(claims.sub)
            .await?
            .ok_or(AuthError::UserNotFound(claims.sub))?;

        ensure_usable(&user)?;

        Ok(user)
    }

    /// Creates the first approved administrator.
    ///
    /// # Returns
    /// - `Ok(User)` - The new ADMIN account
    /// - `Err(AppError::BadRequest)` - An administrator already exists or the username is taken
    pub async fn init_admin(
        &self,
        username: &str,
        password: &str,
        name: &str,
    ) -> Result<User, AppError> {
        if UserRepository::new(self.db).admin_exists().await? {
            return Err(AppError::BadRequest(
                "An administrator account already exists".to_string(),
            ));
        }

        let user = self
            .create_account(username, password, name, Role::Admin, true)
            .await?;

        tracing::info!(user_id = user.id, "Initial administrator created");

        Ok(user)
    }

    /// The current account with its effective permission matrix.
    pub async fn me(&self, user_id: i32) -> Result<(User, Vec<AreaPermission>), AppError> {
        let user = UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound(user_id))?;

        let permissions = RolePermissionService::new(self.db)
            .matrix(&user.role.to_value())
            .await?;

        Ok((user, permissions))
    }

    async fn create_account(
        &self,
        username: &str,
        password: &str,
        name: &str,
        role: Role,
        approved: bool,
    ) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);
        let username = username.trim();

        if user_repo.find_by_username(username).await?.is_some() {
            return Err(AppError::BadRequest(format!(
                "Username already exists: {}",
                username
            )));
        }

        let user = user_repo
            .create(CreateUserParams {
                username: username.to_string(),
                password_hash: hash_password(password)?,
                name: name.trim().to_string(),
                role,
                approved,
            })
            .await?;

        Ok(user)
    }
}

/// Deactivation wins over pending approval when both apply.
pub fn ensure_usable(user: &User) -> Result<(), AuthError> {
    if !user.active {
        return Err(AuthError::Deactivated);
    }
    if !user.approved {
        return Err(AuthError::PendingApproval);
    }

    Ok(())
}
