use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    data::{facility::FacilitySlotRepository, member_product::MemberProductRepository},
    error::AppError,
    util::jwt::JwtService,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the token service from configuration.
pub fn setup_jwt(config: &Config) -> JwtService {
    JwtService::from_secret_or_random(config.jwt_secret.as_deref(), config.jwt_expiration_minutes)
}

/// Applies in-place data fixes for rows written by older versions.
///
/// Failures are logged and never abort startup.
pub async fn apply_data_patches(db: &DatabaseConnection) {
    match FacilitySlotRepository::new(db).normalize_legacy_days().await {
        Ok(0) => {}
        Ok(updated) => tracing::info!(updated, "Normalized legacy facility slot days"),
        Err(e) => tracing::error!("Failed to normalize facility slot days: {}", e),
    }

    match MemberProductRepository::new(db).mark_exhausted_used_up().await {
        Ok(0) => {}
        Ok(updated) => tracing::info!(updated, "Marked exhausted passes USED_UP"),
        Err(e) => tracing::error!("Failed to mark exhausted passes: {}", e),
    }
}
