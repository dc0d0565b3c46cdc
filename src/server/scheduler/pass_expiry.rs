use chrono::Utc;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{error::AppError, service::member_product::MemberProductService};

/// Every day at 00:05 UTC.
const PASS_EXPIRY_SCHEDULE: &str = "0 5 0 * * *";

/// Starts the pass expiry scheduler
///
/// Runs one sweep immediately so passes that lapsed while the server was down
/// are expired before the first request, then schedules the daily sweep.
///
/// # Arguments
/// - `db`: Database connection
pub async fn start_scheduler(db: DatabaseConnection) -> Result<JobScheduler, AppError> {
    run_expiry(&db).await;

    let scheduler = JobScheduler::new().await?;

    let job_db = db.clone();
    let job = Job::new_async(PASS_EXPIRY_SCHEDULE, move |_uuid, _lock| {
        let db = job_db.clone();

        Box::pin(async move {
            run_expiry(&db).await;
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Pass expiry scheduler started");

    Ok(scheduler)
}

/// Expires every ACTIVE pass whose `expires_on` is before today.
///
/// Errors are logged; the next run retries.
async fn run_expiry(db: &DatabaseConnection) {
    let today = Utc::now().date_naive();

    if let Err(e) = MemberProductService::new(db).expire_overdue(today).await {
        tracing::error!("Error expiring overdue passes: {}", e);
    }
}
