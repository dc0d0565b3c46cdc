//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a member holding an active count pass.
///
/// Creates a member, a COUNT_PASS product with `total` sessions and a pass
/// with the full balance remaining. No ledger entry is written.
///
/// # Arguments
/// - `db` - Database connection
/// - `total` - Session count of the pass
///
/// # Returns
/// - `Ok((member, product, member_product))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_member_with_pass(
    db: &DatabaseConnection,
    total: i32,
) -> Result<
    (
        entity::member::Model,
        entity::product::Model,
        entity::member_product::Model,
    ),
    DbErr,
> {
    let member = crate::factory::member::create_member(db).await?;
    let product = crate::factory::product::ProductFactory::new(db)
        .count_pass(total)
        .build()
        .await?;
    let pass = crate::factory::member_product::MemberProductFactory::new(db, member.id, product.id)
        .counts(total, total)
        .build()
        .await?;

    Ok((member, product, pass))
}
