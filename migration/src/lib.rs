pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_user_table;
mod m20260105_000002_create_role_permission_table;
mod m20260105_000003_create_coach_table;
mod m20260105_000004_create_member_table;
mod m20260105_000005_create_facility_table;
mod m20260105_000006_create_facility_slot_table;
mod m20260105_000007_create_product_table;
mod m20260106_000008_create_member_product_table;
mod m20260106_000009_create_booking_table;
mod m20260106_000010_create_attendance_table;
mod m20260106_000011_create_payment_table;
mod m20260106_000012_create_member_product_history_table;
mod m20260107_000013_create_training_log_table;
mod m20260107_000014_create_baseball_record_table;
mod m20260107_000015_create_announcement_table;
mod m20260107_000016_create_message_table;
mod m20260112_000017_add_ledger_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_user_table::Migration),
            Box::new(m20260105_000002_create_role_permission_table::Migration),
            Box::new(m20260105_000003_create_coach_table::Migration),
            Box::new(m20260105_000004_create_member_table::Migration),
            Box::new(m20260105_000005_create_facility_table::Migration),
            Box::new(m20260105_000006_create_facility_slot_table::Migration),
            Box::new(m20260105_000007_create_product_table::Migration),
            Box::new(m20260106_000008_create_member_product_table::Migration),
            Box::new(m20260106_000009_create_booking_table::Migration),
            Box::new(m20260106_000010_create_attendance_table::Migration),
            Box::new(m20260106_000011_create_payment_table::Migration),
            Box::new(m20260106_000012_create_member_product_history_table::Migration),
            Box::new(m20260107_000013_create_training_log_table::Migration),
            Box::new(m20260107_000014_create_baseball_record_table::Migration),
            Box::new(m20260107_000015_create_announcement_table::Migration),
            Box::new(m20260107_000016_create_message_table::Migration),
            Box::new(m20260112_000017_add_ledger_indexes::Migration),
        ]
    }
}
