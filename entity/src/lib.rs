//! SeaORM entity models for the facility management schema.
//!
//! Each module maps one table created by the `migration` crate. Enum columns are
//! stored as strings; their Rust types live next to the entity that owns them.

pub mod prelude;

pub mod announcement;
pub mod attendance;
pub mod baseball_record;
pub mod booking;
pub mod coach;
pub mod facility;
pub mod facility_slot;
pub mod member;
pub mod member_product;
pub mod member_product_history;
pub mod message;
pub mod payment;
pub mod product;
pub mod role_permission;
pub mod training_log;
pub mod user;
