//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to keep the data layer separate from business logic. Repositories that
//! take part in service transactions are generic over `ConnectionTrait` so they accept
//! either a `DatabaseConnection` or a `DatabaseTransaction`.

pub mod announcement;
pub mod attendance;
pub mod baseball_record;
pub mod booking;
pub mod coach;
pub mod facility;
pub mod member;
pub mod member_product;
pub mod member_product_history;
pub mod message;
pub mod payment;
pub mod product;
pub mod role_permission;
pub mod training_log;
pub mod user;

#[cfg(test)]
mod test;
