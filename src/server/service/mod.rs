//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating multiple repository calls in one transaction
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Ledger Integrity**: Every change to a pass balance goes through `member_product::ledger`

pub mod attendance;
pub mod auth;
pub mod booking;
pub mod coach;
pub mod facility;
pub mod member;
pub mod member_product;
pub mod message;
pub mod notice;
pub mod payment;
pub mod product;
pub mod role_permission;
pub mod training;
pub mod user;

#[cfg(test)]
mod test;
