//! HTTP handlers.
//!
//! Each handler checks access through `AuthGuard`, converts DTOs into
//! service parameters, calls one service and converts the result back.

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
