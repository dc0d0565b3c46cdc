//! Domain models and operation parameters.
//!
//! Repositories convert SeaORM entity models into these types at the data
//! boundary, services operate on them, and controllers turn them into DTOs.
//! Each `*Params` type carries the input of one service operation.

pub mod attendance;
pub mod auth;
pub mod booking;
pub mod coach;
pub mod facility;
pub mod member;
pub mod member_product;
pub mod message;
pub mod notice;
pub mod page;
pub mod payment;
pub mod permission;
pub mod product;
pub mod training;
pub mod user;
