//! Wire-level DTOs shared by every API endpoint.
//!
//! These types define the JSON bodies accepted and returned by the REST API.
//! Server-side domain models in `server::model` convert to and from them at the
//! controller boundary.

pub mod api;
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
pub mod permission;
pub mod product;
pub mod training;
pub mod user;
