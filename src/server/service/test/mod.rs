mod attendance;
mod auth;
mod booking;
mod coach;
mod member;
mod member_product;
mod payment;
mod role_permission;
mod training;
