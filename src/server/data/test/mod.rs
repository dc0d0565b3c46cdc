mod booking;
mod facility_slot;
mod member;
mod member_product;
mod member_product_history;
mod payment;
mod user;
