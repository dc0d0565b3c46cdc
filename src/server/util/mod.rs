pub mod day_of_week;
pub mod jwt;
pub mod password;
pub mod phone;
