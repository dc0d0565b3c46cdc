//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` builder for
//! customization and a `create_*` convenience function for quick default
//! creation. Factories insert rows directly and skip service-level rules, so
//! tests can arrange states (expired passes, used-up balances, overlapping
//! bookings) that the API would refuse to create.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let member = factory::create_member(&db).await?;
//! let product = factory::product::ProductFactory::new(&db)
//!     .count_pass(10)
//!     .build()
//!     .await?;
//! let pass = factory::member_product::MemberProductFactory::new(&db, member.id, product.id)
//!     .counts(10, 3)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Staff accounts
//! - `coach` - Coaches
//! - `member` - Members
//! - `facility` - Facilities and weekly slots
//! - `product` - Sellable products
//! - `member_product` - Issued passes
//! - `booking` - Facility bookings
//! - `helpers` - Counter and multi-entity helpers

pub mod booking;
pub mod coach;
pub mod facility;
pub mod helpers;
pub mod member;
pub mod member_product;
pub mod product;
pub mod user;

pub use booking::create_booking;
pub use coach::create_coach;
pub use facility::{create_facility, create_slot};
pub use member::create_member;
pub use member_product::create_member_product;
pub use product::create_product;
pub use user::create_user;
