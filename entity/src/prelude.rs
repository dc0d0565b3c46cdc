pub use super::announcement::Entity as Announcement;
pub use super::attendance::Entity as Attendance;
pub use super::baseball_record::Entity as BaseballRecord;
pub use super::booking::Entity as Booking;
pub use super::coach::Entity as Coach;
pub use super::facility::Entity as Facility;
pub use super::facility_slot::Entity as FacilitySlot;
pub use super::member::Entity as Member;
pub use super::member_product::Entity as MemberProduct;
pub use super::member_product_history::Entity as MemberProductHistory;
pub use super::message::Entity as Message;
pub use super::payment::Entity as Payment;
pub use super::product::Entity as Product;
pub use super::role_permission::Entity as RolePermission;
pub use super::training_log::Entity as TrainingLog;
pub use super::user::Entity as User;
