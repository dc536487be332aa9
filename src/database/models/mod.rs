pub mod category;
pub mod photo;
pub mod user;

pub use category::Category;
pub use photo::{CategoryRef, NewPhoto, PhotoChanges, PhotoRecord, PhotoSummary, PhotoView, UserRef};
pub use user::User;
