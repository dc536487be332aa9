pub mod photo;
pub mod root;
