pub mod manager;
pub mod models;
pub mod store;

pub use manager::DatabaseManager;
