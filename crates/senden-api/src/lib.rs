pub mod error;
pub mod sheets;

pub use error::SheetsError;
pub use sheets::{ServiceAccountConfig, SheetsClient};
