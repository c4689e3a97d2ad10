mod commands;
mod error;
mod models;
mod order;
mod patron;

pub use commands::*;
pub use error::OrderError;
pub use models::MenuItem;
pub use order::*;
pub use patron::Patron;
