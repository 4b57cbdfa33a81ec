pub mod calculations;
pub mod error;
pub mod models;

pub use calculations::{compare, project, simulate};
pub use error::{MAX_AMOUNT, ValidationError};
pub use models::*;
