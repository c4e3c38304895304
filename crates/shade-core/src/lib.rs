pub mod error;
pub mod tolerance;
pub mod traits;

pub use error::{Result, ShadeError};
pub use tolerance::Tolerance;
