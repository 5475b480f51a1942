pub mod clock;
pub mod error;

pub use clock::{local_now, month_bounds, Clock};
pub use error::{AppError, Result};
