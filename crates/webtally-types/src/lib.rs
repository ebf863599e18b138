pub mod error;
pub mod record;
pub mod summary;

pub use error::SummaryError;
pub use record::*;
pub use summary::*;
