mod airtable;
mod baserow;
mod error;

pub use airtable::*;
pub use baserow::*;
pub use error::*;
