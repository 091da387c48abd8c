pub mod floor;
pub mod hearing;
pub mod hearing_time;
pub mod record;

pub use floor::*;
pub use hearing::*;
pub use hearing_time::*;
pub use record::*;
