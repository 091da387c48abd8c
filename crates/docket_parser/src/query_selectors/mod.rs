pub mod parse_docket;

pub use parse_docket::*;
