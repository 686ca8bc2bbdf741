pub mod query;

pub use query::parse_leading_int;
