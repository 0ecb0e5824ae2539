pub mod address;
pub mod amount;

pub use address::{parse_address, shorten_address};
pub use amount::{from_base_units, to_base_units};
