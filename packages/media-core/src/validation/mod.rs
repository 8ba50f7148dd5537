pub mod key;
pub mod params;

pub use key::validate_filename;
pub use params::{parse_dimension, validate_quality};
