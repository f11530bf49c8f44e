pub mod counter;
pub mod generator;
pub mod types;
pub mod util;

pub use counter::{count, count_from_file, count_from_json, count_from_reader, DatasetError};
pub use types::{Dataset, Range};
