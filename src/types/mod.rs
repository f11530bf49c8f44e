pub mod range;

pub use range::{parse_dataset, Dataset, Range};
