#[derive(thiserror::Error, Debug)]
pub enum DatasetError {
    #[error("Invalid dataset: {0}")]
    Invalid(String),
    #[error("Couldn't read dataset")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for DatasetError {
    fn from(value: serde_json::Error) -> Self {
        Self::Invalid(format!("The content is not a valid JSON for a dataset: {value}"))
    }
}
