use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::counter::error::DatasetError;

pub type Dataset = Vec<Range>;

// Inclusive range, `[begin, end]` on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(i64, i64)", into = "(i64, i64)")]
pub struct Range {
    pub begin: i64,
    pub end: i64,
}

impl Range {
    pub fn new(begin: i64, end: i64) -> Self {
        Self { begin, end }
    }

    pub fn try_from_json(index: usize, value: &Value) -> Result<Self, DatasetError> {
        let Some(items) = value.as_array() else {
            return Err(DatasetError::Invalid(format!(
                "Dataset element {index} is not an array"
            )));
        };
        let [begin, end] = items.as_slice() else {
            return Err(DatasetError::Invalid(format!(
                "Dataset element {index} does not have a valid dimension: expected 2 items, got {}",
                items.len()
            )));
        };
        match (begin.as_i64(), end.as_i64()) {
            (Some(begin), Some(end)) => Ok(Self { begin, end }),
            _ => Err(DatasetError::Invalid(format!(
                "Dataset element {index} must contain two integers, got {value}"
            ))),
        }
    }
}

impl From<(i64, i64)> for Range {
    fn from((begin, end): (i64, i64)) -> Self {
        Self { begin, end }
    }
}

impl From<Range> for (i64, i64) {
    fn from(range: Range) -> Self {
        (range.begin, range.end)
    }
}

/// Validates a decoded JSON document as a dataset.
///
/// `null` and `[]` carry no ranges and produce `None`.
pub fn parse_dataset(value: &Value) -> Result<Option<Dataset>, DatasetError> {
    let items = match value {
        Value::Null => return Ok(None),
        Value::Array(items) => items,
        _ => {
            return Err(DatasetError::Invalid(
                "The dataset content is not an array".to_owned(),
            ))
        }
    };
    if items.is_empty() {
        return Ok(None);
    }
    let dataset = items
        .iter()
        .enumerate()
        .map(|(index, item)| Range::try_from_json(index, item))
        .collect::<Result<Dataset, _>>()?;
    Ok(Some(dataset))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_range_serde() {
        let range: Range = serde_json::from_str("[15, 20]").unwrap();
        assert_eq!(range, Range::new(15, 20));
        assert_eq!(serde_json::to_string(&range).unwrap(), "[15,20]");
    }

    #[test]
    fn test_parse_dataset() {
        assert_eq!(parse_dataset(&Value::Null).unwrap(), None);
        assert_eq!(parse_dataset(&json!([])).unwrap(), None);
        assert_eq!(
            parse_dataset(&json!([[1, 10], [15, 20]])).unwrap(),
            Some(vec![Range::new(1, 10), Range::new(15, 20)])
        );
    }

    #[test]
    fn test_parse_invalid_dataset() {
        for value in [
            json!(""),
            json!(42),
            json!({"dataset": [[1, 10]]}),
            json!([1, 1]),
            json!([[1]]),
            json!([[1, 2, 3]]),
            json!([[1, 10], [15]]),
            json!([[1.5, 10]]),
            json!([["1", 10]]),
            json!([[1, 18446744073709551615u64]]),
        ] {
            let err = parse_dataset(&value).unwrap_err();
            assert!(
                matches!(err, DatasetError::Invalid(_)),
                "unexpected error for {value}: {err:?}"
            );
        }
    }
}
