//! Batch transformer with per-item failure isolation.
//!
//! # Responsibility
//! - Double every numeric item of a batch.
//! - Collect failures per item so one bad element never aborts the batch.
//!
//! # Invariants
//! - Successes keep the original relative order of their inputs.
//! - Failed items are excluded from successes, never replaced or nulled.
//! - No operation in this module panics or returns an error for the batch
//!   as a whole.

use log::error;
use serde_json::{Number, Value};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Untyped batch element; non-numeric values are representable and fail.
pub type BatchItem = Value;

/// Outcome of doubling a batch of untyped items.
pub type DoubledBatch = BatchOutcome<BatchItem, BatchItem, TransformError>;

/// Reason one item could not be transformed.
#[derive(Debug, Clone, PartialEq)]
pub enum TransformError {
    NotNumeric { kind: &'static str },
    Overflow { value: Number },
    NonFinite { value: f64 },
}

impl Display for TransformError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotNumeric { kind } => write!(f, "cannot double a {kind} value"),
            Self::Overflow { value } => write!(f, "doubling {value} overflows"),
            Self::NonFinite { value } => write!(f, "doubling {value} is not finite"),
        }
    }
}

impl Error for TransformError {}

/// One failed item with its position in the input batch.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemFailure<T, E> {
    pub index: usize,
    pub item: T,
    pub error: E,
}

/// Successes and failures of a batch, split into two sequences.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchOutcome<T, U, E> {
    pub successes: Vec<U>,
    pub failures: Vec<ItemFailure<T, E>>,
}

impl<T, U, E> BatchOutcome<T, U, E> {
    /// Whether every input item was transformed.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn into_successes(self) -> Vec<U> {
        self.successes
    }
}

/// Applies `transform` to every item, partitioning results by outcome.
pub fn transform_each<I, T, U, E, F>(items: I, mut transform: F) -> BatchOutcome<T, U, E>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> Result<U, E>,
{
    let mut outcome = BatchOutcome {
        successes: Vec::new(),
        failures: Vec::new(),
    };

    for (index, item) in items.into_iter().enumerate() {
        match transform(&item) {
            Ok(value) => outcome.successes.push(value),
            Err(error) => outcome.failures.push(ItemFailure { index, item, error }),
        }
    }

    outcome
}

/// Doubles one numeric value.
///
/// Non-negative integers are doubled as `u64`, negative ones as `i64`, both
/// with checked arithmetic. Floats must stay finite.
pub fn double_value(item: &BatchItem) -> Result<BatchItem, TransformError> {
    let number = match item {
        Value::Number(number) => number,
        other => {
            return Err(TransformError::NotNumeric {
                kind: value_kind(other),
            })
        }
    };

    if let Some(value) = number.as_u64() {
        return value
            .checked_mul(2)
            .map(Value::from)
            .ok_or_else(|| TransformError::Overflow {
                value: number.clone(),
            });
    }
    if let Some(value) = number.as_i64() {
        return value
            .checked_mul(2)
            .map(Value::from)
            .ok_or_else(|| TransformError::Overflow {
                value: number.clone(),
            });
    }

    let value = number.as_f64().unwrap_or(f64::NAN);
    Number::from_f64(value * 2.0)
        .map(Value::Number)
        .ok_or(TransformError::NonFinite { value })
}

/// Doubles every item and reports successes and failures separately.
pub fn double_all(items: &[BatchItem]) -> DoubledBatch {
    transform_each(items.iter().cloned(), double_value)
}

/// Doubles every item, logging and skipping the ones that fail.
///
/// Writes exactly one error entry per failed item.
pub fn process_batch(items: &[BatchItem]) -> Vec<BatchItem> {
    let outcome = double_all(items);
    for failure in &outcome.failures {
        error!(
            "event=batch_item module=batch status=skipped index={} item={} error=\"{}\"",
            failure.index, failure.item, failure.error
        );
    }
    outcome.into_successes()
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::{double_all, double_value, transform_each, ItemFailure, TransformError};
    use serde_json::json;

    #[test]
    fn doubles_integers_and_floats() {
        assert_eq!(double_value(&json!(21)), Ok(json!(42)));
        assert_eq!(double_value(&json!(-4)), Ok(json!(-8)));
        assert_eq!(double_value(&json!(1.25)), Ok(json!(2.5)));
    }

    #[test]
    fn doubles_past_i64_range_when_result_fits_u64() {
        let big = i64::MAX as u64;
        assert_eq!(double_value(&json!(big)), Ok(json!(big * 2)));
    }

    #[test]
    fn overflow_is_an_item_error() {
        let err = double_value(&json!(i64::MIN)).unwrap_err();
        assert!(matches!(err, TransformError::Overflow { .. }));

        let err = double_value(&json!(u64::MAX)).unwrap_err();
        assert!(matches!(err, TransformError::Overflow { .. }));
    }

    #[test]
    fn non_finite_float_is_an_item_error() {
        let err = double_value(&json!(f64::MAX)).unwrap_err();
        assert_eq!(err, TransformError::NonFinite { value: f64::MAX });
    }

    #[test]
    fn non_numeric_values_name_their_kind() {
        assert_eq!(
            double_value(&json!("x")),
            Err(TransformError::NotNumeric { kind: "string" })
        );
        assert_eq!(
            double_value(&json!(null)),
            Err(TransformError::NotNumeric { kind: "null" })
        );
        assert_eq!(
            double_value(&json!([1])),
            Err(TransformError::NotNumeric { kind: "array" })
        );
    }

    #[test]
    fn double_all_splits_successes_and_failures() {
        let outcome = double_all(&[json!(1), json!("two"), json!(3), json!(true)]);

        assert_eq!(outcome.successes, vec![json!(2), json!(6)]);
        assert_eq!(
            outcome.failures,
            vec![
                ItemFailure {
                    index: 1,
                    item: json!("two"),
                    error: TransformError::NotNumeric { kind: "string" },
                },
                ItemFailure {
                    index: 3,
                    item: json!(true),
                    error: TransformError::NotNumeric { kind: "bool" },
                },
            ]
        );
        assert!(!outcome.is_complete());
    }

    #[test]
    fn transform_each_works_on_typed_items() {
        let outcome = transform_each(vec![4_u8, 200, 7], |n: &u8| n.checked_mul(2).ok_or(*n));

        assert_eq!(outcome.successes, vec![8, 14]);
        assert_eq!(outcome.failures.len(), 1);
        assert_eq!(outcome.failures[0].index, 1);
        assert_eq!(outcome.failures[0].error, 200);
    }

    #[test]
    fn empty_batch_is_complete() {
        let outcome = double_all(&[]);
        assert!(outcome.is_complete());
        assert!(outcome.successes.is_empty());
    }
}
