//! Argument values passed in by the query engine.

use std::borrow::Cow;

use crate::error::{GraphError, GraphResult};

/// A single positional argument.
///
/// Columns arrive either as `u32` already or as engine-native `i64`, which
/// is range-checked on decode.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    Null,
    Long(i64),
    Double(f64),
    Text(String),
    UintColumn(Vec<u32>),
    LongColumn(Vec<i64>),
}

impl ArgValue {
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, ArgValue::Null)
    }

    /// Engine-facing type name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            ArgValue::Null => "null",
            ArgValue::Long(_) => "long",
            ArgValue::Double(_) => "double",
            ArgValue::Text(_) => "text",
            ArgValue::UintColumn(_) => "uint32 column",
            ArgValue::LongColumn(_) => "long column",
        }
    }

    /// Decode as an unsigned 32-bit column.
    ///
    /// # Errors
    /// * `GraphError::InvalidArgument` - not a column, or an `i64` element
    ///   outside `0..=u32::MAX`
    pub fn as_uint_column(&self, index: usize, name: &'static str) -> GraphResult<Cow<'_, [u32]>> {
        match self {
            ArgValue::UintColumn(values) => Ok(Cow::Borrowed(values.as_slice())),
            ArgValue::LongColumn(values) => values
                .iter()
                .enumerate()
                .map(|(pos, &v)| {
                    u32::try_from(v).map_err(|_| GraphError::InvalidArgument {
                        index,
                        name,
                        reason: format!("element {} ({}) is outside the uint32 range", pos, v),
                    })
                })
                .collect::<GraphResult<Vec<u32>>>()
                .map(Cow::Owned),
            other => Err(GraphError::InvalidArgument {
                index,
                name,
                reason: format!("expected a repeated uint32 column, got {}", other.type_name()),
            }),
        }
    }

    /// The first `limit` elements of a column, without decoding the rest.
    ///
    /// `i64` elements outside the `u32` range are skipped rather than
    /// reported; use [`ArgValue::as_uint_column`] for checked decoding.
    pub fn uint_prefix(&self, limit: usize) -> Option<Cow<'_, [u32]>> {
        match self {
            ArgValue::UintColumn(values) => {
                Some(Cow::Borrowed(&values[..limit.min(values.len())]))
            }
            ArgValue::LongColumn(values) => Some(Cow::Owned(
                values
                    .iter()
                    .take(limit)
                    .filter_map(|&v| u32::try_from(v).ok())
                    .collect(),
            )),
            _ => None,
        }
    }

    /// Length if this argument is a column.
    pub fn column_len(&self) -> Option<usize> {
        match self {
            ArgValue::UintColumn(values) => Some(values.len()),
            ArgValue::LongColumn(values) => Some(values.len()),
            _ => None,
        }
    }
}

impl From<Vec<u32>> for ArgValue {
    fn from(values: Vec<u32>) -> Self {
        ArgValue::UintColumn(values)
    }
}

impl From<Vec<i64>> for ArgValue {
    fn from(values: Vec<i64>) -> Self {
        ArgValue::LongColumn(values)
    }
}
