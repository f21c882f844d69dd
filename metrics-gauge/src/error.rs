use thiserror::Error as ThisError;

/// Errors that could occur while resolving a time series.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// The number of label values does not match the number of declared label keys.
    #[error("invalid label count: expected {expected} label values, got {actual}")]
    InvalidLabelCount {
        /// Number of label keys declared by the metric.
        expected: usize,

        /// Number of label values supplied by the caller.
        actual: usize,
    },
}
