//! Filter parsing errors

use thiserror::Error;

/// Error returned when a filter string cannot be turned into a [`FilterChain`].
///
/// Every variant renders as `invalid filter: <detail>` so callers can surface
/// the message to clients unchanged.
///
/// [`FilterChain`]: super::FilterChain
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("invalid filter: wrong number of filter parts")]
    WrongPartCount,

    #[error("invalid filter: {0} does not exist")]
    UnknownField(String),

    #[error("invalid filter: {0} does not exist")]
    UnknownOperator(String),

    #[error("invalid filter: invalid date range")]
    InvalidDateRange,

    #[error("invalid filter: {0} has a mismatching type")]
    TypeMismatch(String),

    #[error("invalid filter: no filters")]
    NoFilters,

    #[error("invalid filter: {operator} not admitted for {field} filter")]
    OperatorNotAdmitted { operator: String, field: String },
}

impl FilterError {
    /// Stable machine-readable code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::WrongPartCount => "INVALID_FILTER_SHAPE",
            Self::UnknownField(_) => "INVALID_FILTER_FIELD",
            Self::UnknownOperator(_) => "INVALID_FILTER_OPERATOR",
            Self::InvalidDateRange => "INVALID_FILTER_DATE_RANGE",
            Self::TypeMismatch(_) => "INVALID_FILTER_VALUE",
            Self::NoFilters => "INVALID_FILTER_EMPTY",
            Self::OperatorNotAdmitted { .. } => "INVALID_FILTER_IDENTIFIER",
        }
    }
}
