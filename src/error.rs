use std::fmt;

use thiserror::Error;

/// Input field that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    OriginalPrice,
    Year,
    Condition,
    BrandTier,
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            InputField::OriginalPrice => "originalPrice",
            InputField::Year => "year",
            InputField::Condition => "condition",
            InputField::BrandTier => "brandTier",
        })
    }
}

/// Errors raised by the valuation engine.
///
/// Only caller input is rejected; config fields are clamped instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValuationError {
    #[error("invalid {field}: {reason}{}", fmt_allowed(.allowed))]
    InvalidInput {
        field: InputField,
        reason: String,
        /// Accepted labels, for enum-like fields.
        allowed: Option<&'static [&'static str]>,
    },
}

impl ValuationError {
    pub fn invalid(field: InputField, reason: impl Into<String>) -> Self {
        ValuationError::InvalidInput {
            field,
            reason: reason.into(),
            allowed: None,
        }
    }

    pub fn not_one_of(
        field: InputField,
        reason: impl Into<String>,
        allowed: &'static [&'static str],
    ) -> Self {
        ValuationError::InvalidInput {
            field,
            reason: reason.into(),
            allowed: Some(allowed),
        }
    }

    pub fn field(&self) -> InputField {
        match self {
            ValuationError::InvalidInput { field, .. } => *field,
        }
    }
}

fn fmt_allowed(allowed: &Option<&'static [&'static str]>) -> String {
    match allowed {
        Some(values) => format!(" (expected one of: {})", values.join(", ")),
        None => String::new(),
    }
}

/// Binary-level error: a message plus the process exit code.
#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl From<ValuationError> for AppError {
    fn from(err: ValuationError) -> Self {
        AppError::new(3, err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_errors_list_allowed_values() {
        let err = ValuationError::not_one_of(
            InputField::Condition,
            "unknown condition 'mint'",
            &["new", "excellent", "good", "fair"],
        );
        assert_eq!(
            err.to_string(),
            "invalid condition: unknown condition 'mint' (expected one of: new, excellent, good, fair)"
        );
        assert_eq!(err.field(), InputField::Condition);
    }

    #[test]
    fn valuation_errors_exit_with_code_3() {
        let err: AppError = ValuationError::invalid(InputField::Year, "out of range").into();
        assert_eq!(err.exit_code(), 3);
        assert_eq!(err.to_string(), "invalid year: out of range");
    }
}
