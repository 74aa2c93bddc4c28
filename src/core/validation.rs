//! Structural validation for create/update requests.
//!
//! Rules are declared per request type by implementing [`Validate`] with a
//! [`Validator`] chain. Every violated field is collected so the caller sees the
//! complete list rather than only the first failure.

use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

use crate::core::error::{AppError, Result};

/// Request types that declare field rules
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// A single violated rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

/// All violations found for one request, in declaration order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationErrors(pub Vec<FieldViolation>);

impl ValidationErrors {
    pub fn fields(&self) -> Vec<&'static str> {
        self.0.iter().map(|v| v.field).collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", violation.field, violation.message)?;
        }
        Ok(())
    }
}

/// Builder that accumulates field violations
#[derive(Debug, Default)]
pub struct Validator {
    violations: Vec<FieldViolation>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    fn violation(mut self, field: &'static str, message: String) -> Self {
        self.violations.push(FieldViolation { field, message });
        self
    }

    /// Non-blank string whose length (in chars) lies in `min..=max`
    pub fn required(self, field: &'static str, value: &str, min: usize, max: usize) -> Self {
        if value.trim().is_empty() {
            return self.violation(field, "is required".to_string());
        }
        let len = value.chars().count();
        if len < min || len > max {
            return self.violation(
                field,
                format!("must be between {} and {} characters", min, max),
            );
        }
        self
    }

    /// Optional string capped at `max` chars
    pub fn max_len(self, field: &'static str, value: &str, max: usize) -> Self {
        if value.chars().count() > max {
            return self.violation(field, format!("must be at most {} characters", max));
        }
        self
    }

    /// Required string that looks like an email address
    pub fn email(self, field: &'static str, value: &str, max: usize) -> Self {
        let before = self.violations.len();
        let checked = self.required(field, value, 1, max);
        if checked.violations.len() > before {
            return checked;
        }
        match value.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => checked,
            _ => checked.violation(field, "must be a valid email address".to_string()),
        }
    }

    pub fn min_i64(self, field: &'static str, value: i64, min: i64) -> Self {
        if value < min {
            return self.violation(field, format!("must be at least {}", min));
        }
        self
    }

    pub fn min_u64(self, field: &'static str, value: u64, min: u64) -> Self {
        if value < min {
            return self.violation(field, format!("must be at least {}", min));
        }
        self
    }

    pub fn decimal_range(
        self,
        field: &'static str,
        value: Decimal,
        min: Decimal,
        max: Option<Decimal>,
    ) -> Self {
        if value < min {
            return self.violation(field, format!("must be at least {}", min));
        }
        match max {
            Some(max) if value > max => {
                self.violation(field, format!("must be at most {}", max))
            }
            _ => self,
        }
    }

    /// Trailing zeros do not count, so `1.230` passes a two-place limit
    pub fn max_scale(self, field: &'static str, value: Decimal, scale: u32) -> Self {
        if value.normalize().scale() > scale {
            return self.violation(
                field,
                format!("must have at most {} decimal places", scale),
            );
        }
        self
    }

    pub fn finish(self) -> Result<()> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(ValidationErrors(self.violations)))
        }
    }
}
