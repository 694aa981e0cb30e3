//! Pure field validation for form input.
//!
//! # Responsibility
//! - Check one labeled field value against its optional constraints.
//! - Stay free of side effects so callers can compose checks freely.
//!
//! # Invariants
//! - Unset constraints are vacuously satisfied.
//! - Length constraints apply to textual values only.
//! - Bound constraints apply to numeric values only.

/// One field value as captured from a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Free-text input such as title or description.
    Text(String),
    /// Numeric input such as an assigned people count.
    Number(i64),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn number(value: i64) -> Self {
        Self::Number(value)
    }

    /// String representation used by the `required` check.
    fn as_display_string(&self) -> String {
        match self {
            Self::Text(value) => value.clone(),
            Self::Number(value) => value.to_string(),
        }
    }
}

/// Transient check request: one value plus the constraints that apply to it.
///
/// Constructed by the caller per field, consumed once per `validate` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldCheck {
    /// The value under check.
    pub value: FieldValue,
    /// Trimmed string representation must be nonempty.
    pub required: bool,
    /// Minimum character count for textual values.
    pub min_length: Option<usize>,
    /// Maximum character count for textual values.
    pub max_length: Option<usize>,
    /// Inclusive lower bound for numeric values.
    pub min: Option<i64>,
    /// Inclusive upper bound for numeric values.
    pub max: Option<i64>,
}

impl FieldCheck {
    /// Creates a check with the given value and no constraints.
    pub fn new(value: FieldValue) -> Self {
        Self {
            value,
            required: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
        }
    }
}

/// Returns whether the value passes every applicable constraint.
///
/// All checks are independent; a check whose constraint is unset or whose
/// value kind does not match is vacuously satisfied.
pub fn validate(check: &FieldCheck) -> bool {
    let mut is_valid = true;

    if check.required {
        is_valid = is_valid && !check.value.as_display_string().trim().is_empty();
    }

    if let (Some(min_length), FieldValue::Text(value)) = (check.min_length, &check.value) {
        is_valid = is_valid && value.chars().count() >= min_length;
    }

    if let (Some(max_length), FieldValue::Text(value)) = (check.max_length, &check.value) {
        is_valid = is_valid && value.chars().count() <= max_length;
    }

    if let (Some(min), FieldValue::Number(value)) = (check.min, &check.value) {
        is_valid = is_valid && *value >= min;
    }

    if let (Some(max), FieldValue::Number(value)) = (check.max, &check.value) {
        is_valid = is_valid && *value <= max;
    }

    is_valid
}
