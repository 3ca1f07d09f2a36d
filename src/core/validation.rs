//! # Field Validation
//!
//! Evaluates a declarative rule-set against a single field value.
//!
//! ```text
//! Validatable { value, required?, min_length?, max_length?, min?, max? }
//!                         │
//!                         ▼
//!                    validate()  →  bool
//! ```
//!
//! Every rule is optional. A rule only takes part when it applies to the
//! value's kind:
//!
//! | rule                        | Text | Number |
//! |-----------------------------|------|--------|
//! | `required`                  | yes  | yes    |
//! | `min_length` / `max_length` | yes  | skip   |
//! | `min` / `max`               | skip | yes    |
//!
//! A skipped rule neither passes nor fails. The result is the AND of every
//! applicable rule, so an empty or fully inapplicable rule-set is `true`.

use std::fmt;

/// The run-time value of a form field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

/// A per-call bundle of optional constraints for one value.
#[derive(Debug, Clone, PartialEq)]
pub struct Validatable {
    pub value: FieldValue,
    pub required: Option<bool>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Validatable {
    /// A rule-set with no constraints yet.
    pub fn new(value: impl Into<FieldValue>) -> Self {
        Self {
            value: value.into(),
            required: None,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = Some(true);
        self
    }

    pub fn min_length(mut self, length: usize) -> Self {
        self.min_length = Some(length);
        self
    }

    pub fn max_length(mut self, length: usize) -> Self {
        self.max_length = Some(length);
        self
    }

    pub fn min(mut self, value: f64) -> Self {
        self.min = Some(value);
        self
    }

    pub fn max(mut self, value: f64) -> Self {
        self.max = Some(value);
        self
    }
}

fn required(value: &FieldValue) -> bool {
    // Numbers are coerced to text first, so NaN renders as "NaN" and passes.
    !value.to_string().trim().is_empty()
}

fn min_length(value: &str, length: usize) -> bool {
    value.trim().chars().count() >= length
}

fn max_length(value: &str, length: usize) -> bool {
    value.trim().chars().count() <= length
}

fn min(value: f64, min_value: f64) -> bool {
    value >= min_value
}

fn max(value: f64, max_value: f64) -> bool {
    value <= max_value
}

/// Validate a value against its rule-set. Never errors.
pub fn validate(input: &Validatable) -> bool {
    let mut is_valid = true;

    // A present `required` key applies whatever its flag says.
    if input.required.is_some() {
        is_valid = is_valid && required(&input.value);
    }

    match &input.value {
        FieldValue::Text(text) => {
            if let Some(length) = input.min_length {
                is_valid = is_valid && min_length(text, length);
            }
            if let Some(length) = input.max_length {
                is_valid = is_valid && max_length(text, length);
            }
        }
        FieldValue::Number(number) => {
            if let Some(min_value) = input.min {
                is_valid = is_valid && min(*number, min_value);
            }
            if let Some(max_value) = input.max {
                is_valid = is_valid && max(*number, max_value);
            }
        }
    }

    is_valid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_text_fails_required() {
        assert!(!validate(&Validatable::new("  ").required()));
    }

    #[test]
    fn test_min_length_counts_trimmed_text() {
        assert!(validate(&Validatable::new("hello").required().min_length(5)));
        assert!(!validate(&Validatable::new("hi").required().min_length(5)));
        assert!(!validate(&Validatable::new("  hi   ").min_length(5)));
    }

    #[test]
    fn test_max_length() {
        assert!(validate(&Validatable::new("abc").max_length(3)));
        assert!(!validate(&Validatable::new("abcd").max_length(3)));
    }

    #[test]
    fn test_numeric_bounds() {
        assert!(validate(&Validatable::new(3.0).min(1.0).max(5.0)));
        assert!(!validate(&Validatable::new(6.0).min(1.0).max(5.0)));
        assert!(!validate(&Validatable::new(0.0).min(1.0)));
        assert!(validate(&Validatable::new(1.0).min(1.0)));
        assert!(validate(&Validatable::new(5.0).max(5.0)));
    }

    #[test]
    fn test_numeric_rule_on_text_is_skipped() {
        assert!(validate(&Validatable::new("text").min(1.0)));
        assert!(validate(&Validatable::new("text").max(0.0)));
    }

    #[test]
    fn test_length_rule_on_number_is_skipped() {
        assert!(validate(&Validatable::new(3.0).min_length(10)));
        assert!(validate(&Validatable::new(123456.0).max_length(2)));
    }

    #[test]
    fn test_skipped_rule_does_not_mask_failure() {
        let rules = Validatable::new("").required().min(1.0);
        assert!(!validate(&rules));
    }

    #[test]
    fn test_empty_rule_set_passes() {
        assert!(validate(&Validatable::new("")));
        assert!(validate(&Validatable::new(f64::NAN)));
    }

    #[test]
    fn test_nan_is_present_but_out_of_range() {
        let rules = Validatable::new(f64::NAN).required();
        assert!(validate(&rules));
        assert!(!validate(&rules.min(1.0)));
        assert!(!validate(&Validatable::new(f64::NAN).max(5.0)));
    }

    #[test]
    fn test_present_required_key_applies_even_when_false() {
        let mut rules = Validatable::new("");
        rules.required = Some(false);
        assert!(!validate(&rules));

        rules.value = FieldValue::from("x");
        assert!(validate(&rules));
    }

    #[test]
    fn test_number_display_has_no_trailing_fraction() {
        assert_eq!(FieldValue::Number(3.0).to_string(), "3");
        assert_eq!(FieldValue::Number(2.5).to_string(), "2.5");
    }
}
