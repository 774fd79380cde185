//! Named validators and whole-form validation.

use std::sync::LazyLock;

use pagemail_conf::FormSettings;
use pagemail_core::{capitalize_first, to_sentence};
use regex::Regex;

use crate::submission::{FieldValue, SubmittedForm};

// Deliberately permissive: local-part@domain-label.rest, nowhere near full
// RFC 5322. Good enough to catch "asdf@@" without rejecting real addresses.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[^@]+@[^@.]+\.[^@]+$").expect("EMAIL_REGEX: invalid regex pattern")
});

/// The result of validating a whole submission.
///
/// Computed fresh per validation attempt; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
	Valid,
	/// The field names that failed, in declaration order.
	Invalid { failed: Vec<String> },
}

impl ValidationOutcome {
	pub fn is_valid(&self) -> bool {
		matches!(self, ValidationOutcome::Valid)
	}

	/// The user-facing error string for an invalid outcome.
	///
	/// Failing field names are joined as a natural-language list and
	/// capitalized: `"Email is required."` for a single failure,
	/// `"First-name and email are required."` for several.
	///
	/// # Examples
	///
	/// ```
	/// use pagemail_forms::ValidationOutcome;
	///
	/// let outcome = ValidationOutcome::Invalid {
	///     failed: vec!["name".into(), "email".into()],
	/// };
	/// assert_eq!(outcome.error_message().unwrap(), "Name and email are required.");
	/// ```
	pub fn error_message(&self) -> Option<String> {
		match self {
			ValidationOutcome::Valid => None,
			ValidationOutcome::Invalid { failed } => {
				let verb = if failed.len() == 1 { "is" } else { "are" };
				Some(format!(
					"{} {} required.",
					capitalize_first(&to_sentence(failed)),
					verb
				))
			}
		}
	}
}

/// Apply a named validator to a submitted value.
///
/// - `not_blank`: text with non-whitespace content, a non-empty
///   multi-value, or any upload; a missing field is invalid.
/// - `as_email`: text matching the permissive address pattern; anything
///   else (missing, multi-value, upload) is invalid.
/// - any other name is a no-op: always valid, even for missing fields.
pub fn is_valid(validator: &str, value: Option<&FieldValue>) -> bool {
	match validator {
		"not_blank" => match value {
			Some(FieldValue::Text(s)) => !s.trim().is_empty(),
			Some(FieldValue::Many(values)) => !values.is_empty(),
			Some(FieldValue::Upload(_)) => true,
			None => false,
		},
		"as_email" => match value {
			Some(FieldValue::Text(s)) => EMAIL_REGEX.is_match(s),
			_ => false,
		},
		_ => true,
	}
}

/// Validate every required field of a submission.
///
/// Failures are collected in declaration order, so the error message lists
/// fields the way the form declares them.
pub fn form_valid(settings: &FormSettings, submitted: &SubmittedForm) -> ValidationOutcome {
	let failed: Vec<String> = settings
		.required_fields
		.iter()
		.filter(|field| !is_valid(&field.validator, submitted.get(&field.name)))
		.map(|field| field.name.clone())
		.collect();
	if failed.is_empty() {
		ValidationOutcome::Valid
	} else {
		ValidationOutcome::Invalid { failed }
	}
}
