//! # pagemail-conf
//!
//! Parses a page's YAML config block into per-form settings and resolves
//! the destination addresses for a submission.
//!
//! The config block maps form names to settings under a top-level
//! `mailers` key:
//!
//! ```yaml
//! mailers:
//!   contact:
//!     subject: Online enquiry
//!     from: noreply@example.com
//!     redirect_to: /contact/thanks
//!     recipient_list:
//!       'General questions': support@example.com
//!       'Technical assistance': techsupport@example.com
//!     required_fields:
//!       - name
//!       - email: as_email
//! ```
//!
//! `recipient_list` also accepts the legacy sequence-of-single-entry-maps
//! shape; both canonicalize to the same ordered `(label, address)` pairs.

pub mod resolve;
pub mod settings;

use std::collections::HashMap;

use thiserror::Error;

pub use resolve::{Resolution, resolve_recipients};
pub use settings::{FormSettings, RecipientList, RequiredField};

/// Errors raised while decoding a page's form configuration.
///
/// Configuration errors are developer-facing: the orchestrator propagates
/// them to the host instead of converting them into form errors.
#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("malformed form configuration: {0}")]
	Parse(#[from] serde_yaml::Error),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct ConfigDocument {
	mailers: Option<HashMap<String, FormSettings>>,
}

/// Parse a config block into a mapping from form name to [`FormSettings`].
///
/// Empty (or comment-only) input yields an empty mapping, as does a
/// document without a `mailers` key. Unknown keys are ignored. Only a
/// document that cannot be decoded at all fails with [`ConfigError`].
///
/// # Examples
///
/// ```
/// use pagemail_conf::parse_config;
///
/// let forms = parse_config("mailers:\n  contact:\n    subject: Hi\n").unwrap();
/// assert_eq!(forms["contact"].subject.as_deref(), Some("Hi"));
///
/// assert!(parse_config("").unwrap().is_empty());
/// assert!(parse_config("unrelated: true\n").unwrap().is_empty());
/// ```
pub fn parse_config(text: &str) -> ConfigResult<HashMap<String, FormSettings>> {
	if text.trim().is_empty() {
		return Ok(HashMap::new());
	}
	let doc: Option<ConfigDocument> = serde_yaml::from_str(text)?;
	Ok(doc.and_then(|d| d.mailers).unwrap_or_default())
}
