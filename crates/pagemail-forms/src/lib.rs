//! # pagemail-forms
//!
//! The submitted-form model and required-field validation.
//!
//! A submission maps field names to values: plain text, multi-value (a
//! group of checkboxes posts an array), or a file upload. Validation runs
//! every declared required field through its named validator and collects
//! the failures in declaration order, ready to be turned into the
//! user-facing error string.

pub mod submission;
pub mod validation;

pub use submission::{FieldValue, RECIPIENT_CHOICE_FIELD, SubmittedForm, UploadedFile};
pub use validation::{ValidationOutcome, form_valid, is_valid};
