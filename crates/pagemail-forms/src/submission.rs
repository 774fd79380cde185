//! Posted form data for a single request.

use std::collections::{BTreeMap, HashMap};

use serde::ser::{Serialize, SerializeSeq, Serializer};

/// The field that carries the user's recipient choice when a form uses a
/// named recipient list.
pub const RECIPIENT_CHOICE_FIELD: &str = "recipient_choice";

/// A single posted field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
	/// A plain text value.
	Text(String),
	/// Several values posted under one name (checkbox groups, multi-selects).
	Many(Vec<String>),
	/// A binary attachment.
	Upload(UploadedFile),
}

impl FieldValue {
	/// The text content, if this is a plain text value.
	pub fn as_text(&self) -> Option<&str> {
		match self {
			FieldValue::Text(s) => Some(s),
			_ => None,
		}
	}

	/// The upload, if this is a file value.
	pub fn as_upload(&self) -> Option<&UploadedFile> {
		match self {
			FieldValue::Upload(file) => Some(file),
			_ => None,
		}
	}
}

impl From<&str> for FieldValue {
	fn from(s: &str) -> Self {
		FieldValue::Text(s.to_string())
	}
}

impl From<String> for FieldValue {
	fn from(s: String) -> Self {
		FieldValue::Text(s)
	}
}

impl From<Vec<String>> for FieldValue {
	fn from(values: Vec<String>) -> Self {
		FieldValue::Many(values)
	}
}

impl From<UploadedFile> for FieldValue {
	fn from(file: UploadedFile) -> Self {
		FieldValue::Upload(file)
	}
}

// Uploads serialize as their filename: the structured dump of a submission
// is user-facing email body text, not an archive of the bytes.
impl Serialize for FieldValue {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		match self {
			FieldValue::Text(s) => serializer.serialize_str(s),
			FieldValue::Many(values) => {
				let mut seq = serializer.serialize_seq(Some(values.len()))?;
				for value in values {
					seq.serialize_element(value)?;
				}
				seq.end()
			}
			FieldValue::Upload(file) => serializer.serialize_str(&file.filename),
		}
	}
}

/// A file posted through a `file` form control, read fully into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
	pub filename: String,
	pub content: Vec<u8>,
}

impl UploadedFile {
	pub fn new(filename: impl Into<String>, content: Vec<u8>) -> Self {
		Self {
			filename: filename.into(),
			content,
		}
	}

	/// Size in bytes.
	pub fn size(&self) -> usize {
		self.content.len()
	}
}

/// The posted field values of one form submission.
///
/// Created per request and discarded when the request completes.
///
/// # Examples
///
/// ```
/// use pagemail_forms::SubmittedForm;
///
/// let form = SubmittedForm::new()
///     .with_field("name", "Jo Blo")
///     .with_field("email", "jo@example.com");
///
/// assert_eq!(form.text("name"), Some("Jo Blo"));
/// assert_eq!(form.text("missing"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SubmittedForm {
	fields: HashMap<String, FieldValue>,
}

impl SubmittedForm {
	pub fn new() -> Self {
		Self::default()
	}

	/// Builder-style insertion, for assembling a submission inline.
	pub fn with_field(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
		self.insert(name, value);
		self
	}

	pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
		self.fields.insert(name.into(), value.into());
	}

	pub fn get(&self, name: &str) -> Option<&FieldValue> {
		self.fields.get(name)
	}

	/// The text value of a field, when present and textual.
	pub fn text(&self, name: &str) -> Option<&str> {
		self.get(name).and_then(FieldValue::as_text)
	}

	/// The recipient label the user chose, when the form asked for one.
	pub fn recipient_choice(&self) -> Option<&str> {
		self.text(RECIPIENT_CHOICE_FIELD)
	}

	/// Every uploaded file in the submission.
	pub fn uploads(&self) -> impl Iterator<Item = &UploadedFile> {
		self.fields.values().filter_map(FieldValue::as_upload)
	}

	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	pub fn len(&self) -> usize {
		self.fields.len()
	}

	/// A deterministic, key-sorted YAML dump of the submission.
	///
	/// Used for the default email body and the bare `get` tag. Uploads
	/// dump as their filename.
	pub fn to_yaml(&self) -> String {
		let sorted: BTreeMap<&str, &FieldValue> = self
			.fields
			.iter()
			.map(|(name, value)| (name.as_str(), value))
			.collect();
		serde_yaml::to_string(&sorted).unwrap_or_default()
	}
}
