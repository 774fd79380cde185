//! Per-form configuration model.

use std::fmt;

use serde::Deserialize;
use serde::de::{self, Deserializer, MapAccess, SeqAccess, Visitor};

/// Configuration for a single mailer form.
///
/// Immutable after parse; keyed by form name within a page's config block.
/// Every key is optional so that a missing config entry degrades to a
/// default (and therefore recipient-less) form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FormSettings {
	/// Subject line used when the submission does not carry one.
	pub subject: Option<String>,
	/// Fixed sender address.
	pub from: Option<String>,
	/// Name of a submitted field whose value becomes the sender address.
	pub from_field: Option<String>,
	/// Fixed carbon-copy address.
	pub cc: Option<String>,
	/// Name of a submitted field whose value becomes the cc address.
	pub cc_field: Option<String>,
	/// Fixed reply-to address.
	pub reply_to: Option<String>,
	/// Name of a submitted field whose value becomes the reply-to address.
	pub reply_to_field: Option<String>,
	/// Where to send the browser after a successful dispatch.
	pub redirect_to: Option<String>,
	/// Required-field declarations, in declaration order.
	pub required_fields: Vec<RequiredField>,
	/// Flat list of destination addresses.
	pub recipients: Option<Vec<String>>,
	/// Named choice list presented to the user.
	pub recipient_list: Option<RecipientList>,
	/// Per-attachment size limit in bytes; 0 means unlimited.
	pub max_filesize: u64,
}

/// A required-field declaration: a field name plus the validator applied
/// to it.
///
/// Deserializes from either a bare field name (validator defaults to
/// `not_blank`) or a single-entry mapping naming the validator:
///
/// ```yaml
/// required_fields:
///   - name
///   - email: as_email
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredField {
	pub name: String,
	pub validator: String,
}

impl RequiredField {
	/// The validator implied by a bare field name.
	pub const DEFAULT_VALIDATOR: &'static str = "not_blank";

	pub fn new(name: impl Into<String>, validator: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			validator: validator.into(),
		}
	}
}

impl<'de> Deserialize<'de> for RequiredField {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		struct RequiredFieldVisitor;

		impl<'de> Visitor<'de> for RequiredFieldVisitor {
			type Value = RequiredField;

			fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
				f.write_str("a field name or a single `field: validator` entry")
			}

			fn visit_str<E>(self, name: &str) -> Result<Self::Value, E>
			where
				E: de::Error,
			{
				Ok(RequiredField::new(name, RequiredField::DEFAULT_VALIDATOR))
			}

			fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
			where
				A: MapAccess<'de>,
			{
				let (name, validator): (String, String) = map
					.next_entry()?
					.ok_or_else(|| de::Error::custom("expected a `field: validator` entry"))?;
				if map.next_entry::<String, String>()?.is_some() {
					return Err(de::Error::custom(
						"a required-field entry must name exactly one field",
					));
				}
				Ok(RequiredField::new(name, validator))
			}
		}

		deserializer.deserialize_any(RequiredFieldVisitor)
	}
}

/// An ordered sequence of `(label, address)` recipient choices.
///
/// Declaration order is user-facing (the labels populate a selection
/// control), so it is preserved. Two legacy config shapes are accepted and
/// canonicalize identically:
///
/// ```yaml
/// recipient_list:            # mapping form
///   'Foo enquiry': foo@example.com
///   'Bar enquiry': bar@example.com
/// ```
///
/// ```yaml
/// recipient_list:            # sequence-of-single-entry-maps form
///   - 'Foo enquiry': foo@example.com
///   - 'Bar enquiry': bar@example.com
/// ```
///
/// Any other shape fails to decode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipientList(Vec<(String, String)>);

impl RecipientList {
	pub fn new(pairs: Vec<(String, String)>) -> Self {
		Self(pairs)
	}

	/// The canonical ordered `(label, address)` pairs.
	pub fn pairs(&self) -> &[(String, String)] {
		&self.0
	}

	/// Declaration-ordered labels, as shown to the user.
	pub fn labels(&self) -> impl Iterator<Item = &str> {
		self.0.iter().map(|(label, _)| label.as_str())
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}
}

impl<'a> IntoIterator for &'a RecipientList {
	type Item = &'a (String, String);
	type IntoIter = std::slice::Iter<'a, (String, String)>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}

impl<'de> Deserialize<'de> for RecipientList {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		struct RecipientListVisitor;

		// A sequence element: exactly one `label: address` pair.
		struct SingleEntry(String, String);

		impl<'de> Deserialize<'de> for SingleEntry {
			fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
			where
				D: Deserializer<'de>,
			{
				struct SingleEntryVisitor;

				impl<'de> Visitor<'de> for SingleEntryVisitor {
					type Value = SingleEntry;

					fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
						f.write_str("a single `label: address` entry")
					}

					fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
					where
						A: MapAccess<'de>,
					{
						let (label, address): (String, String) = map
							.next_entry()?
							.ok_or_else(|| de::Error::custom("expected a `label: address` entry"))?;
						if map.next_entry::<String, String>()?.is_some() {
							return Err(de::Error::custom(
								"a recipient-list entry must name exactly one label",
							));
						}
						Ok(SingleEntry(label, address))
					}
				}

				deserializer.deserialize_map(SingleEntryVisitor)
			}
		}

		impl<'de> Visitor<'de> for RecipientListVisitor {
			type Value = RecipientList;

			fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
				f.write_str("a label-to-address mapping or a sequence of single-entry mappings")
			}

			fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
			where
				A: MapAccess<'de>,
			{
				let mut pairs = Vec::new();
				while let Some((label, address)) = map.next_entry::<String, String>()? {
					pairs.push((label, address));
				}
				Ok(RecipientList(pairs))
			}

			fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
			where
				A: SeqAccess<'de>,
			{
				let mut pairs = Vec::new();
				while let Some(SingleEntry(label, address)) = seq.next_element()? {
					pairs.push((label, address));
				}
				Ok(RecipientList(pairs))
			}
		}

		deserializer.deserialize_any(RecipientListVisitor)
	}
}
