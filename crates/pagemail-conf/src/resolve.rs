//! Recipient resolution for a submission.

use pagemail_core::unescape_html;

use crate::settings::FormSettings;

/// The outcome of recipient resolution.
///
/// Resolution never falls through to an empty list: callers get either a
/// concrete non-empty address list or the definite [`Unresolved`] signal,
/// and must reject the submission in the latter case rather than send to
/// nobody.
///
/// [`Unresolved`]: Resolution::Unresolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
	Resolved(Vec<String>),
	Unresolved,
}

impl Resolution {
	pub fn is_resolved(&self) -> bool {
		matches!(self, Resolution::Resolved(_))
	}
}

/// Determine the destination addresses for a submission.
///
/// When the form carries a `recipient_list`, the chosen label selects one
/// address from it. Labels round-trip through HTML on their way to the
/// browser and back, so both sides are entity-decoded before comparing
/// (`Choice &amp; Choice` in the config matches a posted
/// `Choice & Choice`). The first matching pair wins.
///
/// Without a match, a configured flat `recipients` list is returned
/// verbatim; with neither configured (or an empty list), resolution is
/// [`Resolution::Unresolved`].
///
/// # Examples
///
/// ```
/// use pagemail_conf::{FormSettings, RecipientList, Resolution, resolve_recipients};
///
/// let mut settings = FormSettings::default();
/// settings.recipient_list = Some(RecipientList::new(vec![
///     ("Sales".into(), "sales@example.com".into()),
///     ("Support".into(), "support@example.com".into()),
/// ]));
///
/// assert_eq!(
///     resolve_recipients(&settings, Some("Support")),
///     Resolution::Resolved(vec!["support@example.com".into()])
/// );
/// assert_eq!(resolve_recipients(&settings, Some("Unknown")), Resolution::Unresolved);
/// ```
pub fn resolve_recipients(settings: &FormSettings, chosen: Option<&str>) -> Resolution {
	if let (Some(list), Some(chosen)) = (&settings.recipient_list, chosen) {
		let wanted = unescape_html(chosen);
		for (label, address) in list {
			if unescape_html(label) == wanted {
				return Resolution::Resolved(vec![address.clone()]);
			}
		}
	}
	match &settings.recipients {
		// An empty configured list is as unresolved as no list at all.
		Some(addresses) if !addresses.is_empty() => Resolution::Resolved(addresses.clone()),
		_ => Resolution::Unresolved,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::settings::RecipientList;
	use rstest::rstest;

	fn list_settings() -> FormSettings {
		FormSettings {
			recipient_list: Some(RecipientList::new(vec![
				("A Choice".into(), "a_choice@example.com".into()),
				("Another Choice".into(), "another_choice@example.com".into()),
				("Recipient Choice".into(), "recipient_choice@example.com".into()),
			])),
			..FormSettings::default()
		}
	}

	#[rstest]
	fn test_chosen_label_selects_single_address() {
		// Arrange
		let settings = list_settings();

		// Act
		let resolution = resolve_recipients(&settings, Some("Recipient Choice"));

		// Assert
		assert_eq!(
			resolution,
			Resolution::Resolved(vec!["recipient_choice@example.com".to_string()])
		);
	}

	#[rstest]
	fn test_html_entities_in_stored_label_match_decoded_choice() {
		// Arrange
		let settings = FormSettings {
			recipient_list: Some(RecipientList::new(vec![
				("A Choice".into(), "a_choice@example.com".into()),
				("Choice &amp; Choice".into(), "another_choice@example.com".into()),
			])),
			..FormSettings::default()
		};

		// Act
		let resolution = resolve_recipients(&settings, Some("Choice & Choice"));

		// Assert
		assert_eq!(
			resolution,
			Resolution::Resolved(vec!["another_choice@example.com".to_string()])
		);
	}

	#[rstest]
	fn test_unknown_label_without_fallback_is_unresolved() {
		let settings = list_settings();
		assert_eq!(
			resolve_recipients(&settings, Some("Unknown Recipient")),
			Resolution::Unresolved
		);
	}

	#[rstest]
	fn test_unknown_label_falls_back_to_flat_recipients() {
		// Arrange
		let mut settings = list_settings();
		settings.recipients = Some(vec!["fallback@example.com".to_string()]);

		// Act
		let resolution = resolve_recipients(&settings, Some("Unknown Recipient"));

		// Assert
		assert_eq!(
			resolution,
			Resolution::Resolved(vec!["fallback@example.com".to_string()])
		);
	}

	#[rstest]
	fn test_flat_recipients_returned_verbatim() {
		// Arrange
		let settings = FormSettings {
			recipients: Some(vec![
				"a_choice@example.com".to_string(),
				"another_choice@example.com".to_string(),
			]),
			..FormSettings::default()
		};

		// Act
		let resolution = resolve_recipients(&settings, None);

		// Assert
		assert_eq!(
			resolution,
			Resolution::Resolved(vec![
				"a_choice@example.com".to_string(),
				"another_choice@example.com".to_string(),
			])
		);
	}

	#[rstest]
	fn test_nothing_configured_is_unresolved() {
		assert_eq!(
			resolve_recipients(&FormSettings::default(), Some("Anything")),
			Resolution::Unresolved
		);
	}

	#[rstest]
	fn test_empty_recipients_list_is_unresolved() {
		let settings = FormSettings {
			recipients: Some(vec![]),
			..FormSettings::default()
		};
		assert_eq!(resolve_recipients(&settings, None), Resolution::Unresolved);
	}

	#[rstest]
	fn test_no_chosen_label_falls_back_past_recipient_list() {
		// Arrange
		let mut settings = list_settings();
		settings.recipients = Some(vec!["fallback@example.com".to_string()]);

		// Act
		let resolution = resolve_recipients(&settings, None);

		// Assert
		assert_eq!(
			resolution,
			Resolution::Resolved(vec!["fallback@example.com".to_string()])
		);
	}
}
