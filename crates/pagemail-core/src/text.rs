//! Natural-language text helpers for user-facing strings.

/// Join words into a natural-language sentence fragment.
///
/// Two items are joined with `" and "`, three or more with commas and a
/// final `", and "`.
///
/// # Examples
///
/// ```
/// use pagemail_core::to_sentence;
///
/// assert_eq!(to_sentence(&["name"]), "name");
/// assert_eq!(to_sentence(&["name", "email"]), "name and email");
/// assert_eq!(to_sentence(&["name", "email", "phone"]), "name, email, and phone");
/// ```
pub fn to_sentence<S: AsRef<str>>(items: &[S]) -> String {
	match items {
		[] => String::new(),
		[only] => only.as_ref().to_string(),
		[first, second] => format!("{} and {}", first.as_ref(), second.as_ref()),
		[init @ .., last] => {
			let head = init
				.iter()
				.map(|s| s.as_ref())
				.collect::<Vec<_>>()
				.join(", ");
			format!("{}, and {}", head, last.as_ref())
		}
	}
}

/// Upper-case the first character of a string.
///
/// # Examples
///
/// ```
/// use pagemail_core::capitalize_first;
///
/// assert_eq!(capitalize_first("name and email"), "Name and email");
/// assert_eq!(capitalize_first(""), "");
/// ```
pub fn capitalize_first(s: &str) -> String {
	let mut chars = s.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
		None => String::new(),
	}
}
