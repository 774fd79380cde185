//! HTML escaping and unescaping.
//!
//! Escaped characters:
//! - `<` → `&lt;`
//! - `>` → `&gt;`
//! - `&` → `&amp;`
//! - `"` → `&quot;`
//! - `'` → `&#x27;`

/// Escape HTML special characters.
///
/// # Examples
///
/// ```
/// use pagemail_core::escape_html;
///
/// assert_eq!(escape_html("Hello & goodbye"), "Hello &amp; goodbye");
/// assert_eq!(escape_html(r#"<a href="x">"#), "&lt;a href=&quot;x&quot;&gt;");
/// ```
pub fn escape_html(s: &str) -> String {
	let mut out = String::with_capacity(s.len());
	for c in s.chars() {
		match c {
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			'&' => out.push_str("&amp;"),
			'"' => out.push_str("&quot;"),
			'\'' => out.push_str("&#x27;"),
			_ => out.push(c),
		}
	}
	out
}

/// Unescape HTML entities.
///
/// The inverse of [`escape_html`]. Also accepts `&#39;` as an apostrophe,
/// since browsers emit both numeric forms.
///
/// # Examples
///
/// ```
/// use pagemail_core::unescape_html;
///
/// assert_eq!(unescape_html("Choice &amp; Choice"), "Choice & Choice");
/// assert_eq!(unescape_html("&lt;div&gt;"), "<div>");
/// ```
pub fn unescape_html(s: &str) -> String {
	s.replace("&lt;", "<")
		.replace("&gt;", ">")
		.replace("&quot;", "\"")
		.replace("&#x27;", "'")
		.replace("&#39;", "'")
		.replace("&amp;", "&")
}
