//! Shared helpers for the pagemail crates.
//!
//! Two small concerns live here because several crates need them:
//! HTML escaping/unescaping (form labels round-trip through HTML, so
//! recipient matching has to decode entities) and natural-language text
//! joining for user-facing messages.

pub mod escaping;
pub mod text;

pub use escaping::{escape_html, unescape_html};
pub use text::{capitalize_first, to_sentence};
