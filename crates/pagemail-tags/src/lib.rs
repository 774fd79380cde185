//! # pagemail-tags
//!
//! The templating-tag vocabulary that expands to the HTML of a mailer
//! form. The host's template dispatcher hands this crate a pre-parsed
//! tree of [`Node`]s; expansion walks the tree with an explicit
//! [`RenderContext`] threaded through every call, so nesting state
//! (the enclosing form, the select/radiogroup a choice belongs to, the
//! radio id counter) never leaks into globals.
//!
//! ```
//! use std::collections::HashMap;
//! use pagemail_tags::{Node, RenderContext, TagNode, render};
//!
//! let config = HashMap::new();
//! let body = vec![Node::from(
//!     TagNode::new("form")
//!         .attr("name", "contact")
//!         .child(TagNode::new("text").attr("name", "email")),
//! )];
//!
//! let mut ctx = RenderContext::new(&config, "/contact/");
//! let html = render(&body, &mut ctx).unwrap();
//! assert!(html.contains(r#"<input type="text" name="mailer[email]""#));
//! ```

pub mod context;
pub mod node;
pub mod render;

use thiserror::Error;

pub use context::RenderContext;
pub use node::{Node, TagNode};
pub use render::render;

/// A rendering tag used incorrectly.
///
/// Tag errors are developer-facing: they propagate to the host's
/// rendering-error handling instead of becoming form errors.
#[derive(Debug, Error)]
pub enum TagError {
	#[error("`{tag}` tag requires a `{attribute}` attribute")]
	MissingAttribute { tag: String, attribute: String },

	#[error("unknown tag `{0}`")]
	UnknownTag(String),
}

pub type TagResult<T> = std::result::Result<T, TagError>;
