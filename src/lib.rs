//! # pagemail
//!
//! Turns a CMS page into an email contact form.
//!
//! A page carries a YAML config block mapping form names to settings and a
//! body written in a small tag vocabulary. Rendering expands the tags to
//! the form's HTML; a submission is validated against the declared
//! required fields, its destination addresses are resolved from the
//! configuration, and the assembled message goes to a delivery backend.
//! Success redirects (when configured); anything the user can fix comes
//! back as a re-rendered page with the error banner set.
//!
//! The member crates split the concerns:
//!
//! - [`pagemail_conf`] — config parsing and recipient resolution
//! - [`pagemail_forms`] — the submission model and field validation
//! - [`pagemail_mail`] — the message model and delivery backends
//! - [`pagemail_tags`] — the tag vocabulary and its renderer
//! - [`pagemail_page`] — the request orchestrator
//!
//! ## Quick start
//!
//! ```
//! use pagemail::prelude::*;
//!
//! # async fn demo() -> Result<(), pagemail_page::PageError> {
//! let config = "mailers:\n  contact:\n    recipients:\n      - team@example.com\n";
//! let page = MailerPage::new("/contact/", config).with_body(vec![Node::from(
//!     TagNode::new("form")
//!         .attr("name", "contact")
//!         .child(TagNode::new("text").attr("name", "name"))
//!         .child(TagNode::new("submit").attr("value", "Send")),
//! )]);
//!
//! let backend = MemoryBackend::new();
//! let request = PageRequest::post("example.com")
//!     .with_mailer_name("contact")
//!     .with_form(SubmittedForm::new().with_field("name", "Jo"));
//!
//! match page.process(&request, &backend).await? {
//!     PageOutcome::Redirect(target) => println!("redirect to {target}"),
//!     PageOutcome::Rendered(html) => println!("{html}"),
//! }
//! # Ok(())
//! # }
//! ```

pub use pagemail_conf as conf;
pub use pagemail_forms as forms;
pub use pagemail_mail as mail;
pub use pagemail_page as page;
pub use pagemail_tags as tags;

pub use pagemail_core::{escape_html, unescape_html};

/// Convenient re-exports of the commonly used items.
pub mod prelude {
	pub use pagemail_conf::{
		ConfigError, FormSettings, RecipientList, RequiredField, Resolution, parse_config,
		resolve_recipients,
	};
	pub use pagemail_forms::{
		FieldValue, SubmittedForm, UploadedFile, ValidationOutcome, form_valid,
	};
	pub use pagemail_mail::{
		Attachment, ConsoleBackend, MailBackend, MailError, MailMessage, MemoryBackend,
	};
	pub use pagemail_page::{MailerPage, Method, PageError, PageOutcome, PageRequest};
	pub use pagemail_tags::{Node, RenderContext, TagError, TagNode, render};
}
