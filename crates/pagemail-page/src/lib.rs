//! # pagemail-page
//!
//! The request orchestrator. A [`MailerPage`] owns a page's body tree and
//! config block; [`MailerPage::process`] runs one request through it:
//! display requests just render, submissions resolve recipients, validate,
//! assemble the message, and hand it to the delivery backend, then either
//! redirect or re-render (with the form error when something recoverable
//! went wrong).
//!
//! Configuration and tag-usage errors are developer-facing and propagate
//! out of `process`; everything the end user can cause (missing fields,
//! unresolved recipients, a delivery failure) comes back as a rendered
//! page carrying the error banner.

pub mod page;
pub mod request;

use thiserror::Error;

pub use page::{MailerPage, PageOutcome};
pub use request::{Method, PageRequest};

use pagemail_conf::ConfigError;
use pagemail_tags::TagError;

#[derive(Debug, Error)]
pub enum PageError {
	#[error(transparent)]
	Config(#[from] ConfigError),

	#[error(transparent)]
	Tag(#[from] TagError),
}

pub type PageResult<T> = std::result::Result<T, PageError>;
