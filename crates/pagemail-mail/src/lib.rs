//! # pagemail-mail
//!
//! The mail message model and the delivery seam.
//!
//! A [`MailMessage`] is assembled once per send attempt and handed to a
//! [`MailBackend`]. The backend trait is the whole transport contract:
//! real SMTP delivery lives on the host side of that seam, while the
//! [`ConsoleBackend`] and [`MemoryBackend`] here cover development and
//! tests.
//!
//! Plain and HTML bodies are multipart alternatives; attachments are
//! standard MIME parts with their type detected from the filename. A
//! per-attachment size limit travels with the message (`0` = unlimited);
//! one oversized attachment fails the whole dispatch rather than being
//! silently dropped.

pub mod backends;
pub mod message;

use thiserror::Error;

pub use backends::{ConsoleBackend, MailBackend, MemoryBackend};
pub use message::{Attachment, MailMessage, MailMessageBuilder};

#[derive(Debug, Error)]
pub enum MailError {
	#[error("Missing required field: {0}")]
	MissingField(&'static str),

	#[error("The file {filename} is too large. The maximum size allowed is {limit} bytes.")]
	AttachmentTooLarge { filename: String, limit: u64 },

	#[error("{0}")]
	Delivery(String),
}

pub type MailResult<T> = std::result::Result<T, MailError>;
