//! Mail message and attachment model.

use crate::{MailError, MailResult};

/// A file attachment for an outgoing message.
///
/// # Examples
///
/// ```
/// use pagemail_mail::Attachment;
///
/// let attachment = Attachment::new("report.pdf", b"pdf bytes".to_vec());
/// assert_eq!(attachment.filename(), "report.pdf");
/// assert_eq!(attachment.mime_type(), "application/pdf");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
	filename: String,
	content: Vec<u8>,
	mime_type: String,
}

impl Attachment {
	/// Create an attachment, detecting the MIME type from the filename.
	pub fn new(filename: impl Into<String>, content: Vec<u8>) -> Self {
		let filename = filename.into();
		let mime_type = mime_guess::from_path(&filename)
			.first()
			.map(|mime| mime.to_string())
			.unwrap_or_else(|| "application/octet-stream".to_string());
		Self {
			filename,
			content,
			mime_type,
		}
	}

	/// Override the detected MIME type.
	pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
		self.mime_type = mime_type.into();
		self
	}

	pub fn filename(&self) -> &str {
		&self.filename
	}

	pub fn content(&self) -> &[u8] {
		&self.content
	}

	pub fn mime_type(&self) -> &str {
		&self.mime_type
	}

	/// Size in bytes.
	pub fn size(&self) -> u64 {
		self.content.len() as u64
	}
}

/// An assembled outgoing message.
///
/// Built once per send attempt from the form settings and the submission,
/// then handed to a [`MailBackend`](crate::MailBackend). Fields are
/// private to force construction through the builder.
///
/// # Examples
///
/// ```
/// use pagemail_mail::MailMessage;
///
/// let message = MailMessage::builder()
///     .to(vec!["team@example.com".to_string()])
///     .from("noreply@example.com")
///     .subject("Online enquiry")
///     .plain_body("The following information was posted:")
///     .build()
///     .unwrap();
///
/// assert_eq!(message.to(), ["team@example.com"]);
/// assert_eq!(message.reply_to(), None);
/// ```
#[derive(Debug, Clone)]
pub struct MailMessage {
	to: Vec<String>,
	from: String,
	subject: String,
	plain_body: String,
	html_body: Option<String>,
	cc: Vec<String>,
	reply_to: Option<String>,
	attachments: Vec<Attachment>,
	filesize_limit: u64,
}

impl MailMessage {
	pub fn builder() -> MailMessageBuilder {
		MailMessageBuilder::default()
	}

	pub fn to(&self) -> &[String] {
		&self.to
	}

	pub fn from(&self) -> &str {
		&self.from
	}

	pub fn subject(&self) -> &str {
		&self.subject
	}

	pub fn plain_body(&self) -> &str {
		&self.plain_body
	}

	pub fn html_body(&self) -> Option<&str> {
		self.html_body.as_deref()
	}

	pub fn cc(&self) -> &[String] {
		&self.cc
	}

	pub fn reply_to(&self) -> Option<&str> {
		self.reply_to.as_deref()
	}

	pub fn attachments(&self) -> &[Attachment] {
		&self.attachments
	}

	/// Per-attachment size limit in bytes; 0 means unlimited.
	pub fn filesize_limit(&self) -> u64 {
		self.filesize_limit
	}

	/// Enforce the per-attachment size limit.
	///
	/// Backends call this before accepting a message: any single
	/// attachment over the limit fails the whole dispatch.
	pub fn check_attachment_sizes(&self) -> MailResult<()> {
		if self.filesize_limit == 0 {
			return Ok(());
		}
		for attachment in &self.attachments {
			if attachment.size() > self.filesize_limit {
				return Err(MailError::AttachmentTooLarge {
					filename: attachment.filename().to_string(),
					limit: self.filesize_limit,
				});
			}
		}
		Ok(())
	}
}

#[derive(Debug, Default)]
pub struct MailMessageBuilder {
	to: Vec<String>,
	from: String,
	subject: String,
	plain_body: String,
	html_body: Option<String>,
	cc: Vec<String>,
	reply_to: Option<String>,
	attachments: Vec<Attachment>,
	filesize_limit: u64,
}

impl MailMessageBuilder {
	pub fn to(mut self, to: Vec<String>) -> Self {
		self.to = to;
		self
	}

	pub fn from(mut self, from: impl Into<String>) -> Self {
		self.from = from.into();
		self
	}

	pub fn subject(mut self, subject: impl Into<String>) -> Self {
		self.subject = subject.into();
		self
	}

	pub fn plain_body(mut self, body: impl Into<String>) -> Self {
		self.plain_body = body.into();
		self
	}

	pub fn html_body(mut self, body: impl Into<String>) -> Self {
		self.html_body = Some(body.into());
		self
	}

	pub fn cc(mut self, cc: Vec<String>) -> Self {
		self.cc = cc;
		self
	}

	pub fn reply_to(mut self, reply_to: impl Into<String>) -> Self {
		self.reply_to = Some(reply_to.into());
		self
	}

	pub fn attachment(mut self, attachment: Attachment) -> Self {
		self.attachments.push(attachment);
		self
	}

	pub fn filesize_limit(mut self, limit: u64) -> Self {
		self.filesize_limit = limit;
		self
	}

	/// Build the message.
	///
	/// Requires at least one recipient and a sender address; everything
	/// else may be empty.
	pub fn build(self) -> MailResult<MailMessage> {
		if self.to.is_empty() {
			return Err(MailError::MissingField("to"));
		}
		if self.from.is_empty() {
			return Err(MailError::MissingField("from"));
		}
		Ok(MailMessage {
			to: self.to,
			from: self.from,
			subject: self.subject,
			plain_body: self.plain_body,
			html_body: self.html_body,
			cc: self.cc,
			reply_to: self.reply_to,
			attachments: self.attachments,
			filesize_limit: self.filesize_limit,
		})
	}
}
