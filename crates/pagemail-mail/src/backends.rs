//! Delivery backends.

use std::sync::Mutex;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::message::MailMessage;
use crate::{MailError, MailResult};

/// The transport contract: accept one assembled message.
///
/// Implementations must enforce the message's attachment size limit
/// (via [`MailMessage::check_attachment_sizes`]) before accepting it.
#[async_trait]
pub trait MailBackend: Send + Sync {
	async fn deliver(&self, message: &MailMessage) -> MailResult<()>;
}

/// Development backend: logs the message instead of sending it.
#[derive(Debug, Default)]
pub struct ConsoleBackend;

impl ConsoleBackend {
	pub fn new() -> Self {
		Self
	}
}

#[async_trait]
impl MailBackend for ConsoleBackend {
	async fn deliver(&self, message: &MailMessage) -> MailResult<()> {
		message.check_attachment_sizes()?;
		info!(
			to = ?message.to(),
			from = message.from(),
			subject = message.subject(),
			attachments = message.attachments().len(),
			"mail delivered to console"
		);
		debug!(body = message.plain_body(), "mail body");
		Ok(())
	}
}

/// Test backend: stores every delivered message in memory.
///
/// # Examples
///
/// ```
/// use pagemail_mail::{MailBackend, MailMessage, MemoryBackend};
///
/// # async fn demo() -> Result<(), pagemail_mail::MailError> {
/// let backend = MemoryBackend::new();
/// let message = MailMessage::builder()
///     .to(vec!["team@example.com".to_string()])
///     .from("noreply@example.com")
///     .build()?;
///
/// backend.deliver(&message).await?;
/// assert_eq!(backend.sent().len(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct MemoryBackend {
	sent: Mutex<Vec<MailMessage>>,
}

impl MemoryBackend {
	pub fn new() -> Self {
		Self::default()
	}

	/// Every message delivered so far.
	pub fn sent(&self) -> Vec<MailMessage> {
		self.sent.lock().map(|sent| sent.clone()).unwrap_or_default()
	}

	pub fn clear(&self) {
		if let Ok(mut sent) = self.sent.lock() {
			sent.clear();
		}
	}
}

#[async_trait]
impl MailBackend for MemoryBackend {
	async fn deliver(&self, message: &MailMessage) -> MailResult<()> {
		message.check_attachment_sizes()?;
		self.sent
			.lock()
			.map_err(|_| MailError::Delivery("memory backend poisoned".to_string()))?
			.push(message.clone());
		Ok(())
	}
}
