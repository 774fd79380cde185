//! The mailer page and its request lifecycle.

use std::collections::HashMap;

use pagemail_conf::{ConfigResult, FormSettings, Resolution, parse_config, resolve_recipients};
use pagemail_forms::{SubmittedForm, form_valid};
use pagemail_mail::{Attachment, MailBackend, MailMessage};
use pagemail_tags::{Node, RenderContext, render};
use tracing::{debug, info, warn};

use crate::request::PageRequest;
use crate::PageResult;

const NO_RECIPIENTS_ERROR: &str = "Email wasn't sent because no recipients are defined";

/// How a processed request terminates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
	/// The rendered page body.
	Rendered(String),
	/// A redirect to the configured target, short-circuiting rendering.
	Redirect(String),
}

/// A page that renders a mail form and dispatches its submissions.
///
/// Holds the page's body tree, the raw config block, and the optional
/// email/email-HTML/submit-placeholder parts; all of them come from the
/// host's page storage.
///
/// # Examples
///
/// ```
/// use pagemail_page::MailerPage;
/// use pagemail_tags::{Node, TagNode};
///
/// let page = MailerPage::new("/contact/", "mailers:\n  contact:\n    recipients:\n      - team@example.com\n")
///     .with_body(vec![Node::from(TagNode::new("form").attr("name", "contact"))]);
/// assert!(!page.cacheable());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MailerPage {
	url: String,
	config_text: String,
	body: Vec<Node>,
	email_part: Option<Vec<Node>>,
	email_html_part: Option<Vec<Node>>,
	placeholder_part: Option<Vec<Node>>,
}

impl MailerPage {
	pub fn new(url: impl Into<String>, config_text: impl Into<String>) -> Self {
		Self {
			url: url.into(),
			config_text: config_text.into(),
			..Self::default()
		}
	}

	/// The page body rendered on display and on error re-render.
	pub fn with_body(mut self, body: Vec<Node>) -> Self {
		self.body = body;
		self
	}

	/// The part rendered into the plain email body.
	pub fn with_email_part(mut self, part: Vec<Node>) -> Self {
		self.email_part = Some(part);
		self
	}

	/// The part rendered into the HTML email body.
	pub fn with_email_html_part(mut self, part: Vec<Node>) -> Self {
		self.email_html_part = Some(part);
		self
	}

	/// The part shown while a submission is in flight.
	pub fn with_placeholder_part(mut self, part: Vec<Node>) -> Self {
		self.placeholder_part = Some(part);
		self
	}

	/// Parse the page's config block.
	pub fn config(&self) -> ConfigResult<HashMap<String, FormSettings>> {
		parse_config(&self.config_text)
	}

	/// Whether the host may result-cache this page. Never: the response
	/// depends on posted data and a submission sends mail.
	pub fn cacheable(&self) -> bool {
		false
	}

	/// Run one request through the page.
	///
	/// Display requests render the body as-is. Submissions resolve the
	/// destination addresses, validate the required fields, and dispatch
	/// through `backend`; recoverable failures re-render the body with
	/// the form error set, a successful dispatch redirects when the form
	/// configures a target.
	pub async fn process(
		&self,
		request: &PageRequest,
		backend: &dyn MailBackend,
	) -> PageResult<PageOutcome> {
		let config = self.config()?;

		if !request.is_post() {
			let html = self.render_body(&config, None, None)?;
			return Ok(PageOutcome::Rendered(html));
		}

		let form_name = request.mailer_name().unwrap_or_default();
		let data = request.form();
		let settings = config.get(form_name).cloned().unwrap_or_default();
		debug!(form = form_name, fields = data.len(), "processing mailer submission");

		let recipients = match resolve_recipients(&settings, data.recipient_choice()) {
			Resolution::Resolved(recipients) => recipients,
			Resolution::Unresolved => {
				warn!(form = form_name, "recipients unresolved, rejecting submission");
				let html = self.render_body(&config, Some(NO_RECIPIENTS_ERROR), Some(data))?;
				return Ok(PageOutcome::Rendered(html));
			}
		};

		let outcome = form_valid(&settings, data);
		if let Some(error) = outcome.error_message() {
			debug!(form = form_name, error = %error, "submission failed validation");
			let html = self.render_body(&config, Some(&error), Some(data))?;
			return Ok(PageOutcome::Rendered(html));
		}

		match self
			.send_mail(&config, &settings, data, request, recipients, backend)
			.await?
		{
			Ok(()) => {
				info!(form = form_name, "mail dispatched");
				if let Some(target) = settings.redirect_to {
					return Ok(PageOutcome::Redirect(target));
				}
				let html = self.render_body(&config, None, Some(data))?;
				Ok(PageOutcome::Rendered(html))
			}
			Err(detail) => {
				warn!(form = form_name, error = %detail, "mail dispatch failed");
				let error = format!("Error encountered while trying to send email. {detail}");
				let html = self.render_body(&config, Some(&error), Some(data))?;
				Ok(PageOutcome::Rendered(html))
			}
		}
	}

	fn render_body(
		&self,
		config: &HashMap<String, FormSettings>,
		error: Option<&str>,
		data: Option<&SubmittedForm>,
	) -> PageResult<String> {
		let mut ctx = RenderContext::new(config, &self.url);
		if let Some(error) = error {
			ctx = ctx.with_form_error(error);
		}
		if let Some(data) = data {
			ctx = ctx.with_form_data(data);
		}
		if let Some(part) = &self.placeholder_part {
			ctx = ctx.with_placeholder_part(part);
		}
		Ok(render(&self.body, &mut ctx)?)
	}

	fn render_part(
		&self,
		part: &[Node],
		config: &HashMap<String, FormSettings>,
		data: &SubmittedForm,
	) -> PageResult<String> {
		let mut ctx = RenderContext::new(config, &self.url).with_form_data(data);
		Ok(render(part, &mut ctx)?)
	}

	/// Assemble and dispatch the message.
	///
	/// The outer `Result` carries developer-facing rendering errors from
	/// the email parts; the inner one is the recoverable dispatch outcome
	/// whose detail becomes the form error.
	async fn send_mail(
		&self,
		config: &HashMap<String, FormSettings>,
		settings: &FormSettings,
		data: &SubmittedForm,
		request: &PageRequest,
		recipients: Vec<String>,
		backend: &dyn MailBackend,
	) -> PageResult<Result<(), String>> {
		let from = field_or_setting(data, &settings.from_field, &settings.from)
			.unwrap_or_else(|| format!("no-reply@{}", request.host()));
		let cc = field_or_setting(data, &settings.cc_field, &settings.cc);
		let reply_to = field_or_setting(data, &settings.reply_to_field, &settings.reply_to)
			.unwrap_or_else(|| from.clone());
		let subject = data
			.text("subject")
			.map(str::to_string)
			.or_else(|| settings.subject.clone())
			.unwrap_or_else(|| format!("Form Mail from {}", request.host()));

		let plain_body = match &self.email_part {
			Some(part) => {
				let rendered = self.render_part(part, config, data)?;
				if rendered.is_empty() {
					self.default_body(data)
				} else {
					rendered
				}
			}
			None => self.default_body(data),
		};
		let html_body = match &self.email_html_part {
			Some(part) => Some(self.render_part(part, config, data)?).filter(|html| !html.trim().is_empty()),
			None => None,
		};

		let mut builder = MailMessage::builder()
			.to(recipients)
			.from(from)
			.subject(subject)
			.plain_body(plain_body)
			.reply_to(reply_to)
			.filesize_limit(settings.max_filesize);
		if let Some(cc) = cc {
			builder = builder.cc(vec![cc]);
		}
		if let Some(html) = html_body {
			builder = builder.html_body(html);
		}
		for upload in data.uploads() {
			builder = builder.attachment(Attachment::new(&upload.filename, upload.content.clone()));
		}

		let message = match builder.build() {
			Ok(message) => message,
			Err(error) => return Ok(Err(error.to_string())),
		};
		Ok(backend.deliver(&message).await.map_err(|e| e.to_string()))
	}

	fn default_body(&self, data: &SubmittedForm) -> String {
		format!("The following information was posted:\n{}", data.to_yaml())
	}
}

/// A submitted field's value when the settings name one, else the fixed
/// configured value.
fn field_or_setting(
	data: &SubmittedForm,
	field: &Option<String>,
	fixed: &Option<String>,
) -> Option<String> {
	field
		.as_deref()
		.and_then(|name| data.text(name))
		.map(str::to_string)
		.or_else(|| fixed.clone())
}
