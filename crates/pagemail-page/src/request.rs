//! The slice of the host's request a mailer page consumes.

use pagemail_forms::SubmittedForm;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
	Get,
	Post,
}

/// One incoming request, as handed over by the page-rendering host.
///
/// # Examples
///
/// ```
/// use pagemail_page::PageRequest;
/// use pagemail_forms::SubmittedForm;
///
/// let request = PageRequest::post("example.com")
///     .with_mailer_name("contact")
///     .with_form(SubmittedForm::new().with_field("name", "Jo"));
/// assert!(request.is_post());
/// ```
#[derive(Debug, Clone)]
pub struct PageRequest {
	method: Method,
	host: String,
	mailer_name: Option<String>,
	form: SubmittedForm,
}

impl PageRequest {
	pub fn get(host: impl Into<String>) -> Self {
		Self::new(Method::Get, host)
	}

	pub fn post(host: impl Into<String>) -> Self {
		Self::new(Method::Post, host)
	}

	pub fn new(method: Method, host: impl Into<String>) -> Self {
		Self {
			method,
			host: host.into(),
			mailer_name: None,
			form: SubmittedForm::new(),
		}
	}

	/// The posted `mailer_name` hidden field.
	pub fn with_mailer_name(mut self, name: impl Into<String>) -> Self {
		self.mailer_name = Some(name.into());
		self
	}

	/// The posted `mailer[...]` field values.
	pub fn with_form(mut self, form: SubmittedForm) -> Self {
		self.form = form;
		self
	}

	pub fn is_post(&self) -> bool {
		self.method == Method::Post
	}

	pub fn host(&self) -> &str {
		&self.host
	}

	pub fn mailer_name(&self) -> Option<&str> {
		self.mailer_name.as_deref()
	}

	pub fn form(&self) -> &SubmittedForm {
		&self.form
	}
}
