//! Request-scoped rendering state, passed explicitly down the tree.

use std::collections::HashMap;

use pagemail_conf::FormSettings;
use pagemail_forms::SubmittedForm;

use crate::node::Node;

/// Which kind of choice container an `option` tag is nested in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceKind {
	Select,
	RadioGroup,
}

/// The enclosing `select`/`radiogroup` an `option` consults.
#[derive(Debug, Clone)]
pub struct ChoiceParent {
	pub field: String,
	pub kind: ChoiceKind,
}

/// State threaded through one expansion of a page body.
///
/// Carries the request-independent inputs (parsed config, page URL) and
/// the per-request ones (last submission, form error), plus the mutable
/// nesting state parent tags set for their children. A fresh context is
/// built per render; nothing survives the request.
pub struct RenderContext<'a> {
	config: &'a HashMap<String, FormSettings>,
	page_url: &'a str,
	form_error: Option<&'a str>,
	form_data: Option<&'a SubmittedForm>,
	placeholder_part: Option<&'a [Node]>,
	pub(crate) mailer_name: Option<String>,
	pub(crate) choice_parent: Option<ChoiceParent>,
	pub(crate) radio_count: u32,
}

impl<'a> RenderContext<'a> {
	pub fn new(config: &'a HashMap<String, FormSettings>, page_url: &'a str) -> Self {
		Self {
			config,
			page_url,
			form_error: None,
			form_data: None,
			placeholder_part: None,
			mailer_name: None,
			choice_parent: None,
			radio_count: 0,
		}
	}

	/// Attach the error banner text of a failed submission.
	pub fn with_form_error(mut self, error: &'a str) -> Self {
		self.form_error = Some(error);
		self
	}

	/// Attach the posted data, for `get` tags.
	pub fn with_form_data(mut self, data: &'a SubmittedForm) -> Self {
		self.form_data = Some(data);
		self
	}

	/// Attach the page's submit-placeholder part.
	pub fn with_placeholder_part(mut self, part: &'a [Node]) -> Self {
		self.placeholder_part = Some(part);
		self
	}

	pub(crate) fn config(&self) -> &'a HashMap<String, FormSettings> {
		self.config
	}

	pub(crate) fn page_url(&self) -> &'a str {
		self.page_url
	}

	pub(crate) fn form_error(&self) -> Option<&'a str> {
		self.form_error
	}

	pub(crate) fn form_data(&self) -> Option<&'a SubmittedForm> {
		self.form_data
	}

	pub(crate) fn placeholder_part(&self) -> Option<&'a [Node]> {
		self.placeholder_part
	}

	/// Settings of the form currently being rendered, when inside a
	/// `form` tag whose name the config knows.
	pub(crate) fn current_settings(&self) -> Option<&'a FormSettings> {
		self.mailer_name
			.as_deref()
			.and_then(|name| self.config.get(name))
	}
}
