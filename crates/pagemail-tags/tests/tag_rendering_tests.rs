//! Tag rendering integration tests
//!
//! Covers the whole vocabulary: the form wrapper, the input family,
//! choice containers and their options, recipient selection, address
//! obfuscation, and submitted-value rendering. Attribute output is
//! sorted by name, so expectations are exact strings.

use std::collections::HashMap;

use pagemail_conf::{FormSettings, parse_config};
use pagemail_forms::{SubmittedForm, UploadedFile};
use pagemail_tags::{Node, RenderContext, TagError, TagNode, render};
use rstest::rstest;

fn no_config() -> HashMap<String, FormSettings> {
	HashMap::new()
}

fn render_one(tag: TagNode, config: &HashMap<String, FormSettings>) -> Result<String, TagError> {
	let mut ctx = RenderContext::new(config, "/contact/");
	render(&[Node::from(tag)], &mut ctx)
}

// =========================================================================
// form
// =========================================================================

#[rstest]
fn test_form_wrapper_and_hidden_name_field() {
	// Arrange
	let config = no_config();
	let tag = TagNode::new("form").attr("name", "contact");

	// Act
	let html = render_one(tag, &config).unwrap();

	// Assert
	assert!(html.starts_with(
		r#"<form action="/contact/" method="post" enctype="multipart/form-data" class="mailer-form">"#
	));
	assert!(html.contains(r#"<div><input type="hidden" name="mailer_name" value="contact" /></div>"#));
	assert!(html.contains("</form>"));
	assert!(html.contains("function disableSubmitButtons()"));
	assert!(!html.contains("mailer-error"));
}

#[rstest]
fn test_form_renders_error_banner_after_failed_submission() {
	// Arrange
	let config = no_config();
	let body = vec![Node::from(TagNode::new("form").attr("name", "contact"))];
	let mut ctx = RenderContext::new(&config, "/contact/").with_form_error("Email is required.");

	// Act
	let html = render(&body, &mut ctx).unwrap();

	// Assert
	assert!(html.contains(r#"<div class="mailer-error">Email is required.</div>"#));
}

#[rstest]
fn test_form_requires_name() {
	let result = render_one(TagNode::new("form"), &no_config());
	assert!(matches!(
		result,
		Err(TagError::MissingAttribute { tag, .. }) if tag == "form"
	));
}

#[rstest]
fn test_form_class_can_be_overridden() {
	let html = render_one(
		TagNode::new("form").attr("name", "contact").attr("class", "fancy"),
		&no_config(),
	)
	.unwrap();
	assert!(html.contains(r#"class="fancy""#));
	assert!(!html.contains("mailer-form\""));
}

// =========================================================================
// input family
// =========================================================================

#[rstest]
fn test_text_input_defaults() {
	let html = render_one(TagNode::new("text").attr("name", "email"), &no_config()).unwrap();
	assert_eq!(
		html,
		r#"<input type="text" name="mailer[email]" class="mailer-field" id="email" value="" />"#
	);
}

#[rstest]
fn test_hidden_input_gets_no_class() {
	let html = render_one(TagNode::new("hidden").attr("name", "token"), &no_config()).unwrap();
	assert_eq!(
		html,
		r#"<input type="hidden" name="mailer[token]" id="token" value="" />"#
	);
}

#[rstest]
fn test_checkbox_input_class() {
	let html = render_one(TagNode::new("checkbox").attr("name", "agree"), &no_config()).unwrap();
	assert_eq!(
		html,
		r#"<input type="checkbox" name="mailer[agree]" class="mailer-option" id="agree" value="" />"#
	);
}

#[rstest]
fn test_explicit_attributes_override_defaults_and_sort() {
	// Arrange
	let tag = TagNode::new("text")
		.attr("name", "email")
		.attr("value", "prefilled")
		.attr("class", "wide");

	// Act
	let html = render_one(tag, &no_config()).unwrap();

	// Assert
	assert_eq!(
		html,
		r#"<input type="text" name="mailer[email]" class="wide" id="email" value="prefilled" />"#
	);
}

#[rstest]
#[case("text")]
#[case("password")]
#[case("file")]
#[case("checkbox")]
#[case("radio")]
#[case("hidden")]
fn test_input_tags_require_name(#[case] tag_name: &str) {
	let result = render_one(TagNode::new(tag_name), &no_config());
	assert!(matches!(result, Err(TagError::MissingAttribute { .. })));
}

#[rstest]
fn test_submit_forces_wire_name_and_click_behavior() {
	// Arrange
	let tag = TagNode::new("submit").attr("name", "ignored").attr("value", "Send");

	// Act
	let html = render_one(tag, &no_config()).unwrap();

	// Assert
	assert_eq!(
		html,
		r#"<input type="submit" name="mailer[mailer-form-button]" class="mailer-button" id="mailer-form-button" onclick="showSubmitPlaceholder()" value="Send" />"#
	);
}

#[rstest]
fn test_image_submit_without_name() {
	let html = render_one(TagNode::new("image").attr("src", "/go.png"), &no_config()).unwrap();
	assert_eq!(
		html,
		r#"<input type="image" name="mailer[mailer-form-button]" id="mailer-form-button" onclick="showSubmitPlaceholder()" src="/go.png" value="" />"#
	);
}

#[rstest]
fn test_reset_needs_no_name() {
	let html = render_one(TagNode::new("reset"), &no_config()).unwrap();
	assert_eq!(html, r#"<input type="reset" class="mailer-button" value="" />"#);
}

#[rstest]
fn test_textarea_defaults_and_content() {
	let html = render_one(
		TagNode::new("textarea").attr("name", "message").text("hello"),
		&no_config(),
	)
	.unwrap();
	assert_eq!(
		html,
		r#"<textarea name="mailer[message]" class="mailer-field" cols="35" id="message" rows="5">hello</textarea>"#
	);
}

// =========================================================================
// select / radiogroup / option
// =========================================================================

#[rstest]
fn test_select_with_options() {
	// Arrange
	let tag = TagNode::new("select")
		.attr("name", "flavour")
		.child(TagNode::new("option").attr("name", "Vanilla"))
		.child(TagNode::new("option").attr("name", "Chocolate").attr("value", "choc"));

	// Act
	let html = render_one(tag, &no_config()).unwrap();

	// Assert
	assert_eq!(
		html,
		concat!(
			r#"<select name="mailer[flavour]" class="mailer-field" id="flavour" size="1">"#,
			r#"<option value="Vanilla">Vanilla</option>"#,
			r#"<option value="choc">Chocolate</option>"#,
			r#"</select>"#
		)
	);
}

#[rstest]
fn test_radiogroup_numbers_options_within_group() {
	// Arrange
	let tag = TagNode::new("radiogroup")
		.attr("name", "color")
		.child(TagNode::new("option").attr("name", "Red"))
		.child(TagNode::new("option").attr("name", "Blue"));

	// Act
	let html = render_one(tag, &no_config()).unwrap();

	// Assert
	assert_eq!(
		html,
		concat!(
			r#"<label for="color_1"><input type="radio" name="mailer[color]" class="mailer-option" id="color_1" value="Red" /><span>Red</span></label>"#,
			r#"<label for="color_2"><input type="radio" name="mailer[color]" class="mailer-option" id="color_2" value="Blue" /><span>Blue</span></label>"#
		)
	);
}

#[rstest]
fn test_radio_ids_restart_for_each_group() {
	// Arrange
	let body = vec![
		Node::from(
			TagNode::new("radiogroup")
				.attr("name", "size")
				.child(TagNode::new("option").attr("name", "S")),
		),
		Node::from(
			TagNode::new("radiogroup")
				.attr("name", "color")
				.child(TagNode::new("option").attr("name", "Red")),
		),
	];
	let config = no_config();
	let mut ctx = RenderContext::new(&config, "/contact/");

	// Act
	let html = render(&body, &mut ctx).unwrap();

	// Assert
	assert!(html.contains(r#"for="size_1""#));
	assert!(html.contains(r#"for="color_1""#));
}

#[rstest]
fn test_orphan_option_renders_nothing() {
	let html = render_one(TagNode::new("option").attr("name", "Lost"), &no_config()).unwrap();
	assert_eq!(html, "");
}

// =========================================================================
// selectrecipient
// =========================================================================

const RECIPIENT_CONFIG: &str = r#"
mailers:
  enquiry:
    recipient_list:
      - 'Foo enquiry': 'foo@example.com'
      - 'Bar enquiry': 'bar@example.com'
      - 'Baz application': 'baz@example.com'
"#;

#[rstest]
fn test_selectrecipient_renders_labels_in_declaration_order() {
	// Arrange
	let config = parse_config(RECIPIENT_CONFIG).unwrap();
	let tag = TagNode::new("form")
		.attr("name", "enquiry")
		.child(TagNode::new("selectrecipient"));

	// Act
	let html = render_one(tag, &config).unwrap();

	// Assert
	assert!(html.contains(concat!(
		r#"<select name="mailer[recipient_choice]" class="mailer-field" id="recipient_choice">"#,
		r#"<option value="Foo enquiry">Foo enquiry</option>"#,
		r#"<option value="Bar enquiry">Bar enquiry</option>"#,
		r#"<option value="Baz application">Baz application</option>"#,
		r#"</select>"#
	)));
}

#[rstest]
fn test_selectrecipient_without_recipient_list_is_empty_select() {
	// Arrange
	let config = parse_config("mailers:\n  enquiry:\n    subject: Hi\n").unwrap();
	let tag = TagNode::new("form")
		.attr("name", "enquiry")
		.child(TagNode::new("selectrecipient"));

	// Act
	let html = render_one(tag, &config).unwrap();

	// Assert
	assert!(html.contains(
		r#"<select name="mailer[recipient_choice]" class="mailer-field" id="recipient_choice"></select>"#
	));
}

// =========================================================================
// email_option
// =========================================================================

#[rstest]
fn test_email_option_obfuscates_recognized_address() {
	// Arrange
	let tag = TagNode::new("email_option").text("me@example.com");

	// Act
	let html = render_one(tag, &no_config()).unwrap();

	// Assert
	assert!(html.contains("mail4('me', 'example', 0, \"me\")"));
	assert!(html.contains("<script type=\"text/javascript\">"));
}

#[rstest]
fn test_email_option_with_address_and_label_children() {
	// Arrange
	let tag = TagNode::new("email_option")
		.child(TagNode::new("address").text(" sales@widgets.biz "))
		.child(TagNode::new("label").text("Contact sales"));

	// Act
	let html = render_one(tag, &no_config()).unwrap();

	// Assert
	assert!(html.contains("mail4('sales', 'widgets', 7, \"Contact sales\")"));
}

#[rstest]
#[case("me@example.dev")]
#[case("me@example.xyz")]
fn test_email_option_unrecognized_tld_renders_nothing(#[case] address: &str) {
	let html = render_one(TagNode::new("email_option").text(address), &no_config()).unwrap();
	assert_eq!(html, "");
}

#[rstest]
fn test_email_option_non_address_renders_nothing() {
	let html = render_one(
		TagNode::new("email_option").text("not an address"),
		&no_config(),
	)
	.unwrap();
	assert_eq!(html, "");
}

// =========================================================================
// get
// =========================================================================

#[rstest]
fn test_get_renders_submitted_values() {
	// Arrange
	let config = no_config();
	let form = SubmittedForm::new()
		.with_field("name", "Jo Blo")
		.with_field("interests", vec!["hiking".to_string(), "code".to_string()])
		.with_field("resume", UploadedFile::new("cv.pdf", vec![1]));
	let body = vec![
		Node::from(TagNode::new("get").attr("name", "name")),
		Node::text("|"),
		Node::from(TagNode::new("get").attr("name", "interests")),
		Node::text("|"),
		Node::from(TagNode::new("get").attr("name", "resume")),
		Node::text("|"),
		Node::from(TagNode::new("get").attr("name", "missing")),
	];
	let mut ctx = RenderContext::new(&config, "/contact/").with_form_data(&form);

	// Act
	let html = render(&body, &mut ctx).unwrap();

	// Assert
	assert_eq!(html, "Jo Blo|hiking and code|cv.pdf|");
}

#[rstest]
fn test_bare_get_dumps_whole_submission() {
	// Arrange
	let config = no_config();
	let form = SubmittedForm::new()
		.with_field("b", "two")
		.with_field("a", "one");
	let mut ctx = RenderContext::new(&config, "/contact/").with_form_data(&form);

	// Act
	let html = render(&[Node::from(TagNode::new("get"))], &mut ctx).unwrap();

	// Assert
	assert_eq!(html, "a: one\nb: two\n");
}

// =========================================================================
// misc
// =========================================================================

#[rstest]
fn test_mailer_tag_is_transparent() {
	let tag = TagNode::new("mailer").child(TagNode::new("reset"));
	let html = render_one(tag, &no_config()).unwrap();
	assert_eq!(html, r#"<input type="reset" class="mailer-button" value="" />"#);
}

#[rstest]
fn test_unknown_tag_errors() {
	let result = render_one(TagNode::new("blink"), &no_config());
	assert!(matches!(result, Err(TagError::UnknownTag(name)) if name == "blink"));
}

#[rstest]
fn test_submit_placeholder_with_part() {
	// Arrange
	let config = no_config();
	let part = vec![Node::text("Sending, hold on")];
	let mut ctx = RenderContext::new(&config, "/contact/").with_placeholder_part(&part);

	// Act
	let html = render(&[Node::from(TagNode::new("submit_placeholder"))], &mut ctx).unwrap();

	// Assert
	assert_eq!(
		html,
		r#"<div id="submit-placeholder-part" style="display:none">Sending, hold on</div>"#
	);
}

#[rstest]
fn test_submit_placeholder_without_part_is_empty() {
	let html = render_one(TagNode::new("submit_placeholder"), &no_config()).unwrap();
	assert_eq!(html, "");
}
