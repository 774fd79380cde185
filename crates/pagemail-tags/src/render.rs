//! Tag expansion.

use std::sync::LazyLock;

use pagemail_core::to_sentence;
use pagemail_forms::{FieldValue, RECIPIENT_CHOICE_FIELD};
use regex::Regex;

use crate::context::{ChoiceKind, ChoiceParent, RenderContext};
use crate::node::{Node, TagNode};
use crate::{TagError, TagResult};

/// Top-level domains the `email_option` obfuscation script knows how to
/// reassemble, in the order the script indexes them.
const TLDS: [&str; 9] = [
	"com", "org", "net", "edu", "info", "mil", "gov", "biz", "ws",
];

static ADDRESS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"([\w.%-]+)@([\w.-]+)\.([A-Za-z]{2,4})").expect("ADDRESS_REGEX: invalid pattern")
});

// Emitted after every form so submit buttons can be disabled and the
// optional placeholder shown while a submission is in flight.
const SUBMIT_SCRIPT: &str = r#"
<script type="text/javascript">
  function disableSubmitButtons()
  {
    var buttons = document.getElementsByName("mailer[mailer-form-button]");
    for( var idx = 0; idx < buttons.length; idx++ )
    {
      buttons[idx].disabled = true;
    }
  }

  function showSubmitPlaceholder()
  {
    var submitplaceholder = document.getElementById("submit-placeholder-part");
    if (submitplaceholder != null)
    {
      submitplaceholder.style.display="";
    }
  }
</script>"#;

/// Expand a sequence of nodes to HTML.
pub fn render(nodes: &[Node], ctx: &mut RenderContext) -> TagResult<String> {
	let mut out = String::new();
	for node in nodes {
		match node {
			Node::Text(text) => out.push_str(text),
			Node::Tag(tag) => out.push_str(&render_tag(tag, ctx)?),
		}
	}
	Ok(out)
}

fn render_tag(tag: &TagNode, ctx: &mut RenderContext) -> TagResult<String> {
	match tag.name.as_str() {
		"mailer" => render(&tag.children, ctx),
		"form" => form_tag(tag, ctx),
		"text" | "password" | "file" | "checkbox" | "radio" | "hidden" => {
			let name = require_name(tag)?;
			Ok(input_tag(&tag.name, Some(&name), attrs_without_name(tag.attrs())))
		}
		// reset needs no name; it still renders as an input control
		"reset" => Ok(input_tag(
			"reset",
			tag.get_attr("name"),
			attrs_without_name(tag.attrs()),
		)),
		"submit" | "image" => submit_tag(tag),
		"textarea" => textarea_tag(tag, ctx),
		"select" => select_tag(tag, ctx),
		"selectrecipient" => selectrecipient_tag(tag, ctx),
		"radiogroup" => radiogroup_tag(tag, ctx),
		"option" => option_tag(tag, ctx),
		"submit_placeholder" => submit_placeholder_tag(ctx),
		"email_option" => email_option_tag(tag, ctx),
		"get" => get_tag(tag, ctx),
		other => Err(TagError::UnknownTag(other.to_string())),
	}
}

/// `form`: the wrapper every other tag lives inside.
fn form_tag(tag: &TagNode, ctx: &mut RenderContext) -> TagResult<String> {
	let name = require_name(tag)?;

	let mut attrs = attrs_without_name(tag.attrs());
	default_attr(&mut attrs, "class", "mailer-form");

	let mut out = format!(
		r#"<form action="{}" method="post" enctype="multipart/form-data" {}>"#,
		ctx.page_url(),
		render_attrs(&attrs)
	);
	out.push_str(&format!(
		r#"<div><input type="hidden" name="mailer_name" value="{name}" /></div>"#
	));
	if let Some(error) = ctx.form_error() {
		out.push_str(&format!(r#"<div class="mailer-error">{error}</div>"#));
	}

	let saved = ctx.mailer_name.replace(name);
	let children = render(&tag.children, ctx);
	ctx.mailer_name = saved;

	out.push_str(&children?);
	out.push_str("</form>");
	out.push_str(SUBMIT_SCRIPT);
	Ok(out)
}

/// `submit` / `image`: button-ish inputs with the shared click behavior.
///
/// The defaults win over explicit attributes here: every submit control
/// posts under the `mailer-form-button` wire name so the disabling script
/// can find it.
fn submit_tag(tag: &TagNode) -> TagResult<String> {
	let mut attrs = attrs_without_name(tag.attrs());
	default_attr(&mut attrs, "id", "mailer-form-button");
	set_attr(&mut attrs, "onclick", "showSubmitPlaceholder()");
	Ok(input_tag(&tag.name, Some("mailer-form-button"), attrs))
}

fn textarea_tag(tag: &TagNode, ctx: &mut RenderContext) -> TagResult<String> {
	let name = require_name(tag)?;

	let mut attrs = attrs_without_name(tag.attrs());
	default_attr(&mut attrs, "id", &name);
	default_attr(&mut attrs, "class", "mailer-field");
	default_attr(&mut attrs, "rows", "5");
	default_attr(&mut attrs, "cols", "35");

	let content = render(&tag.children, ctx)?;
	Ok(format!(
		r#"<textarea name="mailer[{name}]" {}>{content}</textarea>"#,
		render_attrs(&attrs)
	))
}

fn select_tag(tag: &TagNode, ctx: &mut RenderContext) -> TagResult<String> {
	let name = require_name(tag)?;

	let mut attrs = attrs_without_name(tag.attrs());
	default_attr(&mut attrs, "id", &name);
	default_attr(&mut attrs, "class", "mailer-field");
	default_attr(&mut attrs, "size", "1");

	let saved = ctx.choice_parent.replace(ChoiceParent {
		field: name.clone(),
		kind: ChoiceKind::Select,
	});
	let children = render(&tag.children, ctx);
	ctx.choice_parent = saved;

	Ok(format!(
		r#"<select name="mailer[{name}]" {}>{}</select>"#,
		render_attrs(&attrs),
		children?
	))
}

/// `selectrecipient`: a select over the form's configured recipient
/// labels, posted under the well-known `recipient_choice` field.
fn selectrecipient_tag(tag: &TagNode, ctx: &mut RenderContext) -> TagResult<String> {
	let mut attrs = attrs_without_name(tag.attrs());
	default_attr(&mut attrs, "id", RECIPIENT_CHOICE_FIELD);
	default_attr(&mut attrs, "class", "mailer-field");

	let options: String = ctx
		.current_settings()
		.and_then(|settings| settings.recipient_list.as_ref())
		.map(|list| {
			list.labels()
				.map(|label| format!(r#"<option value="{label}">{label}</option>"#))
				.collect()
		})
		.unwrap_or_default();

	Ok(format!(
		r#"<select name="mailer[{RECIPIENT_CHOICE_FIELD}]" {}>{options}</select>"#,
		render_attrs(&attrs)
	))
}

fn radiogroup_tag(tag: &TagNode, ctx: &mut RenderContext) -> TagResult<String> {
	let name = require_name(tag)?;

	let saved_parent = ctx.choice_parent.replace(ChoiceParent {
		field: name,
		kind: ChoiceKind::RadioGroup,
	});
	let saved_count = std::mem::take(&mut ctx.radio_count);
	let children = render(&tag.children, ctx);
	ctx.choice_parent = saved_parent;
	ctx.radio_count = saved_count;

	children
}

/// `option`: an `<option>` under a select, a labelled radio button under
/// a radiogroup, nothing when orphaned.
fn option_tag(tag: &TagNode, ctx: &mut RenderContext) -> TagResult<String> {
	let name = require_name(tag)?;
	let Some(parent) = ctx.choice_parent.clone() else {
		return Ok(String::new());
	};

	let mut attrs = attrs_without_name(tag.attrs());
	let value = remove_attr(&mut attrs, "value").unwrap_or_else(|| name.clone());

	match parent.kind {
		ChoiceKind::Select => {
			let rendered = render_attrs(&attrs);
			let sep = if rendered.is_empty() { "" } else { " " };
			Ok(format!(
				r#"<option value="{value}"{sep}{rendered}>{name}</option>"#
			))
		}
		ChoiceKind::RadioGroup => {
			ctx.radio_count += 1;
			let id = format!("{}_{}", parent.field, ctx.radio_count);
			set_attr(&mut attrs, "id", &id);
			set_attr(&mut attrs, "value", &value);
			let input = input_tag("radio", Some(&parent.field), attrs);
			Ok(format!(
				r#"<label for="{id}">{input}<span>{name}</span></label>"#
			))
		}
	}
}

fn submit_placeholder_tag(ctx: &mut RenderContext) -> TagResult<String> {
	let Some(part) = ctx.placeholder_part() else {
		return Ok(String::new());
	};
	let content = render(part, ctx)?;
	Ok(format!(
		r#"<div id="submit-placeholder-part" style="display:none">{content}</div>"#
	))
}

/// `email_option`: obfuscate a literal address behind a client-side
/// `mail4(...)` script call.
///
/// The address must look like `localpart@domain.tld` with a tld from
/// [`TLDS`]; an unrecognized tld renders nothing at all.
fn email_option_tag(tag: &TagNode, ctx: &mut RenderContext) -> TagResult<String> {
	let mut address_param: Option<String> = None;
	let mut label_param: Option<String> = None;
	let mut contents = String::new();

	for child in &tag.children {
		match child {
			Node::Text(text) => contents.push_str(text),
			Node::Tag(child_tag) if child_tag.name == "address" => {
				let text = render(&child_tag.children, ctx)?.trim().to_string();
				contents.push_str(&text);
				address_param = Some(text);
			}
			Node::Tag(child_tag) if child_tag.name == "label" => {
				let text = render(&child_tag.children, ctx)?.trim().to_string();
				label_param = Some(text);
			}
			Node::Tag(child_tag) => contents.push_str(&render_tag(child_tag, ctx)?),
		}
	}

	let address = match address_param.filter(|a| !a.trim().is_empty()) {
		Some(address) => address,
		None => contents.trim().to_string(),
	};

	let Some(caps) = ADDRESS_REGEX.captures(&address) else {
		return Ok(String::new());
	};
	let (user, domain, tld) = (&caps[1], &caps[2], &caps[3]);
	let Some(tld_num) = TLDS.iter().position(|known| *known == tld) else {
		return Ok(String::new());
	};

	let label = label_param
		.filter(|l| !l.trim().is_empty())
		.unwrap_or_else(|| user.to_string());
	Ok(format!(
		"<script type=\"text/javascript\">\n  // <![CDATA[\n  mail4('{user}', '{domain}', {tld_num}, \"{label}\");\n  // ]]>\n</script>"
	))
}

/// `get`: a submitted value by name, or the whole submission without one.
fn get_tag(tag: &TagNode, ctx: &mut RenderContext) -> TagResult<String> {
	let data = ctx.form_data();
	match tag.get_attr("name") {
		Some(name) => Ok(match data.and_then(|d| d.get(name)) {
			Some(FieldValue::Text(text)) => text.clone(),
			Some(FieldValue::Many(values)) => to_sentence(values),
			Some(FieldValue::Upload(file)) => file.filename.clone(),
			None => String::new(),
		}),
		None => Ok(data.map(|d| d.to_yaml()).unwrap_or_default()),
	}
}

// ---------------------------------------------------------------------------
// attribute plumbing
// ---------------------------------------------------------------------------

fn require_name(tag: &TagNode) -> TagResult<String> {
	match tag.get_attr("name") {
		Some(name) if !name.is_empty() => Ok(name.to_string()),
		_ => Err(TagError::MissingAttribute {
			tag: tag.name.clone(),
			attribute: "name".to_string(),
		}),
	}
}

/// The explicit attributes minus `name`, which is consumed into the
/// control's wire name and never re-emitted.
fn attrs_without_name(attrs: &[(String, String)]) -> Vec<(String, String)> {
	attrs
		.iter()
		.filter(|(key, _)| key != "name")
		.cloned()
		.collect()
}

/// Set an attribute only when absent (a computed default the page author
/// may override).
fn default_attr(attrs: &mut Vec<(String, String)>, key: &str, value: &str) {
	if !attrs.iter().any(|(k, _)| k == key) {
		attrs.push((key.to_string(), value.to_string()));
	}
}

/// Set an attribute unconditionally.
fn set_attr(attrs: &mut Vec<(String, String)>, key: &str, value: &str) {
	match attrs.iter_mut().find(|(k, _)| k == key) {
		Some(entry) => entry.1 = value.to_string(),
		None => attrs.push((key.to_string(), value.to_string())),
	}
}

fn remove_attr(attrs: &mut Vec<(String, String)>, key: &str) -> Option<String> {
	let index = attrs.iter().position(|(k, _)| k == key)?;
	Some(attrs.remove(index).1)
}

/// Serialize attributes sorted by name, `key="value"` each.
fn render_attrs(attrs: &[(String, String)]) -> String {
	let mut sorted: Vec<&(String, String)> = attrs.iter().collect();
	sorted.sort_by(|a, b| a.0.cmp(&b.0));
	sorted
		.iter()
		.map(|(key, value)| format!(r#"{key}="{value}""#))
		.collect::<Vec<_>>()
		.join(" ")
}

/// Shared `<input />` shape for every input-flavored tag.
fn input_tag(input_type: &str, wire_name: Option<&str>, mut attrs: Vec<(String, String)>) -> String {
	if let Some(name) = wire_name {
		if input_type != "submit" && input_type != "image" && input_type != "reset" {
			default_attr(&mut attrs, "id", name);
		}
	}
	default_attr(&mut attrs, "value", "");
	if let Some(class) = default_class(input_type) {
		default_attr(&mut attrs, "class", class);
	}

	let mut out = format!(r#"<input type="{input_type}""#);
	if let Some(name) = wire_name {
		out.push_str(&format!(r#" name="mailer[{name}]""#));
	}
	let rendered = render_attrs(&attrs);
	if !rendered.is_empty() {
		out.push(' ');
		out.push_str(&rendered);
	}
	out.push_str(" />");
	out
}

fn default_class(control: &str) -> Option<&'static str> {
	match control {
		"text" | "password" | "file" | "select" | "textarea" => Some("mailer-field"),
		"submit" | "reset" => Some("mailer-button"),
		"checkbox" | "radio" => Some("mailer-option"),
		_ => None,
	}
}
