//! The tag tree the host's template dispatcher hands over.

/// One node of a page body: literal text or a tag to expand.
#[derive(Debug, Clone)]
pub enum Node {
	Text(String),
	Tag(TagNode),
}

impl Node {
	pub fn text(s: impl Into<String>) -> Self {
		Node::Text(s.into())
	}
}

impl From<TagNode> for Node {
	fn from(tag: TagNode) -> Self {
		Node::Tag(tag)
	}
}

impl From<&str> for Node {
	fn from(s: &str) -> Self {
		Node::Text(s.to_string())
	}
}

/// A tag with its attribute dictionary and children.
///
/// Attribute insertion order is preserved; rendering serializes them
/// sorted by name so output stays deterministic.
///
/// # Examples
///
/// ```
/// use pagemail_tags::TagNode;
///
/// let tag = TagNode::new("select")
///     .attr("name", "flavour")
///     .child(TagNode::new("option").attr("name", "Vanilla"));
/// assert_eq!(tag.get_attr("name"), Some("flavour"));
/// ```
#[derive(Debug, Clone)]
pub struct TagNode {
	pub name: String,
	attrs: Vec<(String, String)>,
	pub children: Vec<Node>,
}

impl TagNode {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			attrs: Vec::new(),
			children: Vec::new(),
		}
	}

	/// Add or replace an attribute.
	pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		let name = name.into();
		let value = value.into();
		match self.attrs.iter_mut().find(|(k, _)| *k == name) {
			Some(entry) => entry.1 = value,
			None => self.attrs.push((name, value)),
		}
		self
	}

	/// Append a child node.
	pub fn child(mut self, node: impl Into<Node>) -> Self {
		self.children.push(node.into());
		self
	}

	/// Append a text child.
	pub fn text(self, s: impl Into<String>) -> Self {
		self.child(Node::Text(s.into()))
	}

	pub fn get_attr(&self, name: &str) -> Option<&str> {
		self.attrs
			.iter()
			.find(|(k, _)| k == name)
			.map(|(_, v)| v.as_str())
	}

	pub fn attrs(&self) -> &[(String, String)] {
		&self.attrs
	}
}
