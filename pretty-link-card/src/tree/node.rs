//! Markdown document nodes.
//!
//! The shape follows mdast so a tree serialized by a markdown toolchain can be
//! deserialized directly and written back unchanged. Only the `"type"` tag and
//! `children` are modelled; every other property (`position`, `data`, `url`,
//! `spread`, ...) is kept verbatim in [`Node::fields`], and node types this
//! crate has no name for are carried as [`NodeKind::Other`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// A node in a markdown document tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// The mdast node type.
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// Child nodes. `None` for leaves.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Node>>,
    /// Every other property of the node, untouched.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// The type tag of a [`Node`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NodeKind {
    /// `root`
    Root,
    /// `paragraph`
    Paragraph,
    /// `heading`
    Heading,
    /// `blockquote`
    Blockquote,
    /// `list`
    List,
    /// `listItem`
    ListItem,
    /// `emphasis`
    Emphasis,
    /// `strong`
    Strong,
    /// `delete`
    Delete,
    /// `link`
    Link,
    /// `image`
    Image,
    /// `text`
    Text,
    /// `inlineCode`
    InlineCode,
    /// `code`
    Code,
    /// `html`
    Html,
    /// `break`
    Break,
    /// `thematicBreak`
    ThematicBreak,
    /// Any other type, such as `table` or `linkReference`.
    Other(String),
}

impl NodeKind {
    /// Returns the mdast type tag.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Root => "root",
            Self::Paragraph => "paragraph",
            Self::Heading => "heading",
            Self::Blockquote => "blockquote",
            Self::List => "list",
            Self::ListItem => "listItem",
            Self::Emphasis => "emphasis",
            Self::Strong => "strong",
            Self::Delete => "delete",
            Self::Link => "link",
            Self::Image => "image",
            Self::Text => "text",
            Self::InlineCode => "inlineCode",
            Self::Code => "code",
            Self::Html => "html",
            Self::Break => "break",
            Self::ThematicBreak => "thematicBreak",
            Self::Other(tag) => tag,
        }
    }
}

impl From<String> for NodeKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "root" => Self::Root,
            "paragraph" => Self::Paragraph,
            "heading" => Self::Heading,
            "blockquote" => Self::Blockquote,
            "list" => Self::List,
            "listItem" => Self::ListItem,
            "emphasis" => Self::Emphasis,
            "strong" => Self::Strong,
            "delete" => Self::Delete,
            "link" => Self::Link,
            "image" => Self::Image,
            "text" => Self::Text,
            "inlineCode" => Self::InlineCode,
            "code" => Self::Code,
            "html" => Self::Html,
            "break" => Self::Break,
            "thematicBreak" => Self::ThematicBreak,
            _ => Self::Other(tag),
        }
    }
}

impl From<NodeKind> for String {
    fn from(kind: NodeKind) -> Self {
        match kind {
            NodeKind::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Node {
    /// Creates a leaf node with no properties.
    #[must_use]
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            children: None,
            fields: Map::new(),
        }
    }

    /// Creates a parent node.
    #[must_use]
    pub fn parent(kind: NodeKind, children: Vec<Node>) -> Self {
        Self {
            children: Some(children),
            ..Self::new(kind)
        }
    }

    /// Creates a root node.
    #[must_use]
    pub fn root(children: Vec<Node>) -> Self {
        Self::parent(NodeKind::Root, children)
    }

    /// Creates a paragraph node.
    #[must_use]
    pub fn paragraph(children: Vec<Node>) -> Self {
        Self::parent(NodeKind::Paragraph, children)
    }

    /// Creates a link node with a `null` title.
    #[must_use]
    pub fn link(url: impl Into<String>, children: Vec<Node>) -> Self {
        Self::parent(NodeKind::Link, children)
            .with_field("url", Value::String(url.into()))
            .with_field("title", Value::Null)
    }

    /// Creates a link node with a title attribute.
    #[must_use]
    pub fn titled_link(
        url: impl Into<String>,
        title: impl Into<String>,
        children: Vec<Node>,
    ) -> Self {
        Self::parent(NodeKind::Link, children)
            .with_field("url", Value::String(url.into()))
            .with_field("title", Value::String(title.into()))
    }

    /// Creates a text node.
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::new(NodeKind::Text).with_field("value", Value::String(value.into()))
    }

    /// Creates a raw HTML node.
    #[must_use]
    pub fn html(value: impl Into<String>) -> Self {
        Self::new(NodeKind::Html).with_field("value", Value::String(value.into()))
    }

    /// Sets a property.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Returns the type of this node.
    #[must_use]
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// Returns a property by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Returns the string `value` of a literal node.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.field("value").and_then(Value::as_str)
    }

    /// Returns the string `url` of a link or image.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.field("url").and_then(Value::as_str)
    }

    /// Whether the node sets a title. A missing or `null` title does not count,
    /// an empty string does.
    #[must_use]
    pub fn has_title(&self) -> bool {
        self.field("title").is_some_and(|title| !title.is_null())
    }

    /// Returns the children of a parent node, or `None` for leaves.
    #[must_use]
    pub fn children(&self) -> Option<&[Node]> {
        self.children.as_deref()
    }

    /// Returns the children of a parent node mutably, or `None` for leaves.
    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        self.children.as_mut()
    }

    /// Rewrites this node in place into an HTML node.
    ///
    /// Children and properties are dropped except `position`.
    pub fn set_html(&mut self, value: impl Into<String>) {
        let position = self.fields.remove("position");
        self.fields.clear();
        if let Some(position) = position {
            self.fields.insert("position".to_string(), position);
        }
        self.fields
            .insert("value".to_string(), Value::String(value.into()));
        self.kind = NodeKind::Html;
        self.children = None;
    }

    /// Returns the HTML source if this is an HTML node.
    #[must_use]
    pub fn as_html(&self) -> Option<&str> {
        if self.kind == NodeKind::Html {
            self.value()
        } else {
            None
        }
    }
}
