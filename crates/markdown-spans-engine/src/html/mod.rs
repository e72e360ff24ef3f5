//! # HTML Nodes
//!
//! A minimal render tree: leaves hold a value, parents hold children.
//! Nothing is escaped; values and attributes are written out verbatim.

pub mod convert;

pub use convert::span_to_node;

/// Errors raised while rendering a node.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("Parent nodes must have a tag")]
    MissingTag,
    #[error("Leaf nodes must have a value")]
    MissingValue,
}

/// HTML attributes, rendered in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an attribute, builder style.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.push((key.into(), value.into()));
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// ` key="value"` for every attribute; empty when there are none.
    pub fn to_html(&self) -> String {
        self.iter()
            .map(|(key, value)| format!(" {key}=\"{value}\""))
            .collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// A node that renders to an HTML string.
///
/// `tag` and `value` are optional so that a malformed node can be built and
/// rejected at render time rather than at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    /// A node with a direct value and no children. Without a tag it renders
    /// as the bare value.
    Leaf {
        tag: Option<String>,
        value: Option<String>,
        attributes: Option<Attributes>,
    },
    /// A node wrapping an ordered list of children.
    Parent {
        tag: Option<String>,
        children: Vec<HtmlNode>,
        attributes: Option<Attributes>,
    },
}

impl HtmlNode {
    /// A leaf with a tag and value.
    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.into()),
            value: Some(value.into()),
            attributes: None,
        }
    }

    /// An untagged leaf, rendered as raw text.
    pub fn text(value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: None,
            value: Some(value.into()),
            attributes: None,
        }
    }

    pub fn parent(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Parent {
            tag: Some(tag.into()),
            children,
            attributes: None,
        }
    }

    /// Replaces the node's attributes.
    #[must_use]
    pub fn with_attributes(mut self, attrs: Attributes) -> Self {
        match &mut self {
            HtmlNode::Leaf { attributes, .. } | HtmlNode::Parent { attributes, .. } => {
                *attributes = Some(attrs);
            }
        }
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf { tag, .. } | HtmlNode::Parent { tag, .. } => tag.as_deref(),
        }
    }

    pub fn attributes(&self) -> Option<&Attributes> {
        match self {
            HtmlNode::Leaf { attributes, .. } | HtmlNode::Parent { attributes, .. } => {
                attributes.as_ref()
            }
        }
    }

    /// Renders this node and, for parents, all descendants.
    ///
    /// # Errors
    /// [`RenderError::MissingValue`] for a leaf without a value and
    /// [`RenderError::MissingTag`] for a parent without a tag, wherever they
    /// sit in the tree.
    pub fn render(&self) -> Result<String, RenderError> {
        let mut out = String::new();
        self.render_into(&mut out)?;
        Ok(out)
    }

    fn render_into(&self, out: &mut String) -> Result<(), RenderError> {
        match self {
            HtmlNode::Leaf {
                tag,
                value,
                attributes,
            } => {
                let value = value.as_deref().ok_or(RenderError::MissingValue)?;
                match tag {
                    None => out.push_str(value),
                    Some(tag) => {
                        open_tag(out, tag, attributes.as_ref());
                        out.push_str(value);
                        close_tag(out, tag);
                    }
                }
            }
            HtmlNode::Parent {
                tag,
                children,
                attributes,
            } => {
                let tag = tag.as_deref().ok_or(RenderError::MissingTag)?;
                open_tag(out, tag, attributes.as_ref());
                for child in children {
                    child.render_into(out)?;
                }
                close_tag(out, tag);
            }
        }
        Ok(())
    }
}

fn open_tag(out: &mut String, tag: &str, attributes: Option<&Attributes>) {
    out.push('<');
    out.push_str(tag);
    if let Some(attrs) = attributes {
        out.push_str(&attrs.to_html());
    }
    out.push('>');
}

fn close_tag(out: &mut String, tag: &str) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
