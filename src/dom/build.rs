use crate::{
    dom::node::{Document, NodeId},
    foundation::error::{ScrollfxError, ScrollfxResult},
};

/// Fluent builder for one element subtree.
///
/// Collects tag, classes, attributes, text and child builders, then writes
/// the whole subtree into a [`Document`] under a given parent.
pub struct ElementBuilder {
    tag: String,
    classes: Vec<String>,
    attrs: Vec<(String, String)>,
    children: Vec<Child>,
}

enum Child {
    Element(ElementBuilder),
    Text(String),
}

impl ElementBuilder {
    /// Start a builder for the given tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            classes: Vec::new(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Append a class token.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Set an attribute.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Append a text child.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Child::Text(text.into()));
        self
    }

    /// Append an element child.
    pub fn child(mut self, child: ElementBuilder) -> Self {
        self.children.push(Child::Element(child));
        self
    }

    /// Write the subtree into `doc` under `parent`, returning the new
    /// element's handle.
    pub fn build(self, doc: &mut Document, parent: NodeId) -> ScrollfxResult<NodeId> {
        if self.tag.trim().is_empty() {
            return Err(ScrollfxError::validation("element tag must be non-empty"));
        }
        let id = doc.create_element(self.tag);
        for class in self.classes {
            doc.add_class(id, &class)?;
        }
        for (name, value) in self.attrs {
            doc.set_attr(id, &name, &value)?;
        }
        for child in self.children {
            match child {
                Child::Text(text) => {
                    let t = doc.create_text(text);
                    doc.append_child(id, t)?;
                }
                Child::Element(builder) => {
                    builder.build(doc, id)?;
                }
            }
        }
        doc.append_child(parent, id)?;
        Ok(id)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/dom/build.rs"]
mod tests;
