use std::collections::BTreeMap;

use crate::foundation::error::{ScrollfxError, ScrollfxResult};

/// Stable handle into a [`Document`] arena.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct NodeId(pub usize);

bitflags::bitflags! {
    /// Per-element binding markers, one bit per binder kind.
    ///
    /// A set bit means the binder has already processed the element; scans
    /// check-then-set so each element is bound at most once per kind until
    /// [`Document::clear_flags`] runs.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct BindFlags: u8 {
        /// Base scroll animation has been bound.
        const ANIMATED = 1 << 0;
        /// Parallax scrub has been bound.
        const PARALLAX = 1 << 1;
        /// Pin region has been registered.
        const PINNED = 1 << 2;
        /// Flip trigger has been registered.
        const FLIPPED = 1 << 3;
    }
}

/// One arena slot: an element or a text leaf.
#[derive(Clone, Debug)]
pub enum Node {
    /// Structural element with tag, classes, attributes and children.
    Element(Element),
    /// Plain text leaf.
    Text(String),
}

/// Element payload of a [`Node`].
#[derive(Clone, Debug)]
pub struct Element {
    /// Lowercase tag name ("div", "img", ...).
    pub tag: String,
    /// Binding markers for this element.
    pub flags: BindFlags,
    classes: Vec<String>,
    attrs: BTreeMap<String, String>,
    children: Vec<NodeId>,
}

impl Element {
    fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            flags: BindFlags::empty(),
            classes: Vec::new(),
            attrs: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    /// Class tokens in declaration order.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Attribute value, if present.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Child node handles in document order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Whether the class list contains `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// Arena-backed element tree.
///
/// The document is the host-side representation the orchestrators scan. It is
/// deliberately small: tags, ordered class lists, attribute maps, text leaves
/// and per-element [`BindFlags`]. Detached nodes stay in the arena (slots are
/// never reused), so a [`NodeId`] remains valid for the document's lifetime.
#[derive(Clone, Debug)]
pub struct Document {
    nodes: Vec<Node>,
    parents: Vec<Option<NodeId>>,
}

impl Document {
    /// Create a document with a single root element (tag "body").
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::Element(Element::new("body"))],
            parents: vec![None],
        }
    }

    /// Handle of the root element.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Create a detached element node.
    pub fn create_element(&mut self, tag: impl Into<String>) -> NodeId {
        self.push(Node::Element(Element::new(tag)))
    }

    /// Create a detached text node.
    pub fn create_text(&mut self, text: impl Into<String>) -> NodeId {
        self.push(Node::Text(text.into()))
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        self.parents.push(None);
        id
    }

    /// Borrow a node.
    pub fn node(&self, id: NodeId) -> ScrollfxResult<&Node> {
        self.nodes
            .get(id.0)
            .ok_or_else(|| ScrollfxError::document(format!("no node with id {}", id.0)))
    }

    /// Borrow an element, rejecting text nodes.
    pub fn element(&self, id: NodeId) -> ScrollfxResult<&Element> {
        match self.node(id)? {
            Node::Element(el) => Ok(el),
            Node::Text(_) => Err(ScrollfxError::document(format!(
                "node {} is a text node, not an element",
                id.0
            ))),
        }
    }

    /// Mutably borrow an element, rejecting text nodes.
    pub fn element_mut(&mut self, id: NodeId) -> ScrollfxResult<&mut Element> {
        match self.nodes.get_mut(id.0) {
            Some(Node::Element(el)) => Ok(el),
            Some(Node::Text(_)) => Err(ScrollfxError::document(format!(
                "node {} is a text node, not an element",
                id.0
            ))),
            None => Err(ScrollfxError::document(format!("no node with id {}", id.0))),
        }
    }

    fn element_opt(&self, id: NodeId) -> Option<&Element> {
        match self.nodes.get(id.0) {
            Some(Node::Element(el)) => Some(el),
            _ => None,
        }
    }

    /// Parent handle, `None` for the root and for detached nodes.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parents.get(id.0).copied().flatten()
    }

    /// Append a detached node as the last child of `parent`.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> ScrollfxResult<()> {
        if child.0 >= self.nodes.len() {
            return Err(ScrollfxError::document(format!(
                "no node with id {}",
                child.0
            )));
        }
        if self.parents[child.0].is_some() {
            return Err(ScrollfxError::document(format!(
                "node {} already has a parent",
                child.0
            )));
        }
        self.element_mut(parent)?.children.push(child);
        self.parents[child.0] = Some(parent);
        Ok(())
    }

    /// Add a class token to an element (no-op if already present).
    pub fn add_class(&mut self, id: NodeId, class: &str) -> ScrollfxResult<()> {
        let el = self.element_mut(id)?;
        if !el.has_class(class) {
            el.classes.push(class.to_string());
        }
        Ok(())
    }

    /// Set an attribute on an element.
    pub fn set_attr(&mut self, id: NodeId, name: &str, value: &str) -> ScrollfxResult<()> {
        self.element_mut(id)?
            .attrs
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    /// Attribute lookup tolerant of invalid ids and text nodes.
    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element_opt(id)?.attr(name)
    }

    /// Class membership check tolerant of invalid ids and text nodes.
    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.element_opt(id).is_some_and(|el| el.has_class(class))
    }

    /// Binding flags of an element (empty for text nodes).
    pub fn flags(&self, id: NodeId) -> BindFlags {
        self.element_opt(id).map(|el| el.flags).unwrap_or_default()
    }

    /// Whether the given marker bit is set on the element.
    pub fn has_flag(&self, id: NodeId, flag: BindFlags) -> bool {
        self.flags(id).contains(flag)
    }

    /// Set a marker bit on an element. Silently ignores text nodes.
    pub fn set_flag(&mut self, id: NodeId, flag: BindFlags) {
        if let Some(Node::Element(el)) = self.nodes.get_mut(id.0) {
            el.flags.insert(flag);
        }
    }

    /// Clear every binding marker in the document.
    pub fn clear_flags(&mut self) {
        for node in &mut self.nodes {
            if let Node::Element(el) = node {
                el.flags = BindFlags::empty();
            }
        }
    }

    /// Subtree handles below `root` in document order, `root` excluded.
    pub fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = match self.element_opt(root) {
            Some(el) => el.children.iter().rev().copied().collect(),
            None => return out,
        };
        while let Some(id) = stack.pop() {
            out.push(id);
            if let Some(el) = self.element_opt(id) {
                stack.extend(el.children.iter().rev().copied());
            }
        }
        out
    }

    /// Descendant elements of `root` carrying `class`, in document order.
    pub fn select_class(&self, root: NodeId, class: &str) -> Vec<NodeId> {
        self.descendants(root)
            .into_iter()
            .filter(|&id| self.has_class(id, class))
            .collect()
    }

    /// First descendant element with the given tag, in document order.
    pub fn first_descendant_tag(&self, root: NodeId, tag: &str) -> Option<NodeId> {
        self.descendants(root)
            .into_iter()
            .find(|&id| self.element_opt(id).is_some_and(|el| el.tag == tag))
    }

    /// Concatenated text of the subtree rooted at `id` (inclusive).
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        match self.nodes.get(id.0) {
            Some(Node::Text(t)) => out.push_str(t),
            Some(Node::Element(el)) => {
                for &child in &el.children {
                    self.collect_text(child, out);
                }
            }
            None => {}
        }
    }

    /// Replace `old` in its parent's child list with a fresh text node
    /// holding `text`. The old subtree is detached, not freed.
    pub fn replace_with_text(&mut self, old: NodeId, text: &str) -> ScrollfxResult<NodeId> {
        let parent = self.parent(old).ok_or_else(|| {
            ScrollfxError::document(format!("node {} has no parent to replace under", old.0))
        })?;
        let replacement = self.create_text(text);
        let el = self.element_mut(parent)?;
        let pos = el
            .children
            .iter()
            .position(|&c| c == old)
            .ok_or_else(|| ScrollfxError::document("parent does not list child"))?;
        el.children[pos] = replacement;
        self.parents[old.0] = None;
        self.parents[replacement.0] = Some(parent);
        Ok(replacement)
    }

    /// Replace `old` in its parent's child list with `replacements`
    /// (detached nodes), preserving sibling order around the splice point.
    pub fn replace_with_nodes(
        &mut self,
        old: NodeId,
        replacements: &[NodeId],
    ) -> ScrollfxResult<()> {
        let parent = self.parent(old).ok_or_else(|| {
            ScrollfxError::document(format!("node {} has no parent to replace under", old.0))
        })?;
        for &r in replacements {
            match self.parents.get(r.0) {
                Some(None) => {}
                Some(Some(_)) => {
                    return Err(ScrollfxError::document(format!(
                        "replacement node {} already has a parent",
                        r.0
                    )));
                }
                None => {
                    return Err(ScrollfxError::document(format!("no node with id {}", r.0)));
                }
            }
        }
        let el = self.element_mut(parent)?;
        let pos = el
            .children
            .iter()
            .position(|&c| c == old)
            .ok_or_else(|| ScrollfxError::document("parent does not list child"))?;
        el.children.splice(pos..=pos, replacements.iter().copied());
        self.parents[old.0] = None;
        for &r in replacements {
            self.parents[r.0] = Some(parent);
        }
        Ok(())
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/dom/node.rs"]
mod tests;
