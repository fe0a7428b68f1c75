use unicode_segmentation::UnicodeSegmentation;

use crate::dom::node::{Document, Node, NodeId};

/// Marker class on character segment nodes.
pub const CHAR_CLASS: &str = "char";
/// Marker class on word segment nodes.
pub const WORD_CLASS: &str = "word";
/// Marker class on line segment nodes.
pub const LINE_CLASS: &str = "line";
/// Class protecting a container's content from per-segment animation.
pub const NO_SPLIT_CLASS: &str = "sfx-no-split";

const SEGMENT_CLASSES: [&str; 3] = [CHAR_CLASS, WORD_CLASS, LINE_CLASS];

/// Text segmentation granularity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitMode {
    /// One segment per grapheme cluster.
    Characters,
    /// One segment per word; whitespace survives as plain text.
    Words,
    /// One segment per hard line break.
    Lines,
}

impl SplitMode {
    /// Parse a declarative token ("chars", "words", "lines").
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "chars" => Some(Self::Characters),
            "words" => Some(Self::Words),
            "lines" => Some(Self::Lines),
            _ => None,
        }
    }

    /// The declarative token for this mode.
    pub fn token(self) -> &'static str {
        match self {
            Self::Characters => "chars",
            Self::Words => "words",
            Self::Lines => "lines",
        }
    }

    /// Marker class written onto segment nodes of this mode.
    pub fn segment_class(self) -> &'static str {
        match self {
            Self::Characters => CHAR_CLASS,
            Self::Words => WORD_CLASS,
            Self::Lines => LINE_CLASS,
        }
    }
}

/// Whether the subtree below `el` already carries segment-marker nodes.
pub fn is_segmented(doc: &Document, el: NodeId) -> bool {
    doc.descendants(el)
        .into_iter()
        .any(|id| SEGMENT_CLASSES.iter().any(|c| doc.has_class(id, c)))
}

/// Whether `id` is a segment node (carries one of the marker classes).
pub fn is_segment_node(doc: &Document, id: NodeId) -> bool {
    SEGMENT_CLASSES.iter().any(|c| doc.has_class(id, c))
}

/// Contract with the external segmentation utility.
///
/// Given an element and a mode, produce an ordered sequence of segment nodes
/// (whitespace preserved); those nodes, not the original element, become the
/// animation target set.
pub trait TextSegmenter {
    /// Split `el`'s text into segment nodes, returning them in document
    /// order.
    fn segment(&mut self, doc: &mut Document, el: NodeId, mode: SplitMode) -> Vec<NodeId>;
}

/// Built-in segmenter over the crate's document model.
///
/// Characters split on grapheme clusters, words on Unicode word bounds, and
/// lines on hard `\n` breaks (layout-derived line wrapping belongs to the
/// host's segmentation utility). Each text leaf is spliced in place, so
/// nesting survives and protected-container cleanup can find segments under
/// their original ancestors.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnicodeSegmenter;

impl TextSegmenter for UnicodeSegmenter {
    fn segment(&mut self, doc: &mut Document, el: NodeId, mode: SplitMode) -> Vec<NodeId> {
        let text_leaves: Vec<NodeId> = doc
            .descendants(el)
            .into_iter()
            .filter(|&id| matches!(doc.node(id), Ok(Node::Text(_))))
            .collect();

        let mut segments = Vec::new();
        for leaf in text_leaves {
            let Ok(Node::Text(text)) = doc.node(leaf) else {
                continue;
            };
            let text = text.clone();
            let mut replacements = Vec::new();
            for piece in split_text(&text, mode) {
                match piece {
                    Piece::Segment(s) => {
                        let seg = doc.create_element("span");
                        let _ = doc.add_class(seg, mode.segment_class());
                        let t = doc.create_text(s);
                        let _ = doc.append_child(seg, t);
                        replacements.push(seg);
                        segments.push(seg);
                    }
                    Piece::Whitespace(s) => {
                        replacements.push(doc.create_text(s));
                    }
                }
            }
            let _ = doc.replace_with_nodes(leaf, &replacements);
        }
        segments
    }
}

enum Piece {
    Segment(String),
    Whitespace(String),
}

fn split_text(text: &str, mode: SplitMode) -> Vec<Piece> {
    match mode {
        SplitMode::Characters => text
            .graphemes(true)
            .map(|g| {
                if g.chars().all(char::is_whitespace) {
                    Piece::Whitespace(g.to_string())
                } else {
                    Piece::Segment(g.to_string())
                }
            })
            .collect(),
        SplitMode::Words => text
            .split_word_bounds()
            .map(|w| {
                if w.chars().all(char::is_whitespace) {
                    Piece::Whitespace(w.to_string())
                } else {
                    Piece::Segment(w.to_string())
                }
            })
            .collect(),
        SplitMode::Lines => {
            let mut pieces = Vec::new();
            for (i, line) in text.split('\n').enumerate() {
                if i > 0 {
                    pieces.push(Piece::Whitespace("\n".to_string()));
                }
                if !line.is_empty() {
                    pieces.push(Piece::Segment(line.to_string()));
                }
            }
            pieces
        }
    }
}

/// Revert segment nodes nested inside protected containers.
///
/// Every segment node found under an `sfx-no-split` element below `root` is
/// replaced with a plain text node holding its text content, so protected
/// regions are never animated per-segment even when an ancestor requested
/// splitting.
pub fn revert_protected(doc: &mut Document, root: NodeId) {
    let protected = doc.select_class(root, NO_SPLIT_CLASS);
    for container in protected {
        let nested: Vec<NodeId> = doc
            .descendants(container)
            .into_iter()
            .filter(|&id| is_segment_node(doc, id))
            .collect();
        for seg in nested {
            let text = doc.text_content(seg);
            let _ = doc.replace_with_text(seg, &text);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/split/segment.rs"]
mod tests;
