use super::*;
use crate::dom::build::ElementBuilder;

fn para(text: &str) -> (Document, NodeId) {
    let mut doc = Document::new();
    let root = doc.root();
    let p = ElementBuilder::new("p").text(text).build(&mut doc, root).unwrap();
    (doc, p)
}

#[test]
fn split_mode_tokens_round_trip() {
    for mode in [SplitMode::Characters, SplitMode::Words, SplitMode::Lines] {
        assert_eq!(SplitMode::from_token(mode.token()), Some(mode));
    }
    assert_eq!(SplitMode::from_token("letters"), None);
}

#[test]
fn characters_split_on_graphemes_skipping_whitespace() {
    let (mut doc, p) = para("ab c");
    let segments = UnicodeSegmenter.segment(&mut doc, p, SplitMode::Characters);
    assert_eq!(segments.len(), 3);
    for &s in &segments {
        assert!(doc.has_class(s, CHAR_CLASS));
        assert_eq!(doc.parent(s), Some(p));
    }
    // Whitespace survives as plain text between segments.
    assert_eq!(doc.text_content(p), "ab c");
}

#[test]
fn words_split_preserves_whitespace() {
    let (mut doc, p) = para("fade in  now");
    let segments = UnicodeSegmenter.segment(&mut doc, p, SplitMode::Words);
    assert_eq!(segments.len(), 3);
    assert!(segments.iter().all(|&s| doc.has_class(s, WORD_CLASS)));
    assert_eq!(doc.text_content(p), "fade in  now");
}

#[test]
fn lines_split_on_hard_breaks() {
    let (mut doc, p) = para("one\ntwo\nthree");
    let segments = UnicodeSegmenter.segment(&mut doc, p, SplitMode::Lines);
    assert_eq!(segments.len(), 3);
    assert!(segments.iter().all(|&s| doc.has_class(s, LINE_CLASS)));
    assert_eq!(doc.text_content(p), "one\ntwo\nthree");
    assert_eq!(doc.text_content(segments[1]), "two");
}

#[test]
fn segmentation_marks_the_subtree_as_segmented() {
    let (mut doc, p) = para("hello");
    assert!(!is_segmented(&doc, p));
    UnicodeSegmenter.segment(&mut doc, p, SplitMode::Characters);
    assert!(is_segmented(&doc, p));
}

#[test]
fn nested_text_is_segmented_under_its_own_ancestors() {
    let mut doc = Document::new();
    let root = doc.root();
    let p = ElementBuilder::new("p")
        .text("Hi ")
        .child(ElementBuilder::new("em").text("there"))
        .build(&mut doc, root)
        .unwrap();
    let em = doc.first_descendant_tag(p, "em").unwrap();

    let segments = UnicodeSegmenter.segment(&mut doc, p, SplitMode::Words);
    assert_eq!(segments.len(), 2);
    assert_eq!(doc.parent(segments[0]), Some(p));
    assert_eq!(doc.parent(segments[1]), Some(em));
    assert_eq!(doc.text_content(p), "Hi there");
}

#[test]
fn protected_segments_are_reverted_to_text() {
    let mut doc = Document::new();
    let root = doc.root();
    let p = ElementBuilder::new("p")
        .text("free ")
        .child(ElementBuilder::new("span").class(NO_SPLIT_CLASS).text("keep me"))
        .build(&mut doc, root)
        .unwrap();

    let segments = UnicodeSegmenter.segment(&mut doc, p, SplitMode::Words);
    assert_eq!(segments.len(), 3); // "free", "keep", "me"
    revert_protected(&mut doc, p);

    let protected = doc.select_class(p, NO_SPLIT_CLASS)[0];
    // No segment nodes survive under the protected container.
    assert!(doc.descendants(protected).iter().all(|&id| !is_segment_node(&doc, id)));
    assert_eq!(doc.text_content(protected), "keep me");
    // Segments outside the protected container are untouched.
    assert!(is_segment_node(&doc, segments[0]));
    assert_eq!(doc.parent(segments[0]), Some(p));
    // Reverted segments are detached.
    assert_eq!(doc.parent(segments[1]), None);
    assert_eq!(doc.parent(segments[2]), None);
}

#[test]
fn revert_without_protection_is_a_no_op() {
    let (mut doc, p) = para("plain text");
    let segments = UnicodeSegmenter.segment(&mut doc, p, SplitMode::Words);
    revert_protected(&mut doc, p);
    assert!(segments.iter().all(|&s| doc.parent(s).is_some()));
}
