use super::*;

#[test]
fn builder_writes_expected_subtree() {
    let mut doc = Document::new();
    let root = doc.root();
    let card = ElementBuilder::new("div")
        .class("sfx-trigger")
        .class("sfx-fade-in")
        .attr("data-duration", "1.2")
        .text("Intro ")
        .child(ElementBuilder::new("img").attr("src", "hero.png"))
        .build(&mut doc, root)
        .unwrap();

    assert!(doc.has_class(card, "sfx-trigger"));
    assert!(doc.has_class(card, "sfx-fade-in"));
    assert_eq!(doc.attr(card, "data-duration"), Some("1.2"));
    assert_eq!(doc.parent(card), Some(root));
    assert_eq!(doc.text_content(card), "Intro ");
    assert!(doc.first_descendant_tag(card, "img").is_some());
}

#[test]
fn empty_tag_is_rejected() {
    let mut doc = Document::new();
    let root = doc.root();
    assert!(ElementBuilder::new("  ").build(&mut doc, root).is_err());
}
