use super::*;

// =============================================================
// alignment_layout
// =============================================================

#[test]
fn unaligned_stays_inline() {
    let layout = alignment_layout(None);
    assert_eq!(layout.display, Display::Inline);
    assert_eq!(layout.justify, None);
}

#[test]
fn left_becomes_block_justified_start() {
    let layout = alignment_layout(Some(Align::Left));
    assert_eq!(layout.display, Display::Block);
    assert_eq!(layout.justify, Some(Justify::Start));
}

#[test]
fn center_becomes_block_justified_center() {
    let layout = alignment_layout(Some(Align::Center));
    assert_eq!(layout.display, Display::Block);
    assert_eq!(layout.justify, Some(Justify::Center));
}

#[test]
fn right_becomes_block_justified_end() {
    let layout = alignment_layout(Some(Align::Right));
    assert_eq!(layout.display, Display::Block);
    assert_eq!(layout.justify, Some(Justify::End));
}

#[test]
fn mapping_is_stable() {
    for align in [None, Some(Align::Left), Some(Align::Center), Some(Align::Right)] {
        assert_eq!(alignment_layout(align), alignment_layout(align));
    }
}

#[test]
fn layout_serializes_lowercase() {
    let json = serde_json::to_value(alignment_layout(Some(Align::Right))).unwrap();
    assert_eq!(json, serde_json::json!({ "display": "block", "justify": "end" }));
}
