use super::*;
use crate::attrs::MenuPosition;
use crate::host::{AttributeStore, Bounds, DocPos, Selection};

/// Host double with scripted lookups and recorded mutations.
struct ScriptedHost {
    selection: Selection,
    attrs: Option<MediaAttributes>,
    bounds: Option<Bounds>,
    resolves_pos: Option<DocPos>,
    schema_has_block: bool,
    inserted: Vec<(NodeId, MediaAttributes)>,
    replaced: Vec<(NodeId, MediaAttributes)>,
    blocks_after: Vec<NodeId>,
    carets: Vec<DocPos>,
}

impl Default for ScriptedHost {
    fn default() -> Self {
        Self {
            selection: Selection::Other,
            attrs: None,
            bounds: None,
            resolves_pos: None,
            schema_has_block: true,
            inserted: Vec::new(),
            replaced: Vec::new(),
            blocks_after: Vec::new(),
            carets: Vec::new(),
        }
    }
}

impl ScriptedHost {
    fn with_media_selection(attrs: MediaAttributes) -> (Self, NodeId) {
        let node = NodeId::new_v4();
        let host = Self {
            selection: Selection::MediaNode(node),
            attrs: Some(attrs),
            ..Self::default()
        };
        (host, node)
    }
}

impl AttributeStore for ScriptedHost {
    fn replace_attributes(&mut self, node: NodeId, attrs: MediaAttributes) -> bool {
        self.replaced.push((node, attrs));
        true
    }
}

impl EditorHost for ScriptedHost {
    fn selection(&self) -> Selection {
        self.selection
    }

    fn media_attributes(&self, _node: NodeId) -> Option<MediaAttributes> {
        self.attrs.clone()
    }

    fn insert_media_node(&mut self, node: NodeId, attrs: MediaAttributes) -> bool {
        self.inserted.push((node, attrs));
        true
    }

    fn insert_block_after(&mut self, node: NodeId) -> bool {
        if !self.schema_has_block {
            return false;
        }
        self.blocks_after.push(node);
        true
    }

    fn set_caret(&mut self, pos: DocPos) -> bool {
        self.carets.push(pos);
        true
    }

    fn pos_at_point(&self, _at: Point) -> Option<DocPos> {
        self.resolves_pos
    }

    fn node_bounds(&self, _node: NodeId) -> Option<Bounds> {
        self.bounds
    }
}

// =============================================================
// insert_media
// =============================================================

#[test]
fn insert_snapshots_menu_configuration() {
    let mut host = ScriptedHost::default();
    let options = MediaOptions {
        icons: IconSet { left: Some("L".into()), ..IconSet::default() },
        ..MediaOptions::default()
    };
    assert!(insert_media(&mut host, &options, &InsertMedia::new("a.png")));
    let (_, attrs) = &host.inserted[0];
    assert_eq!(attrs.source, "a.png");
    assert_eq!(attrs.align, Some(Align::Left));
    assert_eq!(attrs.show_menu, Some(true));
    assert_eq!(attrs.menu_position, Some(MenuPosition::Below));
    assert_eq!(attrs.icons.left.as_deref(), Some("L"));
    assert_eq!(attrs.icons.clear, None);
}

#[test]
fn insert_without_dimensions_stores_none() {
    let mut host = ScriptedHost::default();
    assert!(insert_media(&mut host, &MediaOptions::default(), &InsertMedia::new("a.png")));
    let (_, attrs) = &host.inserted[0];
    assert_eq!((attrs.width, attrs.height), (None, None));
    assert!(attrs.validate().is_ok());
}

#[test]
fn insert_with_both_dimensions_stores_them() {
    let mut host = ScriptedHost::default();
    let request = InsertMedia { width: Some(240), height: Some(160), ..InsertMedia::new("a.png") };
    assert!(insert_media(&mut host, &MediaOptions::default(), &request));
    let (_, attrs) = &host.inserted[0];
    assert_eq!((attrs.width, attrs.height), (Some(240), Some(160)));
}

#[test]
fn one_sided_dimensions_store_neither() {
    let mut host = ScriptedHost::default();
    let request = InsertMedia { width: Some(240), ..InsertMedia::new("a.png") };
    assert!(insert_media(&mut host, &MediaOptions::default(), &request));
    let (_, attrs) = &host.inserted[0];
    assert_eq!((attrs.width, attrs.height), (None, None));
}

#[test]
fn insert_floors_explicit_dimensions() {
    let mut host = ScriptedHost::default();
    let request = InsertMedia { width: Some(10), height: Some(8), ..InsertMedia::new("a.png") };
    assert!(insert_media(&mut host, &MediaOptions::default(), &request));
    let (_, attrs) = &host.inserted[0];
    assert_eq!((attrs.width, attrs.height), (Some(20), Some(20)));
    assert!(attrs.validate().is_ok());
}

#[test]
fn insert_rejects_empty_source() {
    let mut host = ScriptedHost::default();
    assert!(!insert_media(&mut host, &MediaOptions::default(), &InsertMedia::default()));
    assert!(host.inserted.is_empty());
}

#[test]
fn insert_snapshots_disabled_menu() {
    let mut host = ScriptedHost::default();
    let options = MediaOptions { show_menu: false, ..MediaOptions::default() };
    assert!(insert_media(&mut host, &options, &InsertMedia::new("a.png")));
    assert_eq!(host.inserted[0].1.show_menu, Some(false));
}

#[test]
fn inserted_element_renders_at_the_configured_default_height() {
    use crate::layout::{Display, Justify};
    use crate::widget::MediaWidget;

    let mut host = ScriptedHost::default();
    let options = MediaOptions { default_height: Some(200), ..MediaOptions::default() };
    assert!(insert_media(&mut host, &options, &InsertMedia::new("a.png")));

    let widget = MediaWidget::new(&host.inserted[0].1, &options);
    assert_eq!(widget.image.explicit, None);
    assert_eq!(widget.image.fallback_height, Some(200.0));
    assert_eq!(widget.layout.display, Display::Block);
    assert_eq!(widget.layout.justify, Some(Justify::Start));
}

#[test]
fn insert_mints_fresh_node_ids() {
    let mut host = ScriptedHost::default();
    insert_media(&mut host, &MediaOptions::default(), &InsertMedia::new("a.png"));
    insert_media(&mut host, &MediaOptions::default(), &InsertMedia::new("b.png"));
    assert_ne!(host.inserted[0].0, host.inserted[1].0);
}

// =============================================================
// set_alignment
// =============================================================

#[test]
fn set_alignment_commits_over_full_attributes() {
    let attrs = MediaAttributes::new("a.png").with_size(100, 50);
    let (mut host, node) = ScriptedHost::with_media_selection(attrs);
    assert!(set_alignment(&mut host, Some(Align::Center)));
    let (target, next) = &host.replaced[0];
    assert_eq!(*target, node);
    assert_eq!(next.align, Some(Align::Center));
    assert_eq!((next.width, next.height), (Some(100), Some(50)));
    assert_eq!(next.source, "a.png");
}

#[test]
fn set_alignment_clears_with_none() {
    let (mut host, _) = ScriptedHost::with_media_selection(MediaAttributes::new("a.png"));
    assert!(set_alignment(&mut host, None));
    assert_eq!(host.replaced[0].1.align, None);
}

#[test]
fn set_alignment_requires_a_media_selection() {
    let mut host = ScriptedHost::default();
    assert!(!set_alignment(&mut host, Some(Align::Right)));
    assert!(host.replaced.is_empty());
}

#[test]
fn set_alignment_fails_without_readable_attributes() {
    let (mut host, _) = ScriptedHost::with_media_selection(MediaAttributes::new("a.png"));
    host.attrs = None;
    assert!(!set_alignment(&mut host, Some(Align::Right)));
    assert!(host.replaced.is_empty());
}

// =============================================================
// handle_enter
// =============================================================

#[test]
fn enter_inserts_block_after_the_selected_node() {
    let (mut host, node) = ScriptedHost::with_media_selection(MediaAttributes::new("a.png"));
    assert!(handle_enter(&mut host));
    assert_eq!(host.blocks_after, vec![node]);
}

#[test]
fn enter_without_media_selection_falls_through() {
    let mut host = ScriptedHost::default();
    assert!(!handle_enter(&mut host));
    assert!(host.blocks_after.is_empty());
}

#[test]
fn enter_fails_when_the_schema_offers_no_block() {
    let (mut host, _) = ScriptedHost::with_media_selection(MediaAttributes::new("a.png"));
    host.schema_has_block = false;
    assert!(!handle_enter(&mut host));
    assert!(host.blocks_after.is_empty());
}

// =============================================================
// handle_surface_press
// =============================================================

#[test]
fn press_inside_bounds_stays_with_default_handling() {
    let (mut host, _) = ScriptedHost::with_media_selection(MediaAttributes::new("a.png"));
    host.bounds = Some(Bounds::new(0.0, 0.0, 200.0, 100.0));
    host.resolves_pos = Some(42);
    assert!(!handle_surface_press(&mut host, Point::new(50.0, 50.0)));
    assert!(host.carets.is_empty());
}

#[test]
fn press_outside_bounds_places_a_caret() {
    let (mut host, _) = ScriptedHost::with_media_selection(MediaAttributes::new("a.png"));
    host.bounds = Some(Bounds::new(0.0, 0.0, 200.0, 100.0));
    host.resolves_pos = Some(42);
    assert!(handle_surface_press(&mut host, Point::new(300.0, 300.0)));
    assert_eq!(host.carets, vec![42]);
}

#[test]
fn unresolvable_press_positions_fall_through() {
    let (mut host, _) = ScriptedHost::with_media_selection(MediaAttributes::new("a.png"));
    host.bounds = Some(Bounds::new(0.0, 0.0, 200.0, 100.0));
    assert!(!handle_surface_press(&mut host, Point::new(300.0, 300.0)));
    assert!(host.carets.is_empty());
}

#[test]
fn press_without_media_selection_falls_through() {
    let mut host = ScriptedHost::default();
    host.resolves_pos = Some(42);
    assert!(!handle_surface_press(&mut host, Point::new(300.0, 300.0)));
    assert!(host.carets.is_empty());
}

#[test]
fn press_with_unknown_bounds_redirects() {
    let (mut host, _) = ScriptedHost::with_media_selection(MediaAttributes::new("a.png"));
    host.resolves_pos = Some(7);
    assert!(handle_surface_press(&mut host, Point::new(10.0, 10.0)));
    assert_eq!(host.carets, vec![7]);
}
