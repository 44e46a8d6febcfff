use super::*;

use crate::attrs::MediaAttributes;

fn attrs() -> MediaAttributes {
    MediaAttributes::new("a.png")
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_options_show_the_menu_below() {
    let opts = MediaOptions::default();
    assert!(opts.show_menu);
    assert_eq!(opts.menu_position, MenuPosition::Below);
    assert_eq!(opts.default_height, None);
}

#[test]
fn default_options_hide_no_buttons() {
    let opts = MediaOptions::default();
    for button in MenuButton::ALL {
        assert!(!opts.hidden_buttons.hides(button));
    }
}

#[test]
fn all_lists_buttons_in_display_order() {
    assert_eq!(
        MenuButton::ALL,
        [
            MenuButton::Left,
            MenuButton::Center,
            MenuButton::Right,
            MenuButton::Clear,
            MenuButton::Preview,
            MenuButton::Size50,
            MenuButton::Size100,
        ]
    );
}

// =============================================================
// effective_show_menu
// =============================================================

#[test]
fn show_menu_attribute_wins() {
    let mut a = attrs();
    a.show_menu = Some(false);
    let opts = MediaOptions::default();
    assert!(!effective_show_menu(&a, &opts));
}

#[test]
fn show_menu_falls_back_to_option() {
    let a = attrs();
    let opts = MediaOptions { show_menu: false, ..MediaOptions::default() };
    assert!(!effective_show_menu(&a, &opts));
}

#[test]
fn show_menu_defaults_on() {
    assert!(effective_show_menu(&attrs(), &MediaOptions::default()));
}

// =============================================================
// effective_menu_position
// =============================================================

#[test]
fn menu_position_attribute_wins() {
    let mut a = attrs();
    a.menu_position = Some(MenuPosition::Above);
    assert_eq!(effective_menu_position(&a, &MediaOptions::default()), MenuPosition::Above);
}

#[test]
fn menu_position_falls_back_to_option() {
    let opts = MediaOptions { menu_position: MenuPosition::Above, ..MediaOptions::default() };
    assert_eq!(effective_menu_position(&attrs(), &opts), MenuPosition::Above);
}

#[test]
fn menu_position_defaults_below() {
    assert_eq!(effective_menu_position(&attrs(), &MediaOptions::default()), MenuPosition::Below);
}

// =============================================================
// effective_icon
// =============================================================

#[test]
fn icon_attribute_override_wins_over_option_and_built_in() {
    let mut a = attrs();
    a.icons.left = Some("«".into());
    let opts = MediaOptions {
        icons: IconSet { left: Some("L".into()), ..IconSet::default() },
        ..MediaOptions::default()
    };
    assert_eq!(effective_icon(MenuButton::Left, &a, &opts), "«");
}

#[test]
fn icon_option_wins_over_built_in() {
    let opts = MediaOptions {
        icons: IconSet { center: Some("C".into()), ..IconSet::default() },
        ..MediaOptions::default()
    };
    assert_eq!(effective_icon(MenuButton::Center, &attrs(), &opts), "C");
}

#[test]
fn icon_built_ins_apply_last() {
    let a = attrs();
    let opts = MediaOptions::default();
    assert_eq!(effective_icon(MenuButton::Left, &a, &opts), GLYPH_LEFT);
    assert_eq!(effective_icon(MenuButton::Center, &a, &opts), GLYPH_CENTER);
    assert_eq!(effective_icon(MenuButton::Right, &a, &opts), GLYPH_RIGHT);
    assert_eq!(effective_icon(MenuButton::Clear, &a, &opts), GLYPH_CLEAR);
    assert_eq!(effective_icon(MenuButton::Preview, &a, &opts), GLYPH_PREVIEW);
}

#[test]
fn empty_string_override_is_honored() {
    // An explicitly empty glyph is a value, not an absence.
    let mut a = attrs();
    a.icons.clear = Some(String::new());
    assert_eq!(effective_icon(MenuButton::Clear, &a, &MediaOptions::default()), "");
}

#[test]
fn preview_glyph_can_be_configured() {
    let opts = MediaOptions {
        icons: IconSet { preview: Some("👁".into()), ..IconSet::default() },
        ..MediaOptions::default()
    };
    assert_eq!(effective_icon(MenuButton::Preview, &attrs(), &opts), "👁");
}

#[test]
fn preset_buttons_keep_fixed_labels() {
    let a = attrs();
    let opts = MediaOptions::default();
    assert_eq!(effective_icon(MenuButton::Size50, &a, &opts), LABEL_SIZE_50);
    assert_eq!(effective_icon(MenuButton::Size100, &a, &opts), LABEL_SIZE_100);
}

// =============================================================
// Wire shape
// =============================================================

#[test]
fn options_round_trip_through_json() {
    let opts = MediaOptions {
        default_height: Some(200),
        show_menu: false,
        menu_position: MenuPosition::Above,
        icons: IconSet { right: Some("→".into()), ..IconSet::default() },
        hidden_buttons: HiddenButtons { size100: true, ..HiddenButtons::default() },
    };
    let json = serde_json::to_string(&opts).unwrap();
    let back: MediaOptions = serde_json::from_str(&json).unwrap();
    assert_eq!(back, opts);
}

#[test]
fn options_deserialize_from_empty_object() {
    let opts: MediaOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(opts, MediaOptions::default());
}

#[test]
fn menu_position_serializes_lowercase() {
    assert_eq!(serde_json::to_value(MenuPosition::Above).unwrap(), "above");
    assert_eq!(serde_json::to_value(MenuPosition::Below).unwrap(), "below");
}
