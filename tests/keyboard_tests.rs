// Host-side tests for the keyboard mapping.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod keymap {
    include!("../src/keymap.rs");
}

use cab_core::{Action, SubPanel};
use keymap::*;

#[test]
fn digits_select_sub_panels() {
    let expected = [
        ("1", SubPanel::P1),
        ("2", SubPanel::P2),
        ("3", SubPanel::P3),
        ("4", SubPanel::P4),
        ("5", SubPanel::P5),
    ];
    for (key, panel) in expected {
        assert_eq!(
            command_for_key(key),
            Some(KeyCommand::Dispatch(Action::SelectSubPanel(panel)))
        );
    }
    assert_eq!(sub_panel_for_digit("0"), None);
    assert_eq!(sub_panel_for_digit("6"), None);
    assert_eq!(command_for_key("6"), None);
}

#[test]
fn view_toggle_is_case_insensitive() {
    for key in ["v", "V"] {
        assert_eq!(
            command_for_key(key),
            Some(KeyCommand::Dispatch(Action::ToggleViewMode))
        );
    }
}

#[test]
fn escape_clears_selection() {
    assert_eq!(
        command_for_key("Escape"),
        Some(KeyCommand::Dispatch(Action::ClearSelection))
    );
}

#[test]
fn overlay_keys() {
    for key in ["h", "H", "?"] {
        assert_eq!(command_for_key(key), Some(KeyCommand::ToggleHelp));
    }
    assert_eq!(command_for_key("`"), Some(KeyCommand::ToggleDebugPanel));
}

#[test]
fn unmapped_keys_do_nothing() {
    for key in ["a", "Enter", " ", "ArrowUp", "", "Escape2"] {
        assert_eq!(command_for_key(key), None, "{key:?}");
    }
}
