use cab_core::{Action, SubPanel};

/// What a key press asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCommand {
    Dispatch(Action),
    ToggleHelp,
    ToggleDebugPanel,
}

#[inline]
pub fn sub_panel_for_digit(key: &str) -> Option<SubPanel> {
    match key {
        "1" => Some(SubPanel::P1),
        "2" => Some(SubPanel::P2),
        "3" => Some(SubPanel::P3),
        "4" => Some(SubPanel::P4),
        "5" => Some(SubPanel::P5),
        _ => None,
    }
}

/// Map a `KeyboardEvent.key` value to a command. Keys typed into form
/// fields never reach this (the listener filters them first).
pub fn command_for_key(key: &str) -> Option<KeyCommand> {
    if let Some(panel) = sub_panel_for_digit(key) {
        return Some(KeyCommand::Dispatch(Action::SelectSubPanel(panel)));
    }
    match key {
        "v" | "V" => Some(KeyCommand::Dispatch(Action::ToggleViewMode)),
        "Escape" => Some(KeyCommand::Dispatch(Action::ClearSelection)),
        "h" | "H" | "?" => Some(KeyCommand::ToggleHelp),
        "`" => Some(KeyCommand::ToggleDebugPanel),
        _ => None,
    }
}
