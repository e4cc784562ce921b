//! Hotkey system
//!
//! Centralized hotkey management for the editor.
//!
//! # Architecture
//!
//! - **HotkeyAction**: Enum of all actions that can be triggered by hotkeys
//! - **HotkeyContext**: Determines which hotkeys are active based on app state
//! - **handle_hotkey()**: Maps key events to actions
//!
//! # Adding New Hotkeys
//!
//! 1. Add a variant to `HotkeyAction`
//! 2. Add the key binding in `handle_hotkey()`
//! 3. Handle the action in the App component's key handler

use dioxus::prelude::Key;

/// All actions that can be triggered by hotkeys.
///
/// Each variant is a semantic action, not a key binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyAction {
    /// Zoom in on the timeline (increase pixels per second)
    TimelineZoomIn,
    /// Zoom out on the timeline (decrease pixels per second)
    TimelineZoomOut,
    /// Toggle preview playback.
    PlayPause,
    /// Remove the selected placement or library entry.
    DeleteSelection,
    /// Open the import file dialog.
    ImportMedia,
    /// Show the export panel.
    OpenExport,
}

/// Context information that affects which hotkeys are active.
#[derive(Debug, Clone, Default)]
pub struct HotkeyContext {
    /// Whether the timeline panel is visible (not collapsed)
    pub timeline_visible: bool,
    /// Whether anything is selected
    pub has_selection: bool,
    /// Whether an input field has focus (suppresses all hotkeys)
    pub input_focused: bool,
}

/// Result of processing a key event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HotkeyResult {
    /// A hotkey matched and should be handled
    Action(HotkeyAction),
    /// Key was not a hotkey
    NoMatch,
    /// Hotkeys are suppressed in this context
    Suppressed,
}

/// Map a key press to an action.
pub fn handle_hotkey(
    key: &Key,
    _shift: bool,
    ctrl: bool,
    _alt: bool,
    meta: bool,
    context: &HotkeyContext,
) -> HotkeyResult {
    if context.input_focused {
        return HotkeyResult::Suppressed;
    }

    let command = ctrl || meta;
    match key {
        Key::Character(c) if command && c.eq_ignore_ascii_case("i") => {
            return HotkeyResult::Action(HotkeyAction::ImportMedia);
        }
        Key::Character(c) if command && c.eq_ignore_ascii_case("e") => {
            return HotkeyResult::Action(HotkeyAction::OpenExport);
        }
        Key::Character(c) if c == " " => return HotkeyResult::Action(HotkeyAction::PlayPause),
        _ => {}
    }

    if context.timeline_visible {
        match key {
            Key::Character(c) if c == "+" || c == "=" => {
                return HotkeyResult::Action(HotkeyAction::TimelineZoomIn);
            }
            Key::Character(c) if c == "-" => {
                return HotkeyResult::Action(HotkeyAction::TimelineZoomOut);
            }
            _ => {}
        }
    }

    if context.has_selection && matches!(key, Key::Delete | Key::Backspace) {
        return HotkeyResult::Action(HotkeyAction::DeleteSelection);
    }

    HotkeyResult::NoMatch
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(key: Key, ctrl: bool, context: &HotkeyContext) -> HotkeyResult {
        handle_hotkey(&key, false, ctrl, false, false, context)
    }

    fn visible() -> HotkeyContext {
        HotkeyContext {
            timeline_visible: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_plus_zooms_in() {
        let result = press(Key::Character("+".to_string()), false, &visible());
        assert_eq!(result, HotkeyResult::Action(HotkeyAction::TimelineZoomIn));
    }

    #[test]
    fn test_minus_zooms_out() {
        let result = press(Key::Character("-".to_string()), false, &visible());
        assert_eq!(result, HotkeyResult::Action(HotkeyAction::TimelineZoomOut));
    }

    #[test]
    fn test_zoom_ignored_when_timeline_collapsed() {
        let result = press(Key::Character("+".to_string()), false, &HotkeyContext::default());
        assert_eq!(result, HotkeyResult::NoMatch);
    }

    #[test]
    fn test_space_toggles_playback() {
        let result = press(Key::Character(" ".to_string()), false, &HotkeyContext::default());
        assert_eq!(result, HotkeyResult::Action(HotkeyAction::PlayPause));
    }

    #[test]
    fn test_delete_needs_selection() {
        assert_eq!(press(Key::Delete, false, &HotkeyContext::default()), HotkeyResult::NoMatch);
        let ctx = HotkeyContext {
            has_selection: true,
            ..Default::default()
        };
        assert_eq!(
            press(Key::Backspace, false, &ctx),
            HotkeyResult::Action(HotkeyAction::DeleteSelection)
        );
    }

    #[test]
    fn test_command_shortcuts() {
        let ctx = HotkeyContext::default();
        assert_eq!(
            press(Key::Character("I".to_string()), true, &ctx),
            HotkeyResult::Action(HotkeyAction::ImportMedia)
        );
        assert_eq!(
            press(Key::Character("e".to_string()), true, &ctx),
            HotkeyResult::Action(HotkeyAction::OpenExport)
        );
        assert_eq!(press(Key::Character("e".to_string()), false, &ctx), HotkeyResult::NoMatch);
    }

    #[test]
    fn test_input_focus_suppresses() {
        let ctx = HotkeyContext {
            input_focused: true,
            ..visible()
        };
        assert_eq!(
            press(Key::Character(" ".to_string()), false, &ctx),
            HotkeyResult::Suppressed
        );
    }
}
