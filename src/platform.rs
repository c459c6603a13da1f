//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for form shortcuts (Ctrl works everywhere)
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for the help line
#[cfg(target_os = "macos")]
pub const SUBMIT_SHORTCUT: &str = "Cmd+S";

#[cfg(not(target_os = "macos"))]
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Clear shortcut display for the help line
#[cfg(target_os = "macos")]
pub const RESET_SHORTCUT: &str = "Cmd+R";

#[cfg(not(target_os = "macos"))]
pub const RESET_SHORTCUT: &str = "Ctrl+R";
