//! Keybinding configuration for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::Deserialize;

use crate::tui::event::Action;

/// Key strings bound to each action. The first match wins, in the order
/// checked by [`KeybindingConfig::get_action`].
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct KeybindingConfig {
    pub quit: Vec<String>,
    pub move_up: Vec<String>,
    pub move_down: Vec<String>,
    pub select: Vec<String>,
    pub back: Vec<String>,
    pub toggle_bookmark: Vec<String>,
    pub toggle_bookmarks_view: Vec<String>,
    pub open_in_browser: Vec<String>,
    pub refresh: Vec<String>,
    pub toggle_theme: Vec<String>,
}

fn keys(bindings: &[&str]) -> Vec<String> {
    bindings.iter().map(|b| b.to_string()).collect()
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self {
            quit: keys(&["q", "Ctrl+c"]),
            move_up: keys(&["k", "Up"]),
            move_down: keys(&["j", "Down"]),
            select: keys(&["Enter", "c"]),
            back: keys(&["Esc", "Backspace", "h"]),
            toggle_bookmark: keys(&["b"]),
            toggle_bookmarks_view: keys(&["B", "Tab"]),
            open_in_browser: keys(&["o"]),
            refresh: keys(&["R"]),
            toggle_theme: keys(&["t"]),
        }
    }
}

impl KeybindingConfig {
    /// Get the action for a key event.
    pub fn get_action(&self, key: &KeyEvent) -> Action {
        let table = [
            (&self.quit, Action::Quit),
            (&self.move_up, Action::MoveUp),
            (&self.move_down, Action::MoveDown),
            (&self.select, Action::Select),
            (&self.back, Action::Back),
            (&self.toggle_bookmark, Action::ToggleBookmark),
            (&self.toggle_bookmarks_view, Action::ToggleBookmarksView),
            (&self.open_in_browser, Action::OpenInBrowser),
            (&self.refresh, Action::Refresh),
            (&self.toggle_theme, Action::ToggleTheme),
        ];

        table
            .into_iter()
            .find(|(bindings, _)| self.matches_key(key, bindings))
            .map(|(_, action)| action)
            .unwrap_or(Action::None)
    }

    fn matches_key(&self, key: &KeyEvent, bindings: &[String]) -> bool {
        bindings.iter().any(|binding| {
            parse_key_string(binding)
                .map(|parsed| parsed.matches(key))
                .unwrap_or(false)
        })
    }
}

/// A parsed key binding with code and modifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Check if this binding matches a key event.
    pub fn matches(&self, key: &KeyEvent) -> bool {
        self.code == key.code
            && (self.modifiers == key.modifiers
                || self.modifiers == (key.modifiers & !KeyModifiers::SHIFT))
    }
}

/// Parse a key string such as `"j"`, `"Enter"`, `"F5"` or `"Ctrl+Shift+a"`.
pub fn parse_key_string(s: &str) -> Result<KeyBinding, String> {
    let s = s.trim();
    let (mods, key) = if let Some(mods) = s.strip_suffix("++") {
        (Some(mods), "+")
    } else {
        match s.rsplit_once('+') {
            Some((mods, key)) if !key.is_empty() => (Some(mods), key),
            _ => (None, s),
        }
    };

    let mut modifiers = KeyModifiers::NONE;
    for part in mods.into_iter().flat_map(|m| m.split('+')) {
        modifiers |= match part.to_lowercase().as_str() {
            "ctrl" | "control" => KeyModifiers::CONTROL,
            "shift" => KeyModifiers::SHIFT,
            "alt" => KeyModifiers::ALT,
            _ => return Err(format!("Unknown modifier: {}", part)),
        };
    }

    Ok(KeyBinding {
        code: parse_key_code(key)?,
        modifiers,
    })
}

fn parse_key_code(s: &str) -> Result<KeyCode, String> {
    let mut chars = s.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(KeyCode::Char(c));
    }

    let lower = s.to_lowercase();
    let code = match lower.as_str() {
        "enter" | "return" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "backspace" | "bs" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" | "pgup" => KeyCode::PageUp,
        "pagedown" | "pgdn" => KeyCode::PageDown,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "esc" | "escape" => KeyCode::Esc,
        "space" => KeyCode::Char(' '),
        other => match other.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
            Some(n @ 1..=12) => KeyCode::F(n),
            _ => return Err(format!("Unknown key: {}", s)),
        },
    };

    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_parse_plain_keys() {
        assert_eq!(parse_key_string("j").unwrap().code, KeyCode::Char('j'));
        assert_eq!(parse_key_string("B").unwrap().code, KeyCode::Char('B'));
        assert_eq!(parse_key_string("Esc").unwrap().code, KeyCode::Esc);
        assert_eq!(parse_key_string("backspace").unwrap().code, KeyCode::Backspace);
        assert_eq!(parse_key_string("F12").unwrap().code, KeyCode::F(12));
        assert_eq!(parse_key_string("j").unwrap().modifiers, KeyModifiers::NONE);
    }

    #[test]
    fn test_parse_modifiers() {
        let binding = parse_key_string("Ctrl+Shift+a").unwrap();
        assert_eq!(binding.code, KeyCode::Char('a'));
        assert_eq!(binding.modifiers, KeyModifiers::CONTROL | KeyModifiers::SHIFT);

        let binding = parse_key_string("Ctrl++").unwrap();
        assert_eq!(binding.code, KeyCode::Char('+'));
        assert_eq!(binding.modifiers, KeyModifiers::CONTROL);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!(parse_key_string("Hyper+j").is_err());
        assert!(parse_key_string("F13").is_err());
        assert!(parse_key_string("nope").is_err());
    }

    #[test]
    fn test_binding_requires_modifier() {
        let binding = parse_key_string("Ctrl+c").unwrap();
        assert!(binding.matches(&press(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!binding.matches(&press(KeyCode::Char('c'), KeyModifiers::NONE)));
    }

    #[test]
    fn test_default_actions() {
        let config = KeybindingConfig::default();
        let cases = [
            (press(KeyCode::Char('q'), KeyModifiers::NONE), Action::Quit),
            (press(KeyCode::Char('c'), KeyModifiers::CONTROL), Action::Quit),
            (press(KeyCode::Char('c'), KeyModifiers::NONE), Action::Select),
            (press(KeyCode::Enter, KeyModifiers::NONE), Action::Select),
            (press(KeyCode::Esc, KeyModifiers::NONE), Action::Back),
            (press(KeyCode::Char('b'), KeyModifiers::NONE), Action::ToggleBookmark),
            (press(KeyCode::Char('B'), KeyModifiers::SHIFT), Action::ToggleBookmarksView),
            (press(KeyCode::Tab, KeyModifiers::NONE), Action::ToggleBookmarksView),
            (press(KeyCode::Char('o'), KeyModifiers::NONE), Action::OpenInBrowser),
            (press(KeyCode::Char('R'), KeyModifiers::SHIFT), Action::Refresh),
            (press(KeyCode::Char('t'), KeyModifiers::NONE), Action::ToggleTheme),
            (press(KeyCode::Char('x'), KeyModifiers::NONE), Action::None),
        ];

        for (key, action) in cases {
            assert_eq!(config.get_action(&key), action, "{:?}", key);
        }
    }

    #[test]
    fn test_custom_binding_from_toml() {
        let config: KeybindingConfig = toml::from_str(r#"toggle_theme = ["F2"]"#).unwrap();
        assert_eq!(
            config.get_action(&press(KeyCode::F(2), KeyModifiers::NONE)),
            Action::ToggleTheme
        );
        assert_eq!(
            config.get_action(&press(KeyCode::Char('t'), KeyModifiers::NONE)),
            Action::None
        );
        // Untouched actions keep their defaults.
        assert_eq!(
            config.get_action(&press(KeyCode::Char('q'), KeyModifiers::NONE)),
            Action::Quit
        );
    }
}
