/// Configurable key bindings
///
/// Bindings are written as strings such as `"q"`, `"enter"` or `"ctrl+c"`
/// and parsed into crossterm key codes once, when the config is read.
use std::fmt;
use std::str::FromStr;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Deserializer};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid key binding: {0:?}")]
pub struct InvalidKeyBinding(pub String);

/// A single key plus modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    /// Whether `key` triggers this binding
    ///
    /// Shift is ignored for character keys since the character itself
    /// already carries the case.
    pub fn matches(&self, key: &KeyEvent) -> bool {
        if key.code != self.code {
            return false;
        }
        let mut modifiers = key.modifiers;
        if matches!(key.code, KeyCode::Char(_)) {
            modifiers.remove(KeyModifiers::SHIFT);
        }
        modifiers == self.modifiers
    }
}

impl FromStr for KeyBinding {
    type Err = InvalidKeyBinding;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidKeyBinding(s.to_string());
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(invalid());
        }

        let mut modifiers = KeyModifiers::NONE;
        let mut key = trimmed;
        // "+" on its own is a key, not a separator
        while let Some((modifier, rest)) = key.split_once('+').filter(|(_, rest)| !rest.is_empty()) {
            match modifier.to_lowercase().as_str() {
                "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
                "alt" => modifiers |= KeyModifiers::ALT,
                "shift" => modifiers |= KeyModifiers::SHIFT,
                _ => return Err(invalid()),
            }
            key = rest;
        }

        let code = match key.to_lowercase().as_str() {
            "enter" | "return" => KeyCode::Enter,
            "esc" | "escape" => KeyCode::Esc,
            "backspace" => KeyCode::Backspace,
            "tab" => KeyCode::Tab,
            "space" => KeyCode::Char(' '),
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "pgup" | "pageup" => KeyCode::PageUp,
            "pgdown" | "pagedown" => KeyCode::PageDown,
            "delete" | "del" => KeyCode::Delete,
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => KeyCode::Char(c),
                    _ => return Err(invalid()),
                }
            }
        };

        Ok(KeyBinding::new(code, modifiers))
    }
}

impl fmt::Display for KeyBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            write!(f, "ctrl+")?;
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            write!(f, "alt+")?;
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            write!(f, "shift+")?;
        }
        match self.code {
            KeyCode::Enter => write!(f, "enter"),
            KeyCode::Esc => write!(f, "esc"),
            KeyCode::Backspace => write!(f, "backspace"),
            KeyCode::Tab => write!(f, "tab"),
            KeyCode::Char(' ') => write!(f, "space"),
            KeyCode::Char(c) => write!(f, "{}", c),
            KeyCode::Up => write!(f, "up"),
            KeyCode::Down => write!(f, "down"),
            KeyCode::Left => write!(f, "left"),
            KeyCode::Right => write!(f, "right"),
            KeyCode::Home => write!(f, "home"),
            KeyCode::End => write!(f, "end"),
            KeyCode::PageUp => write!(f, "pgup"),
            KeyCode::PageDown => write!(f, "pgdown"),
            KeyCode::Delete => write!(f, "delete"),
            other => write!(f, "{:?}", other),
        }
    }
}

impl<'de> Deserialize<'de> for KeyBinding {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Logical actions and the keys bound to each
///
/// `esc` is bound to both `quit` and `back` by default. The shell checks
/// `quit` before any screen sees the key, so `back` is reachable through
/// its other bindings unless the config removes `esc` from `quit`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct KeyMap {
    #[serde(deserialize_with = "non_empty_bindings")]
    pub quit: Vec<KeyBinding>,
    pub select: Vec<KeyBinding>,
    pub back: Vec<KeyBinding>,
    pub retry: Vec<KeyBinding>,
}

impl Default for KeyMap {
    fn default() -> Self {
        KeyMap {
            quit: vec![
                KeyBinding::plain(KeyCode::Char('q')),
                KeyBinding::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
                KeyBinding::plain(KeyCode::Esc),
            ],
            select: vec![KeyBinding::plain(KeyCode::Enter)],
            back: vec![
                KeyBinding::plain(KeyCode::Backspace),
                KeyBinding::plain(KeyCode::Esc),
            ],
            retry: vec![KeyBinding::plain(KeyCode::Char('r'))],
        }
    }
}

/// Logical key actions understood by the shell and screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    Select,
    Back,
    Retry,
}

impl KeyMap {
    pub fn is_quit(&self, key: &KeyEvent) -> bool {
        any_match(&self.quit, key)
    }

    /// Resolve a key to a logical action, checked in the order
    /// quit, select, back, retry
    pub fn action(&self, key: &KeyEvent) -> Option<KeyAction> {
        if any_match(&self.quit, key) {
            Some(KeyAction::Quit)
        } else if any_match(&self.select, key) {
            Some(KeyAction::Select)
        } else if any_match(&self.back, key) {
            Some(KeyAction::Back)
        } else if any_match(&self.retry, key) {
            Some(KeyAction::Retry)
        } else {
            None
        }
    }

    /// First binding for an action, for key hints
    pub fn hint(&self, action: KeyAction) -> String {
        let bindings = match action {
            KeyAction::Quit => &self.quit,
            KeyAction::Select => &self.select,
            KeyAction::Back => &self.back,
            KeyAction::Retry => &self.retry,
        };
        bindings.first().map(|b| b.to_string()).unwrap_or_default()
    }
}

/// A keymap without a quit key would leave raw mode with no way out
fn non_empty_bindings<'de, D>(deserializer: D) -> Result<Vec<KeyBinding>, D::Error>
where
    D: Deserializer<'de>,
{
    let bindings = Vec::<KeyBinding>::deserialize(deserializer)?;
    if bindings.is_empty() {
        return Err(serde::de::Error::custom("quit needs at least one key"));
    }
    Ok(bindings)
}

fn any_match(bindings: &[KeyBinding], key: &KeyEvent) -> bool {
    bindings.iter().any(|binding| binding.matches(key))
}
