//! Type-safe key bindings shared by the table and its popup menu.
//!
//! A [`Binding`] groups one or more [`KeyPress`]es with the help text shown
//! for them. Keymaps implement [`KeyMap`] so a help line can be generated
//! from whatever bindings are active.
//!
//! ```rust
//! use bubbletea_table::key::{self, Binding, KeyPress};
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let sort = key::new_binding(vec![
//!     key::with_keys_str(&["ctrl+o"]),
//!     key::with_help("ctrl+o", "sort"),
//! ]);
//! assert!(sort.matches_key(&KeyPress::from((KeyCode::Char('o'), KeyModifiers::CONTROL))));
//!
//! let activate = Binding::new(vec![KeyCode::Enter, KeyCode::Char(' ')])
//!     .with_help("space/enter", "toggle");
//! assert_eq!(activate.help().key, "space/enter");
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key together with the modifiers that must be held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key code.
    pub code: KeyCode,
    /// Modifiers that must be held. SHIFT is ignored when matching.
    pub mods: KeyModifiers,
}

impl KeyPress {
    fn normalized_mods(mods: KeyModifiers) -> KeyModifiers {
        mods.difference(KeyModifiers::SHIFT)
    }

    /// Returns true if `code` pressed with `mods` triggers this key press.
    pub fn accepts(&self, code: KeyCode, mods: KeyModifiers) -> bool {
        self.code == code && Self::normalized_mods(self.mods) == Self::normalized_mods(mods)
    }
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            mods: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, mods): (KeyCode, KeyModifiers)) -> Self {
        Self { code, mods }
    }
}

impl From<&KeyMsg> for KeyPress {
    fn from(msg: &KeyMsg) -> Self {
        Self {
            code: msg.key,
            mods: msg.modifiers,
        }
    }
}

/// Parses a key spec such as `"ctrl+n"`, `"space"`, `"pgdown"` or `"q"`.
///
/// Returns `None` for specs that name no known key.
pub fn parse_key(spec: &str) -> Option<KeyPress> {
    let mut mods = KeyModifiers::NONE;
    let mut rest = spec;
    loop {
        if let Some(r) = rest.strip_prefix("ctrl+") {
            mods |= KeyModifiers::CONTROL;
            rest = r;
        } else if let Some(r) = rest.strip_prefix("alt+") {
            mods |= KeyModifiers::ALT;
            rest = r;
        } else if let Some(r) = rest.strip_prefix("shift+") {
            mods |= KeyModifiers::SHIFT;
            rest = r;
        } else {
            break;
        }
    }

    let code = match rest {
        "space" | " " => KeyCode::Char(' '),
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "backspace" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pgup" | "pageup" => KeyCode::PageUp,
        "pgdown" | "pagedown" => KeyCode::PageDown,
        other => {
            let mut chars = other.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => return None,
            }
        }
    };
    Some(KeyPress { code, mods })
}

/// Help text attached to a binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Short key label, e.g. `"ctrl+o"`.
    pub key: String,
    /// What the key does, e.g. `"sort"`.
    pub desc: String,
}

/// A set of keys that trigger one action, plus its help text.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates a binding from anything convertible into key presses.
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
            disabled: false,
        }
    }

    /// Sets the help text.
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Replaces the bound keys.
    pub fn set_keys<K: Into<KeyPress>>(&mut self, keys: Vec<K>) {
        self.keys = keys.into_iter().map(Into::into).collect();
    }

    /// The bound keys.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// The help text.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Enables or disables the binding. Disabled bindings never match.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Whether the binding is enabled and has keys.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Returns true if the key message triggers this binding.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.matches_key(&KeyPress::from(msg))
    }

    /// Returns true if the key press triggers this binding.
    pub fn matches_key(&self, press: &KeyPress) -> bool {
        self.enabled() && self.keys.iter().any(|k| k.accepts(press.code, press.mods))
    }
}

/// Option applied by [`new_binding`].
pub type BindingOpt = Box<dyn FnOnce(&mut Binding)>;

/// Builds a binding from a list of options.
pub fn new_binding(opts: Vec<BindingOpt>) -> Binding {
    let mut binding = Binding::default();
    for opt in opts {
        opt(&mut binding);
    }
    binding
}

/// Option: bind the given key presses.
pub fn with_keys(keys: Vec<KeyPress>) -> BindingOpt {
    Box::new(move |b: &mut Binding| b.keys = keys)
}

/// Option: bind keys given as string specs. Unknown specs are skipped.
pub fn with_keys_str(specs: &[&str]) -> BindingOpt {
    let keys: Vec<KeyPress> = specs.iter().filter_map(|s| parse_key(s)).collect();
    with_keys(keys)
}

/// Option: set the help text.
pub fn with_help(key: &str, desc: &str) -> BindingOpt {
    let help = Help {
        key: key.to_string(),
        desc: desc.to_string(),
    };
    Box::new(move |b: &mut Binding| b.help = help)
}

/// Option: start out disabled.
pub fn with_disabled() -> BindingOpt {
    Box::new(|b: &mut Binding| b.disabled = true)
}

/// Returns true if the key message triggers any of the bindings.
pub fn matches(msg: &KeyMsg, bindings: &[&Binding]) -> bool {
    bindings.iter().any(|b| b.matches(msg))
}

/// Returns true if the key message triggers the binding.
pub fn matches_binding(msg: &KeyMsg, binding: &Binding) -> bool {
    binding.matches(msg)
}

/// Implemented by keymaps to expose their bindings to a help line.
pub trait KeyMap {
    /// The few bindings shown in the one-line help.
    fn short_help(&self) -> Vec<&Binding>;

    /// All bindings, grouped in columns.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

/// Renders bindings as `key desc • key desc`, skipping disabled ones.
pub fn short_help_line(bindings: &[&Binding]) -> String {
    bindings
        .iter()
        .filter(|b| b.enabled())
        .map(|b| format!("{} {}", b.help().key, b.help().desc))
        .collect::<Vec<_>>()
        .join(" • ")
}
