//! Global search options with layered override semantics.
//!
//! [`Options`] is a typed struct for the documented settings plus an open
//! extension map for everything else: unknown keys are stored, not rejected,
//! so rendering collaborators can stash their own settings without this crate
//! knowing about them.
//!
//! # Arrow Overrides
//!
//! The sort-direction glyphs have a dedicated override type,
//! [`CustomArrows`], because their merge rule is key-by-key: a partial
//! override touches only the keys it carries. This is additive — `Some`
//! values replace, `None` values preserve whatever earlier overrides
//! produced. Four alternating single-key updates therefore compose instead
//! of resetting each other.
//!
//! # Loading
//!
//! Options can be loaded from YAML the same way themes are loaded elsewhere
//! in this workspace; unrecognized YAML keys flow into the extension map:
//!
//! ```rust
//! use sift_search::Options;
//!
//! let options = Options::from_yaml(r#"
//! search_key: filter
//! hide_sort_order_indicators: true
//! renderer_css_class: search-form
//! "#).unwrap();
//!
//! assert_eq!(options.search_key, "filter");
//! assert_eq!(
//!     options.get("renderer_css_class").unwrap().as_str(),
//!     Some("search-form"),
//! );
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::OptionsError;

/// Default top-level parameter name for nesting search criteria.
pub const DEFAULT_SEARCH_KEY: &str = "q";

/// Default ascending sort indicator (HTML entity for ▲).
pub const DEFAULT_UP_ARROW: &str = "&#9650;";

/// Default descending sort indicator (HTML entity for ▼).
pub const DEFAULT_DOWN_ARROW: &str = "&#9660;";

/// Global search options.
///
/// Named fields cover the documented settings; `extra` holds anything else.
/// Values are scalars and strings, so `Clone` doubles as the snapshot
/// mechanism for save/restore bracketing in tests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Top-level parameter name under which search criteria are nested.
    pub search_key: String,
    /// Ascending sort indicator rendered by the host.
    pub up_arrow: String,
    /// Descending sort indicator rendered by the host.
    pub down_arrow: String,
    /// Whether conditions naming unregistered predicates are silently
    /// dropped rather than treated as an error by the host.
    pub ignore_unknown_conditions: bool,
    /// Whether hosts should omit sort-direction indicators entirely.
    pub hide_sort_order_indicators: bool,
    /// Whether scalar search values are whitespace-trimmed before use.
    pub strip_whitespace: bool,
    /// Open extension map for keys this crate does not recognize.
    #[serde(flatten)]
    extra: HashMap<String, Value>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            search_key: DEFAULT_SEARCH_KEY.to_string(),
            up_arrow: DEFAULT_UP_ARROW.to_string(),
            down_arrow: DEFAULT_DOWN_ARROW.to_string(),
            ignore_unknown_conditions: true,
            hide_sort_order_indicators: false,
            strip_whitespace: true,
            extra: HashMap::new(),
        }
    }
}

impl Options {
    /// Creates options with the documented defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads options from YAML content.
    ///
    /// Missing keys keep their defaults; unrecognized keys are stored in the
    /// extension map.
    ///
    /// # Errors
    ///
    /// Returns [`OptionsError::Parse`] if the content is not valid YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, OptionsError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Loads options from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`OptionsError::Read`] if the file cannot be read, or
    /// [`OptionsError::Parse`] if its content is not valid YAML.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, OptionsError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| OptionsError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_yaml(&content)
    }

    /// Sets an option by key.
    ///
    /// Recognized keys write the corresponding typed field when the value has
    /// the right shape. Everything else — unknown keys, or a recognized key
    /// with a value of the wrong shape — lands in the extension map; nothing
    /// is rejected.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();

        let stored = match key.as_str() {
            "search_key" => assign_string(&mut self.search_key, &value),
            "up_arrow" => assign_string(&mut self.up_arrow, &value),
            "down_arrow" => assign_string(&mut self.down_arrow, &value),
            "ignore_unknown_conditions" => {
                assign_bool(&mut self.ignore_unknown_conditions, &value)
            }
            "hide_sort_order_indicators" => {
                assign_bool(&mut self.hide_sort_order_indicators, &value)
            }
            "strip_whitespace" => assign_bool(&mut self.strip_whitespace, &value),
            _ => false,
        };

        if stored {
            // A typed write supersedes any earlier extension-map entry,
            // keeping get() last-write-wins.
            self.extra.remove(&key);
        } else {
            self.extra.insert(key, value);
        }
    }

    /// Returns an option by key, unifying typed fields and the extension map.
    ///
    /// Returns `None` for keys that were never set and are not typed fields.
    pub fn get(&self, key: &str) -> Option<Value> {
        if let Some(value) = self.extra.get(key) {
            return Some(value.clone());
        }
        match key {
            "search_key" => Some(Value::String(self.search_key.clone())),
            "up_arrow" => Some(Value::String(self.up_arrow.clone())),
            "down_arrow" => Some(Value::String(self.down_arrow.clone())),
            "ignore_unknown_conditions" => Some(Value::Bool(self.ignore_unknown_conditions)),
            "hide_sort_order_indicators" => Some(Value::Bool(self.hide_sort_order_indicators)),
            "strip_whitespace" => Some(Value::Bool(self.strip_whitespace)),
            _ => None,
        }
    }

    /// Applies a partial arrow override, key by key.
    ///
    /// Keys absent from `arrows` keep their current value — including values
    /// set by earlier overrides, never resetting to the defaults.
    pub fn apply_arrows(&mut self, arrows: CustomArrows) {
        if let Some(up) = arrows.up_arrow {
            self.up_arrow = up;
        }
        if let Some(down) = arrows.down_arrow {
            self.down_arrow = down;
        }
    }
}

fn assign_string(field: &mut String, value: &Value) -> bool {
    match value.as_str() {
        Some(s) => {
            *field = s.to_string();
            true
        }
        None => false,
    }
}

fn assign_bool(field: &mut bool, value: &Value) -> bool {
    match value.as_bool() {
        Some(b) => {
            *field = b;
            true
        }
        None => false,
    }
}

/// A partial override for the sort-direction glyphs.
///
/// Zero, one, or both keys may be present. See
/// [`Options::apply_arrows`] for the merge rule.
///
/// # Example
///
/// ```rust
/// use sift_search::{CustomArrows, Options};
///
/// let mut options = Options::new();
/// options.apply_arrows(CustomArrows::new().up("▲"));
/// options.apply_arrows(CustomArrows::new().down("▼"));
///
/// assert_eq!(options.up_arrow, "▲");
/// assert_eq!(options.down_arrow, "▼");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomArrows {
    /// Replacement for the ascending indicator, if present.
    pub up_arrow: Option<String>,
    /// Replacement for the descending indicator, if present.
    pub down_arrow: Option<String>,
}

impl CustomArrows {
    /// Creates an empty override (applies as a no-op).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the ascending indicator.
    pub fn up(mut self, up_arrow: impl Into<String>) -> Self {
        self.up_arrow = Some(up_arrow.into());
        self
    }

    /// Sets the descending indicator.
    pub fn down(mut self, down_arrow: impl Into<String>) -> Self {
        self.down_arrow = Some(down_arrow.into());
        self
    }
}
