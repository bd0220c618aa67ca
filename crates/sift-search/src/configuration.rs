//! The configuration object: one predicate registry plus one options set.
//!
//! [`Configuration`] is the single object host startup code mutates. It owns
//! the [`PredicateRegistry`] and the [`Options`] for its lifetime; predicate
//! registration routes through it so callers never touch the registry out of
//! band.
//!
//! A process normally has exactly one logical configuration — the shared
//! instance behind [`configure`](crate::configure) — but the type itself is
//! ordinary owned data, so tests and embedded hosts can build isolated
//! instances freely.

use std::path::Path;

use serde_json::Value;
use sift_predicates::{PredicateDef, PredicateRegistry};

use crate::error::OptionsError;
use crate::options::{CustomArrows, Options};

/// Search configuration: predicate registry plus global options.
///
/// # Example
///
/// ```rust
/// use sift_search::{Configuration, CustomArrows, PredicateDef};
///
/// let mut config = Configuration::new();
/// config.add_predicate("btwn", PredicateDef::new().operator("between"));
/// config.set_search_key("filter");
/// config.custom_arrows(CustomArrows::new().up("▲"));
///
/// assert!(config.predicates().contains("btwn_any"));
/// assert_eq!(config.options().search_key, "filter");
/// ```
#[derive(Debug, Clone)]
pub struct Configuration {
    predicates: PredicateRegistry,
    options: Options,
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new()
    }
}

impl Configuration {
    /// Creates a configuration with the stock predicate set and default
    /// options.
    pub fn new() -> Self {
        Self {
            predicates: PredicateRegistry::with_defaults(),
            options: Options::new(),
        }
    }

    /// Registers a predicate. Delegates to
    /// [`PredicateRegistry::register`]; see there for attribute resolution,
    /// compound derivation, and overwrite semantics.
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty or whitespace-only.
    pub fn add_predicate(&mut self, name: impl Into<String>, def: PredicateDef) {
        self.predicates.register(name, def);
    }

    /// Sets the top-level search parameter name.
    pub fn set_search_key(&mut self, search_key: impl Into<String>) {
        self.options.search_key = search_key.into();
    }

    /// Sets an option by key. See [`Options::set`].
    pub fn set_option(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.options.set(key, value);
    }

    /// Applies a partial arrow override. See [`Options::apply_arrows`].
    pub fn custom_arrows(&mut self, arrows: CustomArrows) {
        self.options.apply_arrows(arrows);
    }

    /// Returns the predicate registry.
    pub fn predicates(&self) -> &PredicateRegistry {
        &self.predicates
    }

    /// Returns the options.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Returns a snapshot of the current options.
    ///
    /// Option values are scalars and strings, so a clone is a full snapshot.
    pub fn options_snapshot(&self) -> Options {
        self.options.clone()
    }

    /// Replaces the options wholesale with a previously taken snapshot.
    ///
    /// `restore_options(options_snapshot())` is a no-op.
    pub fn restore_options(&mut self, snapshot: Options) {
        self.options = snapshot;
    }

    /// Replaces the options from YAML content. See [`Options::from_yaml`].
    ///
    /// # Errors
    ///
    /// Returns [`OptionsError::Parse`] if the content is not valid YAML.
    pub fn load_options_yaml(&mut self, yaml: &str) -> Result<(), OptionsError> {
        self.options = Options::from_yaml(yaml)?;
        Ok(())
    }

    /// Replaces the options from a YAML file. See [`Options::from_file`].
    ///
    /// # Errors
    ///
    /// Returns [`OptionsError::Read`] or [`OptionsError::Parse`].
    pub fn load_options_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), OptionsError> {
        self.options = Options::from_file(path)?;
        Ok(())
    }
}
