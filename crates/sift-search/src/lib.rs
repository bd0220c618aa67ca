//! Sift Search - search configuration engine.
//!
//! This crate turns a registry of named predicates and a set of global
//! options into a single configuration object that host applications mutate
//! at startup and read at query-construction time. It covers:
//!
//! - Predicate registration with compound (`_any`/`_all`) derivation,
//!   re-exported from `sift-predicates`
//! - Typed options with defaults (`search_key`, sort arrows, whitespace
//!   handling) plus an open extension map for host-specific keys
//! - Layered overrides: defaults, then `configure` calls, then partial
//!   [`CustomArrows`] merges that compose key by key
//! - A process-wide shared instance with a closure-based mutation protocol
//! - Snapshot/restore of options for leak-free test bracketing
//!
//! What it deliberately does *not* do: parse query strings, build or execute
//! data-store queries, or render anything. Those collaborators only read
//! predicate definitions and options from here.
//!
//! # Quick Start
//!
//! ```rust
//! use sift_search::{configure, with_config, CustomArrows, PredicateDef};
//!
//! // Host startup: register predicates, adjust options.
//! configure(|config| {
//!     config.add_predicate("ilike", PredicateDef::new().operator("matches"));
//!     config.set_search_key("q");
//!     config.custom_arrows(CustomArrows::new().up("↑").down("↓"));
//! });
//!
//! // Query-construction time: look up what the input named.
//! let supported = with_config(|config| config.predicates().contains("ilike_any"));
//! assert!(supported);
//! ```
//!
//! # Owned Configurations
//!
//! [`Configuration`] is ordinary owned data. Embedded hosts that want
//! several independent configurations can skip the shared instance
//! entirely and pass `&Configuration` themselves:
//!
//! ```rust
//! use sift_search::{Configuration, PredicateDef};
//!
//! let mut config = Configuration::new();
//! config.add_predicate("btwn", PredicateDef::new().operator("between"));
//! assert!(config.predicates().contains("btwn"));
//! ```

mod configuration;
mod error;
mod global;
mod options;

// Re-export public API
pub use configuration::Configuration;
pub use error::OptionsError;
pub use global::{
    configure, options, options_snapshot, predicate, restore_options, search_key, with_config,
};
pub use options::{
    CustomArrows, Options, DEFAULT_DOWN_ARROW, DEFAULT_SEARCH_KEY, DEFAULT_UP_ARROW,
};

// Re-export the predicate vocabulary so hosts depend on one crate.
pub use sift_predicates::{Predicate, PredicateDef, PredicateRegistry, COMPOUND_SUFFIXES};
