//! The shared process-wide configuration instance.
//!
//! A process has exactly one logical [`Configuration`]; this module owns it
//! and exposes the sanctioned mutation protocol:
//!
//! ```rust
//! use sift_search::{configure, search_key, CustomArrows, PredicateDef};
//!
//! configure(|config| {
//!     config.add_predicate("btwn", PredicateDef::new().operator("between"));
//!     config.custom_arrows(CustomArrows::new().up("▲"));
//! });
//!
//! assert_eq!(search_key(), "q");
//! ```
//!
//! [`configure`] runs the closure synchronously against the live shared
//! instance and returns nothing. Hosts call it during single-threaded
//! startup; test suites call it repeatedly, bracketing option mutations with
//! [`options_snapshot`] / [`restore_options`] so state never leaks across
//! tests.
//!
//! Reads after configuration has settled are safe from any thread. The
//! mutex exists because Rust globals require one, not as a concurrency
//! feature — concurrent *mutation* is out of scope. Calls to this module
//! must not be nested inside a `configure` closure (the closure already
//! holds the lock; use the `&mut Configuration` it receives).

use std::sync::{Mutex, MutexGuard, PoisonError};

use once_cell::sync::Lazy;

use sift_predicates::Predicate;

use crate::configuration::Configuration;
use crate::options::Options;

static SHARED: Lazy<Mutex<Configuration>> = Lazy::new(|| Mutex::new(Configuration::new()));

/// Locks the shared instance, recovering from poisoning.
///
/// Configuration state is plain values; a panicked writer cannot leave it
/// torn in a way a later reader could observe as corruption.
fn shared() -> MutexGuard<'static, Configuration> {
    SHARED.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Mutates the shared configuration.
///
/// This is the sole sanctioned entry point for mutating process-wide search
/// state. The closure receives the live shared instance; repeated sequential
/// calls compose.
pub fn configure<F>(f: F)
where
    F: FnOnce(&mut Configuration),
{
    f(&mut shared());
}

/// Runs a closure with read access to the shared configuration.
pub fn with_config<F, R>(f: F) -> R
where
    F: FnOnce(&Configuration) -> R,
{
    f(&shared())
}

/// Returns a clone of the shared options.
pub fn options() -> Options {
    shared().options().clone()
}

/// Returns the shared search key.
pub fn search_key() -> String {
    shared().options().search_key.clone()
}

/// Looks up a predicate in the shared registry, cloning the definition.
///
/// Returns `None` for unregistered names; callers treat that as
/// "unsupported predicate" and reject the condition.
pub fn predicate(name: &str) -> Option<Predicate> {
    shared().predicates().get(name).cloned()
}

/// Takes a snapshot of the shared options for later restoration.
pub fn options_snapshot() -> Options {
    shared().options_snapshot()
}

/// Restores the shared options from a snapshot.
pub fn restore_options(snapshot: Options) {
    shared().restore_options(snapshot);
}
