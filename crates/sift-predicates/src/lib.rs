//! Sift Predicates - Predicate definitions and registry for search conditions.
//!
//! A predicate is a named comparison operator (`eq`, `cont`, `gteq`, ...) that
//! host applications combine with attribute names to build query conditions
//! from flat key/value input such as URL query parameters. This crate owns the
//! predicate vocabulary: registration, lookup, and the derivation of compound
//! `_any`/`_all` variants.
//!
//! Predicates are data, not behavior. The registry stores plain serializable
//! definitions; interpreting a predicate (turning `operator` and `wants_array`
//! into an actual data-store condition) is the query builder's job, not ours.
//!
//! # Quick Start
//!
//! ```rust
//! use sift_predicates::{PredicateDef, PredicateRegistry};
//!
//! let mut registry = PredicateRegistry::with_defaults();
//!
//! // Stock predicates come with compound variants
//! assert!(registry.contains("eq"));
//! assert!(registry.contains("eq_any"));
//! assert!(registry.contains("eq_all"));
//!
//! // Register a custom predicate
//! registry.register("btwn", PredicateDef::new().operator("between"));
//! assert!(registry.contains("btwn_any"));
//!
//! // Lookup drives query shaping downstream
//! let p = registry.get("in").unwrap();
//! assert!(p.wants_array);
//! ```
//!
//! # Compound Derivation
//!
//! Registering a predicate with `compounds` enabled (the default) eagerly
//! inserts two derived entries, `name_any` and `name_all`, copying the parent
//! attributes. Derivation happens at registration time so lookups stay O(1)
//! with no suffix parsing; derived names are opaque keys like any other.
//!
//! Derived entries are never re-expanded, and a predicate registered with an
//! explicit `wants_array(true)` gets no compound variants at all: its value is
//! already a flat list, and the `_any`/`_all` shape would call for a list of
//! lists.

mod predicate;
mod registry;

pub use predicate::{Predicate, PredicateDef};
pub use registry::{PredicateRegistry, COMPOUND_SUFFIXES};
