//! Predicate registry: registration, compound derivation, and lookup.
//!
//! The registry is a flat map from name to [`Predicate`]. Compound variants
//! are derived eagerly at registration time rather than lazily at lookup
//! time, so `get` is a single map access with no suffix special-casing.
//!
//! # Overwrite Semantics
//!
//! Registering a name that already exists overwrites the previous definition
//! and, when derivation applies, its `_any`/`_all` entries. Re-registering
//! with `compounds(false)` does *not* remove derived entries created by an
//! earlier registration; stale compounds stay until the registry is rebuilt.
//! Callers that need a clean slate start from [`PredicateRegistry::new`].

use std::collections::HashMap;

use crate::predicate::{Predicate, PredicateDef};

/// Suffixes appended to a predicate name for its compound variants.
///
/// Derived names are plain registry keys; nothing else in the crate infers
/// structure from the suffix.
pub const COMPOUND_SUFFIXES: &[&str] = &["_any", "_all"];

/// Operators whose predicates implicitly take array values.
const ARRAY_OPERATORS: &[&str] = &["in", "not_in"];

/// Registry of predicate definitions keyed by name.
///
/// # Example
///
/// ```rust
/// use sift_predicates::{PredicateDef, PredicateRegistry};
///
/// let mut registry = PredicateRegistry::new();
/// registry.register("cont", PredicateDef::new().operator("matches"));
///
/// assert!(registry.contains("cont"));
/// assert!(registry.contains("cont_any"));
/// assert!(registry.contains("cont_all"));
/// assert_eq!(registry.get("cont").unwrap().operator, "matches");
/// ```
///
/// # Thread Safety
///
/// The registry is not synchronized. The expected lifecycle is mutation
/// during single-threaded startup followed by read-only access.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PredicateRegistry {
    predicates: HashMap<String, Predicate>,
}

impl PredicateRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry pre-populated with the stock predicate set.
    ///
    /// The stock set covers the comparison predicates (`eq`, `not_eq`,
    /// `matches`, `lt`, `lteq`, `gt`, `gteq`, ...), the string-matching
    /// shorthands (`cont`, `start`, `end` and their negations), the
    /// array-valued `in`/`not_in`, and the value predicates (`true`,
    /// `false`, `present`, `blank`, `null`, `not_null`).
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        register_default_predicates(&mut registry);
        registry
    }

    /// Registers a predicate, overwriting any previous definition.
    ///
    /// Unset attributes resolve here and are frozen into the stored entry:
    ///
    /// - `operator` defaults to `name`
    /// - `wants_array`: explicit value wins; otherwise `true` when the
    ///   operator is `in` or `not_in`; otherwise `false`
    /// - `compounds` defaults to `true`
    ///
    /// When `compounds` resolves to `true`, two derived entries
    /// (`name_any`, `name_all`) are also inserted with the same attributes —
    /// unless `wants_array` was explicitly set to `true`, which suppresses
    /// derivation (a flat-list value cannot take the any/all shape).
    ///
    /// Re-registration is not an error; last write wins.
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty or whitespace-only. A nameless predicate is
    /// a programming error in host startup code, not a recoverable
    /// condition.
    pub fn register(&mut self, name: impl Into<String>, def: PredicateDef) {
        let name = name.into();
        assert!(
            !name.trim().is_empty(),
            "predicate name must be a non-empty string"
        );

        let operator = def.operator.unwrap_or_else(|| name.clone());
        let wants_array = match def.wants_array {
            Some(explicit) => explicit,
            None => ARRAY_OPERATORS.contains(&operator.as_str()),
        };
        let derive_compounds = def.compounds.unwrap_or(true) && def.wants_array != Some(true);

        self.predicates.insert(
            name.clone(),
            Predicate {
                name: name.clone(),
                operator: operator.clone(),
                wants_array,
                compound: false,
            },
        );

        if derive_compounds {
            for suffix in COMPOUND_SUFFIXES {
                let compound_name = format!("{name}{suffix}");
                self.predicates.insert(
                    compound_name.clone(),
                    Predicate {
                        name: compound_name,
                        operator: operator.clone(),
                        wants_array,
                        compound: true,
                    },
                );
            }
        }
    }

    /// Looks up a predicate by name.
    ///
    /// Derived `_any`/`_all` names resolve if and only if derivation actually
    /// ran for them; there is no fallback to the base name. Callers treat
    /// `None` as "unsupported predicate" and reject the condition.
    pub fn get(&self, name: &str) -> Option<&Predicate> {
        self.predicates.get(name)
    }

    /// Returns true if a predicate with this exact name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.predicates.contains_key(name)
    }

    /// Returns an iterator over all registered names, derived entries
    /// included. Order is unspecified.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.predicates.keys().map(|s| s.as_str())
    }

    /// Returns the number of registered predicates (derived entries count).
    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    /// Returns true if no predicates are registered.
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Removes all predicates.
    pub fn clear(&mut self) {
        self.predicates.clear();
    }
}

/// Registers the stock predicate set.
///
/// Comparison and matching predicates get compound variants; the
/// array-valued and value predicates do not.
fn register_default_predicates(registry: &mut PredicateRegistry) {
    // (name, operator) pairs that compound.
    const COMPOUNDING: &[(&str, &str)] = &[
        ("eq", "eq"),
        ("not_eq", "not_eq"),
        ("matches", "matches"),
        ("does_not_match", "does_not_match"),
        ("lt", "lt"),
        ("lteq", "lteq"),
        ("gt", "gt"),
        ("gteq", "gteq"),
        ("cont", "matches"),
        ("not_cont", "does_not_match"),
        ("start", "matches"),
        ("not_start", "does_not_match"),
        ("end", "matches"),
        ("not_end", "does_not_match"),
    ];
    for (name, operator) in COMPOUNDING {
        registry.register(*name, PredicateDef::new().operator(*operator));
    }

    registry.register("in", PredicateDef::new().wants_array(true));
    registry.register("not_in", PredicateDef::new().wants_array(true));

    // Value predicates: fixed comparison against a constant, no compounds.
    const VALUE_PREDICATES: &[(&str, &str)] = &[
        ("true", "eq"),
        ("false", "eq"),
        ("present", "not_eq"),
        ("blank", "eq"),
        ("null", "eq"),
        ("not_null", "not_eq"),
    ];
    for (name, operator) in VALUE_PREDICATES {
        registry.register(*name, PredicateDef::new().operator(*operator).compounds(false));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Registration and derivation
    // =========================================================================

    #[test]
    fn register_creates_compound_variants() {
        let mut registry = PredicateRegistry::new();
        registry.register("test_predicate", PredicateDef::new());

        assert!(registry.contains("test_predicate"));
        assert!(registry.contains("test_predicate_any"));
        assert!(registry.contains("test_predicate_all"));
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn register_compounds_false_creates_base_only() {
        let mut registry = PredicateRegistry::new();
        registry.register("no_compound", PredicateDef::new().compounds(false));

        assert!(registry.contains("no_compound"));
        assert!(!registry.contains("no_compound_any"));
        assert!(!registry.contains("no_compound_all"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn derived_entries_copy_parent_attributes() {
        let mut registry = PredicateRegistry::new();
        registry.register("custom", PredicateDef::new().operator("matches"));

        let derived = registry.get("custom_any").unwrap();
        assert_eq!(derived.name, "custom_any");
        assert_eq!(derived.operator, "matches");
        assert!(!derived.wants_array);
        assert!(derived.compound);

        let base = registry.get("custom").unwrap();
        assert!(!base.compound);
    }

    #[test]
    fn derived_entries_are_not_re_expanded() {
        let mut registry = PredicateRegistry::new();
        registry.register("p", PredicateDef::new());

        // Single-level derivation only.
        assert!(!registry.contains("p_any_any"));
        assert!(!registry.contains("p_all_any"));
    }

    #[test]
    fn operator_defaults_to_name() {
        let mut registry = PredicateRegistry::new();
        registry.register("gteq", PredicateDef::new());
        assert_eq!(registry.get("gteq").unwrap().operator, "gteq");
    }

    // =========================================================================
    // wants_array resolution
    // =========================================================================

    #[test]
    fn wants_array_inferred_for_in_operators() {
        let mut registry = PredicateRegistry::new();
        registry.register("test_in", PredicateDef::new().operator("in"));
        registry.register("test_not_in", PredicateDef::new().operator("not_in"));

        assert!(registry.get("test_in").unwrap().wants_array);
        assert!(registry.get("test_not_in").unwrap().wants_array);
    }

    #[test]
    fn wants_array_explicit_false_overrides_inference() {
        let mut registry = PredicateRegistry::new();
        registry.register(
            "test_in_no_array",
            PredicateDef::new().operator("in").wants_array(false),
        );
        registry.register(
            "test_not_in_no_array",
            PredicateDef::new().operator("not_in").wants_array(false),
        );

        assert!(!registry.get("test_in_no_array").unwrap().wants_array);
        assert!(!registry.get("test_not_in_no_array").unwrap().wants_array);
    }

    #[test]
    fn wants_array_defaults_false_for_other_operators() {
        let mut registry = PredicateRegistry::new();
        registry.register("test_eq", PredicateDef::new().operator("eq"));
        assert!(!registry.get("test_eq").unwrap().wants_array);
    }

    #[test]
    fn explicit_wants_array_suppresses_compounds() {
        let mut registry = PredicateRegistry::new();
        registry.register(
            "test_array_predicate",
            PredicateDef::new().wants_array(true).compounds(true),
        );

        assert!(registry.get("test_array_predicate").unwrap().wants_array);
        assert!(!registry.contains("test_array_predicate_any"));
        assert!(!registry.contains("test_array_predicate_all"));
    }

    #[test]
    fn inferred_wants_array_still_compounds() {
        // Inference (as opposed to an explicit wants_array) does not block
        // derivation.
        let mut registry = PredicateRegistry::new();
        registry.register("test_in", PredicateDef::new().operator("in"));

        assert!(registry.contains("test_in_any"));
        assert!(registry.get("test_in_any").unwrap().wants_array);
    }

    // =========================================================================
    // Overwrite semantics
    // =========================================================================

    #[test]
    fn re_registration_last_write_wins() {
        let mut registry = PredicateRegistry::new();
        registry.register("p", PredicateDef::new().operator("eq"));
        registry.register("p", PredicateDef::new().operator("matches"));

        assert_eq!(registry.get("p").unwrap().operator, "matches");
        assert_eq!(registry.get("p_any").unwrap().operator, "matches");
    }

    #[test]
    fn re_registration_with_compounds_false_keeps_stale_derived_entries() {
        let mut registry = PredicateRegistry::new();
        registry.register("p", PredicateDef::new());
        registry.register("p", PredicateDef::new().operator("matches").compounds(false));

        // Base is updated, derived entries survive with the old attributes.
        assert_eq!(registry.get("p").unwrap().operator, "matches");
        assert!(registry.contains("p_any"));
        assert_eq!(registry.get("p_any").unwrap().operator, "p");
    }

    #[test]
    #[should_panic(expected = "non-empty")]
    fn register_empty_name_panics() {
        let mut registry = PredicateRegistry::new();
        registry.register("", PredicateDef::new());
    }

    #[test]
    #[should_panic(expected = "non-empty")]
    fn register_whitespace_name_panics() {
        let mut registry = PredicateRegistry::new();
        registry.register("   ", PredicateDef::new());
    }

    // =========================================================================
    // Lookup and introspection
    // =========================================================================

    #[test]
    fn get_unregistered_returns_none() {
        let registry = PredicateRegistry::new();
        assert!(registry.get("missing").is_none());
    }

    #[test]
    fn names_is_restartable() {
        let mut registry = PredicateRegistry::new();
        registry.register("a", PredicateDef::new().compounds(false));
        registry.register("b", PredicateDef::new().compounds(false));

        let first: Vec<&str> = registry.names().collect();
        let second: Vec<&str> = registry.names().collect();
        assert_eq!(first.len(), 2);
        assert_eq!(second.len(), 2);
    }

    #[test]
    fn clear_empties_registry() {
        let mut registry = PredicateRegistry::new();
        registry.register("a", PredicateDef::new());
        assert!(!registry.is_empty());

        registry.clear();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    // =========================================================================
    // Default predicate set
    // =========================================================================

    #[test]
    fn defaults_include_comparison_predicates_with_compounds() {
        let registry = PredicateRegistry::with_defaults();

        for name in ["eq", "not_eq", "lt", "lteq", "gt", "gteq", "cont"] {
            assert!(registry.contains(name), "missing {name}");
            assert!(registry.contains(&format!("{name}_any")), "missing {name}_any");
            assert!(registry.contains(&format!("{name}_all")), "missing {name}_all");
        }
    }

    #[test]
    fn defaults_string_shorthands_map_to_matches() {
        let registry = PredicateRegistry::with_defaults();
        assert_eq!(registry.get("cont").unwrap().operator, "matches");
        assert_eq!(registry.get("not_cont").unwrap().operator, "does_not_match");
        assert_eq!(registry.get("start").unwrap().operator, "matches");
        assert_eq!(registry.get("end").unwrap().operator, "matches");
    }

    #[test]
    fn defaults_in_predicates_want_arrays_without_compounds() {
        let registry = PredicateRegistry::with_defaults();

        for name in ["in", "not_in"] {
            let p = registry.get(name).unwrap();
            assert!(p.wants_array);
            assert!(!registry.contains(&format!("{name}_any")));
            assert!(!registry.contains(&format!("{name}_all")));
        }
    }

    #[test]
    fn defaults_value_predicates_have_no_compounds() {
        let registry = PredicateRegistry::with_defaults();

        for name in ["true", "false", "present", "blank", "null", "not_null"] {
            assert!(registry.contains(name), "missing {name}");
            assert!(!registry.contains(&format!("{name}_any")));
        }
        assert_eq!(registry.get("present").unwrap().operator, "not_eq");
        assert_eq!(registry.get("null").unwrap().operator, "eq");
    }
}
