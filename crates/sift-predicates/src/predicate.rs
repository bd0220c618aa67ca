//! Predicate definitions: the stored form and the registration attributes.

use serde::{Deserialize, Serialize};

/// A stored predicate definition.
///
/// This is the frozen form produced by registration. All resolution
/// (operator defaulting, `wants_array` inference) has already happened;
/// consumers read the fields as-is.
///
/// # Example
///
/// ```rust
/// use sift_predicates::{PredicateDef, PredicateRegistry};
///
/// let mut registry = PredicateRegistry::new();
/// registry.register("not_in", PredicateDef::new());
///
/// let p = registry.get("not_in").unwrap();
/// assert_eq!(p.operator, "not_in");
/// assert!(p.wants_array); // inferred from the operator
/// assert!(!p.compound);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Predicate {
    /// Registry key. For derived entries this includes the `_any`/`_all` suffix.
    pub name: String,
    /// Identifier of the underlying comparison operator. Opaque to this crate;
    /// the external query builder interprets it.
    pub operator: String,
    /// Whether the search value must be supplied as a multi-valued list
    /// rather than a scalar.
    pub wants_array: bool,
    /// True on derived `_any`/`_all` entries. Derived entries are never
    /// expanded again.
    pub compound: bool,
}

/// Registration attributes for a predicate.
///
/// All attributes are optional; unset attributes resolve at registration
/// time (see [`PredicateRegistry::register`](crate::PredicateRegistry::register)):
///
/// - `operator` defaults to the predicate name
/// - `compounds` defaults to `true`
/// - `wants_array` is inferred from the operator when unset
///
/// # Example
///
/// ```rust
/// use sift_predicates::PredicateDef;
///
/// let def = PredicateDef::new()
///     .operator("matches")
///     .compounds(true);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PredicateDef {
    pub(crate) operator: Option<String>,
    pub(crate) compounds: Option<bool>,
    pub(crate) wants_array: Option<bool>,
}

impl PredicateDef {
    /// Creates an empty attribute set (all defaults apply).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the underlying comparison operator identifier.
    pub fn operator(mut self, operator: impl Into<String>) -> Self {
        self.operator = Some(operator.into());
        self
    }

    /// Enables or disables compound (`_any`/`_all`) derivation.
    pub fn compounds(mut self, compounds: bool) -> Self {
        self.compounds = Some(compounds);
        self
    }

    /// Explicitly sets `wants_array`, overriding operator-based inference.
    pub fn wants_array(mut self, wants_array: bool) -> Self {
        self.wants_array = Some(wants_array);
        self
    }
}
