//! Predicate registry and interface derivation
//!
//! The registry owns the base table and three derived maps. Derivation walks
//! the base table once and, per predicate, synthesizes a wrapper for each
//! interface in its [`InterfaceSet`].

use crate::error::RegistryError;
use crate::interface::Interface;
use crate::predicate::{Predicate, PredicateFn};
use std::collections::BTreeMap;

/// Derived `not` wrapper: same argument as the base predicate
pub type Negated<C> = Box<dyn Fn(&C, Option<&str>) -> bool + Send + Sync>;

/// Derived `all` / `any` wrapper: an ordered sequence of arguments
pub type Aggregate<C> = Box<dyn Fn(&C, &[&str]) -> bool + Send + Sync>;

pub struct Registry<C> {
    base: BTreeMap<String, Predicate<C>>,
    not: BTreeMap<String, Negated<C>>,
    all: BTreeMap<String, Aggregate<C>>,
    any: BTreeMap<String, Aggregate<C>>,
}

impl<C: 'static> Registry<C> {
    /// An empty registry
    pub fn new() -> Self {
        Self {
            base: BTreeMap::new(),
            not: BTreeMap::new(),
            all: BTreeMap::new(),
            any: BTreeMap::new(),
        }
    }

    /// Build from a predicate table and derive all interfaces
    pub fn from_table<I>(table: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = Predicate<C>>,
    {
        let mut registry = Self::new();
        for predicate in table {
            registry.insert(predicate)?;
        }
        registry.derive();
        Ok(registry)
    }

    /// Add one predicate and derive its interfaces
    pub fn register(&mut self, predicate: Predicate<C>) -> Result<(), RegistryError> {
        let name = predicate.name().to_string();
        self.insert(predicate)?;
        if let Some(predicate) = self.base.get(&name) {
            derive_into(predicate, &mut self.not, &mut self.all, &mut self.any);
        }
        Ok(())
    }

    fn insert(&mut self, predicate: Predicate<C>) -> Result<(), RegistryError> {
        predicate.validate()?;
        if self.base.contains_key(predicate.name()) {
            return Err(RegistryError::Duplicate(predicate.name().to_string()));
        }
        self.base.insert(predicate.name().to_string(), predicate);
        Ok(())
    }

    /// Rebuild the three derived maps from the base table.
    ///
    /// Safe to re-run: the result only depends on the base table.
    pub fn derive(&mut self) {
        self.not.clear();
        self.all.clear();
        self.any.clear();

        for predicate in self.base.values() {
            derive_into(predicate, &mut self.not, &mut self.all, &mut self.any);
        }

        tracing::debug!(
            base = self.base.len(),
            not = self.not.len(),
            all = self.all.len(),
            any = self.any.len(),
            "derived predicate interfaces"
        );
    }

    pub fn get(&self, name: &str) -> Option<&Predicate<C>> {
        self.base.get(name)
    }

    /// Evaluate a base predicate by name
    pub fn check(&self, name: &str, ctx: &C, arg: Option<&str>) -> Option<bool> {
        self.get(name).map(|p| p.call(ctx, arg))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.base.contains_key(name)
    }

    /// Base predicate names, sorted
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.base.keys().map(String::as_str)
    }

    pub fn predicates(&self) -> impl Iterator<Item = &Predicate<C>> + '_ {
        self.base.values()
    }

    pub fn len(&self) -> usize {
        self.base.len()
    }

    pub fn is_empty(&self) -> bool {
        self.base.is_empty()
    }

    pub fn not(&self) -> NegatedView<'_, C> {
        NegatedView { map: &self.not }
    }

    pub fn all(&self) -> AggregateView<'_, C> {
        AggregateView {
            interface: Interface::All,
            map: &self.all,
        }
    }

    pub fn any(&self) -> AggregateView<'_, C> {
        AggregateView {
            interface: Interface::Any,
            map: &self.any,
        }
    }
}

impl<C: 'static> Default for Registry<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> std::fmt::Debug for Registry<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("base", &self.base.keys().collect::<Vec<_>>())
            .field("not", &self.not.keys().collect::<Vec<_>>())
            .field("all", &self.all.keys().collect::<Vec<_>>())
            .field("any", &self.any.keys().collect::<Vec<_>>())
            .finish()
    }
}

fn derive_into<C: 'static>(
    predicate: &Predicate<C>,
    not: &mut BTreeMap<String, Negated<C>>,
    all: &mut BTreeMap<String, Aggregate<C>>,
    any: &mut BTreeMap<String, Aggregate<C>>,
) {
    let name = predicate.name();
    let func = predicate.func();

    for interface in predicate.interfaces().iter() {
        match interface {
            Interface::Not => {
                not.insert(name.to_string(), negate(func));
            }
            Interface::All => {
                all.insert(name.to_string(), every(func));
            }
            Interface::Any => {
                any.insert(name.to_string(), some(func));
            }
        }
    }
}

/// `!f(x)`
pub fn negate<C: 'static>(func: PredicateFn<C>) -> Negated<C> {
    Box::new(move |ctx: &C, arg: Option<&str>| !func(ctx, arg))
}

/// `f(a) && f(b) && ...`, true on empty input
pub fn every<C: 'static>(func: PredicateFn<C>) -> Aggregate<C> {
    Box::new(move |ctx: &C, args: &[&str]| args.iter().all(|arg| func(ctx, Some(*arg))))
}

/// `f(a) || f(b) || ...`, false on empty input
pub fn some<C: 'static>(func: PredicateFn<C>) -> Aggregate<C> {
    Box::new(move |ctx: &C, args: &[&str]| args.iter().any(|arg| func(ctx, Some(*arg))))
}

/// The `not` map, keyed by predicate name
pub struct NegatedView<'r, C> {
    map: &'r BTreeMap<String, Negated<C>>,
}

impl<'r, C: 'r> NegatedView<'r, C> {
    pub fn get(&self, name: &str) -> Option<&'r Negated<C>> {
        self.map.get(name)
    }

    /// `None` when the predicate does not offer `not`
    pub fn check(&self, name: &str, ctx: &C, arg: Option<&str>) -> Option<bool> {
        match self.map.get(name) {
            Some(f) => Some(f(ctx, arg)),
            None => {
                tracing::trace!(name, interface = "not", "interface not offered");
                None
            }
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'r str> + 'r {
        self.map.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// The `all` or `any` map, keyed by predicate name
pub struct AggregateView<'r, C> {
    interface: Interface,
    map: &'r BTreeMap<String, Aggregate<C>>,
}

impl<'r, C: 'r> AggregateView<'r, C> {
    pub fn interface(&self) -> Interface {
        self.interface
    }

    pub fn get(&self, name: &str) -> Option<&'r Aggregate<C>> {
        self.map.get(name)
    }

    /// `None` when the predicate does not offer this interface
    pub fn check(&self, name: &str, ctx: &C, args: &[&str]) -> Option<bool> {
        match self.map.get(name) {
            Some(f) => Some(f(ctx, args)),
            None => {
                tracing::trace!(name, interface = self.interface.as_str(), "interface not offered");
                None
            }
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'r str> + 'r {
        self.map.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface::InterfaceSet;

    struct Counter {
        value: u32,
    }

    fn at_least(ctx: &Counter, arg: Option<&str>) -> bool {
        arg.and_then(|a| a.parse::<u32>().ok())
            .map_or(true, |min| ctx.value >= min)
    }

    fn positive(ctx: &Counter, _arg: Option<&str>) -> bool {
        ctx.value > 0
    }

    fn table() -> Vec<Predicate<Counter>> {
        vec![
            Predicate::new("atLeast", at_least),
            Predicate::new("positive", positive).not_only(),
        ]
    }

    #[test]
    fn test_derives_per_interface_set() {
        let registry = Registry::from_table(table()).unwrap();

        assert_eq!(registry.len(), 2);
        assert!(registry.not().contains("atLeast"));
        assert!(registry.not().contains("positive"));
        assert!(registry.all().contains("atLeast"));
        assert!(!registry.all().contains("positive"));
        assert!(registry.any().contains("atLeast"));
        assert!(!registry.any().contains("positive"));
    }

    #[test]
    fn test_negation() {
        let registry = Registry::from_table(table()).unwrap();
        let zero = Counter { value: 0 };
        let five = Counter { value: 5 };

        assert_eq!(registry.not().check("positive", &zero, None), Some(true));
        assert_eq!(registry.not().check("positive", &five, None), Some(false));
        assert_eq!(registry.not().check("atLeast", &five, Some("6")), Some(true));
    }

    #[test]
    fn test_aggregates() {
        let registry = Registry::from_table(table()).unwrap();
        let ctx = Counter { value: 5 };

        assert_eq!(registry.all().check("atLeast", &ctx, &["1", "5"]), Some(true));
        assert_eq!(registry.all().check("atLeast", &ctx, &["1", "6"]), Some(false));
        assert_eq!(registry.any().check("atLeast", &ctx, &["9", "5"]), Some(true));
        assert_eq!(registry.any().check("atLeast", &ctx, &["9", "6"]), Some(false));
    }

    #[test]
    fn test_empty_sequences() {
        let registry = Registry::from_table(table()).unwrap();
        let ctx = Counter { value: 0 };

        assert_eq!(registry.all().check("atLeast", &ctx, &[]), Some(true));
        assert_eq!(registry.any().check("atLeast", &ctx, &[]), Some(false));
    }

    #[test]
    fn test_not_offered_is_none() {
        let registry = Registry::from_table(table()).unwrap();
        let ctx = Counter { value: 1 };

        assert_eq!(registry.all().check("positive", &ctx, &["1"]), None);
        assert_eq!(registry.not().check("missing", &ctx, None), None);
        assert_eq!(registry.check("missing", &ctx, None), None);
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut registry = Registry::from_table(table()).unwrap();
        let err = registry
            .register(Predicate::new("positive", positive))
            .unwrap_err();
        assert_eq!(err, RegistryError::Duplicate("positive".to_string()));
        // the original entry keeps its interface set
        assert!(!registry.all().contains("positive"));
    }

    #[test]
    fn test_invalid_names() {
        let err = Registry::from_table(vec![Predicate::new("", positive)]).unwrap_err();
        assert!(matches!(err, RegistryError::InvalidName(_)));

        let err = Registry::from_table(vec![Predicate::new("two words", positive)]).unwrap_err();
        assert!(matches!(err, RegistryError::InvalidName(_)));
    }

    #[test]
    fn test_register_derives_immediately() {
        let mut registry: Registry<Counter> = Registry::new();
        registry
            .register(Predicate::new("positive", positive).with_interfaces(
                InterfaceSet::only(Interface::Any),
            ))
            .unwrap();

        assert!(!registry.not().contains("positive"));
        assert!(registry.any().contains("positive"));
    }

    #[test]
    fn test_derive_is_idempotent() {
        let mut registry = Registry::from_table(table()).unwrap();
        let before: Vec<String> = registry.not().names().map(String::from).collect();

        registry.derive();
        registry.derive();

        let after: Vec<String> = registry.not().names().map(String::from).collect();
        assert_eq!(before, after);
        assert_eq!(registry.all().len(), 1);
    }
}
