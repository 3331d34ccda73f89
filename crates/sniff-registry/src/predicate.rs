//! Predicate records
//!
//! A predicate is a plain function over some context `C` plus an optional
//! argument (a version range for the predicates that take one, ignored by
//! the rest).

use crate::error::RegistryError;
use crate::interface::{Interface, InterfaceSet};
use std::fmt;

/// Signature shared by every base predicate
pub type PredicateFn<C> = fn(&C, Option<&str>) -> bool;

/// One row of the predicate table
pub struct Predicate<C> {
    name: String,
    func: PredicateFn<C>,
    interfaces: InterfaceSet,
}

impl<C> Predicate<C> {
    /// A predicate offering all three derived interfaces
    pub fn new(name: impl Into<String>, func: PredicateFn<C>) -> Self {
        Self {
            name: name.into(),
            func,
            interfaces: InterfaceSet::full(),
        }
    }

    /// Restrict the derived interfaces
    pub fn with_interfaces(mut self, interfaces: InterfaceSet) -> Self {
        self.interfaces = interfaces;
        self
    }

    /// Shorthand for predicates that only support `not`
    pub fn not_only(self) -> Self {
        self.with_interfaces(InterfaceSet::only(Interface::Not))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn func(&self) -> PredicateFn<C> {
        self.func
    }

    pub fn interfaces(&self) -> InterfaceSet {
        self.interfaces
    }

    pub fn supports(&self, interface: Interface) -> bool {
        self.interfaces.contains(interface)
    }

    /// Evaluate against a context
    pub fn call(&self, ctx: &C, arg: Option<&str>) -> bool {
        (self.func)(ctx, arg)
    }

    pub(crate) fn validate(&self) -> Result<(), RegistryError> {
        if self.name.is_empty() || self.name.chars().any(char::is_whitespace) {
            return Err(RegistryError::InvalidName(self.name.clone()));
        }
        Ok(())
    }
}

impl<C> Clone for Predicate<C> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            func: self.func,
            interfaces: self.interfaces,
        }
    }
}

impl<C> fmt::Debug for Predicate<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate")
            .field("name", &self.name)
            .field("interfaces", &self.interfaces)
            .finish()
    }
}
