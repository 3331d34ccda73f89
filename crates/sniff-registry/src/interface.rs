//! Derived interfaces and the per-predicate set of them

use crate::error::RegistryError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the three views derived from a base predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interface {
    /// Logical complement of the predicate
    Not,
    /// True when the predicate holds for every argument
    All,
    /// True when the predicate holds for at least one argument
    Any,
}

impl Interface {
    pub const EVERY: [Interface; 3] = [Interface::Not, Interface::All, Interface::Any];

    pub fn as_str(&self) -> &'static str {
        match self {
            Interface::Not => "not",
            Interface::All => "all",
            Interface::Any => "any",
        }
    }

    fn bit(self) -> u8 {
        match self {
            Interface::Not => 0b001,
            Interface::All => 0b010,
            Interface::Any => 0b100,
        }
    }
}

impl fmt::Display for Interface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Interface {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "not" => Ok(Interface::Not),
            "all" => Ok(Interface::All),
            "any" => Ok(Interface::Any),
            other => Err(RegistryError::UnknownInterface(other.to_string())),
        }
    }
}

/// Which derived interfaces a predicate offers.
///
/// Defaults to all three.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct InterfaceSet(u8);

impl InterfaceSet {
    pub fn full() -> Self {
        Self(0b111)
    }

    pub fn empty() -> Self {
        Self(0)
    }

    /// Just one interface, e.g. `InterfaceSet::only(Interface::Not)`
    pub fn only(interface: Interface) -> Self {
        Self(interface.bit())
    }

    pub fn with(self, interface: Interface) -> Self {
        Self(self.0 | interface.bit())
    }

    pub fn without(self, interface: Interface) -> Self {
        Self(self.0 & !interface.bit())
    }

    pub fn contains(&self, interface: Interface) -> bool {
        self.0 & interface.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = Interface> + '_ {
        Interface::EVERY.into_iter().filter(|i| self.contains(*i))
    }

    /// Build a set from interface names such as `["not"]`
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self, RegistryError> {
        names
            .iter()
            .map(|n| n.as_ref().parse::<Interface>())
            .collect()
    }
}

impl Default for InterfaceSet {
    fn default() -> Self {
        Self::full()
    }
}

impl FromIterator<Interface> for InterfaceSet {
    fn from_iter<I: IntoIterator<Item = Interface>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), InterfaceSet::with)
    }
}

impl fmt::Debug for InterfaceSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
