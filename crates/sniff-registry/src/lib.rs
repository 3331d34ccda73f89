//! Sniff Registry: predicate table and derived interfaces
//!
//! A [`Registry`] is built from a table of [`Predicate`] rows. Each row
//! declares which of the `not` / `all` / `any` interfaces it supports, and
//! the registry derives a wrapper for each one.
//!
//! # Example
//!
//! ```
//! use sniff_registry::{Predicate, Registry};
//!
//! struct Host {
//!     cores: u32,
//! }
//!
//! fn multicore(host: &Host, _arg: Option<&str>) -> bool {
//!     host.cores > 1
//! }
//!
//! fn has_cores(host: &Host, arg: Option<&str>) -> bool {
//!     arg.and_then(|a| a.parse::<u32>().ok()).map_or(true, |n| host.cores >= n)
//! }
//!
//! let registry = Registry::from_table(vec![
//!     Predicate::new("multicore", multicore).not_only(),
//!     Predicate::new("hasCores", has_cores),
//! ])
//! .unwrap();
//!
//! let host = Host { cores: 4 };
//! assert_eq!(registry.not().check("multicore", &host, None), Some(false));
//! assert_eq!(registry.all().check("hasCores", &host, &["2", "4"]), Some(true));
//! assert_eq!(registry.any().check("hasCores", &host, &["8"]), Some(false));
//! assert_eq!(registry.all().check("multicore", &host, &[]), None);
//! ```

pub mod error;
pub mod interface;
pub mod predicate;
pub mod registry;

pub use error::RegistryError;
pub use interface::{Interface, InterfaceSet};
pub use predicate::{Predicate, PredicateFn};
pub use registry::{every, negate, some, Aggregate, AggregateView, Negated, NegatedView, Registry};
