//! Sniff Facts: environment predicates over a captured context
//!
//! The fact table is a flat list of user-agent, vendor and app-version
//! checks. [`Is`] binds one [`EnvContext`] to the predicate registry and
//! exposes the base predicates plus the derived `not` / `all` / `any`
//! views.
//!
//! # Example
//!
//! ```
//! use sniff_facts::{EnvContext, Is};
//!
//! let is = Is::new(EnvContext::new(
//!     "Mozilla/5.0 (iPhone; CPU iPhone OS 14_0 like Mac OS X) AppleWebKit/605.1.15",
//!     "Apple Computer, Inc.",
//!     "5.0 (iPhone; CPU iPhone OS 14_0 like Mac OS X)",
//! ));
//!
//! assert!(is.iphone(Some(">=13")));
//! assert!(is.mobile());
//! assert_eq!(is.not().check("desktop"), Some(true));
//! assert_eq!(is.all().check("iphone", &[">=13", "<15"]), Some(true));
//! assert_eq!(is.any().check("ipad", &["13", "14"]), Some(false));
//! ```

pub mod browser;
pub mod connectivity;
pub mod device;
pub mod is;
pub mod os;
pub mod report;
pub mod table;

pub use is::{Aggregate, Is, Not};
pub use report::Report;
pub use sniff_core::{EnvContext, SniffError};
pub use sniff_registry::{Interface, InterfaceSet, Predicate, Registry, RegistryError};
pub use table::{table, DEFAULT_REGISTRY, VERSIONED};
