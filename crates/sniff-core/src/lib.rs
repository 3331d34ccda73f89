//! Sniff Core: captured environment and version ranges
//!
//! Everything a predicate is allowed to look at lives in an [`EnvContext`];
//! version-gated predicates compare what they find against a
//! [`VersionRange`].
//!
//! # Example
//!
//! ```
//! use sniff_core::{compare, EnvContext, VersionRange};
//!
//! let ctx = EnvContext::new("Mozilla/5.0 (X11; Linux x86_64)", "", "5.0 (X11)");
//! assert_eq!(ctx.app_version(), "5.0 (x11)");
//!
//! assert!(compare(41.0, ">=40"));
//! assert!(VersionRange::parse("anything").contains(3.0));
//! ```

pub mod context;
pub mod error;
pub mod version;

pub use context::EnvContext;
pub use error::SniffError;
pub use version::{compare, matches, version_number, RangeOp, VersionRange};
