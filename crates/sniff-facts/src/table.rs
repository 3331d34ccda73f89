//! The built-in predicate table.
//!
//! Version-gated predicates offer all three derived interfaces, so a caller
//! can ask e.g. "is Chrome at least 40 and below 50" with `all`. The rest
//! take no argument and only offer `not`.

use crate::{browser, connectivity, device, os};
use lazy_static::lazy_static;
use sniff_core::EnvContext;
use sniff_registry::{Predicate, Registry};

lazy_static! {
    /// Registry over [`table`], built on first use
    pub static ref DEFAULT_REGISTRY: Registry<EnvContext> =
        Registry::from_table(table()).expect("built-in predicate table has unique, valid names");
}

/// Every built-in predicate with its interface set
pub fn table() -> Vec<Predicate<EnvContext>> {
    vec![
        Predicate::new("android", device::android).not_only(),
        Predicate::new("androidPhone", device::android_phone).not_only(),
        Predicate::new("androidTablet", device::android_tablet).not_only(),
        Predicate::new("blackberry", device::blackberry).not_only(),
        Predicate::new("chrome", browser::chrome),
        Predicate::new("desktop", device::desktop).not_only(),
        Predicate::new("edge", browser::edge),
        Predicate::new("firefox", browser::firefox),
        Predicate::new("ie", browser::ie),
        Predicate::new("ios", device::ios).not_only(),
        Predicate::new("ipad", device::ipad),
        Predicate::new("iphone", device::iphone),
        Predicate::new("ipod", device::ipod),
        Predicate::new("linux", os::linux).not_only(),
        Predicate::new("mac", os::mac).not_only(),
        Predicate::new("mobile", device::mobile).not_only(),
        Predicate::new("offline", connectivity::offline).not_only(),
        Predicate::new("online", connectivity::online).not_only(),
        Predicate::new("opera", browser::opera),
        Predicate::new("phantom", browser::phantom),
        Predicate::new("safari", browser::safari),
        Predicate::new("tablet", device::tablet).not_only(),
        Predicate::new("touchDevice", device::touch_device).not_only(),
        Predicate::new("windows", os::windows).not_only(),
        Predicate::new("windowsPhone", device::windows_phone).not_only(),
        Predicate::new("windowsTablet", device::windows_tablet).not_only(),
    ]
}

/// Names of the predicates that accept a version range
pub const VERSIONED: [&str; 10] = [
    "chrome", "edge", "firefox", "ie", "ipad", "iphone", "ipod", "opera", "phantom", "safari",
];
