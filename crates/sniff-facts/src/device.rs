//! Device predicates.
//!
//! Composite checks (`mobile`, `tablet`, `desktop`, `ios`) are built from
//! the base predicates in this module only.

use crate::browser::versioned;
use crate::os::windows;
use lazy_static::lazy_static;
use regex::Regex;
use sniff_core::{matches, version_number, EnvContext};

lazy_static! {
    static ref IPAD: Regex = Regex::new(r"ipad.+?os ([0-9]+)").unwrap();
    static ref IPHONE: Regex = Regex::new(r"iphone(?:.+?os ([0-9]+))?").unwrap();
    static ref IPOD: Regex = Regex::new(r"ipod.+?os ([0-9]+)").unwrap();
}

fn has(ctx: &EnvContext, needle: &str) -> bool {
    ctx.user_agent().contains(needle)
}

pub fn android(ctx: &EnvContext, _arg: Option<&str>) -> bool {
    has(ctx, "android")
}

pub fn android_phone(ctx: &EnvContext, _arg: Option<&str>) -> bool {
    has(ctx, "android") && has(ctx, "mobile")
}

pub fn android_tablet(ctx: &EnvContext, _arg: Option<&str>) -> bool {
    has(ctx, "android") && !has(ctx, "mobile")
}

pub fn blackberry(ctx: &EnvContext, _arg: Option<&str>) -> bool {
    has(ctx, "blackberry") || has(ctx, "bb10")
}

pub fn ipad(ctx: &EnvContext, range: Option<&str>) -> bool {
    versioned(&IPAD, ctx.user_agent(), range)
}

/// iPhone, with the OS major version as the compared version.
///
/// In-app browsers on iPad also mention `iphone`, so iPads never count.
/// The original iPhone carries no OS token and is treated as version 1.
pub fn iphone(ctx: &EnvContext, range: Option<&str>) -> bool {
    if ipad(ctx, None) {
        return false;
    }
    match IPHONE.captures(ctx.user_agent()) {
        Some(caps) => {
            let version = caps.get(1).map_or(1.0, |m| version_number(m.as_str()));
            matches(version, range)
        }
        None => false,
    }
}

pub fn ipod(ctx: &EnvContext, range: Option<&str>) -> bool {
    versioned(&IPOD, ctx.user_agent(), range)
}

pub fn ios(ctx: &EnvContext, _arg: Option<&str>) -> bool {
    iphone(ctx, None) || ipad(ctx, None) || ipod(ctx, None)
}

pub fn windows_phone(ctx: &EnvContext, _arg: Option<&str>) -> bool {
    windows(ctx, None) && has(ctx, "phone")
}

pub fn windows_tablet(ctx: &EnvContext, _arg: Option<&str>) -> bool {
    windows(ctx, None) && !windows_phone(ctx, None) && has(ctx, "touch")
}

pub fn mobile(ctx: &EnvContext, _arg: Option<&str>) -> bool {
    iphone(ctx, None)
        || ipod(ctx, None)
        || android_phone(ctx, None)
        || blackberry(ctx, None)
        || windows_phone(ctx, None)
}

pub fn tablet(ctx: &EnvContext, _arg: Option<&str>) -> bool {
    ipad(ctx, None) || android_tablet(ctx, None) || windows_tablet(ctx, None)
}

pub fn desktop(ctx: &EnvContext, _arg: Option<&str>) -> bool {
    !mobile(ctx, None) && !tablet(ctx, None)
}

pub fn touch_device(ctx: &EnvContext, _arg: Option<&str>) -> bool {
    ctx.touch()
}
