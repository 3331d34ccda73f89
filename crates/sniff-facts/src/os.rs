//! Operating-system predicates, read from the app-version string

use sniff_core::EnvContext;

pub fn linux(ctx: &EnvContext, _arg: Option<&str>) -> bool {
    ctx.app_version().contains("linux")
}

pub fn mac(ctx: &EnvContext, _arg: Option<&str>) -> bool {
    ctx.app_version().contains("mac")
}

/// Any `win` token counts, including `win64` and `windows phone`
pub fn windows(ctx: &EnvContext, _arg: Option<&str>) -> bool {
    ctx.app_version().contains("win")
}
