//! Connectivity predicates

use sniff_core::EnvContext;

/// Online unless the host explicitly reported otherwise
pub fn online(ctx: &EnvContext, _arg: Option<&str>) -> bool {
    ctx.online().unwrap_or(true)
}

pub fn offline(ctx: &EnvContext, _arg: Option<&str>) -> bool {
    !online(ctx, None)
}
