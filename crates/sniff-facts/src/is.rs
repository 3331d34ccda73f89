//! The `Is` facade: one captured context plus a predicate registry.
//!
//! Base predicates are plain methods. The derived interfaces are reached by
//! name through [`Is::not`], [`Is::all`] and [`Is::any`], and answer `None`
//! for a predicate that does not offer the interface.

use crate::report::Report;
use crate::table::DEFAULT_REGISTRY;
use crate::{browser, connectivity, device, os};
use sniff_core::EnvContext;
use sniff_registry::{AggregateView, NegatedView, Registry};

pub struct Is<'r> {
    ctx: EnvContext,
    registry: &'r Registry<EnvContext>,
}

impl Is<'static> {
    /// Use the built-in predicate table
    pub fn new(ctx: EnvContext) -> Self {
        Self {
            ctx,
            registry: &DEFAULT_REGISTRY,
        }
    }

    /// Capture the context from `SNIFF_*` environment variables
    pub fn from_env() -> Self {
        Self::new(EnvContext::from_env())
    }
}

impl<'r> Is<'r> {
    /// Use a caller-supplied registry, e.g. the built-in table plus extras
    pub fn with_registry(ctx: EnvContext, registry: &'r Registry<EnvContext>) -> Self {
        Self { ctx, registry }
    }

    pub fn context(&self) -> &EnvContext {
        &self.ctx
    }

    pub fn registry(&self) -> &'r Registry<EnvContext> {
        self.registry
    }

    /// Evaluate a base predicate by name
    pub fn check(&self, name: &str, range: Option<&str>) -> Option<bool> {
        self.registry.check(name, &self.ctx, range)
    }

    pub fn not(&self) -> Not<'_, 'r> {
        Not {
            ctx: &self.ctx,
            view: self.registry.not(),
        }
    }

    pub fn all(&self) -> Aggregate<'_, 'r> {
        Aggregate {
            ctx: &self.ctx,
            view: self.registry.all(),
        }
    }

    pub fn any(&self) -> Aggregate<'_, 'r> {
        Aggregate {
            ctx: &self.ctx,
            view: self.registry.any(),
        }
    }

    /// Evaluate every registered predicate without an argument
    pub fn report(&self) -> Report {
        let report = Report::new(
            self.ctx.fingerprint(),
            self.registry
                .predicates()
                .map(|p| (p.name().to_string(), p.call(&self.ctx, None))),
        );
        tracing::debug!(
            fingerprint = %report.fingerprint,
            matched = report.matched().count(),
            total = report.predicates.len(),
            "evaluated environment report"
        );
        report
    }

    pub fn android(&self) -> bool {
        device::android(&self.ctx, None)
    }

    pub fn android_phone(&self) -> bool {
        device::android_phone(&self.ctx, None)
    }

    pub fn android_tablet(&self) -> bool {
        device::android_tablet(&self.ctx, None)
    }

    pub fn blackberry(&self) -> bool {
        device::blackberry(&self.ctx, None)
    }

    pub fn chrome(&self, range: Option<&str>) -> bool {
        browser::chrome(&self.ctx, range)
    }

    pub fn desktop(&self) -> bool {
        device::desktop(&self.ctx, None)
    }

    pub fn edge(&self, range: Option<&str>) -> bool {
        browser::edge(&self.ctx, range)
    }

    pub fn firefox(&self, range: Option<&str>) -> bool {
        browser::firefox(&self.ctx, range)
    }

    pub fn ie(&self, range: Option<&str>) -> bool {
        browser::ie(&self.ctx, range)
    }

    pub fn ios(&self) -> bool {
        device::ios(&self.ctx, None)
    }

    pub fn ipad(&self, range: Option<&str>) -> bool {
        device::ipad(&self.ctx, range)
    }

    pub fn iphone(&self, range: Option<&str>) -> bool {
        device::iphone(&self.ctx, range)
    }

    pub fn ipod(&self, range: Option<&str>) -> bool {
        device::ipod(&self.ctx, range)
    }

    pub fn linux(&self) -> bool {
        os::linux(&self.ctx, None)
    }

    pub fn mac(&self) -> bool {
        os::mac(&self.ctx, None)
    }

    pub fn mobile(&self) -> bool {
        device::mobile(&self.ctx, None)
    }

    pub fn offline(&self) -> bool {
        connectivity::offline(&self.ctx, None)
    }

    pub fn online(&self) -> bool {
        connectivity::online(&self.ctx, None)
    }

    pub fn opera(&self, range: Option<&str>) -> bool {
        browser::opera(&self.ctx, range)
    }

    pub fn phantom(&self, range: Option<&str>) -> bool {
        browser::phantom(&self.ctx, range)
    }

    pub fn safari(&self, range: Option<&str>) -> bool {
        browser::safari(&self.ctx, range)
    }

    pub fn tablet(&self) -> bool {
        device::tablet(&self.ctx, None)
    }

    pub fn touch_device(&self) -> bool {
        device::touch_device(&self.ctx, None)
    }

    pub fn windows(&self) -> bool {
        os::windows(&self.ctx, None)
    }

    pub fn windows_phone(&self) -> bool {
        device::windows_phone(&self.ctx, None)
    }

    pub fn windows_tablet(&self) -> bool {
        device::windows_tablet(&self.ctx, None)
    }
}

/// `is.not()`: negated predicates bound to the captured context
pub struct Not<'a, 'r> {
    ctx: &'a EnvContext,
    view: NegatedView<'r, EnvContext>,
}

impl<'a, 'r> Not<'a, 'r> {
    pub fn check(&self, name: &str) -> Option<bool> {
        self.view.check(name, self.ctx, None)
    }

    pub fn check_range(&self, name: &str, range: &str) -> Option<bool> {
        self.view.check(name, self.ctx, Some(range))
    }

    pub fn names(&self) -> impl Iterator<Item = &'r str> + 'r {
        self.view.names()
    }
}

/// `is.all()` / `is.any()`: aggregate predicates bound to the captured context
pub struct Aggregate<'a, 'r> {
    ctx: &'a EnvContext,
    view: AggregateView<'r, EnvContext>,
}

impl<'a, 'r> Aggregate<'a, 'r> {
    /// Apply the predicate to each range; a single range is `&[range]`
    pub fn check(&self, name: &str, ranges: &[&str]) -> Option<bool> {
        self.view.check(name, self.ctx, ranges)
    }

    pub fn names(&self) -> impl Iterator<Item = &'r str> + 'r {
        self.view.names()
    }
}
