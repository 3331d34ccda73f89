//! Browser predicates.
//!
//! Each takes an optional version range; the major version is the first
//! capture of the browser's pattern.

use lazy_static::lazy_static;
use regex::Regex;
use sniff_core::{matches, version_number, EnvContext};

lazy_static! {
    static ref GOOGLE_VENDOR: Regex = Regex::new(r"google inc").unwrap();
    static ref CHROME: Regex = Regex::new(r"(?:chrome|crios)/([0-9]+)").unwrap();
    static ref EDGE: Regex = Regex::new(r"edge/([0-9]+)").unwrap();
    static ref FIREFOX: Regex = Regex::new(r"(?:firefox|fxios)/([0-9]+)").unwrap();
    static ref IE: Regex = Regex::new(r"(?:msie |trident.+?; rv:)([0-9]+)").unwrap();
    static ref OPERA: Regex = Regex::new(r"(?:^opera.+?version|opr)/([0-9]+)").unwrap();
    static ref PHANTOM: Regex = Regex::new(r"phantomjs/([0-9]+)").unwrap();
    static ref SAFARI: Regex = Regex::new(r"version/([0-9]+).+?safari").unwrap();
}

/// Match `pattern` and compare its first capture against `range`
pub(crate) fn versioned(pattern: &Regex, haystack: &str, range: Option<&str>) -> bool {
    pattern
        .captures(haystack)
        .and_then(|caps| caps.get(1))
        .map_or(false, |m| matches(version_number(m.as_str()), range))
}

/// Chrome (or Chrome on iOS), excluding Opera which shares the token
pub fn chrome(ctx: &EnvContext, range: Option<&str>) -> bool {
    GOOGLE_VENDOR.is_match(ctx.vendor())
        && !opera(ctx, None)
        && versioned(&CHROME, ctx.user_agent(), range)
}

/// Legacy EdgeHTML
pub fn edge(ctx: &EnvContext, range: Option<&str>) -> bool {
    versioned(&EDGE, ctx.user_agent(), range)
}

pub fn firefox(ctx: &EnvContext, range: Option<&str>) -> bool {
    versioned(&FIREFOX, ctx.user_agent(), range)
}

/// Internet Explorer, via `msie` or the Trident `rv:` token (IE 11)
pub fn ie(ctx: &EnvContext, range: Option<&str>) -> bool {
    versioned(&IE, ctx.user_agent(), range)
}

pub fn opera(ctx: &EnvContext, range: Option<&str>) -> bool {
    versioned(&OPERA, ctx.user_agent(), range)
}

pub fn phantom(ctx: &EnvContext, range: Option<&str>) -> bool {
    versioned(&PHANTOM, ctx.user_agent(), range)
}

pub fn safari(ctx: &EnvContext, range: Option<&str>) -> bool {
    versioned(&SAFARI, ctx.user_agent(), range)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHROME_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
        (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
    const OPERA_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
        (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36 OPR/77.0.4054.254";

    #[test]
    fn test_chrome_needs_google_vendor() {
        let ctx = EnvContext::new(CHROME_UA, "Google Inc.", "");
        assert!(chrome(&ctx, None));
        assert!(chrome(&ctx, Some(">=40")));
        assert!(!chrome(&ctx, Some("<91")));

        let no_vendor = EnvContext::new(CHROME_UA, "", "");
        assert!(!chrome(&no_vendor, None));
    }

    #[test]
    fn test_opera_is_not_chrome() {
        let ctx = EnvContext::new(OPERA_UA, "Google Inc.", "");
        assert!(opera(&ctx, Some("77")));
        assert!(!chrome(&ctx, None));
    }

    #[test]
    fn test_presto_opera() {
        let ctx = EnvContext::new("Opera/9.80 (Windows NT 6.1; WOW64) Presto/2.12.388 Version/12.16", "", "");
        assert!(opera(&ctx, Some("12")));
        assert!(!safari(&ctx, None));
    }

    #[test]
    fn test_firefox_and_fxios() {
        let desktop = EnvContext::new(
            "Mozilla/5.0 (X11; Ubuntu; Linux x86_64; rv:89.0) Gecko/20100101 Firefox/89.0",
            "",
            "",
        );
        assert!(firefox(&desktop, Some(">88")));

        let ios = EnvContext::new(
            "Mozilla/5.0 (iPhone; CPU iPhone OS 14_6 like Mac OS X) AppleWebKit/605.1.15 \
             (KHTML, like Gecko) FxiOS/34.0 Mobile/15E148 Safari/605.1.15",
            "Apple Computer, Inc.",
            "",
        );
        assert!(firefox(&ios, Some("34")));
    }

    #[test]
    fn test_ie_versions() {
        let ie10 = EnvContext::new("Mozilla/5.0 (compatible; MSIE 10.0; Windows NT 6.1; Trident/6.0)", "", "");
        assert!(ie(&ie10, Some("10")));

        let ie11 = EnvContext::new("Mozilla/5.0 (Windows NT 6.1; Trident/7.0; rv:11.0) like Gecko", "", "");
        assert!(ie(&ie11, Some(">=11")));
        assert!(!ie(&ie11, Some("<11")));
    }

    #[test]
    fn test_safari_and_edge() {
        let safari_ua = EnvContext::new(
            "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 \
             (KHTML, like Gecko) Version/14.1.1 Safari/605.1.15",
            "Apple Computer, Inc.",
            "",
        );
        assert!(safari(&safari_ua, Some("14")));
        assert!(!chrome(&safari_ua, None));

        let edge_ua = EnvContext::new(
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) \
             Chrome/70.0.3538.102 Safari/537.36 Edge/18.19582",
            "",
            "",
        );
        assert!(edge(&edge_ua, Some(">=18")));
    }

    #[test]
    fn test_phantom() {
        let ctx = EnvContext::new(
            "Mozilla/5.0 (Unknown; Linux x86_64) AppleWebKit/538.1 (KHTML, like Gecko) PhantomJS/2.1.1 Safari/538.1",
            "",
            "",
        );
        assert!(phantom(&ctx, Some("2")));
        assert!(!phantom(&ctx, Some(">2")));
    }

    #[test]
    fn test_empty_context() {
        let ctx = EnvContext::empty();
        for f in [chrome, edge, firefox, ie, opera, phantom, safari] {
            assert!(!f(&ctx, None));
            assert!(!f(&ctx, Some("junk")));
        }
    }
}
