//! Site wide configuration that the ui receives from its launcher.

/// Used when no site url was configured at build time.
pub const DEFAULT_SITE_URL: &str = "http://localhost:8080";

/// The origin every short link is built from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    base_url: String,
}

impl SiteConfig {
    #[must_use]
    pub fn new(base_url: impl AsRef<str>) -> Self {
        Self {
            base_url: base_url.as_ref().trim_end_matches('/').to_string(),
        }
    }

    /// Read `LINKSHORT_SITE_URL` as it was set when the crate was compiled.
    ///
    /// The browser build has no process environment, so the value is baked in.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::new(option_env!("LINKSHORT_SITE_URL").unwrap_or(DEFAULT_SITE_URL))
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `<site-base>/api/<slug>`
    #[must_use]
    pub fn short_link(&self, slug: &str) -> String {
        format!("{}/api/{}", self.base_url, slug)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SITE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_link_uses_api_prefix() {
        let site = SiteConfig::new("https://sho.rt");
        assert_eq!(site.short_link("abcdef"), "https://sho.rt/api/abcdef");
    }

    #[test]
    fn trailing_slashes_are_trimmed() {
        let site = SiteConfig::new("https://sho.rt//");
        assert_eq!(site.base_url(), "https://sho.rt");
        assert_eq!(site.short_link("x"), "https://sho.rt/api/x");
    }

    #[test]
    fn default_points_to_localhost() {
        assert_eq!(
            SiteConfig::default().short_link("[slug]"),
            "http://localhost:8080/api/[slug]"
        );
    }
}
