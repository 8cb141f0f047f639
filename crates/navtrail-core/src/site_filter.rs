//! Tracked-site matching.
//!
//! A hostname belongs to the tracked list when it exactly equals an entry,
//! is a subdomain of an entry, or equals an entry after stripping a leading
//! `www.`. Inputs that do not parse as URLs (including bare NodeIds, which
//! have no scheme) fall back to a substring containment check against the
//! raw input -- intentionally looser, accepted degraded-mode behavior.

use url::Url;

/// Returns whether `url` belongs to one of the tracked site patterns.
///
/// Pure and order-independent over `sites`: any match suffices.
pub fn is_tracked(url: &str, sites: &[String]) -> bool {
    match Url::parse(url) {
        Ok(parsed) => {
            let hostname = parsed.host_str().unwrap_or("");
            sites.iter().any(|site| {
                // Exact match
                hostname == site
                    // Subdomain match (en.wikipedia.org matches wikipedia.org)
                    || hostname.ends_with(&format!(".{}", site))
                    // www variant (www.site.com matches site.com)
                    || hostname.strip_prefix("www.").is_some_and(|h| h == site)
            })
        }
        // Fallback if URL parsing fails
        Err(_) => sites.iter().any(|site| url.contains(site.as_str())),
    }
}
