//! Host extraction and normalization.

use url::Url;

/// Sentinel domain for addresses that cannot be parsed or have no host
/// (e.g. `about:blank`, `file:` URLs).
pub const MISC_DOMAIN: &str = "Misc";

/// Derives the normalized domain label for a tab address.
///
/// The host is lowercased by the parser; one leading `www.` prefix is
/// stripped so `www.github.com` and `github.com` land in the same group.
/// Unparseable or hostless addresses map to [`MISC_DOMAIN`]; the tab is
/// still grouped, never dropped.
pub fn normalize_host(address: &str) -> String {
    let host = match Url::parse(address) {
        Ok(url) => match url.host_str() {
            Some(host) => host.to_string(),
            None => {
                tracing::debug!(address, "address has no host; using sentinel domain");
                return MISC_DOMAIN.to_string();
            }
        },
        Err(error) => {
            tracing::debug!(address, %error, "unparseable address; using sentinel domain");
            return MISC_DOMAIN.to_string();
        }
    };
    host.strip_prefix("www.").unwrap_or(&host).to_string()
}
