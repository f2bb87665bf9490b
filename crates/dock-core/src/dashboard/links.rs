//! URL helpers for shortcuts and items.

use url::Url;

/// Favicon size used for tab shortcuts.
pub const SHORTCUT_FAVICON_SIZE: u32 = 32;

/// Favicon size used for category items.
pub const ITEM_ICON_SIZE: u32 = 16;

/// Parse an absolute URL, returning `None` for anything else.
pub fn parse_link(value: &str) -> Option<Url> {
    Url::parse(value.trim()).ok()
}

/// Favicon service URL for `url`, or an empty string when it has no host.
pub fn favicon_url(url: &str, size: u32) -> String {
    match parse_link(url).as_ref().and_then(Url::host_str) {
        Some(host) => format!(
            "https://www.google.com/s2/favicons?domain={}&sz={}",
            host, size
        ),
        None => String::new(),
    }
}

/// Host of `url` without a leading `www.`; the input itself when unparsable.
pub fn domain_name(url: &str) -> String {
    match parse_link(url).as_ref().and_then(Url::host_str) {
        Some(host) => host.strip_prefix("www.").unwrap_or(host).to_string(),
        None => url.to_string(),
    }
}
