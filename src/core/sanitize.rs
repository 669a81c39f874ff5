// src/core/sanitize.rs

/// Collapse all whitespace runs to single spaces and trim.
/// Shop pages love newlines and tabs inside price elements.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Strip the trailing `*` footnote marker some shops hang on prices
/// ("1.234,00 € *"). Everything else about the formatting is kept
/// verbatim — no numeric parsing, no locale handling.
pub fn strip_price_marker(s: &str) -> String {
    s.trim_end_matches('*').trim_end().to_string()
}

/// Resolve a possibly protocol-relative or root-relative image URL
/// against the page it came from.
pub fn absolutize_url(page_url: &str, href: &str) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        return s!(href);
    }
    if let Some(rest) = href.strip_prefix("//") {
        return join!("https://", rest);
    }
    // Root-relative: keep scheme + host of the page.
    if href.starts_with('/') {
        if let Some(scheme_end) = page_url.find("://") {
            let host_end = page_url[scheme_end + 3..]
                .find('/')
                .map(|i| scheme_end + 3 + i)
                .unwrap_or(page_url.len());
            return join!(&page_url[..host_end], href);
        }
    }
    s!(href)
}
