// src/core/net.rs
//
// One blocking GET per call. No session reuse, no cookies, no retries;
// timeouts and redirects are whatever reqwest does by default.

use std::error::Error;

use crate::params::USER_AGENT;

fn client() -> Result<reqwest::blocking::Client, Box<dyn Error>> {
    let c = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .build()?;
    Ok(c)
}

/// Fetch a page body as text. Non-2xx status is an error.
pub fn http_get(url: &str) -> Result<String, Box<dyn Error>> {
    logd!("GET {url}");
    let resp = client()?.get(url).send()?.error_for_status()?;
    Ok(resp.text()?)
}

/// Fetch raw bytes (images). Non-2xx status is an error.
pub fn http_get_bytes(url: &str) -> Result<Vec<u8>, Box<dyn Error>> {
    logd!("GET (bytes) {url}");
    let resp = client()?.get(url).send()?.error_for_status()?;
    Ok(resp.bytes()?.to_vec())
}
