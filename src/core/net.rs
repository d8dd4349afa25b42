// src/core/net.rs

// Form-urlencoded POST over a blocking client. All five protocol screens go
// through here; the only variation is the body and the optional cookie.

use reqwest::blocking::{Client, Response};
use reqwest::header::{CONTENT_TYPE, COOKIE};

use crate::error::Result;

pub const CONTENT_TYPE_FORM: &str = "application/x-www-form-urlencoded";

pub fn client() -> Result<Client> {
    Ok(Client::builder().build()?)
}

pub fn post_form(
    client: &Client,
    url: &str,
    cookie: Option<&str>,
    body: String,
) -> Result<Response> {
    let mut req = client
        .post(url)
        .header(CONTENT_TYPE, CONTENT_TYPE_FORM)
        .body(body);
    if let Some(cookie) = cookie {
        req = req.header(COOKIE, cookie);
    }
    Ok(req.send()?)
}
