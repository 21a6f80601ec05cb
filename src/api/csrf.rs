//! CSRF Token
//!
//! The server sets the token in a cookie; every request echoes it in a header.

use percent_encoding::percent_decode_str;
use wasm_bindgen::JsCast;

/// Look up `name` in a `document.cookie` string and percent-decode its value
pub fn read_cookie(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| percent_decode_str(value).decode_utf8_lossy().into_owned())
        .filter(|value| !value.is_empty())
}

/// Read a cookie from the current document
pub(crate) fn document_cookie(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let cookies = document.dyn_into::<web_sys::HtmlDocument>().ok()?.cookie().ok()?;
    read_cookie(&cookies, name)
}
