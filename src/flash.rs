//! One-time notices carried to the next rendered page.
//!
//! Messages are queued in a signed `flash` cookie so the client cannot
//! forge them. Reading the queue removes the cookie.

use axum_extra::extract::SignedCookieJar;
use axum_extra::extract::cookie::{Cookie, SameSite};

pub const FLASH_COOKIE: &str = "flash";
const MESSAGE_KEY: &str = "m";

/// Append a message to the queue already held by the client, if any.
pub fn push(jar: SignedCookieJar, message: &str) -> SignedCookieJar {
    let mut messages = queued(&jar);
    messages.push(message.to_string());

    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for m in &messages {
        serializer.append_pair(MESSAGE_KEY, m);
    }

    let cookie = Cookie::build((FLASH_COOKIE, serializer.finish()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();
    jar.add(cookie)
}

/// Drain the queue. The returned jar must be part of the response so the
/// cookie is cleared on the client.
pub fn take(jar: SignedCookieJar) -> (SignedCookieJar, Vec<String>) {
    let messages = queued(&jar);
    if messages.is_empty() {
        return (jar, messages);
    }
    (jar.remove(Cookie::build(FLASH_COOKIE).path("/")), messages)
}

/// Tampered or unsigned cookies fail verification and read as empty.
fn queued(jar: &SignedCookieJar) -> Vec<String> {
    jar.get(FLASH_COOKIE)
        .map(|cookie| {
            form_urlencoded::parse(cookie.value().as_bytes())
                .filter(|(k, _)| k == MESSAGE_KEY)
                .map(|(_, v)| v.into_owned())
                .collect()
        })
        .unwrap_or_default()
}
