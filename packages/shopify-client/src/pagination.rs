//! Cursor pagination via the RFC 5988 `Link` response header.
//!
//! Shopify answers list endpoints with a header such as
//!
//! ```text
//! Link: <https://shop.myshopify.com/admin/api/2023-01/products.json?page_info=abc&limit=250>; rel="previous",
//!       <https://shop.myshopify.com/admin/api/2023-01/products.json?page_info=def&limit=250>; rel="next"
//! ```
//!
//! Only the `next` relation drives the fetch loop.

use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // `<url>; rel="next"`, whitespace around the `;` tolerated
    static ref NEXT_LINK_REGEX: Regex =
        Regex::new(r#"<([^>]*)>\s*;\s*rel\s*=\s*"next""#).unwrap();
}

/// Extract the percent-decoded `rel="next"` URL from a `Link` header value.
///
/// Returns `None` when the header has no `next` relation or cannot be read,
/// which callers treat as "this was the last page". A `next` URL whose
/// escapes do not decode to UTF-8 is returned undecoded.
pub fn extract_next_url(header_value: &str) -> Option<String> {
    let raw = NEXT_LINK_REGEX
        .captures(header_value)?
        .get(1)?
        .as_str()
        .trim();

    if raw.is_empty() {
        return None;
    }

    // Escapes that do not decode to UTF-8 are left as sent.
    Some(
        urlencoding::decode(raw)
            .map(Cow::into_owned)
            .unwrap_or_else(|_| raw.to_string()),
    )
}
