//! URL encoding helpers for path segments and query values.
//!
//! URNs are embedded in request paths and query strings
//! (`/posts?q=author&author=urn%3Ali%3Aorganization%3A123`), so their
//! separators must be escaped.

use crate::errors::{LinkedInResult, ValidationError};
use percent_encoding::{percent_decode, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters that should NOT be percent-encoded in query values.
const QUERY_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b' ');

/// Encodes text into URL-encoded (query escaped) form.
///
/// Spaces become `+`; everything outside `A-Za-z0-9-_.~` becomes `%XX`.
pub fn encode_url(text: &str) -> String {
    utf8_percent_encode(text, QUERY_SET)
        .to_string()
        .replace(' ', "+")
}

/// Decodes URL-encoded text back into plain text.
pub fn decode_url(text: &str) -> LinkedInResult<String> {
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = bytes.len() > i + 2
                && bytes[i + 1].is_ascii_hexdigit()
                && bytes[i + 2].is_ascii_hexdigit();
            if !valid {
                let end = (i + 3).min(bytes.len());
                return Err(ValidationError::MalformedEncoding {
                    message: format!(
                        "invalid escape {:?}",
                        String::from_utf8_lossy(&bytes[i..end])
                    ),
                }
                .into());
            }
            i += 3;
        } else {
            i += 1;
        }
    }

    let plus_decoded = text.replace('+', " ");
    percent_decode(plus_decoded.as_bytes())
        .decode_utf8()
        .map(|s| s.into_owned())
        .map_err(|e| {
            ValidationError::MalformedEncoding {
                message: e.to_string(),
            }
            .into()
        })
}
