//! Validation of caller-supplied stream hosts and identifiers.
//!
//! Transport-control endpoints build an outbound URL from a `domain` and a
//! `stream_id` taken straight from the request path. Both are restricted to
//! characters that cannot change the shape of that URL. An optional
//! allow-list narrows which hosts may be contacted at all.

use crate::error::CoreError;

/// Longest accepted host name (RFC 1035).
const MAX_HOST_LEN: usize = 253;

/// Longest accepted stream identifier.
const MAX_STREAM_ID_LEN: usize = 128;

/// Validate a `host[:port]` stream domain.
///
/// Rejects anything carrying a scheme, path, userinfo or query. When
/// `allowlist` is non-empty the host must equal one of its entries or be a
/// subdomain of one.
pub fn validate_stream_domain(domain: &str, allowlist: &[String]) -> Result<(), CoreError> {
    let (host, port) = match domain.rsplit_once(':') {
        Some((host, port)) => (host, Some(port)),
        None => (domain, None),
    };

    if host.is_empty() || host.len() > MAX_HOST_LEN {
        return Err(CoreError::Validation(format!(
            "Stream domain must be between 1 and {MAX_HOST_LEN} characters"
        )));
    }

    let labels_ok = host.split('.').all(|label| {
        !label.is_empty()
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    });
    if !labels_ok {
        return Err(CoreError::Validation(format!(
            "Invalid stream domain '{domain}'"
        )));
    }

    if let Some(port) = port {
        match port.parse::<u16>() {
            Ok(p) if p > 0 && port.chars().all(|c| c.is_ascii_digit()) => {}
            _ => {
                return Err(CoreError::Validation(format!(
                    "Invalid port in stream domain '{domain}'"
                )))
            }
        }
    }

    if allowlist.is_empty() {
        return Ok(());
    }

    let host = host.to_ascii_lowercase();
    let allowed = allowlist.iter().any(|entry| {
        let entry = entry.trim_start_matches('.').to_ascii_lowercase();
        host == entry || host.ends_with(&format!(".{entry}"))
    });
    if allowed {
        Ok(())
    } else {
        Err(CoreError::Forbidden(format!(
            "Stream domain '{domain}' is not allowed"
        )))
    }
}

/// Validate a stream identifier: 1-128 ASCII alphanumerics, `-` or `_`.
pub fn validate_stream_id(stream_id: &str) -> Result<(), CoreError> {
    if stream_id.is_empty() || stream_id.len() > MAX_STREAM_ID_LEN {
        return Err(CoreError::Validation(format!(
            "Stream id must be between 1 and {MAX_STREAM_ID_LEN} characters"
        )));
    }
    if !stream_id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(CoreError::Validation(format!(
            "Invalid stream id '{stream_id}'"
        )));
    }
    Ok(())
}
