//! Startup language selection from a URL query string.

/// Decode one `application/x-www-form-urlencoded` component.
///
/// `+` becomes a space and `%XX` becomes the byte it encodes. Malformed
/// escapes are kept as written; invalid UTF-8 is replaced.
fn decode_component(raw: &str) -> String {
    let bytes = raw.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut index = 0;
    while index < bytes.len() {
        match bytes[index] {
            b'+' => decoded.push(b' '),
            b'%' => {
                let escape = bytes
                    .get(index + 1..index + 3)
                    .filter(|hex| hex.iter().all(u8::is_ascii_hexdigit))
                    .and_then(|hex| std::str::from_utf8(hex).ok())
                    .and_then(|hex| u8::from_str_radix(hex, 16).ok());
                match escape {
                    Some(byte) => {
                        decoded.push(byte);
                        index += 2;
                    }
                    None => decoded.push(b'%'),
                }
            }
            byte => decoded.push(byte),
        }
        index += 1;
    }
    String::from_utf8_lossy(&decoded).into_owned()
}

/// Value of the first `name` parameter in `query`.
///
/// Accepts an optional leading `?`. A parameter without `=` has an empty
/// value.
pub fn query_param(query: &str, name: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(key, _)| decode_component(key) == name)
        .map(|(_, value)| decode_component(value))
}

/// Pick the startup language from `query`.
///
/// Returns the `param` value when it is one of `recognized`, otherwise
/// `default`.
pub fn language_from_query(
    query: &str,
    param: &str,
    recognized: &[String],
    default: &str,
) -> String {
    match query_param(query, param) {
        Some(value) if recognized.iter().any(|language| *language == value) => value,
        Some(value) => {
            tracing::debug!(
                param,
                value = %value,
                default,
                "unrecognized language in query, using default"
            );
            default.to_string()
        }
        None => default.to_string(),
    }
}
