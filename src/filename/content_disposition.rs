//! `Content-Disposition` filename extraction.

/// Extracts the filename from a raw `Content-Disposition` header value.
///
/// Supports:
/// - `filename*=UTF-8''percent%20encoded` (RFC 5987, any charset label)
/// - `filename="quoted"` (backslash escapes removed)
/// - `filename=token`
///
/// When both forms are present `filename*` wins, wherever it appears.
/// Parameter names are matched case-insensitively.
pub fn parse_content_disposition(header: &str) -> Option<String> {
    let mut plain: Option<String> = None;

    for param in split_params(header) {
        let Some((name, value)) = param.split_once('=') else {
            continue;
        };
        let name = name.trim().to_ascii_lowercase();
        let value = value.trim();

        if name == "filename*" {
            if let Some(decoded) = decode_ext_value(value) {
                return Some(decoded);
            }
        } else if name == "filename" && plain.is_none() {
            let unquoted = unquote(value);
            if !unquoted.is_empty() {
                plain = Some(unquoted);
            }
        }
    }

    plain
}

/// Splits on `;` outside of double quotes.
fn split_params(header: &str) -> Vec<&str> {
    let mut params = Vec::new();
    let mut in_quotes = false;
    let mut escaped = false;
    let mut start = 0;

    for (i, c) in header.char_indices() {
        match c {
            _ if escaped => escaped = false,
            '\\' if in_quotes => escaped = true,
            '"' => in_quotes = !in_quotes,
            ';' if !in_quotes => {
                params.push(&header[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    params.push(&header[start..]);
    params
}

/// Decodes an RFC 5987 `charset'language'value` string.
fn decode_ext_value(value: &str) -> Option<String> {
    let value = value.trim_matches('"');
    let mut parts = value.splitn(3, '\'');
    let _charset = parts.next()?;
    let _language = parts.next()?;
    let encoded = parts.next()?.trim();

    let decoded = urlencoding::decode(encoded).ok()?.into_owned();
    (!decoded.is_empty()).then_some(decoded)
}

fn unquote(value: &str) -> String {
    let Some(inner) = value
        .strip_prefix('"')
        .map(|v| v.strip_suffix('"').unwrap_or(v))
    else {
        return value.to_string();
    };

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(next) = chars.next() {
                out.push(next);
            }
        } else {
            out.push(c);
        }
    }
    out
}
