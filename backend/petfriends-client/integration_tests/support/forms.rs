//! Request body decoding for the double: just enough multipart and
//! urlencoded parsing to read back what the client submitted.

use std::collections::HashMap;

/// Extract the text fields (parts without a filename) from a
/// multipart/form-data body.
///
/// File parts may carry arbitrary bytes; the lossy conversion only
/// mangles those, and they are skipped anyway.
pub fn multipart_text_fields(content_type: &str, body: &[u8]) -> HashMap<String, String> {
    let mut fields = HashMap::new();

    let Some(boundary) = boundary_of(content_type) else {
        return fields;
    };
    let delimiter = format!("--{boundary}");
    let text = String::from_utf8_lossy(body);

    for segment in text.split(delimiter.as_str()) {
        let Some((headers, value)) = segment.split_once("\r\n\r\n") else {
            continue;
        };
        if headers.contains("filename=") {
            continue;
        }
        let Some(name) = part_name(headers) else {
            continue;
        };
        let value = value.strip_suffix("\r\n").unwrap_or(value);
        fields.insert(name.to_string(), value.to_string());
    }

    fields
}

/// Decode an application/x-www-form-urlencoded body.
pub fn urlencoded_fields(body: &[u8]) -> HashMap<String, String> {
    url::form_urlencoded::parse(body).into_owned().collect()
}

fn boundary_of(content_type: &str) -> Option<&str> {
    let marker = "boundary=";
    let start = content_type.find(marker)? + marker.len();
    let boundary = content_type[start..]
        .split(';')
        .next()?
        .trim()
        .trim_matches('"');

    if boundary.is_empty() { None } else { Some(boundary) }
}

fn part_name(headers: &str) -> Option<&str> {
    let marker = "name=\"";
    let start = headers.find(marker)? + marker.len();
    let rest = &headers[start..];
    rest.find('"').map(|end| &rest[..end])
}
