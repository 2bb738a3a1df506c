/// Minimal multipart/form-data parsing for the upload form.
///
/// The body is split once into parts; handlers then pick fields by name.

/// One form field of a multipart body.
#[derive(Debug, PartialEq)]
pub struct Part<'a> {
    pub name:     String,
    pub filename: Option<String>,
    pub data:     &'a [u8],
}

/// Returns the index of the first occurrence of `needle` in `haystack`.
pub fn find_subsequence(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// Extracts the boundary token from a Content-Type header value like
/// `multipart/form-data; boundary=----WebKitFormBoundaryXXX`.
pub fn extract_boundary(content_type: &str) -> Option<String> {
    content_type
        .split(';')
        .map(|s| s.trim())
        .find_map(|s| s.strip_prefix("boundary="))
        .map(|b| b.trim_matches('"').to_owned())
        .filter(|b| !b.is_empty())
}

/// Splits a multipart body into its parts. Parts without a
/// `Content-Disposition` name are skipped.
pub fn parse_parts<'a>(body: &'a [u8], boundary: &str) -> Vec<Part<'a>> {
    let delimiter = format!("--{}", boundary);
    let delimiter = delimiter.as_bytes();
    let mut parts = Vec::new();

    let mut rest = match find_subsequence(body, delimiter) {
        Some(pos) => &body[pos + delimiter.len()..],
        None => return parts,
    };
    while let Some(end) = find_subsequence(rest, delimiter) {
        let chunk = &rest[..end];
        rest = &rest[end + delimiter.len()..];

        let chunk = chunk.strip_prefix(b"\r\n").unwrap_or(chunk);
        let Some(sep) = find_subsequence(chunk, b"\r\n\r\n") else { continue };
        let headers = String::from_utf8_lossy(&chunk[..sep]);
        let data = &chunk[sep + 4..];
        let data = data.strip_suffix(b"\r\n").unwrap_or(data);

        if let Some(name) = disposition_param(&headers, "name") {
            let filename = disposition_param(&headers, "filename");
            parts.push(Part { name, filename, data });
        }
    }
    parts
}

/// Reads `key="value"` from the Content-Disposition header line.
fn disposition_param(headers: &str, key: &str) -> Option<String> {
    let line = headers
        .lines()
        .find(|l| l.to_ascii_lowercase().starts_with("content-disposition:"))?;
    line.split(';')
        .map(|p| p.trim())
        .find_map(|p| p.strip_prefix(key)?.strip_prefix('='))
        .map(|v| v.trim_matches('"').to_owned())
}

/// Bytes of the file field called `name`.
pub fn file_field<'a>(parts: &[Part<'a>], name: &str) -> Option<&'a [u8]> {
    parts.iter()
        .find(|p| p.name == name && p.filename.is_some())
        .map(|p| p.data)
}

/// Value of the text field called `name`.
pub fn text_field(parts: &[Part<'_>], name: &str) -> Option<String> {
    parts.iter()
        .find(|p| p.name == name && p.filename.is_none())
        .and_then(|p| String::from_utf8(p.data.to_vec()).ok())
}
