use sha2::{Digest, Sha256};
use url::Url;

const MAX_STEM_CHARS: usize = 80;

/// Filesystem-safe, deterministic image filename: `{sanitized_name}--{short_hash(url)}.{ext}`.
///
/// `name_hint` (usually the photo description) wins over `photo_id`; the
/// extension comes from the response content type, then the URL.
pub fn image_filename(
    name_hint: Option<&str>,
    photo_id: &str,
    url: &str,
    content_type: Option<&str>,
) -> String {
    let stem = name_hint
        .map(sanitize_name)
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| sanitize_name(photo_id));
    let stem = if stem.is_empty() {
        "photo".to_string()
    } else {
        stem
    };
    let hash = short_hash(url);
    let ext = content_type
        .and_then(extension_for_content_type)
        .or_else(|| extension_from_url(url))
        .unwrap_or("jpg");
    format!("{stem}--{hash}.{ext}")
}

fn sanitize_name(input: &str) -> String {
    let mut compacted = String::with_capacity(input.len());
    let mut prev_underscore = false;
    for c in input.chars() {
        let c = if is_forbidden(c) || c.is_whitespace() {
            '_'
        } else {
            c
        };
        if c == '_' {
            if !prev_underscore {
                compacted.push(c);
            }
            prev_underscore = true;
        } else {
            compacted.push(c);
            prev_underscore = false;
        }
    }
    let trimmed = compacted.trim_matches(&['_', '.'][..]);
    let mut name: String = trimmed.chars().take(MAX_STEM_CHARS).collect();
    if is_reserved_windows_name(&name) {
        name.push('_');
    }
    name
}

fn is_forbidden(c: char) -> bool {
    matches!(c,
        '\\' | '/' | ':' | '*' | '?' | '"' | '<' | '>' | '|' | '\0'..='\u{1F}'
    )
}

fn is_reserved_windows_name(name: &str) -> bool {
    const RESERVED: &[&str] = &[
        "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
        "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
    ];
    RESERVED.iter().any(|r| r.eq_ignore_ascii_case(name))
}

fn extension_for_content_type(content_type: &str) -> Option<&'static str> {
    let mime = content_type.split(';').next().unwrap_or(content_type).trim();
    match mime.to_ascii_lowercase().as_str() {
        "image/jpeg" | "image/jpg" => Some("jpg"),
        "image/png" => Some("png"),
        "image/webp" => Some("webp"),
        "image/avif" => Some("avif"),
        "image/gif" => Some("gif"),
        _ => None,
    }
}

/// Image CDNs encode the format as `fm=`; plain URLs carry a path extension.
fn extension_from_url(url: &str) -> Option<&'static str> {
    let parsed = Url::parse(url).ok()?;
    let from_query = parsed
        .query_pairs()
        .find(|(key, _)| key == "fm")
        .map(|(_, value)| value.to_ascii_lowercase());
    let from_path = parsed
        .path_segments()
        .and_then(|mut segments| segments.next_back())
        .and_then(|last| last.rsplit_once('.'))
        .map(|(_, ext)| ext.to_ascii_lowercase());
    from_query
        .or(from_path)
        .and_then(|ext| match ext.as_str() {
            "jpg" | "jpeg" => Some("jpg"),
            "png" => Some("png"),
            "webp" => Some("webp"),
            "avif" => Some("avif"),
            "gif" => Some("gif"),
            _ => None,
        })
}

fn short_hash(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    let digest = hasher.finalize();
    let mut hex = String::with_capacity(8);
    for byte in digest.iter().take(4) {
        use std::fmt::Write;
        let _ = write!(&mut hex, "{byte:02x}");
    }
    hex
}
