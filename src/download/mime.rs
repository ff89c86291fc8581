//! Content type to file extension mapping.

/// Extension used when the content type is absent or not recognized.
pub const FALLBACK_EXTENSION: &str = "bin";

const KNOWN_TYPES: &[(&str, &str)] = &[
    ("audio/mpeg", "mp3"),
    ("audio/wav", "wav"),
    ("audio/ogg", "ogg"),
    ("image/jpeg", "jpg"),
    ("image/png", "png"),
    ("application/pdf", "pdf"),
];

/// Map a declared content type to a file extension.
///
/// Parameters such as `; charset=utf-8` are ignored and the essence is
/// compared case-insensitively.
///
/// ```rust
/// use streamsave::download::extension_for;
///
/// assert_eq!(extension_for(Some("image/png")), "png");
/// assert_eq!(extension_for(Some("Audio/MPEG; bitrate=320")), "mp3");
/// assert_eq!(extension_for(Some("application/octet-stream")), "bin");
/// assert_eq!(extension_for(None), "bin");
/// ```
pub fn extension_for(content_type: Option<&str>) -> &'static str {
    let Some(content_type) = content_type else {
        return FALLBACK_EXTENSION;
    };
    let essence = content_type.split(';').next().unwrap_or("").trim();

    KNOWN_TYPES
        .iter()
        .find(|(mime, _)| mime.eq_ignore_ascii_case(essence))
        .map(|(_, ext)| *ext)
        .unwrap_or(FALLBACK_EXTENSION)
}
