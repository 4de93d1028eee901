//! Content-Type to file extension guessing for fallback names.

/// Extension used when the content type is missing or unknown.
pub const DEFAULT_EXTENSION: &str = ".bin";

/// Guesses a file extension (with its leading dot) from a `Content-Type`.
///
/// Parameters such as `; charset=utf-8` are ignored.
pub fn extension_from_content_type(content_type: &str) -> &'static str {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase();

    match mime.as_str() {
        "application/java-archive" | "application/x-java-archive" => ".jar",
        "application/zip" | "application/x-zip-compressed" => ".zip",
        "application/gzip" | "application/x-gzip" => ".gz",
        "application/x-tar" => ".tar",
        "application/x-xz" => ".xz",
        "application/x-7z-compressed" => ".7z",
        "application/json" => ".json",
        "application/xml" | "text/xml" => ".xml",
        "application/yaml" | "text/yaml" => ".yaml",
        "application/toml" => ".toml",
        "application/pdf" => ".pdf",
        "text/plain" => ".txt",
        "text/html" => ".html",
        "text/css" => ".css",
        "text/csv" => ".csv",
        "text/javascript" | "application/javascript" => ".js",
        "image/png" => ".png",
        "image/jpeg" => ".jpg",
        "image/gif" => ".gif",
        "image/svg+xml" => ".svg",
        "image/webp" => ".webp",
        "audio/mpeg" => ".mp3",
        "video/mp4" => ".mp4",
        "application/x-msdownload" => ".exe",
        _ => DEFAULT_EXTENSION,
    }
}
