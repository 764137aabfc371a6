//! Mimetype detection for stored files.

/// Guesses a mimetype from a path and its contents.
pub trait MimeGuesser: Send + Sync {
    fn guess(&self, path: &str, contents: &[u8]) -> String;
}

/// Magic-number sniffing with an extension table as fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultMimeGuesser;

const MAGIC: &[(&[u8], &str)] = &[
    (b"\x89PNG\r\n\x1a\n", "image/png"),
    (b"\xff\xd8\xff", "image/jpeg"),
    (b"GIF87a", "image/gif"),
    (b"GIF89a", "image/gif"),
    (b"%PDF-", "application/pdf"),
    (b"PK\x03\x04", "application/zip"),
    (b"\x1f\x8b", "application/gzip"),
];

const EXTENSIONS: &[(&str, &str)] = &[
    ("txt", "text/plain"),
    ("md", "text/markdown"),
    ("html", "text/html"),
    ("htm", "text/html"),
    ("css", "text/css"),
    ("csv", "text/csv"),
    ("js", "application/javascript"),
    ("json", "application/json"),
    ("xml", "application/xml"),
    ("yaml", "application/x-yaml"),
    ("yml", "application/x-yaml"),
    ("toml", "application/toml"),
    ("svg", "image/svg+xml"),
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("gif", "image/gif"),
    ("webp", "image/webp"),
    ("ico", "image/x-icon"),
    ("pdf", "application/pdf"),
    ("zip", "application/zip"),
    ("gz", "application/gzip"),
    ("tar", "application/x-tar"),
    ("mp3", "audio/mpeg"),
    ("wav", "audio/wav"),
    ("mp4", "video/mp4"),
    ("webm", "video/webm"),
    ("woff", "font/woff"),
    ("woff2", "font/woff2"),
    ("wasm", "application/wasm"),
];

impl DefaultMimeGuesser {
    fn sniff(contents: &[u8]) -> Option<&'static str> {
        if contents.len() >= 12 && &contents[..4] == b"RIFF" && &contents[8..12] == b"WEBP" {
            return Some("image/webp");
        }
        MAGIC
            .iter()
            .find(|(magic, _)| contents.starts_with(magic))
            .map(|(_, mime)| *mime)
    }

    fn by_extension(path: &str) -> Option<&'static str> {
        let name = path.rsplit('/').next().unwrap_or(path);
        let (stem, ext) = name.rsplit_once('.')?;
        if stem.is_empty() {
            return None;
        }
        let ext = ext.to_ascii_lowercase();
        EXTENSIONS
            .iter()
            .find(|(known, _)| *known == ext)
            .map(|(_, mime)| *mime)
    }
}

impl MimeGuesser for DefaultMimeGuesser {
    fn guess(&self, path: &str, contents: &[u8]) -> String {
        let mime = Self::sniff(contents)
            .or_else(|| Self::by_extension(path))
            .unwrap_or_else(|| {
                if contents.is_empty() {
                    "application/x-empty"
                } else if std::str::from_utf8(contents).is_ok() {
                    "text/plain"
                } else {
                    "application/octet-stream"
                }
            });
        mime.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_wins_over_extension() {
        let guesser = DefaultMimeGuesser;
        assert_eq!(guesser.guess("image.txt", b"\x89PNG\r\n\x1a\nrest"), "image/png");
        assert_eq!(guesser.guess("doc", b"%PDF-1.7"), "application/pdf");
        assert_eq!(guesser.guess("a.bin", b"RIFF\0\0\0\0WEBPVP8 "), "image/webp");
    }

    #[test]
    fn test_extension_fallback() {
        let guesser = DefaultMimeGuesser;
        assert_eq!(guesser.guess("notes/todo.txt", b"buy milk"), "text/plain");
        assert_eq!(guesser.guess("data/config.JSON", b"{}"), "application/json");
        assert_eq!(guesser.guess("readme.md", b"# hi"), "text/markdown");
    }

    #[test]
    fn test_content_class_fallback() {
        let guesser = DefaultMimeGuesser;
        assert_eq!(guesser.guess("Makefile", b"all:\n"), "text/plain");
        assert_eq!(guesser.guess(".hidden", b"\xff\xfe\x00"), "application/octet-stream");
        assert_eq!(guesser.guess("empty", b""), "application/x-empty");
    }
}
