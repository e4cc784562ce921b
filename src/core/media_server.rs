//! Session-scoped object URLs for imported files.
//!
//! The webview cannot read arbitrary local paths, so each imported file gets a
//! `/media/<id>/<name>` URL. The asset handler registered by the app answers
//! those requests from the registry, including byte ranges so `<video>` can seek.

use http::{header, Response, StatusCode};
use percent_encoding::{percent_decode_str, utf8_percent_encode, NON_ALPHANUMERIC};
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::ops::Range;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use uuid::Uuid;

/// Name of the asset handler; URLs are served under `/<MEDIA_HANDLER_NAME>/`.
pub const MEDIA_HANDLER_NAME: &str = "media";

/// Largest body returned for one range request. The player asks again for
/// the rest, so open-ended `bytes=a-` requests never load a whole file.
pub const MAX_RANGE_CHUNK_BYTES: u64 = 4 * 1024 * 1024;

/// Maps object-URL ids to files on disk.
#[derive(Debug, Default)]
pub struct MediaUrlRegistry {
    entries: RwLock<HashMap<Uuid, PathBuf>>,
}

impl MediaUrlRegistry {
    /// Register a file and return its id and URL.
    pub fn register(&self, path: &Path) -> (Uuid, String) {
        let id = Uuid::new_v4();
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(id, path.to_path_buf());
        }
        (id, object_url(id, path))
    }

    /// Drop a URL; later requests for it answer 404.
    pub fn revoke(&self, id: Uuid) -> bool {
        self.entries
            .write()
            .map(|mut entries| entries.remove(&id).is_some())
            .unwrap_or(false)
    }

    pub fn resolve(&self, id: Uuid) -> Option<PathBuf> {
        self.entries.read().ok()?.get(&id).cloned()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.read().map(|entries| entries.is_empty()).unwrap_or(true)
    }
}

/// URL for a registered file. The file name is kept so the webview can sniff
/// the type from the extension.
pub fn object_url(id: Uuid, path: &Path) -> String {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!(
        "/{}/{}/{}",
        MEDIA_HANDLER_NAME,
        id,
        utf8_percent_encode(&name, NON_ALPHANUMERIC)
    )
}

/// Extract the id from a request path such as `/media/<id>/clip.mp4`.
pub fn parse_object_url(path: &str) -> Option<Uuid> {
    let decoded = percent_decode_str(path).decode_utf8().ok()?;
    let mut segments = decoded.trim_start_matches('/').split('/');
    if segments.next()? != MEDIA_HANDLER_NAME {
        return None;
    }
    Uuid::parse_str(segments.next()?).ok()
}

/// Outcome of interpreting a `Range` header against a file length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ByteRange {
    /// No usable range: serve the whole file.
    Full,
    /// Serve this half-open slice with 206.
    Partial(Range<u64>),
    /// The range lies outside the file: answer 416.
    Unsatisfiable,
}

/// Parse a single `bytes=` range. Multi-range requests fall back to `Full`.
pub fn parse_range(header_value: Option<&str>, len: u64) -> ByteRange {
    let Some(ranges) = header_value.and_then(|value| value.trim().strip_prefix("bytes=")) else {
        return ByteRange::Full;
    };
    if ranges.contains(',') {
        return ByteRange::Full;
    }
    let Some((start, end)) = ranges.split_once('-') else {
        return ByteRange::Full;
    };
    let (start, end) = (start.trim(), end.trim());

    let range = if start.is_empty() {
        // Suffix form: the last N bytes.
        let Ok(suffix) = end.parse::<u64>() else {
            return ByteRange::Full;
        };
        if suffix == 0 {
            return ByteRange::Unsatisfiable;
        }
        len.saturating_sub(suffix)..len
    } else {
        let Ok(start) = start.parse::<u64>() else {
            return ByteRange::Full;
        };
        let end = if end.is_empty() {
            len
        } else {
            match end.parse::<u64>() {
                // last-pos before first-pos is not a valid range; ignore the header
                Ok(last) if last < start => return ByteRange::Full,
                Ok(last) => last.saturating_add(1).min(len),
                Err(_) => return ByteRange::Full,
            }
        };
        start..end
    };

    if range.start >= len || range.start >= range.end {
        return ByteRange::Unsatisfiable;
    }
    ByteRange::Partial(range)
}

fn content_type(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}

fn status_response(status: StatusCode) -> Response<Vec<u8>> {
    let mut response = Response::new(Vec::new());
    *response.status_mut() = status;
    response
}

fn read_slice(file: &mut File, range: Range<u64>) -> io::Result<Vec<u8>> {
    file.seek(SeekFrom::Start(range.start))?;
    let mut body = Vec::with_capacity((range.end - range.start) as usize);
    file.take(range.end - range.start).read_to_end(&mut body)?;
    Ok(body)
}

/// Build the response for a media request.
pub fn serve(registry: &MediaUrlRegistry, request_path: &str, range_header: Option<&str>) -> Response<Vec<u8>> {
    serve_chunked(registry, request_path, range_header, MAX_RANGE_CHUNK_BYTES)
}

fn serve_chunked(
    registry: &MediaUrlRegistry,
    request_path: &str,
    range_header: Option<&str>,
    max_chunk: u64,
) -> Response<Vec<u8>> {
    let Some(path) = parse_object_url(request_path).and_then(|id| registry.resolve(id)) else {
        return status_response(StatusCode::NOT_FOUND);
    };
    let opened = File::open(&path).and_then(|file| {
        let len = file.metadata()?.len();
        Ok((file, len))
    });
    let (mut file, len) = match opened {
        Ok(opened) => opened,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "failed to open media file");
            return status_response(StatusCode::NOT_FOUND);
        }
    };
    let mime = content_type(&path);

    let builder = Response::builder()
        .header(header::CONTENT_TYPE, mime)
        .header(header::ACCEPT_RANGES, "bytes");

    let response = match parse_range(range_header, len) {
        ByteRange::Full => match read_slice(&mut file, 0..len) {
            Ok(body) => builder
                .status(StatusCode::OK)
                .header(header::CONTENT_LENGTH, body.len())
                .body(body),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "failed to read media file");
                return status_response(StatusCode::INTERNAL_SERVER_ERROR);
            }
        },
        ByteRange::Partial(range) => {
            let range = range.start..range.end.min(range.start.saturating_add(max_chunk.max(1)));
            match read_slice(&mut file, range.clone()) {
                Ok(body) => builder
                    .status(StatusCode::PARTIAL_CONTENT)
                    .header(header::CONTENT_LENGTH, body.len())
                    .header(
                        header::CONTENT_RANGE,
                        format!("bytes {}-{}/{}", range.start, range.end - 1, len),
                    )
                    .body(body),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "failed to read media range");
                    return status_response(StatusCode::INTERNAL_SERVER_ERROR);
                }
            }
        }
        ByteRange::Unsatisfiable => builder
            .status(StatusCode::RANGE_NOT_SATISFIABLE)
            .header(header::CONTENT_RANGE, format!("bytes */{}", len))
            .body(Vec::new()),
    };

    response.unwrap_or_else(|err| {
        tracing::warn!(error = %err, "failed to build media response");
        status_response(StatusCode::INTERNAL_SERVER_ERROR)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_url_round_trip() {
        let id = Uuid::new_v4();
        let url = object_url(id, Path::new("/tmp/My Clip #1.mp4"));
        assert!(url.starts_with(&format!("/media/{}/", id)));
        assert!(!url.contains(' '));
        assert_eq!(parse_object_url(&url), Some(id));
        assert_eq!(parse_object_url("/other/abc"), None);
        assert_eq!(parse_object_url("/media/not-a-uuid/x.mp4"), None);
    }

    #[test]
    fn test_revoke() {
        let registry = MediaUrlRegistry::default();
        let (id, _) = registry.register(Path::new("a.mp4"));
        assert!(registry.resolve(id).is_some());
        assert!(registry.revoke(id));
        assert!(!registry.revoke(id));
        assert!(registry.resolve(id).is_none());
    }

    #[test]
    fn test_parse_range() {
        assert_eq!(parse_range(None, 100), ByteRange::Full);
        assert_eq!(parse_range(Some("bytes=0-9"), 100), ByteRange::Partial(0..10));
        assert_eq!(parse_range(Some("bytes=90-"), 100), ByteRange::Partial(90..100));
        assert_eq!(parse_range(Some("bytes=-20"), 100), ByteRange::Partial(80..100));
        assert_eq!(parse_range(Some("bytes=50-500"), 100), ByteRange::Partial(50..100));
        assert_eq!(parse_range(Some("bytes=100-"), 100), ByteRange::Unsatisfiable);
        assert_eq!(parse_range(Some("bytes=-0"), 100), ByteRange::Unsatisfiable);
        assert_eq!(parse_range(Some("bytes=0-1,5-6"), 100), ByteRange::Full);
        assert_eq!(parse_range(Some("items=0-1"), 100), ByteRange::Full);
    }

    #[test]
    fn test_inverted_range_is_ignored() {
        assert_eq!(parse_range(Some("bytes=5-2"), 100), ByteRange::Full);
        assert_eq!(parse_range(Some("bytes=5-5"), 100), ByteRange::Partial(5..6));
        assert_eq!(parse_range(Some("bytes=150-120"), 100), ByteRange::Full);
    }

    #[test]
    fn test_serve_full_partial_and_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clip.mp4");
        std::fs::write(&path, b"0123456789").unwrap();
        let registry = MediaUrlRegistry::default();
        let (_, url) = registry.register(&path);

        let full = serve(&registry, &url, None);
        assert_eq!(full.status(), StatusCode::OK);
        assert_eq!(full.body().as_slice(), b"0123456789");
        assert_eq!(full.headers()[header::CONTENT_TYPE], "video/mp4");

        let partial = serve(&registry, &url, Some("bytes=2-4"));
        assert_eq!(partial.status(), StatusCode::PARTIAL_CONTENT);
        assert_eq!(partial.body().as_slice(), b"234");
        assert_eq!(partial.headers()[header::CONTENT_RANGE], "bytes 2-4/10");

        let out_of_range = serve(&registry, &url, Some("bytes=20-"));
        assert_eq!(out_of_range.status(), StatusCode::RANGE_NOT_SATISFIABLE);

        let missing = serve(&registry, &format!("/media/{}/x.mp4", Uuid::new_v4()), None);
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_partial_reads_only_the_requested_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("long.webm");
        let data: Vec<u8> = (0..1_000_000u32).map(|i| (i % 251) as u8).collect();
        std::fs::write(&path, &data).unwrap();
        let registry = MediaUrlRegistry::default();
        let (_, url) = registry.register(&path);

        let head = serve(&registry, &url, Some("bytes=0-1"));
        assert_eq!(head.status(), StatusCode::PARTIAL_CONTENT);
        assert_eq!(head.body().len(), 2);
        assert_eq!(head.headers()[header::CONTENT_LENGTH], "2");

        let middle = serve(&registry, &url, Some("bytes=500000-500009"));
        assert_eq!(middle.body().as_slice(), &data[500_000..500_010]);
        assert_eq!(middle.headers()[header::CONTENT_RANGE], "bytes 500000-500009/1000000");
    }

    #[test]
    fn test_open_ended_range_is_capped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clip.mp4");
        std::fs::write(&path, b"0123456789").unwrap();
        let registry = MediaUrlRegistry::default();
        let (_, url) = registry.register(&path);

        let chunk = serve_chunked(&registry, &url, Some("bytes=2-"), 4);
        assert_eq!(chunk.status(), StatusCode::PARTIAL_CONTENT);
        assert_eq!(chunk.body().as_slice(), b"2345");
        assert_eq!(chunk.headers()[header::CONTENT_RANGE], "bytes 2-5/10");

        let tail = serve_chunked(&registry, &url, Some("bytes=8-"), 4);
        assert_eq!(tail.body().as_slice(), b"89");
        assert_eq!(tail.headers()[header::CONTENT_RANGE], "bytes 8-9/10");
    }
}
