use url::Url;

/// Sentinel used when no video id can be extracted. The pipeline proceeds
/// with it rather than rejecting the input.
pub const UNKNOWN_VIDEO_ID: &str = "unknown";

/// Extract the video id from the known YouTube URL shapes:
/// `watch?v=ID`, `youtu.be/ID`, and `embed/ID`.
pub fn extract_video_id(raw: &str) -> Option<String> {
    if let Ok(parsed) = Url::parse(raw) {
        if let Some(id) = extract_from_parsed(&parsed) {
            return Some(id);
        }
    }
    // Scheme-less or otherwise unparseable input still gets a marker scan.
    extract_from_markers(raw)
}

/// Extract the id, or the sentinel when no shape matches.
pub fn video_id_or_unknown(raw: &str) -> String {
    extract_video_id(raw).unwrap_or_else(|| UNKNOWN_VIDEO_ID.to_string())
}

fn extract_from_parsed(url: &Url) -> Option<String> {
    let host = url.host_str()?;

    if host == "youtu.be" {
        let id = url.path_segments()?.next()?;
        return non_empty(id);
    }

    if host.ends_with("youtube.com") {
        if url.path() == "/watch" {
            let id = url
                .query_pairs()
                .find(|(k, _)| k == "v")
                .map(|(_, v)| v.into_owned())?;
            return non_empty(&id);
        }
        let mut segments = url.path_segments()?;
        if segments.next() == Some("embed") {
            let id = segments.next()?;
            return non_empty(id);
        }
    }

    None
}

fn extract_from_markers(raw: &str) -> Option<String> {
    const MARKERS: [&str; 3] = ["watch?v=", "youtu.be/", "embed/"];
    for marker in MARKERS {
        if let Some(pos) = raw.find(marker) {
            let rest = &raw[pos + marker.len()..];
            let end = rest
                .find(['&', '?', '#', '\n'])
                .unwrap_or(rest.len());
            return non_empty(&rest[..end]);
        }
    }
    None
}

fn non_empty(id: &str) -> Option<String> {
    if id.is_empty() {
        None
    } else {
        Some(id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_watch_shape() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ").as_deref(),
            Some("dQw4w9WgXcQ")
        );
    }

    #[test]
    fn extracts_watch_shape_with_extra_params() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=abc123&t=42s").as_deref(),
            Some("abc123")
        );
    }

    #[test]
    fn extracts_short_shape() {
        assert_eq!(
            extract_video_id("https://youtu.be/dQw4w9WgXcQ").as_deref(),
            Some("dQw4w9WgXcQ")
        );
        assert_eq!(
            extract_video_id("https://youtu.be/dQw4w9WgXcQ?t=10").as_deref(),
            Some("dQw4w9WgXcQ")
        );
    }

    #[test]
    fn extracts_embed_shape() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/embed/dQw4w9WgXcQ").as_deref(),
            Some("dQw4w9WgXcQ")
        );
    }

    #[test]
    fn scheme_less_input_uses_marker_scan() {
        assert_eq!(
            extract_video_id("youtube.com/watch?v=xyz789").as_deref(),
            Some("xyz789")
        );
    }

    #[test]
    fn unmatched_input_yields_sentinel() {
        assert_eq!(extract_video_id("https://example.com/video"), None);
        assert_eq!(extract_video_id(""), None);
        assert_eq!(video_id_or_unknown("not a url"), UNKNOWN_VIDEO_ID);
    }
}
