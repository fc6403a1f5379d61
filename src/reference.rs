use regex::Regex;
use std::{fmt, sync::LazyLock};
use thiserror::Error;

static VIDEO_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9_-]{11}$").expect("video id pattern")
});

static WATCH_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:https?://(?:www\.)?youtube\.com/(?:watch\?v=))([^"&?/\s]{11})"#)
        .expect("watch url pattern")
});

/// An 11-character YouTube video identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoId(String);

impl VideoId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("no video reference given")]
    Empty,
    #[error("not a video id or watch url")]
    Unrecognized,
}

/// Turns a bare id or a `youtube.com/watch?v=` url into a [`VideoId`].
///
/// The first eleven characters after `v=` are taken without checking that
/// the video exists, but they must still use the id alphabet.
pub fn resolve(raw: &str) -> Result<VideoId, ResolveError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ResolveError::Empty);
    }

    if VIDEO_ID.is_match(raw) {
        return Ok(VideoId(raw.to_string()));
    }

    if raw.chars().count() >= 11 {
        let captured = WATCH_URL.captures(raw).and_then(|caps| caps.get(1));
        if let Some(id) = captured.filter(|id| VIDEO_ID.is_match(id.as_str())) {
            return Ok(VideoId(id.as_str().to_string()));
        }
    }

    Err(ResolveError::Unrecognized)
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("no channel given")]
pub struct EmptyChannel;

/// Channel ids, `@handles` and legacy usernames are all forwarded as typed;
/// the backend tells them apart.
pub fn channel_input(raw: &str) -> Result<&str, EmptyChannel> {
    let raw = raw.trim();
    if raw.is_empty() {
        Err(EmptyChannel)
    } else {
        Ok(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_id_is_accepted_as_is() {
        assert_eq!(resolve("dQw4w9WgXcQ").unwrap().as_str(), "dQw4w9WgXcQ");
        assert_eq!(resolve("a-b_c-d_e-f").unwrap().as_str(), "a-b_c-d_e-f");
    }

    #[test]
    fn watch_url_yields_id() {
        let id = resolve("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=10s").unwrap();
        assert_eq!(id.as_str(), "dQw4w9WgXcQ");
        assert_eq!(
            resolve("http://youtube.com/watch?v=dQw4w9WgXcQ").unwrap().as_str(),
            "dQw4w9WgXcQ"
        );
        assert_eq!(
            resolve("  https://www.youtube.com/watch?v=dQw4w9WgXcQ  ").unwrap().as_str(),
            "dQw4w9WgXcQ"
        );
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(resolve(""), Err(ResolveError::Empty));
        assert_eq!(resolve("   "), Err(ResolveError::Empty));
    }

    #[test]
    fn unrecognized_input_is_rejected() {
        assert_eq!(resolve("not a video"), Err(ResolveError::Unrecognized));
        assert_eq!(resolve("short"), Err(ResolveError::Unrecognized));
        assert_eq!(resolve("dQw4w9WgXc!"), Err(ResolveError::Unrecognized));
        assert_eq!(resolve("dQw4w9WgXcQQ"), Err(ResolveError::Unrecognized));
        assert_eq!(
            resolve("https://www.youtube.com/watch?v=short"),
            Err(ResolveError::Unrecognized)
        );
        assert_eq!(
            resolve("youtube.com/watch?v=dQw4w9WgXcQ"),
            Err(ResolveError::Unrecognized)
        );
        assert_eq!(
            resolve("https://vimeo.com/watch?v=dQw4w9WgXcQ"),
            Err(ResolveError::Unrecognized)
        );
    }

    #[test]
    fn permissive_capture_takes_any_eleven_allowed_chars() {
        let id = resolve("https://youtube.com/watch?v=abcdefghijklmnop").unwrap();
        assert_eq!(id.as_str(), "abcdefghijk");
    }

    #[test]
    fn accepted_ids_always_look_canonical() {
        let inputs = [
            "dQw4w9WgXcQ",
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=10s",
            "https://youtube.com/watch?v=0123456789_-xyz",
            "https://www.youtube.com/watch?v=ab.de,gh+jk",
            "https://www.youtube.com/watch?v=ab\"de",
        ];
        assert!(resolve(inputs[3]).is_err());
        for input in inputs {
            if let Ok(id) = resolve(input) {
                assert!(VIDEO_ID.is_match(id.as_str()), "{input} -> {id}");
            }
        }
    }

    #[test]
    fn channel_input_is_trimmed_and_required() {
        assert_eq!(channel_input("  @rustlang "), Ok("@rustlang"));
        assert_eq!(channel_input("UCabc"), Ok("UCabc"));
        assert_eq!(channel_input(" \t"), Err(EmptyChannel));
    }
}
