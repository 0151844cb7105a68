// SPDX-FileCopyrightText: 2026 Tubetrack Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Channel URL parsing.
//!
//! Recognizes the four channel URL shapes by prefix matching; the identifier
//! token runs up to the next `/` or `?`, so trailing slashes and query
//! strings are ignored. No network access happens here.

use crate::error::TubetrackError;
use crate::types::ChannelRef;

/// URL path markers and the reference kind each one maps to.
const SHAPES: [(&str, Kind); 4] = [
    ("youtube.com/@", Kind::Username),
    ("youtube.com/channel/", Kind::ChannelId),
    ("youtube.com/c/", Kind::Username),
    ("youtube.com/user/", Kind::Username),
];

#[derive(Clone, Copy)]
enum Kind {
    Username,
    ChannelId,
}

/// Extract a typed channel reference from a free-form URL string.
///
/// Returns `InvalidUrl` only when none of the four shapes apply or the
/// identifier token is empty.
pub fn extract_channel_ref(url: &str) -> Result<ChannelRef, TubetrackError> {
    for (marker, kind) in SHAPES {
        if let Some(start) = url.find(marker) {
            let rest = &url[start + marker.len()..];
            let token: &str = rest
                .split(['/', '?'])
                .next()
                .unwrap_or("");
            if token.is_empty() {
                continue;
            }
            return Ok(match kind {
                Kind::Username => ChannelRef::Username(token.to_string()),
                Kind::ChannelId => ChannelRef::ChannelId(token.to_string()),
            });
        }
    }
    Err(TubetrackError::InvalidUrl(url.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_url_extracts_username() {
        let r = extract_channel_ref("https://www.youtube.com/@SomeCreator").unwrap();
        assert_eq!(r, ChannelRef::Username("SomeCreator".into()));
    }

    #[test]
    fn channel_id_url_extracts_direct_id() {
        let r = extract_channel_ref("https://youtube.com/channel/UC1234abcd").unwrap();
        assert_eq!(r, ChannelRef::ChannelId("UC1234abcd".into()));
    }

    #[test]
    fn legacy_custom_and_user_urls_extract_usernames() {
        let c = extract_channel_ref("https://youtube.com/c/OldCustomName").unwrap();
        assert_eq!(c, ChannelRef::Username("OldCustomName".into()));

        let u = extract_channel_ref("http://youtube.com/user/legacyUser").unwrap();
        assert_eq!(u, ChannelRef::Username("legacyUser".into()));
    }

    #[test]
    fn query_strings_and_trailing_paths_are_ignored() {
        let r = extract_channel_ref("https://youtube.com/@handle?si=xyz&feature=share").unwrap();
        assert_eq!(r.value(), "handle");

        let r = extract_channel_ref("https://youtube.com/channel/UCxyz/videos").unwrap();
        assert_eq!(r, ChannelRef::ChannelId("UCxyz".into()));

        let r = extract_channel_ref("https://youtube.com/@handle/").unwrap();
        assert_eq!(r.value(), "handle");
    }

    #[test]
    fn unrecognized_urls_fail() {
        assert!(matches!(
            extract_channel_ref("https://example.com/watch?v=abc"),
            Err(TubetrackError::InvalidUrl(_))
        ));
        assert!(matches!(
            extract_channel_ref("https://youtube.com/watch?v=abc"),
            Err(TubetrackError::InvalidUrl(_))
        ));
        // Marker present but no token.
        assert!(extract_channel_ref("https://youtube.com/@").is_err());
    }
}
