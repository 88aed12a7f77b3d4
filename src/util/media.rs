//! Media-type validation for staged files.
//!
//! The file picker and the drop target both funnel through this guard, so
//! non-image selections are rejected identically regardless of entry path.

#[cfg(test)]
#[path = "media_test.rs"]
mod media_test;

/// Whether a browser-reported MIME type identifies an image.
///
/// Matching is case-insensitive and tolerates surrounding whitespace; an
/// empty or bare `image/` type is rejected.
pub fn is_image_media_type(media_type: &str) -> bool {
    let normalized = media_type.trim().to_ascii_lowercase();
    normalized
        .strip_prefix("image/")
        .is_some_and(|subtype| !subtype.is_empty())
}
