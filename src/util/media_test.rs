use super::*;

#[test]
fn accepts_common_image_types() {
    assert!(is_image_media_type("image/png"));
    assert!(is_image_media_type("image/jpeg"));
    assert!(is_image_media_type("image/webp"));
}

#[test]
fn accepts_uppercase_and_padded_types() {
    assert!(is_image_media_type("IMAGE/PNG"));
    assert!(is_image_media_type("  image/jpeg  "));
}

#[test]
fn rejects_non_image_types() {
    assert!(!is_image_media_type("application/pdf"));
    assert!(!is_image_media_type("text/plain"));
    assert!(!is_image_media_type("video/mp4"));
}

#[test]
fn rejects_empty_and_bare_prefix() {
    assert!(!is_image_media_type(""));
    assert!(!is_image_media_type("image/"));
    assert!(!is_image_media_type("image"));
}
