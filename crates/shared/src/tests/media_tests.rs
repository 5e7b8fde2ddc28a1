use super::*;

#[test]
fn site_relative_reference_is_an_asset() {
    let image = ImageRef::parse("/placeholder.jpg").expect("asset");
    assert_eq!(image, ImageRef::Asset(PathBuf::from("placeholder.jpg")));
    assert!(!image.is_remote());
    assert_eq!(
        image.resolve_asset(Path::new("public")),
        Some(Path::new("public").join("placeholder.jpg"))
    );
    assert_eq!(image.to_string(), "/placeholder.jpg");
}

#[test]
fn https_reference_is_remote() {
    let image = ImageRef::parse(
        "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=256&h=256",
    )
    .expect("remote");
    assert!(image.is_remote());
    assert_eq!(image.resolve_asset(Path::new("public")), None);
}

#[test]
fn blank_reference_is_rejected() {
    assert_eq!(ImageRef::parse("   "), Err(ImageRefError::Empty));
    assert_eq!(ImageRef::parse("/"), Err(ImageRefError::Empty));
}

#[test]
fn non_http_schemes_are_rejected() {
    let err = ImageRef::parse("ftp://example.com/a.png").expect_err("ftp");
    assert!(matches!(err, ImageRefError::UnsupportedScheme { ref scheme, .. } if scheme == "ftp"));
}

#[test]
fn parent_components_cannot_escape_asset_root() {
    let err = ImageRef::parse("/../secrets/key.png").expect_err("escape");
    assert!(matches!(err, ImageRefError::OutsideAssetRoot { .. }));
}

#[test]
fn query_suffix_is_dropped_from_asset_path() {
    let image = ImageRef::parse("/img/cover.jpg?v=2").expect("asset");
    assert_eq!(image, ImageRef::Asset(PathBuf::from("img").join("cover.jpg")));
}
