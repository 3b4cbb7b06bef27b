use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(ToonError::input("x").to_string().contains("input error:"));
    assert!(
        ToonError::encoding("x")
            .to_string()
            .contains("encoding error:")
    );
    assert!(
        ToonError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(ToonError::render("x").to_string().contains("render error:"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ToonError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn image_errors_convert_unchanged() {
    let inner = image::ImageError::Limits(image::error::LimitError::from_kind(
        image::error::LimitErrorKind::DimensionError,
    ));
    let msg = inner.to_string();
    let err: ToonError = inner.into();
    assert!(matches!(err, ToonError::Image(_)));
    assert_eq!(err.to_string(), msg);
}
