use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        DoorError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(DoorError::asset("x").to_string().contains("asset error:"));
    assert!(DoorError::render("x").to_string().contains("render error:"));
    assert!(
        DoorError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = DoorError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
