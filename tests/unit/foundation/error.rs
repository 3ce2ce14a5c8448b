use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        GridError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(GridError::markup("x").to_string().contains("markup error:"));
    assert!(
        GridError::transform("x")
            .to_string()
            .contains("transform error:")
    );
    assert!(
        GridError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = GridError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn json_errors_map_to_serde() {
    let err: GridError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, GridError::Serde(_)));
}
