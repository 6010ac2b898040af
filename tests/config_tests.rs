use rfpd::config::{parse_allowed_origins, UpdateMode};

#[test]
fn origins_are_split_and_trimmed() {
    let origins = parse_allowed_origins(" http://localhost:3000 , ,https://app.example ").unwrap();
    assert_eq!(origins, vec!["http://localhost:3000", "https://app.example"]);
}

#[test]
fn wildcard_origin_is_refused() {
    let err = parse_allowed_origins("http://localhost:3000,*").unwrap_err();
    assert!(err.contains("RFPD_ALLOWED_ORIGINS"));

    assert!(parse_allowed_origins("*").is_err());
}

#[test]
fn update_mode_parsing() {
    assert_eq!(UpdateMode::parse("strict").unwrap(), UpdateMode::Strict);
    assert_eq!(UpdateMode::parse(" Permissive ").unwrap(), UpdateMode::Permissive);
    assert!(UpdateMode::parse("lenient").unwrap_err().contains("RFPD_UPDATE_MODE"));
}
