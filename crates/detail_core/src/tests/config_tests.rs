use super::*;

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let pairs: Vec<(String, String)> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| {
        pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    }
}

#[test]
fn defaults_match_the_stock_form() {
    let settings = Settings::default();
    assert_eq!(settings.parent_link.target, "/home");
    assert_eq!(settings.parent_link.label, "Directory");
    assert_eq!(settings.form_rules, FormRules::default());
    assert_eq!(settings.data_path, PathBuf::from("data/directory.json"));
}

#[test]
fn file_values_override_defaults() {
    let mut settings = Settings::default();
    apply_file(
        &mut settings,
        r#"
data_path = "fixtures/sites.json"
parent_link = "/directory"
author_max_len = 20
require_body = true
"#,
    )
    .expect("parse");

    assert_eq!(settings.data_path, PathBuf::from("fixtures/sites.json"));
    assert_eq!(settings.parent_link.target, "/directory");
    assert_eq!(settings.form_rules.author_max_len, 20);
    assert!(settings.form_rules.require_body);
}

#[test]
fn malformed_file_is_an_error() {
    let mut settings = Settings::default();
    assert!(apply_file(&mut settings, "data_path = ").is_err());
    assert_eq!(settings, Settings::default());
}

#[test]
fn env_overrides_file() {
    let mut settings = Settings::default();
    apply_file(&mut settings, "parent_label = \"From file\"").expect("parse");
    apply_env(
        &mut settings,
        env_from(&[
            ("APP__PARENT_LABEL", "From env"),
            ("APP__AUTHOR_MIN_LEN", "3"),
            ("APP__REQUIRE_BODY", "yes"),
        ]),
    );
    assert_eq!(settings.parent_link.label, "From env");
    assert_eq!(settings.form_rules.author_min_len, 3);
    assert!(settings.form_rules.require_body);
}

#[test]
fn invalid_overrides_are_ignored() {
    let mut settings = Settings::default();
    apply_env(
        &mut settings,
        env_from(&[
            ("APP__AUTHOR_MIN_LEN", "two"),
            ("APP__REQUIRE_BODY", "maybe"),
        ]),
    );
    assert_eq!(settings.form_rules, FormRules::default());
}

#[test]
fn inverted_author_bounds_fall_back_to_defaults() {
    let mut settings = Settings::default();
    apply_env(
        &mut settings,
        env_from(&[("APP__AUTHOR_MIN_LEN", "10"), ("APP__AUTHOR_MAX_LEN", "4")]),
    );
    assert_eq!(settings.form_rules.author_min_len, 2);
    assert_eq!(settings.form_rules.author_max_len, 15);
}
