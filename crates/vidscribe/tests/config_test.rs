use std::path::PathBuf;
use vidscribe::{NoMatchPolicy, TemplateErrorKind, VidscribeConfig, VidscribeError, VidscribeErrorKind};

fn scratch_file(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("vidscribe-config-test-{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("temp dir");
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("write config");
    path
}

fn template_kind(err: &VidscribeError) -> TemplateErrorKind {
    match err.kind() {
        VidscribeErrorKind::Template(e) => e.kind.clone(),
        other => panic!("expected template error, got {}", other),
    }
}

#[test]
fn test_explicit_file_overrides_defaults() {
    let path = scratch_file(
        "override.toml",
        r#"
[completion]
model = "davinci-002"
timeout_secs = 30

[research]
language = "de"
no_match = "error"

[logging]
json = true
"#,
    );

    let config = VidscribeConfig::load(Some(&path)).expect("load");

    assert_eq!(config.completion.model, "davinci-002");
    assert_eq!(config.completion.timeout_secs, Some(30));
    // Untouched keys keep their bundled values.
    assert_eq!(config.completion.temperature, 0.9);
    assert_eq!(config.research.language, "de");
    assert_eq!(config.research.top_k_results, 3);
    assert_eq!(config.research.no_match, NoMatchPolicy::Error);
    assert!(config.logging.json);
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let path = std::env::temp_dir().join("vidscribe-definitely-missing.toml");

    let err = VidscribeConfig::load(Some(&path)).expect_err("explicit file must exist");

    assert!(matches!(err.kind(), VidscribeErrorKind::Config(_)));
}

#[test]
fn test_prompt_override_is_used() {
    let config = VidscribeConfig::from_toml_str(
        r#"
[prompts]
title = "Give me one catchy title about {topic}"
"#,
    )
    .expect("valid override");

    let template = config.prompts.title_template().expect("title");
    assert_eq!(
        template.render([("topic", "owls")]).expect("render"),
        "Give me one catchy title about owls"
    );
}

#[test]
fn test_prompt_override_with_wrong_variables_fails_at_load() {
    let err = VidscribeConfig::from_toml_str(
        r#"
[prompts]
script = "A script for {title}"
"#,
    )
    .expect_err("script prompt must use the research");

    assert_eq!(
        template_kind(&err),
        TemplateErrorKind::Mismatch {
            missing: vec![],
            unexpected: vec!["wikipedia_research".to_string()],
        }
    );
}

#[test]
fn test_malformed_prompt_override_fails_at_load() {
    let err = VidscribeConfig::from_toml_str(
        r#"
[prompts]
title = "About {topic"
"#,
    )
    .expect_err("unbalanced brace");

    assert!(matches!(template_kind(&err), TemplateErrorKind::UnbalancedBrace(_)));
}

#[test]
fn test_unknown_no_match_policy_is_a_config_error() {
    let err = VidscribeConfig::from_toml_str(
        r#"
[research]
no_match = "shrug"
"#,
    )
    .expect_err("bad policy");

    assert!(matches!(err.kind(), VidscribeErrorKind::Config(_)));
}
