//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var and cwd manipulation.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;
use typeval_config::TypevalConfig;
use typeval_core::enums::DuplicatePolicy;

#[test]
fn loads_evaluation_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[evaluation]
max_candidates = 3
duplicate_policy = "first_wins"
"#,
        )?;

        let config: TypevalConfig = Figment::from(Serialized::defaults(TypevalConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.evaluation.candidate_limit(), Some(3));
        assert_eq!(config.evaluation.duplicate_policy, DuplicatePolicy::FirstWins);
        assert!(config.report.include_correct);
        Ok(())
    });
}

#[test]
fn loads_report_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r"
[report]
include_correct = false
details = true
",
        )?;

        let config: TypevalConfig = Figment::from(Serialized::defaults(TypevalConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert!(!config.report.include_correct);
        assert!(config.report.details);
        assert_eq!(config.evaluation.candidate_limit(), None);
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up() {
    Jail::expect_with(|jail| {
        std::fs::create_dir(jail.directory().join(".typeval")).expect("create .typeval");
        jail.create_file(
            ".typeval/config.toml",
            r"
[evaluation]
max_candidates = 5
",
        )?;

        let config = TypevalConfig::load(None).expect("config loads");
        assert_eq!(config.evaluation.candidate_limit(), Some(5));
        Ok(())
    });
}

#[test]
fn explicit_file_overrides_project_file() {
    Jail::expect_with(|jail| {
        std::fs::create_dir(jail.directory().join(".typeval")).expect("create .typeval");
        jail.create_file(
            ".typeval/config.toml",
            r"
[evaluation]
max_candidates = 5
",
        )?;
        jail.create_file(
            "override.toml",
            r"
[evaluation]
max_candidates = 1
",
        )?;

        let config =
            TypevalConfig::load(Some(std::path::Path::new("override.toml"))).expect("config loads");
        assert_eq!(config.evaluation.candidate_limit(), Some(1));
        Ok(())
    });
}

#[test]
fn explicit_file_outside_the_project_is_read() {
    Jail::expect_with(|jail| {
        jail.set_env("TYPEVAL_REPORT__DETAILS", "false");

        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("scoring.toml");
        std::fs::write(
            &path,
            r#"
[evaluation]
max_candidates = 2
duplicate_policy = "first_wins"

[report]
details = true
"#,
        )
        .expect("write config");

        let config = TypevalConfig::load(Some(&path)).expect("config loads");
        assert_eq!(config.evaluation.candidate_limit(), Some(2));
        assert_eq!(config.evaluation.duplicate_policy, DuplicatePolicy::FirstWins);
        // env still wins over the explicit file
        assert!(!config.report.details);
        Ok(())
    });
}

#[test]
fn rejects_unknown_duplicate_policy() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[evaluation]
duplicate_policy = "random"
"#,
        )?;

        let result: Result<TypevalConfig, _> =
            Figment::from(Serialized::defaults(TypevalConfig::default()))
                .merge(Toml::file("config.toml"))
                .extract();
        assert!(result.is_err());
        Ok(())
    });
}
