use figment::Jail;
use pretty_assertions::assert_eq;
use typeval_config::TypevalConfig;
use typeval_core::enums::DuplicatePolicy;

#[test]
fn env_sets_nested_values() {
    Jail::expect_with(|jail| {
        jail.set_env("TYPEVAL_EVALUATION__MAX_CANDIDATES", "10");
        jail.set_env("TYPEVAL_EVALUATION__DUPLICATE_POLICY", "first_wins");
        jail.set_env("TYPEVAL_REPORT__DETAILS", "true");

        let config = TypevalConfig::load(None).expect("config loads");
        assert_eq!(config.evaluation.candidate_limit(), Some(10));
        assert_eq!(config.evaluation.duplicate_policy, DuplicatePolicy::FirstWins);
        assert!(config.report.details);
        Ok(())
    });
}

#[test]
fn env_beats_toml_files() {
    Jail::expect_with(|jail| {
        std::fs::create_dir(jail.directory().join(".typeval")).expect("create .typeval");
        jail.create_file(
            ".typeval/config.toml",
            r"
[report]
include_correct = true
",
        )?;
        jail.set_env("TYPEVAL_REPORT__INCLUDE_CORRECT", "false");

        let config = TypevalConfig::load(None).expect("config loads");
        assert!(!config.report.include_correct);
        Ok(())
    });
}
