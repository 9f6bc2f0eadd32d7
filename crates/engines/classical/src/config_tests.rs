use super::*;

#[test]
fn empty_document_gives_defaults() {
    let config = SearchConfig::from_toml_str("").unwrap();
    assert_eq!(config, SearchConfig::default());
    assert_eq!(config.depth, 3);
    assert_eq!(config.evaluator, Evaluator::Full);
    assert_eq!(config.draw_policy, DrawPolicy::Evaluate);
}

#[test]
fn reads_every_field() {
    let src = r#"
        depth = 5
        evaluator = "positional"
        draw_policy = "zero"
    "#;
    let config = SearchConfig::from_toml_str(src).unwrap();
    assert_eq!(config.depth, 5);
    assert_eq!(config.evaluator, Evaluator::Positional);
    assert_eq!(config.draw_policy, DrawPolicy::Zero);
}

#[test]
fn rejects_out_of_range_depth() {
    assert!(matches!(
        SearchConfig::from_toml_str("depth = 0"),
        Err(ConfigError::DepthOutOfRange(0))
    ));
    assert!(matches!(
        SearchConfig::from_toml_str("depth = 9"),
        Err(ConfigError::DepthOutOfRange(9))
    ));
}

#[test]
fn rejects_unknown_keys_and_values() {
    assert!(matches!(
        SearchConfig::from_toml_str("quiescence = true"),
        Err(ConfigError::Parse(_))
    ));
    assert!(matches!(
        SearchConfig::from_toml_str("evaluator = \"neural\""),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn set_overrides_known_options() {
    let mut config = SearchConfig::default();
    assert!(config.set("Depth", "2").unwrap());
    assert!(config.set("Evaluator", "material").unwrap());
    assert!(config.set("DrawPolicy", "zero").unwrap());
    assert_eq!(
        config,
        SearchConfig {
            depth: 2,
            evaluator: Evaluator::Material,
            draw_policy: DrawPolicy::Zero,
        }
    );
    assert!(!config.set("Hash", "16").unwrap());
}

#[test]
fn set_keeps_config_on_bad_value() {
    let mut config = SearchConfig::default();
    assert!(matches!(
        config.set("Depth", "12"),
        Err(ConfigError::DepthOutOfRange(12))
    ));
    assert!(matches!(
        config.set("Depth", "deep"),
        Err(ConfigError::InvalidValue { .. })
    ));
    assert!(config.set("Evaluator", "nnue").is_err());
    assert_eq!(config, SearchConfig::default());
}
