use super::*;
use crate::settings::Selector;
use classical_engine::{DrawPolicy, Evaluator};

fn args(list: &[&str]) -> impl Iterator<Item = String> {
    list.iter().map(|s| s.to_string()).collect::<Vec<_>>().into_iter()
}

#[test]
fn config_flag_forms() {
    assert_eq!(config_path(args(&[])).unwrap(), None);
    assert_eq!(
        config_path(args(&["--config", "bot.toml"])).unwrap(),
        Some(PathBuf::from("bot.toml"))
    );
    assert_eq!(
        config_path(args(&["--config=bot.toml"])).unwrap(),
        Some(PathBuf::from("bot.toml"))
    );
    assert!(config_path(args(&["--config"])).is_err());
    assert!(config_path(args(&["--depth", "3"])).is_err());
}

#[test]
fn settings_default_to_full_search() {
    let settings = Settings::from_toml_str("").unwrap();
    assert_eq!(settings.selector, Selector::Search);
    assert_eq!(settings.seed, None);
    assert_eq!(settings.search.depth, 3);
    assert_eq!(settings.search.evaluator, Evaluator::Full);
}

#[test]
fn settings_read_nested_search_table() {
    let src = r#"
        selector = "random"
        seed = 9

        [search]
        depth = 2
        evaluator = "material"
        draw_policy = "zero"
    "#;
    let settings = Settings::from_toml_str(src).unwrap();
    assert_eq!(settings.selector, Selector::Random);
    assert_eq!(settings.seed, Some(9));
    assert_eq!(settings.search.depth, 2);
    assert_eq!(settings.search.evaluator, Evaluator::Material);
    assert_eq!(settings.search.draw_policy, DrawPolicy::Zero);
}

#[test]
fn settings_reject_bad_depth_and_unknown_keys() {
    assert!(Settings::from_toml_str("[search]\ndepth = 20").is_err());
    assert!(Settings::from_toml_str("threads = 4").is_err());
    assert!(Settings::from_toml_str("selector = \"neural\"").is_err());
}

#[test]
fn missing_settings_file_is_an_error() {
    let err = Settings::load(std::path::Path::new("/nonexistent/bot.toml")).unwrap_err();
    assert!(format!("{err:#}").contains("/nonexistent/bot.toml"));
}
