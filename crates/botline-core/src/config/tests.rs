use super::*;

#[test]
fn test_defaults() {
    let cfg = Config::default();
    assert_eq!(cfg.bot.api_url, "https://api.telegram.org");
    assert!(cfg.bot.token.is_empty());
    assert!(!cfg.bot.debug);
    assert_eq!(cfg.polling.limit, 100);
    assert_eq!(cfg.polling.timeout_secs, 30);
    assert!(cfg.polling.allowed_updates.is_empty());
}

#[test]
fn test_parse_full() {
    let toml_str = r#"
        [bot]
        token = "123:abc"
        api_url = "http://localhost:8081"
        debug = true

        [polling]
        limit = 10
        timeout_secs = 50
        allowed_updates = ["message", "callback_query"]
    "#;
    let cfg = parse(toml_str).unwrap();
    assert_eq!(cfg.bot.token, "123:abc");
    assert_eq!(cfg.bot.api_url, "http://localhost:8081");
    assert!(cfg.bot.debug);
    assert_eq!(cfg.polling.limit, 10);
    assert_eq!(cfg.polling.timeout_secs, 50);
    assert_eq!(cfg.polling.allowed_updates, vec!["message", "callback_query"]);
}

#[test]
fn test_parse_partial_uses_defaults() {
    let cfg = parse("[bot]\ntoken = \"t\"\n").unwrap();
    assert_eq!(cfg.bot.token, "t");
    assert_eq!(cfg.bot.api_url, "https://api.telegram.org");
    assert_eq!(cfg.polling.limit, 100);
}

#[test]
fn test_parse_invalid_is_config_error() {
    let err = parse("[bot\ntoken = ").unwrap_err();
    assert!(matches!(err, BotError::Config(_)));
}

#[test]
fn test_load_missing_file_falls_back() {
    let cfg = load("/nonexistent/__botline_test__/config.toml").unwrap();
    assert_eq!(cfg.polling.timeout_secs, 30);
}

#[test]
fn test_load_from_disk() {
    let tmp = std::env::temp_dir().join("__botline_test_config__.toml");
    std::fs::write(&tmp, "[polling]\nlimit = 5\n").unwrap();

    let cfg = load(tmp.to_str().unwrap()).unwrap();
    assert_eq!(cfg.polling.limit, 5);

    let _ = std::fs::remove_file(&tmp);
}
