use duvi::config::{ConfigFlags, load_config_flags, parse_flag_tokens};
use duvi::tree::SortMode;

#[test]
fn test_config_file_parsing_ignores_comments_and_blank_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".duvirc");
    let content = r"
# comment
--ascii

--sort name-asc

";
    std::fs::write(&path, content).unwrap();

    let flags = load_config_flags(&path).unwrap();
    assert!(flags.ascii);
    assert_eq!(flags.sort, Some(SortMode::NameAsc));
}

#[test]
fn test_cli_flags_override_file_flags() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".duvirc");
    std::fs::write(&path, "--ascii\n--sort name-asc\n").unwrap();

    let file_flags = load_config_flags(&path).unwrap();
    let cli_args = vec![
        "duvi".to_string(),
        "--sort".to_string(),
        "size-asc".to_string(),
        "du.txt".to_string(),
    ];
    let cli_flags = parse_flag_tokens(&cli_args);

    let effective = file_flags.union(&cli_flags);
    assert!(effective.ascii, "file flags should remain enabled");
    assert_eq!(
        effective.sort,
        Some(SortMode::SizeAsc),
        "cli should override sort"
    );
}

#[test]
fn test_parse_flag_tokens_handles_equals_syntax() {
    let args = vec!["duvi".to_string(), "--sort=name-desc".to_string()];
    let flags = parse_flag_tokens(&args);
    assert_eq!(flags.sort, Some(SortMode::NameDesc));
}

#[test]
fn test_unknown_tokens_are_ignored() {
    let args = vec![
        "duvi".to_string(),
        "du.txt".to_string(),
        "--save".to_string(),
    ];
    let flags = parse_flag_tokens(&args);
    assert_eq!(flags, ConfigFlags::default());
}
