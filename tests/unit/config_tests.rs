use std::path::PathBuf;

use janitor::config::Config;
use janitor::test_utils::{TestCase, run_table_tests};

fn fixture_path(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(relative)
}

#[test]
fn config_cf_section_from_fixture() -> Result<(), String> {
    let cases = vec![
        TestCase {
            name: "default",
            input: "tests/fixtures/configs/default.toml",
            expected: ("cf".to_string(), Vec::<String>::new(), None, 1000usize),
        },
        TestCase {
            name: "custom",
            input: "tests/fixtures/configs/custom.toml",
            expected: (
                "/opt/cf/bin/cf".to_string(),
                vec!["-v".to_string()],
                Some("5d1e7b8a-space".to_string()),
                25usize,
            ),
        },
    ];

    run_table_tests(cases, |relative_path| {
        let config = Config::from_file(&fixture_path(relative_path)).expect("load config");
        (
            config.cf.cf_path,
            config.cf.default_flags,
            config.cf.space_guid,
            config.cf.max_pages,
        )
    })
}

#[test]
fn config_output_section_from_fixture() -> Result<(), String> {
    let cases = vec![
        TestCase {
            name: "default",
            input: "tests/fixtures/configs/default.toml",
            expected: ("human".to_string(), false),
        },
        TestCase {
            name: "custom",
            input: "tests/fixtures/configs/custom.toml",
            expected: ("plain".to_string(), true),
        },
    ];

    run_table_tests(cases, |relative_path| {
        let config = Config::from_file(&fixture_path(relative_path)).expect("load config");
        (config.output.format, config.output.show_ignored)
    })
}

#[test]
fn env_overrides_win_over_file() {
    let mut config =
        Config::from_file(&fixture_path("tests/fixtures/configs/custom.toml")).unwrap();
    config
        .apply_env_overrides(|key| match key {
            "JANITOR_SPACE_GUID" => Some("env-space".to_string()),
            "JANITOR_FORMAT" => Some("json".to_string()),
            _ => None,
        })
        .unwrap();
    assert_eq!(config.cf.space_guid.as_deref(), Some("env-space"));
    assert_eq!(config.cf.cf_path, "/opt/cf/bin/cf");
    assert_eq!(config.output.format, "json");
}
