//! Property-based tests for configuration system.

use super::merger::ConfigMerger;
use super::schema::{Config, OutputFormat, MAX_LIST_WINDOW_DAYS};
use super::validator::ConfigValidator;
use proptest::prelude::*;

fn output_format_strategy() -> impl Strategy<Value = OutputFormat> {
    prop_oneof![
        Just(OutputFormat::Table),
        Just(OutputFormat::Json),
        Just(OutputFormat::Csv),
        Just(OutputFormat::Tsv),
    ]
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of("[a-z]{1,12}\\.db"),
        prop::option::of(1u64..=600),
        prop::option::of(1u32..=MAX_LIST_WINDOW_DAYS),
        prop::option::of(output_format_strategy()),
        prop::option::of(any::<bool>()),
    )
        .prop_map(
            |(database_file, maximum_lock_wait_seconds, list_window_days, output_format, disable_autoinit)| Config {
                database_file,
                maximum_lock_wait_seconds,
                list_window_days,
                output_format,
                disable_autoinit,
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        .. ProptestConfig::default()
    })]

    // Every field set in the higher layer wins; unset fields fall through
    #[test]
    fn config_merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut result = low.clone();
        ConfigMerger::merge_into(&mut result, &high);

        prop_assert_eq!(
            result.database_file,
            high.database_file.or(low.database_file)
        );
        prop_assert_eq!(
            result.maximum_lock_wait_seconds,
            high.maximum_lock_wait_seconds.or(low.maximum_lock_wait_seconds)
        );
        prop_assert_eq!(
            result.list_window_days,
            high.list_window_days.or(low.list_window_days)
        );
        prop_assert_eq!(result.output_format, high.output_format.or(low.output_format));
        prop_assert_eq!(result.disable_autoinit, high.disable_autoinit.or(low.disable_autoinit));
    }

    // Merging a config into itself changes nothing
    #[test]
    fn config_merge_idempotent(config in config_strategy()) {
        let mut result = config.clone();
        ConfigMerger::merge_into(&mut result, &config);
        prop_assert_eq!(result, config);
    }

    // Generated configs survive a YAML round trip and validate
    #[test]
    fn config_yaml_roundtrip(config in config_strategy()) {
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        prop_assert!(ConfigValidator::validate(&parsed).is_ok());
        prop_assert_eq!(parsed, config);
    }
}
