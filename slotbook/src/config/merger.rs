//! Configuration merging and precedence handling.

use crate::config::schema::Config;

/// Merges configuration layers according to precedence rules.
///
/// # Examples
///
/// ```
/// use slotbook::config::{Config, ConfigMerger};
///
/// let low = Config { list_window_days: Some(30), ..Default::default() };
/// let high = Config { list_window_days: Some(7), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.list_window_days, Some(7));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge layers into a final config.
    ///
    /// Layers are given from lowest to highest precedence.
    #[must_use]
    pub fn merge<'a>(layers: impl IntoIterator<Item = &'a Config>) -> Config {
        let mut result = Config::default();
        for layer in layers {
            Self::merge_into(&mut result, layer);
        }
        result
    }

    /// Merge `source` into `target`; every field set in `source` wins.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.database_file.is_some() {
            target.database_file.clone_from(&source.database_file);
        }

        if source.maximum_lock_wait_seconds.is_some() {
            target.maximum_lock_wait_seconds = source.maximum_lock_wait_seconds;
        }

        if source.list_window_days.is_some() {
            target.list_window_days = source.list_window_days;
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }

        if source.disable_autoinit.is_some() {
            target.disable_autoinit = source.disable_autoinit;
        }
    }
}
