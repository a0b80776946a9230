/*
 *
 *  *
 *  *      Copyright (c) 2018-2025, SnackCloud All rights reserved.
 *  *
 *  *   Redistribution and use in source and binary forms, with or without
 *  *   modification, are permitted provided that the following conditions are met:
 *  *
 *  *   Redistributions of source code must retain the above copyright notice,
 *  *   this list of conditions and the following disclaimer.
 *  *   Redistributions in binary form must reproduce the above copyright
 *  *   notice, this list of conditions and the following disclaimer in the
 *  *   documentation and/or other materials provided with the distribution.
 *  *   Neither the name of the www.snackcloud.cn developer nor the names of its
 *  *   contributors may be used to endorse or promote products derived from
 *  *   this software without specific prior written permission.
 *  *   Author: SnackCloud
 *  *
 *
 */
use std::time::Duration;

use query_hook_core::{parse_precision, LogLevel, QueryHookError};
use serde::{Deserialize, Serialize};

/// Default name of the error field when errors are logged as fields.
pub const DEFAULT_ERROR_FIELD: &str = "error";

/// Where the query duration is written, if anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationMode {
    #[default]
    Off,
    /// `duration: <d> <query>`
    Message,
    /// A `duration` field next to the message
    Field,
}

/// Where a query error is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// `<query> error: <err>`
    #[default]
    Message,
    /// A field named after `QueryHookConfig::error_field_name`
    Field,
}

/// Hook configuration.
///
/// Values are never validated: a zero precision, for instance, simply turns
/// rounding off.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryHookConfig {
    pub enabled: bool,
    /// Log successful queries too (by default, only failed queries are logged)
    pub verbose: bool,
    pub duration: DurationMode,
    pub precision: Duration,
    pub error_mode: ErrorMode,
    pub error_field_name: String,
    pub query_level: LogLevel,
    pub error_level: LogLevel,
}

impl Default for QueryHookConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            verbose: false,
            duration: DurationMode::Off,
            precision: Duration::from_millis(1),
            error_mode: ErrorMode::Message,
            error_field_name: DEFAULT_ERROR_FIELD.to_string(),
            query_level: LogLevel::Debug,
            error_level: LogLevel::Error,
        }
    }
}

/// A named configuration option, applied on top of the defaults.
#[derive(Debug, Clone, PartialEq)]
pub enum HookOption {
    /// Enables/disables the hook
    Enabled(bool),
    /// Log all queries, not only failed ones
    Verbose(bool),
    /// Log the duration in the message; keeps field mode if already chosen
    Duration,
    /// Log the duration as a field
    DurationAsField,
    /// Rounding granularity of the logged duration
    DurationPrecision(Duration),
    /// Log the error as a field with the given name
    ErrorAsField(String),
    /// Levels for normal and failed queries
    Levels(LogLevel, LogLevel),
}

impl HookOption {
    pub fn apply(&self, config: &mut QueryHookConfig) {
        match self {
            HookOption::Enabled(on) => config.enabled = *on,
            HookOption::Verbose(on) => config.verbose = *on,
            HookOption::Duration => {
                if config.duration == DurationMode::Off {
                    config.duration = DurationMode::Message;
                }
            }
            HookOption::DurationAsField => config.duration = DurationMode::Field,
            HookOption::DurationPrecision(precision) => config.precision = *precision,
            HookOption::ErrorAsField(field) => {
                config.error_mode = ErrorMode::Field;
                config.error_field_name = field.clone();
            }
            HookOption::Levels(query_level, error_level) => {
                config.query_level = *query_level;
                config.error_level = *error_level;
            }
        }
    }
}

impl QueryHookConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults, then every option in order. Later options win.
    pub fn from_options<I>(options: I) -> Self
    where
        I: IntoIterator<Item = HookOption>,
    {
        let mut config = Self::default();
        config.apply_all(options);
        config
    }

    pub fn apply_all<I>(&mut self, options: I)
    where
        I: IntoIterator<Item = HookOption>,
    {
        for option in options {
            option.apply(self);
        }
    }

    pub fn from_settings(settings: &QueryHookSettings) -> Result<Self, QueryHookError> {
        Ok(Self::from_options(settings.to_options()?))
    }

    fn with(mut self, option: HookOption) -> Self {
        option.apply(&mut self);
        self
    }

    pub fn with_enabled(self, on: bool) -> Self {
        self.with(HookOption::Enabled(on))
    }

    pub fn with_verbose(self, on: bool) -> Self {
        self.with(HookOption::Verbose(on))
    }

    pub fn with_duration(self) -> Self {
        self.with(HookOption::Duration)
    }

    pub fn with_duration_as_field(self) -> Self {
        self.with(HookOption::DurationAsField)
    }

    /// e.g. passing `Duration::from_millis(1)` logs the duration in whole ms.
    pub fn with_duration_precision(self, precision: Duration) -> Self {
        self.with(HookOption::DurationPrecision(precision))
    }

    pub fn with_error_as_field<T: Into<String>>(self, field: T) -> Self {
        self.with(HookOption::ErrorAsField(field.into()))
    }

    pub fn with_levels(self, query_level: LogLevel, error_level: LogLevel) -> Self {
        self.with(HookOption::Levels(query_level, error_level))
    }
}

/// Serialized form of the hook configuration, e.g. a section of an
/// application config file. Every key is optional.
///
/// ```json
/// {
///     "verbose": true,
///     "duration": "field",
///     "duration_precision": "10us",
///     "error_field": "err",
///     "query_level": "info",
///     "error_level": "warn"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QueryHookSettings {
    pub enabled: Option<bool>,
    pub verbose: Option<bool>,
    pub duration: Option<DurationMode>,
    pub duration_precision: Option<String>,
    pub error_field: Option<String>,
    pub query_level: Option<LogLevel>,
    pub error_level: Option<LogLevel>,
}

impl QueryHookSettings {
    pub fn from_json(json: &str) -> Result<Self, QueryHookError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The equivalent option list. A level missing from a half-specified
    /// pair falls back to its default.
    pub fn to_options(&self) -> Result<Vec<HookOption>, QueryHookError> {
        let mut options = Vec::new();
        if let Some(on) = self.enabled {
            options.push(HookOption::Enabled(on));
        }
        if let Some(on) = self.verbose {
            options.push(HookOption::Verbose(on));
        }
        match self.duration {
            Some(DurationMode::Message) => options.push(HookOption::Duration),
            Some(DurationMode::Field) => options.push(HookOption::DurationAsField),
            Some(DurationMode::Off) | None => {}
        }
        if let Some(precision) = &self.duration_precision {
            options.push(HookOption::DurationPrecision(parse_precision(precision)?));
        }
        if let Some(field) = &self.error_field {
            options.push(HookOption::ErrorAsField(field.clone()));
        }
        if self.query_level.is_some() || self.error_level.is_some() {
            let defaults = QueryHookConfig::default();
            options.push(HookOption::Levels(
                self.query_level.unwrap_or(defaults.query_level),
                self.error_level.unwrap_or(defaults.error_level),
            ));
        }
        Ok(options)
    }
}
