//! Flat `key=value` configuration files.
//!
//! ## File Format
//!
//! ```text
//! # comment lines and blank lines are skipped
//! name = tom
//! age=25
//! man = on
//! ```
//!
//! - One `key=value` pair per line; key and value are trimmed.
//! - Every non-blank, non-`#` line must contain exactly one `=`; anything else
//!   fails the whole load with [`ConfigError::Parse`].
//! - No quoting, escaping or sections. A later duplicate key replaces the
//!   earlier one.
//!
//! ## Lookups
//!
//! Typed getters take a default. When a key is missing from the loaded
//! options, [`Config::get_string`] falls back to a non-empty environment
//! variable of the same name before returning the default, and every other
//! getter goes through it.
//!
//! ## Example Usage
//!
//! ```
//! use leafkit::config::Config;
//!
//! let mut conf: Config = "name = tom\nage = 25\nman = ON\n".parse().unwrap();
//! assert_eq!(conf.get_string("name", ""), "tom");
//! assert_eq!(conf.get_int("age", -1), 25);
//! assert!(conf.get_bool("man", false));
//!
//! let mut defaults = Config::new();
//! defaults.set_option("name", "li");
//! defaults.set_option("city", "Tokyo");
//! conf.merge(&defaults);
//! assert_eq!(conf.get_string("name", ""), "tom");
//! assert_eq!(conf.get_string("city", ""), "Tokyo");
//! ```
//!
//! ## Thread Safety
//!
//! `Config` is a plain value; share it behind a lock if it must be mutated
//! from several threads.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use rustc_hash::FxHashMap;

use crate::error::ConfigError;

const COMMENT_PREFIX: char = '#';
const SEPARATOR: char = '=';

/// In-memory set of string options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    options: FxHashMap<String, String>,
}

impl Config {
    /// Creates a config with no options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads options from the file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|err| ConfigError::io(path, err))?;
        let config = Self::read_lines(BufReader::new(file), path)?;
        tracing::debug!(
            path = %path.display(),
            options = config.len(),
            "loaded config"
        );
        Ok(config)
    }

    /// Reads options from any buffered reader.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, ConfigError> {
        Self::read_lines(reader, Path::new("<reader>"))
    }

    fn read_lines<R: BufRead>(reader: R, path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line.map_err(|err| ConfigError::io(path, err))?;
            config.parse_line(idx + 1, &line)?;
        }
        Ok(config)
    }

    fn parse_line(&mut self, line_number: usize, raw: &str) -> Result<(), ConfigError> {
        let line = raw.trim();
        if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
            return Ok(());
        }
        let mut parts = line.split(SEPARATOR);
        match (parts.next(), parts.next(), parts.next()) {
            (Some(key), Some(value), None) => {
                self.options
                    .insert(key.trim().to_owned(), value.trim().to_owned());
                Ok(())
            },
            _ => {
                tracing::warn!(line_number, line, "malformed config line");
                Err(ConfigError::parse(line_number, line))
            },
        }
    }

    /// Returns `true` if the config holds no options.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Returns the number of options.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Removes all options.
    pub fn clear(&mut self) {
        self.options.clear();
    }

    /// Removes a single option; returns its previous value.
    pub fn clear_option(&mut self, key: &str) -> Option<String> {
        self.options.remove(key)
    }

    /// Sets an option, replacing any previous value.
    pub fn set_option(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.options.insert(key.into(), value.into());
    }

    /// Returns a snapshot of the option keys, in no particular order.
    pub fn keys(&self) -> Vec<String> {
        self.options.keys().cloned().collect()
    }

    /// Iterates over `(key, value)` pairs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.options
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the raw value for `key` if it was loaded or set.
    ///
    /// Unlike the typed getters, this does not consult the environment.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.options.get(key).map(String::as_str)
    }

    /// Returns the string value for `key`.
    ///
    /// Missing keys fall back to a non-empty environment variable named `key`,
    /// then to `default`.
    pub fn get_string(&self, key: &str, default: &str) -> String {
        if let Some(value) = self.options.get(key) {
            return value.clone();
        }
        match env_lookup(key) {
            Some(value) => value,
            None => default.to_owned(),
        }
    }

    /// Returns the boolean value for `key`.
    ///
    /// `y`, `on` and `1` are true; `n`, `off` and `0` are false (ignoring
    /// case). Anything else yields `default`.
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.get_string(key, "").to_ascii_lowercase().as_str() {
            "y" | "on" | "1" => true,
            "n" | "off" | "0" => false,
            _ => default,
        }
    }

    /// Returns the integer value for `key`, or `default` if it does not parse.
    pub fn get_int(&self, key: &str, default: i64) -> i64 {
        self.get_string(key, "").parse().unwrap_or(default)
    }

    /// Returns the float value for `key`, or `default` if it does not parse.
    pub fn get_float(&self, key: &str, default: f64) -> f64 {
        self.get_string(key, "").parse().unwrap_or(default)
    }

    /// Copies options from `other` whose keys are missing here.
    ///
    /// Existing keys always keep their current value.
    pub fn merge(&mut self, other: &Config) {
        for (key, value) in &other.options {
            if !self.options.contains_key(key) {
                self.options.insert(key.clone(), value.clone());
            }
        }
    }
}

impl FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut config = Self::new();
        for (idx, line) in s.lines().enumerate() {
            config.parse_line(idx + 1, line)?;
        }
        Ok(config)
    }
}

impl<K, V> FromIterator<(K, V)> for Config
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut config = Self::new();
        for (key, value) in iter {
            config.set_option(key, value);
        }
        config
    }
}

// Empty names and names holding `=` or NUL are never valid variables.
fn env_lookup(key: &str) -> Option<String> {
    if key.is_empty() || key.contains(['=', '\0']) {
        return None;
    }
    std::env::var(key).ok().filter(|value| !value.is_empty())
}
