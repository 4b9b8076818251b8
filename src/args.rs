//! Command line tokenizing and classification.
//!
//! A line is split on ASCII whitespace, then classified left to right into
//! positional tokens, presence flags and `--key value` options.
//!
//! Marker rule: a token starting with `--` is only treated as a flag or
//! option key when the line has more than two tokens. `cmd --able` is
//! therefore two positionals, while `cmd a --able` carries the flag `able`.

use std::collections::{HashMap, HashSet};
use std::ops::Index;

use tracing::trace;

const MARKER_PREFIX: &str = "--";

/// Lines with this many tokens or fewer never contain markers.
const MARKER_MIN_TOKENS: usize = 2;

/// C-locale whitespace: ASCII whitespace plus vertical tab. Non-ASCII spaces
/// belong to the token.
fn is_separator(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0b'
}

/// Structured result of parsing one command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandArgs {
    positional: Vec<String>,
    flags: HashSet<String>,
    options: HashMap<String, String>,
}

impl CommandArgs {
    /// Tokenize a raw line and classify its tokens. Never fails.
    pub fn parse(line: &str) -> Self {
        let tokens: Vec<&str> = line
            .split(is_separator)
            .filter(|token| !token.is_empty())
            .collect();
        Self::parse_tokens(&tokens)
    }

    /// Classify an already tokenized line.
    pub fn parse_tokens<S: AsRef<str>>(tokens: &[S]) -> Self {
        let mut args = Self::default();
        let markers_enabled = tokens.len() > MARKER_MIN_TOKENS;

        let mut idx = 0;
        while idx < tokens.len() {
            let token = tokens[idx].as_ref();
            match token.strip_prefix(MARKER_PREFIX) {
                Some(key) if markers_enabled => {
                    let next = tokens.get(idx + 1).map(AsRef::as_ref);
                    match next {
                        Some(value) if !is_lookahead_marker(value) => {
                            trace!(key, value, "option");
                            args.options.insert(key.to_string(), value.to_string());
                            idx += 1;
                        }
                        _ => {
                            trace!(key, "flag");
                            args.flags.insert(key.to_string());
                        }
                    }
                }
                _ => args.positional.push(token.to_string()),
            }
            idx += 1;
        }
        args
    }

    /// The command name (`positional[0]`), if the line had any tokens.
    pub fn name(&self) -> Option<&str> {
        self.positional.first().map(String::as_str)
    }

    /// All positional tokens, command name included.
    pub fn positional(&self) -> &[String] {
        &self.positional
    }

    /// Positional tokens after the command name.
    pub fn arguments(&self) -> &[String] {
        self.positional.get(1..).unwrap_or_default()
    }

    pub fn get(&self, idx: usize) -> Option<&str> {
        self.positional.get(idx).map(String::as_str)
    }

    /// Value of `--key value`, or `default` when the option is absent.
    pub fn get_option<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.options.get(key).map(String::as_str).unwrap_or(default)
    }

    pub fn has_flag(&self, name: &str) -> bool {
        self.flags.contains(name)
    }

    pub fn flags(&self) -> &HashSet<String> {
        &self.flags
    }

    pub fn options(&self) -> &HashMap<String, String> {
        &self.options
    }

    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.flags.is_empty() && self.options.is_empty()
    }
}

/// A following token ends the current marker as a flag only if it is a
/// marker with a non-empty key; a bare `--` is taken as a value.
fn is_lookahead_marker(token: &str) -> bool {
    token.len() > MARKER_PREFIX.len() && token.starts_with(MARKER_PREFIX)
}

impl Index<usize> for CommandArgs {
    type Output = str;

    fn index(&self, idx: usize) -> &str {
        &self.positional[idx]
    }
}

impl From<&str> for CommandArgs {
    fn from(line: &str) -> Self {
        Self::parse(line)
    }
}

impl From<Vec<String>> for CommandArgs {
    fn from(tokens: Vec<String>) -> Self {
        Self::parse_tokens(&tokens)
    }
}
