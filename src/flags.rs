//! Flag parsing for command arguments.
//!
//! Every command receives the raw tail of the argument vector. [`parse`]
//! splits it into a positional fallback and a map of flag tokens. Single-dash
//! and double-dash tokens are the same kind of thing here; commands resolve
//! aliases such as `--name`/`-n` themselves.

use std::collections::HashMap;
use std::fmt;

use crate::error::{Error, Result};

/// Value recorded for a flag token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagValue {
    /// The flag was followed by a non-flag token.
    Value(String),
    /// The flag appeared on its own.
    Present,
}

impl fmt::Display for FlagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlagValue::Value(value) => f.write_str(value),
            FlagValue::Present => f.write_str("true"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    value: FlagValue,
    /// Index of the flag token in the argument list.
    position: usize,
}

/// Parsed flags plus the positional fallback.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flags {
    positional: Option<String>,
    entries: HashMap<String, Entry>,
}

fn is_flag(token: &str) -> bool {
    token.starts_with('-')
}

/// Parse an argument list.
///
/// - The positional value is the first token that does not start with `-`.
/// - A flag takes the following token as its value unless that token is
///   itself a flag; otherwise it is recorded as [`FlagValue::Present`].
/// - A repeated flag keeps its last occurrence.
pub fn parse<S: AsRef<str>>(args: &[S]) -> Flags {
    let positional = args
        .iter()
        .map(AsRef::as_ref)
        .find(|token| !is_flag(token))
        .map(str::to_string);

    let mut entries = HashMap::new();
    let mut i = 0;
    while i < args.len() {
        let token = args[i].as_ref();
        if is_flag(token) {
            let value = match args.get(i + 1).map(AsRef::as_ref) {
                Some(next) if !is_flag(next) => {
                    i += 1;
                    FlagValue::Value(next.to_string())
                }
                _ => FlagValue::Present,
            };
            entries.insert(
                token.to_string(),
                Entry {
                    value,
                    position: i,
                },
            );
        }
        i += 1;
    }

    Flags {
        positional,
        entries,
    }
}

impl Flags {
    /// First non-flag token, used as a name fallback.
    pub fn positional(&self) -> Option<&str> {
        self.positional.as_deref()
    }

    /// The raw entry for one exact token.
    pub fn get(&self, token: &str) -> Option<&FlagValue> {
        self.entries.get(token).map(|entry| &entry.value)
    }

    /// Whether any of the aliases appeared, with or without a value.
    pub fn has(&self, aliases: &[&str]) -> bool {
        aliases.iter().any(|alias| self.entries.contains_key(*alias))
    }

    /// Latest occurrence across an alias group, as recorded.
    fn latest(&self, aliases: &[&str]) -> Option<&FlagValue> {
        aliases
            .iter()
            .filter_map(|alias| self.entries.get(*alias))
            .max_by_key(|entry| entry.position)
            .map(|entry| &entry.value)
    }

    /// String value of the latest occurrence across an alias group.
    ///
    /// A flag given without a value yields `"true"`, the same way a consumer
    /// reading the raw map would see it.
    pub fn value(&self, aliases: &[&str]) -> Option<String> {
        self.latest(aliases).map(ToString::to_string)
    }

    /// Like [`Flags::value`] but rejects a flag that appeared without a value.
    ///
    /// Returns `Ok(None)` when none of the aliases appeared.
    pub fn required_value(&self, aliases: &[&str], what: &str) -> Result<Option<String>> {
        match self.latest(aliases) {
            None => Ok(None),
            Some(FlagValue::Value(value)) => Ok(Some(value.clone())),
            Some(FlagValue::Present) => Err(Error::UserInput {
                message: format!("{} needs a value", aliases[0]),
                hint: Some(format!("Pass {} after the flag, e.g. {} <{}>", what, aliases[0], what)),
            }),
        }
    }

    /// Number of distinct flag tokens.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no flags were given.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
