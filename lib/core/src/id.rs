//! Trainee identifier normalization
//!
//! Trainee ids arrive in several surface forms (`Trainee-7`, `متدرب-007`,
//! `7`, Arabic-Indic or other Unicode digits). Every lookup is keyed on the canonical form
//! `متدرب-NNN`, with the number zero-padded to at least three digits.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use unicode_general_category::{get_general_category, GeneralCategory};

/// Prefix of every canonical trainee id
pub const TRAINEE_PREFIX: &str = "متدرب";

/// Prefixes stripped before digit extraction (ASCII case-insensitive)
const KNOWN_PREFIXES: &[&str] = &["trainee-", "متدرب-", "متدرّب-"];

/// Normalize a raw trainee id into its canonical form.
///
/// `None` is treated as the empty string. Fails with
/// [`Error::InvalidIdentifier`] when no digit survives. The digit run is
/// kept as text, so ids of any length are accepted.
pub fn normalize_trainee_id(raw: Option<&str>) -> Result<String> {
    let raw = raw.unwrap_or_default();
    let rest = strip_known_prefix(raw.trim());

    let digits: String = rest.chars().filter_map(decimal_digit).collect();
    if digits.is_empty() {
        return Err(Error::InvalidIdentifier(raw.to_string()));
    }

    let number = match digits.trim_start_matches('0') {
        "" => "0",
        significant => significant,
    };
    Ok(format!("{TRAINEE_PREFIX}-{number:0>3}"))
}

fn strip_known_prefix(s: &str) -> &str {
    for prefix in KNOWN_PREFIXES {
        // `get` returns None off a char boundary, so multi-byte input is safe
        if let Some(head) = s.get(..prefix.len()) {
            if head.eq_ignore_ascii_case(prefix) {
                return &s[prefix.len()..];
            }
        }
    }
    s
}

/// Any Unicode decimal digit (`Nd`), mapped to its ASCII counterpart
fn decimal_digit(c: char) -> Option<char> {
    if c.is_ascii_digit() {
        return Some(c);
    }
    if !is_decimal(c) {
        return None;
    }

    // Nd characters come in contiguous runs of ten starting at zero
    let mut zero = c as u32;
    while zero > 0 && char::from_u32(zero - 1).is_some_and(is_decimal) {
        zero -= 1;
    }
    char::from_digit((c as u32 - zero) % 10, 10)
}

fn is_decimal(c: char) -> bool {
    matches!(get_general_category(c), GeneralCategory::DecimalNumber)
}

/// A trainee id in canonical form.
///
/// Deserializing goes through [`normalize_trainee_id`], so every table that
/// references trainees is keyed on the same string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TraineeId(String);

impl TraineeId {
    pub fn parse(raw: &str) -> Result<Self> {
        normalize_trainee_id(Some(raw)).map(TraineeId)
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Canonical id for a sequence number
    #[must_use]
    pub fn from_number(n: u64) -> Self {
        TraineeId(format!("{TRAINEE_PREFIX}-{n:03}"))
    }
}

impl std::fmt::Display for TraineeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for TraineeId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        TraineeId::parse(s)
    }
}

impl TryFrom<String> for TraineeId {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        TraineeId::parse(&s)
    }
}

impl From<TraineeId> for String {
    fn from(id: TraineeId) -> Self {
        id.0
    }
}

impl AsRef<str> for TraineeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
