use std::{
    collections::{BTreeMap, HashMap},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::error::GeneratorError;

/// Divisor to label mapping, always iterated in ascending divisor order.
///
/// Only positive divisors can be stored, so a sequence built from this
/// mapping never divides by zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<i64, String>", into = "BTreeMap<i64, String>")]
pub struct Replacements {
    entries: BTreeMap<u64, String>,
}

impl Replacements {
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps `divisor` to `label`, returning the label it replaced.
    pub fn insert(
        &mut self,
        divisor: i64,
        label: impl Into<String>,
    ) -> Result<Option<String>, GeneratorError> {
        let divisor = positive_divisor(divisor)?;
        Ok(self.entries.insert(divisor, label.into()))
    }

    /// Builds a mapping where every divisor must appear exactly once.
    pub fn try_from_pairs<I, L>(pairs: I) -> Result<Self, GeneratorError>
    where
        I: IntoIterator<Item = (i64, L)>,
        L: Into<String>,
    {
        let mut replacements = Self::new();
        for (divisor, label) in pairs {
            if replacements.insert(divisor, label)?.is_some() {
                return Err(GeneratorError::DuplicateDivisor { divisor });
            }
        }
        Ok(replacements)
    }

    pub fn get(&self, divisor: u64) -> Option<&str> {
        self.entries.get(&divisor).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u64, &str)> + '_ {
        self.entries
            .iter()
            .map(|(divisor, label)| (*divisor, label.as_str()))
    }

    /// Extends the mapping with parsed rules; later rules win on the same divisor.
    pub fn apply_rules<'a>(&mut self, rules: impl IntoIterator<Item = &'a ReplacementRule>) {
        for rule in rules {
            self.entries.insert(rule.divisor(), rule.label().to_string());
        }
    }

    pub(crate) fn to_sorted_entries(&self) -> Vec<(u64, String)> {
        self.entries
            .iter()
            .map(|(divisor, label)| (*divisor, label.clone()))
            .collect()
    }
}

impl TryFrom<BTreeMap<i64, String>> for Replacements {
    type Error = GeneratorError;

    fn try_from(value: BTreeMap<i64, String>) -> Result<Self, Self::Error> {
        Self::try_from_pairs(value)
    }
}

impl TryFrom<HashMap<i64, String>> for Replacements {
    type Error = GeneratorError;

    fn try_from(value: HashMap<i64, String>) -> Result<Self, Self::Error> {
        Self::try_from_pairs(value)
    }
}

impl From<Replacements> for BTreeMap<i64, String> {
    fn from(value: Replacements) -> Self {
        value
            .entries
            .into_iter()
            .map(|(divisor, label)| (divisor as i64, label))
            .collect()
    }
}

/// A single `DIVISOR=LABEL` rule as written on the command line.
///
/// The divisor is always in `1..=i64::MAX`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacementRule {
    divisor: u64,
    label: String,
}

impl ReplacementRule {
    pub fn new(divisor: i64, label: impl Into<String>) -> Result<Self, GeneratorError> {
        Ok(Self {
            divisor: positive_divisor(divisor)?,
            label: label.into(),
        })
    }

    pub fn divisor(&self) -> u64 {
        self.divisor
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl FromStr for ReplacementRule {
    type Err = GeneratorError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let Some((divisor, label)) = raw.split_once('=') else {
            return Err(GeneratorError::invalid_rule(raw, "expected DIVISOR=LABEL"));
        };

        let divisor = divisor.trim().parse::<i64>().map_err(|error| {
            tracing::trace!(rule = raw, %error, "rejected replacement rule");
            GeneratorError::invalid_rule(raw, format!("divisor is not an integer: {error}"))
        })?;

        Self::new(divisor, label)
    }
}

fn positive_divisor(divisor: i64) -> Result<u64, GeneratorError> {
    if divisor <= 0 {
        tracing::trace!(divisor, "rejected non-positive divisor");
        return Err(GeneratorError::NonPositiveDivisor { divisor });
    }
    Ok(divisor as u64)
}
