//! Pattern table mapping lexical patterns to turn signals.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A lexical signal detected in a user utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Signal {
    /// Recommendation or nearest/farthest wording.
    Proximity,
    /// The user asks where they are.
    SelfLocation,
    /// A radius such as `3km` or `1.5KM`.
    DistanceRadius,
    /// "N번 상세" style reference to the previously shown list.
    ListReference,
}

impl Signal {
    /// Whether this signal needs the caller's position before the turn can be answered.
    pub fn requires_location(self) -> bool {
        matches!(
            self,
            Signal::Proximity | Signal::SelfLocation | Signal::DistanceRadius
        )
    }
}

/// Built-in rows. Patterns run against whitespace-free text.
///
/// `ListReference` patterns must capture the index digits in group 1.
const BUILTIN_RULES: &[(Signal, &str)] = &[
    (
        Signal::Proximity,
        "(추천|가까|근처|제일가까|가장가까|먼|제일먼|가장먼)",
    ),
    (Signal::SelfLocation, "(내가어디|내위치|지금어디|현재위치)"),
    (Signal::DistanceRadius, r"(?i)[0-9]+(\.[0-9]+)?km"),
    (Signal::ListReference, "([0-9]+)번(상세|정보|자세|자세히)"),
];

static BUILTIN: Lazy<SignalTable> = Lazy::new(SignalTable::compile_builtin);

/// Removes every whitespace character so "내  위 치" matches "내위치".
pub fn normalize(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

#[derive(Debug, Clone)]
struct SignalRule {
    signal: Signal,
    pattern: Regex,
}

/// An ordered table of `pattern -> signal` rows.
///
/// Matching is data driven: new phrasings are added as rows with
/// [`SignalTable::with_pattern`], the matching functions never change.
#[derive(Debug, Clone)]
pub struct SignalTable {
    rules: Vec<SignalRule>,
}

impl SignalTable {
    /// Returns the shared table compiled from the built-in rows.
    pub fn builtin() -> &'static SignalTable {
        &BUILTIN
    }

    fn compile_builtin() -> Self {
        let rules = BUILTIN_RULES
            .iter()
            .map(|(signal, pattern)| SignalRule {
                signal: *signal,
                // Built-in patterns are constants covered by tests
                pattern: Regex::new(pattern).expect("built-in signal pattern must compile"),
            })
            .collect();
        Self { rules }
    }

    /// Appends a row. The pattern is matched against whitespace-free text.
    pub fn with_pattern(mut self, signal: Signal, pattern: &str) -> Result<Self> {
        self.rules.push(SignalRule {
            signal,
            pattern: Regex::new(pattern)?,
        });
        Ok(self)
    }

    /// Appends one location-bearing row per extra pattern.
    pub fn with_location_patterns<I, S>(self, patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        patterns.into_iter().try_fold(self, |table, pattern| {
            table.with_pattern(Signal::Proximity, pattern.as_ref())
        })
    }

    /// Every distinct signal present in `text`, in table order.
    pub fn signals(&self, text: &str) -> Vec<Signal> {
        let normalized = normalize(text);
        let mut found = Vec::new();
        for rule in &self.rules {
            if !found.contains(&rule.signal) && rule.pattern.is_match(&normalized) {
                found.push(rule.signal);
            }
        }
        found
    }

    /// True when any location-bearing row matches.
    pub fn requires_location(&self, text: &str) -> bool {
        let normalized = normalize(text);
        self.rules
            .iter()
            .filter(|rule| rule.signal.requires_location())
            .any(|rule| rule.pattern.is_match(&normalized))
    }

    /// Index of the "N번 상세" reference, if any.
    ///
    /// The first match wins and only the digit run directly in front of the
    /// keyword is parsed. Digit runs that overflow `usize` saturate to
    /// `usize::MAX`, so they never resolve to a list item.
    pub fn parse_list_reference(&self, text: &str) -> Option<usize> {
        let normalized = normalize(text);
        self.rules
            .iter()
            .filter(|rule| rule.signal == Signal::ListReference)
            .find_map(|rule| rule.pattern.captures(&normalized))
            .and_then(|caps| caps.get(1))
            .map(|digits| digits.as_str().parse::<usize>().unwrap_or(usize::MAX))
    }
}

impl Default for SignalTable {
    fn default() -> Self {
        Self::builtin().clone()
    }
}
