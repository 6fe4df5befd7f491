//! Simplified/Traditional script variants of a search token.
//!
//! The stored chronology mixes both scripts and readers type either, so every
//! text term is searched in its original form and in both converted forms.
//! Conversion sits behind [`ScriptConverter`]; the engine owns one converter
//! for its whole lifetime.

use std::collections::{BTreeSet, HashMap};

use crate::script_tables::{char_pairs, traditional_folds, TRADITIONAL_PHRASES};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("script conversion failed: {0}")]
pub struct ConversionError(pub String);

/// Converts text between Simplified and Traditional Chinese.
///
/// Implementations must be pure: the same input always yields the same output.
pub trait ScriptConverter: Send + Sync {
    fn to_traditional(&self, text: &str) -> Result<String, ConversionError>;
    fn to_simplified(&self, text: &str) -> Result<String, ConversionError>;
}

// ---------------------------------------------------------------------------
// Table converter
// ---------------------------------------------------------------------------

/// Converter backed by the static tables in [`crate::script_tables`].
///
/// Phrase overrides are tried first (longest match), then the character table;
/// anything not in either table passes through unchanged. The built-in tables
/// never fail to convert.
#[derive(Debug, Clone)]
pub struct TableConverter {
    to_traditional: HashMap<char, char>,
    to_simplified: HashMap<char, char>,
    traditional_phrases: Vec<(&'static str, &'static str)>,
}

impl TableConverter {
    pub fn new() -> Self {
        let mut to_traditional = HashMap::new();
        let mut to_simplified = HashMap::new();

        for (simplified, traditional) in char_pairs() {
            to_traditional.entry(simplified).or_insert(traditional);
            to_simplified.entry(traditional).or_insert(simplified);
        }
        for (traditional, simplified) in traditional_folds() {
            to_simplified.entry(traditional).or_insert(simplified);
        }

        let mut traditional_phrases = TRADITIONAL_PHRASES.to_vec();
        traditional_phrases.sort_by_key(|(from, _)| std::cmp::Reverse(from.chars().count()));

        Self {
            to_traditional,
            to_simplified,
            traditional_phrases,
        }
    }

    fn map(text: &str, phrases: &[(&str, &str)], chars: &HashMap<char, char>) -> String {
        let mut out = String::with_capacity(text.len());
        let mut rest = text;

        'scan: while let Some(c) = rest.chars().next() {
            for (from, to) in phrases {
                if let Some(tail) = rest.strip_prefix(from) {
                    out.push_str(to);
                    rest = tail;
                    continue 'scan;
                }
            }
            out.push(chars.get(&c).copied().unwrap_or(c));
            rest = &rest[c.len_utf8()..];
        }

        out
    }
}

impl Default for TableConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptConverter for TableConverter {
    fn to_traditional(&self, text: &str) -> Result<String, ConversionError> {
        Ok(Self::map(text, &self.traditional_phrases, &self.to_traditional))
    }

    fn to_simplified(&self, text: &str) -> Result<String, ConversionError> {
        Ok(Self::map(text, &[], &self.to_simplified))
    }
}

// ---------------------------------------------------------------------------
// Variant expansion
// ---------------------------------------------------------------------------

/// Outcome of expanding one token into its script variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariantSet {
    /// The original token plus both conversions, duplicates collapsed.
    Converted(BTreeSet<String>),
    /// Conversion failed; only the original token is searched.
    OriginalOnly(String),
}

impl VariantSet {
    pub fn is_degraded(&self) -> bool {
        matches!(self, VariantSet::OriginalOnly(_))
    }

    /// Terms to search, in a stable order.
    pub fn terms(&self) -> Vec<&str> {
        match self {
            VariantSet::Converted(set) => set.iter().map(String::as_str).collect(),
            VariantSet::OriginalOnly(token) => vec![token.as_str()],
        }
    }
}

/// Expand `token` into itself, its Traditional form and its Simplified form.
///
/// A conversion failure never aborts the caller's query: it is logged and the
/// token is searched as typed.
pub fn expand_variants<C>(converter: &C, token: &str) -> VariantSet
where
    C: ScriptConverter + ?Sized,
{
    let converted = converter
        .to_traditional(token)
        .and_then(|traditional| Ok((traditional, converter.to_simplified(token)?)));

    match converted {
        Ok((traditional, simplified)) => {
            VariantSet::Converted(BTreeSet::from([token.to_string(), traditional, simplified]))
        }
        Err(err) => {
            tracing::warn!(token, error = %err, "script conversion failed; searching original form only");
            VariantSet::OriginalOnly(token.to_string())
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
