//! Abbreviation variants synthesized from canonical full names.
//!
//! Every corpus name yields the same five renderings, computed from its
//! normalized tokens:
//!
//! 1. initials (`JOCS`)
//! 2. dictionary abbreviation (`J. Of Comp. Sci.`)
//! 3. the normalized name itself
//! 4. first three letters of each token (`Jou Of Com Sci`)
//! 5. the lead word (`Journal`)

use serde::{Deserialize, Serialize};

use crate::normalize::{normalize_name, tokenize};
use crate::rules::find_abbreviation;

/// Which of the five renderings a variant is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantKind {
    Initials,
    RuleBased,
    Full,
    Trigram,
    LeadWord,
}

impl VariantKind {
    /// All kinds in synthesis order.
    pub const ALL: [VariantKind; 5] = [
        Self::Initials,
        Self::RuleBased,
        Self::Full,
        Self::Trigram,
        Self::LeadWord,
    ];

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Initials => "initials",
            Self::RuleBased => "rule-based",
            Self::Full => "full",
            Self::Trigram => "trigram",
            Self::LeadWord => "lead word",
        }
    }
}

/// The five abbreviation variants of one full name.
///
/// Serializes as an object keyed by variant kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbbreviationVariants {
    pub initials: String,
    pub rule_based: String,
    pub full: String,
    pub trigram: String,
    pub lead_word: String,
}

impl AbbreviationVariants {
    /// Variant of the given kind.
    #[must_use]
    pub fn get(&self, kind: VariantKind) -> &str {
        match kind {
            VariantKind::Initials => &self.initials,
            VariantKind::RuleBased => &self.rule_based,
            VariantKind::Full => &self.full,
            VariantKind::Trigram => &self.trigram,
            VariantKind::LeadWord => &self.lead_word,
        }
    }

    /// Variants in synthesis order.
    #[must_use]
    pub fn as_array(&self) -> [&str; 5] {
        VariantKind::ALL.map(|kind| self.get(kind))
    }

    pub fn iter(&self) -> impl Iterator<Item = (VariantKind, &str)> {
        VariantKind::ALL
            .into_iter()
            .map(move |kind| (kind, self.get(kind)))
    }
}

/// Derives the five variants of `fullname`. Never fails.
pub fn synthesize(fullname: &str) -> AbbreviationVariants {
    let normalized = normalize_name(fullname);
    let tokens = tokenize(&normalized);

    let initials = tokens
        .iter()
        .filter_map(|token| token.chars().next())
        .map(|ch| ch.to_ascii_uppercase())
        .collect();

    let rule_based = tokens
        .iter()
        .map(|token| find_abbreviation(token).unwrap_or(*token))
        .collect::<Vec<_>>()
        .join(" ");

    // Tokens are ASCII, so byte slicing stays on char boundaries.
    let trigram = tokens
        .iter()
        .map(|token| &token[..token.len().min(3)])
        .collect::<Vec<_>>()
        .join(" ");

    let lead_word = tokens.first().map(|token| token.to_string()).unwrap_or_default();

    AbbreviationVariants {
        initials,
        rule_based,
        full: normalized,
        trigram,
        lead_word,
    }
}
