//! Journal abbreviation matching.
//!
//! Corpus names are normalized, expanded into five abbreviation variants and
//! bucketed by first letter. A query abbreviation is cleaned, routed to the
//! bucket of its first letter and resolved to the entry with the lowest sum
//! of edit distances to that entry's variants. [`similarity`] grades matched
//! pairs independently of that decision.

#![deny(unsafe_code)]

pub mod distance;
pub mod engine;
pub mod error;
pub mod index;
pub mod normalize;
pub mod rules;
pub mod similarity;
pub mod synth;

pub use distance::edit_distance;
pub use engine::{InputAbbreviation, JournalMatcher, LEAD_MISMATCH_WEIGHT, aggregate_score};
pub use error::{DistanceError, IndexError, MatchError};
pub use index::{CanonicalEntry, CorpusIndex};
pub use normalize::{MAX_TOKENS, clean_abbreviation, normalize_name, tokenize};
pub use rules::{ABBREVIATION_RULES, find_abbreviation};
pub use similarity::{compare, mixed_similarity};
pub use synth::{AbbreviationVariants, VariantKind, synthesize};
