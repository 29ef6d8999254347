use std::fmt;
use std::io;

use thiserror::Error;

use crate::graph::{DependencyGraph, Number};

/// Tag layers that the rules read.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TagLayer {
    UPos,
    XPos,
}

impl fmt::Display for TagLayer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TagLayer::UPos => f.write_str("universal part-of-speech tag"),
            TagLayer::XPos => f.write_str("language-specific part-of-speech tag"),
        }
    }
}

/// Errors while rewriting a sentence.
///
/// Linguistic edge cases never result in an error, the rules fall back
/// to a more conservative rewrite instead. These errors signal malformed
/// annotations or an inconsistent lexicon.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum SentenceError {
    /// A token that the rules inspect lacks a tag.
    MissingTag {
        layer: TagLayer,
        token: usize,
        sent: Vec<String>,
    },

    /// An attached token does not have a dependency relation.
    MissingRelation { token: usize, sent: Vec<String> },

    /// A detected candidate is not in the lexicon column it was matched in.
    LookupMiss { form: String, number: Number },
}

impl SentenceError {
    /// Construct `SentenceError::MissingTag` from a dependency graph.
    ///
    /// `node` is the graph node for which the error applies.
    pub fn missing_tag(layer: TagLayer, node: usize, graph: &dyn DependencyGraph) -> Self {
        SentenceError::MissingTag {
            layer,
            token: node - 1,
            sent: graph.forms(),
        }
    }

    /// Construct `SentenceError::MissingRelation` from a dependency graph.
    ///
    /// `node` is the graph node for which the error applies.
    pub fn missing_relation(node: usize, graph: &dyn DependencyGraph) -> Self {
        SentenceError::MissingRelation {
            token: node - 1,
            sent: graph.forms(),
        }
    }

    fn format_bracketed(bracket_idx: usize, tokens: &[String]) -> String {
        let mut tokens = tokens.to_owned();
        tokens.insert(bracket_idx + 1, "]".to_string());
        tokens.insert(bracket_idx, "[".to_string());

        tokens.join(" ")
    }
}

impl fmt::Display for SentenceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use SentenceError::*;

        match self {
            MissingTag { layer, token, sent } => write!(
                f,
                "Token '{}' does not have a {}:\n\n{}\n",
                sent[*token],
                layer,
                Self::format_bracketed(*token, sent),
            ),
            MissingRelation { token, sent } => write!(
                f,
                "Token does not have a dependency relation:\n\n{}\n",
                Self::format_bracketed(*token, sent),
            ),
            LookupMiss { form, number } => write!(
                f,
                "No feminine form for '{}' ({:?}) in the lexicon",
                form, number
            ),
        }
    }
}

/// Lexicon construction errors.
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("masculine form '{masculine}' has conflicting feminine forms '{first}' and '{second}'")]
    ConflictingEntry {
        masculine: String,
        first: String,
        second: String,
    },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    IO(#[from] io::Error),
}

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum InclusivoError {
    #[error(transparent)]
    IoError(#[from] io::Error),

    #[error("Cannot load lexicon '{0}': {1}")]
    LexiconError(String, LexiconError),

    #[error("Cannot relativize path: {0}")]
    RelativizePathError(String),

    #[error(transparent)]
    SentenceError(#[from] SentenceError),

    #[error(transparent)]
    TomlDeserializationError(#[from] toml::de::Error),
}
