//! Gender-inclusive rewriting of annotated Italian sentences.
//!
//! Masculine nouns that refer to people (*il medico*) are rewritten to
//! a dual form (*la medica/il medico*), unless the sentence already
//! coordinates them with their feminine counterpart. Sentences must be
//! tagged and parsed, see [`graph::DependencyGraph`].

pub mod assemble;

pub mod config;

mod constants;

pub mod coordination;

pub mod detect;

pub mod error;

pub mod graph;

pub mod lexicon;

pub mod report;

pub mod rewrite;

pub mod suggest;

pub mod text;

#[cfg(test)]
pub(crate) mod test_helpers;
