//! Detection of masculine nouns that are in the lexicon.

use crate::constants::is_noun;
use crate::error::{SentenceError, TagLayer};
use crate::graph::{DependencyGraph, Number};
use crate::lexicon::Lexicon;

/// A noun that may need an inclusive form.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Candidate {
    node: usize,
    form: String,
    numbers: Vec<Number>,
}

impl Candidate {
    pub fn new(node: usize, form: impl Into<String>, numbers: Vec<Number>) -> Self {
        Candidate {
            node,
            form: form.into(),
            numbers,
        }
    }

    /// The graph node of the noun.
    pub fn node(&self) -> usize {
        self.node
    }

    /// The 0-based position of the noun in the sentence.
    pub fn position(&self) -> usize {
        self.node - 1
    }

    /// The lowercased form of the noun.
    pub fn form(&self) -> &str {
        &self.form
    }

    /// The lexicon columns that the form was matched in.
    pub fn numbers(&self) -> &[Number] {
        &self.numbers
    }

    /// Does the form occur as both a singular and a plural masculine form?
    pub fn is_ambiguous(&self) -> bool {
        self.numbers.len() > 1
    }
}

/// Find nouns whose form is a masculine form in the lexicon.
///
/// Candidates are returned in sentence order. Only tokens that are
/// tagged as common or proper nouns are considered.
pub fn find_candidates(
    graph: &dyn DependencyGraph,
    lexicon: &Lexicon,
) -> Result<Vec<Candidate>, SentenceError> {
    let mut candidates = Vec::new();

    for idx in 1..graph.len() {
        let token = graph.token(idx);
        let form = token.form().to_lowercase();

        let numbers = lexicon.numbers(&form);
        if numbers.is_empty() {
            continue;
        }

        let upos = token
            .upos()
            .ok_or_else(|| SentenceError::missing_tag(TagLayer::UPos, idx, graph))?;

        if is_noun(upos) {
            candidates.push(Candidate::new(idx, form, numbers));
        }
    }

    Ok(candidates)
}
