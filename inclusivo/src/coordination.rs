//! Filtering of nouns that already occur with their feminine form.
//!
//! A masculine noun does not need an inclusive form when the sentence
//! already mentions the feminine counterpart, as in *lo scrittore e la
//! scrittrice*. This is detected with local syntactic configurations
//! only:
//!
//! * the feminine noun is a conjunct of the masculine noun;
//! * the masculine noun is a conjunct of the feminine noun;
//! * the feminine noun is a sibling of the masculine noun, which covers
//!   enumerations without a conjunction (*il manager, la manager*).

use crate::constants::{CONJUNCT_RELATION, NOUN_POS};
use crate::detect::Candidate;
use crate::error::{SentenceError, TagLayer};
use crate::graph::{DependencyGraph, Gender, Number};
use crate::lexicon::Lexicon;

/// The configuration in which a feminine counterpart was found.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum CoordinationRule {
    /// The feminine noun is a conjunct dependent of the candidate.
    ConjunctDependent,

    /// The candidate is a conjunct dependent of the feminine noun.
    ConjunctHead,

    /// The feminine noun shares its head with the candidate.
    Sibling,
}

/// A candidate that is already coordinated with its feminine form.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FilteredCandidate {
    candidate: Candidate,
    feminine: String,
    feminine_node: usize,
    rule: CoordinationRule,
}

impl FilteredCandidate {
    pub fn candidate(&self) -> &Candidate {
        &self.candidate
    }

    /// The lowercased form of the feminine counterpart.
    pub fn feminine(&self) -> &str {
        &self.feminine
    }

    /// The node of the feminine counterpart.
    pub fn feminine_node(&self) -> usize {
        self.feminine_node
    }

    pub fn rule(&self) -> CoordinationRule {
        self.rule
    }
}

/// Candidates split by whether they need an inclusive form.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Partition {
    filtered: Vec<FilteredCandidate>,
    to_modify: Vec<Candidate>,
}

impl Partition {
    /// Candidates that are already coordinated with a feminine form.
    pub fn filtered(&self) -> &[FilteredCandidate] {
        &self.filtered
    }

    /// Candidates that need an inclusive form.
    pub fn to_modify(&self) -> &[Candidate] {
        &self.to_modify
    }

    pub fn into_parts(self) -> (Vec<FilteredCandidate>, Vec<Candidate>) {
        (self.filtered, self.to_modify)
    }
}

/// Partition candidates into filtered candidates and candidates to modify.
///
/// Both parts preserve the order of `candidates`.
pub fn partition_candidates(
    graph: &dyn DependencyGraph,
    lexicon: &Lexicon,
    candidates: &[Candidate],
) -> Result<Partition, SentenceError> {
    let mut partition = Partition::default();

    for candidate in candidates {
        match find_coordination(graph, lexicon, candidate)? {
            Some((rule, feminine_node)) => {
                log::debug!(
                    "Both the masculine and feminine form are present for '{}'",
                    candidate.form()
                );
                partition.filtered.push(FilteredCandidate {
                    candidate: candidate.clone(),
                    feminine: graph.token(feminine_node).form().to_lowercase(),
                    feminine_node,
                    rule,
                })
            }
            None => partition.to_modify.push(candidate.clone()),
        }
    }

    Ok(partition)
}

fn find_coordination(
    graph: &dyn DependencyGraph,
    lexicon: &Lexicon,
    candidate: &Candidate,
) -> Result<Option<(CoordinationRule, usize)>, SentenceError> {
    let node = candidate.node();

    for &number in &Number::ALL {
        let feminine = match lexicon.feminine(candidate.form(), number) {
            Some(feminine) => feminine,
            None => continue,
        };

        // The feminine form is a conjunct of the candidate.
        for (dependent, relation) in graph.dependents(node) {
            let relation =
                relation.ok_or_else(|| SentenceError::missing_relation(dependent, graph))?;
            if relation == CONJUNCT_RELATION
                && is_feminine_counterpart(graph, dependent, feminine, number)?
            {
                return Ok(Some((CoordinationRule::ConjunctDependent, dependent)));
            }
        }

        let head = match graph.head(node) {
            Some((head, relation)) => {
                let relation =
                    relation.ok_or_else(|| SentenceError::missing_relation(node, graph))?;

                // The candidate is a conjunct of the feminine form.
                if head != 0
                    && relation == CONJUNCT_RELATION
                    && is_feminine_counterpart(graph, head, feminine, number)?
                {
                    return Ok(Some((CoordinationRule::ConjunctHead, head)));
                }

                head
            }
            None => continue,
        };

        // The root is its own head, look at the candidate's dependents
        // in that case.
        let head = if head == 0 { node } else { head };

        for (sibling, _) in graph.dependents(head) {
            if sibling != node && is_feminine_counterpart(graph, sibling, feminine, number)? {
                return Ok(Some((CoordinationRule::Sibling, sibling)));
            }
        }
    }

    Ok(None)
}

fn is_feminine_counterpart(
    graph: &dyn DependencyGraph,
    node: usize,
    feminine: &str,
    number: Number,
) -> Result<bool, SentenceError> {
    let token = graph.token(node);
    let upos = token
        .upos()
        .ok_or_else(|| SentenceError::missing_tag(TagLayer::UPos, node, graph))?;

    Ok(upos == NOUN_POS
        && token.gender() == Some(Gender::Fem)
        && token.number() == Some(number)
        && token.form().to_lowercase() == feminine)
}
