//! Read-only view of an annotated sentence.
//!
//! The rule engine never works on a concrete annotation format. It
//! inspects sentences through the `DependencyGraph` and `Token` traits,
//! which are implemented for `udgraph` sentences (as produced by a
//! CoNLL-U reader) and for the graphs used in the unit tests.
//!
//! Nodes are numbered as in `udgraph`: node *0* is the artificial root,
//! the tokens of the sentence are nodes *1..len*.

use std::fmt;

use udgraph::graph::Sentence;

use crate::constants::{GENDER_FEATURE, NUMBER_FEATURE};

#[allow(clippy::len_without_is_empty)]
pub trait DependencyGraph {
    /// Dependents of `idx` with their relation labels.
    fn dependents<'a>(&'a self, idx: usize)
        -> Box<dyn Iterator<Item = (usize, Option<String>)> + 'a>;

    /// The head of `idx` and the relation label.
    ///
    /// Returns `None` when the token is not attached.
    fn head(&self, idx: usize) -> Option<(usize, Option<String>)>;

    fn token(&self, idx: usize) -> &dyn Token;

    /// The number of nodes, including the root.
    fn len(&self) -> usize;

    /// Surface forms of all tokens, used for error messages.
    fn forms(&self) -> Vec<String> {
        (1..self.len())
            .map(|idx| self.token(idx).form().to_owned())
            .collect()
    }
}

impl DependencyGraph for Sentence {
    fn dependents<'a>(
        &'a self,
        idx: usize,
    ) -> Box<dyn Iterator<Item = (usize, Option<String>)> + 'a> {
        Box::new(self.dep_graph().dependents(idx).map(|triple| {
            (
                triple.dependent(),
                triple.relation().map(ToOwned::to_owned),
            )
        }))
    }

    fn head(&self, idx: usize) -> Option<(usize, Option<String>)> {
        self.dep_graph()
            .head(idx)
            .map(|triple| (triple.head(), triple.relation().map(ToOwned::to_owned)))
    }

    fn token(&self, idx: usize) -> &dyn Token {
        self[idx]
            .token()
            .expect("The root node was used as a token")
    }

    fn len(&self) -> usize {
        self.len()
    }
}

/// Grammatical gender, as annotated in the `Gender` feature.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Gender {
    Masc,
    Fem,
}

/// Grammatical number.
///
/// Also identifies the lexicon column (singular or plural) that a
/// masculine form was matched in.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Number {
    Singular,
    Plural,
}

impl Number {
    pub const ALL: [Number; 2] = [Number::Singular, Number::Plural];
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Number::Singular => f.write_str("singular"),
            Number::Plural => f.write_str("plural"),
        }
    }
}

pub trait Token {
    fn form(&self) -> &str;

    /// Coarse-grained part-of-speech tag.
    fn upos(&self) -> Option<&str>;

    /// Fine-grained part-of-speech tag.
    fn xpos(&self) -> Option<&str>;

    /// Value of a morphological feature.
    fn feature(&self, name: &str) -> Option<&str>;

    /// Is the token followed by whitespace in the original text?
    fn space_after(&self) -> bool;

    fn gender(&self) -> Option<Gender> {
        match self.feature(GENDER_FEATURE)? {
            "Masc" => Some(Gender::Masc),
            "Fem" => Some(Gender::Fem),
            _ => None,
        }
    }

    fn number(&self) -> Option<Number> {
        match self.feature(NUMBER_FEATURE)? {
            "Sing" => Some(Number::Singular),
            "Plur" => Some(Number::Plural),
            _ => None,
        }
    }
}

impl Token for udgraph::token::Token {
    fn form(&self) -> &str {
        self.form()
    }

    fn upos(&self) -> Option<&str> {
        self.upos()
    }

    fn xpos(&self) -> Option<&str> {
        self.xpos()
    }

    fn feature(&self, name: &str) -> Option<&str> {
        self.features().get(name).map(String::as_str)
    }

    fn space_after(&self) -> bool {
        !matches!(self.misc().get("SpaceAfter"), Some(Some(val)) if val == "No")
    }
}

#[cfg(test)]
mod tests {
    use std::iter::FromIterator;

    use udgraph::graph::{DepTriple, Sentence};
    use udgraph::token::{Features, Misc, TokenBuilder};

    use super::{DependencyGraph, Gender, Number};

    fn example_sentence() -> Sentence {
        let mut sent = Sentence::from_iter(vec![
            TokenBuilder::new("Il")
                .upos("DET")
                .xpos("RD")
                .features(Features::from_iter(vec![
                    ("Definite", "Def"),
                    ("Gender", "Masc"),
                    ("Number", "Sing"),
                ]))
                .into(),
            TokenBuilder::new("medico")
                .upos("NOUN")
                .xpos("S")
                .features(Features::from_iter(vec![("Gender", "Masc"), ("Number", "Sing")]))
                .misc(Misc::from_iter(vec![("SpaceAfter", Some("No"))]))
                .into(),
            TokenBuilder::new(".").upos("PUNCT").xpos("FS").into(),
        ]);

        sent.dep_graph_mut()
            .add_deprel(DepTriple::new(0, Some("root"), 2));
        sent.dep_graph_mut()
            .add_deprel(DepTriple::new(2, Some("det"), 1));
        sent.dep_graph_mut()
            .add_deprel(DepTriple::new(2, Some("punct"), 3));

        sent
    }

    #[test]
    fn udgraph_sentence_as_dependency_graph() {
        let sent = example_sentence();
        let graph: &dyn DependencyGraph = &sent;

        assert_eq!(graph.len(), 4);
        assert_eq!(graph.head(1), Some((2, Some("det".to_string()))));
        assert_eq!(graph.head(2), Some((0, Some("root".to_string()))));

        let mut dependents = graph.dependents(2).collect::<Vec<_>>();
        dependents.sort();
        assert_eq!(
            dependents,
            vec![(1, Some("det".to_string())), (3, Some("punct".to_string()))]
        );

        assert_eq!(graph.forms(), vec!["Il", "medico", "."]);
    }

    #[test]
    fn udgraph_token_features() {
        let sent = example_sentence();
        let graph: &dyn DependencyGraph = &sent;

        let noun = graph.token(2);
        assert_eq!(noun.upos(), Some("NOUN"));
        assert_eq!(noun.gender(), Some(Gender::Masc));
        assert_eq!(noun.number(), Some(Number::Singular));
        assert!(!noun.space_after());

        let punct = graph.token(3);
        assert_eq!(punct.gender(), None);
        assert_eq!(punct.number(), None);
        assert!(punct.space_after());
    }
}
