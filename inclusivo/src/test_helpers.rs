use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use conllu::io::{ReadSentence, Reader};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use udgraph::graph::{Comment, Sentence};

use crate::graph::{DependencyGraph, Token};

pub struct TestGraph(DiGraph<TestToken, Option<String>>);

impl DependencyGraph for TestGraph {
    fn dependents<'a>(
        &'a self,
        idx: usize,
    ) -> Box<dyn Iterator<Item = (usize, Option<String>)> + 'a> {
        Box::new(
            self.0
                .edges_directed(NodeIndex::new(idx), Direction::Outgoing)
                .map(|e| (e.target().index(), e.weight().to_owned())),
        )
    }

    fn head(&self, idx: usize) -> Option<(usize, Option<String>)> {
        self.0
            .edges_directed(NodeIndex::new(idx), Direction::Incoming)
            .map(|e| (e.source().index(), e.weight().to_owned()))
            .next()
    }

    fn token(&self, idx: usize) -> &dyn Token {
        &self.0[NodeIndex::new(idx)]
    }

    fn len(&self) -> usize {
        self.0.node_count()
    }
}

pub struct TestToken {
    form: String,
    upos: Option<String>,
    xpos: Option<String>,
    features: HashMap<String, String>,
    space_after: bool,
}

impl Token for TestToken {
    fn form(&self) -> &str {
        &self.form
    }

    fn upos(&self) -> Option<&str> {
        self.upos.as_deref()
    }

    fn xpos(&self) -> Option<&str> {
        self.xpos.as_deref()
    }

    fn feature(&self, name: &str) -> Option<&str> {
        self.features.get(name).map(String::as_str)
    }

    fn space_after(&self) -> bool {
        self.space_after
    }
}

/// Builder for test graphs.
///
/// Tokens are numbered from 1 in the order in which they are added,
/// node 0 is the root.
pub struct SentenceBuilder {
    graph: DiGraph<TestToken, Option<String>>,
}

impl SentenceBuilder {
    pub fn new() -> Self {
        let mut graph = DiGraph::new();
        graph.add_node(TestToken {
            form: "ROOT".to_string(),
            upos: Some("root".to_string()),
            xpos: Some("root".to_string()),
            features: HashMap::new(),
            space_after: true,
        });

        SentenceBuilder { graph }
    }

    pub fn token(self, form: &str, upos: &str, xpos: &str) -> Self {
        self.add(form, Some(upos), Some(xpos))
    }

    /// Add a token without part-of-speech tags.
    pub fn untagged(self, form: &str) -> Self {
        self.add(form, None, None)
    }

    /// Set the features of the last token (`Gender=Masc|Number=Sing`).
    pub fn features(mut self, features: &str) -> Self {
        let idx = self.last();
        self.graph[idx].features = features
            .split('|')
            .filter_map(|kv| {
                let mut parts = kv.splitn(2, '=');
                Some((parts.next()?.to_owned(), parts.next()?.to_owned()))
            })
            .collect();
        self
    }

    pub fn no_space_after(mut self) -> Self {
        let idx = self.last();
        self.graph[idx].space_after = false;
        self
    }

    pub fn deprel(mut self, head: usize, relation: &str, dependent: usize) -> Self {
        self.graph.add_edge(
            NodeIndex::new(head),
            NodeIndex::new(dependent),
            Some(relation.to_owned()),
        );
        self
    }

    pub fn unlabeled(mut self, head: usize, dependent: usize) -> Self {
        self.graph
            .add_edge(NodeIndex::new(head), NodeIndex::new(dependent), None);
        self
    }

    pub fn build(self) -> TestGraph {
        TestGraph(self.graph)
    }

    fn add(mut self, form: &str, upos: Option<&str>, xpos: Option<&str>) -> Self {
        self.graph.add_node(TestToken {
            form: form.to_owned(),
            upos: upos.map(ToOwned::to_owned),
            xpos: xpos.map(ToOwned::to_owned),
            features: HashMap::new(),
            space_after: true,
        });
        self
    }

    fn last(&self) -> NodeIndex {
        assert!(self.graph.node_count() > 1, "No token was added");
        NodeIndex::new(self.graph.node_count() - 1)
    }
}

/// Read CoNLL-U test sentences with their gold-standard suggestions.
///
/// Every sentence must carry an `expected` comment with the suggestion.
pub fn read_test_sentences<P>(path: P) -> Vec<(Sentence, String)>
where
    P: AsRef<Path>,
{
    let f = File::open(path).unwrap();
    let reader = Reader::new(BufReader::new(f));

    reader
        .sentences()
        .map(|sentence| {
            let sentence = sentence.unwrap();
            let expected = sentence
                .comments()
                .iter()
                .find_map(|comment| match comment {
                    Comment::AttrVal { attr, val } if attr == "expected" => Some(val.clone()),
                    _ => None,
                })
                .expect("Test sentence without an expected suggestion");
            (sentence, expected)
        })
        .collect()
}
