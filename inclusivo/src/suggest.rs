//! Gender-inclusive suggestions for whole sentences.

use crate::assemble::{assemble, Splice};
use crate::coordination::partition_candidates;
use crate::detect::find_candidates;
use crate::error::SentenceError;
use crate::graph::DependencyGraph;
use crate::lexicon::Lexicon;
use crate::report::Report;
use crate::rewrite::{RewriteSpan, Rewriter};
use crate::text::SentenceText;

/// A rewritten sentence.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Suggestion {
    text: String,
    spans: Vec<RewriteSpan>,
    report: Report,
}

impl Suggestion {
    /// The lowercased sentence with dual forms.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The rewrites that were produced, in sentence order.
    pub fn spans(&self) -> &[RewriteSpan] {
        &self.spans
    }

    pub fn report(&self) -> &Report {
        &self.report
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

/// Suggest gender-inclusive forms for annotated sentences.
///
/// The suggester does not keep any state between sentences.
#[derive(Clone, Debug)]
pub struct Suggester {
    lexicon: Lexicon,
    rewriter: Rewriter,
    splice: Splice,
}

impl Suggester {
    pub fn new(lexicon: Lexicon, rewriter: Rewriter, splice: Splice) -> Self {
        Suggester {
            lexicon,
            rewriter,
            splice,
        }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Rewrite a sentence.
    ///
    /// Masculine nouns from the lexicon that are not coordinated with
    /// their feminine form are replaced by a dual form. Sentences
    /// without such nouns are returned in lowercase.
    pub fn suggest(&self, graph: &dyn DependencyGraph) -> Result<Suggestion, SentenceError> {
        let text = SentenceText::from_graph(graph);

        let candidates = find_candidates(graph, &self.lexicon)?;
        let partition = partition_candidates(graph, &self.lexicon, &candidates)?;
        let spans =
            self.rewriter
                .rewrite_all(graph, &self.lexicon, &text, partition.to_modify())?;

        let report = Report::new(partition, &spans);
        let text = assemble(text.as_str(), &spans, self.splice);

        Ok(Suggestion {
            text,
            spans,
            report,
        })
    }
}
