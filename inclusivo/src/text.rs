use std::ops::Range;

use crate::graph::DependencyGraph;

/// Lowercased text of a sentence with token offsets.
///
/// The text is reconstructed from the token forms. Tokens are separated
/// by a single space, unless the token is annotated as not being
/// followed by whitespace (`SpaceAfter=No`).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SentenceText {
    text: String,
    offsets: Vec<Range<usize>>,
}

impl SentenceText {
    pub fn from_graph(graph: &dyn DependencyGraph) -> Self {
        let mut text = String::new();
        let mut offsets = Vec::with_capacity(graph.len().saturating_sub(1));

        for idx in 1..graph.len() {
            let token = graph.token(idx);

            let start = text.len();
            text.push_str(&token.form().to_lowercase());
            offsets.push(start..text.len());

            if idx + 1 < graph.len() && token.space_after() {
                text.push(' ');
            }
        }

        SentenceText { text, offsets }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Byte range covering the nodes `first..=last`.
    pub fn span(&self, first: usize, last: usize) -> Range<usize> {
        assert!(
            first > 0 && first <= last,
            "Invalid token span: {}..={}",
            first,
            last
        );
        self.offsets[first - 1].start..self.offsets[last - 1].end
    }

    /// Text of the nodes `first..=last`, including inner whitespace.
    pub fn span_text(&self, first: usize, last: usize) -> &str {
        &self.text[self.span(first, last)]
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

#[cfg(test)]
mod tests {
    use super::SentenceText;
    use crate::test_helpers::SentenceBuilder;

    #[test]
    fn reconstructs_lowercased_text() {
        let sent = SentenceBuilder::new()
            .token("L'", "DET", "RD")
            .no_space_after()
            .token("Ingegnere", "NOUN", "S")
            .token("arriva", "VERB", "V")
            .no_space_after()
            .token(".", "PUNCT", "FS")
            .build();

        let text = SentenceText::from_graph(&sent);

        assert_eq!(text.as_str(), "l'ingegnere arriva.");
        assert_eq!(text.span_text(1, 2), "l'ingegnere");
        assert_eq!(text.span_text(2, 3), "ingegnere arriva");
        assert_eq!(text.span(3, 3), 12..18);
        assert_eq!(text.span_text(4, 4), ".");
    }

    #[test]
    fn empty_sentence() {
        let sent = SentenceBuilder::new().build();
        let text = SentenceText::from_graph(&sent);
        assert_eq!(text.as_str(), "");
    }
}
