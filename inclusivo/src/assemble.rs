//! Splicing of rewritten phrases into the sentence text.

use serde::{Deserialize, Serialize};

use crate::rewrite::RewriteSpan;

/// Strategy for applying rewrite spans to a sentence.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Splice {
    /// Replace the first occurrence of the original phrase.
    ///
    /// Can replace the wrong phrase when the same phrase occurs more
    /// than once in a sentence.
    FirstOccurrence,

    /// Replace the phrase at the offsets of its tokens.
    Offset,
}

impl Default for Splice {
    fn default() -> Self {
        Splice::Offset
    }
}

/// Assembler configuration.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AssemblerOptions {
    #[serde(default)]
    pub splice: Splice,
}

/// Apply rewrite spans to a lowercased sentence.
///
/// Spans are applied in the given order. A span is not applied when
/// its replacement is already present, so that assembling a sentence
/// twice with the same spans gives the same result.
pub fn assemble(text: &str, spans: &[RewriteSpan], splice: Splice) -> String {
    match splice {
        Splice::FirstOccurrence => assemble_first_occurrence(text, spans),
        Splice::Offset => assemble_offsets(text, spans),
    }
}

fn assemble_first_occurrence(text: &str, spans: &[RewriteSpan]) -> String {
    let mut sentence = text.to_owned();

    for span in spans {
        if !sentence.contains(span.replacement()) {
            sentence = sentence.replacen(span.original(), span.replacement(), 1);
        }
    }

    sentence
}

fn assemble_offsets(text: &str, spans: &[RewriteSpan]) -> String {
    let mut sentence = String::with_capacity(text.len());
    let mut cursor = 0;

    for span in spans.iter().filter(|span| span.is_change()) {
        let range = span.range();

        if range.start < cursor {
            log::warn!(
                "Rewrite of '{}' overlaps with a previous rewrite, skipping",
                span.original()
            );
            continue;
        }

        // Replacements end with the original phrase.
        if text[..range.end].ends_with(span.replacement())
            || text[range.start..].starts_with(span.replacement())
        {
            continue;
        }

        sentence.push_str(&text[cursor..range.start]);
        sentence.push_str(span.replacement());
        cursor = range.end;
    }

    sentence.push_str(&text[cursor..]);

    sentence
}

#[cfg(test)]
mod tests {
    use super::{assemble, Splice};
    use crate::graph::Number;
    use crate::rewrite::RewriteSpan;

    fn span(text: &str, original: &str, replacement: &str) -> RewriteSpan {
        let start = text.find(original).unwrap();
        RewriteSpan::new(
            1,
            Number::Singular,
            start..start + original.len(),
            original,
            replacement,
        )
    }

    #[test]
    fn no_spans() {
        for &splice in &[Splice::Offset, Splice::FirstOccurrence] {
            assert_eq!(assemble("il tavolo è rotto", &[], splice), "il tavolo è rotto");
        }
    }

    #[test]
    fn replaces_spans() {
        let text = "il medico visita gli studenti.";
        let spans = vec![
            span(text, "il medico", "la medica/il medico"),
            span(text, "gli studenti", "le studentesse/gli studenti"),
        ];

        for &splice in &[Splice::Offset, Splice::FirstOccurrence] {
            assert_eq!(
                assemble(text, &spans, splice),
                "la medica/il medico visita le studentesse/gli studenti."
            );
        }
    }

    #[test]
    fn offsets_target_the_right_occurrence() {
        // The second *medico* is the candidate.
        let text = "medico è il medico";
        let start = text.rfind("il medico").unwrap();
        let spans = vec![RewriteSpan::new(
            4,
            Number::Singular,
            start..text.len(),
            "il medico",
            "la medica/il medico",
        )];
        assert_eq!(
            assemble(text, &spans, Splice::Offset),
            "medico è la medica/il medico"
        );

        let start = text.rfind("medico").unwrap();
        let spans = vec![RewriteSpan::new(
            4,
            Number::Singular,
            start..text.len(),
            "medico",
            "medica/medico",
        )];
        assert_eq!(
            assemble(text, &spans, Splice::Offset),
            "medico è il medica/medico"
        );
        assert_eq!(
            assemble(text, &spans, Splice::FirstOccurrence),
            "medica/medico è il medico"
        );
    }

    #[test]
    fn no_double_application() {
        let text = "la medica/il medico arriva";
        let spans = vec![RewriteSpan::new(
            4,
            Number::Singular,
            10..19,
            "il medico",
            "la medica/il medico",
        )];

        for &splice in &[Splice::Offset, Splice::FirstOccurrence] {
            assert_eq!(assemble(text, &spans, splice), text);
        }

        let once = {
            let text = "il medico arriva";
            let spans = vec![span(text, "il medico", "la medica/il medico")];
            assemble(text, &spans, Splice::FirstOccurrence)
        };
        let spans = vec![span(&once, "il medico", "la medica/il medico")];
        assert_eq!(assemble(&once, &spans, Splice::FirstOccurrence), once);
    }

    #[test]
    fn overlapping_spans_are_skipped() {
        let text = "il xy arriva";
        let spans = vec![
            span(text, "il xy", "la xa/il xy"),
            span(text, "il xy", "la xe/il xy"),
        ];

        assert_eq!(
            assemble(text, &spans, Splice::Offset),
            "la xa/il xy arriva"
        );
    }

    #[test]
    fn unchanged_spans_are_ignored() {
        let text = "il cantante canta";
        let spans = vec![span(text, "il cantante", "il cantante")];

        for &splice in &[Splice::Offset, Splice::FirstOccurrence] {
            assert_eq!(assemble(text, &spans, splice), text);
        }
    }
}
