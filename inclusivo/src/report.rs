use std::fmt;

use crate::coordination::{FilteredCandidate, Partition};
use crate::detect::Candidate;
use crate::graph::Number;
use crate::rewrite::RewriteSpan;

/// A candidate that needs an inclusive form, with the outcome of its
/// rewrite.
#[derive(Clone, Debug, Eq, PartialEq)]
struct Rewritten {
    candidate: Candidate,
    changed: bool,

    /// Numbers for which the candidate was rewritten.
    numbers: Vec<Number>,
}

impl fmt::Display for Rewritten {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.candidate.form())?;

        // Ambiguous forms are always reported, since the rewriter may
        // have picked a number.
        if self.candidate.is_ambiguous() {
            write!(f, " (ambiguous: singular and plural")?;
            match self.numbers.as_slice() {
                [] => {}
                [number] => write!(f, ", used {}", number)?,
                _ => write!(f, ", used both")?,
            }
            f.write_str(")")?;
        }

        if !self.changed {
            f.write_str(" (no visible change)")?;
        }

        Ok(())
    }
}

/// Human-readable account of the decisions made for a sentence.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Report {
    filtered: Vec<FilteredCandidate>,
    to_modify: Vec<Rewritten>,
}

impl Report {
    /// Construct a report from the candidate partition and the spans
    /// that were produced for the candidates to modify.
    pub fn new(partition: Partition, spans: &[RewriteSpan]) -> Self {
        let (filtered, to_modify) = partition.into_parts();
        let to_modify = to_modify
            .into_iter()
            .map(|candidate| {
                let candidate_spans = spans
                    .iter()
                    .filter(|span| span.node() == candidate.node())
                    .collect::<Vec<_>>();

                let changed = candidate_spans.iter().any(|span| span.is_change());

                let mut numbers = Vec::new();
                for span in candidate_spans {
                    if !numbers.contains(&span.number()) {
                        numbers.push(span.number());
                    }
                }

                Rewritten {
                    candidate,
                    changed,
                    numbers,
                }
            })
            .collect();

        Report {
            filtered,
            to_modify,
        }
    }

    /// Candidates that already occur with their feminine form.
    pub fn filtered(&self) -> &[FilteredCandidate] {
        &self.filtered
    }

    /// Candidates that need an inclusive form.
    pub fn to_modify(&self) -> impl Iterator<Item = &Candidate> {
        self.to_modify.iter().map(|rewritten| &rewritten.candidate)
    }

    /// Candidates that need an inclusive form, but were not visibly
    /// changed (epicene nouns, unknown articles).
    pub fn unchanged(&self) -> impl Iterator<Item = &Candidate> {
        self.to_modify
            .iter()
            .filter(|rewritten| !rewritten.changed)
            .map(|rewritten| &rewritten.candidate)
    }

    /// Candidates that are both a singular and a plural masculine form,
    /// with the numbers they were rewritten for.
    pub fn ambiguous(&self) -> impl Iterator<Item = (&Candidate, &[Number])> {
        self.to_modify
            .iter()
            .filter(|rewritten| rewritten.candidate.is_ambiguous())
            .map(|rewritten| (&rewritten.candidate, rewritten.numbers.as_slice()))
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for filtered in &self.filtered {
            writeln!(
                f,
                "Both the masculine and feminine form are present for '{}' ('{}')",
                filtered.candidate().form(),
                filtered.feminine()
            )?;
        }

        if self.to_modify.is_empty() {
            return writeln!(f, "There are no nouns to be made gender inclusive");
        }

        writeln!(f, "The nouns to be made gender inclusive are:")?;
        for rewritten in &self.to_modify {
            writeln!(f, "{}", rewritten)?;
        }

        Ok(())
    }
}
