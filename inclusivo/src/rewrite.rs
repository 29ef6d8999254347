//! Context-aware construction of dual-form phrases.
//!
//! The feminine form of a noun is not enough when the noun is preceded
//! by an article or a possessive adjective, since these agree with the
//! noun: *il suo medico* becomes *la sua medica/il suo medico*. The
//! rewriter classifies the (at most two) tokens before the noun and
//! inflects the words that agree with it.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::constants::{is_article, is_bare_preposition, is_possessive_adjective};
use crate::detect::Candidate;
use crate::error::{SentenceError, TagLayer};
use crate::graph::{DependencyGraph, Number};
use crate::lexicon::{FormMap, Lexicon};
use crate::text::SentenceText;

/// Maximum number of tokens before the noun that can agree with it.
const MAX_CONTEXT: usize = 2;

/// Treatment of forms that are both singular and plural masculine forms.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AmbiguityStrategy {
    /// Rewrite for both numbers.
    Both,

    /// Use the `Number` feature of the noun to pick one number. Falls
    /// back to both numbers when the feature is absent or agrees with
    /// neither.
    Morphology,
}

impl Default for AmbiguityStrategy {
    fn default() -> Self {
        AmbiguityStrategy::Morphology
    }
}

/// Treatment of nouns with identical masculine and feminine forms.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EpiceneStrategy {
    /// Leave the phrase unchanged.
    Unchanged,

    /// Offer the feminine article and adjective, e.g. *la/il cantante*.
    Article,
}

impl Default for EpiceneStrategy {
    fn default() -> Self {
        EpiceneStrategy::Unchanged
    }
}

/// Rewriter options.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RewriterOptions {
    /// Only consider context tokens that are attached to the noun.
    ///
    /// If `false`, the tokens before the noun are used regardless of
    /// the dependency structure.
    #[serde(default = "attached_context_default")]
    pub attached_context: bool,

    #[serde(default)]
    pub ambiguity: AmbiguityStrategy,

    #[serde(default)]
    pub epicene: EpiceneStrategy,
}

fn attached_context_default() -> bool {
    true
}

impl Default for RewriterOptions {
    fn default() -> Self {
        RewriterOptions {
            attached_context: attached_context_default(),
            ambiguity: AmbiguityStrategy::default(),
            epicene: EpiceneStrategy::default(),
        }
    }
}

/// Left context of a noun.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Context {
    /// Nothing that agrees with the noun precedes it.
    Bare,

    /// *il medico*, *del medico*
    Article { article: usize },

    /// *il suo medico*
    ArticlePossessive { article: usize, possessive: usize },

    /// *di suo padre*
    PrepositionPossessive { possessive: usize },
}

impl Context {
    /// The first node of the phrase that is rewritten.
    fn first(self, noun: usize) -> usize {
        match self {
            Context::Bare => noun,
            Context::Article { article } => article,
            Context::ArticlePossessive { article, .. } => article,
            Context::PrepositionPossessive { possessive } => possessive,
        }
    }
}

/// Replacement of a phrase by its dual form.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewriteSpan {
    node: usize,
    number: Number,
    range: Range<usize>,
    original: String,
    replacement: String,
}

impl RewriteSpan {
    pub fn new(
        node: usize,
        number: Number,
        range: Range<usize>,
        original: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Self {
        RewriteSpan {
            node,
            number,
            range,
            original: original.into(),
            replacement: replacement.into(),
        }
    }

    /// The noun that the span was created for.
    pub fn node(&self) -> usize {
        self.node
    }

    pub fn number(&self) -> Number {
        self.number
    }

    /// Byte range of the original phrase in the sentence text.
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Does the span alter the text?
    pub fn is_change(&self) -> bool {
        self.original != self.replacement
    }
}

/// Rewriter of candidate nouns.
#[derive(Clone, Debug)]
pub struct Rewriter {
    articles: FormMap,
    adjectives: FormMap,
    options: RewriterOptions,
}

impl Default for Rewriter {
    fn default() -> Self {
        Rewriter::new(
            FormMap::articles(),
            FormMap::possessive_adjectives(),
            RewriterOptions::default(),
        )
    }
}

impl Rewriter {
    pub fn new(articles: FormMap, adjectives: FormMap, options: RewriterOptions) -> Self {
        Rewriter {
            articles,
            adjectives,
            options,
        }
    }

    pub fn options(&self) -> &RewriterOptions {
        &self.options
    }

    /// Rewrite all candidates.
    ///
    /// The spans are in candidate order.
    pub fn rewrite_all(
        &self,
        graph: &dyn DependencyGraph,
        lexicon: &Lexicon,
        text: &SentenceText,
        candidates: &[Candidate],
    ) -> Result<Vec<RewriteSpan>, SentenceError> {
        let mut spans = Vec::new();
        for candidate in candidates {
            spans.extend(self.rewrite(graph, lexicon, text, candidate)?);
        }
        Ok(spans)
    }

    /// Rewrite a candidate.
    ///
    /// Usually returns a single span. No span is returned when the
    /// context requires inflecting an article or adjective that is not
    /// known. Two spans are returned for an ambiguous candidate that
    /// is rewritten for both numbers.
    pub fn rewrite(
        &self,
        graph: &dyn DependencyGraph,
        lexicon: &Lexicon,
        text: &SentenceText,
        candidate: &Candidate,
    ) -> Result<Vec<RewriteSpan>, SentenceError> {
        let node = candidate.node();
        let context = classify_context(graph, node, self.options.attached_context)?;

        let mut spans = Vec::new();
        for number in self.numbers(graph, candidate) {
            let feminine =
                lexicon
                    .feminine(candidate.form(), number)
                    .ok_or_else(|| SentenceError::LookupMiss {
                        form: candidate.form().to_owned(),
                        number,
                    })?;

            if let Some(span) = self.rewrite_phrase(text, candidate, context, number, feminine) {
                spans.push(span);
            }
        }

        Ok(spans)
    }

    fn numbers(&self, graph: &dyn DependencyGraph, candidate: &Candidate) -> Vec<Number> {
        if !candidate.is_ambiguous() {
            return candidate.numbers().to_vec();
        }

        log::warn!(
            "'{}' is both a singular and a plural masculine form",
            candidate.form()
        );

        match self.options.ambiguity {
            AmbiguityStrategy::Both => candidate.numbers().to_vec(),
            AmbiguityStrategy::Morphology => match graph.token(candidate.node()).number() {
                Some(number) if candidate.numbers().contains(&number) => vec![number],
                _ => candidate.numbers().to_vec(),
            },
        }
    }

    fn rewrite_phrase(
        &self,
        text: &SentenceText,
        candidate: &Candidate,
        context: Context,
        number: Number,
        feminine: &str,
    ) -> Option<RewriteSpan> {
        let node = candidate.node();

        // Feminine forms of the words before the noun, paired with the
        // masculine forms.
        let inflected = match context {
            Context::Bare => vec![],
            Context::Article { article } => vec![self.inflect_article(text, article)?],
            Context::ArticlePossessive {
                article,
                possessive,
            } => vec![
                self.inflect_article(text, article)?,
                self.inflect_possessive(text, possessive)?,
            ],
            Context::PrepositionPossessive { possessive } => {
                vec![self.inflect_possessive(text, possessive)?]
            }
        };

        let first = context.first(node);
        let range = text.span(first, node);
        let original = text.span_text(first, node);

        let replacement = if feminine != candidate.form() {
            let mut words = inflected.iter().map(|(fem, _)| fem.as_str()).collect::<Vec<_>>();
            words.push(feminine);
            format!("{}/{}", join_words(&words), original)
        } else {
            self.rewrite_epicene(&inflected, original)
        };

        Some(RewriteSpan::new(node, number, range, original, replacement))
    }

    fn rewrite_epicene(&self, inflected: &[(String, String)], original: &str) -> String {
        let unchanged = inflected.iter().all(|(fem, masc)| fem == masc);

        match self.options.epicene {
            EpiceneStrategy::Article if !unchanged => {
                let words = inflected.iter().map(|(fem, _)| fem.as_str()).collect::<Vec<_>>();
                format!("{}/{}", join_words(&words), original)
            }
            _ => original.to_owned(),
        }
    }

    fn inflect_article(&self, text: &SentenceText, node: usize) -> Option<(String, String)> {
        Self::inflect(&self.articles, text, node, "article")
    }

    fn inflect_possessive(&self, text: &SentenceText, node: usize) -> Option<(String, String)> {
        Self::inflect(&self.adjectives, text, node, "possessive adjective")
    }

    fn inflect(
        forms: &FormMap,
        text: &SentenceText,
        node: usize,
        description: &str,
    ) -> Option<(String, String)> {
        let masculine = text.span_text(node, node);
        match forms.feminine(masculine) {
            Some(feminine) => Some((feminine.to_owned(), masculine.to_owned())),
            None => {
                log::debug!("Unknown {}: '{}', not rewriting", description, masculine);
                None
            }
        }
    }
}

/// Classify the left context of a noun.
///
/// If `attached` is `true`, only contiguous tokens to the left of the
/// noun that are dependents of the noun are considered.
pub fn classify_context(
    graph: &dyn DependencyGraph,
    noun: usize,
    attached: bool,
) -> Result<Context, SentenceError> {
    let window = context_window(graph, noun, attached);

    let prev = match window.last() {
        Some(&prev) => prev,
        None => return Ok(Context::Bare),
    };
    let (prev_upos, prev_xpos) = tags(graph, prev)?;

    if window.len() == MAX_CONTEXT {
        let prev_prev = window[0];
        let (pp_upos, pp_xpos) = tags(graph, prev_prev)?;

        if is_possessive_adjective(prev_upos, prev_xpos) {
            if is_article(pp_upos, pp_xpos) {
                return Ok(Context::ArticlePossessive {
                    article: prev_prev,
                    possessive: prev,
                });
            } else if is_bare_preposition(pp_upos, pp_xpos) {
                return Ok(Context::PrepositionPossessive { possessive: prev });
            }
        }
    }

    if is_article(prev_upos, prev_xpos) {
        return Ok(Context::Article { article: prev });
    }

    Ok(Context::Bare)
}

/// Tokens that directly precede the noun, in sentence order.
fn context_window(graph: &dyn DependencyGraph, noun: usize, attached: bool) -> Vec<usize> {
    let mut window = Vec::with_capacity(MAX_CONTEXT);

    for node in (1..noun).rev().take(MAX_CONTEXT) {
        if attached && graph.head(node).map(|(head, _)| head) != Some(noun) {
            break;
        }
        window.push(node);
    }

    window.reverse();
    window
}

fn tags(graph: &dyn DependencyGraph, node: usize) -> Result<(&str, &str), SentenceError> {
    let token = graph.token(node);
    let upos = token
        .upos()
        .ok_or_else(|| SentenceError::missing_tag(TagLayer::UPos, node, graph))?;
    let xpos = token
        .xpos()
        .ok_or_else(|| SentenceError::missing_tag(TagLayer::XPos, node, graph))?;
    Ok((upos, xpos))
}

/// Join words with spaces, except after elided forms such as *l'*.
fn join_words(words: &[&str]) -> String {
    let mut joined = String::new();
    for word in words {
        if !joined.is_empty() && !joined.ends_with('\'') {
            joined.push(' ');
        }
        joined.push_str(word);
    }
    joined
}
