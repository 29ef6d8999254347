use std::collections::HashMap;

use lazy_static::lazy_static;
use maplit::hashmap;

pub(crate) static GENDER_FEATURE: &str = "Gender";
pub(crate) static NUMBER_FEATURE: &str = "Number";

pub(crate) static CONJUNCT_RELATION: &str = "conj";

pub(crate) static NOUN_POS: &str = "NOUN";
pub(crate) static PROPER_NOUN_POS: &str = "PROPN";
pub(crate) static DETERMINER_POS: &str = "DET";
pub(crate) static ADPOSITION_POS: &str = "ADP";

pub(crate) static DEFINITE_ARTICLE_TAG: &str = "RD";
pub(crate) static INDEFINITE_ARTICLE_TAG: &str = "RI";
pub(crate) static POSSESSIVE_ADJECTIVE_TAG: &str = "AP";
pub(crate) static PREPOSITION_TAG: &str = "E";
pub(crate) static FUSED_PREPOSITION_TAG: &str = "E_RD";

lazy_static! {
    /// Masculine articles and prepositions fused with an article.
    pub(crate) static ref ARTICLES: HashMap<&'static str, &'static str> = hashmap! {
        "il" => "la",
        "lo" => "la",
        "l'" => "l'",
        "i" => "le",
        "gli" => "le",
        "un" => "una",
        "uno" => "una",
        "del" => "della",
        "dello" => "della",
        "dell'" => "dell'",
        "dei" => "delle",
        "degli" => "delle",
        "al" => "alla",
        "allo" => "alla",
        "all'" => "all'",
        "ai" => "alle",
        "agli" => "alle",
        "dal" => "dalla",
        "dallo" => "dalla",
        "dall'" => "dall'",
        "dai" => "dalle",
        "dagli" => "dalle",
        "nel" => "nella",
        "nello" => "nella",
        "nell'" => "nell'",
        "nei" => "nelle",
        "negli" => "nelle",
        "sul" => "sulla",
        "sullo" => "sulla",
        "sull'" => "sull'",
        "sui" => "sulle",
        "sugli" => "sulle",
        "col" => "con la",
        "coi" => "con le",
    };

    /// Masculine possessive adjectives.
    pub(crate) static ref POSSESSIVE_ADJECTIVES: HashMap<&'static str, &'static str> = hashmap! {
        "mio" => "mia",
        "tuo" => "tua",
        "suo" => "sua",
        "nostro" => "nostra",
        "vostro" => "vostra",
        "loro" => "loro",
        "miei" => "mie",
        "tuoi" => "tue",
        "suoi" => "sue",
        "nostri" => "nostre",
        "vostri" => "vostre",
    };
}

/// Is the token tagged as an article?
///
/// Both bare articles and prepositions fused with an article qualify.
pub(crate) fn is_article(upos: &str, xpos: &str) -> bool {
    (upos == DETERMINER_POS && (xpos == DEFINITE_ARTICLE_TAG || xpos == INDEFINITE_ARTICLE_TAG))
        || (upos == ADPOSITION_POS && xpos == FUSED_PREPOSITION_TAG)
}

pub(crate) fn is_possessive_adjective(upos: &str, xpos: &str) -> bool {
    upos == DETERMINER_POS && xpos == POSSESSIVE_ADJECTIVE_TAG
}

pub(crate) fn is_bare_preposition(upos: &str, xpos: &str) -> bool {
    upos == ADPOSITION_POS && xpos == PREPOSITION_TAG
}

pub(crate) fn is_noun(upos: &str) -> bool {
    upos == NOUN_POS || upos == PROPER_NOUN_POS
}
