//! Masculine to feminine lookup tables.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{ARTICLES, POSSESSIVE_ADJECTIVES};
use crate::error::LexiconError;
use crate::graph::Number;

/// A row of the noun lexicon.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct LexiconEntry {
    #[serde(rename = "maschile_singolare")]
    pub masculine_singular: String,

    #[serde(rename = "maschile_plurale")]
    pub masculine_plural: String,

    #[serde(rename = "femminile_singolare")]
    pub feminine_singular: String,

    #[serde(rename = "femminile_plurale")]
    pub feminine_plural: String,
}

impl LexiconEntry {
    pub fn new(
        masculine_singular: impl Into<String>,
        masculine_plural: impl Into<String>,
        feminine_singular: impl Into<String>,
        feminine_plural: impl Into<String>,
    ) -> Self {
        LexiconEntry {
            masculine_singular: masculine_singular.into(),
            masculine_plural: masculine_plural.into(),
            feminine_singular: feminine_singular.into(),
            feminine_plural: feminine_plural.into(),
        }
    }
}

/// Noun lexicon.
///
/// Maps masculine singular and plural forms to their feminine
/// counterparts. All forms are stored in lowercase. A form can occur
/// in both the singular and the plural column, lookups are always
/// for a specific `Number`.
#[derive(Clone, Debug, Default)]
pub struct Lexicon {
    singular: HashMap<String, String>,
    plural: HashMap<String, String>,
}

impl Lexicon {
    /// Construct a lexicon from its entries.
    ///
    /// Empty cells are ignored. Fails when a masculine form is listed
    /// twice in the same column with different feminine forms.
    pub fn new<I>(entries: I) -> Result<Self, LexiconError>
    where
        I: IntoIterator<Item = LexiconEntry>,
    {
        let mut lexicon = Lexicon::default();

        for entry in entries {
            Self::insert(
                &mut lexicon.singular,
                &entry.masculine_singular,
                &entry.feminine_singular,
            )?;
            Self::insert(
                &mut lexicon.plural,
                &entry.masculine_plural,
                &entry.feminine_plural,
            )?;
        }

        Ok(lexicon)
    }

    /// Read a lexicon in CSV format.
    ///
    /// The CSV data must have the columns `maschile_singolare`,
    /// `maschile_plurale`, `femminile_singolare`, and
    /// `femminile_plurale`.
    pub fn from_csv_read(read: impl Read) -> Result<Self, LexiconError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(read);

        let entries = reader
            .deserialize()
            .collect::<Result<Vec<LexiconEntry>, _>>()?;

        Self::new(entries)
    }

    /// Open a lexicon in CSV format.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        let f = File::open(path)?;
        Self::from_csv_read(BufReader::new(f))
    }

    /// Get the feminine form of a masculine form.
    ///
    /// `masculine` must be lowercase.
    pub fn feminine(&self, masculine: &str, number: Number) -> Option<&str> {
        self.column(number).get(masculine).map(String::as_str)
    }

    /// The lexicon columns in which a masculine form occurs.
    pub fn numbers(&self, masculine: &str) -> Vec<Number> {
        Number::ALL
            .iter()
            .copied()
            .filter(|&number| self.column(number).contains_key(masculine))
            .collect()
    }

    /// The number of masculine forms in the lexicon.
    pub fn len(&self) -> usize {
        self.singular.len() + self.plural.len()
    }

    pub fn is_empty(&self) -> bool {
        self.singular.is_empty() && self.plural.is_empty()
    }

    fn column(&self, number: Number) -> &HashMap<String, String> {
        match number {
            Number::Singular => &self.singular,
            Number::Plural => &self.plural,
        }
    }

    fn insert(
        column: &mut HashMap<String, String>,
        masculine: &str,
        feminine: &str,
    ) -> Result<(), LexiconError> {
        let masculine = masculine.to_lowercase();
        let feminine = feminine.to_lowercase();

        if masculine.is_empty() || feminine.is_empty() {
            return Ok(());
        }

        match column.entry(masculine) {
            Entry::Occupied(entry) => {
                if *entry.get() != feminine {
                    return Err(LexiconError::ConflictingEntry {
                        masculine: entry.key().clone(),
                        first: entry.get().clone(),
                        second: feminine,
                    });
                }
            }
            Entry::Vacant(entry) => {
                entry.insert(feminine);
            }
        }

        Ok(())
    }
}

/// Masculine to feminine mapping of function words.
///
/// Used for articles (including prepositions fused with an article)
/// and possessive adjectives.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FormMap(HashMap<String, String>);

impl FormMap {
    /// Italian definite and indefinite articles, and fused prepositions.
    pub fn articles() -> Self {
        Self::from_static(&ARTICLES)
    }

    /// Italian possessive adjectives.
    pub fn possessive_adjectives() -> Self {
        Self::from_static(&POSSESSIVE_ADJECTIVES)
    }

    /// Add or replace mappings.
    pub fn extend<I, K, V>(&mut self, mappings: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.0.extend(
            mappings
                .into_iter()
                .map(|(k, v)| (k.as_ref().to_lowercase(), v.as_ref().to_lowercase())),
        );
    }

    /// Get the feminine form of a lowercase masculine form.
    pub fn feminine(&self, masculine: &str) -> Option<&str> {
        self.0.get(masculine).map(String::as_str)
    }

    fn from_static(map: &HashMap<&'static str, &'static str>) -> Self {
        FormMap(
            map.iter()
                .map(|(&k, &v)| (k.to_owned(), v.to_owned()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use maplit::hashmap;

    use super::{FormMap, Lexicon, LexiconEntry};
    use crate::error::LexiconError;
    use crate::graph::Number;

    static NOUNS: &str = include_str!("../testdata/nouns.csv");

    #[test]
    fn reads_csv_lexicon() {
        let lexicon = Lexicon::from_csv_read(NOUNS.as_bytes()).unwrap();

        assert_eq!(lexicon.feminine("medico", Number::Singular), Some("medica"));
        assert_eq!(lexicon.feminine("medici", Number::Plural), Some("mediche"));
        assert_eq!(
            lexicon.feminine("scrittore", Number::Singular),
            Some("scrittrice")
        );
        assert_eq!(lexicon.feminine("medico", Number::Plural), None);
        assert_eq!(lexicon.feminine("tavolo", Number::Singular), None);
    }

    #[test]
    fn forms_are_lowercased() {
        let lexicon =
            Lexicon::new(vec![LexiconEntry::new("Dottore", "Dottori", "Dottoressa", "Dottoresse")])
                .unwrap();

        assert_eq!(
            lexicon.feminine("dottore", Number::Singular),
            Some("dottoressa")
        );
        assert_eq!(lexicon.feminine("Dottore", Number::Singular), None);
    }

    #[test]
    fn numbers_of_form() {
        let lexicon = Lexicon::new(vec![
            LexiconEntry::new("medico", "medici", "medica", "mediche"),
            LexiconEntry::new("cantante", "cantanti", "cantante", "cantanti"),
            LexiconEntry::new("xy", "xy", "xa", "xe"),
        ])
        .unwrap();

        assert_eq!(lexicon.numbers("medico"), vec![Number::Singular]);
        assert_eq!(lexicon.numbers("medici"), vec![Number::Plural]);
        assert_eq!(
            lexicon.numbers("xy"),
            vec![Number::Singular, Number::Plural]
        );
        assert!(lexicon.numbers("medica").is_empty());
    }

    #[test]
    fn empty_cells_are_skipped() {
        let lexicon = Lexicon::new(vec![LexiconEntry::new("papa", "", "papessa", "")]).unwrap();

        assert_eq!(lexicon.len(), 1);
        assert!(lexicon.numbers("").is_empty());
    }

    #[test]
    fn duplicate_entries() {
        // Exact duplicates are harmless.
        assert!(Lexicon::new(vec![
            LexiconEntry::new("medico", "medici", "medica", "mediche"),
            LexiconEntry::new("Medico", "medici", "medica", "mediche"),
        ])
        .is_ok());

        let err = Lexicon::new(vec![
            LexiconEntry::new("medico", "medici", "medica", "mediche"),
            LexiconEntry::new("medico", "medici", "medichessa", "mediche"),
        ])
        .unwrap_err();

        match err {
            LexiconError::ConflictingEntry {
                masculine,
                first,
                second,
            } => {
                assert_eq!(masculine, "medico");
                assert_eq!(first, "medica");
                assert_eq!(second, "medichessa");
            }
            err => panic!("Unexpected error: {}", err),
        }
    }

    #[test]
    fn missing_column_is_an_error() {
        let data = "maschile_singolare,maschile_plurale,femminile_singolare\nmedico,medici,medica\n";
        assert!(matches!(
            Lexicon::from_csv_read(data.as_bytes()),
            Err(LexiconError::Csv(_))
        ));
    }

    #[test]
    fn form_maps() {
        let mut articles = FormMap::articles();
        assert_eq!(articles.feminine("il"), Some("la"));
        assert_eq!(articles.feminine("degli"), Some("delle"));
        assert_eq!(articles.feminine("la"), None);

        articles.extend(hashmap! { "Codesto" => "Codesta", "il" => "la" });
        assert_eq!(articles.feminine("codesto"), Some("codesta"));

        let adjectives = FormMap::possessive_adjectives();
        assert_eq!(adjectives.feminine("suo"), Some("sua"));
        assert_eq!(adjectives.feminine("nostri"), Some("nostre"));
    }
}
