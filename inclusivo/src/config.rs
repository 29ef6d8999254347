use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::assemble::AssemblerOptions;
use crate::error::InclusivoError;
use crate::lexicon::{FormMap, Lexicon};
use crate::rewrite::{Rewriter, RewriterOptions};
use crate::suggest::Suggester;

/// Lexicon configuration.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LexiconConfig {
    /// CSV file with masculine and feminine noun forms.
    pub nouns: String,

    /// Additional masculine to feminine article mappings.
    #[serde(default)]
    pub articles: HashMap<String, String>,

    /// Additional masculine to feminine possessive adjective mappings.
    #[serde(default)]
    pub adjectives: HashMap<String, String>,
}

/// Suggester configuration.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub lexicon: LexiconConfig,

    #[serde(default)]
    pub rewriter: RewriterOptions,

    #[serde(default)]
    pub assembler: AssemblerOptions,
}

impl Config {
    /// Make configuration paths relative to the configuration file.
    pub fn relativize_paths<P>(&mut self, config_path: P) -> Result<(), InclusivoError>
    where
        P: AsRef<Path>,
    {
        let config_path = config_path.as_ref();

        self.lexicon.nouns = relativize_path(config_path, &self.lexicon.nouns)?;

        Ok(())
    }

    /// Load the noun lexicon.
    pub fn lexicon(&self) -> Result<Lexicon, InclusivoError> {
        Lexicon::open(&self.lexicon.nouns)
            .map_err(|err| InclusivoError::LexiconError(self.lexicon.nouns.clone(), err))
    }

    /// Construct a rewriter with the configured article and adjective
    /// mappings.
    pub fn rewriter(&self) -> Rewriter {
        let mut articles = FormMap::articles();
        articles.extend(&self.lexicon.articles);

        let mut adjectives = FormMap::possessive_adjectives();
        adjectives.extend(&self.lexicon.adjectives);

        Rewriter::new(articles, adjectives, self.rewriter.clone())
    }

    /// Construct a suggester, loading the lexicon.
    pub fn suggester(&self) -> Result<Suggester, InclusivoError> {
        Ok(Suggester::new(
            self.lexicon()?,
            self.rewriter(),
            self.assembler.splice,
        ))
    }
}

pub trait TomlRead
where
    Self: Sized,
{
    fn from_toml_read(read: impl Read) -> Result<Self, InclusivoError>;
}

impl TomlRead for Config {
    fn from_toml_read(mut read: impl Read) -> Result<Self, InclusivoError> {
        let mut data = String::new();
        read.read_to_string(&mut data)?;
        let config: Config = toml::from_str(&data)?;
        Ok(config)
    }
}

fn relativize_path(config_path: &Path, filename: &str) -> Result<String, InclusivoError> {
    if filename.is_empty() {
        return Ok(filename.to_owned());
    }

    let path = Path::new(&filename);

    // Don't touch absolute paths.
    if path.is_absolute() {
        return Ok(filename.to_owned());
    }

    let abs_config_path = config_path.canonicalize()?;
    Ok(abs_config_path
        .parent()
        .ok_or_else(|| {
            InclusivoError::RelativizePathError(format!(
                "Cannot get parent path of the configuration file: {}",
                abs_config_path.to_string_lossy()
            ))
        })?
        .join(path)
        .to_str()
        .ok_or_else(|| {
            InclusivoError::RelativizePathError(format!(
                "Cannot convert parent path to string: {}",
                abs_config_path.to_string_lossy()
            ))
        })?
        .to_owned())
}
