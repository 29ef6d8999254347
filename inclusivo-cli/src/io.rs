use std::fs::File;
use std::io::{BufRead, BufReader};

use anyhow::{Context, Result};
use inclusivo::config::{Config, TomlRead};
use inclusivo::suggest::Suggester;
use stdinout::Input;

use crate::progress::ReadProgress;

pub fn load_config(config_path: &str) -> Result<Config> {
    let config_file = File::open(config_path)
        .context(format!("Cannot open configuration file '{}'", &config_path))?;
    let mut config = Config::from_toml_read(config_file)
        .context(format!("Cannot parse configuration file: {}", config_path))?;
    config.relativize_paths(config_path).context(format!(
        "Cannot relativize paths in configuration file: {}",
        config_path
    ))?;

    Ok(config)
}

/// Load the configuration and construct a suggester from it.
pub fn load_suggester(config_path: &str) -> Result<Suggester> {
    let config = load_config(config_path)?;
    let suggester = config.suggester().context("Cannot construct suggester")?;

    log::info!(
        "Loaded lexicon '{}' with {} masculine forms",
        config.lexicon.nouns,
        suggester.lexicon().len()
    );

    Ok(suggester)
}

/// Open the input for reading.
///
/// A progress bar is shown when reading from a file. Standard input is
/// used when no path is given.
pub fn open_input<'a>(input: &'a Input, path: Option<&str>) -> Result<Box<dyn BufRead + 'a>> {
    match path {
        Some(path) => {
            let f = File::open(path).context(format!("Cannot open '{}' for reading", path))?;
            let read = ReadProgress::new(f).context("Cannot create progress bar")?;
            Ok(Box::new(BufReader::new(read)))
        }
        None => Ok(Box::new(
            input
                .buf_read()
                .context("Cannot open input for reading")?,
        )),
    }
}
