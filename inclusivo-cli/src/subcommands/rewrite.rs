use std::io::{BufWriter, Write};

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use conllu::io::{ReadSentence, Reader};
use inclusivo::rewrite::RewriteSpan;
use inclusivo::suggest::Suggester;
use stdinout::{Input, Output};

use crate::io::{load_suggester, open_input};
use crate::progress::SuggesterSpeed;
use crate::traits::InclusivoApp;

const CONFIG: &str = "CONFIG";
const INPUT: &str = "INPUT";
const OUTPUT: &str = "OUTPUT";
const REPORT: &str = "REPORT";

pub struct RewriteApp {
    config: String,
    input: Option<String>,
    output: Option<String>,
    report: bool,
}

impl RewriteApp {
    fn process<R, W>(&self, suggester: &Suggester, read: R, mut write: W) -> Result<()>
    where
        R: ReadSentence,
        W: Write,
    {
        let mut speed = SuggesterSpeed::new();

        for sentence in read.sentences() {
            let sentence = sentence.context("Cannot parse sentence")?;

            let suggestion = suggester
                .suggest(&sentence)
                .context("Cannot rewrite sentence")?;

            speed.count_sentence(suggestion.spans().iter().any(RewriteSpan::is_change));

            if self.report {
                eprint!("{}", suggestion.report());
            }

            writeln!(write, "{}", suggestion.text()).context("Cannot write suggestion")?;
        }

        write.flush().context("Cannot flush output")?;

        Ok(())
    }
}

impl InclusivoApp for RewriteApp {
    fn app() -> Command {
        Command::new("rewrite")
            .arg_required_else_help(true)
            .about("Rewrite sentences with gender-inclusive forms")
            .arg(
                Arg::new(CONFIG)
                    .help("Inclusivo configuration file")
                    .index(1)
                    .required(true),
            )
            .arg(Arg::new(INPUT).help("Input data (CoNLL-U)").index(2))
            .arg(Arg::new(OUTPUT).help("Output data").index(3).num_args(1))
            .arg(
                Arg::new(REPORT)
                    .long("report")
                    .action(ArgAction::SetTrue)
                    .help("Write the decisions for each sentence to stderr"),
            )
    }

    fn parse(matches: &ArgMatches) -> Result<Self> {
        let config = matches.get_one::<String>(CONFIG).unwrap().into();
        let input = matches.get_one::<String>(INPUT).map(ToOwned::to_owned);
        let output = matches.get_one::<String>(OUTPUT).map(ToOwned::to_owned);
        let report = matches.get_flag(REPORT);

        Ok(RewriteApp {
            config,
            input,
            output,
            report,
        })
    }

    fn run(&self) -> Result<()> {
        let suggester = load_suggester(&self.config)?;

        let input = Input::from(self.input.as_ref());
        let reader = Reader::new(open_input(&input, self.input.as_deref())?);

        let output = Output::from(self.output.as_ref());
        let writer = BufWriter::new(output.write().context("Cannot open output for writing")?);

        self.process(&suggester, reader, writer)
    }
}
