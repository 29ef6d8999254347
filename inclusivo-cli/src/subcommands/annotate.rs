use std::io::BufWriter;

use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command};
use conllu::io::{ReadSentence, Reader, WriteSentence, Writer};
use inclusivo::rewrite::RewriteSpan;
use inclusivo::suggest::Suggester;
use stdinout::{Input, Output};
use udgraph::graph::Comment;

use crate::io::{load_suggester, open_input};
use crate::progress::SuggesterSpeed;
use crate::traits::InclusivoApp;

const CONFIG: &str = "CONFIG";
const INPUT: &str = "INPUT";
const OUTPUT: &str = "OUTPUT";

/// Comment attribute for the suggestion.
const INCLUSIVE_TEXT: &str = "inclusive_text";

pub struct AnnotateApp {
    config: String,
    input: Option<String>,
    output: Option<String>,
}

impl AnnotateApp {
    fn process<R, W>(&self, suggester: &Suggester, read: R, mut write: W) -> Result<()>
    where
        R: ReadSentence,
        W: WriteSentence,
    {
        let mut speed = SuggesterSpeed::new();

        for sentence in read.sentences() {
            let mut sentence = sentence.context("Cannot parse sentence")?;

            let suggestion = suggester
                .suggest(&sentence)
                .context("Cannot rewrite sentence")?;

            speed.count_sentence(suggestion.spans().iter().any(RewriteSpan::is_change));

            // Replace the suggestion of an earlier run.
            let mut comments = sentence
                .comments()
                .iter()
                .filter(|comment| {
                    !matches!(comment, Comment::AttrVal { attr, .. } if attr == INCLUSIVE_TEXT)
                })
                .cloned()
                .collect::<Vec<_>>();
            comments.push(Comment::AttrVal {
                attr: INCLUSIVE_TEXT.to_string(),
                val: suggestion.into_text(),
            });
            sentence.set_comments(comments);

            write
                .write_sentence(&sentence)
                .context("Cannot write sentence")?;
        }

        Ok(())
    }
}

impl InclusivoApp for AnnotateApp {
    fn app() -> Command {
        Command::new("annotate")
            .arg_required_else_help(true)
            .about("Add gender-inclusive suggestions to a CoNLL-U corpus")
            .arg(
                Arg::new(CONFIG)
                    .help("Inclusivo configuration file")
                    .index(1)
                    .required(true),
            )
            .arg(Arg::new(INPUT).help("Input data").index(2))
            .arg(Arg::new(OUTPUT).help("Output data").index(3).num_args(1))
    }

    fn parse(matches: &ArgMatches) -> Result<Self> {
        let config = matches.get_one::<String>(CONFIG).unwrap().into();
        let input = matches.get_one::<String>(INPUT).map(ToOwned::to_owned);
        let output = matches.get_one::<String>(OUTPUT).map(ToOwned::to_owned);

        Ok(AnnotateApp {
            config,
            input,
            output,
        })
    }

    fn run(&self) -> Result<()> {
        let suggester = load_suggester(&self.config)?;

        let input = Input::from(self.input.as_ref());
        let reader = Reader::new(open_input(&input, self.input.as_deref())?);

        let output = Output::from(self.output.as_ref());
        let writer = Writer::new(BufWriter::new(
            output.write().context("Cannot open output for writing")?,
        ));

        self.process(&suggester, reader, writer)
    }
}
