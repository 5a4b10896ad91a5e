use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{ArgAction, Parser, ValueEnum};
use log::{warn, LevelFilter};
use serde::Serialize;

use ngram_lang_core::{BuildReport, Classification, Classifier, Config};

/// Query document looked up in the corpus root when `--query` is not given.
const DEFAULT_QUERY: &str = "mysteryGr.txt";

#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
enum OutputFormat {
    /// Human-readable sentence
    Text,
    /// JSON report with every score
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "ngram-lang")]
#[command(version)]
#[command(about = "Identify the language of a text with character n-gram profiles", long_about = None)]
struct Cli {
    /// Directory holding one subdirectory of training documents per language
    corpus: PathBuf,

    /// N-gram length (default 2)
    n: Option<usize>,

    /// Document to classify (default: <CORPUS>/mysteryGr.txt)
    #[arg(short, long, value_name = "FILE")]
    query: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Extension of training documents, empty for every file
    #[arg(long, value_name = "EXT")]
    extension: Option<String>,

    /// Characters stripped from the end of folder names when printing labels
    #[arg(long, value_name = "LEN")]
    strip_suffix: Option<usize>,

    /// Training threads (0 = one per CPU)
    #[arg(short = 'j', long, value_name = "N")]
    threads: Option<usize>,

    /// Print the similarity of every language
    #[arg(long)]
    scores: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Defaults, then the config file, then individual flags.
    fn config(&self) -> Result<Config, ngram_lang_core::Error> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };
        if let Some(n) = self.n {
            config.n = n;
        }
        if let Some(extension) = &self.extension {
            config.extension = extension.trim_start_matches('.').to_owned();
        }
        if let Some(len) = self.strip_suffix {
            config.label_suffix_len = len;
        }
        if let Some(threads) = self.threads {
            config.threads = threads;
        }
        config.validate()?;
        Ok(config)
    }

    fn query_path(&self) -> PathBuf {
        self.query.clone().unwrap_or_else(|| self.corpus.join(DEFAULT_QUERY))
    }

    fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

#[derive(Serialize)]
struct SkippedEntry<'a> {
    path: &'a Path,
    reason: &'a str,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    label: &'a str,
    display_label: &'a str,
    similarity: f64,
    scores: &'a [ngram_lang_core::Score],
    documents: usize,
    skipped: Vec<SkippedEntry<'a>>,
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = cli.config()?;

    // Train one model per language folder
    let (classifier, report) = Classifier::train(&cli.corpus, &config)?;
    for skipped in &report.skipped {
        warn!("Skipped {}: {}", skipped.path.display(), skipped.reason);
    }

    // Classify the query document
    let result = classifier.classify_file(cli.query_path())?;

    match cli.format {
        OutputFormat::Text => print_text(&classifier, &result, &config, cli.scores),
        OutputFormat::Json => print_json(&classifier, &result, &report, &config)?,
    }

    Ok(())
}

/// Label as printed, with the configured folder suffix removed.
fn display_label<'a>(classifier: &'a Classifier, label: &'a str, config: &Config) -> &'a str {
    classifier
        .store()
        .get(label)
        .map_or(label, |model| model.display_label(config.label_suffix_len))
}

fn print_text(classifier: &Classifier, result: &Classification, config: &Config, with_scores: bool) {
    println!(
        "The mystery text is written in {}.",
        display_label(classifier, &result.label, config)
    );

    if with_scores {
        for score in &result.scores {
            let label = display_label(classifier, &score.label, config);
            match score.similarity {
                Some(similarity) => println!("{:>20}  {:.6}", label, similarity),
                None => println!("{:>20}  undefined", label),
            }
        }
    }
}

fn print_json(
    classifier: &Classifier,
    result: &Classification,
    report: &BuildReport,
    config: &Config,
) -> serde_json::Result<()> {
    let json = JsonReport {
        label: &result.label,
        display_label: display_label(classifier, &result.label, config),
        similarity: result.similarity,
        scores: &result.scores,
        documents: report.documents,
        skipped: report
            .skipped
            .iter()
            .map(|s| SkippedEntry { path: &s.path, reason: &s.reason })
            .collect(),
    };
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
