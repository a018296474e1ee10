//! Extract command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{
    JsonFormatter, MarkdownFormatter, OutputFormat, OutputFormatter, SortOrder, TextFormatter,
};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use keywords_core::{Config, Extractor, KeywordScores, Order, ScoredKeyword, StopwordList};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Arguments for the extract command
#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format [default: text]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Stoplist file (default: embedded English list)
    #[arg(short, long, value_name = "FILE")]
    pub stopwords: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Keywords per document, 0 for all [default: 10]
    #[arg(short = 'n', long, value_name = "N")]
    pub top: Option<usize>,

    /// Ranking order [default: desc]
    #[arg(long, value_enum)]
    pub order: Option<SortOrder>,

    /// Drop keywords scoring below this value
    #[arg(long, value_name = "SCORE")]
    pub min_score: Option<f64>,

    /// Worker threads, 0 for one per core
    #[arg(long, value_name = "N")]
    pub threads: Option<usize>,

    /// Accept input files without a .txt extension
    #[arg(long)]
    pub any_extension: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Output settings after merging flags over the config file
#[derive(Debug, Clone, PartialEq)]
struct Settings {
    format: OutputFormat,
    top: usize,
    order: Order,
    min_score: Option<f64>,
    pretty_json: bool,
    threads: usize,
}

impl ExtractArgs {
    /// Execute the extract command
    pub fn execute(&self) -> Result<()> {
        self.init_logging()?;

        log::info!("Starting keyword extraction");
        log::debug!("Arguments: {:?}", self);

        let file_config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };
        let settings = self.settings(&file_config);
        let extractor = self.build_extractor(&file_config)?;
        log::info!("Using {} stopwords", extractor.stopwords().len());

        let files = resolve_patterns(&self.input)?;
        log::info!("Found {} file(s) to process", files.len());

        let mut progress = ProgressReporter::new(!self.quiet && files.len() > 1);
        progress.init_files(files.len() as u64);

        let mut documents = Vec::with_capacity(files.len());
        for path in &files {
            documents.push(FileReader::read_document(path, self.any_extension)?);
            progress.file_completed(&path.display().to_string());
        }

        progress.set_message("Extracting keywords");
        let results = run_extraction(&extractor, &documents, settings.threads)?;
        progress.finish();

        let writer: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout().lock()),
        };
        let mut formatter = create_formatter(&settings, writer, files.len() > 1);

        for (path, scores) in files.iter().zip(&results) {
            let keywords = select_keywords(scores, &settings);
            log::debug!(
                "{}: {} candidates, {} shown",
                path.display(),
                scores.len(),
                keywords.len()
            );
            formatter.format_document(&path.display().to_string(), &keywords)?;
        }
        formatter.finish()?;

        log::info!("Processed {} file(s)", files.len());
        Ok(())
    }

    /// Merge command-line flags over config file values
    fn settings(&self, config: &CliConfig) -> Settings {
        Settings {
            format: self.format.unwrap_or(config.output.format),
            top: self.top.unwrap_or(config.output.top),
            order: self.order.unwrap_or(config.output.order).into(),
            min_score: self.min_score.or(config.output.min_score),
            pretty_json: config.output.pretty_json,
            threads: self.threads.unwrap_or(config.performance.threads),
        }
    }

    /// Select the stoplist and compile the extractor
    fn build_extractor(&self, config: &CliConfig) -> Result<Extractor> {
        let stopwords = match (&self.stopwords, &config.extraction.stopwords) {
            (Some(path), _) => FileReader::read_stoplist(path)?,
            (None, Some(path)) => {
                FileReader::read_stoplist(&config_relative(self.config.as_deref(), path))?
            }
            (None, None) => StopwordList::english(),
        };

        let config = Config::builder()
            .stopwords(stopwords.iter())
            .extend_stopwords(&config.extraction.extra_stopwords)
            .build();

        Extractor::with_config(config).map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when called more than once
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }

        Ok(())
    }
}

/// Resolve a stoplist path from the config file against the file's directory
fn config_relative(config_path: Option<&Path>, path: &Path) -> PathBuf {
    match config_path.and_then(Path::parent) {
        Some(dir) if path.is_relative() => dir.join(path),
        _ => path.to_path_buf(),
    }
}

/// Run the extractor over every document, on a dedicated pool when
/// `threads` is non-zero
fn run_extraction(
    extractor: &Extractor,
    documents: &[String],
    threads: usize,
) -> Result<Vec<KeywordScores>> {
    let results = if threads > 0 {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .context("Failed to build thread pool")?;
        pool.install(|| extractor.run_many(documents))
    } else {
        extractor.run_many(documents)
    };

    results.map_err(|e| CliError::ExtractionError(e.to_string()).into())
}

/// Rank, filter and truncate the keywords of one document.
/// Whitespace-only candidates are never shown.
fn select_keywords(scores: &KeywordScores, settings: &Settings) -> Vec<ScoredKeyword> {
    let limit = if settings.top == 0 {
        usize::MAX
    } else {
        settings.top
    };

    scores
        .ranked(settings.order)
        .into_iter()
        .filter(|keyword| !keyword.phrase.trim().is_empty())
        .filter(|keyword| settings.min_score.map_or(true, |min| keyword.score >= min))
        .take(limit)
        .collect()
}

fn create_formatter<'w>(
    settings: &Settings,
    writer: Box<dyn Write + 'w>,
    headers: bool,
) -> Box<dyn OutputFormatter + 'w> {
    match settings.format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer, headers)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, settings.pretty_json)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}
