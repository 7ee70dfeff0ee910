// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands, `prepare` and `classify`,
// and their flags. Defaults reproduce the file names and
// constants of the batch jobs the tool replaces.

use clap::{Args, Subcommand};

use crate::application::classify_use_case::ClassifyConfig;
use crate::application::prepare_use_case::PrepareConfig;
use crate::data::{
    chunker::DEFAULT_CHUNK_SIZE,
    sampler::{DEFAULT_PER_YEAR, DEFAULT_SEED},
};
use crate::infra::token_counter::{DEFAULT_COST_PER_MILLION, DEFAULT_ENCODING};
use crate::llm::{openai::DEFAULT_BASE_URL, prompt::DEFAULT_MODEL};

/// The two pipeline stages
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Clean, sample and segment raw filings into a sentence table
    Prepare(PrepareArgs),

    /// Classify prepared sentences with a chat-completion model
    Classify(ClassifyArgs),
}

/// Arguments for the `prepare` command.
#[derive(Args, Debug)]
pub struct PrepareArgs {
    /// Raw filings CSV with `filename`, `date` and `mda` columns
    #[arg(long, default_value = "10ks_mda.csv")]
    pub input: String,

    /// Where to write the sentence table
    #[arg(long, default_value = "samples_cleaned.csv")]
    pub output: String,

    /// Maximum number of filings kept per year
    #[arg(long, default_value_t = DEFAULT_PER_YEAR)]
    pub per_year: usize,

    /// Seed for the per-year sampler
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Input price in USD per million tokens
    #[arg(long, default_value_t = DEFAULT_COST_PER_MILLION)]
    pub cost_per_million: f64,

    /// tiktoken encoding used for token counts
    #[arg(long, default_value = DEFAULT_ENCODING)]
    pub encoding: String,

    /// Count tokens with a HuggingFace tokenizer.json instead of a tiktoken encoding
    #[arg(long)]
    pub tokenizer_file: Option<String>,

    /// Optional CSV with token and cost totals per filing
    #[arg(long)]
    pub cost_report: Option<String>,
}

impl From<PrepareArgs> for PrepareConfig {
    fn from(a: PrepareArgs) -> Self {
        PrepareConfig {
            input:            a.input,
            output:           a.output,
            per_year:         a.per_year,
            seed:             a.seed,
            cost_per_million: a.cost_per_million,
            cost_report:      a.cost_report,
        }
    }
}

/// Arguments for the `classify` command.
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Sentence table produced by `prepare`
    #[arg(long, default_value = "samples_cleaned.csv")]
    pub input: String,

    /// Where to write the annotated sentences
    #[arg(long, default_value = "forward_looking_df.csv")]
    pub output: String,

    /// Chat-completion model name
    #[arg(long, default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Sentences per request
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
    pub chunk_size: usize,

    /// Base URL of the OpenAI-compatible API
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// API key for the chat-completion service
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 120)]
    pub timeout_secs: u64,

    /// Optional JSON file with the per-chunk outcome report
    #[arg(long)]
    pub report: Option<String>,
}

impl From<ClassifyArgs> for ClassifyConfig {
    fn from(a: ClassifyArgs) -> Self {
        ClassifyConfig {
            input:      a.input,
            output:     a.output,
            chunk_size: a.chunk_size,
            report:     a.report,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;

    #[test]
    fn test_prepare_defaults_match_batch_job() {
        let cli = Cli::try_parse_from(["mda-annotator", "prepare"]).unwrap();
        let Commands::Prepare(args) = cli.command else {
            panic!("expected prepare");
        };
        let cfg: PrepareConfig = args.into();
        assert_eq!(cfg.input, "10ks_mda.csv");
        assert_eq!(cfg.output, "samples_cleaned.csv");
        assert_eq!(cfg.per_year, 100);
        assert_eq!(cfg.seed, 42);
        assert_eq!(cfg.cost_per_million, 2.5);
    }

    #[test]
    fn test_classify_takes_explicit_key() {
        let cli = Cli::try_parse_from([
            "mda-annotator", "classify", "--api-key", "sk-test", "--chunk-size", "5",
        ])
        .unwrap();
        let Commands::Classify(args) = cli.command else {
            panic!("expected classify");
        };
        assert_eq!(args.api_key, "sk-test");
        assert_eq!(args.model, "gpt-4o-mini");
        let cfg: ClassifyConfig = args.into();
        assert_eq!(cfg.chunk_size, 5);
        assert_eq!(cfg.output, "forward_looking_df.csv");
    }
}
