// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction, parsed with `clap`.
// All pipeline logic lives in Layer 2 (application).
//
// Two commands are supported, one per batch stage:
//   1. `prepare`  — clean, sample and segment raw MD&A filings,
//                   then estimate the token cost per sentence
//   2. `classify` — send the prepared sentences to the LLM in
//                   chunks and write the four labels per sentence
//
// The stages only share the intermediate CSV file.

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{ClassifyArgs, Commands, PrepareArgs};

use crate::data::segmenter::UnicodeSentenceSegmenter;
use crate::domain::traits::TokenCounter;
use crate::infra::token_counter::{HfTokenizerCounter, TiktokenCounter};
use crate::llm::{classifier::LlmSentenceClassifier, openai::OpenAiClient};

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "mda-annotator",
    version,
    about = "Prepare MD&A sentences from annual filings and classify them with an LLM."
)]
pub struct Cli {
    /// The stage to run (prepare or classify)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Route the subcommand to its use case.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Prepare(args)  => run_prepare(args),
            Commands::Classify(args) => run_classify(args),
        }
    }
}

/// Handles the `prepare` subcommand.
/// Builds the segmenter and token counter, then hands off to Layer 2.
fn run_prepare(args: PrepareArgs) -> Result<()> {
    use crate::application::prepare_use_case::PrepareUseCase;

    tracing::info!("Preparing sentences from '{}'", args.input);

    // Pick the encoder: a HuggingFace tokenizer file if given, else tiktoken
    let counter: Box<dyn TokenCounter> = match &args.tokenizer_file {
        Some(path) => Box::new(HfTokenizerCounter::from_file(path)?),
        None       => Box::new(TiktokenCounter::by_name(&args.encoding)?),
    };
    let segmenter = Box::new(UnicodeSentenceSegmenter::new());

    let use_case = PrepareUseCase::new(args.into(), segmenter, counter);
    let summary  = use_case.execute()?;

    println!(
        "Prepared {} sentences from {} filings. Estimated input cost: ${:.4}",
        summary.sentence_count,
        summary.filings.len(),
        summary.total_cost,
    );
    Ok(())
}

/// Handles the `classify` subcommand.
/// Builds the HTTP client for the chat-completion service and runs the batches.
fn run_classify(args: ClassifyArgs) -> Result<()> {
    use crate::application::classify_use_case::ClassifyUseCase;

    tracing::info!("Classifying sentences from '{}'", args.input);

    let client = OpenAiClient::new(
        &args.base_url,
        args.api_key.clone(),
        args.timeout_secs,
    )?;
    let classifier = Box::new(LlmSentenceClassifier::new(client, args.model.clone()));

    let use_case = ClassifyUseCase::new(args.into(), classifier);
    let report   = use_case.execute()?;

    println!(
        "Classified {} of {} sentences ({} chunks failed).",
        report.annotated_sentences,
        report.total_sentences,
        report.failed_chunks(),
    );
    Ok(())
}
