use crate::demo::run_demo;
use clap::{Args, Parser, Subcommand, ValueEnum};
use loan_approval::config::AppConfig;
use loan_approval::error::AppError;
use loan_approval::telemetry;
use loan_approval::workflows::loan::{handle_feedback, LoanApprovalPipeline};
use serde_json::json;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "Loan Approval",
    about = "Validate loan applicant batches and report eligibility from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate an applicant batch and print the report
    Evaluate(EvaluateArgs),
    /// Respond to an analysis rating
    Feedback(FeedbackArgs),
    /// Run the bundled sample batches (default command)
    Demo,
}

#[derive(Args, Debug)]
struct EvaluateArgs {
    /// Input format of the batch: json or csv
    #[arg(long, short)]
    format: String,
    /// Read the batch from this file instead of stdin
    #[arg(long, short)]
    input: Option<PathBuf>,
    /// Report style written to stdout
    #[arg(long, value_enum, default_value_t = OutputStyle::Markdown)]
    output: OutputStyle,
}

#[derive(Args, Debug)]
struct FeedbackArgs {
    /// Rating of the analysis, 1-5
    rating: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputStyle {
    Markdown,
    Json,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    debug!(?config.environment, "configuration loaded");

    let pipeline = LoanApprovalPipeline::new(config.eligibility);
    debug!(thresholds = ?pipeline.classifier().config(), "eligibility rules armed");

    match cli.command.unwrap_or(Command::Demo) {
        Command::Evaluate(args) => run_evaluate(&pipeline, args),
        Command::Feedback(args) => {
            println!("{}", handle_feedback(args.rating));
            Ok(())
        }
        Command::Demo => {
            run_demo(&pipeline);
            Ok(())
        }
    }
}

fn run_evaluate(pipeline: &LoanApprovalPipeline, args: EvaluateArgs) -> Result<(), AppError> {
    let EvaluateArgs {
        format,
        input,
        output,
    } = args;

    let raw = read_input(input.as_deref())?;
    println!("{}", render_evaluation(pipeline, &raw, &format, output)?);
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String, io::Error> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn render_evaluation(
    pipeline: &LoanApprovalPipeline,
    raw: &str,
    format: &str,
    style: OutputStyle,
) -> Result<String, AppError> {
    match style {
        OutputStyle::Markdown => Ok(pipeline.process_input(raw, format)),
        OutputStyle::Json => {
            let body = match pipeline.evaluate(raw, format) {
                Ok(assessment) => serde_json::to_value(assessment.view())?,
                Err(error) => json!({ "error": error.to_string() }),
            };
            Ok(serde_json::to_string_pretty(&body)?)
        }
    }
}
