use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin};
use tracing_subscriber::EnvFilter;

use understanding::config::{InputMode, OutputFormat, RunConfig};
use understanding::outputs::realizer::render_text;
use understanding::questionnaire::prompt::{parse_command, parse_reply, reply_hint, Command};
use understanding::questionnaire::{FlowStep, Questionnaire};
use understanding::telemetry::recorder::TelemetryRecorder;
use understanding::{AnswerSet, GenerationResult};

/// Walks through the questionnaire and shows what might be going on.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Flat JSON answer mapping, e.g. '{"stressed":"yes"}'
    #[arg(long, conflicts_with = "answers_file")]
    answers: Option<String>,

    /// Read the JSON answer mapping from a file
    #[arg(long)]
    answers_file: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

impl From<Args> for RunConfig {
    fn from(args: Args) -> Self {
        let input = match (args.answers, args.answers_file) {
            (Some(raw), _) => InputMode::Inline(raw),
            (None, Some(path)) => InputMode::File(path),
            (None, None) => InputMode::Interactive,
        };
        let output = if args.json { OutputFormat::Json } else { OutputFormat::Text };
        RunConfig { input, output }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr, results to stdout.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = RunConfig::from(Args::parse());

    if let Some(answers) = config.preset_answers()? {
        let evaluation = understanding::evaluate(&answers);
        tracing::debug!(trace = ?evaluation.trace, "generation trace");
        print_result(&evaluation.result, config.output)?;
        return Ok(());
    }

    // Interactive: one questionnaire per run, as many runs as the user wants.
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();
    let mut telemetry = TelemetryRecorder::new();
    while let Some(answers) = run_interactive(&mut lines).await? {
        let evaluation = understanding::evaluate(&answers);
        telemetry.record_all(evaluation.trace.iter().copied());
        print_result(&evaluation.result, config.output)?;

        stdout.write_all(b"\nStart again? [y/n]\n> ").await?;
        stdout.flush().await?;
        let again = lines.next_line().await?;
        if !again.is_some_and(|l| matches!(l.trim().to_ascii_lowercase().as_str(), "y" | "yes")) {
            break;
        }
    }

    let snapshot = telemetry.snapshot();
    tracing::info!(
        generations = snapshot.generations,
        fallbacks = snapshot.fallbacks,
        patience_messages = snapshot.patience_messages,
        "session finished"
    );
    tracing::debug!(?snapshot, "session telemetry");
    Ok(())
}

fn print_result(result: &GenerationResult, format: OutputFormat) -> Result<()> {
    let rendered = match format {
        OutputFormat::Text => render_text(result),
        OutputFormat::Json => serde_json::to_string_pretty(result)?,
    };
    println!("{}", rendered);
    Ok(())
}

/// Returns `None` if the user quits, backs out of the first question, or closes stdin.
async fn run_interactive(lines: &mut Lines<BufReader<Stdin>>) -> Result<Option<AnswerSet>> {
    let mut stdout = tokio::io::stdout();
    let mut flow = Questionnaire::new();
    tracing::info!(run = %flow.run_id.0, "questionnaire started");

    while let Some(question) = flow.current() {
        let header = format!(
            "\nQuestion {} of {} ({:.0}%)\n{}\n{}\n> ",
            flow.index() + 1,
            flow.len(),
            flow.progress(),
            question.prompt,
            reply_hint(question),
        );
        stdout.write_all(header.as_bytes()).await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            return Ok(None);
        };

        match parse_command(&line) {
            Some(Command::Quit) => {
                tracing::info!(run = %flow.run_id.0, "questionnaire abandoned");
                return Ok(None);
            }
            Some(Command::Back) => {
                if matches!(flow.back(), FlowStep::Exited) {
                    return Ok(None);
                }
                continue;
            }
            None => {}
        }

        match parse_reply(question, &line, Local::now().into()) {
            Some(answer) => {
                if let FlowStep::Complete(answers) = flow.answer(answer) {
                    stdout.write_all(b"\n").await?;
                    return Ok(Some(answers));
                }
            }
            None => stdout.write_all(b"Sorry, I didn't understand that.\n").await?,
        }
    }

    Ok(Some(flow.answers().clone()))
}
