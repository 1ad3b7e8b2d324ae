use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use subweave_core::pipeline::convert::{convert, Conversion};
use subweave_core::pipeline::convert_transcript_use_case::ConvertTranscriptUseCase;
use subweave_core::subtitle::domain::block_merger::MergeConfig;
use subweave_core::subtitle::infrastructure::srt_file_writer::SrtFileWriter;
use subweave_core::subtitle::infrastructure::srt_renderer;
use subweave_core::transcript::infrastructure::json_file_reader::JsonFileReader;

/// Speech-recognition JSON to SRT subtitle conversion.
#[derive(Parser)]
#[command(name = "subweave")]
struct Cli {
    /// Input recognition JSON file.
    input: PathBuf,

    /// Output SRT file (omit to print to stdout).
    output: Option<PathBuf>,

    /// Disable merging of consecutive same-speaker blocks.
    #[arg(long)]
    no_merge: bool,

    /// Longest combined span (seconds) two blocks may merge into.
    #[arg(long, default_value = "7.0")]
    max_span: f64,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let config = MergeConfig {
        enabled: !cli.no_merge,
        max_merged_span_secs: cli.max_span,
    };

    let conversion = match &cli.output {
        Some(output) => {
            let use_case = ConvertTranscriptUseCase::new(
                Box::new(JsonFileReader),
                Box::new(SrtFileWriter),
                config,
            );
            use_case.run(&cli.input, output)?
        }
        None => {
            let json = fs::read_to_string(&cli.input)?;
            let conversion = convert(&json, &config)?;
            print!("{}", srt_renderer::render(&conversion.entries));
            conversion
        }
    };

    report(&conversion);
    Ok(())
}

fn report(conversion: &Conversion) {
    log::info!("Confidence score: {:.3}%", conversion.confidence);
    for entry in &conversion.entries {
        log::debug!(
            "entry {}: {} --> {} ({:.2}s)",
            entry.index,
            entry.start,
            entry.end,
            entry.duration().as_seconds()
        );
    }
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !cli.input.exists() {
        return Err(format!("Input file not found: {}", cli.input.display()).into());
    }
    if !(cli.max_span > 0.0) {
        return Err(format!("Max span must be positive, got {}", cli.max_span).into());
    }
    Ok(())
}
