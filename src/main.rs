//! my-mastermind - Main Binary
//!
//! Terminal code-breaking game: guess four distinct digits from 0 to 8

use clap::{Parser, ValueEnum};
use my_mastermind::{
    core::CodeGenerator,
    game::{
        parse_attempt_limit, play, GameConfig, GameEndReason, GameLogger, GameOptions,
        GuessSource, LineSource, OutputFormat, ScriptedSource, VerbosityLevel,
    },
    Result,
};
use std::io::{self, Write};

/// Verbosity level for game output (custom parser supporting both names and numbers)
#[derive(Debug, Clone, Copy)]
struct VerbosityArg(VerbosityLevel);

impl std::str::FromStr for VerbosityArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "silent" | "0" => Ok(VerbosityArg(VerbosityLevel::Silent)),
            "minimal" | "1" => Ok(VerbosityArg(VerbosityLevel::Minimal)),
            "normal" | "2" => Ok(VerbosityArg(VerbosityLevel::Normal)),
            "verbose" | "3" => Ok(VerbosityArg(VerbosityLevel::Verbose)),
            _ => Err(format!(
                "invalid verbosity level '{s}' (expected: silent/0, minimal/1, normal/2, verbose/3)"
            )),
        }
    }
}

impl From<VerbosityArg> for VerbosityLevel {
    fn from(arg: VerbosityArg) -> Self {
        arg.0
    }
}

/// Output format flag
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    /// Plain text prompts and messages
    Text,
    /// One JSON object per event
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Parser)]
#[command(name = "my_mastermind")]
#[command(about = "Find the secret code: four distinct digits from 0 to 8", long_about = None)]
struct Cli {
    /// Secret code (4 distinct digits 0-8); invalid codes are replaced by a random one
    #[arg(short = 'c', value_name = "CODE", allow_hyphen_values = true)]
    code: Option<String>,

    /// Number of valid guesses allowed, read from the leading digits ("5abc" is 5); non-positive values use the default (10)
    #[arg(short = 't', value_name = "ATTEMPTS", allow_hyphen_values = true)]
    attempts: Option<String>,

    /// Set random seed for a reproducible secret
    #[arg(long)]
    seed: Option<u64>,

    /// Play a fixed script of guesses instead of reading stdin (space or comma separated, e.g. "1023,4567")
    #[arg(long, value_name = "GUESSES")]
    guesses: Option<String>,

    /// Verbosity level for game output (0=silent, 1=minimal, 2=normal, 3=verbose)
    #[arg(long, default_value = "normal", short = 'v')]
    verbosity: VerbosityArg,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    output_format: FormatArg,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logger = GameLogger::with_verbosity(cli.verbosity.into());
    logger.set_output_format(cli.output_format.into());

    let mut generator = match cli.seed {
        Some(seed) => CodeGenerator::with_seed(seed),
        None => CodeGenerator::from_clock(),
    };
    logger.verbose(&format!("Using random seed: {}", generator.seed()));

    let attempt_limit = cli.attempts.as_deref().map(parse_attempt_limit);

    let options = GameOptions {
        explicit_secret: cli.code,
        attempt_limit,
    };
    let (config, fallbacks) = GameConfig::resolve(&options, &mut generator);
    for fallback in &fallbacks {
        logger.verbose(&fallback.to_string());
    }
    logger.verbose(&format!("Attempt limit: {}", config.attempt_limit()));

    let mut source: Box<dyn GuessSource> = match cli.guesses.as_deref() {
        Some(script) => Box::new(ScriptedSource::parse(script)),
        None => Box::new(LineSource::stdin()),
    };

    let result = play(&config, source.as_mut(), &mut logger);

    if result.end_reason == GameEndReason::AbortedEarly {
        logger.verbose("Input ended, leaving the game");
    }
    logger.verbose(&format!(
        "Game over: {:?} after {} attempt(s)",
        result.end_reason, result.attempts_used
    ));

    io::stdout().flush()?;
    Ok(())
}
