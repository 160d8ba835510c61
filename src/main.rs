// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use indicatif::{ProgressBar, ProgressStyle};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, warn};
use std::io::Write;
use std::path::Path;
use std::time::Duration;

use explainofun::app_config::{self, Config};
use explainofun::app_state::MemeCard;
use explainofun::content::{PersonaVoice, ReadingLevelMode};
use explainofun::generation::{GeneratedExplanation, ScriptSegment};
use explainofun::{AppError, Controller, MemeTemplate};

/// CLI Wrapper for ReadingLevelMode to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliMode {
    Eli5,
    Eli12,
    Eli20,
    Shower,
}

impl From<CliMode> for ReadingLevelMode {
    fn from(cli_mode: CliMode) -> Self {
        match cli_mode {
            CliMode::Eli5 => ReadingLevelMode::Simple,
            CliMode::Eli12 => ReadingLevelMode::Intermediate,
            CliMode::Eli20 => ReadingLevelMode::Advanced,
            CliMode::Shower => ReadingLevelMode::Tangential,
        }
    }
}

/// CLI Wrapper for PersonaVoice to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliPersona {
    Professor,
    Geek,
    Genz,
    Comedian,
}

impl From<CliPersona> for PersonaVoice {
    fn from(cli_persona: CliPersona) -> Self {
        match cli_persona {
            CliPersona::Professor => PersonaVoice::FormalEducator,
            CliPersona::Geek => PersonaVoice::TechnicalEnthusiast,
            CliPersona::Genz => PersonaVoice::InformalYouth,
            CliPersona::Comedian => PersonaVoice::Humorous,
        }
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Explain a topic (default command)
    Explain(ExplainArgs),

    /// Explain a topic and show its meme plus shuffled alternatives
    Meme {
        /// Topic to make a meme about
        #[arg(value_name = "TOPIC")]
        topic: String,

        /// Persona whose caption is used
        #[arg(short, long, value_enum)]
        persona: Option<CliPersona>,

        /// Number of shuffled alternatives to show
        #[arg(short, long, default_value_t = 3)]
        shuffle: usize,
    },

    /// Show a few trending topics
    Trending {
        /// How many topics to show
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },

    /// List explanation modes and personas
    Modes,

    /// Generate shell completions for explainofun
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug, Clone)]
struct ExplainArgs {
    /// Topic to explain
    #[arg(value_name = "TOPIC")]
    topic: String,

    /// Explanation mode (reading level)
    #[arg(short, long, value_enum)]
    mode: Option<CliMode>,

    /// Persona voice
    #[arg(short, long, value_enum)]
    persona: Option<CliPersona>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Override the simulated delay in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,
}

/// Explain-O-Fun - explanations in any voice, plus scripts and memes
#[derive(Parser, Debug)]
#[command(name = "explainofun")]
#[command(author = "Explain-O-Fun Team")]
#[command(version = "1.0.0")]
#[command(about = "Explain any topic at any level, in any voice")]
#[command(long_about = "Explain-O-Fun breaks any topic down at a chosen reading level and in a chosen persona,
then turns it into a short video script and a meme caption.

EXAMPLES:
    explainofun \"Black Holes\"                      # ELI5 explanation by the professor
    explainofun explain -m eli20 -p geek \"Quantum Computing\"
    explainofun explain --json \"Blockchain\"       # Machine-readable output
    explainofun meme -p genz -s 5 \"Dark Matter\"   # Caption plus five shuffled memes
    explainofun trending -n 3
    explainofun completions bash > explainofun.bash

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default one
    will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Topic to explain when no subcommand is given
    #[arg(value_name = "TOPIC")]
    topic: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json", global = true)]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum, global = true)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Emoji and ANSI color for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("❌", "1;31"),
            Level::Warn => ("🚧", "1;33"),
            Level::Info => ("✨", "1;32"),
            Level::Debug => ("🔍", "1;36"),
            Level::Trace => ("📋", "1;35"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (emoji, color) = Self::style_for_level(record.level());
            let _ = writeln!(
                std::io::stderr(),
                "\x1B[{}m{} {} {}\x1B[0m",
                color, now, emoji, record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Start at trace so the level can be lowered once the config is loaded
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    let command = match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "explainofun", &mut std::io::stdout());
            return Ok(());
        }
        Some(Commands::Modes) => {
            print_modes();
            return Ok(());
        }
        Some(command) => command,
        None => {
            let topic = cli
                .topic
                .ok_or_else(|| anyhow!("TOPIC is required when no subcommand is specified"))?;
            Commands::Explain(ExplainArgs {
                topic,
                mode: None,
                persona: None,
                json: false,
                delay_ms: None,
            })
        }
    };

    let config = load_config(&cli.config_path, cli.log_level)?;

    match command {
        Commands::Explain(args) => run_explain(config, args).await,
        Commands::Meme { topic, persona, shuffle } => run_meme(config, &topic, persona, shuffle).await,
        Commands::Trending { count } => run_trending(config, count),
        Commands::Modes | Commands::Completions { .. } => Ok(()),
    }
}

/// Load or create the configuration, then apply the log level.
fn load_config(config_path: &str, cli_log_level: Option<CliLogLevel>) -> Result<Config> {
    let mut config = if Path::new(config_path).exists() {
        Config::from_file(config_path)?
    } else {
        warn!("Config file not found at '{}', creating default config.", config_path);
        let config = Config::default();
        config.save(config_path)?;
        config
    };

    if let Some(log_level) = cli_log_level {
        config.log_level = log_level.into();
    }
    log::set_max_level(level_filter(&config.log_level));

    config.validate().context("Configuration validation failed")?;
    Ok(config)
}

async fn run_explain(mut config: Config, args: ExplainArgs) -> Result<()> {
    if let Some(delay_ms) = args.delay_ms {
        config.generation.simulated_delay_ms = delay_ms;
    }
    let controller = Controller::with_config(config)?;
    if let Some(mode) = args.mode {
        controller.set_mode(mode.into());
    }
    if let Some(persona) = args.persona {
        controller.set_persona(persona.into());
    }

    let result = explain_with_spinner(&controller, &args.topic).await?;

    if args.json {
        let json = serde_json::to_string_pretty(&result).context("Failed to serialize explanation")?;
        println!("{}", json);
    } else {
        print_explanation(&result, controller.current_meme_template().as_ref());
    }
    Ok(())
}

async fn run_meme(config: Config, topic: &str, persona: Option<CliPersona>, shuffle: usize) -> Result<()> {
    let controller = Controller::with_config(config)?;
    if let Some(persona) = persona {
        controller.set_persona(persona.into());
    }

    let result = explain_with_spinner(&controller, topic).await?;
    if let (Some(caption), Some(template)) = (&result.caption_content, controller.current_meme_template()) {
        println!("{} / {}", caption.top_text, caption.bottom_text);
        println!("   template: {:?} ({})", template.category, template.image);
    }

    let mut rng = rand::rng();
    for index in 1..=shuffle {
        match controller.shuffle_meme(&mut rng) {
            Some(card) => print_meme_card(index, &card),
            None => break,
        }
    }
    Ok(())
}

fn run_trending(config: Config, count: Option<usize>) -> Result<()> {
    let controller = Controller::with_config(config)?;
    let topics = match count {
        Some(count) => explainofun::trending::sample_trending(&mut rand::rng(), count),
        None => controller.trending(&mut rand::rng()),
    };
    for topic in topics {
        println!("🔥 {:>3}  {}", topic.heat, topic.topic);
    }
    Ok(())
}

async fn explain_with_spinner(controller: &Controller, topic: &str) -> Result<GeneratedExplanation> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.magenta} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!("Explaining \"{}\"...", topic));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let outcome = controller.explain(topic).await;
    spinner.finish_and_clear();

    match outcome {
        Ok(Some(result)) => Ok(result),
        Ok(None) => Err(anyhow!("Explanation was superseded by a newer request")),
        Err(AppError::EmptyTopic) => Err(anyhow!("Please enter a topic to explain")),
        Err(error) => Err(anyhow!("Uh oh! Something went wrong: {}", error)),
    }
}

fn print_explanation(result: &GeneratedExplanation, template: Option<&MemeTemplate>) {
    println!(
        "{} {} · {} {}\n",
        result.mode.emoji(),
        result.mode.display_name(),
        result.persona.emoji(),
        result.persona.display_name()
    );
    println!("{}\n", result.text);

    if let Some(script) = &result.short_form_script {
        println!("{} Short video script ({})", script.style.emoji(), script.style.name());
        for segment in script.segments() {
            match segment {
                ScriptSegment::Direction(text) => println!("   [{}]", text),
                ScriptSegment::Spoken(text) => println!("   {}", text),
            }
        }
        println!("   {}\n", script.hashtags.join(" "));
    }

    if let Some(caption) = &result.caption_content {
        println!("🖼  Meme");
        println!("   {}", caption.top_text);
        println!("   {}", caption.bottom_text);
        if let Some(template) = template {
            println!("   template: {:?} ({})", template.category, template.image);
        }
    }
}

fn print_meme_card(index: usize, card: &MemeCard) {
    println!(
        "{:>2}. {} / {}  [{:?}, {}]",
        index, card.caption.top_text, card.caption.bottom_text, card.template.category, card.gradient
    );
}

fn print_modes() {
    println!("Explanation modes:");
    for mode in ReadingLevelMode::ALL {
        println!("  {} {:<7} {:<15} {}", mode.emoji(), mode.id(), mode.display_name(), mode.description());
    }
    println!("\nPersonas:");
    for persona in PersonaVoice::ALL {
        println!(
            "  {} {:<10} {:<15} {}",
            persona.emoji(),
            persona.id(),
            persona.display_name(),
            persona.description()
        );
    }
}
