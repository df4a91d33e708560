use clap::{Parser, ValueEnum};
use porcelain::core::{
    config::PromptConfig,
    error::PorcelainError,
    git::GitRepo,
    output::{print_error, write_line},
    snapshot::Snapshot,
    templates::{render_basic, render_json, render_template, TemplateContext},
};
use std::env;
use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "porcelain")]
#[command(about = "Print a one-line git status for shell prompts")]
#[command(after_help = "Outside of a repository there will be no output.")]
#[command(version)]
struct Cli {
    /// Show output for this path instead of the working directory
    #[arg(long)]
    path: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Fmt)]
    format: OutputFormat,

    /// Template for the fmt output, e.g. "{branch}@{commit}{state}"
    #[arg(long)]
    template: Option<String>,

    /// Number of commit id characters to show
    #[arg(long)]
    short_len: Option<usize>,

    /// Read settings from this file instead of the default config location
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable debug logging to the log file
    #[arg(long)]
    debug: bool,

    /// Write debug logs to stderr instead of the log file
    #[arg(long, requires = "debug")]
    logtostderr: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Formatted prompt line (default)
    Fmt,
    /// Comma separated counts
    Basic,
    /// Full status as JSON
    Json,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        let silent = e
            .downcast_ref::<PorcelainError>()
            .is_some_and(PorcelainError::is_not_a_repository);
        if silent {
            return;
        }
        // Library errors already carry their cause in the message
        print_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let cwd = match &cli.path {
        Some(path) => path.clone(),
        None => env::current_dir()?,
    };

    // Outside a repository nothing else is looked at, not even the config
    let repo = GitRepo::open(&cwd)?;

    let config = match &cli.config {
        Some(path) => PromptConfig::load_from(path)?,
        None => PromptConfig::load()?,
    };

    init_logging(cli, &config)?;
    log::debug!("running porcelain in {}", cwd.display());

    let snapshot = Snapshot::collect(&repo, &config)?;

    let short_len = cli.short_len.unwrap_or(config.short_commit_len);
    let template = cli.template.as_deref().unwrap_or(&config.template);
    let context = TemplateContext::new(&snapshot.status, snapshot.merge_in_progress, short_len);

    let (line, newline) = match cli.format {
        OutputFormat::Fmt => (render_template(template, &context), false),
        OutputFormat::Basic => (render_basic(&context), true),
        OutputFormat::Json => (render_json(&context)?, true),
    };

    write_line(&mut io::stdout().lock(), &line, newline)?;
    Ok(())
}

/// No logger is installed without --debug, so RUST_LOG alone never reaches the
/// prompt. With --debug, RUST_LOG can still change the level.
fn init_logging(cli: &Cli, config: &PromptConfig) -> anyhow::Result<()> {
    if !cli.debug {
        return Ok(());
    }

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"));

    if !cli.logtostderr {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&config.log_file)
            .map_err(|e| {
                anyhow::anyhow!("cannot open log file {}: {e}", config.log_file.display())
            })?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.try_init()?;
    Ok(())
}
