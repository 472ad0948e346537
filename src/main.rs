use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use recase::cli::output::{self, OutputFormat};
use recase::config::Overrides;
use recase::{source, CaseStyle, Config, Converter, Preset};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "recase")]
#[command(version, about = "Convert identifiers and text between case styles", long_about = None)]
struct Cli {
    /// Strings to convert (reads stdin when no inputs or files are given)
    #[arg(value_name = "INPUTS")]
    inputs: Vec<String>,

    /// Target style (camel, kebab, dot, snake, pascal, constant)
    #[arg(short, long)]
    style: Option<CaseStyle>,

    /// Read inputs from a file (.json files hold a value or an array of values)
    #[arg(short, long = "file", value_name = "PATH")]
    files: Vec<PathBuf>,

    /// Tokenizer rule preset (unified, legacy-camel, legacy-kebab, legacy-dot)
    #[arg(long)]
    preset: Option<Preset>,

    /// Characters that separate words, in addition to whitespace
    #[arg(long, value_name = "CHARS")]
    delimiters: Option<String>,

    /// Do not split between lowercase and uppercase letters
    #[arg(long)]
    no_split_case: bool,

    /// Do not split between letters and digits
    #[arg(long)]
    no_split_digits: bool,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text")]
    format: OutputFormat,

    /// Print the token sequence instead of the converted string
    #[arg(long)]
    tokens: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Exit with code 0 even if some inputs could not be converted
    #[arg(long)]
    no_fail: bool,

    /// Log debug information to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Parser, Debug)]
enum Commands {
    /// List every style with a sample conversion
    Styles {
        /// Text to render in each style
        #[arg(default_value = "first name 2")]
        sample: String,
    },
    /// Print the effective configuration as TOML
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "recase", &mut io::stdout());
        return Ok(());
    }

    let overrides = Overrides {
        style: cli.style,
        preset: cli.preset,
        delimiters: cli.delimiters.clone(),
        no_split_case: cli.no_split_case,
        no_split_digits: cli.no_split_digits,
    };
    let config = Config::load(&overrides)?;
    tracing::debug!(?config, "effective configuration");

    let converter = Converter::new(&config.tokenizer_options(), config.style);

    if let Some(command) = cli.command {
        return handle_command(command, &config, &converter, !cli.no_color);
    }

    let mut entries = source::from_args(&cli.inputs);
    for file_path in &cli.files {
        entries.extend(source::read_file(file_path)?);
    }
    if cli.inputs.is_empty() && cli.files.is_empty() {
        entries = source::read_stdin()?;
    }

    let result = recase::convert_entries(&converter, entries);

    let colored = !cli.no_color;
    {
        let mut stdout = io::stdout().lock();
        let mut stderr = io::stderr().lock();
        output::print_results(
            &mut stdout,
            &mut stderr,
            &result,
            config.style,
            cli.format,
            cli.tokens,
            colored,
        )?;
        if cli.format == OutputFormat::Text {
            output::print_summary(&mut stderr, &result, colored)?;
        }
        stdout.flush()?;
    }

    if result.failed_count > 0 && !cli.no_fail {
        std::process::exit(1);
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    // RUST_LOG wins when set
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "recase=debug" } else { "warn" }));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn handle_command(
    command: Commands,
    config: &Config,
    converter: &Converter,
    colored: bool,
) -> Result<()> {
    match command {
        Commands::Styles { sample } => {
            output::print_styles(&mut io::stdout().lock(), converter, &sample, colored)?;
        }
        Commands::Config => {
            print!("{}", toml::to_string(config)?);
        }
    }
    Ok(())
}
