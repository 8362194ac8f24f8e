//! s2kio - Read, check, convert and rewrite S2K table text files

use std::fs::{self, File};
use std::io::{BufWriter, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use s2kio::config::{Config, OutputFormat};
use s2kio::output::{select_table, OutputFactory};
use s2kio::{parse_str, CodecError, Dataset, ProgramControlInfo, SchemaRegistry};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliExportFormat {
    Json,
    Csv,
}

impl From<CliExportFormat> for OutputFormat {
    fn from(f: CliExportFormat) -> Self {
        match f {
            CliExportFormat::Json => OutputFormat::Json,
            CliExportFormat::Csv => OutputFormat::Csv,
        }
    }
}

/// Reader and writer for S2K table text files
#[derive(Parser, Debug)]
#[command(name = "s2kio")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// JSON schema file(s) merged over the built-in tables
    #[arg(long = "schema", global = true)]
    schema: Vec<PathBuf>,

    /// Do not register the built-in tables
    #[arg(long, global = true)]
    no_builtin: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Read a file and print a per-table summary
    Check {
        /// S2K file to read
        file: PathBuf,
    },

    /// Read a file and write it back in canonical form
    Normalize {
        /// S2K file to read
        file: PathBuf,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        control: ControlArgs,
    },

    /// Convert a file to JSON, or one of its tables to CSV
    Export {
        /// S2K file to read
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: CliExportFormat,

        /// Only export this table (display name or identifier)
        #[arg(short, long)]
        table: Option<String>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the registered tables
    Tables,
}

/// Values for the PROGRAM CONTROL table written when a file has none
#[derive(Args, Debug)]
struct ControlArgs {
    /// Program name
    #[arg(long, default_value = "SAP2000")]
    program: String,

    /// Program version
    #[arg(long, default_value = "22.0.0")]
    program_version: String,

    /// Current units text, e.g. "N, m, C"
    #[arg(long, default_value = "N, m, C", conflicts_with = "units_code")]
    units: String,

    /// Current units as a unit code, e.g. kN_m_C
    #[arg(long)]
    units_code: Option<String>,
}

impl From<ControlArgs> for ProgramControlInfo {
    fn from(args: ControlArgs) -> Self {
        let info = ProgramControlInfo::new(args.program, args.program_version, args.units);
        match args.units_code {
            Some(code) => info.with_units_code(&code),
            None => info,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            if e.downcast_ref::<CodecError>().is_some() {
                ExitCode::from(1) // The file is not valid S2K text
            } else {
                ExitCode::from(2)
            }
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env = env_logger::Env::default().filter_or("RUST_LOG", level);

    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(verbose >= 2)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::default()
        .with_schema_files(cli.schema)
        .with_no_builtin(cli.no_builtin)
        .with_no_color(cli.no_color || !std::io::stdout().is_terminal());
    let registry = config.build_registry()?;

    match cli.command {
        Command::Check { file } => {
            let dataset = read_file(&file, &registry)?;
            let config = config.with_output_format(OutputFormat::Terminal);
            emit(&config, &registry, &dataset, &file, None)
        }
        Command::Normalize {
            file,
            output,
            control,
        } => {
            let dataset = read_file(&file, &registry)?;
            let config = config
                .with_output_format(OutputFormat::S2k)
                .with_control(control.into());
            emit(&config, &registry, &dataset, &file, output.as_deref())
        }
        Command::Export {
            file,
            format,
            table,
            output,
        } => {
            let dataset = read_file(&file, &registry)?;
            let mut config = config.with_output_format(format.into());
            if let Some(table) = table {
                config = config.with_table(table);
            }
            emit(&config, &registry, &dataset, &file, output.as_deref())
        }
        Command::Tables => list_tables(&registry),
    }
}

fn read_file(path: &Path, registry: &SchemaRegistry) -> Result<Dataset> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    let dataset = parse_str(&text, registry)
        .with_context(|| format!("Failed to parse file: {}", path.display()))?;
    log::info!(
        "Read {} tables, {} rows from {}",
        dataset.table_count(),
        dataset.row_count(),
        path.display()
    );
    Ok(dataset)
}

fn emit(
    config: &Config,
    registry: &SchemaRegistry,
    dataset: &Dataset,
    source: &Path,
    output: Option<&Path>,
) -> Result<()> {
    let selected;
    let dataset = match &config.table {
        Some(name) => {
            selected = select_table(dataset, name)?;
            &selected
        }
        None => dataset,
    };

    let formatter = OutputFactory::create(config, registry);
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            formatter.render(dataset, source, &mut writer)?;
            writer.flush()?;
            log::info!("Wrote {}", path.display());
            Ok(())
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            formatter.render(dataset, source, &mut stdout)
        }
    }
}

fn list_tables(registry: &SchemaRegistry) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    for (identifier, schema) in registry.iter() {
        writeln!(
            stdout,
            "{:<56} {:<56} {:>3} columns",
            identifier.header_name(),
            identifier,
            schema.column_count()
        )?;
    }
    Ok(())
}
