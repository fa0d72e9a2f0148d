//! Command-line host for the Arcana codecs.
//!
//! # Responsibility
//! - Run encode/decode/archive use-cases from a terminal.
//! - Print the glyph table for reference.
//!
//! # Invariants
//! - Key failures exit non-zero with guidance on stderr and print no output.

use arcana_core::{
    core_version, default_log_level, init_logging, CipherMethod, CodecError, CodecMode,
    CodecRequest, CodecService, SymbolTable,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::info;
use std::io::Read;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "arcana")]
#[command(about = "Encode and decode roleplay messages with glyph ciphers", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level (trace|debug|info|warn|error)
    #[arg(long, global = true, env = "ARCANA_LOG_LEVEL")]
    log_level: Option<String>,

    /// Absolute directory for rolling log files; logging is off when unset
    #[arg(long, global = true, env = "ARCANA_LOG_DIR")]
    log_dir: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode plaintext
    Encode(CodecArgs),
    /// Decode encoded text
    Decode(CodecArgs),
    /// Encode and print the archive entry as JSON
    Archive(CodecArgs),
    /// Print the character/glyph table
    Table,
    /// List cipher methods with a short description
    Methods,
}

#[derive(Args)]
struct CodecArgs {
    /// Cipher method
    #[arg(short, long, value_enum, default_value_t = MethodArg::SymbolOnly)]
    method: MethodArg,

    /// Cipher key (required for polyalphabetic and composite)
    #[arg(short, long)]
    key: Option<String>,

    /// Input text; read from stdin when omitted
    text: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum MethodArg {
    Polyalphabetic,
    Composite,
    SymbolOnly,
}

impl From<MethodArg> for CipherMethod {
    fn from(value: MethodArg) -> Self {
        match value {
            MethodArg::Polyalphabetic => Self::Polyalphabetic,
            MethodArg::Composite => Self::Composite,
            MethodArg::SymbolOnly => Self::SymbolOnly,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        if let Err(err) = init_logging(level, log_dir) {
            eprintln!("arcana: {err}");
            return ExitCode::FAILURE;
        }
        info!(
            "event=cli_start module=cli status=ok version={}",
            core_version()
        );
    }

    match run(cli.command) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("arcana: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<String, String> {
    let service = CodecService::new();
    match command {
        Commands::Encode(args) => transform(&service, args, CodecMode::Encode),
        Commands::Decode(args) => transform(&service, args, CodecMode::Decode),
        Commands::Archive(args) => {
            let text = read_text(args.text)?;
            let entry = service
                .encode_for_archive(text, args.key.as_deref(), args.method.into())
                .map_err(key_failure)?;
            serde_json::to_string_pretty(&entry).map_err(|err| err.to_string())
        }
        Commands::Table => Ok(render_table(SymbolTable::global())),
        Commands::Methods => Ok(render_methods()),
    }
}

fn transform(service: &CodecService, args: CodecArgs, mode: CodecMode) -> Result<String, String> {
    let request = CodecRequest {
        text: read_text(args.text)?,
        key: args.key,
        method: args.method.into(),
        mode,
    };
    service.transform(&request).map_err(key_failure)
}

fn key_failure(err: CodecError) -> String {
    format!("{err}. {}", err.guidance())
}

fn read_text(text: Option<String>) -> Result<String, String> {
    if let Some(text) = text {
        return Ok(text);
    }
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|err| format!("failed to read stdin: {err}"))?;
    // Drop the trailing newline most shells append.
    if buffer.ends_with('\n') {
        buffer.pop();
        if buffer.ends_with('\r') {
            buffer.pop();
        }
    }
    Ok(buffer)
}

fn render_methods() -> String {
    CipherMethod::ALL
        .iter()
        .map(|method| {
            let id = method.as_str();
            let needs = match method.requires_key() {
                true => "key",
                false => "no key",
            };
            format!("{id:<15} {needs:<7} {}", method.description())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_table(table: &SymbolTable) -> String {
    table
        .pairs()
        .iter()
        .map(|&(plain, glyph)| match plain {
            ' ' => format!("space  {glyph}"),
            other => format!("{other:<6} {glyph}"),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
