use std::path::PathBuf;

use clap::{ArgAction, Parser};
use html2typst_table::cli::{run_conversion, InputSource};
use html2typst_table::generator::TypstTableGeneratorOptions;
use html2typst_table::parser::HtmlTableParserOptions;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Read the HTML from the system clipboard instead of a file
    #[arg(short = 'c', long, conflicts_with = "input")]
    clipboard: bool,

    #[command(flatten)]
    parser_options: HtmlTableParserOptions,

    #[command(flatten)]
    generator_options: TypstTableGeneratorOptions,

    /// Increase log verbosity (-v: info, -vv: debug, -vvv: trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Input HTML file (default: stdin)
    input: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .target(env_logger::Target::Stderr)
        .init();

    let source = InputSource::from_args(cli.clipboard, cli.input.as_deref());

    run_conversion(
        &source,
        cli.output.as_deref(),
        &cli.parser_options,
        &cli.generator_options,
    )?;

    Ok(())
}
