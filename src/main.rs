use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use txt2ts::config::{ConvertConfig, DEFAULT_LANGUAGE};
use txt2ts::services::pipeline;

#[derive(Parser)]
#[command(name = "txt2ts")]
#[command(about = "Convert a delimited text file of source/translation pairs into a Qt TS file")]
#[command(version)]
struct Cli {
    /// Input text file (one `source=translation`, `source<TAB>translation`
    /// or `source|||translation` per line)
    input: PathBuf,

    /// Output TS file
    output: PathBuf,

    /// Language code written to the TS root element
    #[arg(long, default_value = DEFAULT_LANGUAGE)]
    lang: String,

    /// Verbosity level (logs go to stderr)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl From<Cli> for ConvertConfig {
    fn from(cli: Cli) -> Self {
        ConvertConfig::new(cli.input, cli.output).with_language(cli.lang)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cfg = ConvertConfig::from(cli);
    let report = pipeline::run(&cfg)?;

    println!("{}", report.summary());
    Ok(())
}
