use anyhow::Context as _;
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use self::{
    export::ExportArg, init_config::InitConfigArg, render::RenderArg, summary::SummaryArg,
};

mod export;
mod init_config;
mod render;
mod summary;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Increase log verbosity (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// What mode to run the program in
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Print dataset statistics and chart tables
    Summary(#[clap(flatten)] SummaryArg),
    /// Export chart datasets as JSON
    Export(#[clap(flatten)] ExportArg),
    /// Render the charts as SVG files with an index page
    Render(#[clap(flatten)] RenderArg),
    /// Write the default chart configuration as TOML
    InitConfig(#[clap(flatten)] InitConfigArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    init_logging(args.verbose)?;
    match args.mode {
        Mode::Summary(arg) => summary::run(&arg)?,
        Mode::Export(arg) => export::run(&arg)?,
        Mode::Render(arg) => render::run(&arg)?,
        Mode::InitConfig(arg) => init_config::run(&arg)?,
    }
    Ok(())
}

fn init_logging(verbose: u8) -> anyhow::Result<()> {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_command_definition() {
        CommandArgs::command().debug_assert();
    }

    #[test]
    fn test_parse_render() {
        let args = CommandArgs::try_parse_from([
            "sleepviz",
            "-vv",
            "render",
            "data.csv",
            "--output-dir",
            "out",
            "--age-grouping",
            "categories",
            "--efficiency-scale",
            "fraction",
        ])
        .unwrap();
        assert_eq!(args.verbose, 2);
        let Mode::Render(arg) = args.mode else {
            panic!("expected render mode");
        };
        assert_eq!(arg.output_dir.to_str(), Some("out"));
    }

    #[test]
    fn test_data_path_is_required() {
        assert!(CommandArgs::try_parse_from(["sleepviz", "summary"]).is_err());
    }
}
