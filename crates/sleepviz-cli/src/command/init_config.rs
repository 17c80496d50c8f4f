use std::path::PathBuf;

use clap::Args;
use sleepviz_chart::config::ChartConfig;

use crate::util;

#[derive(Debug, Clone, Args)]
pub(crate) struct InitConfigArg {
    /// Path of the TOML file to create
    #[arg(default_value = "sleepviz.toml")]
    pub path: PathBuf,

    /// Overwrite the file if it already exists
    #[arg(long)]
    pub force: bool,
}

pub(crate) fn run(arg: &InitConfigArg) -> anyhow::Result<()> {
    if arg.path.exists() && !arg.force {
        anyhow::bail!(
            "{} already exists; pass --force to overwrite it",
            arg.path.display()
        );
    }
    let text = ChartConfig::default().to_toml_string()?;
    util::write_text_file("chart config", &arg.path, &text)?;
    eprintln!("Created {} with default chart settings.", arg.path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_loadable_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.toml");
        run(&InitConfigArg {
            path: path.clone(),
            force: false,
        })
        .unwrap();
        assert_eq!(ChartConfig::load(&path).unwrap(), ChartConfig::default());
    }

    #[test]
    fn test_refuses_to_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.toml");
        std::fs::write(&path, "# mine").unwrap();
        let arg = InitConfigArg {
            path: path.clone(),
            force: false,
        };
        assert!(run(&arg).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# mine");

        run(&InitConfigArg { force: true, ..arg }).unwrap();
        assert!(ChartConfig::load(&path).is_ok());
    }
}
