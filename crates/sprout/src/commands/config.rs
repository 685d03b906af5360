//! Config command

use anyhow::Result;
use camino::Utf8Path;
use sprout_core::ConfigOverrides;

use crate::cli::{ConfigCommands, ConfigShowArgs};

pub fn run(cmd: ConfigCommands, config_path: Option<&Utf8Path>) -> Result<()> {
    match cmd {
        ConfigCommands::Show(args) => show(args, config_path),
    }
}

fn show(args: ConfigShowArgs, config_path: Option<&Utf8Path>) -> Result<()> {
    let config = super::load_config(config_path, &ConfigOverrides::default())?;

    if args.json {
        let json = serde_json::to_string_pretty(&config)?;
        println!("{}", json);
    } else {
        let yaml = serde_yaml_ng::to_string(&config)?;
        print!("{}", yaml);
    }

    Ok(())
}
