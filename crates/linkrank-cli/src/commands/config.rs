//! Configuration command

use crate::app::ConfigArgs;
use anyhow::{bail, Result};
use linkrank_core::Config;
use std::path::Path;

pub async fn run(args: ConfigArgs, config: Config, path: &Path) -> Result<()> {
    config.validate()?;

    if args.init {
        if path.exists() && !args.force {
            bail!(
                "config file {} already exists (use --force to overwrite)",
                path.display()
            );
        }
        config.save_to(path)?;
        println!("Wrote config to {}", path.display());
        return Ok(());
    }

    println!("# {}", path.display());
    print!("{}", serde_yaml::to_string(&config)?);
    Ok(())
}
