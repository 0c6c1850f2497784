//! Corpus link graph command

use crate::app::{CorpusArgs, OutputFormat};
use crate::output;
use anyhow::{Context, Result};
use linkrank_core::{crawl, Config};

pub async fn run(args: CorpusArgs, mut config: Config, format: OutputFormat) -> Result<()> {
    args.apply(&mut config.corpus);
    config.validate()?;

    let graph = crawl(&args.dir, &config.corpus)
        .with_context(|| format!("loading corpus {}", args.dir.display()))?;
    print!("{}", output::format_graph(&graph, format));
    Ok(())
}
