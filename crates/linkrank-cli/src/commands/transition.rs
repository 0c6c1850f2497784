//! Transition distribution command

use crate::app::{OutputFormat, TransitionArgs};
use crate::output;
use anyhow::{Context, Result};
use linkrank_core::{crawl, transition_model, Config};

pub async fn run(args: TransitionArgs, mut config: Config, format: OutputFormat) -> Result<()> {
    args.corpus.apply(&mut config.corpus);
    if let Some(damping) = args.damping {
        config.ranking.damping = damping;
    }
    config.validate()?;

    let graph = crawl(&args.corpus.dir, &config.corpus)
        .with_context(|| format!("loading corpus {}", args.corpus.dir.display()))?;
    let distribution = transition_model(&graph, &args.page, config.ranking.damping)?;

    print!(
        "{}",
        output::format_distribution(&args.page, &distribution, format)
    );
    Ok(())
}
