use colored::Colorize;
use rand::rngs::StdRng;
use rand::SeedableRng;
use synex_corpus::Corpus;
use synex_gen::{ExportGenerator, ExportSummary, GenerationConfig};
use tracing::debug;

use crate::cli::Cli;

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let config = build_config(&cli)?;
    debug!(?config, "effective configuration");
    let corpus = Corpus::embedded()?;

    let generator = ExportGenerator::new(config, corpus);
    let outdir = generator.config().outdir.clone();
    let mut rng = StdRng::from_entropy();
    let summary = generator.run(&mut rng)?;

    print_summary(&summary);
    println!("Export written to {}", outdir.display().to_string().bold());
    Ok(())
}

/// Load the configuration file (if any) and apply command-line overrides.
fn build_config(cli: &Cli) -> anyhow::Result<GenerationConfig> {
    let mut config = match &cli.config {
        Some(path) => GenerationConfig::load(path)?,
        None => GenerationConfig::default(),
    };
    if let Some(outdir) = &cli.outdir {
        config.outdir = outdir.clone();
    }
    if let Some(count) = cli.xml_count {
        config.max_xml_mos = count;
    }
    if let Some(count) = cli.binary_count {
        config.max_binary_mos = count;
    }
    if let Some(versions) = cli.max_versions {
        config.max_versions = versions;
    }
    if let Some(width) = cli.browse_width {
        config.browse_width = width;
    }
    if let Some(depth) = cli.browse_depth {
        config.browse_depth = depth;
    }
    if let Some(children) = cli.max_container_children {
        config.max_container_children = children;
    }
    Ok(config)
}

fn print_summary(summary: &ExportSummary) {
    println!("Generation summary:");
    println!("      XML MOs: {}", summary.xml.to_string().green());
    println!("  Non-XML MOs: {}", summary.non_xml.to_string().green());
    println!("          CAs: {}", summary.containers.to_string().green());
    println!("       MORefs: {}", summary.references.to_string().green());
    println!("      Next id: {}", summary.next_id.to_string().yellow());
}
