use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "synex",
    about = "Synthetic CMS export generator for importer load testing",
    version,
)]
pub struct Cli {
    /// Generation parameters file (TOML). Defaults apply when omitted.
    pub config: Option<PathBuf>,

    /// Root directory for all generated output.
    #[arg(long)]
    pub outdir: Option<PathBuf>,

    /// Number of flat XML objects to generate.
    #[arg(long)]
    pub xml_count: Option<u64>,

    /// Number of flat non-XML objects to generate.
    #[arg(long)]
    pub binary_count: Option<u64>,

    /// Upper bound on extra versions per flat object.
    #[arg(long)]
    pub max_versions: Option<u32>,

    /// Max sibling containers per browse-tree level.
    #[arg(long)]
    pub browse_width: Option<u32>,

    /// Max recursion depth of the browse tree.
    #[arg(long)]
    pub browse_depth: Option<u32>,

    /// Max direct references to flat objects per container.
    #[arg(long)]
    pub max_container_children: Option<u32>,
}
