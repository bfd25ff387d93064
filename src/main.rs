use std::io;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;

use modscope::config::{ColourScheme, Config};
use modscope::export::{
    colour_names, to_dot, write_flat, write_graph, write_inverted, write_json, ReportFormat,
};
use modscope::graph::TableBuilder;
use modscope::parser::parse_file;
use modscope::scan::collect_files;
use modscope::traverse::{traverse, QueryMode};

#[derive(Parser)]
#[command(name = "modscope")]
#[command(version = "0.1.0")]
#[command(about = "Module dependency mapper for AMD-style JavaScript codebases", long_about = None)]
struct Cli {
    /// Source tree to scan
    #[arg(default_value = ".")]
    root_dir: PathBuf,

    /// Module to trace from (defaults to mapping the whole system)
    #[arg(short, long)]
    module: Option<String>,

    /// Trace dependents of the named module instead of its dependencies
    #[arg(short = 'i', long, requires = "module")]
    invert: bool,

    /// Comma-separated module names left out of graph output
    #[arg(short = 'e', long, value_delimiter = ',', value_name = "NAMES")]
    exclude_modules: Option<Vec<String>>,

    /// Write a graph image to this path instead of a text report
    #[arg(short = 'o', long, value_name = "PATH")]
    output_image: Option<PathBuf>,

    /// Text report format
    #[arg(long, default_value_t = ReportFormat::Text)]
    format: ReportFormat,

    /// Fill colour for root modules
    #[arg(short = 'r', long, default_value = "forestgreen", value_name = "COLOUR")]
    root_colour: String,

    /// Fill colour for ordinary modules
    #[arg(short = 'n', long, default_value = "white", value_name = "COLOUR")]
    node_colour: String,

    /// Fill colour for undefined modules
    #[arg(short = 'u', long, default_value = "orangered", value_name = "COLOUR")]
    undefined_colour: String,

    /// List the accepted colour names and exit
    #[arg(short = 's', long)]
    show_colours: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.show_colours {
        for name in colour_names() {
            println!("{}", name);
        }
        return Ok(());
    }

    let config = Config::new(cli.module, cli.invert, cli.exclude_modules)
        .with_output_image(cli.output_image)
        .with_format(cli.format)
        .with_colours(ColourScheme {
            root: cli.root_colour,
            node: cli.node_colour,
            undefined: cli.undefined_colour,
        });

    run(&cli.root_dir, &config)
}

/// Scans, builds the table, and renders whichever output the run asked
/// for. Status and warnings go to stderr; the report itself owns stdout.
fn run(root_dir: &Path, config: &Config) -> anyhow::Result<()> {
    let files = collect_files(root_dir)?;
    eprintln!("Scanning {} ({} files)", root_dir.display(), files.len());

    let mut builder = TableBuilder::new();
    for file in &files {
        match parse_file(file) {
            Ok(extraction) => builder.add_file(file, extraction),
            Err(e) => eprintln!("warning: skipping {}: {}", file.display(), e),
        }
    }
    let (table, warnings) = builder.finish();

    for warning in &warnings {
        eprintln!("warning: {}", warning);
    }
    eprintln!("Root modules: {}", table.roots().join(", "));
    if !config.exclude.is_empty() {
        let mut excluded: Vec<&str> = config.exclude.iter().map(String::as_str).collect();
        excluded.sort_unstable();
        eprintln!("Excluding modules: {}", excluded.join(", "));
    }

    if let Some(ref path) = config.output_image {
        let mode = QueryMode::from_config(config);
        let outline = traverse(&table, &mode, &config.exclude);
        let dot = to_dot(&outline, &config.colours);
        write_graph(&dot, path)
            .with_context(|| format!("failed to write graph to {}", path.display()))?;
        eprintln!("Wrote graph image to {}", path.display());
        return Ok(());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match (config.format, &config.module) {
        (ReportFormat::Json, _) => write_json(root_dir, &table, &warnings, &mut out)?,
        (ReportFormat::Text, Some(module)) if config.invert => {
            write_inverted(&table, module, &mut out)?
        }
        (ReportFormat::Text, module) => write_flat(&table, module.as_deref(), &mut out)?,
    }

    Ok(())
}
