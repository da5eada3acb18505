use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use treeviz::{NamingConfig, OutputFormat, StyleOptions, TreevizOptions, run_main, write_output};
use treeviz_dot::RenderOptions;
use treeviz_error::Result;

#[derive(Parser, Debug)]
#[command(
    name = "treeviz",
    about = "treeviz: draw fitted decision trees with Graphviz",
    version
)]
pub struct Cli {
    /// Tree JSON exported from the model (reads stdin when omitted or '-')
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    input: Option<String>,

    /// Naming file (.toml or .json) with feature_names, class_names and category_names
    #[arg(long = "names", value_name = "FILE")]
    names: Option<String>,

    /// Comma-separated feature names (overrides the naming file)
    #[arg(long = "feature-names", value_name = "NAMES", value_delimiter = ',')]
    feature_names: Option<Vec<String>>,

    /// Comma-separated class names (overrides the naming file)
    #[arg(long = "class-names", value_name = "NAMES", value_delimiter = ',')]
    class_names: Option<Vec<String>>,

    #[command(flatten)]
    style: StyleOptions,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Dot)]
    format: OutputFormat,

    /// Number nodes breadth-first in JSON output
    #[arg(long = "with-node-ids", default_value_t = false)]
    with_node_ids: bool,

    /// Graphviz executable used for png/svg output
    #[arg(long = "dot-bin", value_name = "PATH", default_value = "dot")]
    dot_bin: String,

    /// Output file path (writes to file instead of stdout)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<String>,
}

fn render_options(args: &Cli) -> Result<RenderOptions> {
    let mut options = args.style.apply(RenderOptions::default());
    if let Some(path) = &args.names {
        options = NamingConfig::load(Path::new(path))?.apply(options);
    }
    if let Some(names) = &args.feature_names {
        options = options.with_feature_names(names.iter().cloned());
    }
    if let Some(names) = &args.class_names {
        options = options.with_class_names(names.iter().cloned());
    }
    Ok(options)
}

pub fn run(args: Cli) -> Result<()> {
    let total_start = Instant::now();

    let opts = TreevizOptions {
        input: args.input.clone(),
        render: render_options(&args)?,
        format: args.format,
        with_node_ids: args.with_node_ids,
        dot_bin: args.dot_bin.clone(),
    };

    let rendered = run_main(&opts)?;
    write_output(&rendered, args.output.as_deref())?;

    let total_secs = total_start.elapsed().as_secs_f64();
    tracing::info!(total_secs, "complete");
    Ok(())
}

pub fn main() -> ExitCode {
    // Initialize tracing subscriber for logging
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    let args = Cli::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            tracing::error!(error = %e, "execution failed");
            ExitCode::FAILURE
        }
    }
}
