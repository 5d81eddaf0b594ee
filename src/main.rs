use anyhow::Result;
use clap::Parser;
use file_icons::app;
use file_icons::config;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Show the icon and category chosen for each entry of a directory.
#[derive(Parser, Debug)]
#[command(name = "file-icons", version, about)]
struct Cli {
    /// Files or directories to list.
    #[arg(default_value = ".")]
    paths: Vec<PathBuf>,

    /// Config file to use instead of the platform default.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print JSON instead of aligned text.
    #[arg(long)]
    json: bool,

    /// Use the default icon of each category.
    #[arg(long)]
    category_icons: bool,

    /// Descend this many levels (0 for unlimited).
    #[arg(long)]
    max_depth: Option<usize>,

    /// Include hidden files.
    #[arg(long)]
    hidden: bool,

    /// Do not honor .gitignore and .ignore files.
    #[arg(long)]
    no_ignore: bool,

    /// Report fallback icons missing from the catalog and exit.
    #[arg(long)]
    check: bool,
}

impl Cli {
    fn apply_to(&self, config: &mut config::AppConfig) {
        if self.category_icons {
            config.use_category_icons = true;
        }
        if let Some(depth) = self.max_depth {
            config.max_depth = (depth > 0).then_some(depth);
        }
        if self.hidden {
            config.include_hidden = true;
        }
        if self.no_ignore {
            config.respect_ignore_files = false;
        }
    }
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = config::settings::load_config(cli.config.as_deref())?;
    cli.apply_to(&mut config);

    let engine = config.build_engine()?;

    if cli.check {
        let missing = engine.missing_required_icons();
        if missing.is_empty() {
            println!("All fallback icons are registered.");
            return Ok(());
        }
        for key in &missing {
            println!("missing: {key}");
        }
        anyhow::bail!("{} fallback icons are not registered", missing.len());
    }

    let roots = app::list_roots(&engine, &config, &cli.paths)?;

    if cli.json {
        println!("{}", app::view_model::render_json(&roots)?);
    } else {
        for root in &roots {
            print!("{}", app::view_model::render_root_text(root));
        }
    }

    Ok(())
}
