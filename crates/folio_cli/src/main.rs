//! Folio CLI
//!
//! Render the portfolio page, simulate its auto-scrolling skill panels, and
//! manage the persisted theme preference.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use folio_content::ProjectFilter;
use folio_layout::{PageOptions, PageRenderer};
use folio_theme::{ColorScheme, FileStore, RootClassList, ThemeState};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod project;
mod simulate;

use config::{FolioConfig, CONFIG_FILE};

#[derive(Parser)]
#[command(name = "folio")]
#[command(version, about = "Folio portfolio site toolkit", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file
    #[arg(short, long, global = true, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Enable verbose output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the page to HTML
    Render {
        /// Output file ("-" for stdout); defaults to site.output
        #[arg(short, long)]
        out: Option<String>,

        /// Render with this scheme instead of the stored preference
        #[arg(long)]
        theme: Option<ColorScheme>,

        /// Project filter (all, web, mobile, other)
        #[arg(long, default_value = "all")]
        filter: ProjectFilter,

        /// Render animated blocks at their initial keyframe
        #[arg(long)]
        hidden: bool,
    },

    /// Run the skill-panel carousels headlessly and print their state
    Simulate {
        /// Frames to run
        #[arg(long, default_value_t = 300)]
        frames: u32,

        /// Frame rate
        #[arg(long, default_value_t = 60.0)]
        fps: f32,

        /// Seconds at which every panel receives a user scroll (repeatable)
        #[arg(long = "scroll-at")]
        scroll_at: Vec<f32>,

        /// Print every n-th frame
        #[arg(long, default_value_t = 30)]
        every: u32,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show or change the persisted theme preference
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>,
    },

    /// Write a default folio.toml
    Init {
        /// Directory to initialize
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Also export the built-in content to content.toml
        #[arg(long)]
        with_content: bool,

        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },
}

#[derive(Subcommand, Clone)]
enum ThemeAction {
    /// Print the current scheme
    Show,
    /// Flip between light and dark
    Toggle,
    /// Set a scheme explicitly
    Set { scheme: ColorScheme },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = FolioConfig::load(&cli.config)?;

    match cli.command {
        Commands::Render {
            out,
            theme,
            filter,
            hidden,
        } => cmd_render(&config, out, theme, filter, hidden),
        Commands::Simulate {
            frames,
            fps,
            scroll_at,
            every,
            json,
        } => cmd_simulate(
            &config,
            simulate::SimulationParams {
                frames,
                fps,
                scroll_at,
                sample_every: every,
            },
            json,
        ),
        Commands::Theme { action } => cmd_theme(&config, action.unwrap_or(ThemeAction::Show)),
        Commands::Init {
            path,
            with_content,
            force,
        } => cmd_init(&path, with_content, force),
    }
}

fn open_store(config: &FolioConfig) -> Result<FileStore> {
    let path = config.store_path();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    FileStore::open(&path).with_context(|| format!("Failed to open {}", path.display()))
}

fn cmd_render(
    config: &FolioConfig,
    out: Option<String>,
    theme: Option<ColorScheme>,
    filter: ProjectFilter,
    hidden: bool,
) -> Result<()> {
    let registry = config.registry()?;
    let theme = match theme {
        Some(scheme) => ThemeState::new(scheme),
        None => ThemeState::load(&open_store(config)?, config.theme.prefers_dark),
    };

    let html = PageRenderer::new(&registry, &theme)
        .with_options(PageOptions {
            filter,
            revealed: !hidden,
            year: config.site.year,
        })
        .to_string();

    let out = out.unwrap_or_else(|| config.site.output.clone());
    if out == "-" {
        print!("{}", html);
        return Ok(());
    }

    let path = Path::new(&out);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, &html).with_context(|| format!("Failed to write {}", path.display()))?;

    info!(
        "Rendered {} ({} theme, {} projects) to {}",
        registry.profile().name,
        theme.scheme(),
        registry.projects_in(filter).count(),
        path.display()
    );
    Ok(())
}

fn cmd_simulate(
    config: &FolioConfig,
    params: simulate::SimulationParams,
    json: bool,
) -> Result<()> {
    let registry = config.registry()?;
    let samples = simulate::run(&registry, config.carousel.clone(), &params)?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&samples).context("Failed to serialize samples")?
        );
    } else {
        print!("{}", simulate::format_table(&samples));
    }
    Ok(())
}

fn cmd_theme(config: &FolioConfig, action: ThemeAction) -> Result<()> {
    let mut store = open_store(config)?;
    let mut theme = ThemeState::load(&store, config.theme.prefers_dark);
    let mut root = RootClassList::default();

    match action {
        ThemeAction::Show => {}
        ThemeAction::Toggle => {
            theme.toggle(&mut store, &mut root)?;
        }
        ThemeAction::Set { scheme } => {
            theme.set_scheme(scheme);
            theme.apply(&mut root);
            theme.persist(&mut store)?;
        }
    }

    println!("{}", theme.scheme());
    Ok(())
}

fn cmd_init(path: &Path, with_content: bool, force: bool) -> Result<()> {
    let written = project::create_site(path, with_content, force)?;
    for file in &written {
        info!("Created {}", file.display());
    }
    Ok(())
}
