//! gridboard - CLI entry point
//!
//! Prints generated dashboard layouts, resolves viewport widths to
//! breakpoints, and runs the JSON Lines bridge a rendering surface drives.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use gridboard::config::{default, xdg, Config, ConfigError, ConfigLoader};
use gridboard::layout::{BreakpointId, LayoutError, LayoutStore, PixelRect};
use gridboard::{bridge, logging, Dashboard, Layouts};
use serde::Serialize;

/// Breakpoint-aware dashboard grid layouts
#[derive(Parser)]
#[command(name = "gridboard")]
#[command(version, about = "Breakpoint-aware dashboard grid layouts")]
struct Cli {
    /// Configuration file (defaults to the XDG config path)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the gridboard CLI
#[derive(Subcommand)]
enum Commands {
    /// Print generated layouts as JSON
    Layouts {
        /// Only print this breakpoint
        #[arg(long, conflicts_with = "width")]
        breakpoint: Option<BreakpointId>,
        /// Resolve a viewport width and include pixel rectangles
        #[arg(long)]
        width: Option<u32>,
    },

    /// Print the breakpoint and column count for a viewport width
    Resolve {
        /// Viewport width in pixels
        width: u32,
    },

    /// List the widget registry in packing order
    Widgets,

    /// Run the JSON Lines bridge on stdin/stdout
    Bridge,

    /// Manage configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Actions for the `config` subcommand.
#[derive(Subcommand)]
enum ConfigAction {
    /// Create default configuration file
    Init {
        /// Overwrite existing configuration (creates backup)
        #[arg(long)]
        force: bool,
    },
    /// Show configuration file path
    Path,
    /// Validate configuration file
    Validate,
}

/// Output of `layouts --width`.
#[derive(Serialize)]
struct ViewportLayout<'a> {
    width: u32,
    breakpoint: BreakpointId,
    columns: u32,
    layout: &'a [gridboard::LayoutItem],
    rects: Vec<PixelRect>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Commands::Config { action } = &cli.command {
        return run_config_command(cli.config.as_deref(), action);
    }

    let (config, store) = match load(cli.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Config error: {e}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = logging::init(&config.log) {
        eprintln!("Error: failed to open log file {:?}: {e}", config.log.file);
        return ExitCode::FAILURE;
    }

    match cli.command {
        Commands::Layouts { breakpoint, width } => {
            run_layouts_command(&config, &store, breakpoint, width)
        }
        Commands::Resolve { width } => {
            let breakpoint = store.breakpoints().resolve(width);
            let columns = store.breakpoints().columns(breakpoint).unwrap_or_default();
            println!("{breakpoint} ({columns} columns)");
            ExitCode::SUCCESS
        }
        Commands::Widgets => {
            for widget in store.registry().iter() {
                println!(
                    "{:<24} {:<20} base {}x{}  min {}x{}",
                    widget.id,
                    widget.title,
                    widget.base_size.w,
                    widget.base_size.h,
                    widget.min_size.w,
                    widget.min_size.h
                );
            }
            ExitCode::SUCCESS
        }
        Commands::Bridge => run_bridge_command(store),
        Commands::Config { .. } => ExitCode::SUCCESS,
    }
}

/// Loads configuration and builds the layout store it describes.
fn load(path: Option<&Path>) -> Result<(Config, LayoutStore), ConfigError> {
    let config = ConfigLoader::load(path)?;
    let store = config.layout_store()?;
    Ok((config, store))
}

fn run_config_command(path: Option<&Path>, action: &ConfigAction) -> ExitCode {
    let result = match action {
        ConfigAction::Init { force } => {
            default::create_default_config(path, *force).map(|written| {
                println!("Created configuration at {}", written.display());
            })
        }
        ConfigAction::Path => {
            let path = path.map(Path::to_path_buf).unwrap_or_else(xdg::config_path);
            println!("{}", path.display());
            Ok(())
        }
        ConfigAction::Validate => load(path).map(|(config, store)| {
            println!("Configuration is valid");
            println!(
                "{} widgets, {} breakpoints, overlap policy {:?}",
                store.registry().len(),
                store.breakpoints().iter().count(),
                config.grid.overlap_policy
            );
        }),
    };
    if let Err(e) = result {
        eprintln!("Config error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run_layouts_command(
    config: &Config,
    store: &LayoutStore,
    breakpoint: Option<BreakpointId>,
    width: Option<u32>,
) -> ExitCode {
    if let Some(width) = width {
        let breakpoint = store.breakpoints().resolve(width);
        let (Some(layout), Some(columns)) = (
            store.layout(breakpoint),
            store.breakpoints().columns(breakpoint),
        ) else {
            eprintln!("Error: {}", LayoutError::UnknownBreakpoint(breakpoint));
            return ExitCode::FAILURE;
        };
        let geometry = config.grid.geometry();
        let rects = layout
            .iter()
            .map(|item| geometry.item_rect(item, width, columns))
            .collect();
        return print_json(&ViewportLayout {
            width,
            breakpoint,
            columns,
            layout,
            rects,
        });
    }

    let mut layouts = store.snapshot();
    if let Some(breakpoint) = breakpoint {
        layouts.retain(|id, _| *id == breakpoint);
        if layouts.is_empty() {
            eprintln!("Error: {}", LayoutError::UnknownBreakpoint(breakpoint));
            return ExitCode::FAILURE;
        }
    }
    print_json::<Layouts>(&layouts)
}

fn run_bridge_command(store: LayoutStore) -> ExitCode {
    let rt = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Error: failed to create tokio runtime: {e}");
            return ExitCode::FAILURE;
        }
    };
    let mut dashboard = Dashboard::new(store);
    if let Err(e) = rt.block_on(bridge::run_stdio(&mut dashboard)) {
        eprintln!("Bridge error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn print_json<T: Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: failed to serialize output: {e}");
            ExitCode::FAILURE
        }
    }
}
