//! Ornament Grid CLI
//!
//! Usage:
//!   ornament-grid [OPTIONS] [INPUT]...
//!
//! Options:
//!   -c, --config <FILE>  Settings file (TOML format)
//!   --cells <N>          Grid size in both directions
//!   --cells-x <N>        Grid width
//!   --cells-y <N>        Grid height
//!   --total-x            Mirror every row left/right
//!   --total-y            Mirror the grid top/bottom
//!   --local-x            Mirror each repeating segment before tiling
//!   --local-y            Mirror the repeating rows before tiling
//!   --no-total-x, ...    Turn a symmetry from the settings file off
//!   --syntax             Show template syntax reference
//!   -h, --help           Print help

use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::info;

use ornament_grid::{render_batch, settings, PatternConfig, TemplateRegistry, TextRenderer};

#[derive(Parser)]
#[command(name = "ornament-grid")]
#[command(about = "Tile glyph templates into symmetric ornament patterns")]
struct Cli {
    /// Template files or directories of *.txt templates (reads stdin if none)
    inputs: Vec<PathBuf>,

    /// Settings file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Grid size in both directions
    #[arg(long)]
    cells: Option<usize>,

    /// Grid width in cells
    #[arg(long)]
    cells_x: Option<usize>,

    /// Grid height in cells
    #[arg(long)]
    cells_y: Option<usize>,

    /// Mirror every row left/right
    #[arg(long, overrides_with = "no_total_x")]
    total_x: bool,

    /// Do not mirror rows left/right
    #[arg(long)]
    no_total_x: bool,

    /// Mirror the whole grid top/bottom
    #[arg(long, overrides_with = "no_total_y")]
    total_y: bool,

    /// Do not mirror the grid top/bottom
    #[arg(long)]
    no_total_y: bool,

    /// Mirror each repeating segment before tiling
    #[arg(long, overrides_with = "no_local_x")]
    local_x: bool,

    /// Do not mirror repeating segments
    #[arg(long)]
    no_local_x: bool,

    /// Mirror the repeating rows before tiling
    #[arg(long, overrides_with = "no_local_y")]
    local_y: bool,

    /// Do not mirror repeating rows
    #[arg(long)]
    no_local_y: bool,

    /// Show template syntax reference
    #[arg(long)]
    syntax: bool,
}

impl Cli {
    /// Apply command-line overrides on top of the loaded settings
    fn apply(&self, mut config: PatternConfig) -> PatternConfig {
        let tiling = &mut config.tiling;
        if let Some(cells) = self.cells {
            tiling.cells_x = cells;
            tiling.cells_y = cells;
        }
        if let Some(cells_x) = self.cells_x {
            tiling.cells_x = cells_x;
        }
        if let Some(cells_y) = self.cells_y {
            tiling.cells_y = cells_y;
        }
        toggle(&mut tiling.total_x_symmetry, self.total_x, self.no_total_x);
        toggle(&mut tiling.total_y_symmetry, self.total_y, self.no_total_y);
        toggle(&mut tiling.local_x_symmetry, self.local_x, self.no_local_x);
        toggle(&mut tiling.local_y_symmetry, self.local_y, self.no_local_y);
        config
    }
}

/// `--flag` turns a setting on, `--no-flag` off; neither keeps it
fn toggle(setting: &mut bool, on: bool, off: bool) {
    if on {
        *setting = true;
    } else if off {
        *setting = false;
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if cli.syntax {
        print_syntax();
        return ExitCode::SUCCESS;
    }

    // If no input and stdin is a terminal (interactive), show intro help
    if cli.inputs.is_empty() && io::stdin().is_terminal() {
        print_intro();
        return ExitCode::SUCCESS;
    }

    let config = match &cli.config {
        Some(path) => match settings::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading settings '{}': {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => PatternConfig::default(),
    };
    let config = cli.apply(config);
    if let Err(e) = config.tiling.validate() {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    let registry = match load_templates(&cli.inputs) {
        Ok(registry) => registry,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    info!(
        "rendering {} templates at {}x{}",
        registry.len(),
        config.tiling.cells_x,
        config.tiling.cells_y
    );

    let mut renderer = TextRenderer::stdout();
    let report = render_batch(&registry, &config, &mut renderer);

    for failure in &report.failures {
        eprintln!("{}", failure.report());
    }

    if report.is_success() {
        ExitCode::SUCCESS
    } else {
        eprintln!(
            "{} of {} templates failed",
            report.failures.len(),
            report.failures.len() + report.rendered.len()
        );
        ExitCode::FAILURE
    }
}

/// Collect templates from the inputs; unreadable files are recorded in
/// the registry so the rest still render
fn load_templates(inputs: &[PathBuf]) -> Result<TemplateRegistry, Box<dyn std::error::Error>> {
    let mut registry = TemplateRegistry::new();

    if inputs.is_empty() {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        registry.add("stdin", buffer)?;
        return Ok(registry);
    }

    for path in inputs {
        let added = if path.is_dir() {
            registry.add_dir(path)
        } else {
            registry.add_file(path)
        };
        if let Err(error) = added {
            registry.record_failure(path.display().to_string(), error);
        }
    }
    Ok(registry)
}

fn print_intro() {
    println!(
        r#"Ornament Grid - tile glyph templates into symmetric ornament patterns

USAGE:
    ornament-grid [OPTIONS] [INPUT]...
    echo '<template>' | ornament-grid

OPTIONS:
    -c, --config <FILE>   Settings file (TOML)
    --cells <N>           Grid size in both directions (default 16)
    --cells-x / --cells-y Grid width / height
    --total-x, --total-y  Mirror the whole grid
    --local-x, --local-y  Mirror the repeating unit before tiling
    --syntax              Show template syntax reference
    -h, --help            Print help

QUICK START:
    printf 'q*w*e\n*\na*s*d\n*\nz*x*c' | ornament-grid --cells 8

This draws an 8x8 frame: corners from the first and last rows, edges
repeated between them. Set RUST_LOG=debug to trace parsing and tiling."#
    );
}

fn print_syntax() {
    println!(
        r#"TEMPLATE SYNTAX
===============

ROWS
----
Each line is one row of glyphs. Within a row, '*' splits it into
up to three column segments:

    main                  repeated across the whole row
    prefix*main           prefix once, then main repeated
    prefix*main*suffix    prefix, main repeated, suffix at the end

SECTIONS
--------
A line starting with '*' separates row sections:

    top rows              emitted once at the top
    *
    middle rows           repeated to fill the height
    *
    bottom rows           emitted once at the bottom

One section is all middle rows. Two sections are top + middle. With
more than three, everything between the first and last is middle.

SYMMETRY
--------
--total-x   right edge is the mirrored left edge, rows read the same
            reflected left/right
--total-y   bottom rows are the mirrored top rows, grid reads the same
            reflected top/bottom
--local-x   each middle segment is followed by its own reflection
--local-y   the middle rows are followed by their own reflection

Blank lines inside a template are errors."#
    );
}
