//! Callout CLI
//!
//! Usage:
//!   callout [OPTIONS] [FILE]
//!
//! Reads an annotation scene (TOML) from a file or stdin and prints the
//! composed position and style rule blocks. Useful for inspecting what a
//! host surface would receive for a given model state.
//!
//! Options:
//!   -t, --theme <FILE>  Theme file for paint defaults (TOML format)
//!       --position-only Print only the position rule block
//!       --style-only    Print only the style rule block

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;
use serde::Deserialize;

use callout::geometry::{BBox, Point};
use callout::{
    paint, Annotation, BorderRadius, MemorySurface, Padding, Panel, Placement, Side, Theme,
};

#[derive(Parser)]
#[command(name = "callout")]
#[command(about = "Placement and styling resolver for chart text annotations")]
struct Cli {
    /// Input scene file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Theme file for paint defaults (TOML format)
    #[arg(short, long)]
    theme: Option<PathBuf>,

    /// Print only the position rule block
    #[arg(long)]
    position_only: bool,

    /// Print only the style rule block
    #[arg(long)]
    style_only: bool,
}

/// One annotation plus its placement, as stated in a scene file
#[derive(Deserialize)]
struct Scene {
    text: String,
    #[serde(default)]
    angle: f64,
    #[serde(default = "default_visible")]
    visible: bool,
    #[serde(default)]
    padding: Padding,
    #[serde(default)]
    border_radius: BorderRadius,
    placement: ScenePlacement,
}

fn default_visible() -> bool {
    true
}

#[derive(Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
enum ScenePlacement {
    Docked { side: Side },
    Floating { anchor: [f64; 2], frame: SceneFrame },
}

#[derive(Deserialize)]
struct SceneFrame {
    #[serde(default)]
    x: f64,
    #[serde(default)]
    y: f64,
    width: f64,
    height: f64,
}

impl From<ScenePlacement> for Placement {
    fn from(scene: ScenePlacement) -> Self {
        match scene {
            ScenePlacement::Docked { side } => Placement::Docked {
                panel: Panel::new(side),
            },
            ScenePlacement::Floating { anchor, frame } => Placement::Floating {
                anchor: Point::new(anchor[0], anchor[1]),
                frame: BBox::new(frame.x, frame.y, frame.width, frame.height),
            },
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // If no input file and stdin is a terminal (interactive), show help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    // Load theme
    let theme = match &cli.theme {
        Some(path) => match Theme::from_file(path) {
            Ok(t) => t,
            Err(e) => {
                eprintln!("Error loading theme '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Theme::default(),
    };

    // Read scene input
    let source = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let scene: Scene = match toml::from_str(&source) {
        Ok(scene) => scene,
        Err(e) => {
            eprintln!("Error parsing scene: {}", e);
            std::process::exit(1);
        }
    };

    let annotation = Annotation::new(scene.text)
        .with_angle(scene.angle)
        .with_visible(scene.visible)
        .with_padding(scene.padding)
        .with_border_radius(scene.border_radius);
    let placement: Placement = scene.placement.into();

    let mut surface = MemorySurface::default();
    paint(&annotation, &placement, &theme.paint_state(), &mut surface);

    if !surface.visible {
        eprintln!("annotation is hidden; nothing to print");
        return;
    }

    if cli.position_only {
        println!("{}", surface.position);
    } else if cli.style_only {
        println!("{}", surface.style);
    } else {
        println!("/* position */");
        println!("{}", surface.position);
        println!();
        println!("/* style */");
        println!("{}", surface.style);
    }
}

fn print_intro() {
    println!("callout - placement and styling resolver for chart text annotations");
    println!();
    println!("Reads an annotation scene (TOML) and prints the CSS rule blocks a");
    println!("retained rendering surface would receive.");
    println!();
    println!("Example scene:");
    println!();
    println!("  text = \"peak load\"");
    println!("  angle = 0.5");
    println!("  padding = 4.0");
    println!();
    println!("  [placement]");
    println!("  mode = \"floating\"");
    println!("  anchor = [100.0, 50.0]");
    println!("  frame = {{ x = 0.0, y = 0.0, width = 400.0, height = 300.0 }}");
    println!();
    println!("Usage: callout [OPTIONS] [FILE]   (try --help)");
}
