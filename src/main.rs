use clap::{Parser, Subcommand, ValueEnum};
use plumbline::types::Unit;
use plumbline::{convert, output, report, scene};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "plumbline")]
#[command(about = "Nail placement calculator for hanging framed artwork")]
#[command(long_about = "\
Nail placement calculator for hanging framed artwork

Describe the wall and artworks in a scene.toml, and plumbline computes
where to drive the nails so the composition's visual center lands on your
target height. Every result comes with the arithmetic that produced it.

Scene structure:

  units = \"cm\"               # cm or in
  wall_width = 400           # left edge to right edge
  target_centroid = 152.4    # height of the composition's visual center
  arrangement = \"horizontal\" # single | horizontal | vertical | custom

  [layout]
  rows = 2                   # custom grid only
  cols = 3                   # custom grid only
  horizontal_gap = 8         # between horizontally adjacent artworks
  vertical_gap = 10          # between vertically stacked artworks

  [[artworks]]               # one table per piece, in placement order
  label = \"Seascape\"
  width = 50
  height = 70

  [artworks.mounting]
  type = \"wire\"              # wire | dring
  wire_offset = 10           # top edge down to the taut wire
  hanger_offset = 2.5        # nail above the wire's resting point (sag)

Nail formulas:
  wire:   centroid + height/2 - wire_offset + hanger_offset
  d-ring: centroid + height/2 - vertical_offset, one nail per ring

Run 'plumbline gen-scene' for a fully documented scene.toml.")]
#[command(version)]
struct Cli {
    /// Scene file describing the wall and artworks
    #[arg(long, default_value = "scene.toml", global = true)]
    scene: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute nail positions for the scene
    Plan {
        /// Emit the placement list as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Validate the scene file and show its inventory without computing
    Check,
    /// Re-express every length in the scene in another unit
    Convert {
        /// Target unit
        #[arg(long, value_enum)]
        to: UnitArg,
    },
    /// Print a documented example scene.toml
    GenScene,
}

#[derive(Clone, Copy, ValueEnum)]
enum UnitArg {
    Cm,
    In,
}

impl From<UnitArg> for Unit {
    fn from(arg: UnitArg) -> Self {
        match arg {
            UnitArg::Cm => Unit::Cm,
            UnitArg::In => Unit::In,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Plan { json } => {
            let scene = scene::load_scene(&cli.scene)?;
            let placements = report::plan(&scene);
            if json {
                println!("{}", serde_json::to_string_pretty(&placements)?);
            } else {
                output::print_plan_output(&scene, &placements);
            }
        }
        Command::Check => {
            let scene = scene::load_scene(&cli.scene)?;
            output::print_check_output(&scene);
            println!("==> Scene is valid");
        }
        Command::Convert { to } => {
            let scene = scene::load_scene(&cli.scene)?;
            let converted = convert::convert_scene(&scene, to.into());
            print!("{}", scene::to_toml(&converted)?);
        }
        Command::GenScene => {
            print!("{}", scene::stock_scene_toml());
        }
    }

    Ok(())
}
