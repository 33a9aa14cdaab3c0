#![deny(unsafe_code)]
//! CLI binary for the fieldlab visualization core.
//!
//! Subcommands:
//! - `tick <field>`: run one scene tick, print the snapshot
//! - `list`: print available fields and their panel ranges

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use fieldlab_scene::{snapshot, FieldKind, Scene, TickSnapshot};
use glam::DVec2;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "fieldlab", about = "Vector field visualization core CLI")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run one scene tick and print the resulting snapshot.
    Tick {
        /// Field name (e.g. "saddle-shear").
        #[arg(default_value = "saddle-shear")]
        field: String,

        /// Requested region side length for this tick (the slider value).
        #[arg(short, long, default_value_t = 2.0)]
        size: f64,

        /// Pointer x, screen pixels (requires --pointer-y).
        #[arg(long)]
        pointer_x: Option<f64>,

        /// Pointer y, screen pixels (requires --pointer-x).
        #[arg(long)]
        pointer_y: Option<f64>,

        /// Scene parameters as a JSON string
        /// (center, steps_per_edge, capture_radius, grid_spacing, ...).
        #[arg(long, default_value = "{}")]
        params: String,

        /// Also write the snapshot as pretty JSON to this path.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List available fields.
    List,
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let fields = FieldKind::list_fields();
            if cli.json {
                let info = serde_json::json!({ "fields": fields });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Fields:");
                for name in fields {
                    let kind = FieldKind::from_name(name)?;
                    let (x_lo, x_hi) = kind.transformed_x();
                    let (y_lo, y_hi) = kind.transformed_y();
                    println!("  {name}  (transformed panel [{x_lo}, {x_hi}] x [{y_lo}, {y_hi}])");
                }
            }
        }
        Command::Tick {
            field,
            size,
            pointer_x,
            pointer_y,
            params,
            output,
        } => {
            let params: serde_json::Value = serde_json::from_str(&params)
                .map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))?;

            let pointer = match (pointer_x, pointer_y) {
                (Some(x), Some(y)) => Some(DVec2::new(x, y)),
                (None, None) => None,
                _ => {
                    return Err(CliError::Input(
                        "--pointer-x and --pointer-y must be given together".into(),
                    ))
                }
            };

            let mut scene = Scene::from_name(&field, &params)?;
            let snap = scene.tick(size, pointer);

            if let Some(path) = &output {
                snapshot::write_json(&snap, path)?;
            }

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&snap)?);
            } else {
                print_summary(&snap);
                if let Some(path) = &output {
                    eprintln!("snapshot written to {}", path.display());
                }
            }
        }
    }

    Ok(())
}

/// Prints the divergence and circulation status lines.
fn print_summary(snap: &TickSnapshot) {
    println!(
        "{}: center ({:.2}, {:.2}), size {:.2}",
        snap.field, snap.center.x, snap.center.y, snap.size
    );
    println!("Corners: {}", snap.domain_corner_labels.join("  "));
    println!("Transformed: {}", snap.transformed_corner_labels.join("  "));
    let symbol = match snap.divergence_class {
        fieldlab_core::DivergenceClass::Expansion => ">",
        fieldlab_core::DivergenceClass::Contraction => "<",
        fieldlab_core::DivergenceClass::Neutral => "=",
    };
    println!(
        "Divergence: {:.2}  {symbol} ({})",
        snap.divergence,
        snap.divergence_class.label()
    );
    println!(
        "Circulation (line integral): {:.2} | Predicted (curl*Area): {:.2}",
        snap.circulation, snap.predicted_circulation
    );
    println!(
        "Boundary flux: {:.2} | Predicted (div*Area): {:.2}",
        snap.boundary_flux, snap.predicted_flux
    );
}

fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
