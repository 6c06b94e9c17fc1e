//! `hullview`: overlay a point cloud, its convex hull and a reference mesh

use anyhow::Context;
use clap::Parser;
use hullview_core::Error;
use hullview_io::{read_hull, read_mesh};
use hullview_overlay::{LayerStyle, View, ViewBuilder};
use hullview_viewer::{logging, run, summary, ViewerConfig, ViewerError};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "hullview", version, about = "Overlay a point cloud, its convex hull and a reference mesh")]
struct Cli {
    /// Hull JSON file with Cloud, Index and optional Normals arrays
    #[arg(long, value_name = "FILE")]
    hull: Option<PathBuf>,

    /// Reference mesh (STL, OBJ or PLY)
    #[arg(long, value_name = "FILE")]
    mesh: Option<PathBuf>,

    /// Also show the mesh's distinct vertices, merged within this distance
    #[arg(long, value_name = "TOL", requires = "mesh")]
    mesh_vertices: Option<f32>,

    /// Point marker diameter in pixels
    #[arg(long, value_name = "PX")]
    point_size: Option<f32>,

    /// Opacity of the hull facets, 0 to 1
    #[arg(long, value_name = "A")]
    hull_alpha: Option<f32>,

    /// Assemble the view and print a layer summary instead of opening a window
    #[arg(long)]
    headless: bool,

    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn layer_style(&self) -> LayerStyle {
        let mut style = LayerStyle::default();
        if let Some(size) = self.point_size {
            style.points.size = size.max(0.0);
        }
        if let Some(alpha) = self.hull_alpha {
            style.hull.fill = style.hull.fill.with_alpha(alpha.clamp(0.0, 1.0));
        }
        style
    }

    fn load(&self) -> Result<View, Error> {
        let mut builder = ViewBuilder::new().style(self.layer_style());
        if let Some(path) = &self.hull {
            builder = builder.hull(read_hull(path)?);
        }
        if let Some(path) = &self.mesh {
            builder = builder.mesh(read_mesh(path)?);
            if let Some(tolerance) = self.mesh_vertices {
                builder = builder.mesh_vertices(tolerance);
            }
        }
        builder.build()
    }
}

fn show(view: View) -> anyhow::Result<()> {
    match run(view, ViewerConfig::default()) {
        Err(ViewerError::Layer(err)) => {
            Err(anyhow::anyhow!("{}: {}", err.kind(), err)).context("viewer stopped on a layer error")
        }
        other => other.context("failed to run the viewer window"),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let view = match cli.load() {
        Ok(view) => view,
        Err(err) => {
            eprintln!("{}: {}", err.kind(), err);
            return ExitCode::FAILURE;
        }
    };
    info!(layers = ?view.labels(), "loaded");

    if cli.headless {
        print!("{}", summary(&view));
        return ExitCode::SUCCESS;
    }

    match show(view) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mesh_vertices_requires_mesh() {
        let err = Cli::try_parse_from(["hullview", "--mesh-vertices", "0.001"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);

        let cli = Cli::try_parse_from(["hullview", "--mesh", "a.stl", "--mesh-vertices", "0.001"]).unwrap();
        assert_eq!(cli.mesh_vertices, Some(0.001));
    }

    #[test]
    fn test_style_overrides() {
        let cli = Cli::try_parse_from(["hullview", "--point-size", "6", "--hull-alpha", "1.5"]).unwrap();
        let style = cli.layer_style();
        assert_eq!(style.points.size, 6.0);
        assert_eq!(style.hull.fill.a, 1.0);
    }
}
