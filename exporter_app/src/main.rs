//! Command-line adapter for the Tempest scene exporter
//!
//! The translation engine takes an explicit snapshot, project root, and
//! mesh collaborator; this binary is the thin front-end that wires
//! those together for shell use. It reads `<project-root>/scene.ron`
//! (a serialized [`SceneSnapshot`]) and runs one export with the
//! bundled `.tmesh` baker.

mod mesh_writer;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use tempest_export::foundation::logging;
use tempest_export::prelude::*;

use mesh_writer::TmeshBaker;

/// Snapshot file the adapter expects inside the project root.
const SNAPSHOT_NAME: &str = "scene.ron";

fn main() -> ExitCode {
    logging::init();

    let project_root = match std::env::args().nth(1) {
        Some(arg) => PathBuf::from(arg),
        None => {
            eprintln!("usage: tempest_export <project-root>");
            return ExitCode::FAILURE;
        }
    };

    match run(&project_root) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("export failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(project_root: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let snapshot_path = project_root.join(SNAPSHOT_NAME);
    let contents = std::fs::read_to_string(&snapshot_path)
        .map_err(|err| format!("cannot read snapshot {snapshot_path:?}: {err}"))?;
    let snapshot: SceneSnapshot = ron::from_str(&contents)
        .map_err(|err| format!("malformed snapshot {snapshot_path:?}: {err}"))?;

    let mut exporter = SceneExporter::new(project_root, TmeshBaker::new());
    let document = exporter.run(&snapshot)?;

    log::info!(
        "wrote {:?}: {} instances, {} cameras, {} lights",
        exporter.document_path(),
        document.instances.len(),
        document.cameras.len(),
        document.lights.len()
    );
    Ok(())
}
