//! Scene-to-document translation engine
//!
//! **SEPARATION OF CONCERNS**:
//! - `coordinates`: axis-convention mapping, pure functions
//! - `translators`: one module per object category, source payload in,
//!   wire record out
//! - `registry`: mesh-asset dedup around the black-box bake collaborator
//! - `document`: the wire schema and its (de)serialization
//! - `assembler`: the single-pass export run tying the above together
//!
//! The engine never touches authoring-tool APIs; everything it needs
//! arrives as an explicit [`crate::scene::SceneSnapshot`], a project
//! root, and a [`MeshExporter`] implementation.

pub mod assembler;
pub mod coordinates;
pub mod document;
pub mod registry;
pub mod translators;


pub use assembler::SceneExporter;
pub use document::SceneDocument;
pub use registry::{AssetRegistry, MeshExporter};

use std::path::PathBuf;

use thiserror::Error;

/// Export run errors
///
/// Unrecognized source enum variants are deliberately NOT here: they
/// produce partial records plus a warning, never an abort.
#[derive(Debug, Error)]
pub enum ExportError {
    /// A mesh object has no material slots (precondition violation)
    #[error("object '{0}' has no material slots")]
    MissingMaterialSlot(String),

    /// A prior scene document exists but is not valid JSON
    #[error("malformed scene document {path:?}: {source}")]
    DocumentParse {
        /// Location of the unreadable document
        path: PathBuf,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// A prior scene document carries a GLOBALS value that is not a
    /// JSON object
    #[error("GLOBALS in {0:?} is not a JSON object")]
    GlobalsNotObject(PathBuf),

    /// Serializing the assembled document failed
    #[error("failed to serialize scene document: {0}")]
    DocumentSerialize(#[from] serde_json::Error),

    /// IO failure (directory creation, mesh bake, document write)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
