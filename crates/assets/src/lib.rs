//! Asset layer: vertex layout, mesh data and the resource cache.
//!
//! Meshes are identified by a content hash of their vertex and index data,
//! so registering the same geometry twice returns the same handle. Textures
//! and shader programs are identified by their source paths; loading and
//! GPU upload happen in the backend, which consumes handles, never paths.

mod cache;
mod mesh;

pub use cache::{ResourceCache, ShaderHandle, ShaderSource, TextureHandle};
pub use mesh::{MeshData, MeshHandle, Vertex};

/// Errors from asset operations.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("mesh {0:?} has no vertices")]
    EmptyMesh(String),
    #[error("index {index} out of range for {vertex_count} vertices")]
    IndexOutOfRange { index: u32, vertex_count: usize },
    #[error("index count {0} is not a multiple of 3")]
    PartialTriangle(usize),
}
