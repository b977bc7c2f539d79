use crate::{AssetError, MeshData, MeshHandle};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Texture slot, keyed by source path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TextureHandle(pub u32);

/// Shader program slot, keyed by its vertex/fragment source pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ShaderHandle(pub u32);

/// Source paths of a shader program.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ShaderSource {
    pub vertex: PathBuf,
    pub fragment: PathBuf,
}

/// Deduplicating store for meshes, textures and shader programs.
///
/// Registering the same mesh data, texture path or shader pair again returns
/// the handle issued the first time.
#[derive(Debug, Clone, Default)]
pub struct ResourceCache {
    meshes: BTreeMap<MeshHandle, MeshData>,
    textures: Vec<PathBuf>,
    shaders: Vec<ShaderSource>,
}

impl ResourceCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and register a mesh, returning its content handle.
    pub fn add_mesh(&mut self, mesh: MeshData) -> Result<MeshHandle, AssetError> {
        mesh.validate()?;
        let handle = content_hash(&mesh);
        if !self.meshes.contains_key(&handle) {
            debug!(
                mesh = %mesh.name,
                vertices = mesh.vertices.len(),
                handle = handle.0,
                "registered mesh"
            );
            self.meshes.insert(handle, mesh);
        }
        Ok(handle)
    }

    pub fn mesh(&self, handle: MeshHandle) -> Option<&MeshData> {
        self.meshes.get(&handle)
    }

    pub fn meshes(&self) -> impl Iterator<Item = (MeshHandle, &MeshData)> {
        self.meshes.iter().map(|(h, m)| (*h, m))
    }

    pub fn add_texture(&mut self, path: impl AsRef<Path>) -> TextureHandle {
        let path = path.as_ref();
        if let Some(i) = self.textures.iter().position(|p| p == path) {
            return TextureHandle(i as u32);
        }
        self.textures.push(path.to_path_buf());
        debug!(path = %path.display(), "registered texture");
        TextureHandle(self.textures.len() as u32 - 1)
    }

    pub fn texture_path(&self, handle: TextureHandle) -> Option<&Path> {
        self.textures.get(handle.0 as usize).map(PathBuf::as_path)
    }

    pub fn add_shader(
        &mut self,
        vertex: impl AsRef<Path>,
        fragment: impl AsRef<Path>,
    ) -> ShaderHandle {
        let source = ShaderSource {
            vertex: vertex.as_ref().to_path_buf(),
            fragment: fragment.as_ref().to_path_buf(),
        };
        if let Some(i) = self.shaders.iter().position(|s| *s == source) {
            return ShaderHandle(i as u32);
        }
        debug!(
            vertex = %source.vertex.display(),
            fragment = %source.fragment.display(),
            "registered shader"
        );
        self.shaders.push(source);
        ShaderHandle(self.shaders.len() as u32 - 1)
    }

    pub fn shader_source(&self, handle: ShaderHandle) -> Option<&ShaderSource> {
        self.shaders.get(handle.0 as usize)
    }

    pub fn mesh_count(&self) -> usize {
        self.meshes.len()
    }

    pub fn texture_count(&self) -> usize {
        self.textures.len()
    }

    pub fn shader_count(&self) -> usize {
        self.shaders.len()
    }
}

/// First eight bytes of the SHA-256 over the vertex and index buffers.
/// The mesh name is not hashed; identical geometry under two names shares
/// one handle.
fn content_hash(mesh: &MeshData) -> MeshHandle {
    let mut hasher = Sha256::new();
    hasher.update(mesh.vertex_bytes());
    hasher.update((mesh.indices.len() as u64).to_le_bytes());
    hasher.update(mesh.index_bytes());
    let digest = hasher.finalize();
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    MeshHandle(u64::from_le_bytes(bytes))
}
