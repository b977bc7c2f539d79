use crate::AssetError;
use bytemuck::{Pod, Zeroable};
use lumen_math::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Content-addressed mesh id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MeshHandle(pub u64);

/// Interleaved vertex: position, normal, texture coordinates.
///
/// `#[repr(C)]` so a `&[Vertex]` uploads as one vertex buffer with a
/// 32-byte stride (attribute offsets 0, 12, 24).
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, Pod, Zeroable)]
pub struct Vertex {
    pub position: Vec3,
    pub normal: Vec3,
    pub tex_coords: Vec2,
}

impl Vertex {
    pub const fn new(position: Vec3, normal: Vec3, tex_coords: Vec2) -> Self {
        Self {
            position,
            normal,
            tex_coords,
        }
    }
}

/// Indexed triangle list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshData {
    pub name: String,
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Unit cube centered on the origin: 24 vertices (four per face so each
    /// face gets its own normal and UVs) and 36 indices.
    pub fn cube() -> Self {
        // (normal, four corners in winding order, matching UVs)
        let faces: [(Vec3, [[f32; 3]; 4], [[f32; 2]; 4]); 6] = [
            (
                Vec3::new(0.0, 0.0, -1.0),
                [[-0.5, -0.5, -0.5], [0.5, -0.5, -0.5], [0.5, 0.5, -0.5], [-0.5, 0.5, -0.5]],
                [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]],
            ),
            (
                Vec3::new(0.0, 0.0, 1.0),
                [[-0.5, -0.5, 0.5], [0.5, -0.5, 0.5], [0.5, 0.5, 0.5], [-0.5, 0.5, 0.5]],
                [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]],
            ),
            (
                Vec3::new(-1.0, 0.0, 0.0),
                [[-0.5, 0.5, 0.5], [-0.5, 0.5, -0.5], [-0.5, -0.5, -0.5], [-0.5, -0.5, 0.5]],
                [[1.0, 0.0], [1.0, 1.0], [0.0, 1.0], [0.0, 0.0]],
            ),
            (
                Vec3::new(1.0, 0.0, 0.0),
                [[0.5, 0.5, 0.5], [0.5, 0.5, -0.5], [0.5, -0.5, -0.5], [0.5, -0.5, 0.5]],
                [[1.0, 0.0], [1.0, 1.0], [0.0, 1.0], [0.0, 0.0]],
            ),
            (
                Vec3::new(0.0, -1.0, 0.0),
                [[-0.5, -0.5, -0.5], [0.5, -0.5, -0.5], [0.5, -0.5, 0.5], [-0.5, -0.5, 0.5]],
                [[0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]],
            ),
            (
                Vec3::new(0.0, 1.0, 0.0),
                [[-0.5, 0.5, -0.5], [0.5, 0.5, -0.5], [0.5, 0.5, 0.5], [-0.5, 0.5, 0.5]],
                [[0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]],
            ),
        ];

        let mut vertices = Vec::with_capacity(24);
        let mut indices = Vec::with_capacity(36);
        for (normal, corners, uvs) in faces {
            let base = vertices.len() as u32;
            for (corner, uv) in corners.into_iter().zip(uvs) {
                vertices.push(Vertex::new(corner.into(), normal, uv.into()));
            }
            indices.extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 3, base]);
        }

        Self {
            name: "unit_cube".into(),
            vertices,
            indices,
        }
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Checks that the mesh is drawable as an indexed triangle list.
    pub fn validate(&self) -> Result<(), AssetError> {
        if self.vertices.is_empty() {
            return Err(AssetError::EmptyMesh(self.name.clone()));
        }
        if self.indices.len() % 3 != 0 {
            return Err(AssetError::PartialTriangle(self.indices.len()));
        }
        let vertex_count = self.vertices.len();
        if let Some(&index) = self.indices.iter().find(|&&i| i as usize >= vertex_count) {
            return Err(AssetError::IndexOutOfRange {
                index,
                vertex_count,
            });
        }
        Ok(())
    }

    /// Vertex buffer contents, ready for upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Index buffer contents, ready for upload.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_has_expected_counts() {
        let cube = MeshData::cube();
        assert_eq!(cube.vertices.len(), 24);
        assert_eq!(cube.indices.len(), 36);
        assert_eq!(cube.triangle_count(), 12);
        cube.validate().unwrap();
    }

    #[test]
    fn cube_normals_are_unit_and_axis_aligned() {
        for v in MeshData::cube().vertices {
            assert_eq!(v.normal.magnitude(), 1.0);
            // each vertex lies on the face its normal points out of
            assert_eq!(v.position.dot(v.normal), 0.5);
        }
    }

    #[test]
    fn vertex_stride_is_32_bytes() {
        assert_eq!(std::mem::size_of::<Vertex>(), 32);
        let cube = MeshData::cube();
        assert_eq!(cube.vertex_bytes().len(), 24 * 32);
        assert_eq!(cube.index_bytes().len(), 36 * 4);
    }

    #[test]
    fn validate_rejects_bad_meshes() {
        let empty = MeshData {
            name: "empty".into(),
            vertices: vec![],
            indices: vec![],
        };
        assert!(matches!(empty.validate(), Err(AssetError::EmptyMesh(_))));

        let mut cube = MeshData::cube();
        cube.indices.push(0);
        assert!(matches!(cube.validate(), Err(AssetError::PartialTriangle(37))));

        let mut cube = MeshData::cube();
        cube.indices[5] = 99;
        assert!(matches!(
            cube.validate(),
            Err(AssetError::IndexOutOfRange { index: 99, vertex_count: 24 })
        ));
    }
}
