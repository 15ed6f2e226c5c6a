//! Core geometry data types.

use nalgebra::Point3;

use crate::error::{DeformError, DeformResult};

/// A triangle mesh surface with indexed vertices and faces.
///
/// Coordinates are unit-agnostic; the library never rescales them.
/// The geometry is treated as immutable input: deformation produces a
/// new position buffer and leaves the original untouched.
#[derive(Debug, Clone)]
pub struct Geometry {
    /// Vertex positions. Insertion order is the vertex index.
    pub positions: Vec<Point3<f64>>,

    /// Triangle faces as indices into the position array.
    /// Each face is [v0, v1, v2] with counter-clockwise winding.
    pub faces: Vec<[u32; 3]>,
}

impl Geometry {
    /// Create a new empty geometry.
    pub fn new() -> Self {
        Self {
            positions: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Create a geometry with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Build a geometry from flat buffers as handed over by a host:
    /// coordinates as `[x0, y0, z0, x1, y1, z1, ...]` and triangle
    /// indices as `[a0, b0, c0, a1, b1, c1, ...]`.
    ///
    /// Fails with [`DeformError::RaggedBuffer`] if either buffer length
    /// is not a multiple of 3.
    pub fn from_flat(coords: &[f64], indices: &[u32]) -> DeformResult<Self> {
        if coords.len() % 3 != 0 {
            return Err(DeformError::RaggedBuffer {
                what: "coordinate",
                len: coords.len(),
            });
        }
        if indices.len() % 3 != 0 {
            return Err(DeformError::RaggedBuffer {
                what: "index",
                len: indices.len(),
            });
        }

        let positions = coords
            .chunks_exact(3)
            .map(|c| Point3::new(c[0], c[1], c[2]))
            .collect();
        let faces = indices.chunks_exact(3).map(|f| [f[0], f[1], f[2]]).collect();

        Ok(Self { positions, faces })
    }

    /// Number of vertices in the geometry.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of faces (triangles) in the geometry.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Check if the geometry has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Compute the axis-aligned bounding box.
    /// Returns (min_corner, max_corner) or None if the geometry is empty.
    pub fn bounds(&self) -> Option<(Point3<f64>, Point3<f64>)> {
        if self.positions.is_empty() {
            return None;
        }

        let mut min = self.positions[0];
        let mut max = self.positions[0];

        for p in &self.positions[1..] {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            min.z = min.z.min(p.z);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
            max.z = max.z.max(p.z);
        }

        Some((min, max))
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-10
    }

    #[test]
    fn test_from_flat() {
        let geometry = Geometry::from_flat(
            &[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
            &[0, 1, 2],
        )
        .expect("well-formed buffers");

        assert_eq!(geometry.vertex_count(), 3);
        assert_eq!(geometry.face_count(), 1);
        assert!(approx_eq(geometry.positions[1].x, 1.0));
        assert_eq!(geometry.faces[0], [0, 1, 2]);
    }

    #[test]
    fn test_from_flat_ragged_coords() {
        let err = Geometry::from_flat(&[0.0, 0.0], &[]).unwrap_err();
        match err {
            DeformError::RaggedBuffer { what, len } => {
                assert_eq!(what, "coordinate");
                assert_eq!(len, 2);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_from_flat_ragged_indices() {
        let err = Geometry::from_flat(&[0.0, 0.0, 0.0], &[0, 0]).unwrap_err();
        match err {
            DeformError::RaggedBuffer { what, len } => {
                assert_eq!(what, "index");
                assert_eq!(len, 2);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_bounds() {
        let mut geometry = Geometry::new();
        geometry.positions.push(Point3::new(0.0, 0.0, 0.0));
        geometry.positions.push(Point3::new(10.0, 5.0, 3.0));
        geometry.positions.push(Point3::new(-2.0, 8.0, 1.0));

        let (min, max) = geometry.bounds().expect("non-empty geometry");
        assert!(approx_eq(min.x, -2.0));
        assert!(approx_eq(min.y, 0.0));
        assert!(approx_eq(min.z, 0.0));
        assert!(approx_eq(max.x, 10.0));
        assert!(approx_eq(max.y, 8.0));
        assert!(approx_eq(max.z, 3.0));
    }

    #[test]
    fn test_empty_bounds() {
        let geometry = Geometry::new();
        assert!(geometry.bounds().is_none());
        assert!(geometry.is_empty());
    }
}
