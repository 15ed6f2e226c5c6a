//! Surface reconstruction from deformed vertex positions.

use nalgebra::Point3;
use tracing::{debug, info};

use deform_core::{DeformParameters, FieldSet, Geometry};

use crate::error::{SurfaceError, SurfaceResult};
use crate::style::DisplayStyle;

/// A renderable surface combining deformed positions with the original
/// connectivity and a display style.
///
/// Immutable after construction: the position buffer is moved in, so it
/// never aliases the engine's output, and all access is read-only.
#[derive(Debug, Clone)]
pub struct DeformedSurface {
    positions: Vec<Point3<f64>>,
    faces: Vec<[u32; 3]>,
    style: DisplayStyle,
}

impl DeformedSurface {
    /// Vertex positions of the surface.
    #[inline]
    pub fn positions(&self) -> &[Point3<f64>] {
        &self.positions
    }

    /// Triangle faces as indices into the position buffer.
    #[inline]
    pub fn faces(&self) -> &[[u32; 3]] {
        &self.faces
    }

    /// Display style the surface was built with.
    #[inline]
    pub fn style(&self) -> &DisplayStyle {
        &self.style
    }

    /// Number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of faces (triangles).
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Positions as a flat buffer `[x0, y0, z0, x1, y1, z1, ...]` for
    /// renderer hand-off.
    pub fn positions_flat(&self) -> Vec<f64> {
        let mut flat = Vec::with_capacity(self.positions.len() * 3);
        for p in &self.positions {
            flat.extend_from_slice(&[p.x, p.y, p.z]);
        }
        flat
    }

    /// Faces as a flat index buffer `[a0, b0, c0, a1, b1, c1, ...]`.
    pub fn indices_flat(&self) -> Vec<u32> {
        let mut flat = Vec::with_capacity(self.faces.len() * 3);
        for face in &self.faces {
            flat.extend_from_slice(face);
        }
        flat
    }
}

/// Rebuild a renderable surface from deformed positions and the
/// original connectivity.
///
/// The position buffer is taken by move; the faces are copied. Every
/// face index must be a valid vertex index, otherwise the call fails
/// with [`SurfaceError::IndexOutOfRange`] naming the offending face.
/// Geometric well-formedness (degenerate triangles, duplicate indices)
/// is not checked here; that is the geometry provider's responsibility.
pub fn rebuild(
    positions: Vec<Point3<f64>>,
    faces: &[[u32; 3]],
    style: DisplayStyle,
) -> SurfaceResult<DeformedSurface> {
    let vertex_count = positions.len();

    for (face_idx, face) in faces.iter().enumerate() {
        for &index in face {
            if index as usize >= vertex_count {
                return Err(SurfaceError::IndexOutOfRange {
                    face: face_idx,
                    index,
                    vertex_count,
                });
            }
        }
    }

    debug!(
        "Rebuilt surface: {} vertices, {} faces",
        vertex_count,
        faces.len()
    );

    Ok(DeformedSurface {
        positions,
        faces: faces.to_vec(),
        style,
    })
}

/// Deform a geometry along a named field and rebuild the surface.
///
/// Resolves `field_name` against `fields` (failing before the engine
/// runs if it is absent), displaces the geometry's vertices, and
/// packages the result with the geometry's own connectivity and the
/// given style.
pub fn deform_surface(
    geometry: &Geometry,
    fields: &FieldSet,
    field_name: &str,
    params: &DeformParameters,
    style: &DisplayStyle,
) -> SurfaceResult<DeformedSurface> {
    let field = fields.require(field_name)?;

    info!(
        "Deforming surface along field {:?} ({} vertices, {} faces)",
        field_name,
        geometry.vertex_count(),
        geometry.face_count()
    );

    let deformed = geometry.displaced(field, params)?;
    rebuild(deformed, &geometry.faces, style.clone())
}
