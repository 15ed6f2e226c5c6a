//! Vertex displacement for triangle mesh surfaces.
//!
//! This crate provides the data types and the numeric engine for
//! deforming a surface along a per-vertex displacement field:
//!
//! - **Geometry**: vertex positions plus triangle connectivity
//! - **Fields**: named per-vertex vector datasets, resolved by name
//!   before the engine runs
//! - **Displacement**: a pure elementwise map producing a new position
//!   buffer, with the field scaled independently along each axis
//!
//! # Example
//!
//! ```
//! use deform_core::{DeformParameters, FieldSet, Geometry, VectorField};
//! use nalgebra::Vector3;
//!
//! let geometry = Geometry::from_flat(
//!     &[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
//!     &[0, 1, 2],
//! ).unwrap();
//!
//! let mut fields = FieldSet::new();
//! fields.insert(VectorField::new("U", vec![Vector3::z(); 3]));
//!
//! let params = DeformParameters { scale_z: 2.0, ..Default::default() };
//! let field = fields.require("U").unwrap();
//! let deformed = geometry.displaced(field, &params).unwrap();
//!
//! assert_eq!(deformed[0].z, 2.0);
//! ```

mod error;
mod types;

pub mod displace;
pub mod field;

// Re-export core types at crate root
pub use displace::{displace, DeformParameters};
pub use error::{DeformError, DeformResult};
pub use field::{FieldSet, VectorField};
pub use types::Geometry;

use nalgebra::Point3;

// Convenience methods on Geometry
impl Geometry {
    /// Displace this geometry's vertices along `field`, scaled per axis.
    ///
    /// The geometry itself is left untouched; the deformed positions are
    /// returned as a new buffer, vertex-aligned with [`Geometry::faces`].
    pub fn displaced(
        &self,
        field: &VectorField,
        params: &DeformParameters,
    ) -> DeformResult<Vec<Point3<f64>>> {
        displace::displace(&self.positions, &field.vectors, params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;

    #[test]
    fn test_displaced_checks_vertex_count() {
        let geometry = Geometry::from_flat(
            &[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
            &[0, 1, 2],
        )
        .unwrap();
        let short_field = VectorField::new("U", vec![Vector3::zeros()]);

        let err = geometry
            .displaced(&short_field, &DeformParameters::default())
            .unwrap_err();
        assert!(matches!(
            err,
            DeformError::ShapeMismatch {
                expected: 3,
                actual: 1
            }
        ));
    }
}
