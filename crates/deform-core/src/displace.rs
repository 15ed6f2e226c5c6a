//! The vertex displacement engine.

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{DeformError, DeformResult};

/// Per-axis scale factors applied to a displacement field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeformParameters {
    /// Scale applied to the X component of each displacement vector.
    pub scale_x: f64,
    /// Scale applied to the Y component.
    pub scale_y: f64,
    /// Scale applied to the Z component.
    pub scale_z: f64,
}

impl Default for DeformParameters {
    fn default() -> Self {
        Self {
            scale_x: 1.0,
            scale_y: 1.0,
            scale_z: 1.0,
        }
    }
}

/// Displace each position along its field vector, scaled per axis.
///
/// For vertex `i` the output is
/// `positions[i] + (field[i].x * scale_x, field[i].y * scale_y, field[i].z * scale_z)`.
/// Vertices are independent, so the map is order-free and safe to chunk
/// across workers. Values pass through with plain IEEE arithmetic; no
/// clamping or NaN filtering is applied.
///
/// The inputs are never mutated and the result is a freshly allocated
/// buffer, so the same geometry can be reused across calls with
/// different parameters.
///
/// # Errors
///
/// Fails with [`DeformError::ShapeMismatch`] if `positions` and `field`
/// have different lengths. Two empty inputs are legal and produce an
/// empty output.
pub fn displace(
    positions: &[Point3<f64>],
    field: &[Vector3<f64>],
    params: &DeformParameters,
) -> DeformResult<Vec<Point3<f64>>> {
    if positions.len() != field.len() {
        return Err(DeformError::ShapeMismatch {
            expected: positions.len(),
            actual: field.len(),
        });
    }

    let scale = Vector3::new(params.scale_x, params.scale_y, params.scale_z);
    debug!(
        "Displacing {} vertices with scale [{}, {}, {}]",
        positions.len(),
        scale.x,
        scale.y,
        scale.z
    );

    let deformed = positions
        .iter()
        .zip(field.iter())
        .map(|(p, d)| p + d.component_mul(&scale))
        .collect();

    Ok(deformed)
}
