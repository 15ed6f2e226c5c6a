//! Example: deform a small triangle mesh along a named vector field.
//!
//! Run with: `cargo run --example deform_demo`

use deform_core::{DeformParameters, FieldSet, Geometry, VectorField};
use deform_surface::{deform_surface, DisplayStyle};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A unit right triangle in the XY plane.
    let geometry = Geometry::from_flat(
        &[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
        &[0, 1, 2],
    )?;

    // A per-vertex displacement field pushing the triangle out of plane.
    let mut fields = FieldSet::new();
    fields.insert(VectorField::from_flat(
        "U",
        &[0.0, 0.0, 1.0, 0.0, 0.0, 2.0, 0.0, 0.0, 3.0],
    )?);

    // Double the displacement along Z, leave X and Y as-is.
    let params = DeformParameters {
        scale_z: 2.0,
        ..Default::default()
    };

    let surface = deform_surface(&geometry, &fields, "U", &params, &DisplayStyle::default())?;

    println!(
        "Deformed surface: {} vertices, {} faces, color {}",
        surface.vertex_count(),
        surface.face_count(),
        surface.style().color
    );
    for p in surface.positions() {
        println!("  [{:.1}, {:.1}, {:.1}]", p.x, p.y, p.z);
    }

    Ok(())
}
