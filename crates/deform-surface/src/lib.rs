//! Surface reconstruction for deformed geometry.
//!
//! This crate packages a deformed position buffer with the original
//! triangle connectivity and a display style into a renderable
//! [`DeformedSurface`], validating that every face references an
//! existing vertex. It also provides [`deform_surface`], the end-to-end
//! entry point that resolves a named displacement field, runs the
//! displacement engine from `deform-core`, and rebuilds the surface.
//!
//! # Example
//!
//! ```
//! use deform_core::{DeformParameters, FieldSet, Geometry, VectorField};
//! use deform_surface::{deform_surface, DisplayStyle};
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
//! let surface = deform_surface(
//!     &geometry,
//!     &fields,
//!     "U",
//!     &DeformParameters::default(),
//!     &DisplayStyle::default(),
//! ).unwrap();
//!
//! assert_eq!(surface.vertex_count(), 3);
//! assert_eq!(surface.faces(), geometry.faces.as_slice());
//! ```

mod error;
mod rebuild;
mod style;

pub use error::{SurfaceError, SurfaceResult};
pub use rebuild::{deform_surface, rebuild, DeformedSurface};
pub use style::DisplayStyle;
