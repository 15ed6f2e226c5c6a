//! Display style attached to rebuilt surfaces.

use serde::{Deserialize, Serialize};

/// Rendering parameters attached to a deformed surface.
///
/// The style is a fixed policy of the calling context, never derived
/// from the mesh data. It is carried through to the output unchanged so
/// a downstream renderer can pick it up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayStyle {
    /// Surface color as a hex string (e.g. "#ff0000").
    pub color: String,

    /// Use flat shading instead of smooth shading.
    pub flat: bool,

    /// Opacity in [0, 1].
    pub opacity: f64,

    /// Crease angle in degrees below which normals are smoothed.
    pub crease_angle_deg: f64,
}

impl Default for DisplayStyle {
    fn default() -> Self {
        Self {
            color: "#ff0000".to_string(),
            flat: true,
            opacity: 0.7,
            crease_angle_deg: 30.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style() {
        let style = DisplayStyle::default();
        assert_eq!(style.color, "#ff0000");
        assert!(style.flat);
        assert_eq!(style.opacity, 0.7);
        assert_eq!(style.crease_angle_deg, 30.0);
    }
}
