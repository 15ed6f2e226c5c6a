//! Named per-vertex displacement fields.

use hashbrown::HashMap;
use nalgebra::Vector3;

use crate::error::{DeformError, DeformResult};

/// A named per-vertex vector dataset describing a 3D offset.
///
/// The vectors are vertex-aligned with the geometry they belong to:
/// `vectors[i]` is the displacement of vertex `i`.
#[derive(Debug, Clone)]
pub struct VectorField {
    /// Field name as published by the data source (e.g. "U").
    pub name: String,

    /// One displacement vector per vertex.
    pub vectors: Vec<Vector3<f64>>,
}

impl VectorField {
    /// Create a new named field from displacement vectors.
    pub fn new(name: impl Into<String>, vectors: Vec<Vector3<f64>>) -> Self {
        Self {
            name: name.into(),
            vectors,
        }
    }

    /// Build a field from a flat component buffer
    /// `[x0, y0, z0, x1, y1, z1, ...]`.
    ///
    /// Fails with [`DeformError::RaggedBuffer`] if the buffer length is
    /// not a multiple of 3.
    pub fn from_flat(name: impl Into<String>, components: &[f64]) -> DeformResult<Self> {
        if components.len() % 3 != 0 {
            return Err(DeformError::RaggedBuffer {
                what: "field",
                len: components.len(),
            });
        }

        let vectors = components
            .chunks_exact(3)
            .map(|c| Vector3::new(c[0], c[1], c[2]))
            .collect();

        Ok(Self::new(name, vectors))
    }

    /// Number of vectors in the field.
    #[inline]
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    /// Check if the field has no vectors.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }
}

/// A collection of vector fields keyed by name.
///
/// Field-name resolution happens here, before the displacement engine
/// runs; the engine itself never sees names.
#[derive(Debug, Clone, Default)]
pub struct FieldSet {
    fields: HashMap<String, VectorField>,
}

impl FieldSet {
    /// Create an empty field set.
    pub fn new() -> Self {
        Self {
            fields: HashMap::new(),
        }
    }

    /// Insert a field, keyed by its name.
    ///
    /// Returns the previous field with the same name, if any.
    pub fn insert(&mut self, field: VectorField) -> Option<VectorField> {
        self.fields.insert(field.name.clone(), field)
    }

    /// Look up a field by name.
    pub fn get(&self, name: &str) -> Option<&VectorField> {
        self.fields.get(name)
    }

    /// Look up a field by name, failing with [`DeformError::MissingField`]
    /// if it is absent.
    pub fn require(&self, name: &str) -> DeformResult<&VectorField> {
        self.fields.get(name).ok_or_else(|| DeformError::MissingField {
            name: name.to_string(),
            available: self.names(),
        })
    }

    /// Names of all fields, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.fields.keys().cloned().collect();
        names.sort();
        names
    }

    /// Number of fields in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the set has no fields.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flat() {
        let field = VectorField::from_flat("U", &[0.0, 0.0, 1.0, 0.0, 0.0, 2.0])
            .expect("well-formed buffer");

        assert_eq!(field.name, "U");
        assert_eq!(field.len(), 2);
        assert_eq!(field.vectors[1], Vector3::new(0.0, 0.0, 2.0));
    }

    #[test]
    fn test_from_flat_ragged() {
        let err = VectorField::from_flat("U", &[1.0, 2.0, 3.0, 4.0]).unwrap_err();
        match err {
            DeformError::RaggedBuffer { what, len } => {
                assert_eq!(what, "field");
                assert_eq!(len, 4);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_insert_and_get() {
        let mut fields = FieldSet::new();
        assert!(fields.is_empty());

        fields.insert(VectorField::new("U", vec![Vector3::zeros()]));
        assert_eq!(fields.len(), 1);
        assert!(fields.get("U").is_some());
        assert!(fields.get("V").is_none());
    }

    #[test]
    fn test_insert_replaces() {
        let mut fields = FieldSet::new();
        fields.insert(VectorField::new("U", vec![Vector3::zeros()]));
        let previous = fields.insert(VectorField::new("U", vec![Vector3::zeros(); 2]));

        assert_eq!(previous.expect("replaced field").len(), 1);
        assert_eq!(fields.require("U").unwrap().len(), 2);
    }

    #[test]
    fn test_require_missing_lists_available() {
        let mut fields = FieldSet::new();
        fields.insert(VectorField::new("U", vec![Vector3::zeros()]));
        fields.insert(VectorField::new("T", vec![Vector3::zeros()]));

        let err = fields.require("W").unwrap_err();
        match err {
            DeformError::MissingField { name, available } => {
                assert_eq!(name, "W");
                assert_eq!(available, vec!["T".to_string(), "U".to_string()]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
