//! Field definitions and read sets.

use crate::id::FieldId;

/// Classification of a field's data layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldType {
    /// A single floating-point value per cell.
    Scalar,
    /// A fixed-size vector of floating-point values per cell, stored
    /// interleaved (`data[cell * dims + k]`).
    Vector {
        /// Number of components in the vector (2 for planar velocity).
        dims: u32,
    },
}

impl FieldType {
    /// Returns the number of f64 storage slots this field type requires per cell.
    pub fn components(&self) -> u32 {
        match self {
            Self::Scalar => 1,
            Self::Vector { dims } => *dims,
        }
    }

    /// Whether this is a single-component field.
    pub fn is_scalar(&self) -> bool {
        matches!(self, Self::Scalar)
    }
}

/// Definition of a field held by a source mesh.
///
/// Restored fields come from the snapshot; derived fields are declared
/// by the field registry as it dispatches kernels.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldDef {
    /// Name used to look the field up (e.g. `"f"`, `"u"`, `"D2c"`).
    pub name: String,
    /// Data layout.
    pub field_type: FieldType,
}

impl FieldDef {
    /// A scalar field definition.
    pub fn scalar(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type: FieldType::Scalar,
        }
    }

    /// A vector field definition with `dims` components.
    pub fn vector(name: impl Into<String>, dims: u32) -> Self {
        Self {
            name: name.into(),
            field_type: FieldType::Vector { dims },
        }
    }
}

/// The fields a kernel reads, kept sorted and free of duplicates.
///
/// The registry checks every id against the mesh before any kernel runs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldSet {
    ids: Vec<FieldId>,
}

impl FieldSet {
    /// No fields.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Add `field`; a no-op if already present.
    pub fn insert(&mut self, field: FieldId) {
        if let Err(pos) = self.ids.binary_search(&field) {
            self.ids.insert(pos, field);
        }
    }

    /// Whether `field` is in the set.
    pub fn contains(&self, field: FieldId) -> bool {
        self.ids.binary_search(&field).is_ok()
    }

    /// Whether the set has no fields.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Ids in ascending order.
    pub fn iter(&self) -> FieldSetIter<'_> {
        FieldSetIter {
            inner: self.ids.iter(),
        }
    }
}

impl FromIterator<FieldId> for FieldSet {
    fn from_iter<I: IntoIterator<Item = FieldId>>(iter: I) -> Self {
        let mut ids: Vec<FieldId> = iter.into_iter().collect();
        ids.sort_unstable();
        ids.dedup();
        Self { ids }
    }
}

impl<'a> IntoIterator for &'a FieldSet {
    type Item = FieldId;
    type IntoIter = FieldSetIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Ascending iterator over a [`FieldSet`].
pub struct FieldSetIter<'a> {
    inner: std::slice::Iter<'a, FieldId>,
}

impl Iterator for FieldSetIter<'_> {
    type Item = FieldId;

    fn next(&mut self) -> Option<FieldId> {
        self.inner.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
