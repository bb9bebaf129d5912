//! Strongly-typed identifiers.

use std::fmt;

/// Identifies a field held by a source mesh.
///
/// Fields are assigned sequential ids in declaration order: restored
/// fields first, then each derived field as the registry declares it.
/// `FieldId(n)` is the n-th field on the mesh.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldId(pub u32);

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for FieldId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

impl FieldId {
    /// Position of this field in its mesh's field table.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_bare_number() {
        assert_eq!(FieldId(7).to_string(), "7");
    }

    #[test]
    fn from_u32_and_index_agree() {
        let id: FieldId = 3u32.into();
        assert_eq!(id, FieldId(3));
        assert_eq!(id.index(), 3);
    }
}
