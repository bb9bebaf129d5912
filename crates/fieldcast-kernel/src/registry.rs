//! Ordered registry of named field kernels.
//!
//! [`FieldRegistry`] is built once per run, then [`FieldRegistry::dispatch`]
//! declares one scalar per entry on the source mesh, runs the kernels in
//! registration order and returns the [`ColumnPlan`] the sampler and
//! writer walk. Both traversals come from the same `IndexMap`, so compute
//! order and column order cannot diverge.

use std::error::Error;
use std::fmt;

use indexmap::IndexMap;

use fieldcast_core::{FieldError, FieldId, FieldWriter, KernelError, MeshTopology, SourceMesh};

use crate::context::KernelContext;
use crate::kernel::FieldKernel;

// ── Column plan ────────────────────────────────────────────────────

/// One output column: a registered name and the mesh field holding it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Column {
    /// Registered field name.
    pub name: String,
    /// Derived scalar declared on the source mesh.
    pub field: FieldId,
}

/// Derived fields in registration order, as declared on a mesh.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[must_use]
pub struct ColumnPlan {
    columns: Vec<Column>,
}

impl ColumnPlan {
    /// Number of columns (the `F` in every row).
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the plan has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Columns in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Column> {
        self.columns.iter()
    }

    /// Mesh field ids in column order.
    pub fn field_ids(&self) -> impl Iterator<Item = FieldId> + '_ {
        self.columns.iter().map(|c| c.field)
    }

    /// Column names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.columns.iter().map(|c| c.name.as_str())
    }
}

impl<'a> IntoIterator for &'a ColumnPlan {
    type Item = &'a Column;
    type IntoIter = std::slice::Iter<'a, Column>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ── Errors ─────────────────────────────────────────────────────────

/// Errors from building or dispatching a field registry.
#[derive(Debug, Clone, PartialEq)]
pub enum RegistryError {
    /// A field name was registered twice.
    Duplicate {
        /// The contested name.
        name: String,
    },
    /// Dispatch was attempted with nothing registered.
    Empty,
    /// A kernel reads a field the mesh does not have.
    UndefinedField {
        /// Registered name of the entry.
        name: String,
        /// Which kernel.
        kernel: String,
        /// The missing field.
        field_id: FieldId,
    },
    /// The derived scalar could not be declared on the mesh.
    Declare(FieldError),
    /// A kernel failed while computing.
    Kernel {
        /// Registered name of the entry.
        name: String,
        /// Which kernel.
        kernel: String,
        /// What went wrong.
        source: KernelError,
    },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Duplicate { name } => write!(f, "field '{name}' registered twice"),
            Self::Empty => write!(f, "no fields registered"),
            Self::UndefinedField {
                name,
                kernel,
                field_id,
            } => write!(
                f,
                "kernel '{kernel}' for '{name}' reads undefined field {field_id}"
            ),
            Self::Declare(e) => write!(f, "cannot declare derived field: {e}"),
            Self::Kernel {
                name,
                kernel,
                source,
            } => write!(f, "kernel '{kernel}' for '{name}' failed: {source}"),
        }
    }
}

impl Error for RegistryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Declare(e) => Some(e),
            Self::Kernel { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<FieldError> for RegistryError {
    fn from(e: FieldError) -> Self {
        Self::Declare(e)
    }
}

// ── Registry ───────────────────────────────────────────────────────

/// Append-only, ordered list of `(name, kernel)` pairs.
///
/// # Examples
///
/// ```
/// use fieldcast_core::{FieldSet, KernelError};
/// use fieldcast_kernel::{FieldKernel, FieldRegistry, KernelContext};
/// use fieldcast_mesh::{EdgeBehavior, QuadMesh};
///
/// struct Ones;
/// impl FieldKernel for Ones {
///     fn name(&self) -> &str { "ones" }
///     fn reads(&self) -> FieldSet { FieldSet::empty() }
///     fn compute(&self, ctx: &mut KernelContext<'_>) -> Result<(), KernelError> {
///         ctx.target().fill(1.0);
///         Ok(())
///     }
/// }
///
/// let mut registry = FieldRegistry::new();
/// registry.register("a", Ones).unwrap();
/// registry.register("b", Ones).unwrap();
/// assert!(registry.register("a", Ones).is_err());
///
/// let mut mesh = QuadMesh::new([0.0, 0.0], 1.0, 2, 2, EdgeBehavior::Clamp).unwrap();
/// let plan = registry.dispatch(&mut mesh).unwrap();
/// assert_eq!(plan.names().collect::<Vec<_>>(), ["a", "b"]);
/// ```
#[derive(Default)]
pub struct FieldRegistry {
    entries: IndexMap<String, Box<dyn FieldKernel>>,
}

impl FieldRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a kernel under `name`.
    ///
    /// # Errors
    ///
    /// [`RegistryError::Duplicate`] if `name` is already registered.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        kernel: impl FieldKernel + 'static,
    ) -> Result<(), RegistryError> {
        self.register_boxed(name, Box::new(kernel))
    }

    /// Append an already-boxed kernel under `name`.
    pub fn register_boxed(
        &mut self,
        name: impl Into<String>,
        kernel: Box<dyn FieldKernel>,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        if self.entries.contains_key(&name) {
            return Err(RegistryError::Duplicate { name });
        }
        self.entries.insert(name, kernel);
        Ok(())
    }

    /// Number of registered fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    /// Check the registry against a mesh without touching it.
    ///
    /// Checks performed:
    ///
    /// 1. Registry is non-empty.
    /// 2. Every field a kernel reads exists on the mesh.
    /// 3. No registered name is already a mesh field.
    pub fn validate<M: SourceMesh + ?Sized>(&self, mesh: &M) -> Result<(), RegistryError> {
        if self.entries.is_empty() {
            return Err(RegistryError::Empty);
        }
        for (name, kernel) in &self.entries {
            for field_id in kernel.reads().iter() {
                if mesh.field_def(field_id).is_none() {
                    return Err(RegistryError::UndefinedField {
                        name: name.clone(),
                        kernel: kernel.name().to_string(),
                        field_id,
                    });
                }
            }
            if mesh.field_id(name).is_some() {
                return Err(RegistryError::Declare(FieldError::Duplicate {
                    name: name.clone(),
                }));
            }
        }
        Ok(())
    }

    /// Declare, compute and fill every registered field on `mesh`.
    ///
    /// Validation runs first, so a rejected registry leaves the mesh
    /// unchanged. Kernels compute into a scratch slice which is then
    /// copied into the declared field, so a kernel never aliases its
    /// own output through `ctx.reads()`.
    pub fn dispatch<M: SourceMesh>(&self, mesh: &mut M) -> Result<ColumnPlan, RegistryError> {
        self.validate(mesh)?;

        let cells = mesh.cell_count();
        let mut scratch = vec![0.0; cells];
        let mut columns = Vec::with_capacity(self.entries.len());

        for (name, kernel) in &self.entries {
            let field = mesh.declare_scalar(name)?;
            scratch.fill(0.0);
            {
                let mut ctx = KernelContext::new(&*mesh, &*mesh, &mut scratch);
                kernel
                    .compute(&mut ctx)
                    .map_err(|source| RegistryError::Kernel {
                        name: name.clone(),
                        kernel: kernel.name().to_string(),
                        source,
                    })?;
            }
            let out = mesh.write(field).ok_or_else(|| RegistryError::Kernel {
                name: name.clone(),
                kernel: kernel.name().to_string(),
                source: KernelError::MissingField { field_id: field },
            })?;
            if out.len() != cells {
                return Err(RegistryError::Kernel {
                    name: name.clone(),
                    kernel: kernel.name().to_string(),
                    source: KernelError::ShapeMismatch {
                        field_id: field,
                        expected: cells,
                        found: out.len(),
                    },
                });
            }
            out.copy_from_slice(&scratch);
            tracing::debug!(name = %name, kernel = kernel.name(), %field, cells, "field computed");
            columns.push(Column {
                name: name.clone(),
                field,
            });
        }

        tracing::info!(fields = columns.len(), cells, "derived fields computed");
        Ok(ColumnPlan { columns })
    }
}

impl fmt::Debug for FieldRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(n, k)| (n, k.name())))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldcast_core::{FieldDef, FieldReader, FieldSet, MeshTopology};
    use fieldcast_mesh::{EdgeBehavior, QuadMesh};

    struct Fill(f64);

    impl FieldKernel for Fill {
        fn name(&self) -> &str {
            "fill"
        }
        fn reads(&self) -> FieldSet {
            FieldSet::empty()
        }
        fn compute(&self, ctx: &mut KernelContext<'_>) -> Result<(), KernelError> {
            ctx.target().fill(self.0);
            Ok(())
        }
    }

    struct Doubled(FieldId);

    impl FieldKernel for Doubled {
        fn name(&self) -> &str {
            "doubled"
        }
        fn reads(&self) -> FieldSet {
            [self.0].into_iter().collect()
        }
        fn compute(&self, ctx: &mut KernelContext<'_>) -> Result<(), KernelError> {
            let (reads, mesh, target) = ctx.split();
            let src = reads
                .read(self.0)
                .ok_or(KernelError::MissingField { field_id: self.0 })?;
            for cell in 0..mesh.cell_count() {
                target[cell] = 2.0 * src[cell];
            }
            Ok(())
        }
    }

    struct Failing;

    impl FieldKernel for Failing {
        fn name(&self) -> &str {
            "failing"
        }
        fn reads(&self) -> FieldSet {
            FieldSet::empty()
        }
        fn compute(&self, _ctx: &mut KernelContext<'_>) -> Result<(), KernelError> {
            Err(KernelError::MissingField {
                field_id: FieldId(7),
            })
        }
    }

    fn mesh_with_f() -> (QuadMesh, FieldId) {
        let mut mesh = QuadMesh::new([0.0, 0.0], 1.0, 3, 2, EdgeBehavior::Clamp).unwrap();
        let f = mesh
            .add_field(FieldDef::scalar("f"), vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0])
            .unwrap();
        (mesh, f)
    }

    #[test]
    fn duplicate_name_rejected() {
        let mut r = FieldRegistry::new();
        r.register("x", Fill(1.0)).unwrap();
        assert_eq!(
            r.register("x", Fill(2.0)),
            Err(RegistryError::Duplicate { name: "x".into() })
        );
        assert_eq!(r.len(), 1);
    }

    #[test]
    fn empty_registry_rejected() {
        let (mut mesh, _) = mesh_with_f();
        assert_eq!(
            FieldRegistry::new().dispatch(&mut mesh),
            Err(RegistryError::Empty)
        );
    }

    #[test]
    fn dispatch_preserves_registration_order() {
        let (mut mesh, f) = mesh_with_f();
        let mut r = FieldRegistry::new();
        r.register("zeta", Fill(9.0)).unwrap();
        r.register("alpha", Doubled(f)).unwrap();

        let plan = r.dispatch(&mut mesh).unwrap();
        assert_eq!(plan.names().collect::<Vec<_>>(), ["zeta", "alpha"]);
        let ids: Vec<_> = plan.field_ids().collect();
        assert_eq!(ids, [FieldId(1), FieldId(2)]);

        assert_eq!(mesh.read(ids[0]).unwrap(), &[9.0; 6]);
        assert_eq!(
            mesh.read(ids[1]).unwrap(),
            &[0.0, 2.0, 4.0, 6.0, 8.0, 10.0]
        );
    }

    #[test]
    fn undefined_read_leaves_mesh_untouched() {
        let (mut mesh, _) = mesh_with_f();
        let mut r = FieldRegistry::new();
        r.register("ok", Fill(1.0)).unwrap();
        r.register("bad", Doubled(FieldId(5))).unwrap();

        let err = r.dispatch(&mut mesh).unwrap_err();
        assert_eq!(
            err,
            RegistryError::UndefinedField {
                name: "bad".into(),
                kernel: "doubled".into(),
                field_id: FieldId(5),
            }
        );
        assert_eq!(mesh.field_count(), 1);
    }

    #[test]
    fn name_colliding_with_source_field_rejected() {
        let (mut mesh, _) = mesh_with_f();
        let mut r = FieldRegistry::new();
        r.register("f", Fill(1.0)).unwrap();
        assert_eq!(
            r.dispatch(&mut mesh),
            Err(RegistryError::Declare(FieldError::Duplicate { name: "f".into() }))
        );
    }

    #[test]
    fn kernel_failure_names_entry() {
        let (mut mesh, _) = mesh_with_f();
        let mut r = FieldRegistry::new();
        r.register("broken", Failing).unwrap();
        let err = r.dispatch(&mut mesh).unwrap_err();
        assert!(matches!(err, RegistryError::Kernel { ref name, .. } if name == "broken"));
        assert!(err.source().is_some());
        assert!(err.to_string().contains("'failing'"));
    }

    #[test]
    fn debug_lists_entries() {
        let mut r = FieldRegistry::new();
        r.register("x", Fill(0.0)).unwrap();
        assert_eq!(format!("{r:?}"), r#"{"x": "fill"}"#);
    }
}
