//! The [`FieldKernel`] trait.
//!
//! Kernels are stateless per-cell operators run once per extraction, in
//! registration order. They declare the fields they read so the registry
//! can reject a pipeline whose inputs are missing before anything runs.

use fieldcast_core::{FieldSet, KernelError};

use crate::context::KernelContext;

/// A derived-field computation over every cell of a source mesh.
///
/// # Contract
///
/// - `compute()` MUST write every slot of `ctx.target()`.
/// - `compute()` MUST be deterministic: same inputs produce identical outputs.
/// - `&self`: kernels hold only their configuration (field ids, geometry).
///
/// # Object safety
///
/// This trait is object-safe; the registry stores kernels as
/// `Box<dyn FieldKernel>`.
///
/// # Examples
///
/// A minimal kernel that fills its field with a constant:
///
/// ```
/// use fieldcast_core::{FieldSet, KernelError};
/// use fieldcast_kernel::{FieldKernel, KernelContext};
///
/// struct ConstantFill(f64);
///
/// impl FieldKernel for ConstantFill {
///     fn name(&self) -> &str { "constant_fill" }
///
///     fn reads(&self) -> FieldSet { FieldSet::empty() }
///
///     fn compute(&self, ctx: &mut KernelContext<'_>) -> Result<(), KernelError> {
///         ctx.target().fill(self.0);
///         Ok(())
///     }
/// }
///
/// assert_eq!(ConstantFill(1.0).name(), "constant_fill");
/// ```
pub trait FieldKernel {
    /// Human-readable kernel name for logs and error reporting.
    fn name(&self) -> &str;

    /// Source fields this kernel reads through `ctx.reads()`.
    fn reads(&self) -> FieldSet;

    /// Fill `ctx.target()` with one value per mesh cell.
    fn compute(&self, ctx: &mut KernelContext<'_>) -> Result<(), KernelError>;
}
