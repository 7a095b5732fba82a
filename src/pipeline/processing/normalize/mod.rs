//! Field transform registry and the transforms it dispatches to.

pub mod registry;
pub mod transform;

pub use registry::{Derivation, Disposal, FieldTransform, TransformRegistry};
pub use transform::{CustomTransform, FieldError, Transform, TransformContext};
