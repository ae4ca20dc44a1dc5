//! Vector algebra and swizzling.

#[macro_use]
mod macros;

pub mod atomic;
pub mod axis;
pub mod swizzle;
pub mod vector;

pub use axis::{AxesXY, AxesXYZ, AxesXYZW, Axis};
pub use swizzle::Swizzle;
pub use vector::{
    Dim, FromComponents, MutableVector, MutableVector2, MutableVector3, MutableVector4, Planar,
    Spatial, SupportedDim, Vector, Vector2, Vector3, Vector4, VectorLike,
};
