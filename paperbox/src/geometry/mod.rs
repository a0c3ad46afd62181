/// Primitive geometric shapes
pub mod primitives;

#[doc(inline)]
pub use primitives::Point;
#[doc(inline)]
pub use primitives::Rect;
