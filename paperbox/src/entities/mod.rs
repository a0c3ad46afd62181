mod box_dims;
mod net;
mod page;
mod placement;

#[doc(inline)]
pub use box_dims::BoxDims;
#[doc(inline)]
pub use box_dims::OuterDims;
#[doc(inline)]
pub use net::BoxNet;
#[doc(inline)]
pub use net::FoldGuide;
#[doc(inline)]
pub use net::PathCmd;
#[doc(inline)]
pub use page::Page;
#[doc(inline)]
pub use placement::Placement;
#[doc(inline)]
pub use placement::VerticalAlign;
