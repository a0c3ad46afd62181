mod net_to_svg;
mod svg_util;

#[doc(inline)]
pub use net_to_svg::*;

#[doc(inline)]
pub use svg_util::Color;
#[doc(inline)]
pub use svg_util::SvgDrawOptions;
#[doc(inline)]
pub use svg_util::cut_path_data;
#[doc(inline)]
pub use svg_util::fold_guide_data;
