use serde::{Deserialize, Serialize};

use paperbox::entities::VerticalAlign;
use paperbox::io::ext_repr::{ExtBox, ExtPage};
use paperbox::io::svg::SvgDrawOptions;

/// Configuration of the box maker
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default)]
pub struct BoxMakerConfig {
    /// Inner dimensions of the box and thickness of the paper
    #[serde(rename = "box", default)]
    pub box_dims: ExtBox,
    /// Page the net is printed on
    #[serde(default)]
    pub page: ExtPage,
    /// Vertical positioning of the net on the page
    #[serde(default)]
    pub align: VerticalAlign,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}
