use serde::{Deserialize, Serialize};

/// External representation of a box, all dimensions in millimeters.
/// Width, height and depth are the inner dimensions of the folded box.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtBox {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    /// Thickness of the paper
    pub thickness: f64,
}

/// External representation of a page, all dimensions in millimeters.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtPage {
    pub width: f64,
    pub height: f64,
    pub margin_top_bottom: f64,
    pub margin_left_right: f64,
}

/// Summary of a generated net
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtNetReport {
    /// Outer dimensions of the folded box: `[width, height, depth]`
    pub outer_dims: [f64; 3],
    /// Size of the net: `[width, height]`
    pub net_size: [f64; 2],
    /// Usable area of the page: `[width, height]`
    pub usable_size: [f64; 2],
    /// Top-left corner of the box body on the page
    pub origin: [f64; 2],
    /// Whether the net fits within the margins of the page
    pub fits: bool,
}
