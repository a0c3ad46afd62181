use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::entities::Page;
use crate::geometry::Rect;
use crate::util::FPA;

/// Vertical positioning of the net on the page. Horizontally, it is always centered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerticalAlign {
    /// The top of the net rests on the top margin
    #[default]
    Top,
    /// Centered between the top and bottom edge of the page
    Center,
}

/// Where a net ends up on a page, and whether it fits within the margins there.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// Translation to apply to the net
    pub dx: f64,
    pub dy: f64,
    /// Bounding box of the net after translation
    pub bbox: Rect,
    /// Whether the net fits within the usable area of the page
    pub fits: bool,
}

impl Placement {
    pub fn new(net_bbox: Rect, page: &Page, align: VerticalAlign) -> Self {
        let target_x_min = (page.width - net_bbox.width()) / 2.0;
        let target_y_min = match align {
            VerticalAlign::Center => (page.height - net_bbox.height()) / 2.0,
            VerticalAlign::Top => page.margin_top_bottom,
        };
        let dx = target_x_min - net_bbox.x_min;
        let dy = target_y_min - net_bbox.y_min;

        let fits = FPA(net_bbox.width()) <= FPA(page.usable_width())
            && FPA(net_bbox.height()) <= FPA(page.usable_height());

        match fits {
            true => info!(
                "[PLACE] net of {:.1}x{:.1} mm fits within the usable {:.1}x{:.1} mm of the page",
                net_bbox.width(),
                net_bbox.height(),
                page.usable_width(),
                page.usable_height()
            ),
            false => warn!(
                "[PLACE] net of {:.1}x{:.1} mm does not fit within the usable {:.1}x{:.1} mm of the page",
                net_bbox.width(),
                net_bbox.height(),
                page.usable_width(),
                page.usable_height()
            ),
        }

        Placement {
            dx,
            dy,
            bbox: net_bbox.translate(dx, dy),
            fits,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    #[test]
    fn centers_on_both_axes() {
        let page = Page::A4;
        let net_bbox = Rect::try_new(-10.0, -5.0, 90.0, 195.0).unwrap();
        let placement = Placement::new(net_bbox, &page, VerticalAlign::Center);

        assert!(placement.fits);
        assert!(approx_eq!(f64, placement.bbox.x_min, 55.0));
        assert!(approx_eq!(f64, placement.bbox.y_min, 48.5));
        assert!(approx_eq!(f64, placement.bbox.centroid().x(), 105.0));
        assert!(approx_eq!(f64, placement.bbox.centroid().y(), 148.5));
        assert!(page.usable_area().contains_rect(&placement.bbox));
    }

    #[test]
    fn top_alignment_rests_on_margin() {
        let page = Page::A4;
        let net_bbox = Rect::try_new(0.0, 0.0, 100.0, 200.0).unwrap();
        let placement = Placement::new(net_bbox, &page, VerticalAlign::Top);

        assert!(approx_eq!(f64, placement.bbox.y_min, page.margin_top_bottom));
        assert!(approx_eq!(f64, placement.bbox.centroid().x(), 105.0));
    }

    #[test]
    fn exact_fit_is_accepted() {
        let page = Page::A4;
        let net_bbox = Rect::try_new(0.0, 0.0, 198.0, 271.0).unwrap();
        let placement = Placement::new(net_bbox, &page, VerticalAlign::Center);
        assert!(placement.fits);
        assert!(page.usable_area().contains_rect(&placement.bbox));
    }

    #[test]
    fn oversized_net_is_still_placed() {
        let page = Page::A4;
        let net_bbox = Rect::try_new(0.0, 0.0, 250.0, 100.0).unwrap();
        let placement = Placement::new(net_bbox, &page, VerticalAlign::Center);
        assert!(!placement.fits);
        assert!(approx_eq!(f64, placement.bbox.x_min, -20.0));
        assert!(approx_eq!(f64, placement.bbox.width(), 250.0));
    }

    #[test]
    fn align_deserializes_from_snake_case() {
        let align: VerticalAlign = serde_json::from_str("\"top\"").unwrap();
        assert_eq!(align, VerticalAlign::Top);
    }

    #[test]
    fn tab_rests_on_top_margin_by_default() {
        assert_eq!(VerticalAlign::default(), VerticalAlign::Top);
        let page = Page::A4;
        let net_bbox = Rect::try_new(-46.0, -27.6, 107.9, 240.8).unwrap();
        let placement = Placement::new(net_bbox, &page, VerticalAlign::default());
        assert!(approx_eq!(f64, placement.bbox.y_min, 13.0, epsilon = 1e-9));
    }
}
