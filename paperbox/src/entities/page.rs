use anyhow::{Result, ensure};

use crate::geometry::Rect;

/// Sheet of paper the net is printed on, in millimeters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Page {
    pub width: f64,
    pub height: f64,
    /// Minimum blank space kept at the top and at the bottom of the sheet
    pub margin_top_bottom: f64,
    /// Minimum blank space kept at the left and at the right of the sheet
    pub margin_left_right: f64,
}

impl Page {
    /// A4 in portrait orientation
    pub const A4: Page = Page {
        width: 210.0,
        height: 297.0,
        margin_top_bottom: 13.0,
        margin_left_right: 6.0,
    };

    pub fn try_new(
        width: f64,
        height: f64,
        margin_top_bottom: f64,
        margin_left_right: f64,
    ) -> Result<Self> {
        for (name, value) in [("width", width), ("height", height)] {
            ensure!(
                value.is_finite() && value > 0.0,
                "page {name} must be strictly positive and finite, got: {value}"
            );
        }
        ensure!(
            margin_top_bottom.is_finite() && margin_left_right.is_finite(),
            "page margins must be finite, got: top/bottom {margin_top_bottom}, left/right {margin_left_right}"
        );
        ensure!(
            margin_top_bottom >= 0.0 && margin_left_right >= 0.0,
            "page margins must be non-negative, got: top/bottom {margin_top_bottom}, left/right {margin_left_right}"
        );
        let page = Page {
            width,
            height,
            margin_top_bottom,
            margin_left_right,
        };
        ensure!(
            page.usable_width() > 0.0 && page.usable_height() > 0.0,
            "page {width}x{height} has no usable area left with margins {margin_top_bottom} (top/bottom) and {margin_left_right} (left/right)"
        );
        Ok(page)
    }

    pub fn usable_width(&self) -> f64 {
        self.width - 2.0 * self.margin_left_right
    }

    pub fn usable_height(&self) -> f64 {
        self.height - 2.0 * self.margin_top_bottom
    }

    /// The full sheet
    pub fn bbox(&self) -> Rect {
        Rect {
            x_min: 0.0,
            y_min: 0.0,
            x_max: self.width,
            y_max: self.height,
        }
    }

    /// The part of the sheet within the margins
    pub fn usable_area(&self) -> Rect {
        Rect {
            x_min: self.margin_left_right,
            y_min: self.margin_top_bottom,
            x_max: self.width - self.margin_left_right,
            y_max: self.height - self.margin_top_bottom,
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Page::A4
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn a4_usable_area() {
        let page = Page::default();
        assert_eq!(page.usable_width(), 198.0);
        assert_eq!(page.usable_height(), 271.0);
        assert_eq!(
            page.usable_area(),
            Rect::try_new(6.0, 13.0, 204.0, 284.0).unwrap()
        );
        assert!(page.bbox().contains_rect(&page.usable_area()));
    }

    #[test]
    fn margins_must_leave_room() {
        assert!(Page::try_new(100.0, 100.0, 50.0, 10.0).is_err());
        assert!(Page::try_new(100.0, 100.0, 10.0, -1.0).is_err());
        assert!(Page::try_new(100.0, 100.0, 10.0, 10.0).is_ok());
    }

    #[test_case(f64::INFINITY, 297.0, 13.0, 6.0; "infinite width")]
    #[test_case(210.0, f64::NAN, 13.0, 6.0; "nan height")]
    #[test_case(210.0, 297.0, f64::INFINITY, 6.0; "infinite margin")]
    #[test_case(-210.0, 297.0, 13.0, 6.0; "negative width")]
    fn non_finite_pages_are_rejected(w: f64, h: f64, mtb: f64, mlr: f64) {
        assert!(Page::try_new(w, h, mtb, mlr).is_err());
    }
}
