use anyhow::{Result, ensure};

/// Inner dimensions of a box and the thickness of the paper it is folded from, in millimeters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxDims {
    /// Inner width, the horizontal side of the bottom face on the sheet
    pub width: f64,
    /// Inner height, the vertical side of the bottom face on the sheet
    pub height: f64,
    /// Inner depth, the height of the walls once folded
    pub depth: f64,
    /// Thickness of the paper
    pub thickness: f64,
}

/// Outer dimensions of a folded box: every inner dimension grows by the paper on both sides.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OuterDims {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

impl BoxDims {
    pub fn try_new(width: f64, height: f64, depth: f64, thickness: f64) -> Result<Self> {
        for (name, value) in [("width", width), ("height", height), ("depth", depth)] {
            ensure!(
                value.is_finite() && value > 0.0,
                "box {name} must be strictly positive and finite, got: {value}"
            );
        }
        ensure!(
            thickness.is_finite() && thickness >= 0.0,
            "paper thickness must be non-negative and finite, got: {thickness}"
        );
        Ok(Self {
            width,
            height,
            depth,
            thickness,
        })
    }

    pub fn outer(&self) -> OuterDims {
        let wall = 2.0 * self.thickness;
        OuterDims {
            width: self.width + wall,
            height: self.height + wall,
            depth: self.depth + wall,
        }
    }
}

impl Default for BoxDims {
    fn default() -> Self {
        Self {
            width: 59.5 + 2.0,
            height: 90.0 + 2.0,
            depth: 36.0 * 0.5,
            thickness: 0.2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;
    use test_case::test_case;

    #[test]
    fn outer_adds_paper_on_both_sides() {
        let dims = BoxDims::try_new(60.0, 90.0, 20.0, 0.5).unwrap();
        let outer = dims.outer();
        assert!(approx_eq!(f64, outer.width, 61.0));
        assert!(approx_eq!(f64, outer.height, 91.0));
        assert!(approx_eq!(f64, outer.depth, 21.0));
    }

    #[test]
    fn zero_thickness_keeps_inner_dims() {
        let dims = BoxDims::try_new(10.0, 20.0, 5.0, 0.0).unwrap();
        let outer = dims.outer();
        assert_eq!((outer.width, outer.height, outer.depth), (10.0, 20.0, 5.0));
    }

    #[test_case(0.0, 10.0, 10.0, 0.2; "zero width")]
    #[test_case(10.0, -1.0, 10.0, 0.2; "negative height")]
    #[test_case(10.0, 10.0, f64::NAN, 0.2; "nan depth")]
    #[test_case(10.0, 10.0, 10.0, -0.1; "negative thickness")]
    #[test_case(10.0, 10.0, 10.0, f64::INFINITY; "infinite thickness")]
    fn invalid_dims_are_rejected(w: f64, h: f64, d: f64, t: f64) {
        assert!(BoxDims::try_new(w, h, d, t).is_err());
    }
}
