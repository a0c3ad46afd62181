use std::f64::consts::FRAC_1_SQRT_2;
use std::fmt::{Display, Formatter};

use anyhow::{Result, ensure};
use itertools::Itertools;
use log::{debug, trace};

use crate::entities::OuterDims;
use crate::geometry::{Point, Rect};
use crate::util::FPA;
use crate::util::assertions;

/// A single command of the cut path.
/// Apart from [`PathCmd::MoveTo`], all commands are relative to the current position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCmd {
    MoveTo(Point),
    LineBy(f64, f64),
    HorizontalBy(f64),
    VerticalBy(f64),
    /// Circular arc with the given radius, drawn as the small arc in the positive-angle (clockwise on screen) direction.
    ArcBy { radius: f64, dx: f64, dy: f64 },
    Close,
}

impl PathCmd {
    /// Displacement caused by a relative command, `None` for [`PathCmd::MoveTo`] and [`PathCmd::Close`]
    pub fn delta(&self) -> Option<(f64, f64)> {
        match *self {
            PathCmd::MoveTo(_) | PathCmd::Close => None,
            PathCmd::LineBy(dx, dy) => Some((dx, dy)),
            PathCmd::HorizontalBy(dx) => Some((dx, 0.0)),
            PathCmd::VerticalBy(dy) => Some((0.0, dy)),
            PathCmd::ArcBy { dx, dy, .. } => Some((dx, dy)),
        }
    }
}

impl Display for PathCmd {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PathCmd::MoveTo(Point(x, y)) => write!(f, "M{x:.3},{y:.3}"),
            PathCmd::LineBy(dx, dy) => write!(f, "l{dx:.3},{dy:.3}"),
            PathCmd::HorizontalBy(dx) => write!(f, "h{dx:.3}"),
            PathCmd::VerticalBy(dy) => write!(f, "v{dy:.3}"),
            PathCmd::ArcBy { radius, dx, dy } => {
                write!(f, "a{radius:.3},{radius:.3},0,0,1,{dx:.3},{dy:.3}")
            }
            PathCmd::Close => write!(f, "z"),
        }
    }
}

/// Short dashed segment marking where the paper has to be folded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FoldGuide {
    pub start: Point,
    pub delta: (f64, f64),
}

impl FoldGuide {
    pub fn end(&self) -> Point {
        self.start.translate(self.delta.0, self.delta.1)
    }

    pub fn length(&self) -> f64 {
        self.start.distance(&self.end())
    }
}

/// Unfolded net of a box: a single closed cut path with a locking tab on top,
/// double-walled side flaps, rounded corner gussets and a floor liner at the bottom.
///
/// The `origin` is the top-left corner of the box body, where the top locking tab is hinged.
#[derive(Clone, Debug)]
pub struct BoxNet {
    pub origin: Point,
    pub dims: OuterDims,
    pub cut_path: Vec<PathCmd>,
    pub fold_guides: Vec<FoldGuide>,
}

impl BoxNet {
    pub fn new(dims: OuterDims, origin: Point) -> Result<Self> {
        let OuterDims {
            width: w,
            height: h,
            depth: d,
        } = dims;
        ensure!(
            FPA(w) >= FPA(d),
            "box width ({w:.3}) must be at least the box depth ({d:.3}) to fit the locking tab"
        );
        ensure!(
            FPA(h) >= FPA(d),
            "box height ({h:.3}) must be at least the box depth ({d:.3}) to fit the side flaps"
        );

        let net = BoxNet {
            origin,
            dims,
            cut_path: cut_path(origin, w, h, d),
            fold_guides: fold_guides(origin, w, h, d),
        };

        debug!(
            "[NET] built net for outer dims {w:.3}x{h:.3}x{d:.3} at {origin}, {} path commands, {} fold guides",
            net.cut_path.len(),
            net.fold_guides.len()
        );
        trace!("[NET] cut path: {}", net.cut_path.iter().join(" "));
        debug_assert!(assertions::net_path_is_closed(&net));
        debug_assert!(assertions::fold_guides_within_net(&net));

        Ok(net)
    }

    /// Size of the net's bounding box: `w + 5d` wide and `2h + 4.5d` high.
    pub fn extents(dims: &OuterDims) -> (f64, f64) {
        (
            dims.width + 5.0 * dims.depth,
            2.0 * dims.height + 4.5 * dims.depth,
        )
    }

    /// Position of the origin relative to the top-left corner of the net's bounding box.
    pub fn origin_offset(dims: &OuterDims) -> (f64, f64) {
        (2.5 * dims.depth, 1.5 * dims.depth)
    }

    /// Absolute positions visited by the cut path, starting with the initial move.
    pub fn vertices(&self) -> Vec<Point> {
        let mut current = self.origin;
        let mut vertices = vec![];
        for cmd in &self.cut_path {
            match (cmd, cmd.delta()) {
                (PathCmd::MoveTo(p), _) => current = *p,
                (_, Some((dx, dy))) => current = current.translate(dx, dy),
                (_, None) => continue,
            }
            vertices.push(current);
        }
        vertices
    }

    /// Bounding box of the cut path.
    /// Every arc is a quarter circle between two of its own extremes, so the vertices suffice.
    pub fn bbox(&self) -> Result<Rect> {
        Rect::bounding(self.vertices())
    }

    pub fn translate(self, dx: f64, dy: f64) -> Self {
        let cut_path = self
            .cut_path
            .into_iter()
            .map(|cmd| match cmd {
                PathCmd::MoveTo(p) => PathCmd::MoveTo(p.translate(dx, dy)),
                relative => relative,
            })
            .collect();
        let fold_guides = self
            .fold_guides
            .into_iter()
            .map(|fg| FoldGuide {
                start: fg.start.translate(dx, dy),
                ..fg
            })
            .collect();
        BoxNet {
            origin: self.origin.translate(dx, dy),
            dims: self.dims,
            cut_path,
            fold_guides,
        }
    }
}

fn cut_path(origin: Point, w: f64, h: f64, d: f64) -> Vec<PathCmd> {
    use PathCmd::*;
    let half = d / 2.0;
    vec![
        MoveTo(origin),
        //locking tab above the top wall
        VerticalBy(-d),
        LineBy(half, -half),
        HorizontalBy(w - d),
        LineBy(half, half),
        VerticalBy(d),
        //top-right gusset
        ArcBy {
            radius: d,
            dx: d,
            dy: d,
        },
        //right wall and its inner flap
        HorizontalBy(d),
        LineBy(half, half),
        VerticalBy(h - d),
        LineBy(-half, half),
        HorizontalBy(-d),
        //bottom-right gusset
        ArcBy {
            radius: d,
            dx: -d,
            dy: d,
        },
        //bottom wall, folded double, followed by the floor liner
        VerticalBy(d + h),
        HorizontalBy(-w),
        VerticalBy(-(d + h)),
        //bottom-left gusset
        ArcBy {
            radius: d,
            dx: -d,
            dy: -d,
        },
        //left wall and its inner flap
        HorizontalBy(-d),
        LineBy(-half, -half),
        VerticalBy(-(h - d)),
        LineBy(half, -half),
        HorizontalBy(d),
        //top-left gusset
        ArcBy {
            radius: d,
            dx: d,
            dy: -d,
        },
        Close,
    ]
}

fn fold_guides(origin: Point, w: f64, h: f64, d: f64) -> Vec<FoldGuide> {
    let k = d * FRAC_1_SQRT_2;
    let guide = |x: f64, y: f64, dx: f64, dy: f64| FoldGuide {
        start: origin.translate(x, y),
        delta: (dx, dy),
    };
    vec![
        //diagonals through the gussets, from the corners of the bottom face
        guide(0.0, d, -k, -k),
        guide(0.0, d + h, -k, k),
        guide(w, d, k, -k),
        guide(w, d + h, k, k),
        //where the bottom wall doubles over
        guide(0.0, 3.0 * d + h, -d / 2.0, 0.0),
        guide(w, 3.0 * d + h, d / 2.0, 0.0),
    ]
}
