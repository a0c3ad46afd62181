use std::fmt::{Display, Formatter};

use anyhow::{Result, bail, ensure};
use itertools::{Itertools, MinMaxResult};

use crate::geometry::primitives::Point;
use crate::util::FPA;

///Axis-aligned rectangle
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Rect {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl Rect {
    pub fn try_new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Result<Self> {
        ensure!(
            x_min < x_max && y_min < y_max,
            "invalid rectangle, x_min: {x_min}, x_max: {x_max}, y_min: {y_min}, y_max: {y_max}"
        );
        Ok(Rect {
            x_min,
            y_min,
            x_max,
            y_max,
        })
    }

    /// Returns the smallest rectangle enclosing all `points`.
    pub fn bounding(points: impl IntoIterator<Item = Point> + Clone) -> Result<Self> {
        let (x_min, x_max) = match points.clone().into_iter().map(|p| p.x()).minmax() {
            MinMaxResult::MinMax(min, max) => (min, max),
            MinMaxResult::OneElement(_) | MinMaxResult::NoElements => {
                bail!("at least two points are required to form a bounding rectangle")
            }
        };
        let (y_min, y_max) = match points.into_iter().map(|p| p.y()).minmax() {
            MinMaxResult::MinMax(min, max) => (min, max),
            MinMaxResult::OneElement(_) | MinMaxResult::NoElements => unreachable!(),
        };
        Rect::try_new(x_min, y_min, x_max, y_max)
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    pub fn centroid(&self) -> Point {
        Point(
            (self.x_min + self.x_max) / 2.0,
            (self.y_min + self.y_max) / 2.0,
        )
    }

    pub fn translate(self, dx: f64, dy: f64) -> Self {
        Rect {
            x_min: self.x_min + dx,
            y_min: self.y_min + dy,
            x_max: self.x_max + dx,
            y_max: self.y_max + dy,
        }
    }

    /// Checks whether `other` lies entirely within `self`, with a tolerance for floating point precision.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        FPA::from(self.x_min) <= FPA::from(other.x_min)
            && FPA::from(self.y_min) <= FPA::from(other.y_min)
            && FPA::from(self.x_max) >= FPA::from(other.x_max)
            && FPA::from(self.y_max) >= FPA::from(other.y_max)
    }

    /// Checks whether `point` lies within `self`, with a tolerance for floating point precision.
    pub fn contains_point(&self, point: Point) -> bool {
        FPA::from(self.x_min) <= FPA::from(point.x())
            && FPA::from(self.y_min) <= FPA::from(point.y())
            && FPA::from(self.x_max) >= FPA::from(point.x())
            && FPA::from(self.y_max) >= FPA::from(point.y())
    }
}

impl Display for Rect {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[x_min: {:.3}, y_min: {:.3}, x_max: {:.3}, y_max: {:.3}]",
            self.x_min, self.y_min, self.x_max, self.y_max
        )
    }
}
