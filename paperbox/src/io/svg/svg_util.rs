use std::fmt::{Display, Formatter};
use std::str::FromStr;

use anyhow::{Result, bail};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use svg::node::element::Path;
use svg::node::element::path::Data;

use crate::entities::{FoldGuide, PathCmd};

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgDrawOptions {
    ///Color of the cut path and the fold guides
    #[serde(default = "SvgDrawOptions::default_stroke")]
    pub stroke: Color,
    ///Stroke width in millimeters
    #[serde(default = "SvgDrawOptions::default_stroke_width")]
    pub stroke_width: f64,
    ///Fill of the area enclosed by the cut path
    #[serde(default = "SvgDrawOptions::default_fill")]
    pub fill: Color,
    #[serde(default = "SvgDrawOptions::default_fill_opacity")]
    pub fill_opacity: f64,
    ///Dash and gap length of the fold guides, in millimeters
    #[serde(default = "SvgDrawOptions::default_fold_dash")]
    pub fold_dash: [f64; 2],
    ///Draw the fold guides
    #[serde(default = "SvgDrawOptions::default_fold_guides")]
    pub fold_guides: bool,
}

impl SvgDrawOptions {
    fn default_stroke() -> Color {
        Color::BLACK
    }
    fn default_stroke_width() -> f64 {
        0.25
    }
    fn default_fill() -> Color {
        Color::WHITE
    }
    fn default_fill_opacity() -> f64 {
        1.0
    }
    fn default_fold_dash() -> [f64; 2] {
        [2.0, 1.0]
    }
    fn default_fold_guides() -> bool {
        true
    }

    pub fn dasharray(&self) -> String {
        format!("{},{}", self.fold_dash[0], self.fold_dash[1])
    }
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            stroke: Self::default_stroke(),
            stroke_width: Self::default_stroke_width(),
            fill: Self::default_fill(),
            fill_opacity: Self::default_fill_opacity(),
            fold_dash: Self::default_fold_dash(),
            fold_guides: Self::default_fold_guides(),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    pub const BLACK: Color = Color(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color(0xFF, 0xFF, 0xFF);
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl FromStr for Color {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            bail!("invalid color: {s:?}, expected #RRGGBB");
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);
        match (channel(0), channel(2), channel(4)) {
            (Ok(r), Ok(g), Ok(b)) => Ok(Color(r, g, b)),
            _ => bail!("invalid color: {s:?}, expected #RRGGBB"),
        }
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<<S as Serializer>::Ok, <S as Serializer>::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{self}"))
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, <D as Deserializer<'de>>::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Color::from_str(&s).map_err(serde::de::Error::custom)
    }
}

pub fn cut_path_data(cut_path: &[PathCmd]) -> Data {
    cut_path.iter().fold(Data::new(), |data, cmd| match *cmd {
        PathCmd::MoveTo(p) => data.move_to::<(f64, f64)>(p.into()),
        PathCmd::LineBy(dx, dy) => data.line_by((dx, dy)),
        PathCmd::HorizontalBy(dx) => data.horizontal_line_by(dx),
        PathCmd::VerticalBy(dy) => data.vertical_line_by(dy),
        PathCmd::ArcBy { radius, dx, dy } => {
            //x-axis-rotation 0, small arc, positive-angle sweep
            data.elliptical_arc_by((radius, radius, 0.0, 0.0, 1.0, dx, dy))
        }
        PathCmd::Close => data.close(),
    })
}

pub fn fold_guide_data(fold_guide: &FoldGuide) -> Data {
    Data::new()
        .move_to::<(f64, f64)>(fold_guide.start.into())
        .line_by(fold_guide.delta)
}

pub fn data_to_path(data: Data, params: &[(&str, &str)]) -> Path {
    let mut path = Path::new();
    for param in params {
        path = path.set(param.0, param.1)
    }
    path.set("d", data)
}
