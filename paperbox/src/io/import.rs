use anyhow::{Context, Result};

use crate::entities::{BoxDims, Page};
use crate::io::ext_repr::{ExtBox, ExtPage};

pub fn import_box(ext_box: &ExtBox) -> Result<BoxDims> {
    let ExtBox {
        width,
        height,
        depth,
        thickness,
    } = *ext_box;
    BoxDims::try_new(width, height, depth, thickness).context("invalid box")
}

pub fn import_page(ext_page: &ExtPage) -> Result<Page> {
    let ExtPage {
        width,
        height,
        margin_top_bottom,
        margin_left_right,
    } = *ext_page;
    Page::try_new(width, height, margin_top_bottom, margin_left_right).context("invalid page")
}

impl Default for ExtBox {
    fn default() -> Self {
        let BoxDims {
            width,
            height,
            depth,
            thickness,
        } = BoxDims::default();
        ExtBox {
            width,
            height,
            depth,
            thickness,
        }
    }
}

impl Default for ExtPage {
    fn default() -> Self {
        let Page {
            width,
            height,
            margin_top_bottom,
            margin_left_right,
        } = Page::default();
        ExtPage {
            width,
            height,
            margin_top_bottom,
            margin_left_right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_round_trip_into_entities() {
        assert_eq!(import_box(&ExtBox::default()).unwrap(), BoxDims::default());
        assert_eq!(import_page(&ExtPage::default()).unwrap(), Page::A4);
    }

    #[test]
    fn invalid_inputs_carry_context() {
        let ext_box = ExtBox {
            depth: 0.0,
            ..ExtBox::default()
        };
        let err = import_box(&ext_box).unwrap_err();
        assert_eq!(err.to_string(), "invalid box");
        assert!(format!("{err:#}").contains("depth"));
    }

    #[test]
    fn box_parses_from_json() {
        let json = r#"{"width": 40.0, "height": 60.0, "depth": 15.0, "thickness": 0.3}"#;
        let ext_box: ExtBox = serde_json::from_str(json).unwrap();
        let dims = import_box(&ext_box).unwrap();
        assert_eq!(dims.depth, 15.0);
        assert_eq!(dims.thickness, 0.3);
    }
}
