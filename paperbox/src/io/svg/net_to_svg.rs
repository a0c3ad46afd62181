use anyhow::Result;
use svg::Document;
use svg::node::element::{Group, Title};

use crate::entities::{BoxNet, Page};
use crate::io::svg::svg_util;
use crate::io::svg::svg_util::SvgDrawOptions;

/// Renders a (placed) net onto a page.
/// The document is sized in millimeters and its user units are millimeters as well.
pub fn net_to_svg(net: &BoxNet, page: &Page, options: SvgDrawOptions) -> Result<Document> {
    let bbox = net.bbox()?;
    let stroke = format!("{}", options.stroke);
    let stroke_width = format!("{}", options.stroke_width);
    let fill = format!("{}", options.fill);
    let fill_opacity = format!("{}", options.fill_opacity);

    let base_style = [
        ("stroke", stroke.as_str()),
        ("stroke-width", stroke_width.as_str()),
        ("fill", fill.as_str()),
        ("fill-opacity", fill_opacity.as_str()),
    ];

    let title = Title::new(format!(
        "box net, outer dims: {:.3}x{:.3}x{:.3} mm, bbox: {}",
        net.dims.width, net.dims.height, net.dims.depth, bbox
    ));

    let mut net_group = Group::new()
        .set("id", "box_net")
        .add(title)
        .add(
            svg_util::data_to_path(svg_util::cut_path_data(&net.cut_path), &base_style)
                .set("id", "cut_path"),
        );

    if options.fold_guides {
        let dasharray = options.dasharray();
        let guide_style = [
            ("stroke", stroke.as_str()),
            ("stroke-width", stroke_width.as_str()),
            ("stroke-dasharray", dasharray.as_str()),
            ("fill", "none"),
        ];
        for fg in &net.fold_guides {
            net_group = net_group.add(svg_util::data_to_path(
                svg_util::fold_guide_data(fg),
                &guide_style,
            ));
        }
    }

    Ok(Document::new()
        .set("width", format!("{}mm", page.width))
        .set("height", format!("{}mm", page.height))
        .set("viewBox", format!("0 0 {} {}", page.width, page.height))
        .add(net_group))
}
