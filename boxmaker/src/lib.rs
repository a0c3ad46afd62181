use std::sync::LazyLock;
use std::time::Instant;

use anyhow::{Result, bail};
use log::info;
use paperbox::entities::{BoxDims, BoxNet, Page, Placement, VerticalAlign};
use paperbox::geometry::Point;
use paperbox::util::assertions;

pub mod config;
pub mod io;

pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);

/// Builds the net of a box and centers it on the page.
/// A net that does not fit is still returned, check [`Placement::fits`].
pub fn generate(dims: &BoxDims, page: &Page, align: VerticalAlign) -> Result<(BoxNet, Placement)> {
    let outer = dims.outer();
    info!(
        "[GEN] inner dims {:.3}x{:.3}x{:.3} mm, paper {:.3} mm, outer dims {:.3}x{:.3}x{:.3} mm",
        dims.width, dims.height, dims.depth, dims.thickness, outer.width, outer.height, outer.depth
    );

    let net = BoxNet::new(outer, Point(0.0, 0.0))?;
    let placement = Placement::new(net.bbox()?, page, align);
    let net = net.translate(placement.dx, placement.dy);

    debug_assert!(!placement.fits || assertions::net_within_usable_area(&net, page));
    info!("[GEN] net placed with its body at {}", net.origin);

    Ok((net, placement))
}

/// Turns a net that does not fit within the margins into an error when `strict` is set.
pub fn check_fit(placement: &Placement, page: &Page, strict: bool) -> Result<()> {
    if !placement.fits && strict {
        bail!(
            "net of {:.1}x{:.1} mm does not fit on the page (usable area: {:.1}x{:.1} mm)",
            placement.bbox.width(),
            placement.bbox.height(),
            page.usable_width(),
            page.usable_height()
        );
    }
    Ok(())
}
