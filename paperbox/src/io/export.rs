use anyhow::Result;

use crate::entities::{BoxNet, Page, Placement};
use crate::io::ext_repr::ExtNetReport;

/// Summarizes a placed net.
pub fn export_report(net: &BoxNet, page: &Page, placement: &Placement) -> Result<ExtNetReport> {
    let bbox = net.bbox()?;
    Ok(ExtNetReport {
        outer_dims: [net.dims.width, net.dims.height, net.dims.depth],
        net_size: [bbox.width(), bbox.height()],
        usable_size: [page.usable_width(), page.usable_height()],
        origin: [net.origin.x(), net.origin.y()],
        fits: placement.fits,
    })
}
