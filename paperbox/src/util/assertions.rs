use itertools::Itertools;
use log::error;

use crate::entities::{BoxNet, Page, PathCmd};
use crate::util::FPA;

//Various checks to verify correctness of generated nets
//Used in debug_assertion!() blocks

pub fn net_path_is_closed(net: &BoxNet) -> bool {
    let starts_with_move = matches!(net.cut_path.first(), Some(PathCmd::MoveTo(_)));
    let ends_with_close = matches!(net.cut_path.last(), Some(PathCmd::Close));
    let only_one_move = net
        .cut_path
        .iter()
        .filter(|cmd| matches!(cmd, PathCmd::MoveTo(_)))
        .count()
        == 1;

    let (sum_dx, sum_dy) = net
        .cut_path
        .iter()
        .filter_map(|cmd| cmd.delta())
        .fold((0.0, 0.0), |(sx, sy), (dx, dy)| (sx + dx, sy + dy));
    let returns_to_start = FPA(sum_dx) == FPA(0.0) && FPA(sum_dy) == FPA(0.0);

    if !returns_to_start {
        error!("[ASSERT] cut path does not return to its start, residual: ({sum_dx}, {sum_dy})");
    }

    starts_with_move && ends_with_close && only_one_move && returns_to_start
}

pub fn net_has_no_zero_length_segments(net: &BoxNet) -> bool {
    net.vertices()
        .into_iter()
        .tuple_windows()
        .all(|(a, b)| FPA(a.distance(&b)) != FPA(0.0))
}

pub fn fold_guides_within_net(net: &BoxNet) -> bool {
    let Ok(bbox) = net.bbox() else {
        return false;
    };
    net.fold_guides
        .iter()
        .all(|fg| bbox.contains_point(fg.start) && bbox.contains_point(fg.end()))
}

pub fn net_within_usable_area(net: &BoxNet, page: &Page) -> bool {
    match net.bbox() {
        Ok(bbox) => page.usable_area().contains_rect(&bbox),
        Err(_) => false,
    }
}
