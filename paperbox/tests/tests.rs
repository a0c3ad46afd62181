#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;
    use test_case::test_case;

    use paperbox::entities::{BoxDims, BoxNet, Page, Placement, VerticalAlign};
    use paperbox::geometry::Point;
    use paperbox::io::export::export_report;
    use paperbox::io::svg::{SvgDrawOptions, net_to_svg};
    use paperbox::util::assertions;

    fn init_logger() {
        let _ = env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .is_test(true)
            .try_init();
    }

    fn place(dims: &BoxDims, page: &Page, align: VerticalAlign) -> (BoxNet, Placement) {
        let net = BoxNet::new(dims.outer(), Point(0.0, 0.0)).unwrap();
        let placement = Placement::new(net.bbox().unwrap(), page, align);
        (net.translate(placement.dx, placement.dy), placement)
    }

    #[test]
    fn reference_box_fits_on_a4() {
        init_logger();
        let dims = BoxDims::default();
        let page = Page::default();
        let (net, placement) = place(&dims, &page, VerticalAlign::default());
        let bbox = net.bbox().unwrap();

        // outer 61.9 x 92.4 x 18.4
        assert!(approx_eq!(f64, bbox.width(), 61.9 + 5.0 * 18.4, epsilon = 1e-9));
        assert!(approx_eq!(f64, bbox.height(), 2.0 * 92.4 + 4.5 * 18.4, epsilon = 1e-9));
        assert!(placement.fits);
        assert!(assertions::net_within_usable_area(&net, &page));
        assert!(assertions::net_path_is_closed(&net));
        assert!(assertions::net_has_no_zero_length_segments(&net));
        assert!(approx_eq!(f64, bbox.centroid().x(), 105.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, bbox.y_min, 13.0, epsilon = 1e-9));
        // body corner at the same spot as the classic 13 mm + 1.5 d layout
        assert!(approx_eq!(f64, net.origin.x(), 74.05, epsilon = 1e-9));
        assert!(approx_eq!(f64, net.origin.y(), 40.6, epsilon = 1e-9));
    }

    #[test]
    fn center_alignment_is_opt_in() {
        let dims = BoxDims::default();
        let page = Page::default();
        let (net, placement) = place(&dims, &page, VerticalAlign::Center);
        let bbox = net.bbox().unwrap();

        assert!(placement.fits);
        assert!(approx_eq!(f64, bbox.centroid().x(), 105.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, bbox.centroid().y(), 148.5, epsilon = 1e-9));
    }

    #[test]
    fn top_alignment_puts_the_tab_on_the_margin() {
        let dims = BoxDims::default();
        let page = Page::default();
        let (net, _) = place(&dims, &page, VerticalAlign::Top);
        let d = dims.outer().depth;

        assert!(approx_eq!(f64, net.origin.y(), 13.0 + 1.5 * d, epsilon = 1e-9));
        assert!(approx_eq!(
            f64,
            net.origin.x(),
            105.0 - dims.outer().width / 2.0,
            epsilon = 1e-9
        ));
    }

    #[test_case(150.0, 100.0, 20.0; "too wide")]
    #[test_case(60.0, 120.0, 20.0; "too tall")]
    fn oversized_boxes_are_flagged(w: f64, h: f64, d: f64) {
        init_logger();
        let dims = BoxDims::try_new(w, h, d, 0.2).unwrap();
        let page = Page::default();
        let (net, placement) = place(&dims, &page, VerticalAlign::Center);

        assert!(!placement.fits);
        assert!(!assertions::net_within_usable_area(&net, &page));
        // still rendered, centered on the page
        assert!(approx_eq!(f64, net.bbox().unwrap().centroid().x(), 105.0, epsilon = 1e-9));
        assert!(net_to_svg(&net, &page, SvgDrawOptions::default()).is_ok());
    }

    #[test]
    fn report_summarizes_placed_net() {
        let dims = BoxDims::default();
        let page = Page::default();
        let (net, placement) = place(&dims, &page, VerticalAlign::Center);
        let report = export_report(&net, &page, &placement).unwrap();

        assert!(report.fits);
        assert_eq!(report.usable_size, [198.0, 271.0]);
        assert_eq!(report.origin, [net.origin.x(), net.origin.y()]);
        assert!(approx_eq!(f64, report.outer_dims[2], 18.4, epsilon = 1e-9));
    }

    #[test]
    fn rendered_sheet_has_one_cut_path_and_six_guides() {
        let (net, _) = place(&BoxDims::default(), &Page::default(), VerticalAlign::Center);
        let svg = net_to_svg(&net, &Page::default(), SvgDrawOptions::default())
            .unwrap()
            .to_string();

        assert_eq!(svg.matches("<path").count(), 7);
        assert_eq!(svg.matches("stroke-dasharray").count(), 6);
        assert_eq!(svg.matches("id=\"cut_path\"").count(), 1);
    }
}
