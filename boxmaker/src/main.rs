use anyhow::Result;
use boxmaker::config::BoxMakerConfig;
use boxmaker::io;
use boxmaker::io::cli::Cli;
use clap::Parser as ClapParser;
use log::{info, warn};
use paperbox::io::export::export_report;
use paperbox::io::import::{import_box, import_page};
use paperbox::io::svg::net_to_svg;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            BoxMakerConfig::default()
        }
        Some(config_file) => io::read_config(&config_file)?,
    };

    info!("[MAIN] Successfully parsed BoxMakerConfig: {config:?}");

    let dims = import_box(&config.box_dims)?;
    let page = import_page(&config.page)?;

    let (net, placement) = boxmaker::generate(&dims, &page, config.align)?;

    boxmaker::check_fit(&placement, &page, args.strict)?;

    let svg = net_to_svg(&net, &page, config.svg_draw_options)?;
    io::write_svg(&svg, &args.output)?;

    if let Some(report_path) = args.report {
        let report = export_report(&net, &page, &placement)?;
        io::write_json(&report, &report_path)?;
    }

    Ok(())
}
