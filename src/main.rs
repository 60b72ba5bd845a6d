use std::path::PathBuf;

use clap::Parser;
use log::info;
use mandelbrot_explorer::{
    CliRenderController, InputEvent, MandelbrotConfig, PpmFilePresenter, RenderMode, Rgba,
    Viewport, parse_hex_colour,
};

#[derive(Parser, Debug)]
#[command(name = "mandelbrot_explorer")]
#[command(about = "Render a Mandelbrot view to a PPM image")]
struct Args {
    /// Image width in pixels
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Escape-time cutoff
    #[arg(long, default_value_t = 1000, value_parser = clap::value_parser!(u32).range(1..))]
    max_iterations: u32,

    /// Base colour as hexadecimal RGBA, e.g. AAAAAAFF
    #[arg(long, default_value = "AAAAAAFF", value_parser = parse_hex_colour)]
    colour: Rgba,

    /// Paint the view axes in green
    #[arg(long)]
    debug_axes: bool,

    /// Render on the calling thread only
    #[arg(long)]
    serial: bool,

    /// Where to write the image
    #[arg(short, long, default_value = "output/mandelbrot.ppm")]
    output: PathBuf,

    /// Input event to replay before rendering, e.g. click:400,300 or scroll:-2.
    /// Repeatable; applied in order.
    #[arg(long = "event", value_name = "EVENT")]
    events: Vec<InputEvent>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = Args::parse();
    let render_mode = if args.serial {
        RenderMode::Serial
    } else {
        RenderMode::Parallel
    };
    let config = MandelbrotConfig::new(args.max_iterations, args.colour, args.debug_axes, render_mode)?;
    let viewport = Viewport::new(args.width, args.height)?;

    info!(
        "rendering {}x{} with {} max iterations, base colour {}",
        args.width, args.height, args.max_iterations, args.colour
    );

    if let Some(parent) = args.output.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let mut controller = CliRenderController::new(PpmFilePresenter::new(), config, viewport)?;
    controller.replay(args.events)?;
    controller.write(&args.output)?;

    Ok(())
}
