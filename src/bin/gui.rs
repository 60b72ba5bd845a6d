fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let presenter_factory = mandelbrot_explorer::PixelsPresenterFactory::new();
    let command = mandelbrot_explorer::RunGuiCommand::new(
        presenter_factory,
        mandelbrot_explorer::MandelbrotConfig::default(),
    );

    command.execute()
}
