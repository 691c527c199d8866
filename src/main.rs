use clap::Parser;
use colour_transition::{
    FilePresenterPort, GradientArgs, GradientCliController, OutputFormat, PngFilePresenter,
    PpmFilePresenter, Swatch,
};

fn render<P: FilePresenterPort>(
    presenter: P,
    args: &GradientArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut controller = GradientCliController::new(presenter, args.parallel);

    controller.generate(args.width, args.height)?;
    controller.write(&args.output)?;

    Ok(())
}

fn run(args: GradientArgs) -> Result<(), Box<dyn std::error::Error>> {
    let swatch = Swatch::new(args.time);
    println!("{}", swatch.time_label());
    println!("{}", swatch.readout());

    match OutputFormat::from_path(&args.output) {
        OutputFormat::Ppm => render(PpmFilePresenter::new(), &args),
        OutputFormat::Png => render(PngFilePresenter::new(), &args),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    run(GradientArgs::parse())
}
