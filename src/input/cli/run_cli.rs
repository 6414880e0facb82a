use std::error::Error;

use crate::controllers::animation::assemble::AssembleController;
use crate::controllers::animation::controller::AnimationController;
use crate::controllers::still::StillController;
use crate::input::cli::args::{Cli, Command};
use crate::presenters::file::gif::GifAnimationWriter;
use crate::presenters::file::png::PngFilePresenter;

/// Dispatches a parsed command line to its controller.
pub fn run_cli(cli: Cli) -> Result<(), Box<dyn Error + Send + Sync>> {
    match cli.command {
        Command::Still { fractal } => {
            let mut controller = StillController::new(PngFilePresenter::new());
            controller.generate(&fractal.params())?;
            controller.write(fractal.output())?;
        }
        Command::Animate(args) => {
            let controller =
                AnimationController::new(PngFilePresenter::new(), GifAnimationWriter::default());
            controller.animate(args.scenario, &args.config())?;
        }
        Command::Assemble(args) => {
            let controller = AssembleController::new(GifAnimationWriter::default());
            controller.assemble(&args.input_dir, &args.output, args.playback())?;
        }
    }

    Ok(())
}
