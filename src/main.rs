use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use julia_explorer::{
    BatchController, Complex, DEFAULT_BATCH_CONSTANTS, PngFilePresenter, PpmFilePresenter,
    RenderController, Settings, ViewArgs,
};

#[derive(Parser)]
#[command(version, about = "Escape-time Julia and Mandelbrot renderer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a single view to an image file
    Render {
        #[command(flatten)]
        view: ViewArgs,

        /// Output file; a .ppm extension writes PPM, anything else PNG
        #[arg(short, long, default_value = "output/julia.png")]
        output: PathBuf,
    },

    /// Render one image per constant, named image1, image2, ...
    Batch {
        #[command(flatten)]
        view: ViewArgs,

        /// Directory the images are written to
        #[arg(short, long, default_value = "images")]
        output_dir: PathBuf,

        /// Constant as "real,imag"; repeat for several. Defaults to a built-in set.
        #[arg(short = 'c', long = "add-constant", allow_hyphen_values = true, value_name = "RE,IM")]
        constants: Vec<Complex>,

        #[arg(long, value_enum, default_value_t = ImageFormat::Png)]
        format: ImageFormat,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ImageFormat {
    Png,
    Ppm,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match Cli::parse().command {
        Command::Render { view, output } => render(&view, &output),
        Command::Batch {
            view,
            output_dir,
            constants,
            format,
        } => batch(&view, &output_dir, &constants, format),
    }
}

fn render(view: &ViewArgs, output: &Path) -> Result<()> {
    let config = view
        .resolve(Settings::default())?
        .validate()
        .context("invalid view parameters")?;

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    let is_ppm = output
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("ppm"));

    if is_ppm {
        let mut controller = RenderController::new(PpmFilePresenter::new());
        controller.generate(&config)?;
        controller.write(output)?;
    } else {
        let mut controller = RenderController::new(PngFilePresenter::new());
        controller.generate(&config)?;
        controller.write(output)?;
    }

    Ok(())
}

fn batch(view: &ViewArgs, output_dir: &Path, constants: &[Complex], format: ImageFormat) -> Result<()> {
    let config = view
        .resolve(Settings::batch_defaults())?
        .validate()
        .context("invalid view parameters")?;

    let constants = if constants.is_empty() {
        &DEFAULT_BATCH_CONSTANTS[..]
    } else {
        constants
    };

    let written = match format {
        ImageFormat::Png => {
            BatchController::new(PngFilePresenter::new(), config).run(constants, output_dir)?
        }
        ImageFormat::Ppm => {
            BatchController::new(PpmFilePresenter::new(), config).run(constants, output_dir)?
        }
    };

    info!(images = written.len(), dir = %output_dir.display(), "batch complete");

    Ok(())
}
