use std::error::Error;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{debug, info};

use crate::config::fractal_config::FractalConfig;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::controllers::render::{RenderError, render_frame};
use crate::core::colour::palette::Palette;
use crate::core::data::complex::Complex;

/// Constants rendered when a batch run is not given its own list.
pub const DEFAULT_BATCH_CONSTANTS: [Complex; 7] = [
    Complex::new(-0.48, -0.595),
    Complex::new(0.52, -0.125),
    Complex::new(0.495, -0.6),
    Complex::new(-0.59, -0.61),
    Complex::new(-0.575, 0.6),
    Complex::new(-0.36, -0.685),
    Complex::new(0.085, -0.785),
];

#[derive(Debug)]
pub enum BatchError {
    Render { index: usize, source: RenderError },
    Io { path: PathBuf, source: std::io::Error },
}

impl fmt::Display for BatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Render { index, source } => {
                write!(f, "failed to render image {}: {}", index, source)
            }
            Self::Io { path, source } => {
                write!(f, "failed to write {}: {}", path.display(), source)
            }
        }
    }
}

impl Error for BatchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Render { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
        }
    }
}

/// `image{index}.{extension}`, `index` counting from 1.
#[must_use]
pub fn batch_file_name(index: usize, extension: &str) -> String {
    format!("image{}.{}", index, extension)
}

/// Renders one image per constant with a shared view, palette and policy.
pub struct BatchController<P: FilePresenterPort> {
    presenter: P,
    config: FractalConfig,
}

impl<P: FilePresenterPort> BatchController<P> {
    pub fn new(presenter: P, config: FractalConfig) -> Self {
        Self { presenter, config }
    }

    /// Writes `image1`, `image2`, ... into `output_dir`, creating it if needed,
    /// and returns the written paths in order.
    pub fn run(&self, constants: &[Complex], output_dir: &Path) -> Result<Vec<PathBuf>, BatchError> {
        std::fs::create_dir_all(output_dir).map_err(|source| BatchError::Io {
            path: output_dir.to_path_buf(),
            source,
        })?;

        let palette = Palette::build(self.config.palette, self.config.params.max_iterations())
            .map_err(|err| BatchError::Render {
                index: 0,
                source: err.into(),
            })?;

        info!(
            images = constants.len(),
            palette = %self.config.palette,
            policy = %self.config.policy,
            iteration_fn = %self.config.iteration_fn,
            "starting batch"
        );

        let mut written = Vec::with_capacity(constants.len());

        for (offset, &c) in constants.iter().enumerate() {
            let index = offset + 1;
            let start = Instant::now();
            let buffer = render_frame(&self.config.with_constant(c), &palette)
                .map_err(|source| BatchError::Render { index, source })?;

            let path = output_dir.join(batch_file_name(index, self.presenter.extension()));
            self.presenter
                .present(&buffer, &path)
                .map_err(|source| BatchError::Io {
                    path: path.clone(),
                    source,
                })?;

            debug!(%c, elapsed = ?start.elapsed(), "rendered batch image");
            info!(path = %path.display(), "saved");

            written.push(path);
        }

        Ok(written)
    }
}
