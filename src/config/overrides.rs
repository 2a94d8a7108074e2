use crate::config::settings::{Settings, SettingsError};
use crate::core::actions::sample_grid::sample_field::SamplerKind;
use crate::core::colour::colour_policy::ColourPolicy;
use crate::core::data::complex::Complex;
use crate::core::fractals::fractal_mode::FractalMode;
use crate::core::fractals::iteration_fn::IterationFn;
use std::path::PathBuf;

/// View parameters shared by every command line front end. Anything given
/// here wins over the settings file.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ViewArgs {
    /// TOML settings file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub width: Option<u32>,

    #[arg(long)]
    pub height: Option<u32>,

    #[arg(long)]
    pub max_iterations: Option<u32>,

    #[arg(long, allow_negative_numbers = true)]
    pub min_x: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    pub min_y: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    pub max_x: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    pub max_y: Option<f64>,

    /// Escape radius
    #[arg(long)]
    pub radius: Option<f64>,

    /// twilight_shifted_r, twilight, twilight_shifted, viridis, plasma or inferno
    #[arg(long)]
    pub colour_map: Option<String>,

    /// Julia constant as "real,imag"
    #[arg(long, allow_hyphen_values = true, value_name = "RE,IM")]
    pub constant: Option<Complex>,

    /// julia or mandelbrot
    #[arg(long)]
    pub mode: Option<FractalMode>,

    /// quadratic or cubic
    #[arg(long)]
    pub iteration_fn: Option<IterationFn>,

    /// wrap or log
    #[arg(long)]
    pub policy: Option<ColourPolicy>,

    #[arg(long)]
    pub sampler: Option<SamplerKind>,

    /// Frame rate cap for the interactive view
    #[arg(long)]
    pub frame_rate: Option<u32>,
}

impl ViewArgs {
    /// Layers `base`, then the settings file if one was given, then the flags.
    pub fn resolve(&self, base: Settings) -> Result<Settings, SettingsError> {
        let mut settings = match &self.config {
            Some(path) => Settings::load(path, base)?,
            None => base,
        };

        self.apply_to(&mut settings);

        Ok(settings)
    }

    pub fn apply_to(&self, settings: &mut Settings) {
        fn set<T: Clone>(target: &mut T, value: &Option<T>) {
            if let Some(value) = value {
                *target = value.clone();
            }
        }

        set(&mut settings.width, &self.width);
        set(&mut settings.height, &self.height);
        set(&mut settings.max_iterations, &self.max_iterations);
        set(&mut settings.min_x, &self.min_x);
        set(&mut settings.min_y, &self.min_y);
        set(&mut settings.max_x, &self.max_x);
        set(&mut settings.max_y, &self.max_y);
        set(&mut settings.radius, &self.radius);
        set(&mut settings.colour_map, &self.colour_map);
        set(&mut settings.constant, &self.constant);
        set(&mut settings.mode, &self.mode);
        set(&mut settings.iteration_fn, &self.iteration_fn);
        set(&mut settings.policy, &self.policy);
        set(&mut settings.sampler, &self.sampler);
        set(&mut settings.frame_rate, &self.frame_rate);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    #[derive(Parser, Debug)]
    struct TestCli {
        #[command(flatten)]
        view: ViewArgs,
    }

    fn parse(args: &[&str]) -> ViewArgs {
        TestCli::parse_from(std::iter::once("test").chain(args.iter().copied())).view
    }

    #[test]
    fn no_flags_keep_base() {
        let settings = parse(&[]).resolve(Settings::batch_defaults()).unwrap();

        assert_eq!(settings, Settings::batch_defaults());
    }

    #[test]
    fn flags_override_fields() {
        let settings = parse(&[
            "--width",
            "320",
            "--min-x",
            "-2.5",
            "--constant",
            "-0.8,0.156",
            "--mode",
            "mandelbrot",
            "--policy",
            "log",
            "--sampler",
            "banded",
        ])
        .resolve(Settings::default())
        .unwrap();

        assert_eq!(settings.width, 320);
        assert_eq!(settings.min_x, -2.5);
        assert_eq!(settings.constant, Complex::new(-0.8, 0.156));
        assert_eq!(settings.mode, FractalMode::Mandelbrot);
        assert_eq!(settings.policy, ColourPolicy::Log);
        assert_eq!(settings.sampler, SamplerKind::Banded);
        assert_eq!(settings.height, 600);
    }

    #[test]
    fn flags_win_over_settings_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "width = 100").unwrap();
        writeln!(file, "height = 50").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let settings = parse(&["--config", &path, "--width", "80"])
            .resolve(Settings::default())
            .unwrap();

        assert_eq!(settings.width, 80);
        assert_eq!(settings.height, 50);
    }
}
