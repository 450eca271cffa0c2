use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use mandelzoom::{
    ChunkSchedule, Complex, ImageController, PpmFilePresenter, RegionSettings, RenderSettings,
    ZoomController,
};

#[derive(Debug, Parser)]
#[command(name = "mandelzoom", version, about = "Render Mandelbrot images and zoom sequences")]
struct Cli {
    #[command(flatten)]
    render: RenderArgs,

    #[command(subcommand)]
    command: Command,
}

/// Overrides applied on top of the config file (or the defaults).
#[derive(Debug, Args)]
struct RenderArgs {
    /// JSON file with render settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, global = true)]
    width: Option<u32>,

    #[arg(long, global = true)]
    height: Option<u32>,

    #[arg(long, global = true, allow_negative_numbers = true)]
    max_iterations: Option<i64>,

    /// Evaluate the grid in vertical strips of this many columns
    #[arg(long, global = true, allow_negative_numbers = true)]
    chunk_size: Option<i64>,

    #[arg(long, global = true, value_enum)]
    chunk_schedule: Option<ScheduleArg>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ScheduleArg {
    Sequential,
    Parallel,
}

impl From<ScheduleArg> for ChunkSchedule {
    fn from(arg: ScheduleArg) -> Self {
        match arg {
            ScheduleArg::Sequential => ChunkSchedule::Sequential,
            ScheduleArg::Parallel => ChunkSchedule::Parallel,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render one image of an explicit region
    Image {
        #[arg(long, default_value = "output/mandelbrot.ppm")]
        output: PathBuf,

        /// Region as RE_MIN RE_MAX IM_MIN IM_MAX
        #[arg(long, num_args = 4, allow_negative_numbers = true, value_names = ["RE_MIN", "RE_MAX", "IM_MIN", "IM_MAX"])]
        region: Option<Vec<f64>>,
    },

    /// Render a zoom sequence toward a fixed centre
    Zoom {
        #[arg(long, default_value = "output/frames")]
        output_dir: PathBuf,

        /// Centre as RE IM
        #[arg(long, num_args = 2, allow_negative_numbers = true, value_names = ["RE", "IM"])]
        center: Option<Vec<f64>>,

        #[arg(long)]
        zoom_factor: Option<f64>,

        #[arg(long)]
        frames: Option<u32>,
    },
}

impl RenderArgs {
    fn settings(&self) -> Result<RenderSettings> {
        let mut settings = match &self.config {
            Some(path) => RenderSettings::from_json_file(path)
                .with_context(|| format!("loading settings from {}", path.display()))?,
            None => RenderSettings::default(),
        };

        if let Some(width) = self.width {
            settings.pixel_width = width;
        }
        if let Some(height) = self.height {
            settings.pixel_height = height;
        }
        if let Some(max_iterations) = self.max_iterations {
            settings.max_iterations = max_iterations;
        }
        if let Some(chunk_size) = self.chunk_size {
            settings.chunk_size = Some(chunk_size);
        }
        if let Some(schedule) = self.chunk_schedule {
            settings.chunk_schedule = schedule.into();
        }

        Ok(settings)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let mut settings = cli.render.settings()?;

    match cli.command {
        Command::Image { output, region } => {
            if let Some([re_min, re_max, im_min, im_max]) = region.as_deref() {
                settings.region = RegionSettings {
                    re_min: *re_min,
                    re_max: *re_max,
                    im_min: *im_min,
                    im_max: *im_max,
                };
            }

            let config = settings.validate().context("invalid render settings")?;
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }

            let mut controller = ImageController::new(PpmFilePresenter::new(), config);
            controller.generate()?;
            controller.write(&output)?;
        }
        Command::Zoom {
            output_dir,
            center,
            zoom_factor,
            frames,
        } => {
            if let Some([real, imag]) = center.as_deref() {
                settings.center = Complex::new(*real, *imag);
            }
            if let Some(zoom_factor) = zoom_factor {
                settings.zoom_factor = zoom_factor;
            }
            if let Some(frames) = frames {
                settings.num_frames = frames;
            }

            let config = settings.validate_zoom().context("invalid render settings")?;
            let controller = ZoomController::new(PpmFilePresenter::new(), config);
            let paths = controller.run(&output_dir)?;

            tracing::info!(
                frames = paths.len(),
                dir = %output_dir.display(),
                "zoom sequence saved"
            );
        }
    }

    Ok(())
}
