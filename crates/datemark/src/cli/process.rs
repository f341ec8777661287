//! The `datemark process` command: watermark one image or a directory.

use clap::{Args, ValueEnum};
use datemark_core::{watermark::parse_color, Config, Placement, Processor};
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the `process` command.
#[derive(Args, Debug)]
pub struct ProcessArgs {
    /// Image file or directory to process
    #[arg(required = true)]
    pub input: PathBuf,

    /// Font size in pixels
    #[arg(short = 's', long)]
    pub size: Option<u32>,

    /// Watermark color: named ("white") or hex ("#RRGGBB")
    #[arg(short, long)]
    pub color: Option<String>,

    /// Watermark placement
    #[arg(short, long, value_enum)]
    pub placement: Option<PlacementArg>,

    /// Disable the legibility box behind the text
    #[arg(long)]
    pub no_background: bool,

    /// Font file to prefer over the platform defaults
    #[arg(long)]
    pub font: Option<PathBuf>,
}

/// Placement choices exposed on the CLI, mirroring the core enum.
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum PlacementArg {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Center,
}

impl From<PlacementArg> for Placement {
    fn from(arg: PlacementArg) -> Self {
        match arg {
            PlacementArg::TopLeft => Placement::TopLeft,
            PlacementArg::TopRight => Placement::TopRight,
            PlacementArg::BottomLeft => Placement::BottomLeft,
            PlacementArg::BottomRight => Placement::BottomRight,
            PlacementArg::Center => Placement::Center,
        }
    }
}

/// Execute the process command.
pub fn execute(args: ProcessArgs, mut config: Config) -> anyhow::Result<()> {
    apply_overrides(&args, &mut config)?;

    let processor = Processor::new(&config)?;
    let plan = processor.plan(&args.input)?;

    if plan.jobs.is_empty() {
        tracing::warn!("No supported image files found at {:?}", args.input);
        return Ok(());
    }
    if let Some(dir) = &plan.output_dir {
        tracing::info!("Output directory: {}", dir.display());
    }

    let progress = create_progress_bar(plan.jobs.len() as u64);
    let start_time = Instant::now();
    let mut succeeded: u64 = 0;
    let mut failed: u64 = 0;

    for job in &plan.jobs {
        match processor.process_file(job) {
            Ok(()) => succeeded += 1,
            Err(e) => {
                failed += 1;
                tracing::error!("Failed: {:?} - {}", job.input, e);
            }
        }
        progress.inc(1);
    }

    progress.finish_and_clear();
    print_summary(succeeded, failed, start_time.elapsed());

    Ok(())
}

/// Fold CLI flags into the loaded configuration.
fn apply_overrides(args: &ProcessArgs, config: &mut Config) -> anyhow::Result<()> {
    if let Some(size) = args.size {
        anyhow::ensure!(size > 0, "--size must be > 0");
        config.watermark.font_size = size;
    }
    if let Some(color) = &args.color {
        anyhow::ensure!(
            parse_color(color).is_some(),
            "unrecognized color: {color:?}"
        );
        config.watermark.color = color.clone();
    }
    if let Some(placement) = args.placement {
        config.watermark.placement = placement.into();
    }
    if args.no_background {
        config.watermark.background = false;
    }
    if let Some(font) = &args.font {
        config.font.path = Some(font.clone());
    }
    Ok(())
}

/// Create a progress bar for batch processing.
fn create_progress_bar(total: u64) -> indicatif::ProgressBar {
    use indicatif::{ProgressBar, ProgressStyle};

    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap()
            .progress_chars("##-"),
    );
    pb
}

/// Print a formatted summary after a run.
fn print_summary(succeeded: u64, failed: u64, elapsed: std::time::Duration) {
    let total = succeeded + failed;

    eprintln!();
    eprintln!("  ====================================");
    eprintln!("               Summary");
    eprintln!("  ====================================");
    eprintln!("    Succeeded:    {:>8}", succeeded);
    if failed > 0 {
        eprintln!("    Failed:       {:>8}", failed);
    }
    eprintln!("  ------------------------------------");
    eprintln!("    Total:        {:>8}", total);
    eprintln!("    Duration:     {:>7.1}s", elapsed.as_secs_f64());
    eprintln!("  ====================================");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> ProcessArgs {
        ProcessArgs {
            input: PathBuf::from("photos"),
            size: None,
            color: None,
            placement: None,
            no_background: false,
            font: None,
        }
    }

    #[test]
    fn test_overrides_applied() {
        let mut args = base_args();
        args.size = Some(40);
        args.color = Some("#102030".to_string());
        args.placement = Some(PlacementArg::Center);
        args.no_background = true;
        args.font = Some(PathBuf::from("/tmp/f.ttf"));

        let mut config = Config::default();
        apply_overrides(&args, &mut config).unwrap();

        assert_eq!(config.watermark.font_size, 40);
        assert_eq!(config.watermark.color, "#102030");
        assert_eq!(config.watermark.placement, Placement::Center);
        assert!(!config.watermark.background);
        assert_eq!(config.font.path, Some(PathBuf::from("/tmp/f.ttf")));
    }

    #[test]
    fn test_overrides_keep_defaults_when_unset() {
        let mut config = Config::default();
        apply_overrides(&base_args(), &mut config).unwrap();
        assert_eq!(config.watermark.font_size, 24);
        assert_eq!(config.watermark.placement, Placement::BottomRight);
        assert!(config.watermark.background);
    }

    #[test]
    fn test_overrides_reject_bad_values() {
        let mut args = base_args();
        args.size = Some(0);
        assert!(apply_overrides(&args, &mut Config::default()).is_err());

        let mut args = base_args();
        args.color = Some("plaid".to_string());
        assert!(apply_overrides(&args, &mut Config::default()).is_err());
    }

    #[test]
    fn test_placement_arg_maps_to_core() {
        assert_eq!(Placement::from(PlacementArg::TopLeft), Placement::TopLeft);
        assert_eq!(
            Placement::from(PlacementArg::BottomRight),
            Placement::BottomRight
        );
        assert_eq!(Placement::from(PlacementArg::Center), Placement::Center);
    }
}
