// src/main.rs
use anyhow::{bail, Context, Result};
use clap::Parser;
use colorful::Colorful;
use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use freqpaint::core::SpectralSession;
use freqpaint::render::{self, Colormap};
use freqpaint::report::SessionReport;

#[derive(Parser, Debug)]
#[command(name = "freqpaint")]
#[command(about = "Visualize image frequency spectra and reconstruct with painted-out frequencies")]
struct Args {
    /// Input image file or directory
    #[arg(short, long)]
    input: PathBuf,

    /// Grayscale attenuation mask aligned with the spectrum view (white = suppress)
    #[arg(short, long)]
    mask: Option<PathBuf>,

    /// Output directory
    #[arg(short, long, default_value = "freqpaint-out")]
    output: PathBuf,

    /// Save the centered log-magnitude spectrum view
    #[arg(short, long)]
    spectrum: bool,

    /// Colormap for the spectrum view (grayscale, viridis)
    #[arg(long, default_value = "grayscale")]
    colormap: String,

    /// Write a JSON report next to each output
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let colormap = Colormap::from_name(&args.colormap)
        .with_context(|| format!("unknown colormap: {}", args.colormap))?;

    std::fs::create_dir_all(&args.output)?;

    let image_files = collect_image_files(&args.input)?;

    if image_files.is_empty() {
        println!("{}", "No image files found!".red());
        return Ok(());
    }

    println!("Found {} image file(s)\n", image_files.len());

    if image_files.len() == 1 {
        process_file(&image_files[0], &args, colormap)?;
    } else {
        let bar = ProgressBar::new(image_files.len() as u64).with_style(
            ProgressStyle::with_template("{bar:40} {pos}/{len} {msg}")
                .expect("static progress template"),
        );
        image_files
            .par_iter()
            .progress_with(bar)
            .map(|path| process_file(path, &args, colormap))
            .collect::<Result<Vec<_>>>()?;
    }

    Ok(())
}

fn collect_image_files(path: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let image_extensions = ["png", "jpg", "jpeg", "bmp", "tiff", "tif"];

    if path.is_file() {
        files.push(path.to_path_buf());
    } else if path.is_dir() {
        for entry in WalkDir::new(path)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if let Some(ext) = path.extension() {
                if image_extensions.contains(&ext.to_str().unwrap_or("").to_lowercase().as_str()) {
                    files.push(path.to_path_buf());
                }
            }
        }
    } else {
        bail!("input does not exist: {}", path.display());
    }

    Ok(files)
}

fn process_file(file_path: &Path, args: &Args, colormap: Colormap) -> Result<()> {
    println!("Processing: {}", file_path.display().to_string().cyan());

    let (pixels, width, height) = render::load_intensity(file_path)?;
    let mut session = SpectralSession::load(&pixels, width, height)
        .with_context(|| format!("cannot analyze {}", file_path.display()))?;

    let stem = file_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("image");

    if args.spectrum {
        let view = session.spectrum_view();
        let out = args.output.join(format!("{stem}_spectrum.png"));
        render::save_view(&view, width, height, colormap, &out)?;
        if args.verbose {
            println!("  Spectrum view: {}", out.display());
        }
    }

    let reconstruction = session.reconstruct()?;
    let out = args.output.join(format!("{stem}_reconstructed.png"));
    render::save_grayscale(&reconstruction, width, height, &out)?;
    if args.verbose {
        println!("  Reconstruction: {}", out.display());
    }

    let mut report = SessionReport::from_spectrum(&file_path.display().to_string(), session.spectrum());

    if let Some(mask_path) = &args.mask {
        let mask = render::load_mask(mask_path, width, height)?;
        let filtered = session.apply_stroke_mask(&mask)?;

        let out = args.output.join(format!("{stem}_filtered.png"));
        render::save_grayscale(&filtered, width, height, &out)?;
        println!("  Filtered: {}", out.display().to_string().green());

        report = report.with_mask(&mask);
    }

    if args.json {
        let out = args.output.join(format!("{stem}_report.json"));
        std::fs::write(&out, serde_json::to_string_pretty(&report)?)?;
        if args.verbose {
            println!("  Report: {}", out.display());
        }
    }

    println!(
        "  {}x{}  DC magnitude {:.1}",
        width, height, report.dc_magnitude
    );
    println!();
    Ok(())
}
