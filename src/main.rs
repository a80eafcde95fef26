use clap::{CommandFactory, Parser};
use respic::imaging::RustBackend;
use respic::{config, output, pipeline};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "respic")]
#[command(about = "Generate responsively-sized image variants and <picture> markup")]
#[command(long_about = "\
Generate responsively-sized image variants and <picture> markup

For each input image, respic writes a sibling directory named after the file
(photo.jpg → photo/) containing one derivative per requested width, density
multiplier, and codec, then prints the matching <picture> fragment:

  photo/
  ├── 288w1d.webp        # 288px wide, density 1
  ├── 288w1d.jpg
  ├── 288w2d.webp        # 576px wide, served at 2x
  └── ...

Codecs follow the source: JPEG/HEIC inputs produce WebP + JPEG at the
configured quality; PNG inputs stay lossless PNG. EXIF orientation is
resolved before resizing, so derivatives are always upright.

Files are processed in parallel and independently: one bad file is reported
and skipped, the rest of the batch completes.")]
#[command(version)]
struct Cli {
    /// URL prefix prepended to every path emitted in markup
    #[arg(long = "pre", default_value = "/", value_name = "PREFIX")]
    prefix: String,

    /// Highest pixel-density multiplier to generate
    #[arg(long = "dpr", default_value_t = 3, value_parser = clap::value_parser!(u32).range(1..))]
    density: u32,

    /// Lossy encode quality for JPEG and WebP (worst 1 <-> 100 best)
    #[arg(long = "qual", default_value_t = 75, value_parser = clap::value_parser!(u8).range(1..=100))]
    quality: u8,

    /// Comma-separated pixel widths to generate
    #[arg(long, default_value = "288", value_name = "LIST")]
    widths: String,

    /// Worker threads (0 = one per available core)
    #[arg(long, default_value_t = 0)]
    jobs: usize,

    /// Input image files (jpg, jpeg, png, heic)
    #[arg(required = true, value_name = "FILE")]
    files: Vec<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let (widths, warnings) = config::parse_widths(&cli.widths);
    for line in output::format_width_warnings(&warnings) {
        eprintln!("{line}");
    }
    if widths.is_empty() {
        eprintln!("no usable widths in '{}'", cli.widths);
        let _ = Cli::command().print_help();
        return ExitCode::FAILURE;
    }

    init_thread_pool(cli.jobs);

    let config = config::RunConfig {
        prefix: cli.prefix,
        density: cli.density,
        quality: cli.quality,
        widths,
    };

    let summary = pipeline::run(&RustBackend::new(), &config, &cli.files);
    println!("{}", output::format_summary(&summary));

    // Per-file failures were already reported; only invocation-level
    // validation affects the exit status.
    ExitCode::SUCCESS
}

/// Size the rayon pool from --jobs; 0 keeps rayon's default of one worker
/// per available core.
fn init_thread_pool(jobs: usize) {
    if jobs > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build_global()
            .ok();
    }
}
