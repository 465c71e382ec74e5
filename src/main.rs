use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, ValueEnum};

use dominant::extract_from_path;

/// Print the dominant-color palette of an image as hex strings, one per line,
/// most frequent color first.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Path to the image to quantize
    image: PathBuf,

    /// Number of palette entries to request
    colors: usize,

    /// How the image path is interpreted
    #[arg(long, value_enum, default_value_t = PathMode::AsGiven)]
    path_mode: PathMode,

    /// Sample factor handed to the quantizer, from 1 (thorough) to 30 (fast)
    #[arg(short, long, default_value_t = 10)]
    quality: u32,
}

#[derive(Debug, Copy, Clone, ValueEnum)]
enum PathMode {
    /// Use the path exactly as given
    AsGiven,
    /// Prefix relative paths with the current directory; absolute paths pass
    /// through unchanged
    RelativeToCwd,
}

impl PathMode {
    fn resolve(self, path: &Path) -> PathBuf {
        match self {
            PathMode::AsGiven => path.to_path_buf(),
            PathMode::RelativeToCwd => Path::new(".").join(path),
        }
    }
}

fn main() {
    let args = Args::parse();
    let path = args.path_mode.resolve(&args.image);

    match extract_from_path(&path, args.colors, args.quality) {
        Ok(palette) => println!("{}", palette),
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    }
}
