//! Compress command implementation.

use super::OutputOptions;
use crate::utils::{compressed_path, create_progress_bar, savings_percent};
use std::path::PathBuf;

pub fn cmd_compress(
    files: &[PathBuf],
    options: &OutputOptions,
    progress: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    options.validate(files.len())?;

    let pb = create_progress_bar(files.len() as u64, progress && !options.stdout);
    let mut total_in = 0u64;
    let mut total_out = 0u64;

    for file in files {
        pb.set_message(file.display().to_string());

        let data = std::fs::read(file)?;
        let compressed =
            oxihuff::compress(&data).map_err(|e| format!("{}: {}", file.display(), e))?;
        let target = options.target(file, compressed_path);
        options.emit(file, &target, &compressed)?;

        total_in += data.len() as u64;
        total_out += compressed.len() as u64;

        if !options.stdout {
            pb.suspend(|| {
                println!(
                    "{} -> {} ({} -> {} bytes, {:.1}% saved)",
                    file.display(),
                    target.display(),
                    data.len(),
                    compressed.len(),
                    savings_percent(data.len() as u64, compressed.len() as u64)
                );
            });
        }
        pb.inc(1);
    }

    pb.finish_and_clear();

    if files.len() > 1 && !options.stdout {
        println!(
            "{} files: {} -> {} bytes, {:.1}% saved",
            files.len(),
            total_in,
            total_out,
            savings_percent(total_in, total_out)
        );
    }

    Ok(())
}
