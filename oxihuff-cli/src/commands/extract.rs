//! Extract command implementation.

use super::OutputOptions;
use crate::utils::{create_progress_bar, extracted_path};
use oxihuff::ExtractOptions;
use std::path::PathBuf;

pub fn cmd_extract(
    files: &[PathBuf],
    options: &OutputOptions,
    limits: &ExtractOptions,
    progress: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    options.validate(files.len())?;

    let pb = create_progress_bar(files.len() as u64, progress && !options.stdout);

    for file in files {
        pb.set_message(file.display().to_string());

        let compressed = std::fs::read(file)?;
        let data = oxihuff::extract_with(&compressed, limits)
            .map_err(|e| format!("{}: {}", file.display(), e))?;
        let target = options.target(file, extracted_path);
        options.emit(file, &target, &data)?;

        if !options.stdout {
            pb.suspend(|| {
                println!(
                    "{} -> {} ({} bytes)",
                    file.display(),
                    target.display(),
                    data.len()
                );
            });
        }
        pb.inc(1);
    }

    pb.finish_and_clear();
    Ok(())
}
