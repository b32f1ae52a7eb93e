//! Utility functions for the CLI.

use indicatif::{ProgressBar, ProgressStyle};
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Extension appended to compressed files.
pub const COMPRESSED_EXTENSION: &str = "huf";

/// Extension used when an extracted file has no `.huf` suffix to strip.
pub const FALLBACK_EXTENSION: &str = "out";

/// Create a progress bar with standard styling.
pub fn create_progress_bar(len: u64, enable: bool) -> ProgressBar {
    if !enable {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len);
    match ProgressStyle::default_bar()
        .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
    {
        Ok(style) => pb.set_style(style.progress_chars("█▓▒░ ")),
        Err(e) => log::debug!("progress bar template rejected: {}", e),
    }
    pb
}

static LOGGER: SimpleLogger = SimpleLogger;

/// Minimal stderr logger for library diagnostics.
struct SimpleLogger;

impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            let target = if !record.target().is_empty() {
                record.target()
            } else {
                record.module_path().unwrap_or_default()
            };
            let args = record.args();

            match record.level() {
                log::Level::Error => eprintln!("error ({}): {}", target, args),
                log::Level::Warn => eprintln!("warning ({}): {}", target, args),
                log::Level::Info => eprintln!("info ({}): {}", target, args),
                log::Level::Debug => eprintln!("debug ({}): {}", target, args),
                log::Level::Trace => eprintln!("trace ({}): {}", target, args),
            }
        }
    }

    fn flush(&self) {}
}

/// Log level for the `-v` count and `-q` flag.
pub fn level_filter(verbose: u8, quiet: bool) -> log::LevelFilter {
    if quiet {
        return log::LevelFilter::Error;
    }
    match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

/// Install the stderr logger.
pub fn init_logger(verbose: u8, quiet: bool) {
    if let Ok(()) = log::set_logger(&LOGGER) {
        log::set_max_level(level_filter(verbose, quiet));
    }
}

/// `notes.txt` -> `notes.txt.huf`
pub fn compressed_path(input: &Path) -> PathBuf {
    let mut name = input.as_os_str().to_owned();
    name.push(".");
    name.push(COMPRESSED_EXTENSION);
    PathBuf::from(name)
}

/// `notes.txt.huf` -> `notes.txt`, anything else -> `<input>.out`
pub fn extracted_path(input: &Path) -> PathBuf {
    if input
        .extension()
        .is_some_and(|ext| ext == COMPRESSED_EXTENSION)
    {
        return input.with_extension("");
    }
    let mut name = input.as_os_str().to_owned();
    name.push(".");
    name.push(FALLBACK_EXTENSION);
    PathBuf::from(name)
}

/// Write `data` to `path`, refusing to replace an existing file unless
/// `force` is set.
pub fn write_output(path: &Path, data: &[u8], force: bool) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true);
    if force {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }

    let mut file = options.open(path).map_err(|e| {
        if e.kind() == io::ErrorKind::AlreadyExists {
            io::Error::new(
                e.kind(),
                format!("{} already exists (use --force)", path.display()),
            )
        } else {
            e
        }
    })?;
    file.write_all(data)?;
    file.flush()
}

/// Check whether two paths name the same existing file.
pub fn same_file(a: &Path, b: &Path) -> bool {
    match (std::fs::canonicalize(a), std::fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Write `data` to standard output.
pub fn write_stdout(data: &[u8]) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(data)?;
    stdout.flush()
}

/// Space saved as a percentage of the original size.
pub fn savings_percent(original: u64, compressed: u64) -> f64 {
    if original == 0 {
        return 0.0;
    }
    (1.0 - compressed as f64 / original as f64) * 100.0
}
