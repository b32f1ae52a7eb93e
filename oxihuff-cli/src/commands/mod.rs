//! Command implementations for OxiHuff CLI.

pub mod compress;
pub mod extract;
pub mod info;

pub use compress::cmd_compress;
pub use extract::cmd_extract;
pub use info::cmd_info;
pub use test::cmd_test;

use crate::utils::{same_file, write_output, write_stdout};
use std::io;
use std::path::{Path, PathBuf};

/// Where and how `compress` and `extract` write their results.
#[derive(Debug, Default)]
pub struct OutputOptions {
    pub output: Option<PathBuf>,
    pub force: bool,
    pub stdout: bool,
    pub keep: bool,
}

impl OutputOptions {
    /// Reject flag combinations that cannot apply to `inputs` files.
    pub fn validate(&self, inputs: usize) -> Result<(), String> {
        if self.output.is_some() && self.stdout {
            return Err("--output and --stdout cannot be combined".to_string());
        }
        if self.output.is_some() && inputs > 1 {
            return Err("--output requires a single input file".to_string());
        }
        Ok(())
    }

    /// Output path for `input`, using `derive` unless `--output` was given.
    pub fn target(&self, input: &Path, derive: fn(&Path) -> PathBuf) -> PathBuf {
        self.output.clone().unwrap_or_else(|| derive(input))
    }

    /// Write `data` for `input`, then remove `input` unless it is kept.
    ///
    /// Refuses a `target` that is `input` itself.
    pub fn emit(&self, input: &Path, target: &Path, data: &[u8]) -> io::Result<()> {
        if self.stdout {
            return write_stdout(data);
        }
        if same_file(input, target) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{}: output would overwrite the input", input.display()),
            ));
        }
        write_output(target, data, self.force)?;
        if !self.keep {
            std::fs::remove_file(input)?;
            log::debug!("removed {}", input.display());
        }
        Ok(())
    }
}
