//! Info command implementation.

use oxihuff::StreamInfo;
use serde::Serialize;
use std::path::Path;

/// JSON serializable stream header.
#[derive(Debug, Serialize)]
struct StreamInfoJson {
    file: String,
    compressed_size: usize,
    original_size: u64,
    ratio: f64,
    symbols: usize,
    tree_depth: usize,
    max_code_len: usize,
    tree_bits: usize,
    length_bits: usize,
    payload_bits: usize,
}

impl StreamInfoJson {
    fn new(file: &Path, info: &StreamInfo) -> Self {
        Self {
            file: file.display().to_string(),
            compressed_size: info.compressed_len,
            original_size: info.declared_len,
            ratio: info.ratio(),
            symbols: info.symbols,
            tree_depth: info.tree_depth,
            max_code_len: info.max_code_len,
            tree_bits: info.tree_bits,
            length_bits: info.length_bits,
            payload_bits: info.payload_bits,
        }
    }
}

pub fn cmd_info(file: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let compressed = std::fs::read(file)?;
    let info = oxihuff::inspect(&compressed).map_err(|e| format!("{}: {}", file.display(), e))?;

    if json {
        let json_output = serde_json::to_string_pretty(&StreamInfoJson::new(file, &info))?;
        println!("{}", json_output);
        return Ok(());
    }

    println!("Stream Information");
    println!("==================");
    println!("File: {}", file.display());
    println!("Compressed size: {} bytes", info.compressed_len);
    println!("Original size: {} bytes", info.declared_len);
    if info.declared_len > 0 {
        println!("Ratio: {:.1}%", info.ratio() * 100.0);
    }

    println!();
    println!("Code tree:");
    println!("  Symbols: {}", info.symbols);
    println!("  Tree depth: {}", info.tree_depth);
    println!("  Longest code: {} bits", info.max_code_len);
    println!("  Tree: {} bits", info.tree_bits);
    println!("  Length field: {} bits", info.length_bits);
    println!("  Payload and padding: {} bits", info.payload_bits);

    Ok(())
}
