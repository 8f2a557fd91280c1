//! File I/O utilities for reading hand record files.
//!
//! ## Compressed File Support
//!
//! The `read_text_auto` function automatically detects and decompresses .zst
//! (Zstandard) compressed files based on the file extension.

/// Read text file with automatic .zst decompression detection.
///
/// If the path ends with ".zst", the file is decompressed with Zstandard.
/// A UTF-8 BOM (Byte Order Mark) is stripped if present.
///
/// # Example
///
/// ```rust,no_run
/// # use potsettle_cli::io_utils::read_text_auto;
///
/// let hands = read_text_auto("hands.jsonl").unwrap();
/// let archived = read_text_auto("hands.jsonl.zst").unwrap();
/// ```
pub fn read_text_auto(path: &str) -> Result<String, String> {
    let mut content = if path.ends_with(".zst") {
        let comp = std::fs::read(path).map_err(|e| format!("{}: {}", path, e))?;
        // Use a conservative initial capacity; zstd will grow as needed
        let dec = zstd::bulk::decompress(&comp, 8 * 1024 * 1024)
            .map_err(|e| format!("{}: {}", path, e))?;
        String::from_utf8(dec).map_err(|e| format!("{}: {}", path, e))?
    } else {
        std::fs::read_to_string(path).map_err(|e| format!("{}: {}", path, e))?
    };
    strip_utf8_bom(&mut content);
    Ok(content)
}

/// Non-blank lines of a JSONL document with their 1-based line numbers.
pub fn jsonl_lines(content: &str) -> impl Iterator<Item = (usize, &str)> {
    content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
}

fn strip_utf8_bom(s: &mut String) {
    const UTF8_BOM: &str = "\u{feff}";
    if s.starts_with(UTF8_BOM) {
        s.drain(..UTF8_BOM.len());
    }
}
