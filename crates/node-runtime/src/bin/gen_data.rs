//! # Input Corpus Generator
//!
//! Regenerates the numeric input files every node ingests from:
//!
//! ```text
//! gen-data [count] [numbers-per-file] [out-dir]
//! ```
//!
//! Writes `out-dir/<i>.txt` for `i` in `1..=count`, each holding
//! `numbers-per-file` random 4-digit integers, one per line. Defaults match
//! the corpus the cluster expects: 1000 files of 100000 numbers under
//! `random_numbers_files/`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use rand::Rng;

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let count: u32 = match args.next() {
        Some(value) => value
            .parse()
            .with_context(|| format!("file count {value:?} is not a number"))?,
        None => 1000,
    };
    let per_file: u32 = match args.next() {
        Some(value) => value
            .parse()
            .with_context(|| format!("numbers-per-file {value:?} is not a number"))?,
        None => 100_000,
    };
    let out_dir = PathBuf::from(
        args.next()
            .unwrap_or_else(|| "random_numbers_files".to_string()),
    );

    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    let mut rng = rand::thread_rng();
    for index in 1..=count {
        let path = out_dir.join(format!("{index}.txt"));
        let file = File::create(&path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        for _ in 0..per_file {
            writeln!(writer, "{}", rng.gen_range(1000..=9999))?;
        }
        writer.flush()?;
    }

    println!(
        "{count} files of {per_file} numbers created in '{}'",
        out_dir.display()
    );
    Ok(())
}
