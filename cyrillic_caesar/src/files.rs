//! File-level runs of the cipher and the analyzer

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::cipher::{self, CharWarning, Mode};
use crate::error::{CaesarError, Result};
use crate::frequency::{self, FrequencyComparison};
use crate::key::ShiftKey;

/// What a cipher run produced
#[derive(Debug)]
pub struct CipherOutcome {
    pub output: PathBuf,
    /// Number of unrecognized characters passed through
    pub warning_count: usize,
}

/// `encoded_<name>` or `decoded_<name>` next to `input`.
pub fn output_path(input: &Path, mode: Mode) -> PathBuf {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{}{}", mode.file_prefix(), name))
}

/// Opens a regular file for reading; directories are rejected here rather
/// than failing on the first read.
fn open(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|e| CaesarError::from_io(path, e))?;
    let metadata = file.metadata().map_err(|e| CaesarError::from_io(path, e))?;
    if metadata.is_dir() {
        return Err(CaesarError::NotAFile {
            path: path.to_path_buf(),
        });
    }
    Ok(BufReader::new(file))
}

/// True when both paths exist and resolve to the same file.
fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Encodes or decodes `input` into `output` (or the default sibling name).
///
/// The input is opened and checked before the output is created, so a
/// missing input, a directory, or an output naming the input itself leaves
/// the file system untouched. `on_warning` sees each unrecognized character
/// while the file is processed.
pub fn cipher_file<F: FnMut(CharWarning)>(
    input: &Path,
    key: ShiftKey,
    mode: Mode,
    output: Option<&Path>,
    on_warning: F,
) -> Result<CipherOutcome> {
    let output = output.map_or_else(|| output_path(input, mode), Path::to_path_buf);

    let reader = open(input)?;
    if same_file(input, &output) {
        return Err(CaesarError::SameFile { path: output });
    }
    let writer = File::create(&output)
        .map(BufWriter::new)
        .map_err(|e| CaesarError::from_io(&output, e))?;
    debug!("{} {} -> {} with key {}", mode, input.display(), output.display(), key);

    let warning_count =
        cipher::transform(reader, writer, key, mode, on_warning).map_err(|e| CaesarError::Io {
            path: input.to_path_buf(),
            source: e,
        })?;

    info!("Wrote {} ({} unexpected characters)", output.display(), warning_count);
    Ok(CipherOutcome {
        output,
        warning_count,
    })
}

/// Builds the frequency tables of an encoded file and a reference file.
///
/// Both files are opened before anything is counted.
pub fn analyze_files(encoded: &Path, reference: &Path) -> Result<FrequencyComparison> {
    let encoded_reader = open(encoded)?;
    let reference_reader = open(reference)?;

    let count = |reader: BufReader<File>, path: &Path| {
        frequency::analyze(reader).map_err(|e| CaesarError::Io {
            path: path.to_path_buf(),
            source: e,
        })
    };
    let encoded_table = count(encoded_reader, encoded)?;
    let reference_table = count(reference_reader, reference)?;

    debug!(
        "Counted {} letters in {} and {} in {}",
        encoded_table.total(),
        encoded.display(),
        reference_table.total(),
        reference.display()
    );
    Ok(FrequencyComparison::new(encoded_table, reference_table))
}
