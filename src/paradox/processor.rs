//! File processing API for paradox script
//!
//! Reading, parsing and writing files, plus rendering a parsed file in any
//! [OutputFormat].
//!
//! # Sample Sources
//!
//! The [samples] module gives tests access to the verified sample documents under
//! `docs/samples/`. Tests should load those instead of keeping their own copies.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::paradox::ast::Node;
use crate::paradox::formats::{FormatError, FormatOptions, OutputFormat};
use crate::paradox::parsing::{self, ParseError};

/// Errors that can occur during processing
#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("sample '{0}' is not available")]
    UnknownSample(String),
}

impl ProcessingError {
    fn io(path: &Path, source: io::Error) -> Self {
        ProcessingError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Reads a whole file into a string
pub fn read_all_text<P: AsRef<Path>>(path: P) -> Result<String, ProcessingError> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|e| ProcessingError::io(path, e))
}

/// Writes `contents` to a file, replacing it if it exists
pub fn write_all_text<P: AsRef<Path>>(path: P, contents: &str) -> Result<(), ProcessingError> {
    let path = path.as_ref();
    fs::write(path, contents).map_err(|e| ProcessingError::io(path, e))
}

/// Reads and parses a file, labelling parse errors with its path
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Node, ProcessingError> {
    let path = path.as_ref();
    let content = read_all_text(path)?;
    let root = parsing::parse(&content, &path.display().to_string())?;
    Ok(root)
}

/// Parses a file and renders it in `format`
pub fn process_file<P: AsRef<Path>>(
    path: P,
    format: OutputFormat,
    options: &FormatOptions,
) -> Result<String, ProcessingError> {
    let path = path.as_ref();
    debug!(path = %path.display(), %format, "processing file");
    let root = parse_file(path)?;
    Ok(format.serialize(&root, options)?)
}

/// Sample sources module for accessing verified paradox script test files
pub mod samples {
    use super::*;

    /// Available sample files (canonical sources)
    pub const AVAILABLE_SAMPLES: &[&str] = &[
        "000-flat.txt",
        "010-integer-sequences.txt",
        "020-nested.txt",
        "030-comments.txt",
        "040-quoted-text.txt",
        "050-country-history.txt",
    ];

    /// Main interface for accessing paradox script sample files
    pub struct ParadoxSources;

    impl ParadoxSources {
        /// Get the path to the samples directory
        pub fn samples_dir() -> PathBuf {
            Path::new(env!("CARGO_MANIFEST_DIR")).join("docs").join("samples")
        }

        /// Get the full path to a sample file
        pub fn sample_path(filename: &str) -> Result<PathBuf, ProcessingError> {
            if !AVAILABLE_SAMPLES.contains(&filename) {
                return Err(ProcessingError::UnknownSample(filename.to_string()));
            }
            Ok(Self::samples_dir().join(filename))
        }

        /// Get sample content as raw string
        pub fn get_string(filename: &str) -> Result<String, ProcessingError> {
            read_all_text(Self::sample_path(filename)?)
        }

        /// Get sample content parsed into a tree
        pub fn get_node(filename: &str) -> Result<Node, ProcessingError> {
            parse_file(Self::sample_path(filename)?)
        }

        /// Get sample content rendered in the given format
        pub fn get_processed(
            filename: &str,
            format: OutputFormat,
        ) -> Result<String, ProcessingError> {
            process_file(
                Self::sample_path(filename)?,
                format,
                &FormatOptions::default(),
            )
        }

        /// List all available sample files
        pub fn list() -> Vec<&'static str> {
            AVAILABLE_SAMPLES.to_vec()
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_get_string_sample() {
            let content = ParadoxSources::get_string("000-flat.txt").unwrap();
            assert_eq!(content, "a = 1\nb = hello\nc = yes\n");
        }

        #[test]
        fn test_get_node_sample() {
            let root = ParadoxSources::get_node("020-nested.txt").unwrap();
            let e = root.child("c").and_then(|c| c.child("e")).unwrap();
            assert_eq!(e.child("g").unwrap().integers(), Some(&[4, 5][..]));
        }

        #[test]
        fn test_get_processed_sample() {
            let processed =
                ParadoxSources::get_processed("010-integer-sequences.txt", OutputFormat::Canonical)
                    .unwrap();
            assert_eq!(
                processed,
                "ids = { 1 2 3 }\nsingle = { 42 }\nwrapped = { 10 20 30 }\n"
            );
        }

        #[test]
        fn test_unknown_sample() {
            let err = ParadoxSources::get_string("missing.txt").unwrap_err();
            assert!(matches!(err, ProcessingError::UnknownSample(name) if name == "missing.txt"));
        }

        #[test]
        fn test_all_samples_parse() {
            for sample in ParadoxSources::list() {
                let root = ParadoxSources::get_node(sample)
                    .unwrap_or_else(|e| panic!("sample {sample} should parse: {e}"));
                assert!(!root.children().is_empty(), "sample {sample} has no entries");
            }
        }
    }
}
