use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

// Allowed container extensions, matched case-sensitively in this order.
pub const INPUT_EXTENSIONS: [&str; 4] = ["wmv", "mp4", "mkv", "avi"];

#[derive(Debug, Clone)]
pub struct SourceInputs {
	pub dir: PathBuf,
	pub job_name: String,
	pub candidates: Vec<PathBuf>,
}

pub fn scan(dir: &str) -> Result<SourceInputs> {
	let base = Path::new(dir)
		.canonicalize()
		.map_err(|source| Error::SourceDir { path: PathBuf::from(dir), source })?;

	let job_name = base
		.file_name()
		.map(|name| name.to_string_lossy().into_owned())
		.unwrap_or_default();

	let mut candidates = Vec::new();
	for ext in INPUT_EXTENSIONS {
		let pattern = format!("{}/*.{}", base.display(), ext);
		let paths = glob::glob(&pattern).map_err(|e| Error::SourceDir {
			path: base.clone(),
			source: std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()),
		})?;
		for entry in paths {
			match entry {
				Ok(path) => {
					if path.is_file() {
						candidates.push(path);
					}
				}
				Err(e) => {
					eprintln!("Warning: failed to read entry: {}", e);
				}
			}
		}
	}

	Ok(SourceInputs { dir: base, job_name, candidates })
}
