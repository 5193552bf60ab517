use std::fmt;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
	ProfileFile { path: PathBuf, source: std::io::Error },
	SourceDir { path: PathBuf, source: std::io::Error },
	NoCandidateInput { dir: PathBuf },
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Error::ProfileFile { path, source } => {
				write!(f, "cannot read profile file {}: {}", path.display(), source)
			}
			Error::SourceDir { path, source } => {
				write!(f, "cannot scan source directory {}: {}", path.display(), source)
			}
			Error::NoCandidateInput { dir } => {
				write!(
					f,
					"no candidate inputs in {} (expected one of: {})",
					dir.display(),
					crate::source::INPUT_EXTENSIONS.join(", ")
				)
			}
		}
	}
}

impl std::error::Error for Error {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Error::ProfileFile { source, .. } => Some(source),
			Error::SourceDir { source, .. } => Some(source),
			Error::NoCandidateInput { .. } => None,
		}
	}
}
