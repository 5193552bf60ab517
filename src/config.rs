use std::env;
use std::path::{Path, PathBuf};

pub const OUT_DIR_NAME: &str = ".enc0";
pub const DEFAULT_PROFILE_FILE: &str = "profile";

// Resolved once in main and threaded through; nothing below this reads the
// environment.
#[derive(Debug, Clone)]
pub struct Config {
	pub out_root: PathBuf,
	pub default_profile_path: PathBuf,
}

impl Config {
	pub fn resolve() -> Self {
		let home = env::var_os("HOME").map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));
		let exe_dir = env::current_exe()
			.ok()
			.and_then(|p| p.parent().map(Path::to_path_buf))
			.unwrap_or_else(|| PathBuf::from("."));

		Self {
			out_root: home.join(OUT_DIR_NAME),
			default_profile_path: exe_dir.join(DEFAULT_PROFILE_FILE),
		}
	}
}
