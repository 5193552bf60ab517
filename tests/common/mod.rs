use std::fs;
use std::path::{Path, PathBuf};

#[allow(dead_code)]
pub const SAMPLE_PROFILE: &str = "\
# encoding presets
# --- profile x264 web
ffmpeg -hide_banner -y \\
 -c:v libx264 \\
 -crf 23 \\
 # tuned for streaming
 -preset slow

# --- profile archive cold-storage
ffmpeg
-c:v libx265
-x265-params lossless=1
";

#[allow(dead_code)]
pub fn write_profile(dir: &Path, file_name: &str, text: &str) -> PathBuf {
	let path = dir.join(file_name);
	fs::write(&path, text).unwrap();
	path
}

#[allow(dead_code)]
pub fn touch(dir: &Path, name: &str) -> PathBuf {
	let path = dir.join(name);
	fs::write(&path, b"").unwrap();
	path
}
