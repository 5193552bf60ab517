use std::path::Path;

use crate::error::{Error, Result};
use crate::profile::ProfileEntry;
use crate::source::SourceInputs;

pub const ENCODER_PREAMBLE: &str = "ffmpeg -hide_banner -y \\";

// Builds the whole script before anything is printed; either a complete
// script comes out or an error does.
pub fn compose(
	source: &SourceInputs,
	profile: &ProfileEntry,
	passthrough: &[String],
	out_root: &Path,
) -> Result<String> {
	let input = source
		.candidates
		.first()
		.ok_or_else(|| Error::NoCandidateInput { dir: source.dir.clone() })?;

	let out_dir = out_root.join(&source.job_name);
	let output = out_dir.join(format!("{}__{}.mp4", source.job_name, profile.description));

	let mut lines = vec![String::from("#!/bin/sh"), String::from("# --")];
	lines.push(format!("export I={}", input.display()));
	lines.push(format!("export O={}", output.display()));
	lines.push(format!("mkdir -p {}", out_dir.display()));
	lines.push(String::from(ENCODER_PREAMBLE));
	for opt in profile.options.iter().chain(passthrough) {
		lines.push(format!(" {} \\", opt));
	}
	lines.push(String::from(" -i $I $O"));

	let mut script = lines.join("\n");
	script.push('\n');
	Ok(script)
}
