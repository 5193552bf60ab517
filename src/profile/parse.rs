use super::{ProfileEntry, ProfileTable};

pub const PROFILE_TAG: &str = "# --- profile";
pub const ENCODER_KEYWORD: &str = "ffmpeg";

enum State {
	Searching,
	Collecting { name: String, description: String, options: Vec<String> },
}

pub fn parse(text: &str) -> ProfileTable {
	let mut table = ProfileTable::new();
	let mut state = State::Searching;

	for raw in text.lines() {
		let line = raw.trim();

		// Tag detection runs before anything else, in either state: a new tag
		// line implicitly finalizes the previous block and opens a fresh one.
		if let Some(rest) = line.strip_prefix(PROFILE_TAG) {
			let rest = rest.trim_start();
			let (name, description) = match rest.split_once(' ') {
				Some((name, description)) => (name.to_string(), description.trim().to_string()),
				None => (rest.to_string(), String::new()),
			};
			state = State::Collecting { name, description, options: Vec::new() };
			continue;
		}

		if let State::Collecting { name, description, options } = &mut state {
			if line.starts_with(ENCODER_KEYWORD) {
				// invocation header, not an option
			} else if let Some(stripped) = line.strip_suffix('\\') {
				options.push(stripped.trim().to_string());
			} else if line.starts_with('#') {
				// comment
			} else if !line.is_empty() {
				options.push(line.to_string());
			}

			// Commit on every line, so a file ending mid-block still leaves
			// the profile visible in the table.
			table.insert(ProfileEntry {
				name: name.clone(),
				description: description.clone(),
				options: options.clone(),
			});
		}
	}

	table
}
