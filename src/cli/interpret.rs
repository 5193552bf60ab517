use std::path::Path;

use crate::error::Result;
use crate::profile::ProfileTable;

pub const PROFILE_FILE_SUFFIX: &str = ".profile";
pub const PASSTHROUGH_SEPARATOR: &str = "--";

#[derive(Debug, Clone)]
pub struct Invocation {
	pub profile_file: Option<String>,
	pub profile: Option<String>,
	pub source_dir: String,
	pub passthrough: Vec<String>,
	pub ignored: Vec<String>,
}

// Single left-to-right pass, no backtracking. A `.profile` token replaces
// the active table immediately, so later tokens match against it.
pub fn interpret(tokens: &[String], table: &mut ProfileTable) -> Result<Invocation> {
	let mut invocation = Invocation {
		profile_file: None,
		profile: None,
		source_dir: String::from("."),
		passthrough: Vec::new(),
		ignored: Vec::new(),
	};

	let mut iter = tokens.iter();
	while let Some(token) = iter.next() {
		if token == PASSTHROUGH_SEPARATOR {
			invocation.passthrough.extend(iter.cloned());
			break;
		}
		if token.ends_with(PROFILE_FILE_SUFFIX) {
			*table = ProfileTable::load(Path::new(token))?;
			invocation.profile_file = Some(token.clone());
			continue;
		}
		if table.contains(token) {
			invocation.profile = Some(token.clone());
			continue;
		}
		if Path::new(token).is_dir() {
			// last such token wins
			invocation.source_dir = token.clone();
			continue;
		}
		if token.starts_with('-') || token.starts_with('+') {
			invocation.ignored.push(token.clone());
		}
	}

	Ok(invocation)
}
