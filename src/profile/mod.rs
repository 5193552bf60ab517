pub mod parse;

pub use parse::parse;

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileEntry {
	pub name: String,
	pub description: String,
	pub options: Vec<String>,
}

#[derive(Debug, Default)]
pub struct ProfileTable {
	entries: HashMap<String, ProfileEntry>,
}

impl ProfileTable {
	pub fn new() -> Self {
		Self { entries: HashMap::new() }
	}

	pub fn load(path: &Path) -> Result<Self> {
		let text = fs::read_to_string(path)
			.map_err(|source| Error::ProfileFile { path: path.to_path_buf(), source })?;
		Ok(parse(&text))
	}

	// Last definition wins on duplicate names.
	pub fn insert(&mut self, entry: ProfileEntry) {
		self.entries.insert(entry.name.clone(), entry);
	}

	pub fn get(&self, name: &str) -> Option<&ProfileEntry> {
		self.entries.get(name)
	}

	pub fn contains(&self, name: &str) -> bool {
		self.entries.contains_key(name)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	// Sorted by name so listings are stable across runs.
	pub fn iter(&self) -> impl Iterator<Item = &ProfileEntry> {
		let mut entries: Vec<&ProfileEntry> = self.entries.values().collect();
		entries.sort_by(|a, b| a.name.cmp(&b.name));
		entries.into_iter()
	}
}
