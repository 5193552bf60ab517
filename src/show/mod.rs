use std::path::PathBuf;

use prettytable::{Table, format, row};

use crate::profile::ProfileEntry;

// Discovery mode: list what is available instead of producing a script.
pub fn render_discovery(profiles: &[ProfileEntry], inputs: &[PathBuf]) {
	if profiles.is_empty() {
		println!("no profiles defined");
	} else {
		let mut table = Table::new();
		table.set_format(*format::consts::FORMAT_CLEAN);
		table.set_titles(row!["PROFILE", "DESCRIPTION", "OPTIONS"]);
		for profile in profiles {
			table.add_row(row![profile.name, profile.description, profile.options.len()]);
		}
		table.printstd();
	}

	if !inputs.is_empty() {
		println!("INPUTS:");
		for input in inputs {
			println!("  {}", input.display());
		}
	}
}
