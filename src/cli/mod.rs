pub mod args;
pub mod interpret;

pub use args::Args;
pub use interpret::{Invocation, interpret};

use std::path::PathBuf;

use crate::config::Config;
use crate::error::Result;
use crate::profile::{ProfileEntry, ProfileTable};
use crate::script;
use crate::source;

#[derive(Debug)]
pub enum Outcome {
	Script(String),
	Discovery { profiles: Vec<ProfileEntry>, inputs: Vec<PathBuf> },
}

pub fn execute(tokens: &[String], config: &Config, verbose: bool) -> Result<Outcome> {
	let mut table = ProfileTable::load(&config.default_profile_path)?;
	let invocation = interpret(tokens, &mut table)?;

	if verbose {
		let profile_file = invocation
			.profile_file
			.clone()
			.unwrap_or_else(|| config.default_profile_path.display().to_string());
		eprintln!("profile file: {}", profile_file);
		eprintln!("out root: {}", config.out_root.display());
		for token in &invocation.ignored {
			eprintln!("ignored: {}", token);
		}
	}

	let inputs = source::scan(&invocation.source_dir)?;

	// A later `.profile` override can drop the name a profile token matched
	// against; a stale name falls back to discovery.
	let chosen = invocation.profile.as_deref().and_then(|name| table.get(name));

	match chosen {
		Some(profile) => {
			let text = script::compose(&inputs, profile, &invocation.passthrough, &config.out_root)?;
			Ok(Outcome::Script(text))
		}
		None => Ok(Outcome::Discovery {
			profiles: table.iter().cloned().collect(),
			inputs: inputs.candidates,
		}),
	}
}

pub fn run(args: &Args, config: &Config) -> Result<()> {
	match execute(&args.tokens, config, args.verbose)? {
		Outcome::Script(text) => print!("{}", text),
		Outcome::Discovery { profiles, inputs } => crate::show::render_discovery(&profiles, &inputs),
	}
	Ok(())
}
