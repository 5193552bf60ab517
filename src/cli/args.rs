use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "enc0")]
#[command(about = env!("CARGO_PKG_DESCRIPTION"), long_about = None)]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
	#[arg(short, long, help = "Echo resolved paths and ignored tokens to stderr")]
	pub verbose: bool,

	#[arg(
		value_name = "TOKEN",
		trailing_var_arg = true,
		allow_hyphen_values = true,
		help = "Profile name, source directory, .profile override, or -- followed by raw encoder options"
	)]
	pub tokens: Vec<String>,
}

impl Args {
	pub fn parse() -> Self {
		<Self as clap::Parser>::parse()
	}
}
