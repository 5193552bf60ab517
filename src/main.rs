use enc0::cli::{self, Args};
use enc0::config::Config;

fn main() {
	let args = Args::parse();
	let config = Config::resolve();

	match cli::run(&args, &config) {
		Ok(()) => {}
		Err(e) => {
			eprintln!("Error: {}", e);
			std::process::exit(1);
		}
	}
}
