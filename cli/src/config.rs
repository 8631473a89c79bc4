use crate::error::*;
use minicpu::MEMORY_SIZE;

pub const DEFAULT_WINDOW: usize = 16;

pub const USAGE: &str = "usage: cli [--window <n>] [--no-color] [--quiet] [--help]

Reads one instruction per line from stdin and prints the machine state after each.
Type QUIT or EXIT (or send EOF) to leave.

  --window <n>  number of memory cells to show, 1..=256 (default 16)
  --no-color    disable colored output (NO_COLOR is honoured too)
  --quiet       only print the outcome of each instruction
  --help        print this message";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
	pub window: usize,
	pub color: bool,
	pub quiet: bool,
	pub help: bool,
}

impl Default for Config {
	fn default() -> Self {
		Self { window: DEFAULT_WINDOW, color: true, quiet: false, help: false }
	}
}

impl Config {
	/// Parse flags, not including the program name.
	pub fn from_args<I: Iterator<Item = String>>(mut args: I) -> CLIResult<Self> {
		let mut config = Self::default();
		while let Some(arg) = args.next() {
			match arg.as_str() {
				"--window" | "-w" => {
					let value = args.next().ok_or(CLIError::MissingValue("--window"))?;
					config.window = match value.parse::<usize>() {
						Ok(n) if (1..=MEMORY_SIZE).contains(&n) => n,
						_ => return Err(CLIError::InvalidValue("--window", value)),
					};
				}
				"--no-color" => config.color = false,
				"--quiet" | "-q" => config.quiet = true,
				"--help" | "-h" => config.help = true,
				_ => return Err(CLIError::UnkownArgument(arg)),
			}
		}
		Ok(config)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn parse(args: &[&str]) -> CLIResult<Config> {
		Config::from_args(args.iter().map(|a| a.to_string()))
	}

	#[test]
	fn defaults() {
		assert_eq!(parse(&[]), Ok(Config::default()));
		assert_eq!(Config::default().window, 16);
	}

	#[test]
	fn flags() {
		assert_eq!(
			parse(&["--window", "32", "--no-color", "-q"]),
			Ok(Config { window: 32, color: false, quiet: true, help: false })
		);
		assert!(parse(&["--help"]).unwrap().help);
	}

	#[test]
	fn window_bounds() {
		assert_eq!(parse(&["--window", "256"]).unwrap().window, 256);
		assert_eq!(
			parse(&["--window", "0"]),
			Err(CLIError::InvalidValue("--window", "0".into()))
		);
		assert_eq!(
			parse(&["--window", "257"]),
			Err(CLIError::InvalidValue("--window", "257".into()))
		);
		assert_eq!(parse(&["--window"]), Err(CLIError::MissingValue("--window")));
	}

	#[test]
	fn unknown_argument() {
		assert_eq!(
			parse(&["run", "prog.asm"]),
			Err(CLIError::UnkownArgument("run".into()))
		);
	}
}
