use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum CLIError {
	ExternalError(String, String),
	UnkownArgument(String),
	MissingValue(&'static str),
	InvalidValue(&'static str, String),
}

impl fmt::Display for CLIError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
       fmt::Debug::fmt(&self, f)
    }
}

impl From<std::io::Error> for CLIError {
	fn from(e: std::io::Error) -> Self {
		CLIError::ExternalError("io::Error".into(), e.to_string())
	}
}

pub type CLIResult<O=()> = Result<O, CLIError>;
