use std::fmt;
use crate::Opcode;

/// Why an instruction line was rejected. Engine state is untouched whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecError {
	MalformedInstruction(Malformed),
	UnknownInstruction(String),
	UnknownRegister(String),
	InvalidOperand(String),
	AddressOutOfRange(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Malformed {
	NoCommand,
	OperandCount {
		opcode: Opcode,
		expected: usize,
		found: usize,
	},
}

/// Payload-free discriminant of [ExecError], for callers that branch on the kind only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
	MalformedInstruction,
	UnknownInstruction,
	UnknownRegister,
	InvalidOperand,
	AddressOutOfRange,
}

impl ExecError {
	pub fn kind(&self) -> ErrorKind {
		match self {
			ExecError::MalformedInstruction(_) => ErrorKind::MalformedInstruction,
			ExecError::UnknownInstruction(_) => ErrorKind::UnknownInstruction,
			ExecError::UnknownRegister(_) => ErrorKind::UnknownRegister,
			ExecError::InvalidOperand(_) => ErrorKind::InvalidOperand,
			ExecError::AddressOutOfRange(_) => ErrorKind::AddressOutOfRange,
		}
	}
}

impl fmt::Display for Malformed {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Malformed::NoCommand => write!(f, "no command given"),
			Malformed::OperandCount { opcode, expected, found } => {
				write!(f, "{} expects {} operands (", opcode, expected)?;
				for (i, kind) in opcode.signature().iter().enumerate() {
					if i > 0 {
						write!(f, " ")?;
					}
					write!(f, "{}", kind)?;
				}
				write!(f, "), got {}", found)
			}
		}
	}
}

impl fmt::Display for ExecError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ExecError::MalformedInstruction(m) => write!(f, "Error: malformed instruction: {}", m),
			ExecError::UnknownInstruction(t) => write!(f, "Invalid Instruction: {}", t),
			ExecError::UnknownRegister(t) => write!(f, "Error: unknown register '{}'", t),
			ExecError::InvalidOperand(t) => write!(f, "Error: invalid integer operand '{}'", t),
			ExecError::AddressOutOfRange(a) => write!(f, "Error: address {} out of range", a),
		}
	}
}

impl std::error::Error for ExecError {}

pub type ExecResult<O = ()> = Result<O, ExecError>;
