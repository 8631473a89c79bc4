/*
    R(x): value of register `x`
    M(a): value of memory cell `a`
    V   : integer operand
*/
use std::{collections::HashMap, fmt, str::FromStr};

use lazy_static::lazy_static;
use maplit::hashmap;

use crate::{
    error::engine::Malformed,
    scanner::{is_integer, tokenize, Token, TokenKind},
    Address, ExecError, ExecResult, Register, Word,
};

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Opcode {
    Load,  // 0 LOAD  [R] [V]  R(R) = V
    Add,   // 1 ADD   [R] [V]  R(R) = R(R) + V
    Sub,   // 2 SUB   [R] [V]  R(R) = R(R) - V
    Store, // 3 STORE [A] [R]  M(A) = R(R)
    LoadM, // 4 LOADM [R] [A]  R(R) = M(A)
}

/// What an operand slot accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperandKind {
    Register,
    Immediate,
    Address,
}

lazy_static! {
    // Keys are upper case, lookups uppercase the command first.
    static ref MNEMONICS: HashMap<&'static str, Opcode> = hashmap! {
        "LOAD" => Opcode::Load,
        "ADD" => Opcode::Add,
        "SUB" => Opcode::Sub,
        "STORE" => Opcode::Store,
        "LOADM" => Opcode::LoadM,
    };
}

impl Opcode {
    pub const ALL: [Opcode; 5] = [
        Opcode::Load,
        Opcode::Add,
        Opcode::Sub,
        Opcode::Store,
        Opcode::LoadM,
    ];

    pub fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Load => "LOAD",
            Opcode::Add => "ADD",
            Opcode::Sub => "SUB",
            Opcode::Store => "STORE",
            Opcode::LoadM => "LOADM",
        }
    }

    /// Operand slots in source order.
    pub fn signature(self) -> &'static [OperandKind] {
        match self {
            Opcode::Load | Opcode::Add | Opcode::Sub => {
                &[OperandKind::Register, OperandKind::Immediate]
            }
            Opcode::Store => &[OperandKind::Address, OperandKind::Register],
            Opcode::LoadM => &[OperandKind::Register, OperandKind::Address],
        }
    }

    pub fn arity(self) -> usize {
        self.signature().len()
    }
}

impl FromStr for Opcode {
    type Err = ExecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MNEMONICS
            .get(s.to_uppercase().as_str())
            .copied()
            .ok_or_else(|| ExecError::UnknownInstruction(s.to_string()))
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

impl fmt::Display for OperandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OperandKind::Register => "<reg>",
            OperandKind::Immediate => "<int>",
            OperandKind::Address => "<addr>",
        })
    }
}

/// A fully validated instruction. Applying one cannot fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    Load { register: Register, value: Word },
    Add { register: Register, value: Word },
    Sub { register: Register, value: Word },
    Store { address: Address, register: Register },
    LoadM { register: Register, address: Address },
}

impl Instruction {
    pub fn opcode(&self) -> Opcode {
        match self {
            Instruction::Load { .. } => Opcode::Load,
            Instruction::Add { .. } => Opcode::Add,
            Instruction::Sub { .. } => Opcode::Sub,
            Instruction::Store { .. } => Opcode::Store,
            Instruction::LoadM { .. } => Opcode::LoadM,
        }
    }
}

impl FromStr for Instruction {
    type Err = ExecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decoder::new(s).decode()
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Load { register, value }
            | Instruction::Add { register, value }
            | Instruction::Sub { register, value } => {
                write!(f, "{} {} {}", self.opcode(), register, value)
            }
            Instruction::Store { address, register } => {
                write!(f, "{} {} {}", self.opcode(), address, register)
            }
            Instruction::LoadM { register, address } => {
                write!(f, "{} {} {}", self.opcode(), register, address)
            }
        }
    }
}

/// Turns one line of text into an [Instruction].
pub struct Decoder<'src> {
    tokens: Vec<Token<'src>>,
}

impl<'src> Decoder<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            tokens: tokenize(source),
        }
    }

    /// Validate the whole line, then build the instruction.
    /// Integer operands are parsed before registers are looked up, and the source of the
    /// assignment is checked before its destination; the first failure is reported.
    pub fn decode(&self) -> ExecResult<Instruction> {
        let (command, operands) = self
            .tokens
            .split_first()
            .ok_or(ExecError::MalformedInstruction(Malformed::NoCommand))?;
        let opcode: Opcode = command.slice.parse()?;

        let (first, second) = match operands {
            [first, second] => (first, second),
            _ => {
                return Err(ExecError::MalformedInstruction(Malformed::OperandCount {
                    opcode,
                    expected: opcode.arity(),
                    found: operands.len(),
                }))
            }
        };

        Ok(match opcode {
            Opcode::Load => {
                let value = immediate(second)?;
                Instruction::Load { register: register(first)?, value }
            }
            Opcode::Add => {
                let value = immediate(second)?;
                Instruction::Add { register: register(first)?, value }
            }
            Opcode::Sub => {
                let value = immediate(second)?;
                Instruction::Sub { register: register(first)?, value }
            }
            // M(A) = R(R): the register is read before the cell is addressed.
            Opcode::Store => {
                let literal = address_literal(first)?;
                let register = register(second)?;
                Instruction::Store { address: address(first, literal)?, register }
            }
            // R(R) = M(A): the cell is read before the register is written.
            Opcode::LoadM => {
                let literal = address_literal(second)?;
                let address = address(second, literal)?;
                Instruction::LoadM { register: register(first)?, address }
            }
        })
    }
}

fn register(token: &Token) -> ExecResult<Register> {
    token.slice.parse()
}

fn immediate(token: &Token) -> ExecResult<Word> {
    match token.kind {
        TokenKind::Integer(value) => Ok(value),
        _ => Err(ExecError::InvalidOperand(token.slice.to_string())),
    }
}

/// Parse an address operand without range checking it.
/// `None` is an integer too large for a [Word], which can never be a valid address.
fn address_literal(token: &Token) -> ExecResult<Option<Word>> {
    match token.kind {
        TokenKind::Integer(value) => Ok(Some(value)),
        TokenKind::Error if is_integer(token.slice) => Ok(None),
        _ => Err(ExecError::InvalidOperand(token.slice.to_string())),
    }
}

fn address(token: &Token, literal: Option<Word>) -> ExecResult<Address> {
    literal
        .and_then(|value| Address::try_from(value).ok())
        .ok_or_else(|| ExecError::AddressOutOfRange(token.slice.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(source: &str) -> ExecResult<Instruction> {
        source.parse()
    }

    #[test]
    fn mnemonics_ignore_case() {
        assert_eq!("load".parse::<Opcode>(), Ok(Opcode::Load));
        assert_eq!("LoadM".parse::<Opcode>(), Ok(Opcode::LoadM));
        assert_eq!(
            "LOADX".parse::<Opcode>(),
            Err(ExecError::UnknownInstruction("LOADX".into()))
        );
        for opcode in Opcode::ALL {
            assert_eq!(opcode.mnemonic().parse::<Opcode>(), Ok(opcode));
            assert_eq!(opcode.arity(), 2);
        }
    }

    #[test]
    fn decodes_every_shape() {
        assert_eq!(
            decode("LOAD ACC 10"),
            Ok(Instruction::Load { register: Register::Acc, value: 10 })
        );
        assert_eq!(
            decode("add R1 -3"),
            Ok(Instruction::Add { register: Register::R1, value: -3 })
        );
        assert_eq!(
            decode("Sub R2 +4"),
            Ok(Instruction::Sub { register: Register::R2, value: 4 })
        );
        assert_eq!(
            decode("STORE 3 ACC"),
            Ok(Instruction::Store { address: Address(3), register: Register::Acc })
        );
        assert_eq!(
            decode("loadm R1 255"),
            Ok(Instruction::LoadM { register: Register::R1, address: Address(255) })
        );
    }

    #[test]
    fn empty_line() {
        assert_eq!(
            decode("   "),
            Err(ExecError::MalformedInstruction(Malformed::NoCommand))
        );
    }

    #[test]
    fn wrong_operand_count() {
        assert_eq!(
            decode("LOAD ACC"),
            Err(ExecError::MalformedInstruction(Malformed::OperandCount {
                opcode: Opcode::Load,
                expected: 2,
                found: 1
            }))
        );
        assert_eq!(
            decode("STORE 1 ACC R1"),
            Err(ExecError::MalformedInstruction(Malformed::OperandCount {
                opcode: Opcode::Store,
                expected: 2,
                found: 3
            }))
        );
    }

    #[test]
    fn unknown_command_wins_over_operands() {
        assert_eq!(
            decode("FOO"),
            Err(ExecError::UnknownInstruction("FOO".into()))
        );
        assert_eq!(
            decode("jmp nowhere 1 2 3"),
            Err(ExecError::UnknownInstruction("jmp".into()))
        );
    }

    #[test]
    fn bad_operands() {
        assert_eq!(
            decode("load acc 5"),
            Err(ExecError::UnknownRegister("acc".into()))
        );
        assert_eq!(
            decode("LOAD 5 5"),
            Err(ExecError::UnknownRegister("5".into()))
        );
        assert_eq!(
            decode("ADD ACC five"),
            Err(ExecError::InvalidOperand("five".into()))
        );
        assert_eq!(
            decode("ADD ACC 1.5"),
            Err(ExecError::InvalidOperand("1.5".into()))
        );
        assert_eq!(
            decode("LOAD ACC 99999999999999999999"),
            Err(ExecError::InvalidOperand("99999999999999999999".into()))
        );
        assert_eq!(
            decode("STORE x ACC"),
            Err(ExecError::InvalidOperand("x".into()))
        );
        assert_eq!(
            decode("STORE 256 ACC"),
            Err(ExecError::AddressOutOfRange("256".into()))
        );
        assert_eq!(
            decode("LOADM R2 -1"),
            Err(ExecError::AddressOutOfRange("-1".into()))
        );
    }

    #[test]
    fn oversized_address_is_out_of_range() {
        assert_eq!(
            decode("STORE 99999999999999999999 ACC"),
            Err(ExecError::AddressOutOfRange("99999999999999999999".into()))
        );
        assert_eq!(
            decode("LOADM R1 -99999999999999999999"),
            Err(ExecError::AddressOutOfRange("-99999999999999999999".into()))
        );
        assert_eq!(
            decode("STORE +300 ACC"),
            Err(ExecError::AddressOutOfRange("+300".into()))
        );
        assert_eq!(
            decode("STORE 9x9 ACC"),
            Err(ExecError::InvalidOperand("9x9".into()))
        );
    }

    #[test]
    fn integers_are_parsed_before_registers() {
        assert_eq!(
            decode("LOAD acc x"),
            Err(ExecError::InvalidOperand("x".into()))
        );
        assert_eq!(
            decode("SUB R7 1.0"),
            Err(ExecError::InvalidOperand("1.0".into()))
        );
        assert_eq!(
            decode("STORE x FOO"),
            Err(ExecError::InvalidOperand("x".into()))
        );
        assert_eq!(
            decode("LOADM R9 x"),
            Err(ExecError::InvalidOperand("x".into()))
        );
    }

    #[test]
    fn source_is_checked_before_destination() {
        // STORE reads the register, then writes the cell.
        assert_eq!(
            decode("STORE 300 FOO"),
            Err(ExecError::UnknownRegister("FOO".into()))
        );
        // LOADM reads the cell, then writes the register.
        assert_eq!(
            decode("LOADM R9 300"),
            Err(ExecError::AddressOutOfRange("300".into()))
        );
    }

    #[test]
    fn display_is_canonical() {
        assert_eq!(decode("load   ACC   +7").unwrap().to_string(), "LOAD ACC 7");
        assert_eq!(decode("store 3 R1").unwrap().to_string(), "STORE 3 R1");
        assert_eq!(decode("LOADM R2 9").unwrap().to_string(), "LOADM R2 9");
    }
}
