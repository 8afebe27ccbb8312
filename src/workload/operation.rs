use std::{fmt, str::FromStr};

/// A single operation of a workload, one per line in a workload file
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Read(usize),
    Write(usize, i32),
    /// Renders the whole record
    Serialize,
}

impl Operation {
    /// Parses one workload line
    ///
    /// Returns `None` for blank lines, unknown leading tokens and lines with
    /// missing or malformed operands. Tokens past the operands are ignored.
    pub fn parse_line(line: &str) -> Option<Operation> {
        let mut tokens = line.split_whitespace();

        match tokens.next()? {
            "read" => Some(Operation::Read(operand(tokens.next())?)),
            "write" => {
                let index = operand(tokens.next())?;
                let value = operand(tokens.next())?;
                Some(Operation::Write(index, value))
            }
            "string" => Some(Operation::Serialize),
            _ => None,
        }
    }
}

fn operand<T: FromStr>(token: Option<&str>) -> Option<T> {
    token?.parse().ok()
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Read(index) => write!(f, "read {}", index),
            Operation::Write(index, value) => write!(f, "write {} {}", index, value),
            Operation::Serialize => write!(f, "string"),
        }
    }
}
