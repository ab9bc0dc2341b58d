//! Overflow-checked integer folds
//!
//! Each operation folds a slice of `i64` from left to right. Every step is
//! guarded *before* it runs, so nothing ever wraps or traps. Failures come
//! back as [`ArithmeticError`] instead of a silent zero.

use crate::error::ArithmeticError;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Arithmetic operation tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulus,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Modulus,
    ];

    /// Lowercase name used on the command line
    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::Modulus => "modulus",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
            Operation::Modulus => "%",
        }
    }

    /// All operation names, in declaration order
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|op| op.name()).collect()
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = ArithmeticError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|op| op.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ArithmeticError::InvalidOperation(s.to_string()))
    }
}

/// Would `a <op> b` leave the `i64` range?
///
/// Only bound comparisons are used, the operation itself is never attempted.
/// Division by zero is not overflow and is reported separately by the folds.
pub fn would_overflow(op: Operation, a: i64, b: i64) -> bool {
    match op {
        Operation::Add => {
            (a > 0 && b > 0 && a > i64::MAX - b) || (a < 0 && b < 0 && a < i64::MIN - b)
        }
        Operation::Subtract => {
            (b > 0 && a < i64::MIN + b) || (b < 0 && a > i64::MAX + b)
        }
        Operation::Multiply => {
            if a > 0 && b > 0 {
                a > i64::MAX / b
            } else if a < 0 && b < 0 {
                a < i64::MAX / b
            } else if a > 0 && b < 0 {
                b < i64::MIN / a
            } else if a < 0 && b > 0 {
                a < i64::MIN / b
            } else {
                false
            }
        }
        Operation::Divide => a == i64::MIN && b == -1,
        // i64::MIN % -1 is 0, which fits
        Operation::Modulus => false,
    }
}

/// One guarded fold step
fn step(op: Operation, acc: i64, x: i64) -> Result<i64, ArithmeticError> {
    if matches!(op, Operation::Divide | Operation::Modulus) && x == 0 {
        return Err(ArithmeticError::DivideByZero { op, lhs: acc });
    }
    if would_overflow(op, acc, x) {
        return Err(ArithmeticError::Overflow { op, lhs: acc, rhs: x });
    }

    Ok(match op {
        Operation::Add => acc + x,
        Operation::Subtract => acc - x,
        Operation::Multiply => acc * x,
        Operation::Divide => acc / x,
        // Only MIN % -1 differs from `%`, and it is 0 either way
        Operation::Modulus => acc.wrapping_rem(x),
    })
}

/// Sum, seeded at 0
pub fn add(numbers: &[i64]) -> Result<i64, ArithmeticError> {
    numbers
        .iter()
        .try_fold(0, |acc, &x| step(Operation::Add, acc, x))
}

/// Subtract every number from a seed of 0
pub fn subtract(numbers: &[i64]) -> Result<i64, ArithmeticError> {
    numbers
        .iter()
        .try_fold(0, |acc, &x| step(Operation::Subtract, acc, x))
}

/// Product, seeded at 1. The first zero ends the fold.
pub fn multiply(numbers: &[i64]) -> Result<i64, ArithmeticError> {
    let mut product = 1;
    for &x in numbers {
        if x == 0 {
            return Ok(0);
        }
        product = step(Operation::Multiply, product, x)?;
    }
    Ok(product)
}

/// Divide the first number by each of the rest in turn
pub fn divide(numbers: &[i64]) -> Result<i64, ArithmeticError> {
    fold_from_first(Operation::Divide, numbers)
}

/// Take the remainder of the first number by each of the rest in turn
pub fn modulus(numbers: &[i64]) -> Result<i64, ArithmeticError> {
    fold_from_first(Operation::Modulus, numbers)
}

fn fold_from_first(op: Operation, numbers: &[i64]) -> Result<i64, ArithmeticError> {
    match numbers.split_first() {
        Some((&first, rest)) => rest.iter().try_fold(first, |acc, &x| step(op, acc, x)),
        None => Ok(0),
    }
}

/// Fold `numbers` with `op`
pub fn compute(op: Operation, numbers: &[i64]) -> Result<i64, ArithmeticError> {
    let result = match op {
        Operation::Add => add(numbers),
        Operation::Subtract => subtract(numbers),
        Operation::Multiply => multiply(numbers),
        Operation::Divide => divide(numbers),
        Operation::Modulus => modulus(numbers),
    };

    if let Err(ref e) = result {
        debug!("{} over {} numbers failed: {}", op, numbers.len(), e);
    }
    result
}

/// Parse the operation name, then fold
pub fn compute_named(operation: &str, numbers: &[i64]) -> Result<i64, ArithmeticError> {
    compute(operation.parse()?, numbers)
}

/// Legacy behavior: any failure becomes 0
pub fn compute_or_zero(op: Operation, numbers: &[i64]) -> i64 {
    compute(op, numbers).unwrap_or(0)
}
