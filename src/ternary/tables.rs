//! Lookup tables for single-trit arithmetic.
//!
//! Rows and columns are indexed by [`Trit::to_unsigned`]: N=0, O=1, P=2.

use std::fmt;
use crate::ternary::Trit;

use crate::ternary::Trit::{N, O, P};

/// Negation: N → P, O → O, P → N.
pub const NEGATION_TABLE: [Trit; 3] = [P, O, N];

/// Saturating addition. Sums of ±2 clamp to ±1 instead of carrying.
pub const ADDITION_TABLE: [[Trit; 3]; 3] = [
    [N, N, O], // N + {N, O, P}
    [N, O, P], // O + {N, O, P}
    [O, P, P], // P + {N, O, P}
];

/// Multiplication by sign rule.
pub const MULTIPLICATION_TABLE: [[Trit; 3]; 3] = [
    [P, O, N], // N × {N, O, P}
    [O, O, O], // O × {N, O, P}
    [N, O, P], // P × {N, O, P}
];

/// A table-driven trit operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// Unary negation.
    Neg,
    /// Saturating addition.
    Add,
    /// Multiplication.
    Mul,
}

impl Op {
    /// Every operator, in table order.
    pub const ALL: [Op; 3] = [Op::Neg, Op::Add, Op::Mul];

    /// Whether the operator takes two operands.
    pub const fn is_binary(self) -> bool {
        !matches!(self, Op::Neg)
    }

    /// Apply the operator. `b` is ignored for [`Op::Neg`].
    pub const fn apply(self, a: Trit, b: Trit) -> Trit {
        match self {
            Op::Neg => a.negate(),
            Op::Add => a.add(b),
            Op::Mul => a.multiply(b),
        }
    }

    /// Infix symbol used when printing tables.
    pub const fn symbol(self) -> &'static str {
        match self {
            Op::Neg => "-",
            Op::Add => "+",
            Op::Mul => "×",
        }
    }

    /// Every `(a, b, result)` entry of the operator's table.
    ///
    /// Unary operators yield three rows with `b` fixed to O.
    pub fn truth_table(self) -> Vec<(Trit, Trit, Trit)> {
        if self.is_binary() {
            Trit::ALL
                .iter()
                .flat_map(|&a| Trit::ALL.iter().map(move |&b| (a, b, self.apply(a, b))))
                .collect()
        } else {
            Trit::ALL.iter().map(|&a| (a, O, self.apply(a, O))).collect()
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Neg => write!(f, "neg"),
            Op::Add => write!(f, "add"),
            Op::Mul => write!(f, "mul"),
        }
    }
}
