//! Formula scanning
//!
//! Formulas are deliberately tiny: `=<operand> <op> <operand>` with exactly
//! one binary operator, where an operand is either a cell reference or a
//! numeric token. No precedence, no parentheses, no operator chains; text
//! that does not match the shape is a [`CellError::Formula`] failure.

use lazy_regex::regex_captures;
use sevenguis_core::CellError;

/// A binary operator in a formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOp {
    fn from_token(tok: &str) -> Option<Self> {
        match tok {
            "+" => Some(BinOp::Add),
            "-" => Some(BinOp::Sub),
            "*" => Some(BinOp::Mul),
            "/" => Some(BinOp::Div),
            _ => None,
        }
    }

    /// Apply the operator to two resolved operands.
    ///
    /// Division rejects a right operand of exactly zero (either sign).
    pub fn apply(self, left: f64, right: f64) -> Result<f64, CellError> {
        match self {
            BinOp::Add => Ok(left + right),
            BinOp::Sub => Ok(left - right),
            BinOp::Mul => Ok(left * right),
            BinOp::Div => {
                if right == 0.0 {
                    Err(CellError::DivByZero)
                } else {
                    Ok(left / right)
                }
            }
        }
    }
}

/// A scanned formula body: two operand tokens around one operator.
///
/// Operand tokens are kept as text; whether a token names a cell or a
/// number is decided at resolution time (reference check first).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Formula<'a> {
    pub left: &'a str,
    pub op: BinOp,
    pub right: &'a str,
}

/// Scan a formula body (the text after the leading `=`).
///
/// The whole body must match `<operand> <op> <operand>` with optional
/// whitespace around the operator and the ends. The operand pattern
/// `[A-J]*[0-9]+` admits a pure-digit token, which is structurally
/// indistinguishable from a short numeric literal here; the reference
/// check at resolution time (leading column letter required) is what
/// disambiguates.
pub fn scan_formula(body: &str) -> Result<Formula<'_>, CellError> {
    let (_, left, op, right) = regex_captures!(
        r"^\s*([A-J]*[0-9]+)\s*([-+*/])\s*([A-J]*[0-9]+)\s*$",
        body
    )
    .ok_or(CellError::Formula)?;

    // The operator group is a single char from the class above
    let op = BinOp::from_token(op).ok_or(CellError::Formula)?;

    Ok(Formula { left, op, right })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_scan_simple() {
        let f = scan_formula("A1+B1").unwrap();
        assert_eq!(f.left, "A1");
        assert_eq!(f.op, BinOp::Add);
        assert_eq!(f.right, "B1");
    }

    #[test]
    fn test_scan_whitespace_and_literals() {
        let f = scan_formula(" 12 * J9 ").unwrap();
        assert_eq!(f.left, "12");
        assert_eq!(f.op, BinOp::Mul);
        assert_eq!(f.right, "J9");

        let f = scan_formula("3/4").unwrap();
        assert_eq!(f.op, BinOp::Div);

        let f = scan_formula("A1-2").unwrap();
        assert_eq!(f.op, BinOp::Sub);
    }

    #[test]
    fn test_scan_rejects_malformed() {
        // Operator chains are not supported
        assert_eq!(scan_formula("1+2+3"), Err(CellError::Formula));
        // Decimal literals don't fit the operand pattern
        assert_eq!(scan_formula("1.5+2"), Err(CellError::Formula));
        assert_eq!(scan_formula("(1+2)"), Err(CellError::Formula));
        assert_eq!(scan_formula(""), Err(CellError::Formula));
        assert_eq!(scan_formula("A1"), Err(CellError::Formula));
        assert_eq!(scan_formula("1++2"), Err(CellError::Formula));
        // Lowercase letters are not column letters
        assert_eq!(scan_formula("a1+2"), Err(CellError::Formula));
        // No unanchored rescue of a partial match
        assert_eq!(scan_formula("x 1+2"), Err(CellError::Formula));
    }

    #[test]
    fn test_apply() {
        assert_eq!(BinOp::Add.apply(2.0, 3.0), Ok(5.0));
        assert_eq!(BinOp::Sub.apply(2.0, 3.0), Ok(-1.0));
        assert_eq!(BinOp::Mul.apply(2.0, 3.0), Ok(6.0));
        assert_eq!(BinOp::Div.apply(3.0, 2.0), Ok(1.5));
        assert_eq!(BinOp::Div.apply(1.0, 0.0), Err(CellError::DivByZero));
        assert_eq!(BinOp::Div.apply(1.0, -0.0), Err(CellError::DivByZero));
    }
}
