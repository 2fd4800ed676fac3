//! Big Calc \
//! Evaluates integer expressions of any size on top of [`decimal_bigint::BigInteger`].
//!
//! Expressions are built from decimal literals, variables, `+`, `-`, `*`, unary signs and
//! parentheses.

mod error;
mod tokenizer;
mod parser;

pub use crate::error::ExprError;
pub use crate::parser::parser::{evaluate, evaluate_with, Expression, MAX_NESTING};
pub use decimal_bigint::{BigInteger, FormatError};

#[cfg(test)]
mod tests {
    use crate::Expression;

    #[test]
    fn it_works() {
        let mut expr = Expression::parse("1 + 2*3 - x1 * x2").unwrap();
        expr.set_variable("x1", "2").unwrap()
            .set_variable("x2", "2 * 2").unwrap();
        assert_eq!(expr.execute().unwrap().to_string(), "-1");
        expr.set_variable("x1", "99999999999999999999").unwrap()
            .set_variable("x2", "-(1)").unwrap();
        assert_eq!(expr.execute().unwrap().to_string(), "100000000000000000006");
    }
}
