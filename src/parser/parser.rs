use std::collections::{HashMap, VecDeque};

use decimal_bigint::BigInteger;

use crate::error::ExprError;
use crate::tokenizer::{get_expr_tokenizer, ExprTokenType, Token};
use super::ast::{ASTNode, Opend, Operator, ResultType, Variable, VariableTable};

/// A parsed integer expression together with the variables it mentions.
///
/// ```
/// use bigint_calc::Expression;
///
/// let mut expr = Expression::parse("1 + 2*3 - x1 * x2").unwrap();
/// expr.set_variable("x1", "2").unwrap()
///     .set_variable("x2", "2 * 2").unwrap();
/// assert_eq!(expr.execute().unwrap().to_string(), "-1");
/// ```
#[derive(Debug, Clone)]
pub struct Expression {
    variable_table: VariableTable,
    variable_order: Vec<String>,
    main_expr: Opend,
}

impl Expression {
    pub fn parse(origin: &str) -> Result<Self, ExprError> {
        Parser::new(origin)?.parse()
    }
    pub fn execute(&self) -> Result<ResultType, ExprError> {
        let result = self.main_expr.get(&self.variable_table)?;
        log::debug!("expression evaluated to {}", result);
        Ok(result)
    }
    /// Variable names in order of first appearance.
    pub fn variables(&self) -> &[String] {
        &self.variable_order
    }
    pub fn bind(&mut self, val_name: &str, val: BigInteger) -> Result<&mut Self, ExprError> {
        match self.variable_table.get_mut(val_name) {
            Some(slot) => {
                *slot = Some(val);
                Ok(self)
            },
            None => Err(ExprError::UnknownVariable(val_name.to_string())),
        }
    }
    /// Binds `val_name` to the value of the constant expression `val`.
    pub fn set_variable(&mut self, val_name: &str, val: &str) -> Result<&mut Self, ExprError> {
        let val = Expression::parse(val)?;
        if let Some(name) = val.variables().first() {
            return Err(ExprError::NotConstant(name.clone()));
        }
        let val = val.execute()?;
        self.bind(val_name, val)
    }
}

/// Parses and evaluates `origin`, taking variable values from `bindings`.
pub fn evaluate_with(origin: &str, bindings: &HashMap<String, BigInteger>) -> Result<BigInteger, ExprError> {
    let mut expr = Expression::parse(origin)?;
    for name in expr.variables().to_vec() {
        if let Some(val) = bindings.get(&name) {
            expr.bind(&name, val.clone())?;
        }
    }
    expr.execute()
}

/// Parses and evaluates an expression without variables.
pub fn evaluate(origin: &str) -> Result<BigInteger, ExprError> {
    evaluate_with(origin, &HashMap::new())
}

/// Deepest parenthesis nesting an expression may use.
pub const MAX_NESTING: usize = 128;

struct Parser {
    tokens: VecDeque<Token<ExprTokenType>>,
    depth: usize,
}

// Grammar
// E -> num | var | (E) |
//      -E  | +E  |
//      E * E |
//      E + E | E - E

// Precedence, tightest first
// ()
// unary - , unary +
// *
// + , -

// E -> E + T | E - T | T
// T -> T * G | G
// G -> - G   | + G   | H
// H -> (E)   | num   | var

// Left recursion removed, # is the empty string
// E  -> T E1
// E1 -> + T E1 | - T E1 | #
// T  -> G T1
// T1 -> * G T1 | #
// G  -> - G | + G | H
// H  -> (E) | num | var

// E1, T1 and runs of G are parsed with loops; only H recurses, at most MAX_NESTING deep.

impl Parser {
    fn new(origin: &str) -> Result<Self, ExprError> {
        let tokens = get_expr_tokenizer().tokenize(origin)?;
        Ok(Parser { tokens, depth: 0 })
    }
    fn get_next_token(&mut self) -> Result<Token<ExprTokenType>, ExprError> {
        self.tokens.pop_front().ok_or(ExprError::UnexpectedEnd)
    }
    fn watch_next_token(&self) -> Option<&Token<ExprTokenType>> {
        self.tokens.front()
    }
    fn unexpected(token: Token<ExprTokenType>) -> ExprError {
        ExprError::UnexpectedToken { found: token.val, position: token.position }
    }
    fn parse(mut self) -> Result<Expression, ExprError> {
        let mut variable_table = HashMap::new();
        let mut variable_order = Vec::new();
        for t in &self.tokens {
            if t.ty == ExprTokenType::Var && !variable_table.contains_key(&t.val) {
                variable_table.insert(t.val.clone(), None);
                variable_order.push(t.val.clone());
            }
        }
        let main_expr = self.parse_e()?;
        if let Some(token) = self.tokens.pop_front() {
            return Err(Parser::unexpected(token));
        }
        Ok(Expression { variable_table, variable_order, main_expr })
    }
    fn parse_e(&mut self) -> Result<Opend, ExprError> {
        let mut chain = ASTNode::new(self.parse_t()?);
        // E1
        while let Some(token) = self.watch_next_token() {
            let operator = match token.ty {
                ExprTokenType::Add => Operator::Add,
                ExprTokenType::Sub => Operator::Sub,
                _ => break,
            };
            let _op = self.get_next_token()?;
            let right_op = self.parse_t()?;
            chain.push(operator, right_op);
        }
        Ok(chain.into_opend())
    }
    fn parse_t(&mut self) -> Result<Opend, ExprError> {
        let mut chain = ASTNode::new(self.parse_g()?);
        // T1
        while let Some(token) = self.watch_next_token() {
            if token.ty != ExprTokenType::Mul {
                break;
            }
            let _op = self.get_next_token()?;
            let right_op = self.parse_g()?;
            chain.push(Operator::Mul, right_op);
        }
        Ok(chain.into_opend())
    }
    fn parse_g(&mut self) -> Result<Opend, ExprError> {
        let mut negative = false;
        while let Some(ty) = self.watch_next_token().map(|t| t.ty) {
            match ty {
                ExprTokenType::Sub => negative = !negative,
                ExprTokenType::Add => {},
                _ => break,
            }
            let _sign = self.get_next_token()?;
        }
        let operand = self.parse_h()?;
        if negative {
            Ok(Opend::Neg(Box::new(operand)))
        } else {
            Ok(operand)
        }
    }
    fn parse_h(&mut self) -> Result<Opend, ExprError> {
        let next_token = self.get_next_token()?;
        match next_token.ty {
            ExprTokenType::LeftScope => {
                if self.depth == MAX_NESTING {
                    return Err(ExprError::NestingTooDeep { position: next_token.position });
                }
                self.depth += 1;
                let expr = self.parse_e()?;
                self.depth -= 1;
                let right_scope = self.get_next_token()?;
                match right_scope.ty {
                    ExprTokenType::RightScope => Ok(expr),
                    _ => Err(Parser::unexpected(right_scope)),
                }
            },
            ExprTokenType::Var => Ok(Opend::Var(Variable::new(next_token.val))),
            ExprTokenType::Num => Ok(Opend::Num(BigInteger::parse(&next_token.val)?)),
            _ => Err(Parser::unexpected(next_token)),
        }
    }
}

#[test]
fn test_parse() {
    let mut expr = Expression::parse("-x1 + x2 * 3 - (7 - 2 * 7) * -(1)").unwrap();
    assert_eq!(expr.variables(), ["x1", "x2"]);
    expr.set_variable("x1", "2 * 231").unwrap()
        .set_variable("x2", "2").unwrap();
    assert_eq!(expr.execute().unwrap().to_string(), (-2 * 231 + 2 * 3 - (7 - 2 * 7) * -1).to_string());
}

#[test]
fn test_precedence_and_associativity() {
    assert_eq!(evaluate("2 + 3 * 4").unwrap().to_string(), "14");
    assert_eq!(evaluate("(2 + 3) * 4").unwrap().to_string(), "20");
    assert_eq!(evaluate("10 - 4 - 3").unwrap().to_string(), "3");
    assert_eq!(evaluate("--5").unwrap().to_string(), "5");
    assert_eq!(evaluate("+-+5").unwrap().to_string(), "-5");
    assert_eq!(evaluate("-2 * -3 * -4").unwrap().to_string(), "-24");
    assert_eq!(evaluate("0012 + 0").unwrap().to_string(), "12");
}

#[test]
fn test_parse_errors() {
    assert_eq!(Expression::parse("").unwrap_err(), ExprError::UnexpectedEnd);
    assert_eq!(Expression::parse("1 +").unwrap_err(), ExprError::UnexpectedEnd);
    assert_eq!(Expression::parse("(1 + 2").unwrap_err(), ExprError::UnexpectedEnd);
    assert_eq!(Expression::parse("1 2").unwrap_err(),
               ExprError::UnexpectedToken { found: "2".to_string(), position: 2 });
    assert_eq!(Expression::parse("(1 + 2))").unwrap_err(),
               ExprError::UnexpectedToken { found: ")".to_string(), position: 7 });
    assert_eq!(Expression::parse("* 3").unwrap_err(),
               ExprError::UnexpectedToken { found: "*".to_string(), position: 0 });
    assert_eq!(Expression::parse("- -").unwrap_err(), ExprError::UnexpectedEnd);
}

#[test]
fn test_nesting_limit() {
    let nested = |depth: usize| format!("{}-7{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(evaluate(&nested(MAX_NESTING)).unwrap().to_string(), "-7");
    assert_eq!(Expression::parse(&nested(MAX_NESTING + 1)).unwrap_err(),
               ExprError::NestingTooDeep { position: MAX_NESTING });
    assert_eq!(evaluate("-(-(-(2)))").unwrap().to_string(), "-2");
}

#[test]
fn test_variable_errors() {
    let mut expr = Expression::parse("a * b").unwrap();
    assert_eq!(expr.execute().unwrap_err(), ExprError::UnboundVariable("a".to_string()));
    assert_eq!(expr.bind("c", BigInteger::one()).unwrap_err(), ExprError::UnknownVariable("c".to_string()));
    assert_eq!(expr.set_variable("a", "b + 1").unwrap_err(), ExprError::NotConstant("b".to_string()));
    assert!(matches!(expr.set_variable("a", "1 +"), Err(ExprError::UnexpectedEnd)));
}
