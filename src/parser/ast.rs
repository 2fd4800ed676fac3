use std::collections::HashMap;

use decimal_bigint::BigInteger;

use crate::error::ExprError;

pub type ResultType = BigInteger;

/// Values bound to the variables of one expression; `None` until bound.
pub type VariableTable = HashMap<String, Option<ResultType>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
}

#[derive(Debug, Clone)]
pub struct Variable {
    symbol: String,
}

impl Variable {
    pub fn new(symbol: String) -> Self {
        Self { symbol }
    }
    fn get(&self, variable_table: &VariableTable) -> Result<ResultType, ExprError> {
        match variable_table.get(&self.symbol) {
            Some(Some(val)) => Ok(val.clone()),
            _ => Err(ExprError::UnboundVariable(self.symbol.clone())),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Opend {
    Num(ResultType),
    Expr(Box<ASTNode>),
    Var(Variable),
    Neg(Box<Opend>),
}

impl Opend {
    pub fn get(&self, variable_table: &VariableTable) -> Result<ResultType, ExprError> {
        match self {
            Opend::Num(num) => Ok(num.clone()),
            Opend::Expr(expr) => expr.execute(variable_table),
            Opend::Var(v) => v.get(variable_table),
            Opend::Neg(op) => Ok(op.get(variable_table)?.negate()),
        }
    }
}

/// A left-associative chain `first op operand op operand ...` of one precedence level.
#[derive(Debug, Clone)]
pub struct ASTNode {
    first: Opend,
    rest: Vec<(Operator, Opend)>,
}

impl ASTNode {
    pub fn new(first: Opend) -> Self {
        ASTNode { first, rest: Vec::new() }
    }
    pub fn push(&mut self, operator: Operator, operand: Opend) -> &mut Self {
        self.rest.push((operator, operand));
        self
    }
    /// A chain without operators is just its first operand.
    pub fn into_opend(self) -> Opend {
        if self.rest.is_empty() {
            self.first
        } else {
            Opend::Expr(Box::new(self))
        }
    }
    pub fn execute(&self, variable_table: &VariableTable) -> Result<ResultType, ExprError> {
        let mut result = self.first.get(variable_table)?;
        for (operator, operand) in &self.rest {
            let right = operand.get(variable_table)?;
            result = match operator {
                Operator::Add => BigInteger::add(&result, &right),
                Operator::Sub => BigInteger::add(&result, &right.negate()),
                Operator::Mul => BigInteger::multiply(&result, &right),
            };
        }
        Ok(result)
    }
}

#[cfg(test)]
fn num(s: &str) -> Opend {
    Opend::Num(s.parse().unwrap())
}

#[test]
fn test_execute() {
    // (1 + 1) * 2 - -(999)
    let mut sum = ASTNode::new(num("1"));
    sum.push(Operator::Add, num("1"));
    let mut product = ASTNode::new(sum.into_opend());
    product.push(Operator::Mul, num("2"));
    let mut final_ast = ASTNode::new(product.into_opend());
    final_ast.push(Operator::Sub, Opend::Neg(Box::new(num("999"))));
    let table = HashMap::new();
    assert_eq!(final_ast.execute(&table).unwrap().to_string(), "1003");
}

#[test]
fn test_execute_left_to_right() {
    // 10 - 4 - 3 * 1
    let mut chain = ASTNode::new(num("10"));
    chain.push(Operator::Sub, num("4"))
        .push(Operator::Sub, num("3"))
        .push(Operator::Mul, num("1"));
    assert_eq!(chain.execute(&HashMap::new()).unwrap().to_string(), "3");
    assert!(matches!(ASTNode::new(num("7")).into_opend(), Opend::Num(_)));
}

#[test]
fn test_execute_long_chain() {
    let mut chain = ASTNode::new(num("0"));
    for _ in 0..200_000 {
        chain.push(Operator::Add, num("1"));
    }
    let chain = chain.into_opend();
    assert_eq!(chain.get(&HashMap::new()).unwrap().to_string(), "200000");
}

#[test]
fn test_execute_with_variables() {
    let mut ast = ASTNode::new(Opend::Var(Variable::new("x".to_string())));
    ast.push(Operator::Mul, num("-3"));
    let mut table = VariableTable::new();
    table.insert("x".to_string(), None);
    assert_eq!(ast.execute(&table).unwrap_err(), ExprError::UnboundVariable("x".to_string()));
    table.insert("x".to_string(), Some("41".parse().unwrap()));
    assert_eq!(ast.execute(&table).unwrap().to_string(), "-123");
}
