use lazy_static::*;

use super::dfa::{Condition, DFA};
use super::token::ExprTokenType;

lazy_static! {
    static ref EXPR_TOKENIZER: DFA<ExprTokenType> = build_expr_tokenizer();
}

pub fn get_expr_tokenizer() -> &'static DFA<ExprTokenType> {
    &EXPR_TOKENIZER
}

fn build_expr_tokenizer() -> DFA<ExprTokenType> {
    const NUM: u32 = 1;
    const VAR: u32 = 2;
    const BLANK: u32 = 3;

    let digit = Condition::Range('0', '9');
    let lower = Condition::Range('a', 'z');
    let upper = Condition::Range('A', 'Z');
    let underscore = Condition::Symbol('_');

    let mut dfa = DFA::new();

    // num -> digit digit*
    dfa.add_edge(0, NUM, digit)
        .add_edge(NUM, NUM, digit)
        .set_state(NUM, ExprTokenType::Num);

    // var -> (letter | _) (letter | digit | _)*
    for head in [lower, upper, underscore] {
        dfa.add_edge(0, VAR, head);
    }
    for tail in [lower, upper, underscore, digit] {
        dfa.add_edge(VAR, VAR, tail);
    }
    dfa.set_state(VAR, ExprTokenType::Var);

    dfa.add_edge(0, BLANK, Condition::Blank)
        .add_edge(BLANK, BLANK, Condition::Blank)
        .set_state(BLANK, ExprTokenType::Blank);

    let operators = [
        ('+', ExprTokenType::Add),
        ('-', ExprTokenType::Sub),
        ('*', ExprTokenType::Mul),
        ('(', ExprTokenType::LeftScope),
        (')', ExprTokenType::RightScope),
    ];
    for (vertex, (symbol, ty)) in (BLANK + 1..).zip(operators) {
        dfa.add_edge(0, vertex, Condition::Symbol(symbol))
            .set_state(vertex, ty);
    }

    dfa
}

#[test]
fn test_tokenizer() {
    let tokenizer = get_expr_tokenizer();
    let origin = "x1+x_2 *(340282366920938463463374607431768211456 - 7)";
    let result = tokenizer.tokenize(origin).unwrap();
    let kinds: Vec<ExprTokenType> = result.iter().map(|t| t.ty).collect();
    assert_eq!(kinds, [
        ExprTokenType::Var, ExprTokenType::Add, ExprTokenType::Var, ExprTokenType::Mul,
        ExprTokenType::LeftScope, ExprTokenType::Num, ExprTokenType::Sub, ExprTokenType::Num,
        ExprTokenType::RightScope,
    ]);
    assert_eq!(result[2].val, "x_2");
    assert_eq!(result[2].position, 3);
    assert_eq!(result[5].val, "340282366920938463463374607431768211456");
}

#[test]
fn test_tokenizer_rejects_unknown_symbols() {
    use crate::error::ExprError;

    let tokenizer = get_expr_tokenizer();
    assert_eq!(tokenizer.tokenize("1 / 2").unwrap_err(),
               ExprError::UnexpectedChar { found: '/', position: 2 });
    assert_eq!(tokenizer.tokenize("3 % 2").unwrap_err(),
               ExprError::UnexpectedChar { found: '%', position: 2 });
    assert!(tokenizer.tokenize("   ").unwrap().is_empty());
}
