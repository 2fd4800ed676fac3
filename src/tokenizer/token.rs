pub trait TokenType: Copy {
    fn is_nonterminal(&self) -> bool;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExprTokenType {
    Var,
    Num,
    Add,
    Sub,
    Mul,
    LeftScope,
    RightScope,
    Blank,
}

impl TokenType for ExprTokenType {
    fn is_nonterminal(&self) -> bool {
        matches!(self, ExprTokenType::Blank)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<TokenType> {
    pub val: String,
    pub ty: TokenType,
    /// Character offset of the token's first symbol in the source text.
    pub position: usize,
}

impl<TokenType> Token<TokenType> {
    pub fn new(val: String, ty: TokenType, position: usize) -> Token<TokenType> {
        Token { val, ty, position }
    }
}
