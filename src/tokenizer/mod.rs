pub mod dfa;
pub mod token;
pub mod tokenizer;

pub use crate::tokenizer::tokenizer::get_expr_tokenizer;
pub use crate::tokenizer::token::{ExprTokenType, Token};
