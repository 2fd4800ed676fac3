use std::collections::{HashMap, VecDeque};

use super::token::{Token, TokenType};
use crate::error::ExprError;

/// The set of symbols an edge accepts.
#[derive(Debug, Clone, Copy)]
pub enum Condition {
    Symbol(char),
    Range(char, char),
    Blank,
}

impl Condition {
    fn is_match(&self, symbol: char) -> bool {
        match *self {
            Condition::Symbol(s) => s == symbol,
            Condition::Range(low, high) => (low..=high).contains(&symbol),
            Condition::Blank => symbol.is_whitespace(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct DFAEdge(u32, u32, Condition);

/// A deterministic automaton whose accepting vertices carry a token type.
///
/// Vertex 0 is the start vertex. Tokenizing follows the longest run of edges from the
/// start vertex and emits a token each time no edge accepts the next symbol.
#[derive(Debug)]
pub struct DFA<AcceptEnum> {
    edges: Vec<DFAEdge>,
    states: HashMap<u32, AcceptEnum>,
}

impl<Ac: Copy> DFA<Ac> {
    pub fn new() -> Self {
        DFA { edges: Vec::new(), states: HashMap::new() }
    }
    pub fn add_edge(&mut self, start: u32, end: u32, condition: Condition) -> &mut Self {
        self.edges.push(DFAEdge(start, end, condition));
        self
    }
    pub fn set_state(&mut self, vertex: u32, state: Ac) -> &mut Self {
        self.states.insert(vertex, state);
        self
    }
    fn next_vertex(&self, current_vertex: u32, symbol: char) -> Option<u32> {
        self.edges
            .iter()
            .find(|DFAEdge(start, _, condition)| *start == current_vertex && condition.is_match(symbol))
            .map(|DFAEdge(_, end, _)| *end)
    }
    #[cfg(test)]
    fn match_one(&self, words: &str) -> Option<Ac> {
        let mut current_vertex = 0;
        for symbol in words.chars() {
            current_vertex = self.next_vertex(current_vertex, symbol)?;
        }
        self.states.get(&current_vertex).copied()
    }
}

impl<Ac: TokenType> DFA<Ac> {
    pub fn tokenize(&self, origin: &str) -> Result<VecDeque<Token<Ac>>, ExprError> {
        let mut result = VecDeque::new();
        let mut current_vertex = 0;
        let mut val = String::new();
        let mut token_start = 0;
        let mut current_pos = 0;
        let chars = origin.chars().collect::<Vec<_>>();
        while current_pos < chars.len() {
            let symbol = chars[current_pos];
            match self.next_vertex(current_vertex, symbol) {
                Some(end) => {
                    if val.is_empty() {
                        token_start = current_pos;
                    }
                    val.push(symbol);
                    current_vertex = end;
                    current_pos += 1;
                },
                None => {
                    if current_vertex == 0 {
                        return Err(ExprError::UnexpectedChar { found: symbol, position: current_pos });
                    }
                    self.accept(&mut result, current_vertex, &mut val, token_start)?;
                    current_vertex = 0;
                },
            }
        }
        if current_vertex != 0 {
            self.accept(&mut result, current_vertex, &mut val, token_start)?;
        }
        log::debug!("tokenized {:?} into {} tokens", origin, result.len());
        Ok(result)
    }
    fn accept(&self, result: &mut VecDeque<Token<Ac>>, vertex: u32,
              val: &mut String, position: usize) -> Result<(), ExprError> {
        match self.states.get(&vertex) {
            Some(ac) => {
                if !ac.is_nonterminal() {
                    result.push_back(Token::new(val.clone(), *ac, position));
                }
                val.clear();
                Ok(())
            },
            None => {
                let found = val.chars().last().unwrap_or_default();
                Err(ExprError::UnexpectedChar { found, position: position + val.chars().count() - 1 })
            },
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Condition, DFA};
    use crate::tokenizer::token::TokenType;

    #[derive(Clone, Copy, Debug, PartialEq)]
    enum Tok {
        Num,
        Alp,
        Gap,
    }

    impl TokenType for Tok {
        fn is_nonterminal(&self) -> bool {
            *self == Tok::Gap
        }
    }

    fn num_or_word() -> DFA<Tok> {
        let mut dfa = DFA::new();
        dfa.add_edge(0, 1, Condition::Range('0', '9'))
            .add_edge(1, 1, Condition::Range('0', '9'))
            .add_edge(0, 2, Condition::Range('a', 'z'))
            .add_edge(2, 2, Condition::Range('a', 'z'))
            .add_edge(0, 3, Condition::Blank)
            .set_state(1, Tok::Num)
            .set_state(2, Tok::Alp)
            .set_state(3, Tok::Gap);
        dfa
    }

    #[test]
    fn test_match() {
        let dfa = num_or_word();
        assert_eq!(dfa.match_one("12345"), Some(Tok::Num));
        assert_eq!(dfa.match_one("edqdsafw"), Some(Tok::Alp));
        assert_eq!(dfa.match_one("12ab"), None);
        assert_eq!(dfa.match_one(""), None);
    }

    #[test]
    fn test_longest_match() {
        let dfa = num_or_word();
        let tokens = dfa.tokenize("12ab 7").unwrap();
        let kinds: Vec<_> = tokens.iter().map(|t| (t.val.as_str(), t.ty, t.position)).collect();
        assert_eq!(kinds, [("12", Tok::Num, 0), ("ab", Tok::Alp, 2), ("7", Tok::Num, 5)]);
        assert!(dfa.tokenize("12#").is_err());
    }
}
