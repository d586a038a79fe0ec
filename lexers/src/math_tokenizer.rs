#![deny(warnings)]

use crate::helpers;
use crate::scanner::Scanner;
use std::str::FromStr;

#[derive(Clone, PartialEq, Debug)]
pub enum MathToken {
    Unknown(String),
    Number(f64),
    BOp(String), // all operators are binary, arity 2
    OParen,
    CParen,
}

pub struct MathTokenizer<I: Iterator<Item = char>> {
    src: Scanner<I>,
    prev: Option<MathToken>,
}

impl<I: Iterator<Item = char>> MathTokenizer<I> {
    pub fn new(source: I) -> Self {
        MathTokenizer { src: Scanner::new(source), prev: None }
    }

    // when is a minus the sign of a literal? a '-' glued to the digits
    // that follow reads as a sign if the previous token can't end an
    // operand, or if whitespace separates it from that operand
    fn minus_is_sign(&mut self, spaced: bool) -> bool {
        if self.src.peek() != Some('-') {
            return false;
        }
        match self.prev {
            Some(MathToken::Number(_)) | Some(MathToken::CParen) => spaced,
            _ => true,
        }
    }

    fn get_token(&mut self) -> Option<MathToken> {
        let spaced = self.src.ignore_ws(); // discard whatever came before + spaces
        if self.minus_is_sign(spaced) {
            if let Some(num) = helpers::scan_number(&mut self.src) {
                return Some(MathToken::Number(f64::from_str(&num).unwrap()));
            }
        }
        if let Some(op) = helpers::scan_math_op(&mut self.src) {
            match op.as_ref() {
                "(" => Some(MathToken::OParen),
                ")" => Some(MathToken::CParen),
                _ => Some(MathToken::BOp(op)),
            }
        } else if let Some(num) = helpers::scan_number(&mut self.src) {
            Some(MathToken::Number(f64::from_str(&num).unwrap()))
        } else if self.src.next().is_some() {
            Some(MathToken::Unknown(self.src.extract_string()))
        } else {
            None
        }
    }
}

impl<I: Iterator<Item = char>> Iterator for MathTokenizer<I> {
    type Item = MathToken;
    fn next(&mut self) -> Option<Self::Item> {
        let token = self.get_token();
        self.prev = token.clone();
        token
    }
}

///////////////////////////////////////////////////////////////////////////////
