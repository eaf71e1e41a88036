//! A hand-written recursive-descent parser over the token stream produced
//! by [`crate::token::tokenize`].
//!
//! The grammar is LL(1) except for disambiguating `if_count` from
//! `if_range` (both start with `DIGITS`); that case peeks one token past
//! the leading digit run to see whether a `-` follows.

use std::fmt;

use mentorform_common::ScoreColor;

use crate::ast::{LogicOp, Rule, RuleForm, Term};
use crate::token::{Token, TokenKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    pub pos: usize,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "at byte {}: {}", self.pos, self.message)
    }
}

impl std::error::Error for ParseError {}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> &Token {
        &self.tokens[self.pos]
    }

    fn peek_at(&self, offset: usize) -> &Token {
        self.tokens
            .get(self.pos + offset)
            .unwrap_or_else(|| self.tokens.last().unwrap())
    }

    fn advance(&mut self) -> Token {
        let t = self.tokens[self.pos].clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        t
    }

    fn expect(&mut self, kind: &TokenKind) -> Result<Token, ParseError> {
        if &self.peek().kind == kind {
            Ok(self.advance())
        } else {
            Err(ParseError {
                message: format!("expected {:?}, found {:?}", kind, self.peek().kind),
                pos: self.peek().pos,
            })
        }
    }

    fn parse_rule_list(&mut self) -> Result<Vec<Rule>, ParseError> {
        let mut rules = vec![self.parse_rule()?];
        while self.peek().kind == TokenKind::Semicolon {
            self.advance();
            if self.peek().kind == TokenKind::Eof {
                break;
            }
            rules.push(self.parse_rule()?);
        }
        self.expect(&TokenKind::Eof)?;
        Ok(rules)
    }

    fn parse_rule(&mut self) -> Result<Rule, ParseError> {
        self.expect(&TokenKind::If)?;
        let form = match self.peek().kind.clone() {
            TokenKind::Bool(b) => {
                self.advance();
                RuleForm::Bool(b)
            }
            TokenKind::Select => self.parse_select_expr()?,
            TokenKind::CmpOp(_) => self.parse_cmp_expr()?,
            TokenKind::Digits(n) => {
                if self.peek_at(1).kind == TokenKind::Dash {
                    self.advance(); // first digits
                    self.advance(); // dash
                    let hi = self.expect_digits()?;
                    RuleForm::Range(n, hi)
                } else {
                    self.advance();
                    RuleForm::Count(n)
                }
            }
            other => {
                return Err(ParseError {
                    message: format!("unexpected token {other:?} at start of rule"),
                    pos: self.peek().pos,
                });
            }
        };
        self.expect(&TokenKind::Eq)?;
        let score = self.expect_score()?;
        Ok(Rule { form, score })
    }

    fn parse_cmp_expr(&mut self) -> Result<RuleForm, ParseError> {
        let mut terms = vec![(None, self.parse_term()?)];
        loop {
            let connector = match self.peek().kind {
                TokenKind::And => LogicOp::And,
                TokenKind::Or => LogicOp::Or,
                _ => break,
            };
            self.advance();
            let term = self.parse_term()?;
            terms.push((Some(connector), term));
        }
        Ok(RuleForm::Cmp(terms))
    }

    fn parse_term(&mut self) -> Result<Term, ParseError> {
        let op = match self.peek().kind {
            TokenKind::CmpOp(op) => {
                self.advance();
                op
            }
            _ => {
                return Err(ParseError {
                    message: format!("expected a comparison operator, found {:?}", self.peek().kind),
                    pos: self.peek().pos,
                });
            }
        };
        let value = self.expect_digits()?;
        let percent = if self.peek().kind == TokenKind::Percent {
            self.advance();
            true
        } else {
            false
        };
        Ok(Term { op, value, percent })
    }

    fn parse_select_expr(&mut self) -> Result<RuleForm, ParseError> {
        self.expect(&TokenKind::Select)?;
        let mut indices = vec![self.expect_digits()?];
        while self.peek().kind == TokenKind::Or {
            self.advance();
            indices.push(self.expect_digits()?);
        }
        Ok(RuleForm::Select(indices))
    }

    fn expect_digits(&mut self) -> Result<u32, ParseError> {
        match self.peek().kind {
            TokenKind::Digits(n) => {
                self.advance();
                Ok(n)
            }
            _ => Err(ParseError {
                message: format!("expected digits, found {:?}", self.peek().kind),
                pos: self.peek().pos,
            }),
        }
    }

    fn expect_score(&mut self) -> Result<ScoreColor, ParseError> {
        match self.peek().kind {
            TokenKind::Score(s) => {
                self.advance();
                Ok(s)
            }
            _ => Err(ParseError {
                message: format!("expected a score keyword, found {:?}", self.peek().kind),
                pos: self.peek().pos,
            }),
        }
    }
}

/// Parses a full rule-list string (`"If ...; If ...; ..."`) into its AST.
pub fn parse_rules(tokens: &[Token]) -> Result<Vec<Rule>, ParseError> {
    let mut p = Parser { tokens, pos: 0 };
    p.parse_rule_list()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::tokenize;

    fn rules(src: &str) -> Vec<Rule> {
        let tokens = tokenize(src).unwrap();
        parse_rules(&tokens).unwrap()
    }

    #[test]
    fn parses_bool_rule() {
        let rs = rules("If Y = Red");
        assert_eq!(rs, vec![Rule { form: RuleForm::Bool(true), score: ScoreColor::Red }]);
    }

    #[test]
    fn parses_range_vs_count_disambiguation() {
        let rs = rules("If 3-5 = Yellow");
        assert_eq!(
            rs,
            vec![Rule {
                form: RuleForm::Range(3, 5),
                score: ScoreColor::Yellow
            }]
        );

        let rs = rules("If 3 = Yellow");
        assert_eq!(
            rs,
            vec![Rule {
                form: RuleForm::Count(3),
                score: ScoreColor::Yellow
            }]
        );
    }

    #[test]
    fn parses_compound_cmp_left_to_right() {
        let rs = rules("If >5% and =<10% = Yellow");
        let RuleForm::Cmp(terms) = &rs[0].form else {
            panic!("expected Cmp");
        };
        assert_eq!(terms.len(), 2);
        assert_eq!(terms[0].0, None);
        assert_eq!(terms[1].0, Some(LogicOp::And));
    }

    #[test]
    fn parses_select_chain() {
        let rs = rules("If select 1 or 3 = Green");
        assert_eq!(
            rs,
            vec![Rule {
                form: RuleForm::Select(vec![1, 3]),
                score: ScoreColor::Green
            }]
        );
    }

    #[test]
    fn parses_multiple_semicolon_separated_rules() {
        let rs = rules("If >10% = Red ; If >5% and =<10% = Yellow ; If <5% = Green");
        assert_eq!(rs.len(), 3);
    }

    #[test]
    fn rejects_trailing_garbage() {
        let tokens = tokenize("If Y = Red extra").unwrap();
        assert!(parse_rules(&tokens).is_err());
    }
}
