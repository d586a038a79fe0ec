use crate::parser::{precedence, Assoc, RPNExpr};
use lexers::MathToken;
use std::fmt;

#[derive(Debug, Clone)]
enum AST<'a> {
    Leaf(&'a MathToken),
    Node(&'a MathToken, Vec<AST<'a>>),
}

impl RPNExpr {
    fn build_ast(&self) -> AST {
        let mut ops = Vec::new();
        for token in self.0.iter() {
            match *token {
                MathToken::Number(_) => ops.push(AST::Leaf(token)),
                MathToken::BOp(_) => {
                    let n = ops.len() - 2;
                    let operands = ops.split_off(n);
                    ops.push(AST::Node(token, operands));
                }
                _ => unreachable!(),
            }
        }
        ops.pop().unwrap()
    }

    /// Render the expression in prefix notation. Prefix needs no
    /// grouping so the rendering carries no parens.
    pub fn to_prefix(&self) -> String {
        fn printer(root: &AST) -> String {
            match root {
                AST::Leaf(token) => match *token {
                    MathToken::Number(ref x) => format!("{}", x),
                    _ => unreachable!(),
                },
                AST::Node(token, args) => match *token {
                    MathToken::BOp(ref op) => {
                        format!("{} {} {}", op, printer(&args[0]), printer(&args[1]))
                    }
                    _ => unreachable!(),
                },
            }
        }
        printer(&self.build_ast())
    }
}

impl fmt::Display for RPNExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn printer(root: &AST) -> (String, (usize, Assoc)) {
            match root {
                AST::Leaf(token) => match *token {
                    MathToken::Number(ref x) => (format!("{}", x), precedence(token)),
                    _ => unreachable!(),
                },
                AST::Node(token, args) => match *token {
                    MathToken::BOp(ref op) => {
                        let (lhs, rhs) = (printer(&args[0]), printer(&args[1]));
                        let (prec, assoc) = precedence(token);

                        let lh = if prec > (lhs.1).0
                            || (prec == (lhs.1).0 && assoc != Assoc::Left)
                        {
                            format!("({})", lhs.0)
                        } else {
                            lhs.0
                        };
                        let rh = if prec > (rhs.1).0
                            || (prec == (rhs.1).0 && assoc != Assoc::Right)
                        {
                            format!("({})", rhs.0)
                        } else {
                            rhs.0
                        };
                        // NOTE: explicit parens the user wrote don't survive,
                        // '2 + (3 + 4)' renders as '2 + 3 + 4'
                        (format!("{} {} {}", lh, op, rh), (prec, assoc))
                    }
                    _ => unreachable!(),
                },
            }
        }

        write!(f, "{}", printer(&self.build_ast()).0)
    }
}
