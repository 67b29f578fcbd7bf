use std::fmt::Write;

use crate::ast::{Block, Expr, NumberLiteral, Program, Statement};

const INDENT: &str = "  ";

impl Program {
    /// Renders the tree one node per line, children indented below their
    /// parent.
    ///
    /// # Example
    /// ```
    /// use reckon::{config::LexerConfig, parse};
    ///
    /// let program = parse("set x = 1 + 2", &LexerConfig::default()).unwrap();
    /// let expected = ["Program",
    ///                 "  Assign x",
    ///                 "    Chain",
    ///                 "      Number 1",
    ///                 "      +",
    ///                 "        Number 2",
    ///                 ""].join("\n");
    /// assert_eq!(program.render_tree(), expected);
    /// ```
    #[must_use]
    pub fn render_tree(&self) -> String {
        let mut out = String::from("Program\n");
        for statement in &self.statements {
            render_statement(&mut out, statement, 1);
        }
        out
    }
}

fn line(out: &mut String, depth: usize, text: &str) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
    out.push_str(text);
    out.push('\n');
}

fn render_block(out: &mut String, block: &Block, depth: usize) {
    line(out, depth, "Block");
    for statement in &block.statements {
        render_statement(out, statement, depth + 1);
    }
}

fn render_statement(out: &mut String, statement: &Statement, depth: usize) {
    match statement {
        Statement::Assignment { name, declared, value, .. } => {
            let header = match declared {
                Some(ty) => format!("Assign {name}: {ty}"),
                None => format!("Assign {name}"),
            };
            line(out, depth, &header);
            render_expr(out, value, depth + 1);
        },
        Statement::Function(def) => {
            line(out, depth, &format!("Func {}({})", def.name, def.params.join(", ")));
            render_block(out, &def.body, depth + 1);
        },
        Statement::Block(block) => render_block(out, block, depth),
        Statement::If { condition,
                        then_branch,
                        else_branch,
                        .. } => {
            line(out, depth, "If");
            render_expr(out, condition, depth + 1);
            line(out, depth, "Then");
            render_statement(out, then_branch, depth + 1);
            if let Some(else_branch) = else_branch {
                line(out, depth, "Else");
                render_statement(out, else_branch, depth + 1);
            }
        },
        Statement::Print { expr, .. } => {
            line(out, depth, "Print");
            render_expr(out, expr, depth + 1);
        },
        Statement::Reset { .. } => line(out, depth, "Reset"),
        Statement::Expression(expr) => render_expr(out, expr, depth),
    }
}

fn render_expr(out: &mut String, expr: &Expr, depth: usize) {
    match expr {
        Expr::Number { value, fixed, .. } => {
            let mut text = match value {
                NumberLiteral::Integer(n) => format!("Number {n}"),
                NumberLiteral::Float(x) => format!("Number {x:?}"),
            };
            if *fixed {
                let _ = write!(text, " (fixed)");
            }
            line(out, depth, &text);
        },
        Expr::Identifier { name, .. } => line(out, depth, &format!("Identifier {name}")),
        Expr::Unary { op, operand, .. } => {
            line(out, depth, &format!("Unary {op}"));
            render_expr(out, operand, depth + 1);
        },
        Expr::Chain { first, rest } => {
            line(out, depth, "Chain");
            render_expr(out, first, depth + 1);
            for link in rest {
                line(out, depth + 1, &link.op.to_string());
                render_expr(out, &link.operand, depth + 2);
            }
        },
        Expr::Call { name, arguments, .. } => {
            line(out, depth, &format!("Call {name}"));
            for argument in arguments {
                render_expr(out, argument, depth + 1);
            }
        },
    }
}
