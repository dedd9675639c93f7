//! Statements inside method bodies.

use objcgen_codegen::{Element, Error, IndentValue, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Selector {
    Unary(String),
    Keywords(Vec<(String, String)>),
}

/// A message send: `[receiver selector]` or `[receiver a:x b:y]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodCall {
    receiver: String,
    selector: Selector,
}

impl MethodCall {
    /// A keyword message. Each selector fragment is paired with the argument
    /// at the same position, so both lists must have the same length.
    pub fn new(
        receiver: impl Into<String>,
        fragments: impl IntoIterator<Item = impl Into<String>>,
        arguments: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Self> {
        let fragments: Vec<String> = fragments.into_iter().map(Into::into).collect();
        let arguments: Vec<String> = arguments.into_iter().map(Into::into).collect();

        if fragments.len() != arguments.len() {
            return Err(Error::mismatch(
                "method call arguments",
                fragments.len(),
                arguments.len(),
            ));
        }
        if fragments.is_empty() {
            return Err(Error::invalid("method call", "selector has no fragments"));
        }

        Ok(Self {
            receiver: receiver.into(),
            selector: Selector::Keywords(fragments.into_iter().zip(arguments).collect()),
        })
    }

    /// An argument-free message (`[receiver selector]`).
    pub fn unary(receiver: impl Into<String>, selector: impl Into<String>) -> Self {
        Self {
            receiver: receiver.into(),
            selector: Selector::Unary(selector.into()),
        }
    }

    pub fn render(&self) -> String {
        let selector = match &self.selector {
            Selector::Unary(name) => name.clone(),
            Selector::Keywords(pairs) => pairs
                .iter()
                .map(|(fragment, argument)| format!("{}:{}", fragment, argument))
                .collect::<Vec<_>>()
                .join(" "),
        };
        format!("[{} {}]", self.receiver, selector)
    }
}

/// The right-hand side of an assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Raw(String),
    Call(MethodCall),
}

impl Expr {
    pub fn raw(text: impl Into<String>) -> Self {
        Self::Raw(text.into())
    }

    pub fn render(&self) -> String {
        match self {
            Expr::Raw(text) => text.clone(),
            Expr::Call(call) => call.render(),
        }
    }
}

impl From<MethodCall> for Expr {
    fn from(call: MethodCall) -> Self {
        Self::Call(call)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Statement {
    Expression(String),
    Call(MethodCall),
    Assignment { target: String, value: Expr },
}

/// A single line of a method body, prefixed with the indent it was built with.
///
/// Raw expressions are emitted verbatim after the indent; calls and
/// assignments are terminated with `;`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementElement {
    statement: Statement,
    indent: IndentValue,
}

impl StatementElement {
    pub fn expression(text: impl Into<String>, indent: IndentValue) -> Self {
        Self {
            statement: Statement::Expression(text.into()),
            indent,
        }
    }

    pub fn call(call: MethodCall, indent: IndentValue) -> Self {
        Self {
            statement: Statement::Call(call),
            indent,
        }
    }

    pub fn assignment(target: impl Into<String>, value: impl Into<Expr>, indent: IndentValue) -> Self {
        Self {
            statement: Statement::Assignment {
                target: target.into(),
                value: value.into(),
            },
            indent,
        }
    }

    pub fn indent(&self) -> IndentValue {
        self.indent
    }
}

impl Element for StatementElement {
    fn label(&self) -> &'static str {
        "Statement"
    }

    fn render(&self) -> String {
        let body = match &self.statement {
            Statement::Expression(text) => text.clone(),
            Statement::Call(call) => format!("{};", call.render()),
            Statement::Assignment { target, value } => {
                format!("{} = {};", target, value.render())
            }
        };
        format!("{}{}", self.indent, body)
    }
}
