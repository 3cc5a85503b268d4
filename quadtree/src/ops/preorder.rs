use std::error::Error;
use std::fmt::{Debug, Display};
use std::io::{Error as IoError, Write};

use tracing::trace;

use crate::{Node, Pixel, Quad};

/// token that opens an Internal node, followed by its four children
pub const INTERNAL_TOKEN: &str = "";
pub const EMPTY_TOKEN: &str = "E";
pub const TOKEN_SEPARATOR: char = ',';
/// most Internal nodes a restored path may pass through, far more than any
/// `usize` sized image needs
pub const MAX_PREORDER_DEPTH: usize = 64;

impl Node {
    pub fn write_preorder_to(&self, write: impl Write) -> Result<(), IoError> {
        PreorderWriter::new(write).write(self)
    }
    /// comma separated preorder tokens, `",E,5,8,E"` for an Internal node with four non-Internal children
    pub fn to_preorder_string(&self) -> String {
        String::from_utf8(self.to_preorder_bytes()).expect("valid string")
    }
    pub fn to_preorder_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        self.write_preorder_to(&mut out).expect("valid bytes");
        out
    }

    /// Reads a whole preorder token stream, whatever variant the root is.
    ///
    /// Every token must be used.
    pub fn read_preorder<S: AsRef<str>>(tokens: &[S]) -> Result<Self, PreorderError> {
        let reader = PreorderReader::new(tokens);
        let (node, consumed) = reader.read_node(0, 0)?;
        if consumed < tokens.len() {
            return reader.fail_at(consumed, PreorderErrorHint::TrailingTokens);
        }
        Ok(node)
    }
    pub fn read_preorder_str(string: &str) -> Result<Self, PreorderError> {
        let tokens: Vec<&str> = string.split(TOKEN_SEPARATOR).collect();
        Self::read_preorder(&tokens)
    }

    /// Restores the Internal node whose marker is at `tokens[start]`.
    ///
    /// Returns the node and the number of tokens it used. Tokens after the
    /// node are ignored.
    pub fn deserialize_preorder<S: AsRef<str>>(
        tokens: &[S],
        start: usize,
    ) -> Result<(Self, usize), PreorderError> {
        let (children, consumed) = PreorderReader::new(tokens).read_internal(start, 0)?;
        Ok((Node::new_internal(children), consumed))
    }
}

// formatting

struct PreorderWriter<W> {
    write: W,
    first: bool,
}
impl<W: Write> PreorderWriter<W> {
    fn new(write: W) -> Self {
        PreorderWriter { write, first: true }
    }
    fn write(mut self, node: &Node) -> Result<(), IoError> {
        self.write_node(node)
    }
    fn write_node(&mut self, node: &Node) -> Result<(), IoError> {
        match node {
            Node::Empty => self.write_token(EMPTY_TOKEN),
            Node::Leaf(value) => self.write_token(&value.to_string()),
            Node::Internal(children) => {
                self.write_token(INTERNAL_TOKEN)?;
                children.iter().try_for_each(|child| self.write_node(child))
            }
        }
    }
    fn write_token(&mut self, token: &str) -> Result<(), IoError> {
        if self.first {
            self.first = false;
        } else {
            write!(self.write, "{TOKEN_SEPARATOR}")?;
        }
        self.write.write_all(token.as_bytes())
    }
}

// parsing

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PreorderErrorHint {
    ExpectedInternal,
    MissingToken,
    InvalidLeaf,
    TrailingTokens,
    TooDeep,
}

/// a token stream that doesn't follow the preorder grammar
#[derive(Clone, PartialEq, Eq)]
pub struct PreorderError {
    at: usize,
    token: Option<String>,
    hint: PreorderErrorHint,
}
impl PreorderError {
    fn new(at: usize, token: Option<String>, hint: PreorderErrorHint) -> Self {
        Self { at, token, hint }
    }
    /// 0 based token index
    pub fn at(&self) -> usize {
        self.at
    }
    /// the offending token, `None` if the stream ended early
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
    pub fn hint(&self) -> &'static str {
        match self.hint {
            PreorderErrorHint::ExpectedInternal => "Expected an empty token to start an internal node",
            PreorderErrorHint::MissingToken => "Internal nodes need exactly 4 children",
            PreorderErrorHint::InvalidLeaf => "Leaf tokens must be base 10 integers",
            PreorderErrorHint::TrailingTokens => "Tokens after the end of the root node",
            PreorderErrorHint::TooDeep => "Internal nodes are nested too deeply",
        }
    }
}
impl Debug for PreorderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreorderError")
            .field("at", &self.at)
            .field("token", &self.token)
            .field("hint", &self.hint)
            .finish()
    }
}
impl Display for PreorderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let hint = self.hint();
        match &self.token {
            Some(token) => write!(
                f,
                "Failed to read preorder at token {} ({token:?}): {hint}",
                self.at
            ),
            None => write!(
                f,
                "Failed to read preorder, ran out of tokens at {}: {hint}",
                self.at
            ),
        }
    }
}
impl Error for PreorderError {}

type PreorderResult<T> = Result<T, PreorderError>;

enum Token {
    Internal,
    Empty,
    Leaf(Pixel),
}

struct PreorderReader<'t, S> {
    tokens: &'t [S],
}
impl<'t, S: AsRef<str>> PreorderReader<'t, S> {
    fn new(tokens: &'t [S]) -> Self {
        Self { tokens }
    }

    fn read_node(&self, at: usize, depth: usize) -> PreorderResult<(Node, usize)> {
        match self.token(at)? {
            Token::Internal => {
                let (children, consumed) = self.read_internal(at, depth)?;
                Ok((Node::new_internal(children), consumed))
            }
            Token::Empty => Ok((Node::Empty, 1)),
            Token::Leaf(value) => Ok((Node::Leaf(value), 1)),
        }
    }

    /// `depth` counts the Internal nodes above this one
    fn read_internal(&self, start: usize, depth: usize) -> PreorderResult<(Quad<Node>, usize)> {
        if !matches!(self.token(start)?, Token::Internal) {
            return self.fail_at(start, PreorderErrorHint::ExpectedInternal);
        }
        if depth >= MAX_PREORDER_DEPTH {
            return self.fail_at(start, PreorderErrorHint::TooDeep);
        }
        let result = match self.tokens.get(start + 1..start + 5) {
            Some(children) if children.iter().all(|t| t.as_ref() != INTERNAL_TOKEN) => {
                self.read_flat_children(start + 1)?
            }
            _ => self.read_nested_children(start, depth)?,
        };
        trace!(start, consumed = result.1, "restored internal node");
        Ok(result)
    }
    /// four Empty or Leaf tokens in a row
    fn read_flat_children(&self, first: usize) -> PreorderResult<(Quad<Node>, usize)> {
        let mut children = [Node::Empty, Node::Empty, Node::Empty, Node::Empty];
        for (i, child) in children.iter_mut().enumerate() {
            *child = match self.token(first + i)? {
                Token::Empty => Node::Empty,
                Token::Leaf(value) => Node::Leaf(value),
                Token::Internal => unreachable!("checked by caller"),
            };
        }
        Ok((Quad::from_array(children), 5))
    }
    fn read_nested_children(
        &self,
        start: usize,
        depth: usize,
    ) -> PreorderResult<(Quad<Node>, usize)> {
        let mut children = [Node::Empty, Node::Empty, Node::Empty, Node::Empty];
        let mut count = 1;
        for child in &mut children {
            let (node, consumed) = self.read_node(start + count, depth + 1)?;
            *child = node;
            count += consumed;
        }
        Ok((Quad::from_array(children), count))
    }

    fn token(&self, at: usize) -> PreorderResult<Token> {
        match self.tokens.get(at).map(AsRef::as_ref) {
            None => self.fail_at(at, PreorderErrorHint::MissingToken),
            Some(INTERNAL_TOKEN) => Ok(Token::Internal),
            Some(EMPTY_TOKEN) => Ok(Token::Empty),
            Some(text) => match text.parse() {
                Ok(value) => Ok(Token::Leaf(value)),
                Err(_) => self.fail_at(at, PreorderErrorHint::InvalidLeaf),
            },
        }
    }

    fn fail_at<T>(&self, at: usize, hint: PreorderErrorHint) -> PreorderResult<T> {
        let token = self.tokens.get(at).map(|t| t.as_ref().to_owned());
        Err(PreorderError::new(at, token, hint))
    }
}

// tests
