//! Ordered token storage produced by one scan.

use std::iter::{self, Chain, Once};
use std::ops::Index;
use std::{slice, vec};

use crate::token::{Token, TokenKind};

/// Borrowing iterator over a [`TokenStream`].
pub type Iter<'a> = Chain<slice::Iter<'a, Token>, Once<&'a Token>>;

/// Owning iterator over a [`TokenStream`].
pub type IntoIter = Chain<vec::IntoIter<Token>, Once<Token>>;

/// Owned, insertion-ordered sequence of tokens.
///
/// A stream always ends with exactly one end-of-input token and holds
/// nothing after it. The marker lives in its own field, so a stream cannot
/// exist without it. Streams are only built by the lexer; consumers borrow
/// them or take the tokens with [`into_vec`](Self::into_vec).
///
/// # Example
///
/// ```
/// use simplc_lex::{tokenize, TokenKind};
/// use simplc_util::Handler;
///
/// let mut handler = Handler::new();
/// let stream = tokenize("x = 1;", &mut handler);
///
/// assert_eq!(stream.len(), 5);
/// assert_eq!(stream.eof().kind, TokenKind::EndOfInput);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenStream {
    tokens: Vec<Token>,
    eof: Token,
}

impl TokenStream {
    /// Slots allocated before the first token is appended.
    pub const INITIAL_CAPACITY: usize = 10;

    /// Number of tokens, including the end-of-input marker.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len() + 1
    }

    /// Always false: the end-of-input marker is always present.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Allocated slots for the tokens before the end-of-input marker.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.tokens.capacity()
    }

    /// Returns the token at `index`.
    pub fn get(&self, index: usize) -> Option<&Token> {
        match index.cmp(&self.tokens.len()) {
            std::cmp::Ordering::Less => self.tokens.get(index),
            std::cmp::Ordering::Equal => Some(&self.eof),
            std::cmp::Ordering::Greater => None,
        }
    }

    /// Returns the end-of-input marker.
    #[inline]
    pub fn eof(&self) -> &Token {
        &self.eof
    }

    /// Iterates over the tokens in source order.
    pub fn iter(&self) -> Iter<'_> {
        self.tokens.iter().chain(iter::once(&self.eof))
    }

    /// Iterates over the token kinds in source order.
    pub fn kinds(&self) -> impl Iterator<Item = TokenKind> + '_ {
        self.iter().map(|t| t.kind)
    }

    /// Transfers ownership of the tokens to the caller.
    pub fn into_vec(self) -> Vec<Token> {
        let mut tokens = self.tokens;
        tokens.push(self.eof);
        tokens
    }
}

impl Index<usize> for TokenStream {
    type Output = Token;

    fn index(&self, index: usize) -> &Token {
        if index == self.tokens.len() {
            &self.eof
        } else {
            &self.tokens[index]
        }
    }
}

impl IntoIterator for TokenStream {
    type Item = Token;
    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter().chain(iter::once(self.eof))
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a Token;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Growable storage for the tokens of a scan in progress.
#[derive(Debug)]
pub(crate) struct TokenBuffer {
    tokens: Vec<Token>,
}

impl TokenBuffer {
    pub(crate) fn new() -> Self {
        Self {
            tokens: Vec::with_capacity(TokenStream::INITIAL_CAPACITY),
        }
    }

    /// Appends a token, doubling the storage first when it is full.
    pub(crate) fn push(&mut self, token: Token) {
        debug_assert!(!token.is_eof(), "end of input pushed as a token");
        let capacity = self.tokens.capacity();
        if self.tokens.len() == capacity {
            self.tokens.reserve_exact(capacity.max(1));
        }
        self.tokens.push(token);
    }

    /// Seals the buffer with its end-of-input marker.
    pub(crate) fn finish(self, eof: Token) -> TokenStream {
        debug_assert!(eof.is_eof(), "stream sealed with a non-EOF token");
        TokenStream {
            tokens: self.tokens,
            eof,
        }
    }
}
