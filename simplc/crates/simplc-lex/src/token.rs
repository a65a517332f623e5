//! Token definitions for the simpliCty lexer.
//!
//! A [`Token`] is a classified lexeme: its [`TokenKind`], its text, and the
//! line it was recognized on. Keyword tokens carry the canonical uppercase
//! spelling of the [`Keyword`] instead of the source text.

use std::fmt;

/// Lexical category of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Reserved word (`break`, `int`, `if`, `return`, `while`)
    Keyword,
    /// Name made of letters, digits and underscores, not starting with a digit
    Identifier,
    /// Run of decimal digits
    Number,
    /// `+ - * /`
    ArithmeticOperator,
    /// `== != < > <= >=`
    RelationalOperator,
    /// `&& ||`
    LogicalOperator,
    /// `=`
    AssignmentOperator,
    /// `!`
    UnaryOperator,
    /// `; , ( ) { } [ ]`
    Delimiter,
    /// Operator-set character with no operator meaning on its own
    Unknown,
    /// Terminal marker, always the last token of a stream
    EndOfInput,
}

impl TokenKind {
    /// Returns the upper-snake name used when printing tokens.
    ///
    /// # Example
    ///
    /// ```
    /// use simplc_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::RelationalOperator.as_str(), "RELATIONAL_OPERATOR");
    /// assert_eq!(TokenKind::EndOfInput.as_str(), "EOF");
    /// ```
    pub const fn as_str(self) -> &'static str {
        match self {
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Number => "NUMBER",
            TokenKind::ArithmeticOperator => "ARITHMETIC_OPERATOR",
            TokenKind::RelationalOperator => "RELATIONAL_OPERATOR",
            TokenKind::LogicalOperator => "LOGICAL_OPERATOR",
            TokenKind::AssignmentOperator => "ASSIGNMENT_OPERATOR",
            TokenKind::UnaryOperator => "UNARY_OPERATOR",
            TokenKind::Delimiter => "DELIMITER",
            TokenKind::Unknown => "UNKNOWN",
            TokenKind::EndOfInput => "EOF",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reserved words of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    /// `break`
    Break,
    /// `int`
    Int,
    /// `if`
    If,
    /// `return`
    Return,
    /// `while`
    While,
}

impl Keyword {
    /// Every keyword, in declaration order.
    pub const ALL: [Keyword; 5] = [
        Keyword::Break,
        Keyword::Int,
        Keyword::If,
        Keyword::Return,
        Keyword::While,
    ];

    /// Looks up a complete candidate lexeme.
    ///
    /// Matching is exact and case-sensitive: the whole lexeme must equal a
    /// keyword spelling. Prefixes, extensions and other casings are not
    /// keywords.
    ///
    /// # Example
    ///
    /// ```
    /// use simplc_lex::Keyword;
    ///
    /// assert_eq!(Keyword::from_ident("while"), Some(Keyword::While));
    /// assert_eq!(Keyword::from_ident("While"), None);
    /// assert_eq!(Keyword::from_ident("iffy"), None);
    /// assert_eq!(Keyword::from_ident("in"), None);
    /// ```
    pub fn from_ident(ident: &str) -> Option<Keyword> {
        match ident {
            "break" => Some(Keyword::Break),
            "int" => Some(Keyword::Int),
            "if" => Some(Keyword::If),
            "return" => Some(Keyword::Return),
            "while" => Some(Keyword::While),
            _ => None,
        }
    }

    /// Canonical uppercase spelling carried by keyword tokens.
    pub const fn as_str(self) -> &'static str {
        match self {
            Keyword::Break => "BREAK",
            Keyword::Int => "INT",
            Keyword::If => "IF",
            Keyword::Return => "RETURN",
            Keyword::While => "WHILE",
        }
    }

    /// Spelling as written in source.
    pub const fn source_text(self) -> &'static str {
        match self {
            Keyword::Break => "break",
            Keyword::Int => "int",
            Keyword::If => "if",
            Keyword::Return => "return",
            Keyword::While => "while",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified lexeme.
///
/// `text` is never empty; the end-of-input marker carries `"EOF"`.
///
/// # Example
///
/// ```
/// use simplc_lex::{Token, TokenKind};
///
/// let token = Token::new(TokenKind::Identifier, "count", 3);
/// assert_eq!(token.to_string(), "TOKEN: count | TYPE: IDENTIFIER | LINE: 3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    /// Lexical category
    pub kind: TokenKind,
    /// Lexeme, or the canonical spelling for keywords
    pub text: String,
    /// 1-based line the token was recognized on
    pub line: u32,
}

impl Token {
    /// Text carried by the end-of-input marker.
    pub const EOF_TEXT: &'static str = "EOF";

    /// Creates a token.
    pub fn new(kind: TokenKind, text: impl Into<String>, line: u32) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
        }
    }

    /// Creates a keyword token with its canonical spelling.
    pub fn keyword(keyword: Keyword, line: u32) -> Self {
        Self::new(TokenKind::Keyword, keyword.as_str(), line)
    }

    /// Creates the end-of-input marker.
    pub fn eof(line: u32) -> Self {
        Self::new(TokenKind::EndOfInput, Self::EOF_TEXT, line)
    }

    /// Returns true for the end-of-input marker.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }

    /// Returns the keyword this token stands for, if any.
    pub fn as_keyword(&self) -> Option<Keyword> {
        if self.kind != TokenKind::Keyword {
            return None;
        }
        Keyword::ALL.into_iter().find(|kw| kw.as_str() == self.text)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TOKEN: {} | TYPE: {} | LINE: {}",
            self.text, self.kind, self.line
        )
    }
}
