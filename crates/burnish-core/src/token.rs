use serde::{Deserialize, Serialize};

/// Lexical categories a token can belong to.
///
/// The vocabulary is closed: rules register interest in these variants and the
/// dispatcher routes on them directly, so no kind is ever compared as a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    InlineHtml,
    OpenTag,
    CloseTag,
    Whitespace,
    Comment,
    DocCommentOpenTag,
    DocCommentCloseTag,
    DocCommentStar,
    DocCommentWhitespace,
    DocCommentTag,
    DocCommentString,
    Class,
    Trait,
    Interface,
    Function,
    Fn,
    New,
    Declare,
    Namespace,
    Use,
    Return,
    Public,
    Protected,
    Private,
    Static,
    Abstract,
    Final,
    Readonly,
    Extends,
    Implements,
    String,
    Variable,
    LNumber,
    DNumber,
    ConstantEncapsedString,
    OpenCurlyBracket,
    CloseCurlyBracket,
    OpenParenthesis,
    CloseParenthesis,
    OpenSquareBracket,
    CloseSquareBracket,
    DoubleColon,
    Semicolon,
    Comma,
    Equal,
    DoubleArrow,
    ObjectOperator,
    Colon,
    Operator,
    Unknown,
}

/// Modifiers that may sit between a doc comment and the declaration it documents.
pub const METHOD_PREFIXES: &[TokenKind] = &[
    TokenKind::Public,
    TokenKind::Protected,
    TokenKind::Private,
    TokenKind::Static,
    TokenKind::Abstract,
    TokenKind::Final,
    TokenKind::Readonly,
];

/// Kinds that own a `{ ... }` scope.
pub const SCOPE_OWNERS: &[TokenKind] = &[
    TokenKind::Class,
    TokenKind::Trait,
    TokenKind::Interface,
    TokenKind::Function,
];

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::InlineHtml => "inline_html",
            TokenKind::OpenTag => "open_tag",
            TokenKind::CloseTag => "close_tag",
            TokenKind::Whitespace => "whitespace",
            TokenKind::Comment => "comment",
            TokenKind::DocCommentOpenTag => "doc_comment_open_tag",
            TokenKind::DocCommentCloseTag => "doc_comment_close_tag",
            TokenKind::DocCommentStar => "doc_comment_star",
            TokenKind::DocCommentWhitespace => "doc_comment_whitespace",
            TokenKind::DocCommentTag => "doc_comment_tag",
            TokenKind::DocCommentString => "doc_comment_string",
            TokenKind::Class => "class",
            TokenKind::Trait => "trait",
            TokenKind::Interface => "interface",
            TokenKind::Function => "function",
            TokenKind::Fn => "fn",
            TokenKind::New => "new",
            TokenKind::Declare => "declare",
            TokenKind::Namespace => "namespace",
            TokenKind::Use => "use",
            TokenKind::Return => "return",
            TokenKind::Public => "public",
            TokenKind::Protected => "protected",
            TokenKind::Private => "private",
            TokenKind::Static => "static",
            TokenKind::Abstract => "abstract",
            TokenKind::Final => "final",
            TokenKind::Readonly => "readonly",
            TokenKind::Extends => "extends",
            TokenKind::Implements => "implements",
            TokenKind::String => "string",
            TokenKind::Variable => "variable",
            TokenKind::LNumber => "lnumber",
            TokenKind::DNumber => "dnumber",
            TokenKind::ConstantEncapsedString => "constant_encapsed_string",
            TokenKind::OpenCurlyBracket => "open_curly_bracket",
            TokenKind::CloseCurlyBracket => "close_curly_bracket",
            TokenKind::OpenParenthesis => "open_parenthesis",
            TokenKind::CloseParenthesis => "close_parenthesis",
            TokenKind::OpenSquareBracket => "open_square_bracket",
            TokenKind::CloseSquareBracket => "close_square_bracket",
            TokenKind::DoubleColon => "double_colon",
            TokenKind::Semicolon => "semicolon",
            TokenKind::Comma => "comma",
            TokenKind::Equal => "equal",
            TokenKind::DoubleArrow => "double_arrow",
            TokenKind::ObjectOperator => "object_operator",
            TokenKind::Colon => "colon",
            TokenKind::Operator => "operator",
            TokenKind::Unknown => "unknown",
        }
    }

    /// Map a bare identifier to its keyword kind. Keywords are case-insensitive.
    pub fn keyword(ident: &str) -> Option<TokenKind> {
        let kind = match ident.to_ascii_lowercase().as_str() {
            "class" => TokenKind::Class,
            "trait" => TokenKind::Trait,
            "interface" => TokenKind::Interface,
            "function" => TokenKind::Function,
            "fn" => TokenKind::Fn,
            "new" => TokenKind::New,
            "declare" => TokenKind::Declare,
            "namespace" => TokenKind::Namespace,
            "use" => TokenKind::Use,
            "return" => TokenKind::Return,
            "public" => TokenKind::Public,
            "protected" => TokenKind::Protected,
            "private" => TokenKind::Private,
            "static" => TokenKind::Static,
            "abstract" => TokenKind::Abstract,
            "final" => TokenKind::Final,
            "readonly" => TokenKind::Readonly,
            "extends" => TokenKind::Extends,
            "implements" => TokenKind::Implements,
            _ => return None,
        };
        Some(kind)
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A lexical unit of source text.
///
/// The structural pointers are indices into the buffer the token lives in.
/// They are cross-references only and are valid for one pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    /// 1-based line of the first character.
    pub line: u32,
    /// 1-based column of the first character, counted in chars.
    pub column: u32,
    /// Length of `text` in chars.
    pub length: u32,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub scope_opener: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub scope_closer: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub paren_opener: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub paren_closer: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub comment_opener: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub comment_closer: Option<usize>,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, line: u32, column: u32) -> Self {
        let text = text.into();
        let length = text.chars().count() as u32;
        Self {
            kind,
            text,
            line,
            column,
            length,
            scope_opener: None,
            scope_closer: None,
            paren_opener: None,
            paren_closer: None,
            comment_opener: None,
            comment_closer: None,
        }
    }

    /// Whether the token text ends a line.
    pub fn ends_line(&self) -> bool {
        self.text.ends_with('\n')
    }
}
