use logos::Logos;

/// Tokens of a single instruction line.
/// Anything between whitespace (Unicode, plus the ASCII separators 0x1C-0x1F) is one token;
/// runs that look like a signed decimal integer are parsed eagerly.
#[derive(PartialEq, Debug, Clone, Logos)]
pub enum TokenKind {
    // Literals.
    #[regex(r"[+-]?[0-9]+", |lex| lex.slice().parse::<i64>().ok(), priority = 2)]
    Integer(i64),
    #[regex(r"[^\s\x1C-\x1F]+")]
    Word,

    // Integer-shaped runs that overflow i64 end up here too.
    #[error]
    #[regex(r"[\s\x1C-\x1F]+", logos::skip)]
    Error,
}

/// A token together with the text it was lexed from.
#[derive(PartialEq, Debug, Clone)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub slice: &'src str,
}

/// Whether `slice` has the shape of an [TokenKind::Integer], regardless of whether it fits.
pub fn is_integer(slice: &str) -> bool {
    let digits = slice.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(slice);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Split `source` into tokens, skipping whitespace.
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    let mut lexer = TokenKind::lexer(source);
    let mut tokens = vec![];
    while let Some(kind) = lexer.next() {
        tokens.push(Token {
            kind,
            slice: lexer.slice(),
        });
    }
    tokens
}
