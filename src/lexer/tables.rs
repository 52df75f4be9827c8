//! Fixed operator and punctuation table
//!
//! Entries are ordered longest first so the first prefix match is the
//! maximal munch.

use super::token::TokenKind;

pub const OPERATORS: &[(&str, TokenKind)] = &[
    // Three characters
    ("...", TokenKind::DotDotDot),
    ("..=", TokenKind::DotDotEq),
    ("<<=", TokenKind::ShlAssign),
    (">>=", TokenKind::ShrAssign),
    // Two characters
    ("==", TokenKind::EqEq),
    ("!=", TokenKind::NotEq),
    ("<=", TokenKind::LessEq),
    (">=", TokenKind::GreaterEq),
    ("&&", TokenKind::AndAnd),
    ("||", TokenKind::OrOr),
    ("->", TokenKind::Arrow),
    ("=>", TokenKind::FatArrow),
    ("::", TokenKind::ColonColon),
    (":=", TokenKind::ColonAssign),
    ("..", TokenKind::DotDot),
    ("+=", TokenKind::PlusAssign),
    ("-=", TokenKind::MinusAssign),
    ("*=", TokenKind::StarAssign),
    ("/=", TokenKind::SlashAssign),
    ("%=", TokenKind::PercentAssign),
    ("<<", TokenKind::Shl),
    (">>", TokenKind::Shr),
    // Single characters
    ("+", TokenKind::Plus),
    ("-", TokenKind::Minus),
    ("*", TokenKind::Star),
    ("/", TokenKind::Slash),
    ("%", TokenKind::Percent),
    ("=", TokenKind::Assign),
    ("<", TokenKind::Less),
    (">", TokenKind::Greater),
    ("!", TokenKind::Bang),
    ("&", TokenKind::Ampersand),
    ("|", TokenKind::Pipe),
    ("^", TokenKind::Caret),
    ("~", TokenKind::Tilde),
    ("(", TokenKind::LeftParen),
    (")", TokenKind::RightParen),
    ("{", TokenKind::LeftBrace),
    ("}", TokenKind::RightBrace),
    ("[", TokenKind::LeftBracket),
    ("]", TokenKind::RightBracket),
    (",", TokenKind::Comma),
    (".", TokenKind::Dot),
    (":", TokenKind::Colon),
    (";", TokenKind::Semicolon),
    ("?", TokenKind::Question),
    ("#", TokenKind::Hash),
];

/// Longest operator that prefixes `rest`
pub fn match_operator(rest: &str) -> Option<(&'static str, TokenKind)> {
    OPERATORS
        .iter()
        .find(|(symbol, _)| rest.starts_with(symbol))
        .copied()
}

/// Whether `c` begins at least one operator
pub fn is_operator_start(c: char) -> bool {
    OPERATORS
        .iter()
        .any(|(symbol, _)| symbol.starts_with(c))
}

/// Source spelling of an operator kind
pub fn symbol_of(kind: TokenKind) -> Option<&'static str> {
    OPERATORS
        .iter()
        .find(|(_, k)| *k == kind)
        .map(|(symbol, _)| *symbol)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_longest_first() {
        for pair in OPERATORS.windows(2) {
            assert!(
                pair[0].0.len() >= pair[1].0.len(),
                "{:?} listed before longer {:?}",
                pair[0].0,
                pair[1].0
            );
        }
    }

    #[test]
    fn test_no_duplicates() {
        for (i, (a, ka)) in OPERATORS.iter().enumerate() {
            for (b, kb) in &OPERATORS[i + 1..] {
                assert_ne!(a, b);
                assert_ne!(ka, kb);
            }
        }
    }

    #[test]
    fn test_maximal_munch() {
        assert_eq!(match_operator("=="), Some(("==", TokenKind::EqEq)));
        assert_eq!(match_operator("=x"), Some(("=", TokenKind::Assign)));
        assert_eq!(match_operator("<<=1"), Some(("<<=", TokenKind::ShlAssign)));
        assert_eq!(match_operator("...."), Some(("...", TokenKind::DotDotDot)));
        assert_eq!(match_operator("@"), None);
        assert_eq!(match_operator(""), None);
    }

    #[test]
    fn test_operator_start() {
        assert!(is_operator_start('='));
        assert!(is_operator_start('#'));
        assert!(!is_operator_start('@'));
        assert!(!is_operator_start('$'));
        assert!(!is_operator_start('a'));
    }

    #[test]
    fn test_symbol_of() {
        assert_eq!(symbol_of(TokenKind::FatArrow), Some("=>"));
        assert_eq!(symbol_of(TokenKind::Identifier), None);
    }
}
