//! Lexer for a single template line using logos

use logos::Logos;

use super::ast::Span;

/// Tokens within one trimmed template line
#[derive(Logos, Debug, Clone, PartialEq)]
pub enum Token {
    /// Segment and section delimiter
    #[token("*")]
    Star,

    /// A run of glyph characters, spaces included
    #[regex(r"[^*]+", |lex| lex.slice().to_string())]
    Glyphs(String),
}

/// Lex a line into tokens with spans relative to the line start
pub fn lex(input: &str) -> impl Iterator<Item = (Token, Span)> + '_ {
    Token::lexer(input)
        .spanned()
        .filter_map(|(tok, span)| tok.ok().map(|t| (t, span)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_run() {
        let tokens: Vec<_> = lex("qwe").collect();
        assert_eq!(tokens, vec![(Token::Glyphs("qwe".to_string()), 0..3)]);
    }

    #[test]
    fn test_segments() {
        let tokens: Vec<_> = lex("a*bc*d").map(|(t, _)| t).collect();
        assert_eq!(
            tokens,
            vec![
                Token::Glyphs("a".to_string()),
                Token::Star,
                Token::Glyphs("bc".to_string()),
                Token::Star,
                Token::Glyphs("d".to_string()),
            ]
        );
    }

    #[test]
    fn test_spaces_are_glyphs() {
        let tokens: Vec<_> = lex("s S").map(|(t, _)| t).collect();
        assert_eq!(tokens, vec![Token::Glyphs("s S".to_string())]);
    }

    #[test]
    fn test_adjacent_stars() {
        let tokens: Vec<_> = lex("a**").map(|(t, _)| t).collect();
        assert_eq!(
            tokens,
            vec![Token::Glyphs("a".to_string()), Token::Star, Token::Star]
        );
    }
}
