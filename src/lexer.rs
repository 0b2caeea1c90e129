//! Line tokenization.
//!
//! A command line is split on whitespace and each raw token is classified
//! in a single left-to-right pass: redirection operators consume the
//! following token as their target path, a lone `&` marks background
//! execution, and any remaining token containing `=` is an inline
//! environment assignment. Everything else is an argument word.

use nom::{
    bytes::complete::take_while1, character::complete::multispace0, multi::many0,
    sequence::preceded, IResult,
};
use thiserror::Error;

/// Upper bound on tokens per line. The line is rejected outright when
/// exceeded, never truncated.
pub(crate) const MAX_TOKENS: usize = 512;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A command name or argument.
    Word(String),
    /// Inline assignment `name=value`, split at the first `=`.
    Assign { name: String, value: String },
    /// `<` plus its target path.
    RedirectIn(String),
    /// `>` plus its target path.
    RedirectOut(String),
    /// A lone `&`.
    Background,
}

#[derive(Error, Debug)]
pub enum LexError {
    #[error("too many tokens on one line (limit {MAX_TOKENS})")]
    TooManyTokens,
    #[error("missing path after `{0}`")]
    MissingRedirectTarget(char),
    #[error("scan error: {0}")]
    Scan(String),
}

/// One whitespace-delimited token.
fn raw_token(input: &str) -> IResult<&str, &str> {
    preceded(multispace0, take_while1(|c: char| !c.is_whitespace()))(input)
}

/// Tokenize a complete input line.
pub fn lex(line: &str) -> Result<Vec<Token>, LexError> {
    let (_, words) = many0(raw_token)(line).map_err(|e| LexError::Scan(format!("{:?}", e)))?;

    if words.len() > MAX_TOKENS {
        return Err(LexError::TooManyTokens);
    }

    let mut tokens = Vec::with_capacity(words.len());
    let mut it = words.into_iter();
    while let Some(word) = it.next() {
        match word {
            "<" => {
                let path = it.next().ok_or(LexError::MissingRedirectTarget('<'))?;
                tokens.push(Token::RedirectIn(path.to_string()));
            }
            ">" => {
                let path = it.next().ok_or(LexError::MissingRedirectTarget('>'))?;
                tokens.push(Token::RedirectOut(path.to_string()));
            }
            "&" => tokens.push(Token::Background),
            _ => match word.split_once('=') {
                Some((name, value)) => tokens.push(Token::Assign {
                    name: name.to_string(),
                    value: value.to_string(),
                }),
                None => tokens.push(Token::Word(word.to_string())),
            },
        }
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_simple_words() {
        let tokens = lex("echo hello world").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Word("echo".to_string()),
                Token::Word("hello".to_string()),
                Token::Word("world".to_string()),
            ]
        );
    }

    #[test]
    fn tokenize_empty_line() {
        assert!(lex("").unwrap().is_empty());
        assert!(lex("   \t ").unwrap().is_empty());
    }

    #[test]
    fn tokenize_redirects() {
        let tokens = lex("sort < in.txt > out.txt").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Word("sort".to_string()),
                Token::RedirectIn("in.txt".to_string()),
                Token::RedirectOut("out.txt".to_string()),
            ]
        );
    }

    #[test]
    fn redirect_target_keeps_equals_sign() {
        // The target path is consumed verbatim, never as an assignment.
        let tokens = lex("cat < a=b.txt").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Word("cat".to_string()),
                Token::RedirectIn("a=b.txt".to_string()),
            ]
        );
    }

    #[test]
    fn dangling_redirect_is_an_error() {
        assert!(matches!(
            lex("cat <"),
            Err(LexError::MissingRedirectTarget('<'))
        ));
        assert!(matches!(
            lex("echo >"),
            Err(LexError::MissingRedirectTarget('>'))
        ));
    }

    #[test]
    fn tokenize_background() {
        let tokens = lex("sleep 10 &").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Word("sleep".to_string()),
                Token::Word("10".to_string()),
                Token::Background,
            ]
        );
    }

    #[test]
    fn tokenize_assignment() {
        let tokens = lex("FOO=bar echo $FOO").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Assign {
                    name: "FOO".to_string(),
                    value: "bar".to_string(),
                },
                Token::Word("echo".to_string()),
                Token::Word("$FOO".to_string()),
            ]
        );
    }

    #[test]
    fn assignment_splits_at_first_equals() {
        let tokens = lex("X=a=b").unwrap();
        assert_eq!(
            tokens,
            vec![Token::Assign {
                name: "X".to_string(),
                value: "a=b".to_string(),
            }]
        );
    }

    #[test]
    fn heredoc_opener_stays_a_word() {
        let tokens = lex("cat HERE{").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Word("cat".to_string()),
                Token::Word("HERE{".to_string()),
            ]
        );
    }

    #[test]
    fn too_many_tokens_rejected() {
        let line = "x ".repeat(MAX_TOKENS + 1);
        assert!(matches!(lex(&line), Err(LexError::TooManyTokens)));
    }
}
