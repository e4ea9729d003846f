//! Lexer for `key="value"` attribute pairs inside an open tag, using logos
//!
//! This deliberately covers only what partial include tags need: identifiers,
//! `=`, and quoted string values. There is no entity decoding and no general
//! markup grammar; anything the lexer cannot recognize is skipped.

use logos::Logos;

use super::Parameters;

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\r]+")]
pub enum AttrToken {
    #[regex(r"[A-Za-z_][A-Za-z0-9_\-]*", |lex| lex.slice().to_owned())]
    Ident(String),

    #[token("=")]
    Eq,

    #[regex(r#""[^"]*""#, unquote)]
    #[regex(r#"'[^']*'"#, unquote)]
    Value(String),
}

fn unquote(lex: &mut logos::Lexer<AttrToken>) -> String {
    let slice = lex.slice();
    slice[1..slice.len() - 1].to_owned()
}

/// Extract attribute pairs from the text between an open tag's name and
/// its closing `>`.
///
/// Values are taken verbatim from between the quotes. Tokens that do not
/// form a complete `ident = "value"` sequence are ignored rather than
/// rejected, matching the permissive stance the tag syntax takes overall.
pub fn parse_attributes(region: &str) -> Parameters {
    let mut parameters = Parameters::new();
    let mut lexer = AttrToken::lexer(region);

    let mut pending: Option<String> = None;
    let mut saw_eq = false;
    while let Some(token) = lexer.next() {
        match token {
            Ok(AttrToken::Ident(name)) => {
                pending = Some(name);
                saw_eq = false;
            }
            Ok(AttrToken::Eq) => {
                saw_eq = pending.is_some();
            }
            Ok(AttrToken::Value(value)) => {
                if saw_eq {
                    if let Some(name) = pending.take() {
                        parameters.set(&name, &value);
                    }
                }
                saw_eq = false;
            }
            Err(_) => {
                pending = None;
                saw_eq = false;
            }
        }
    }
    parameters
}
