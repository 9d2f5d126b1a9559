use super::lexer::Token;
use chumsky::prelude::*;
use smartstring::alias::String;

/// One parsed line of grammar text.
#[derive(Debug, Clone, PartialEq)]
pub enum Line {
    /// `lhs -> alt | alt ...`; an empty alternative is the epsilon production.
    Rule { lhs: String, alts: Vec<Vec<String>> },

    /// `%start X`
    Start(String),

    /// `%terminals a b c`
    Terminals(Vec<String>),

    /// Nothing but blanks or a comment.
    Blank,
}

pub fn parser<'a>() -> impl Parser<'a, &'a [Token], Line> {
    let symbol = select! {
        Token::Sym(s) => s,
    }
    .labelled("symbol");

    let prod_kw = select! { Token::Prod => () }.labelled("->");
    let bar = select! { Token::Bar => () }.labelled("|");

    let alt = symbol.clone().repeated().collect::<Vec<_>>();

    let rule = symbol
        .clone()
        .then_ignore(prod_kw)
        .then(alt.separated_by(bar).at_least(1).collect::<Vec<_>>())
        .map(|(lhs, alts)| Line::Rule { lhs, alts });

    let start = select! { Token::Start => () }
        .ignore_then(symbol.clone())
        .map(Line::Start);

    let terminals = select! { Token::Terminals => () }
        .ignore_then(symbol.repeated().at_least(1).collect::<Vec<_>>())
        .map(Line::Terminals);

    let blank = end().to(Line::Blank);

    choice((rule, start, terminals, blank)).then_ignore(end())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sym(s: &str) -> Token {
        Token::Sym(s.into())
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|&s| String::from(s)).collect()
    }

    #[test]
    fn rule_with_alternatives() {
        let tokens = vec![
            sym("E'"),
            Token::Prod,
            sym("+"),
            sym("T"),
            sym("E'"),
            Token::Bar,
        ];
        let line = parser().parse(&tokens).into_result().unwrap();
        assert_eq!(
            line,
            Line::Rule {
                lhs: "E'".into(),
                alts: vec![strings(&["+", "T", "E'"]), vec![]],
            }
        );
    }

    #[test]
    fn empty_right_hand_side() {
        let tokens = vec![sym("A"), Token::Prod];
        let line = parser().parse(&tokens).into_result().unwrap();
        assert_eq!(
            line,
            Line::Rule {
                lhs: "A".into(),
                alts: vec![vec![]],
            }
        );
    }

    #[test]
    fn directives() {
        let tokens = vec![Token::Start, sym("S")];
        assert_eq!(
            parser().parse(&tokens).into_result().unwrap(),
            Line::Start("S".into())
        );

        let tokens = vec![Token::Terminals, sym("a"), sym("b")];
        assert_eq!(
            parser().parse(&tokens).into_result().unwrap(),
            Line::Terminals(strings(&["a", "b"]))
        );
    }

    #[test]
    fn blank_line() {
        let tokens: Vec<Token> = vec![];
        assert_eq!(parser().parse(&tokens).into_result().unwrap(), Line::Blank);
    }

    #[test]
    fn malformed_lines() {
        for tokens in [
            vec![Token::Prod, sym("a")],
            vec![sym("A"), sym("a")],
            vec![sym("A"), Token::Prod, sym("a"), Token::Prod],
            vec![Token::Start],
            vec![Token::Start, sym("A"), sym("B")],
            vec![Token::Terminals],
        ] {
            assert!(parser().parse(&tokens).has_errors(), "{:?}", tokens);
        }
    }
}
