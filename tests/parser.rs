use tableau_lib::{
    parser::{lexer::tokenize, parse, parse_lines},
    procedures::normalize::normalize_formula,
    structures::formula::{Formula, Kind},
    types::err::{self},
};

mod grammar {
    use super::*;

    #[test]
    fn variables() {
        for name in ["p", "z", "q1", "r10", "s123"] {
            assert_eq!(parse(name), Ok(Formula::literal(name)));
        }
    }

    #[test]
    fn each_connective() {
        let p = || Formula::literal("p");
        let q = || Formula::literal("q");

        assert_eq!(parse("(p and q)"), Ok(Formula::conjunction(p(), q())));
        assert_eq!(parse("(p or q)"), Ok(Formula::disjunction(p(), q())));
        assert_eq!(parse("(p => q)"), Ok(Formula::implication(p(), q())));
        assert_eq!(parse("(p <=> q)"), Ok(Formula::equivalence(p(), q())));
    }

    #[test]
    fn parsed_formulas_are_unsigned() {
        let formula = parse("~(~p and ~~(q or r))").unwrap();
        assert!(!formula.sign());
        assert!(matches!(formula.kind(), Kind::Negation(_)));
        assert_eq!(formula.negation_count(), 4);
    }

    #[test]
    fn whitespace() {
        assert_eq!(parse("(p=>q)"), parse("  ( p   =>\tq )  "));
    }

    #[test]
    fn rendering() {
        let text = "((p and ~q) <=> ~(~r => (s or t)))";
        assert_eq!(parse(text).unwrap().to_string(), text);
        assert_eq!(parse("((p))").unwrap().to_string(), "p");
    }

    #[test]
    fn normalized_rendering() {
        let formula = normalize_formula(parse("~~(p and ~~~q)").unwrap());
        assert_eq!(formula.to_string(), "(p and ~q)");
        assert_eq!(formula.negation_count(), 0);
    }
}

mod errors {
    use super::*;

    #[test]
    fn empty() {
        assert_eq!(parse(""), Err(err::ParseError::Empty));
    }

    #[test]
    fn unbalanced() {
        assert!(matches!(parse("(p and q"), Err(err::ParseError::UnexpectedEnd { .. })));
        assert!(matches!(parse("(p and q))"), Err(err::ParseError::TrailingInput { position: 9 })));
        assert!(matches!(parse(")"), Err(err::ParseError::UnexpectedToken { position: 0, .. })));
    }

    #[test]
    fn unparenthesized_binary() {
        assert!(matches!(parse("p and q"), Err(err::ParseError::TrailingInput { .. })));
        assert!(matches!(parse("(p and q and r)"), Err(err::ParseError::UnexpectedToken { .. })));
    }

    #[test]
    fn unknown_symbols() {
        assert_eq!(
            parse("(p | q)"),
            Err(err::ParseError::UnknownSymbol { position: 3, symbol: '|' })
        );
        assert_eq!(
            tokenize("b"),
            Err(err::ParseError::UnknownSymbol { position: 0, symbol: 'b' })
        );
    }

    #[test]
    fn messages() {
        let message = parse("(p | q)").unwrap_err().to_string();
        assert!(message.contains('|'));
        assert!(message.contains('3'));
    }
}

mod files {
    use super::*;

    #[test]
    fn comments_and_blanks() {
        let text = "# Tautologies\n(p or ~p)\n\n# Contingent\n(p and q)\n";
        let formulas = parse_lines(text);
        assert_eq!(formulas.len(), 2);
        assert_eq!(formulas[0].0, 2);
        assert_eq!(formulas[1].0, 5);
        assert!(formulas.iter().all(|(_, formula)| formula.is_ok()));
    }
}
