//! Drives the generated tables over sentences: a valid sentence must be
//! accepted with all input consumed, an invalid one must hit an empty cell.

use parsetab::{
    Action, Analysis, Grammar, GrammarBuilder, Ll1Table, ProdId, SlrTables, Symbol,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn tokens(g: &Grammar, input: &str) -> Vec<Symbol> {
    input
        .split_whitespace()
        .map(|s| g.symbol(s).unwrap_or_else(|| panic!("unknown terminal {s:?}")))
        .chain(std::iter::once(Symbol::END))
        .collect()
}

/// Shift-reduce driver; returns the reductions in order.
fn lr_parse(g: &Grammar, t: &SlrTables, input: &str) -> Result<Vec<ProdId>, String> {
    let toks = tokens(g, input);
    let mut states = vec![0usize];
    let mut pos = 0;
    let mut reductions = Vec::new();
    loop {
        let state = *states.last().unwrap();
        match t.action(state, toks[pos]) {
            Some(Action::Shift(j)) => {
                states.push(j);
                pos += 1;
            }
            Some(Action::Reduce(p)) => {
                let rule = g.rule(p);
                states.truncate(states.len() - rule.rhs.body().len());
                let top = *states.last().unwrap();
                let j = t
                    .goto(top, rule.lhs)
                    .ok_or_else(|| format!("no goto from {top} on {}", g.name(rule.lhs)))?;
                states.push(j);
                reductions.push(p);
            }
            Some(Action::Accept) => {
                assert_eq!(pos, toks.len() - 1, "accepted with input left");
                return Ok(reductions);
            }
            None => return Err(format!("syntax error at token {pos}")),
        }
    }
}

/// Predictive driver; returns the expansions in order.
fn ll_parse(g: &Grammar, t: &Ll1Table, input: &str) -> Result<Vec<ProdId>, String> {
    let toks = tokens(g, input);
    let mut stack = vec![Symbol::END, g.start()];
    let mut pos = 0;
    let mut expansions = Vec::new();
    while let Some(top) = stack.pop() {
        let la = toks[pos];
        if top == Symbol::END {
            return if la == Symbol::END {
                Ok(expansions)
            } else {
                Err(format!("trailing input at token {pos}"))
            };
        }
        if g.is_terminal(top) {
            if top != la {
                return Err(format!("expected {} at token {pos}", g.name(top)));
            }
            pos += 1;
        } else {
            let p = t
                .get(top, la)
                .ok_or_else(|| format!("no rule for {} at token {pos}", g.name(top)))?;
            stack.extend(g.rule(p).rhs.body().iter().rev());
            expansions.push(p);
        }
    }
    Err("stack exhausted".into())
}

fn lr_expr() -> Grammar {
    GrammarBuilder::new()
        .rule("E", &["E", "+", "T"])
        .rule("E", &["T"])
        .rule("T", &["T", "*", "F"])
        .rule("T", &["F"])
        .rule("F", &["(", "E", ")"])
        .rule("F", &["id"])
        .build()
        .unwrap()
}

fn ll_expr() -> Grammar {
    GrammarBuilder::new()
        .rule("E", &["T", "E'"])
        .rule("E'", &["+", "T", "E'"])
        .rule("E'", &[])
        .rule("T", &["F", "T'"])
        .rule("T'", &["*", "F", "T'"])
        .rule("T'", &[])
        .rule("F", &["(", "E", ")"])
        .rule("F", &["id"])
        .build()
        .unwrap()
}

/// `S' -> S .` and `A -> S .` end up in the same state, both on `$`.
fn accept_reduce() -> Grammar {
    GrammarBuilder::new()
        .rule("S", &["A", "B"])
        .rule("S", &["y"])
        .rule("A", &["S"])
        .rule("B", &["b"])
        .rule("B", &[])
        .build()
        .unwrap()
}

#[test]
fn slr_accepts_expressions() {
    init_logger();
    let g = lr_expr();
    let t = Analysis::new(&g).slr1(&g);
    assert!(t.is_slr1());

    let r = lr_parse(&g, &t, "id").unwrap();
    let rules: Vec<_> = r.iter().map(|&p| g.fmt_rule(p)).collect();
    assert_eq!(rules, ["F -> id", "T -> F", "E -> T"]);

    for s in ["id + id * id", "( id + id ) * id", "( ( id ) )", "id * id * id + id"] {
        assert!(lr_parse(&g, &t, s).is_ok(), "{s}");
    }
    for s in ["id +", "+ id", "( id", "id id", "( )"] {
        assert!(lr_parse(&g, &t, s).is_err(), "{s}");
    }
}

#[test]
fn slr_handles_epsilon_productions() {
    let g = ll_expr();
    let t = Analysis::new(&g).slr1(&g);
    assert!(t.is_slr1());
    for s in ["id", "id + id", "( id * id ) + id"] {
        assert!(lr_parse(&g, &t, s).is_ok(), "{s}");
    }
    assert!(lr_parse(&g, &t, "id + + id").is_err());
}

#[test]
fn ll1_accepts_expressions() {
    let g = ll_expr();
    let t = Analysis::new(&g).ll1(&g);
    assert!(t.is_ll1());
    for s in ["id", "id + id * id", "( id + id ) * id"] {
        assert!(ll_parse(&g, &t, s).is_ok(), "{s}");
    }
    for s in ["id +", "* id", "( id"] {
        assert!(ll_parse(&g, &t, s).is_err(), "{s}");
    }
}

#[test]
fn ll1_and_slr1_agree_on_balanced_parens() {
    let g = GrammarBuilder::new()
        .rule("S", &["(", "S", ")", "S"])
        .rule("S", &[])
        .build()
        .unwrap();
    let analysis = Analysis::new(&g);
    let ll1 = analysis.ll1(&g);
    let slr1 = analysis.slr1(&g);
    for s in ["", "( )", "( ( ) ) ( )", "( ) ( ) ( )"] {
        assert!(ll_parse(&g, &ll1, s).is_ok(), "{s}");
        assert!(lr_parse(&g, &slr1, s).is_ok(), "{s}");
    }
    for s in ["(", ")", "( ) )"] {
        assert!(ll_parse(&g, &ll1, s).is_err(), "{s}");
        assert!(lr_parse(&g, &slr1, s).is_err(), "{s}");
    }
}

#[test]
fn exactly_one_accept_state() {
    for g in [lr_expr(), ll_expr(), accept_reduce()] {
        let t = Analysis::new(&g).slr1(&g);
        let accepts: Vec<_> = (0..t.state_count())
            .flat_map(|i| {
                t.action_row(i)
                    .unwrap()
                    .iter()
                    .filter(|(_, a)| **a == Action::Accept)
                    .map(move |(&la, _)| (i, la))
                    .collect::<Vec<_>>()
            })
            .collect();
        assert_eq!(accepts.len(), 1);
        let (state, la) = accepts[0];
        assert_eq!(la, Symbol::END);
        let aug = t.automaton().augmented();
        assert!(t
            .automaton()
            .state(state)
            .unwrap()
            .iter()
            .any(|item| aug.prods()[item.prod].id.is_none() && aug.is_complete(item)));
    }
}

#[test]
fn rebuilding_gives_identical_tables() {
    let g = lr_expr();
    let a = Analysis::new(&g).slr1(&g);
    let b = Analysis::new(&g).slr1(&g);
    assert_eq!(a.state_count(), b.state_count());
    for i in 0..a.state_count() {
        assert_eq!(a.action_row(i), b.action_row(i));
        assert_eq!(a.goto_row(i), b.goto_row(i));
        assert_eq!(a.automaton().state(i), b.automaton().state(i));
    }
}
