use rand::{rngs::StdRng, Rng, SeedableRng};

use tableau_lib::{
    context::check_tautology,
    procedures::truth_table::{self},
    structures::formula::{Connective, Formula},
};

const VARIABLES: [&str; 5] = ["p", "q", "r", "s", "t"];

const CONNECTIVES: [Connective; 4] = [
    Connective::Conjunction,
    Connective::Disjunction,
    Connective::Implication,
    Connective::Equivalence,
];

fn random_formula(rng: &mut StdRng, depth: usize) -> Formula {
    if depth == 0 || rng.gen_bool(0.2) {
        return Formula::literal(VARIABLES[rng.gen_range(0..VARIABLES.len())]);
    }

    match rng.gen_range(0..5) {
        0 => Formula::negation(random_formula(rng, depth - 1)),
        n => {
            let left = random_formula(rng, depth - 1);
            let right = random_formula(rng, depth - 1);
            Formula::binary(CONNECTIVES[n - 1], left, right)
        }
    }
}

/// Formulas with a good share of tautologies, as a disjunction with the negation of either disjunct is true.
fn random_tautology_candidate(rng: &mut StdRng, depth: usize) -> Formula {
    let formula = random_formula(rng, depth);
    let other = random_formula(rng, depth);
    match rng.gen_bool(0.5) {
        true => Formula::disjunction(Formula::negation(formula.clone()), Formula::disjunction(other, formula)),
        false => Formula::implication(formula, other),
    }
}

mod cross_check {
    use super::*;

    #[test]
    fn random_formulas() {
        let mut rng = StdRng::seed_from_u64(73);

        for _ in 0..500 {
            let formula = random_formula(&mut rng, 4);
            let by_table = truth_table::is_tautology(&formula, 5).unwrap();
            let by_tableau = check_tautology(formula.clone()).unwrap().is_tautology();
            assert_eq!(by_table, by_tableau, "{formula}");
        }
    }

    #[test]
    fn random_candidates() {
        let mut rng = StdRng::seed_from_u64(1337);
        let mut tautologies = 0;

        for _ in 0..300 {
            let formula = random_tautology_candidate(&mut rng, 3);
            let by_table = truth_table::is_tautology(&formula, 5).unwrap();
            let by_tableau = check_tautology(formula.clone()).unwrap().is_tautology();
            assert_eq!(by_table, by_tableau, "{formula}");
            if by_tableau {
                tautologies += 1;
            }
        }

        assert!(tautologies > 0);
    }

    #[test]
    fn countermodels_falsify() {
        let mut rng = StdRng::seed_from_u64(2024);

        for _ in 0..500 {
            let formula = random_formula(&mut rng, 4);
            let report = check_tautology(formula.clone()).unwrap();

            if let Some(countermodel) = report.countermodel() {
                // Unconstrained variables may take any value.
                for default in [false, true] {
                    assert!(
                        !formula.evaluate(|variable| countermodel.value_or(variable, default)),
                        "{formula} under {countermodel}"
                    );
                }
            }
        }
    }
}
