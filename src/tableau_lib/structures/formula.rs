//! Formulas of propositional logic.
//!
//! A formula is a tree of [Formula] nodes, each of which pairs a [Kind] with a sign.
//! The sign of a node records whether the node is negated in the context of a derivation.
//!
//! Formulas read from text are unsigned throughout, and negation is represented by [Kind::Negation] wrappers.
//! Before a tableau is grown the wrappers are [folded](crate::procedures::normalize) into signs, and from then on negation is only ever carried by the sign.
//!
//! ```rust
//! # use tableau_lib::structures::formula::Formula;
//! let p = Formula::literal("p");
//! let q = Formula::literal("q");
//! let formula = Formula::conjunction(p, q).negated();
//!
//! assert_eq!(formula.to_string(), "~(p and q)");
//! assert_eq!(formula.connective_count(), 1);
//! ```
//!
//! Traversals (rendering, evaluation, and so on) use an explicit stack, so deeply nested formulas do not exhaust the call stack.

use std::collections::BTreeSet;

/// The name of a propositional variable, e.g. `p` or `q12`.
pub type Variable = String;

/// The binary connectives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
pub enum Connective {
    Conjunction,
    Disjunction,
    Implication,
    Equivalence,
}

impl Connective {
    /// The token used for the connective when reading or rendering a formula.
    pub fn token(&self) -> &'static str {
        match self {
            Self::Conjunction => "and",
            Self::Disjunction => "or",
            Self::Implication => "=>",
            Self::Equivalence => "<=>",
        }
    }

    /// The truth function of the connective.
    pub fn apply(&self, left: bool, right: bool) -> bool {
        match self {
            Self::Conjunction => left && right,
            Self::Disjunction => left || right,
            Self::Implication => !left || right,
            Self::Equivalence => left == right,
        }
    }
}

impl std::fmt::Display for Connective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Conjunction => write!(f, "Conjunction"),
            Self::Disjunction => write!(f, "Disjunction"),
            Self::Implication => write!(f, "Implication"),
            Self::Equivalence => write!(f, "Equivalence"),
        }
    }
}

/// The shape of a formula node, one case per connective.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Kind {
    Literal(Variable),
    Conjunction(Box<Formula>, Box<Formula>),
    Disjunction(Box<Formula>, Box<Formula>),
    Implication(Box<Formula>, Box<Formula>),
    Equivalence(Box<Formula>, Box<Formula>),

    /// A negation wrapper, as read from text.
    /// Never present in a formula attached to a derivation tree.
    Negation(Box<Formula>),
}

/// A formula node together with its sign.
///
/// Cloning, comparison, and dropping all walk the formula with an explicit stack.
#[derive(Debug)]
pub struct Formula {
    sign: bool,
    kind: Kind,
}

impl Formula {
    pub fn new(kind: Kind, sign: bool) -> Self {
        Formula { sign, kind }
    }

    pub fn literal(name: impl Into<Variable>) -> Self {
        Self::new(Kind::Literal(name.into()), false)
    }

    pub fn conjunction(left: Formula, right: Formula) -> Self {
        Self::binary(Connective::Conjunction, left, right)
    }

    pub fn disjunction(left: Formula, right: Formula) -> Self {
        Self::binary(Connective::Disjunction, left, right)
    }

    pub fn implication(left: Formula, right: Formula) -> Self {
        Self::binary(Connective::Implication, left, right)
    }

    pub fn equivalence(left: Formula, right: Formula) -> Self {
        Self::binary(Connective::Equivalence, left, right)
    }

    /// A negation wrapper around `inner`.
    pub fn negation(inner: Formula) -> Self {
        Self::new(Kind::Negation(Box::new(inner)), false)
    }

    pub fn binary(connective: Connective, left: Formula, right: Formula) -> Self {
        let (left, right) = (Box::new(left), Box::new(right));
        let kind = match connective {
            Connective::Conjunction => Kind::Conjunction(left, right),
            Connective::Disjunction => Kind::Disjunction(left, right),
            Connective::Implication => Kind::Implication(left, right),
            Connective::Equivalence => Kind::Equivalence(left, right),
        };
        Self::new(kind, false)
    }

    pub fn sign(&self) -> bool {
        self.sign
    }

    pub fn kind(&self) -> &Kind {
        &self.kind
    }

    pub(crate) fn kind_mut(&mut self) -> &mut Kind {
        &mut self.kind
    }

    pub(crate) fn into_parts(mut self) -> (Kind, bool) {
        let kind = std::mem::replace(&mut self.kind, Kind::Literal(Variable::new()));
        (kind, self.sign)
    }

    /// Flips the sign of the node, leaving any sub-formulas untouched.
    pub fn negate(&mut self) {
        self.sign = !self.sign
    }

    /// The node with its sign flipped.
    pub fn negated(mut self) -> Self {
        self.negate();
        self
    }

    pub fn is_literal(&self) -> bool {
        matches!(self.kind, Kind::Literal(_))
    }

    /// The variable of a literal node.
    pub fn variable(&self) -> Option<&str> {
        match &self.kind {
            Kind::Literal(name) => Some(name.as_str()),
            _ => None,
        }
    }

    /// The connective and arguments of a binary node.
    pub fn arguments(&self) -> Option<(Connective, &Formula, &Formula)> {
        match &self.kind {
            Kind::Conjunction(l, r) => Some((Connective::Conjunction, l.as_ref(), r.as_ref())),
            Kind::Disjunction(l, r) => Some((Connective::Disjunction, l.as_ref(), r.as_ref())),
            Kind::Implication(l, r) => Some((Connective::Implication, l.as_ref(), r.as_ref())),
            Kind::Equivalence(l, r) => Some((Connective::Equivalence, l.as_ref(), r.as_ref())),
            Kind::Literal(_) | Kind::Negation(_) => None,
        }
    }

    /// The immediate sub-formulas of the node, in order.
    fn children(&self) -> impl Iterator<Item = &Formula> {
        let (first, second): (Option<&Formula>, Option<&Formula>) = match &self.kind {
            Kind::Literal(_) => (None, None),
            Kind::Negation(inner) => (Some(inner.as_ref()), None),
            Kind::Conjunction(l, r)
            | Kind::Disjunction(l, r)
            | Kind::Implication(l, r)
            | Kind::Equivalence(l, r) => (Some(l.as_ref()), Some(r.as_ref())),
        };
        first.into_iter().chain(second)
    }

    /// The immediate sub-formulas of the node, in order, mutably.
    fn children_mut(&mut self) -> impl Iterator<Item = &mut Formula> {
        let (first, second): (Option<&mut Formula>, Option<&mut Formula>) = match &mut self.kind {
            Kind::Literal(_) => (None, None),
            Kind::Negation(inner) => (Some(inner.as_mut()), None),
            Kind::Conjunction(l, r)
            | Kind::Disjunction(l, r)
            | Kind::Implication(l, r)
            | Kind::Equivalence(l, r) => (Some(l.as_mut()), Some(r.as_mut())),
        };
        first.into_iter().chain(second)
    }

    /// A copy of the node, with empty literals in place of any sub-formulas.
    fn shallow_clone(&self) -> Self {
        let hole = || Box::new(Formula::literal(Variable::new()));
        let kind = match &self.kind {
            Kind::Literal(name) => Kind::Literal(name.clone()),
            Kind::Negation(_) => Kind::Negation(hole()),
            Kind::Conjunction(..) => Kind::Conjunction(hole(), hole()),
            Kind::Disjunction(..) => Kind::Disjunction(hole(), hole()),
            Kind::Implication(..) => Kind::Implication(hole(), hole()),
            Kind::Equivalence(..) => Kind::Equivalence(hole(), hole()),
        };
        Self::new(kind, self.sign)
    }

    /// The count of binary connectives in the formula.
    pub fn connective_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if node.arguments().is_some() {
                count += 1;
            }
            stack.extend(node.children());
        }
        count
    }

    /// The count of negation wrappers in the formula.
    pub fn negation_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if matches!(node.kind, Kind::Negation(_)) {
                count += 1;
            }
            stack.extend(node.children());
        }
        count
    }

    /// The variables occurring in the formula, in order.
    pub fn variables(&self) -> BTreeSet<&str> {
        let mut variables = BTreeSet::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match &node.kind {
                Kind::Literal(name) => {
                    variables.insert(name.as_str());
                }
                _ => stack.extend(node.children()),
            }
        }
        variables
    }

    /// The value of the formula, given the value of each variable.
    ///
    /// Both signs and negation wrappers are respected, so the value is the same before and after normalization.
    pub fn evaluate(&self, assignment: impl Fn(&str) -> bool) -> bool {
        enum Step<'f> {
            Enter(&'f Formula),
            Combine(&'f Formula),
        }

        let mut values: Vec<bool> = Vec::new();
        let mut steps = vec![Step::Enter(self)];

        while let Some(step) = steps.pop() {
            match step {
                Step::Enter(node) => {
                    steps.push(Step::Combine(node));
                    // Pushed in reverse so the left argument is valued first.
                    let children = node.children().collect::<Vec<_>>();
                    steps.extend(children.into_iter().rev().map(Step::Enter));
                }

                Step::Combine(node) => {
                    let value = match &node.kind {
                        Kind::Literal(name) => assignment(name),
                        Kind::Negation(_) => !values.pop().unwrap_or_default(),
                        _ => {
                            let right = values.pop().unwrap_or_default();
                            let left = values.pop().unwrap_or_default();
                            node.arguments()
                                .is_some_and(|(connective, _, _)| connective.apply(left, right))
                        }
                    };
                    values.push(value ^ node.sign);
                }
            }
        }

        values.pop().unwrap_or_default()
    }
}

impl Clone for Formula {
    fn clone(&self) -> Self {
        let mut root = self.shallow_clone();

        let mut stack: Vec<(&Formula, &mut Formula)> = vec![(self, &mut root)];
        while let Some((source, target)) = stack.pop() {
            for (from, to) in source.children().zip(target.children_mut()) {
                *to = from.shallow_clone();
                stack.push((from, to));
            }
        }

        root
    }
}

impl PartialEq for Formula {
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];
        while let Some((a, b)) = stack.pop() {
            if a.sign != b.sign {
                return false;
            }
            let same_node = match (&a.kind, &b.kind) {
                (Kind::Literal(x), Kind::Literal(y)) => x == y,
                (Kind::Negation(_), Kind::Negation(_)) => true,
                _ => match (a.arguments(), b.arguments()) {
                    (Some((x, _, _)), Some((y, _, _))) => x == y,
                    _ => false,
                },
            };
            if !same_node {
                return false;
            }
            stack.extend(a.children().zip(b.children()));
        }
        true
    }
}

impl Eq for Formula {}

impl Drop for Formula {
    fn drop(&mut self) {
        // Sub-formulas are detached before being dropped, so each drop below has nothing left to recurse into.
        let mut detached: Vec<Formula> = Vec::new();
        let mut kind = std::mem::replace(&mut self.kind, Kind::Literal(Variable::new()));

        loop {
            match kind {
                Kind::Literal(_) => {}
                Kind::Negation(inner) => detached.push(*inner),
                Kind::Conjunction(l, r)
                | Kind::Disjunction(l, r)
                | Kind::Implication(l, r)
                | Kind::Equivalence(l, r) => {
                    detached.push(*l);
                    detached.push(*r);
                }
            }

            match detached.pop() {
                Some(mut next) => {
                    kind = std::mem::replace(&mut next.kind, Kind::Literal(Variable::new()));
                }
                None => break,
            }
        }
    }
}

/// The canonical rendering of a formula.
///
/// A literal renders as its name, a binary node as `(left OP right)`, and a negation wrapper as `~inner`.
/// Any node with a set sign is prefixed with `~`.
impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        enum Piece<'f> {
            Node(&'f Formula),
            Connective(Connective),
            Close,
        }

        let mut pieces = vec![Piece::Node(self)];

        while let Some(piece) = pieces.pop() {
            match piece {
                Piece::Connective(connective) => write!(f, " {} ", connective.token())?,

                Piece::Close => f.write_str(")")?,

                Piece::Node(node) => {
                    if node.sign {
                        f.write_str("~")?;
                    }
                    match &node.kind {
                        Kind::Literal(name) => f.write_str(name)?,

                        Kind::Negation(inner) => {
                            f.write_str("~")?;
                            pieces.push(Piece::Node(inner.as_ref()));
                        }

                        _ => {
                            if let Some((connective, left, right)) = node.arguments() {
                                f.write_str("(")?;
                                pieces.push(Piece::Close);
                                pieces.push(Piece::Node(right));
                                pieces.push(Piece::Connective(connective));
                                pieces.push(Piece::Node(left));
                            }
                        }
                    }
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p() -> Formula {
        Formula::literal("p")
    }

    fn q() -> Formula {
        Formula::literal("q")
    }

    #[test]
    fn render_literals() {
        assert_eq!(p().to_string(), "p");
        assert_eq!(p().negated().to_string(), "~p");
        assert_eq!(p().negated().negated().to_string(), "p");
    }

    #[test]
    fn render_binary() {
        let formula = Formula::implication(Formula::conjunction(p(), q().negated()), p());
        assert_eq!(formula.to_string(), "((p and ~q) => p)");
        assert_eq!(formula.negated().to_string(), "~((p and ~q) => p)");

        let formula = Formula::equivalence(p(), Formula::disjunction(p(), q()));
        assert_eq!(formula.to_string(), "(p <=> (p or q))");
    }

    #[test]
    fn render_wrappers() {
        let formula = Formula::negation(Formula::negation(p()));
        assert_eq!(formula.to_string(), "~~p");
    }

    #[test]
    fn counts() {
        let formula = Formula::negation(Formula::implication(
            Formula::conjunction(p(), q()),
            Formula::negation(q()),
        ));
        assert_eq!(formula.connective_count(), 2);
        assert_eq!(formula.negation_count(), 2);
        assert_eq!(formula.variables().into_iter().collect::<Vec<_>>(), vec!["p", "q"]);
    }

    #[test]
    fn evaluation() {
        let formula = Formula::implication(p(), q());
        assert!(formula.evaluate(|_| false));
        assert!(!formula.evaluate(|v| v == "p"));

        let formula = Formula::negation(Formula::conjunction(p(), q()));
        assert!(!formula.evaluate(|_| true));
        assert!(formula.clone().negated().evaluate(|_| true));
    }

    #[test]
    fn deep_nesting() {
        let mut formula = p();
        for _ in 0..100_000 {
            formula = Formula::conjunction(formula, q());
        }
        assert_eq!(formula.connective_count(), 100_000);
        assert!(formula.evaluate(|_| true));
        assert!(formula.to_string().starts_with("(((("));

        let copy = formula.clone();
        assert!(copy == formula);
        assert!(copy.negated() != formula);
    }

    #[test]
    fn deep_negations() {
        let mut formula = p();
        for _ in 0..200_000 {
            formula = Formula::negation(formula);
        }
        assert_eq!(formula.negation_count(), 200_000);
        assert!(formula.evaluate(|_| true));

        let copy = formula.clone();
        assert!(copy == formula);
        drop(copy);
        drop(formula);
    }

    #[test]
    fn clones_are_equal() {
        let formula = Formula::equivalence(
            Formula::negation(Formula::conjunction(p(), q().negated())),
            Formula::implication(q(), p()).negated(),
        );
        let copy = formula.clone();
        assert!(copy == formula);
        assert_eq!(copy.to_string(), formula.to_string());

        let different = Formula::equivalence(
            Formula::negation(Formula::conjunction(p(), q())),
            Formula::implication(q(), p()).negated(),
        );
        assert!(different != formula);
        assert!(Formula::conjunction(p(), q()) != Formula::disjunction(p(), q()));
    }
}
