use crate::predicate::ast::Predicate;

///
/// Normalize a predicate into a canonical form.
///
/// Guarantees:
/// - Logical equivalence is preserved
/// - Nested AND / OR nodes are flattened
/// - Neutral elements are removed (True / False)
/// - Double negation is eliminated
/// - Singleton AND / OR chains collapse to their only child
///
/// Built filters stay raw by default; this pass is an explicit opt-in for
/// callers that want stable trees for caching or equality checks.
///
#[must_use]
pub fn normalize(predicate: &Predicate) -> Predicate {
    match predicate {
        Predicate::True => Predicate::True,
        Predicate::False => Predicate::False,

        Predicate::And(children) => normalize_and(children),
        Predicate::Or(children) => normalize_or(children),
        Predicate::Not(inner) => normalize_not(inner),

        Predicate::Compare(cmp) => Predicate::Compare(cmp.clone()),

        Predicate::IsNull { field } => Predicate::IsNull {
            field: field.clone(),
        },
        Predicate::IsMissing { field } => Predicate::IsMissing {
            field: field.clone(),
        },
    }
}

///
/// Normalize a NOT expression.
///
/// Eliminates double negation:
///     NOT (NOT x)  →  x
///
fn normalize_not(inner: &Predicate) -> Predicate {
    let normalized = normalize(inner);

    match normalized {
        Predicate::Not(double) => *double,
        Predicate::True => Predicate::False,
        Predicate::False => Predicate::True,
        other => Predicate::Not(Box::new(other)),
    }
}

///
/// Normalize an AND expression.
///
/// Rules:
/// - AND(True, x)        → x
/// - AND(False, x)       → False
/// - AND(AND(a, b), c)   → AND(a, b, c)
/// - AND()               → True
/// - AND(x)              → x
///
fn normalize_and(children: &[Predicate]) -> Predicate {
    let mut out = Vec::new();

    for child in children {
        match normalize(child) {
            Predicate::True => {}
            Predicate::False => return Predicate::False,
            Predicate::And(grandchildren) => out.extend(grandchildren),
            other => out.push(other),
        }
    }

    match out.len() {
        0 => Predicate::True,
        1 => out.swap_remove(0),
        _ => Predicate::And(out),
    }
}

///
/// Normalize an OR expression.
///
/// Rules:
/// - OR(False, x)      → x
/// - OR(True, x)       → True
/// - OR(OR(a, b), c)   → OR(a, b, c)
/// - OR()              → False
/// - OR(x)             → x
///
fn normalize_or(children: &[Predicate]) -> Predicate {
    let mut out = Vec::new();

    for child in children {
        match normalize(child) {
            Predicate::False => {}
            Predicate::True => return Predicate::True,
            Predicate::Or(grandchildren) => out.extend(grandchildren),
            other => out.push(other),
        }
    }

    match out.len() {
        0 => Predicate::False,
        1 => out.swap_remove(0),
        _ => Predicate::Or(out),
    }
}
