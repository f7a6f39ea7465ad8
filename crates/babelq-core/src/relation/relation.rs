use crate::{
    conditions::ConditionMap,
    locale::Locale,
    predicate::{Predicate, normalize},
    relation::intercept::{FilterForm, FilterInterceptor, Next},
    value::Value,
};

///
/// Relation
///
/// Host query-relation surface: accumulates a filter predicate from
/// map-shaped filter calls. The two entry points (`where_`, `not_`) run
/// the registered interceptor chain before the ordinary path, so filters
/// touching translated attributes are rewritten transparently while
/// ordinary filtering is left untouched.
///
/// Purely declarative: no schema access or execution happens here. Field
/// names are accepted as strings; their validity is the host's concern.
///

pub struct Relation {
    locale: Locale,
    filter: Option<Predicate>,
    interceptors: Vec<Box<dyn FilterInterceptor>>,
}

impl Relation {
    /// Create a relation bound to the locale captured at the call
    /// boundary. The locale is held fixed for every filter call on this
    /// relation.
    #[must_use]
    pub const fn new(locale: Locale) -> Self {
        Self {
            locale,
            filter: None,
            interceptors: Vec::new(),
        }
    }

    #[must_use]
    pub const fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Append an interceptor to the filter extension point.
    #[must_use]
    pub fn intercept(mut self, interceptor: impl FilterInterceptor + 'static) -> Self {
        self.interceptors.push(Box::new(interceptor));
        self
    }

    /// Positive filter entry point.
    ///
    /// The condition map is consumed; interceptors may remove entries
    /// before the remainder reaches the ordinary path.
    #[must_use]
    pub fn where_(mut self, mut conditions: ConditionMap) -> Self {
        let built = Next::new(&self.interceptors, FilterForm::Where, &self.locale)
            .proceed(&mut conditions);
        self.merge(built)
    }

    /// Negative filter entry point.
    #[must_use]
    pub fn not_(mut self, mut conditions: ConditionMap) -> Self {
        let built =
            Next::new(&self.interceptors, FilterForm::Not, &self.locale).proceed(&mut conditions);
        self.merge(built)
    }

    /// Add a predicate, AND-ing with any existing filter.
    #[must_use]
    pub fn filter(mut self, predicate: Predicate) -> Self {
        self.filter = match self.filter.take() {
            Some(existing) => Some(Predicate::And(vec![existing, predicate])),
            None => Some(predicate),
        };
        self
    }

    fn merge(self, built: Option<Predicate>) -> Self {
        match built {
            Some(predicate) => self.filter(predicate),
            None => self,
        }
    }

    /// Finalize the relation into an immutable filter specification.
    #[must_use]
    pub fn build(self) -> FilterSpec {
        FilterSpec {
            locale: self.locale,
            predicate: self.filter,
        }
    }
}

///
/// FilterSpec
///
/// Immutable handoff produced by `Relation::build`: the accumulated filter
/// plus the locale it was built under.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FilterSpec {
    pub locale: Locale,
    pub predicate: Option<Predicate>,
}

impl FilterSpec {
    /// Canonicalized copy of the accumulated predicate. The raw tree keeps
    /// the exact shape filter construction produced; this is the opt-in
    /// for callers that want stable trees.
    #[must_use]
    pub fn normalized(&self) -> Option<Predicate> {
        self.predicate.as_ref().map(normalize)
    }
}

/// Ordinary filter path, the terminal of the interceptor chain: equality
/// semantics over the remaining map entries, folded with AND. The negative
/// form negates the group as a whole.
pub(crate) fn ordinary(form: FilterForm, conditions: &ConditionMap) -> Option<Predicate> {
    let clauses: Vec<Predicate> = conditions
        .iter()
        .map(|(field, value)| match value {
            Value::None => Predicate::is_null(field.clone()),
            Value::List(items) => Predicate::in_(field.clone(), items.clone()),
            value => Predicate::eq(field.clone(), value.clone()),
        })
        .collect();

    let filter = match clauses.len() {
        0 => None,
        1 => clauses.into_iter().next(),
        _ => Some(Predicate::And(clauses)),
    };

    match form {
        FilterForm::Where => filter,
        FilterForm::Not => filter.map(Predicate::not),
    }
}
