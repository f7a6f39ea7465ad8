use crate::{conditions::ConditionMap, locale::Locale, predicate::Predicate};

///
/// FilterForm
///
/// Which of the relation's two filter entry points a call came through.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FilterForm {
    Where,
    Not,
}

///
/// FilterInterceptor
///
/// Extension point wrapping the relation's filter-building entry points.
/// Interceptors run in registration order; each receives the working map
/// and a handle that proceeds through the rest of the chain, terminating
/// in the relation's ordinary path.
///

pub trait FilterInterceptor {
    /// Intercept a positive ("where") filter call.
    fn where_filter(
        &self,
        conditions: &mut ConditionMap,
        locale: &Locale,
        next: Next<'_>,
    ) -> Option<Predicate>;

    /// Intercept a negative ("not") filter call.
    fn not_filter(
        &self,
        conditions: &mut ConditionMap,
        locale: &Locale,
        next: Next<'_>,
    ) -> Option<Predicate>;
}

///
/// Next
///
/// Proceed-to-next capability handed to each interceptor. Consuming it
/// runs the remaining chain; dropping it without proceeding skips the
/// remaining interceptors and the ordinary path entirely.
///

pub struct Next<'a> {
    chain: &'a [Box<dyn FilterInterceptor>],
    form: FilterForm,
    locale: &'a Locale,
}

impl<'a> Next<'a> {
    pub(crate) const fn new(
        chain: &'a [Box<dyn FilterInterceptor>],
        form: FilterForm,
        locale: &'a Locale,
    ) -> Self {
        Self {
            chain,
            form,
            locale,
        }
    }

    /// Run the remaining interceptors, then the ordinary filter path.
    pub fn proceed(self, conditions: &mut ConditionMap) -> Option<Predicate> {
        match self.chain.split_first() {
            Some((head, rest)) => {
                let next = Self::new(rest, self.form, self.locale);
                match self.form {
                    FilterForm::Where => head.where_filter(conditions, self.locale, next),
                    FilterForm::Not => head.not_filter(conditions, self.locale, next),
                }
            }
            None => super::relation::ordinary(self.form, conditions),
        }
    }
}
