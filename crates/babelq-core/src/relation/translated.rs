use crate::{
    conditions::ConditionMap,
    locale::Locale,
    obs::{self, FilterEvent},
    predicate::Predicate,
    relation::intercept::{FilterForm, FilterInterceptor, Next},
    traits::TranslatedAttributes,
    translate::{TranslationBackend, build_not, build_where},
};

///
/// TranslatedFilter
///
/// The translated-attribute interceptor: detects translated keys in an
/// incoming condition map, builds the locale predicate through the
/// backend, and merges it with whatever the ordinary path produces for
/// the remaining keys. Calls touching no translated attribute pass
/// through untouched.
///

pub struct TranslatedFilter<B, R> {
    backend: B,
    resolver: R,
}

impl<B, R> TranslatedFilter<B, R>
where
    B: TranslationBackend<Node = Predicate>,
    R: TranslatedAttributes,
{
    #[must_use]
    pub const fn new(backend: B, resolver: R) -> Self {
        Self { backend, resolver }
    }
}

impl<B, R> FilterInterceptor for TranslatedFilter<B, R>
where
    B: TranslationBackend<Node = Predicate>,
    R: TranslatedAttributes,
{
    fn where_filter(
        &self,
        conditions: &mut ConditionMap,
        locale: &Locale,
        next: Next<'_>,
    ) -> Option<Predicate> {
        let Some(keys) = conditions.extract_attributes(&self.resolver) else {
            obs::record(FilterEvent::Delegated {
                form: FilterForm::Where,
                keys: conditions.len(),
            });
            return next.proceed(conditions);
        };

        let translated = build_where(conditions, &keys, locale, &self.backend);
        obs::record(FilterEvent::Intercepted {
            form: FilterForm::Where,
            translated: keys.len(),
            remaining: conditions.len(),
        });

        if conditions.is_empty() {
            // Every key was translated: the built predicate is the sole
            // filter, the ordinary path is not consulted.
            translated
        } else {
            combine(next.proceed(conditions), translated)
        }
    }

    fn not_filter(
        &self,
        conditions: &mut ConditionMap,
        locale: &Locale,
        next: Next<'_>,
    ) -> Option<Predicate> {
        let Some(keys) = conditions.extract_attributes(&self.resolver) else {
            obs::record(FilterEvent::Delegated {
                form: FilterForm::Not,
                keys: conditions.len(),
            });
            return next.proceed(conditions);
        };

        let translated = build_not(conditions, &keys, locale, &self.backend);
        obs::record(FilterEvent::Intercepted {
            form: FilterForm::Not,
            translated: keys.len(),
            remaining: conditions.len(),
        });

        // The ordinary negative path still negates the remaining keys as a
        // group; the translated predicate carries its own negation and is
        // never re-negated here.
        combine(next.proceed(conditions), translated)
    }
}

/// AND the ordinary-path filter (first) with the translated predicate
/// (second), tolerating either side being absent.
fn combine(ordinary: Option<Predicate>, translated: Option<Predicate>) -> Option<Predicate> {
    match (ordinary, translated) {
        (Some(ordinary), Some(translated)) => Some(Predicate::And(vec![ordinary, translated])),
        (Some(node), None) | (None, Some(node)) => Some(node),
        (None, None) => None,
    }
}
