//! Filter criteria for [`Registry::find`](super::Registry::find).
//!
//! Each criterion constrains one dimension of a model record. Within a dimension,
//! any of the accepted values matches; across dimensions, every constrained
//! dimension must match. A dimension without accepted values is unconstrained.

use crate::models::{CostTier, ModelRecord, QualityTier, SpeedTier};

/// The set of values accepted on one dimension.
///
/// Single values and lists convert into an `Accept` so callers can write either
/// `.cost(CostTier::Free)` or `.cost([CostTier::Free, CostTier::Cheap])`.
#[derive(Debug, Clone, PartialEq)]
pub struct Accept<T>(Vec<T>);

impl<T> Default for Accept<T> {
    fn default() -> Accept<T> {
        Accept(Vec::new())
    }
}

impl<T: PartialEq> Accept<T> {
    pub fn values(&self) -> &[T] {
        &self.0
    }

    pub fn is_unconstrained(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if `value` is accepted. Unconstrained sets accept everything.
    pub fn admits(&self, value: &T) -> bool {
        self.is_unconstrained() || self.0.contains(value)
    }
}

macro_rules! accept_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Accept<$ty> {
                fn from(value: $ty) -> Self {
                    Accept(vec![value])
                }
            }

            impl From<Vec<$ty>> for Accept<$ty> {
                fn from(values: Vec<$ty>) -> Self {
                    Accept(values)
                }
            }

            impl From<&[$ty]> for Accept<$ty> {
                fn from(values: &[$ty]) -> Self {
                    Accept(values.to_vec())
                }
            }

            impl<const N: usize> From<[$ty; N]> for Accept<$ty> {
                fn from(values: [$ty; N]) -> Self {
                    Accept(values.to_vec())
                }
            }
        )*
    };
}

accept_from!(CostTier, SpeedTier, QualityTier);

impl From<&str> for Accept<String> {
    fn from(value: &str) -> Self {
        Accept(vec![value.to_string()])
    }
}

impl From<String> for Accept<String> {
    fn from(value: String) -> Self {
        Accept(vec![value])
    }
}

impl From<Vec<String>> for Accept<String> {
    fn from(values: Vec<String>) -> Self {
        Accept(values)
    }
}

impl From<Vec<&str>> for Accept<String> {
    fn from(values: Vec<&str>) -> Self {
        Accept(values.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for Accept<String> {
    fn from(values: &[&str]) -> Self {
        Accept(values.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Accept<String> {
    fn from(values: [&str; N]) -> Self {
        Accept(values.iter().map(|s| s.to_string()).collect())
    }
}

/// Constraints on the models returned by a search.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Criteria {
    cost: Accept<CostTier>,
    speed: Accept<SpeedTier>,
    quality: Accept<QualityTier>,
    best_for: Accept<String>,
    free_tier: Option<bool>,
    engine: Accept<String>,
}

impl Criteria {
    /// Criteria which match every model.
    pub fn new() -> Criteria {
        Criteria::default()
    }

    pub fn cost(mut self, cost: impl Into<Accept<CostTier>>) -> Criteria {
        self.cost = cost.into();
        self
    }

    pub fn speed(mut self, speed: impl Into<Accept<SpeedTier>>) -> Criteria {
        self.speed = speed.into();
        self
    }

    pub fn quality(mut self, quality: impl Into<Accept<QualityTier>>) -> Criteria {
        self.quality = quality.into();
        self
    }

    /// Matches models tagged with any of the given use cases.
    pub fn best_for(mut self, use_cases: impl Into<Accept<String>>) -> Criteria {
        self.best_for = use_cases.into();
        self
    }

    pub fn free_tier(mut self, free_tier: bool) -> Criteria {
        self.free_tier = Some(free_tier);
        self
    }

    pub fn engine(mut self, engine: impl Into<Accept<String>>) -> Criteria {
        self.engine = engine.into();
        self
    }

    /// Rewrites the accepted engines through `resolve` (e.g., mapping aliases to
    /// canonical identifiers).
    pub(super) fn with_engines_resolved<F>(&self, resolve: F) -> Criteria
    where
        F: Fn(&str) -> String,
    {
        let engine = self.engine.values().iter().map(|e| resolve(e.as_str())).collect();

        Criteria {
            engine: Accept(engine),
            ..self.clone()
        }
    }

    /// Returns true if `model`, served by `engine`, satisfies every constraint.
    pub fn matches(&self, model: &ModelRecord, engine: &str) -> bool {
        if !self.cost.admits(&model.cost) {
            return false;
        }

        if !self.speed.admits(&model.speed) {
            return false;
        }

        if !self.quality.admits(&model.quality) {
            return false;
        }

        if let Some(free_tier) = self.free_tier {
            if model.free_tier != free_tier {
                return false;
            }
        }

        if !self.engine.is_unconstrained()
            && !self.engine.values().iter().any(|e| e == engine)
        {
            return false;
        }

        self.best_for.is_unconstrained()
            || self.best_for.values().iter().any(|tag| model.is_best_for(tag))
    }
}
