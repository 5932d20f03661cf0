use super::distance::Weight;

/// Invariant trait for graph algorithm checks
pub trait Invariant<T> {
    fn check(&self, value: &T) -> bool;
}

/// Non-negative invariant for weights (reduced costs after reweighting)
pub struct NonNegative;

impl Invariant<Weight> for NonNegative {
    fn check(&self, value: &Weight) -> bool {
        *value >= 0
    }
}

/// Number of values that break `invariant`.
pub fn violations<T, I>(invariant: &I, values: impl IntoIterator<Item = T>) -> usize
where
    I: Invariant<T>,
{
    values.into_iter().filter(|v| !invariant.check(v)).count()
}
