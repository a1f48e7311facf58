use std::error::Error;

/// A closed set of error kinds, declared as an enum with one single-field variant per kind.
///
/// Each kind occupies a distinct slot, numbered from zero in declaration order. Slots are assigned
/// per type rather than per value, so two kinds with structurally equal payloads are never confused
/// with one another.
///
/// Implement this with [`error_set!`](crate::error_set), or by hand alongside one [`Member`] impl
/// per kind.
pub trait ErrorSet: Error + Sized {
    /// The variant names of the set, indexed by slot.
    const KINDS: &'static [&'static str];

    /// The slot of the kind currently held by self.
    fn slot(&self) -> usize;

    /// The variant name of the kind currently held by self.
    fn kind_name(&self) -> &'static str {
        Self::KINDS[self.slot()]
    }
}

/// Declares that the error kind `K` is one of the kinds of an [`ErrorSet`].
///
/// A set can only contain each kind once, because a second `Member<K>` impl for the same set would
/// conflict.
pub trait Member<K>: ErrorSet + From<K> {
    /// The slot assigned to `K`.
    const SLOT: usize;

    /// Returns a reference to the payload if self holds `K`.
    fn get(&self) -> Option<&K>;

    /// Returns the payload if self holds `K`, or self unchanged otherwise.
    fn take(self) -> Result<K, Self>;

    /// Whether self currently holds `K`.
    fn holds(&self) -> bool {
        self.slot() == <Self as Member<K>>::SLOT
    }
}
