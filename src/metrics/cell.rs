use std::cell::Cell;

/// Counter that can be bumped through a shared reference.
///
/// Used for reads such as `peek_lfu` and `frequency` that only take `&self`.
/// Makes the owning cache `!Sync`, which matches its single-threaded contract.
#[repr(transparent)]
#[derive(Debug, Default)]
pub struct MetricsCell(Cell<u64>);

impl MetricsCell {
    #[inline]
    pub fn new() -> Self {
        Self(Cell::new(0))
    }

    #[inline]
    pub fn get(&self) -> u64 {
        self.0.get()
    }

    #[inline]
    pub fn incr(&self) {
        self.0.set(self.0.get().saturating_add(1));
    }
}
