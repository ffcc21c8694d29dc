use synex_types::MoId;

/// Default first id issued by a fresh allocator.
///
/// Runs start at 1000 so generated ids look like ids from a repository
/// that has been in service for a while.
pub const DEFAULT_ID_SEED: u64 = 1000;

/// Issues globally unique, strictly increasing object ids.
///
/// One allocator exists per run, owned by the orchestrator and passed by
/// mutable reference to every component that mints ids. There is no reset
/// and no concurrency; overflow is out of scope for realistic run sizes.
#[derive(Clone, Debug)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    /// Create an allocator whose first issued id is `seed`.
    pub fn new(seed: u64) -> Self {
        Self { next: seed }
    }

    /// Issue the next id.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> MoId {
        let id = MoId::new(self.next);
        self.next += 1;
        id
    }

    /// The next id that would be issued, without consuming it.
    /// This is the value recorded in the final summary artifact.
    pub fn peek(&self) -> MoId {
        MoId::new(self.next)
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new(DEFAULT_ID_SEED)
    }
}
