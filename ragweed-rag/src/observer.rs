/// The discrete checkpoints a query passes through, in order. Advanced
/// exactly once each, never rolled back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueryPhase {
    InitializingStore,
    RetrievingContext,
    Generating,
    Done,
}

impl QueryPhase {
    pub fn label(&self) -> &'static str {
        match self {
            Self::InitializingStore => "initializing store",
            Self::RetrievingContext => "retrieving context",
            Self::Generating => "generating",
            Self::Done => "done",
        }
    }
}

/// Cosmetic progress side channel (a spinner, a log line). Has no bearing
/// on the query result.
pub trait PhaseObserver: Send + Sync {
    fn on_phase(&self, phase: QueryPhase);
}
