//! Shared async-fetch state machine with staleness protection.
//!
//! Both view controllers are the same machine specialized over different
//! result shapes: `Idle → Loading → {Success, Empty, NotFound, Error}`, with
//! `Loading` re-enterable from every terminal state. [`FetchController`]
//! pairs the state with a monotonically increasing generation counter; every
//! outgoing request is tagged with the generation current at submit time,
//! and a response is applied only when its tag still matches. A superseded
//! request therefore resolves into nothing instead of clobbering fresher
//! state.

/// Marker attached to each in-flight fetch, used to discard superseded
/// responses on arrival.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generation(pub u64);

/// The finite set of states a fetch-backed view can be in.
///
/// `Empty` is only produced by the search view (a successful response with
/// zero results); `NotFound` only by the detail view (the service explicitly
/// reported the resource absent). No state is truly terminal: the machine
/// lives for the view's mounted lifetime and re-enters `Loading` on every
/// resubmit or refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchState<T> {
    /// Nothing requested yet.
    Idle,
    /// Exactly one request is in flight.
    Loading,
    /// The fetch succeeded with data.
    Success(T),
    /// The fetch succeeded but matched nothing (search only).
    Empty,
    /// The service reported the resource absent (detail only).
    NotFound,
    /// Transport or server failure, carrying a generic user-facing message.
    Error(String),
}

impl<T> FetchState<T> {
    /// Returns `true` while a request is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// One view's fetch lifecycle: current state plus the generation counter.
#[derive(Debug, Clone)]
pub struct FetchController<T> {
    state: FetchState<T>,
    generation: u64,
}

impl<T> Default for FetchController<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FetchController<T> {
    /// Creates a controller in `Idle` with no requests issued.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: FetchState::Idle,
            generation: 0,
        }
    }

    /// Returns the current view state.
    #[must_use]
    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    /// Starts a new fetch: bumps the generation, enters `Loading` and
    /// returns the token to tag the outgoing request with.
    ///
    /// Callable from any state; a previous in-flight request is superseded
    /// and its eventual response will no longer match.
    pub fn begin(&mut self) -> Generation {
        self.generation += 1;
        self.state = FetchState::Loading;
        Generation(self.generation)
    }

    /// Applies a response if it belongs to the current generation.
    ///
    /// Returns `false` (and leaves the state untouched) when the response is
    /// stale, i.e. a newer fetch was started after this one was issued.
    pub fn resolve(&mut self, generation: Generation, state: FetchState<T>) -> bool {
        if generation.0 != self.generation {
            tracing::debug!(
                response_generation = generation.0,
                current_generation = self.generation,
                "discarding stale fetch response"
            );
            return false;
        }
        self.state = state;
        true
    }

    /// Returns to `Idle` and invalidates any in-flight request.
    ///
    /// Used when the view unmounts (navigation away): the generation bump
    /// guarantees a late response from the abandoned fetch is suppressed.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.state = FetchState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_enters_loading_with_fresh_generation() {
        let mut controller: FetchController<Vec<u32>> = FetchController::new();
        assert!(matches!(controller.state(), FetchState::Idle));

        let first = controller.begin();
        assert!(controller.state().is_loading());

        let second = controller.begin();
        assert_ne!(first, second, "each submit must get its own token");
    }

    #[test]
    fn resolve_applies_matching_generation() {
        let mut controller: FetchController<Vec<u32>> = FetchController::new();
        let generation = controller.begin();

        assert!(controller.resolve(generation, FetchState::Success(vec![1, 2])));
        assert_eq!(controller.state(), &FetchState::Success(vec![1, 2]));
    }

    #[test]
    fn stale_response_never_overwrites_newer_result() {
        let mut controller: FetchController<&'static str> = FetchController::new();
        let first = controller.begin();
        let second = controller.begin();

        // The newer fetch resolves first; the older one arrives late.
        assert!(controller.resolve(second, FetchState::Success("fresh")));
        assert!(!controller.resolve(first, FetchState::Success("stale")));
        assert_eq!(controller.state(), &FetchState::Success("fresh"));
    }

    #[test]
    fn loading_is_reenterable_from_terminal_states() {
        let mut controller: FetchController<()> = FetchController::new();
        let generation = controller.begin();
        controller.resolve(generation, FetchState::Error("boom".to_string()));

        controller.begin();
        assert!(controller.state().is_loading());
    }

    #[test]
    fn reset_returns_to_idle_and_invalidates_in_flight_request() {
        let mut controller: FetchController<()> = FetchController::new();
        let pending = controller.begin();
        controller.reset();

        assert!(matches!(controller.state(), FetchState::Idle));
        assert!(
            !controller.resolve(pending, FetchState::Success(())),
            "a response from before the reset must be discarded"
        );
    }
}
