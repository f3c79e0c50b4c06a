/// Receives solver events and decides how the iteration should proceed.
///
/// Observers let callers watch or steer a solver without changing its
/// signature: logging each iteration, collecting a trace, or stopping once an
/// estimate is good enough for the caller's purpose.
///
/// `observe` returns `Some(action)` to request a solver-specific action, or
/// `None` to let the solver continue unchanged.
///
/// Closures of type `FnMut(&E) -> Option<A>` implement `Observer`, and `()`
/// is a no-op observer that always returns `None`.
pub trait Observer<E, A> {
    /// Observes a solver event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Stop {
        Now,
    }

    fn run<Obs: Observer<usize, Stop>>(mut observer: Obs, events: usize) -> Option<usize> {
        (1..=events).find(|event| observer.observe(event) == Some(Stop::Now))
    }

    #[test]
    fn unit_observer_never_acts() {
        assert_eq!(run((), 10), None);
    }

    #[test]
    fn closure_observer_can_stop() {
        let mut seen = Vec::new();
        let stopped = run(
            |event: &usize| {
                seen.push(*event);
                (*event == 3).then_some(Stop::Now)
            },
            10,
        );
        assert_eq!(stopped, Some(3));
        assert_eq!(seen, vec![1, 2, 3]);
    }
}
