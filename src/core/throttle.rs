//! Rate limiting for high-frequency event handlers.
//!
//! A throttled handler runs immediately on the first call, then drops every
//! call until the cooldown has elapsed; the next call passes through and
//! starts a new cooldown.

use std::cell::Cell;

/// Millisecond time source.
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Cooldown gate shared by throttled handlers.
pub struct Throttle<C> {
    clock: C,
    cooldown_ms: f64,
    last_run: Cell<Option<f64>>,
}

impl<C: Clock> Throttle<C> {
    pub fn new(clock: C, cooldown_ms: f64) -> Self {
        Self {
            clock,
            cooldown_ms,
            last_run: Cell::new(None),
        }
    }

    /// Returns `true` and restarts the cooldown if a call may run now.
    pub fn try_acquire(&self) -> bool {
        let now = self.clock.now_ms();
        let ready = match self.last_run.get() {
            None => true,
            Some(last) => now - last >= self.cooldown_ms,
        };
        if ready {
            self.last_run.set(Some(now));
        }
        ready
    }
}

/// A handler wrapped in a [`Throttle`].
pub struct Throttled<C, F> {
    gate: Throttle<C>,
    handler: F,
}

impl<C: Clock, F> Throttled<C, F> {
    /// Invoke the handler unless the cooldown is still running.
    pub fn call<T>(&self, arg: T)
    where
        F: Fn(T),
    {
        if self.gate.try_acquire() {
            (self.handler)(arg);
        }
    }
}

/// Wrap `handler` so it runs at most once per `cooldown_ms`.
pub fn throttle<C: Clock, F>(clock: C, cooldown_ms: f64, handler: F) -> Throttled<C, F> {
    Throttled {
        gate: Throttle::new(clock, cooldown_ms),
        handler,
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;

    /// Manually advanced clock.
    #[derive(Clone, Default)]
    struct ManualClock(Rc<Cell<f64>>);

    impl ManualClock {
        fn advance(&self, ms: f64) {
            self.0.set(self.0.get() + ms);
        }
    }

    impl Clock for ManualClock {
        fn now_ms(&self) -> f64 {
            self.0.get()
        }
    }

    #[test]
    fn test_first_call_runs_immediately() {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let throttled = throttle(ManualClock::default(), 1000.0, move |_: ()| {
            counter.set(counter.get() + 1)
        });

        throttled.call(());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_burst_within_cooldown_runs_once() {
        let clock = ManualClock::default();
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let throttled = throttle(clock.clone(), 100.0, move |_: ()| {
            counter.set(counter.get() + 1)
        });

        for _ in 0..5 {
            throttled.call(());
            clock.advance(10.0);
        }
        assert_eq!(calls.get(), 1);

        clock.advance(100.0);
        throttled.call(());
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_cooldown_restarts_on_pass_through() {
        let clock = ManualClock::default();
        let gate = Throttle::new(clock.clone(), 16.0);

        assert!(gate.try_acquire());
        clock.advance(16.0);
        assert!(gate.try_acquire());
        clock.advance(15.0);
        assert!(!gate.try_acquire());
        clock.advance(1.0);
        assert!(gate.try_acquire());
    }

    #[test]
    fn test_handler_receives_argument() {
        let seen = Rc::new(Cell::new(0.0));
        let sink = seen.clone();
        let throttled = throttle(ManualClock::default(), 50.0, move |y: f64| sink.set(y));

        throttled.call(42.0);
        throttled.call(99.0);
        assert_eq!(seen.get(), 42.0);
    }
}
