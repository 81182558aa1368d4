use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use governor::{
    clock::{Clock, DefaultClock},
    middleware::NoOpMiddleware,
    nanos::Nanos,
    state::{keyed::ShrinkableKeyedStateStore, StateStore},
    Quota, RateLimiter,
};

#[derive(Clone, Copy)]
struct Cell {
    origin: Nanos, // theoretical arrival time of a key nobody has used yet
    tat: Nanos,
}

/// Keyed GCRA state that can hand a cell back.
#[derive(Clone)]
struct DeliveryCells {
    cells: Arc<DashMap<String, Cell>>,
    interval: Nanos,
}

impl DeliveryCells {
    fn refund(&self, key: &str) {
        let drained = match self.cells.get_mut(key) {
            Some(mut cell) => {
                cell.tat = cell.tat.saturating_sub(self.interval);
                cell.tat <= cell.origin
            }
            None => false,
        };
        // A key back at its starting state is indistinguishable from an absent one.
        if drained {
            self.cells.remove_if(key, |_, cell| cell.tat <= cell.origin);
        }
    }
}

impl StateStore for DeliveryCells {
    type Key = String;

    fn measure_and_replace<T, F, E>(&self, key: &Self::Key, f: F) -> Result<T, E>
    where
        F: Fn(Option<Nanos>) -> Result<(T, Nanos), E>,
    {
        match self.cells.entry(key.clone()) {
            Entry::Occupied(mut slot) => {
                let (outcome, tat) = f(Some(slot.get().tat))?;
                slot.get_mut().tat = tat;
                Ok(outcome)
            }
            Entry::Vacant(slot) => {
                let (outcome, tat) = f(None)?;
                slot.insert(Cell { origin: tat.saturating_sub(self.interval), tat });
                Ok(outcome)
            }
        }
    }
}

impl ShrinkableKeyedStateStore<String> for DeliveryCells {
    fn retain_recent(&self, drop_below: Nanos) {
        self.cells.retain(|_, cell| cell.tat > drop_below);
    }

    fn shrink_to_fit(&self) {
        self.cells.shrink_to_fit();
    }

    fn len(&self) -> usize {
        self.cells.len()
    }

    fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Per-email quota on contact messages that actually reached the relay.
///
/// A submission reserves a cell before the relay call and releases it when
/// the relay fails, so only successful deliveries count. Keys whose window
/// has passed are dropped by `prune`.
pub struct DeliveryLimiter<C: Clock = DefaultClock> {
    limiter: RateLimiter<String, DeliveryCells, C, NoOpMiddleware<C::Instant>>,
    cells: DeliveryCells,
}

impl DeliveryLimiter {
    pub fn new(quota: Quota) -> Self {
        Self::with_clock(quota, &DefaultClock::default())
    }
}

impl<C: Clock> DeliveryLimiter<C> {
    pub fn with_clock(quota: Quota, clock: &C) -> Self {
        let cells = DeliveryCells {
            cells: Arc::new(DashMap::new()),
            interval: quota.replenish_interval().into(),
        };
        Self {
            limiter: RateLimiter::new(quota, cells.clone(), clock),
            cells,
        }
    }

    /// Takes one cell for `key`. Returns false when the quota is used up.
    pub fn try_reserve(&self, key: &str) -> bool {
        self.limiter.check_key(&key.to_string()).is_ok()
    }

    /// Gives back a cell taken by `try_reserve`.
    pub fn release(&self, key: &str) {
        self.cells.refund(key);
    }

    pub fn prune(&self) {
        self.limiter.retain_recent();
    }

    /// Number of keys currently holding state.
    pub fn tracked(&self) -> usize {
        self.limiter.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use governor::clock::FakeRelativeClock;
    use nonzero_ext::nonzero;
    use std::time::Duration;

    fn limiter(clock: &FakeRelativeClock) -> DeliveryLimiter<FakeRelativeClock> {
        DeliveryLimiter::with_clock(Quota::per_hour(nonzero!(5u32)), clock)
    }

    #[test]
    fn sixth_reservation_in_the_hour_is_refused() {
        let clock = FakeRelativeClock::default();
        let limiter = limiter(&clock);
        for _ in 0..5 {
            assert!(limiter.try_reserve("rami@example.com"));
        }
        assert!(!limiter.try_reserve("rami@example.com"));
        assert!(limiter.try_reserve("lina@example.com"));
    }

    #[test]
    fn released_cells_do_not_count() {
        let clock = FakeRelativeClock::default();
        let limiter = limiter(&clock);
        for _ in 0..20 {
            assert!(limiter.try_reserve("rami@example.com"));
            limiter.release("rami@example.com");
        }
        for _ in 0..5 {
            assert!(limiter.try_reserve("rami@example.com"));
        }
        assert!(!limiter.try_reserve("rami@example.com"));
    }

    #[test]
    fn released_fresh_keys_are_forgotten() {
        let clock = FakeRelativeClock::default();
        let limiter = limiter(&clock);
        for i in 0..1000 {
            let key = format!("visitor{}@example.com", i);
            assert!(limiter.try_reserve(&key));
            limiter.release(&key);
        }
        assert_eq!(limiter.tracked(), 0);
    }

    #[test]
    fn release_keeps_earlier_deliveries() {
        let clock = FakeRelativeClock::default();
        let limiter = limiter(&clock);
        assert!(limiter.try_reserve("rami@example.com"));
        assert!(limiter.try_reserve("rami@example.com"));
        limiter.release("rami@example.com");
        assert_eq!(limiter.tracked(), 1);
        for _ in 0..4 {
            assert!(limiter.try_reserve("rami@example.com"));
        }
        assert!(!limiter.try_reserve("rami@example.com"));
    }

    #[test]
    fn prune_drops_keys_once_their_window_has_passed() {
        let clock = FakeRelativeClock::default();
        let limiter = limiter(&clock);
        for i in 0..100 {
            assert!(limiter.try_reserve(&format!("visitor{}@example.com", i)));
        }
        limiter.prune();
        assert_eq!(limiter.tracked(), 100);

        clock.advance(Duration::from_secs(2 * 60 * 60));
        limiter.prune();
        assert_eq!(limiter.tracked(), 0);
        assert!(limiter.try_reserve("visitor0@example.com"));
    }

    #[test]
    fn exhausted_key_recovers_after_replenish_interval() {
        let clock = FakeRelativeClock::default();
        let limiter = limiter(&clock);
        for _ in 0..5 {
            assert!(limiter.try_reserve("rami@example.com"));
        }
        assert!(!limiter.try_reserve("rami@example.com"));
        clock.advance(Duration::from_secs(12 * 60));
        assert!(limiter.try_reserve("rami@example.com"));
    }
}
