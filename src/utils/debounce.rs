//! Debounce bookkeeping
//!
//! The timer lives in the owning entity as a spawned task. This type only
//! tracks which value is newest, so a timer that fires after a later edit
//! knows it is stale.

/// Latest pending value plus a generation counter
#[derive(Debug, Clone)]
pub struct Debounced<T> {
    pending: Option<T>,
    generation: u64,
}

impl<T> Default for Debounced<T> {
    fn default() -> Self {
        Self {
            pending: None,
            generation: 0,
        }
    }
}

impl<T> Debounced<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the pending value; returns the generation its timer must present
    pub fn push(&mut self, value: T) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.pending = Some(value);
        self.generation
    }

    /// Timer fired: take the value only if nothing newer was pushed since
    pub fn settle(&mut self, generation: u64) -> Option<T> {
        if generation == self.generation {
            self.pending.take()
        } else {
            None
        }
    }

    /// Take the pending value now and invalidate any running timer
    pub fn flush(&mut self) -> Option<T> {
        self.generation = self.generation.wrapping_add(1);
        self.pending.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_timer_settles() {
        let mut debounced = Debounced::new();
        let first = debounced.push("p".to_string());
        let second = debounced.push("pro".to_string());

        assert_eq!(debounced.settle(first), None);
        assert_eq!(debounced.settle(second).as_deref(), Some("pro"));
        assert_eq!(debounced.settle(second), None);
    }

    #[test]
    fn test_flush_invalidates_timer() {
        let mut debounced = Debounced::new();
        let generation = debounced.push(42);
        assert_eq!(debounced.flush(), Some(42));
        assert_eq!(debounced.settle(generation), None);
        assert_eq!(debounced.flush(), None);
    }
}
