/// One-shot autoplay countdown, keyed by the identity of the run it was
/// armed for. Re-keying cancels the outstanding countdown and starts a
/// fresh one; at most one countdown exists per carousel.
pub struct AdvanceTimer {
    pending: Option<Pending>,
}

struct Pending {
    key: u64,
    elapsed: f32,
}

impl AdvanceTimer {
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// Reconcile the countdown with the current state identity. `Some(key)`
    /// arms a timer for that key (keeping the countdown already in flight if
    /// the key is unchanged), `None` cancels whatever is pending.
    pub fn sync(&mut self, key: Option<u64>) {
        match (key, &self.pending) {
            (Some(key), Some(pending)) if pending.key == key => {}
            (Some(key), _) => {
                self.pending = Some(Pending { key, elapsed: 0.0 });
            }
            (None, _) => {
                self.pending = None;
            }
        }
    }

    /// Advance the countdown by one frame. Returns true exactly once, when
    /// the armed duration expires; the timer then stays idle until re-armed
    /// via `sync` with a fresh key.
    pub fn tick(&mut self, dt: f32, duration: f32) -> bool {
        let Some(pending) = &mut self.pending else {
            return false;
        };
        pending.elapsed += dt;
        if pending.elapsed >= duration {
            self.pending = None;
            true
        } else {
            false
        }
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }
}

impl Default for AdvanceTimer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f32 = 1.0 / 60.0;

    #[test]
    fn unarmed_timer_never_fires() {
        let mut timer = AdvanceTimer::new();
        for _ in 0..300 {
            assert!(!timer.tick(FRAME, 2.0));
        }
    }

    #[test]
    fn fires_exactly_once_after_duration() {
        let mut timer = AdvanceTimer::new();
        timer.sync(Some(1));

        let mut fired = 0;
        for _ in 0..180 {
            if timer.tick(FRAME, 2.0) {
                fired += 1;
            }
        }
        assert_eq!(fired, 1);
        assert!(!timer.is_armed());
    }

    #[test]
    fn does_not_fire_early() {
        let mut timer = AdvanceTimer::new();
        timer.sync(Some(1));
        for _ in 0..110 {
            assert!(!timer.tick(FRAME, 2.0));
        }
    }

    #[test]
    fn syncing_same_key_keeps_countdown_in_flight() {
        let mut timer = AdvanceTimer::new();
        timer.sync(Some(1));
        for _ in 0..60 {
            timer.tick(FRAME, 2.0);
            timer.sync(Some(1));
        }
        // 1.0s in; another 1.0s should complete it.
        let mut fired = false;
        for _ in 0..61 {
            fired |= timer.tick(FRAME, 2.0);
        }
        assert!(fired);
    }

    #[test]
    fn key_change_cancels_and_restarts() {
        let mut timer = AdvanceTimer::new();
        timer.sync(Some(1));
        for _ in 0..110 {
            timer.tick(FRAME, 2.0);
        }
        timer.sync(Some(2));
        // Old countdown was nearly done; the new one must run full length.
        for _ in 0..110 {
            assert!(!timer.tick(FRAME, 2.0));
        }
    }

    #[test]
    fn sync_none_disarms() {
        let mut timer = AdvanceTimer::new();
        timer.sync(Some(1));
        timer.sync(None);
        assert!(!timer.is_armed());
        for _ in 0..300 {
            assert!(!timer.tick(FRAME, 2.0));
        }
    }
}
