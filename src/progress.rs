/// Frame-driven countdown visualization for the autoplay bar.
///
/// The host feeds it the per-frame delta, so the bar advances in lockstep
/// with the display refresh rate instead of a fixed-interval timer. The
/// animator owns at most one run at a time: disarming drops it, and a new
/// `restart_key` replaces it, so a stale run can never keep accumulating
/// behind a slide change.
pub struct ProgressAnimator {
    run: Option<Run>,
}

struct Run {
    key: u64,
    elapsed: f32,
}

impl ProgressAnimator {
    pub fn new() -> Self {
        Self { run: None }
    }

    /// Returns the fraction of `duration` elapsed since this run started,
    /// clamped to `[0, 1]`.
    ///
    /// While `armed`, `dt` seconds are accumulated per call until the run
    /// reaches `duration`; after that the fraction pins at 1.0 and further
    /// frames accumulate nothing until a new key re-arms it. When not armed
    /// the fraction is 0.0 and no run exists.
    pub fn observe(&mut self, armed: bool, duration: f32, restart_key: u64, dt: f32) -> f32 {
        if !armed {
            self.run = None;
            return 0.0;
        }

        if duration <= 0.0 {
            return 1.0;
        }

        match &mut self.run {
            Some(run) if run.key == restart_key => {
                if run.elapsed < duration {
                    run.elapsed += dt;
                }
                (run.elapsed / duration).min(1.0)
            }
            _ => {
                self.run = Some(Run {
                    key: restart_key,
                    elapsed: dt,
                });
                (dt / duration).min(1.0)
            }
        }
    }
}

impl Default for ProgressAnimator {
    fn default() -> Self {
        Self::new()
    }
}
