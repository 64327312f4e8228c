use crate::progress::ProgressAnimator;
use crate::state::{CarouselEvent, CarouselState};
use crate::timer::AdvanceTimer;

/// Host controller: owns the state machine, the one-shot advance timer and
/// the progress animator, and keeps the latter two keyed to the state's
/// identity. Knows nothing about rendering or input devices.
pub struct Carousel {
    state: CarouselState,
    timer: AdvanceTimer,
    animator: ProgressAnimator,
    slide_count: usize,
    slide_duration: f32,
}

impl Carousel {
    /// `slide_count` must be >= 1; `slide_duration` is how long each slide
    /// is shown while autoplay runs, in seconds.
    pub fn new(slide_count: usize, slide_duration: f32, autoplay: bool) -> Self {
        let mut carousel = Self {
            state: CarouselState::new(),
            timer: AdvanceTimer::new(),
            animator: ProgressAnimator::new(),
            slide_count,
            slide_duration,
        };
        if autoplay {
            carousel.dispatch(CarouselEvent::Play);
        }
        carousel
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// Apply one event. The state is fully settled before this returns, so
    /// the next `frame` call re-arms timer and animator against the new
    /// identity.
    pub fn dispatch(&mut self, event: CarouselEvent) {
        self.state = self.state.apply(event, self.slide_count);
    }

    /// Run one frame of the control loop: reconcile the advance timer with
    /// the current identity, tick it, dispatch the autoplay advance if it
    /// expired, and sample the progress bar. Returns the progress fraction
    /// for this frame.
    pub fn frame(&mut self, dt: f32) -> f32 {
        let key = self.state.is_playing.then(|| self.state.identity_key());
        self.timer.sync(key);

        if self.timer.tick(dt, self.slide_duration) {
            self.dispatch(CarouselEvent::Tick);
            // Fresh identity; arm the next countdown this same frame so no
            // playing frame is ever left without a pending timer.
            self.timer.sync(Some(self.state.identity_key()));
        }

        self.animator.observe(
            self.state.is_playing,
            self.slide_duration,
            self.state.identity_key(),
            dt,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::CarouselEvent::*;

    const FRAME: f32 = 1.0 / 60.0;

    fn run_seconds(carousel: &mut Carousel, seconds: f32) -> f32 {
        let frames = (seconds / FRAME).round() as usize;
        let mut fraction = 0.0;
        for _ in 0..frames {
            fraction = carousel.frame(FRAME);
        }
        fraction
    }

    #[test]
    fn paused_carousel_never_advances() {
        let mut carousel = Carousel::new(3, 2.0, false);
        let fraction = run_seconds(&mut carousel, 10.0);
        assert_eq!(carousel.state().current_index, 0);
        assert_eq!(fraction, 0.0);
    }

    #[test]
    fn autoplay_advances_once_per_duration_and_keeps_playing() {
        let mut carousel = Carousel::new(3, 2.0, true);
        run_seconds(&mut carousel, 2.1);
        assert_eq!(carousel.state().current_index, 1);
        assert!(carousel.state().is_playing);

        run_seconds(&mut carousel, 2.1);
        assert_eq!(carousel.state().current_index, 2);

        // Wraps around the deck and keeps going.
        run_seconds(&mut carousel, 2.1);
        assert_eq!(carousel.state().current_index, 0);
        assert!(carousel.state().is_playing);
    }

    #[test]
    fn playing_frames_always_have_a_pending_timer() {
        let mut carousel = Carousel::new(4, 2.0, true);
        for _ in 0..600 {
            carousel.frame(FRAME);
            assert!(carousel.timer.is_armed());
        }
    }

    #[test]
    fn progress_resets_on_each_advance() {
        let mut carousel = Carousel::new(3, 2.0, true);
        let near_done = run_seconds(&mut carousel, 1.9);
        assert!(near_done > 0.9);

        let just_advanced = run_seconds(&mut carousel, 0.2);
        assert!(just_advanced < 0.1, "fraction = {just_advanced}");
        assert_eq!(carousel.state().current_index, 1);
    }

    #[test]
    fn pause_freezes_mid_countdown() {
        let mut carousel = Carousel::new(3, 2.0, true);
        run_seconds(&mut carousel, 1.0);
        carousel.dispatch(Pause);
        let fraction = run_seconds(&mut carousel, 5.0);
        assert_eq!(carousel.state().current_index, 0);
        assert_eq!(fraction, 0.0);
        assert!(!carousel.timer.is_armed());
    }

    #[test]
    fn manual_jump_restarts_nothing_while_paused() {
        let mut carousel = Carousel::new(5, 2.0, true);
        run_seconds(&mut carousel, 1.0);
        carousel.dispatch(Goto(3));
        assert!(carousel.state().take_focus);
        run_seconds(&mut carousel, 5.0);
        assert_eq!(carousel.state().current_index, 3);
        assert!(!carousel.state().is_playing);
    }

    #[test]
    fn play_tick_goto_scenario() {
        let mut carousel = Carousel::new(3, 2.0, false);
        assert_eq!(*carousel.state(), crate::state::CarouselState::new());

        carousel.dispatch(Play);
        let state = *carousel.state();
        assert!((state.current_index, state.is_playing, state.take_focus) == (0, true, false));

        run_seconds(&mut carousel, 2.1);
        let state = *carousel.state();
        assert!((state.current_index, state.is_playing, state.take_focus) == (1, true, false));

        carousel.dispatch(Goto(0));
        let state = *carousel.state();
        assert!((state.current_index, state.is_playing, state.take_focus) == (0, false, true));
    }
}
