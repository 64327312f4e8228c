/// Commands the carousel reacts to. `Tick` is the autoplay timer expiring;
/// everything else is user-initiated.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CarouselEvent {
    /// Timer-driven advance. Keeps autoplay armed so the next countdown starts.
    Tick,
    /// Manual advance. Stops autoplay.
    Next,
    /// Manual step backwards. Stops autoplay.
    Prev,
    Play,
    Pause,
    /// Jump straight to a slide, e.g. from a nav dot. Stops autoplay and
    /// asks the view to move keyboard focus to the selected slide.
    Goto(usize),
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct CarouselState {
    pub current_index: usize,
    pub is_playing: bool,
    pub take_focus: bool,
}

impl CarouselState {
    pub fn new() -> Self {
        Self {
            current_index: 0,
            is_playing: false,
            take_focus: false,
        }
    }

    /// Pure transition function. `slide_count` must be >= 1 and fixed for
    /// the session; the returned index is always within `[0, slide_count)`.
    ///
    /// Only `Tick` leaves autoplay running: any manual interaction stops it,
    /// so user intent always overrides automation. `take_focus` survives for
    /// exactly one snapshot after `Goto` and is cleared by every other
    /// transition. A `Goto` outside the deck is rejected (state kept, focus
    /// flag cleared).
    pub fn apply(&self, event: CarouselEvent, slide_count: usize) -> Self {
        match event {
            CarouselEvent::Tick => Self {
                current_index: (self.current_index + 1) % slide_count,
                is_playing: true,
                take_focus: false,
            },
            CarouselEvent::Next => Self {
                current_index: (self.current_index + 1) % slide_count,
                is_playing: false,
                take_focus: false,
            },
            CarouselEvent::Prev => Self {
                current_index: (self.current_index + slide_count - 1) % slide_count,
                is_playing: false,
                take_focus: false,
            },
            CarouselEvent::Play => Self {
                is_playing: true,
                take_focus: false,
                ..*self
            },
            CarouselEvent::Pause => Self {
                is_playing: false,
                take_focus: false,
                ..*self
            },
            CarouselEvent::Goto(index) if index < slide_count => Self {
                current_index: index,
                is_playing: false,
                take_focus: true,
            },
            CarouselEvent::Goto(_) => Self {
                take_focus: false,
                ..*self
            },
        }
    }

    /// Identity of the current autoplay run. Both the advance timer and the
    /// progress bar restart whenever this changes.
    pub fn identity_key(&self) -> u64 {
        (self.current_index as u64) << 1 | self.is_playing as u64
    }
}

impl Default for CarouselState {
    fn default() -> Self {
        Self::new()
    }
}
