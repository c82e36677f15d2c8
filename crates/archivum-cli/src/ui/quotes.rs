use std::time::Duration;

/// The welcome quotes, cycled once after the initial load.
pub const WELCOME_QUOTES: [&str; 3] = [
    "If there is no struggle, there is no progress. - Frederick Douglass",
    "Give light and people will find the way. - Ella Baker",
    "The time is always right to do what is right. - Martin Luther King Jr.",
];

/// Display time for the first quote, then for each subsequent quote.
const FIRST_QUOTE: Duration = Duration::from_secs(7);
const NEXT_QUOTE: Duration = Duration::from_secs(5);
/// Fade-out time between quotes.
const FADE: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Visible(usize),
    Fading(usize),
    Done,
}

/// The quote currently on screen, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuoteState {
    pub index: usize,
    pub text: &'static str,
    /// False during the fade-out between quotes.
    pub visible: bool,
}

/// Finite-state sequencer for the welcome quotes. Advanced by elapsed
/// ticks rather than wall-clock timers, so it is cancelable and testable
/// with synthetic durations.
#[derive(Debug, Clone)]
pub struct QuoteSequencer {
    phase: Phase,
    elapsed: Duration,
}

impl Default for QuoteSequencer {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteSequencer {
    pub fn new() -> Self {
        Self {
            phase: Phase::Visible(0),
            elapsed: Duration::ZERO,
        }
    }

    fn display_time(index: usize) -> Duration {
        if index == 0 { FIRST_QUOTE } else { NEXT_QUOTE }
    }

    /// Advance by elapsed time, stepping through as many phases as the
    /// delta covers.
    pub fn advance(&mut self, dt: Duration) {
        self.elapsed += dt;

        loop {
            match self.phase {
                Phase::Visible(index) => {
                    let limit = Self::display_time(index);
                    if self.elapsed < limit {
                        return;
                    }
                    self.elapsed -= limit;
                    self.phase = Phase::Fading(index);
                }
                Phase::Fading(index) => {
                    if self.elapsed < FADE {
                        return;
                    }
                    self.elapsed -= FADE;
                    let next = index + 1;
                    self.phase = if next < WELCOME_QUOTES.len() {
                        Phase::Visible(next)
                    } else {
                        Phase::Done
                    };
                }
                Phase::Done => return,
            }
        }
    }

    /// Stop the sequence immediately (any keypress cancels it).
    pub fn cancel(&mut self) {
        self.phase = Phase::Done;
    }

    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    pub fn state(&self) -> Option<QuoteState> {
        match self.phase {
            Phase::Visible(index) => Some(QuoteState {
                index,
                text: WELCOME_QUOTES[index],
                visible: true,
            }),
            Phase::Fading(index) => Some(QuoteState {
                index,
                text: WELCOME_QUOTES[index],
                visible: false,
            }),
            Phase::Done => None,
        }
    }
}
