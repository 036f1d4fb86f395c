/// A frame-driven countdown. Decremented by each update's elapsed time;
/// never sleeps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Countdown {
    duration: f32,
    remaining: f32,
}

impl Countdown {
    pub fn new(duration: f32) -> Self {
        Self {
            duration,
            remaining: duration,
        }
    }

    pub fn restart(&mut self) {
        self.remaining = self.duration;
    }

    /// Advances by `dt` seconds. Returns true on the tick that reaches zero,
    /// and on every tick after that until restarted.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.remaining -= dt.max(0.0);
        self.is_expired()
    }

    pub fn is_expired(&self) -> bool {
        self.remaining <= 0.0
    }

    pub fn remaining(&self) -> f32 {
        self.remaining.max(0.0)
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }
}
