use std::fmt;

/// Remaining time split for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl Countdown {
    pub fn from_seconds(total: u64) -> Self {
        Self {
            hours: total / 3600,
            minutes: (total % 3600) / 60,
            seconds: total % 60,
        }
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    Tick(Countdown),
    /// Reported exactly once per armed countdown.
    Expired,
    Idle,
}

/// One-shot exam countdown driven by an external one-second tick.
#[derive(Debug, Default, Clone)]
pub struct ExamTimer {
    remaining_seconds: u64,
    armed: bool,
    fired: bool,
}

impl ExamTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the countdown. Once expiry has been reported the timer stays spent.
    pub fn start(&mut self, duration_minutes: u32) {
        if self.fired {
            return;
        }
        self.remaining_seconds = u64::from(duration_minutes) * 60;
        self.armed = true;
    }

    pub fn tick(&mut self) -> TimerEvent {
        if !self.armed || self.fired {
            return TimerEvent::Idle;
        }

        if self.remaining_seconds == 0 {
            self.armed = false;
            self.fired = true;
            return TimerEvent::Expired;
        }

        self.remaining_seconds -= 1;
        TimerEvent::Tick(self.countdown())
    }

    /// Tears the countdown down. Later ticks are `Idle`.
    pub fn stop(&mut self) {
        self.armed = false;
    }

    pub fn remaining_seconds(&self) -> u64 {
        self.remaining_seconds
    }

    pub fn countdown(&self) -> Countdown {
        Countdown::from_seconds(self.remaining_seconds)
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}
