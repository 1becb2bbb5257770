//! Runtime diagnostics: control-loop rate.
//!
//! [`LoopRateCounter`] counts `add_frame` calls and latches the tally once
//! per second, giving the poll-loop frequency the input layer actually
//! sees.  Useful when tuning `loop_interval_ms`: the button and encoder
//! assume they are polled well inside their 100 ms / 300 ms windows.

const WINDOW_MS: u32 = 1_000;

#[derive(Debug, Clone)]
pub struct LoopRateCounter {
    counter: u16,
    window_start_ms: u32,
    result: u16,
}

impl LoopRateCounter {
    pub fn new(now_ms: u32) -> Self {
        Self {
            counter: 0,
            window_start_ms: now_ms,
            result: 0,
        }
    }

    /// Count one loop iteration.  Returns `true` when a one-second window
    /// closed and [`count`](Self::count) was refreshed.
    pub fn add_frame(&mut self, now_ms: u32) -> bool {
        self.counter = self.counter.saturating_add(1);

        if now_ms.wrapping_sub(self.window_start_ms) > WINDOW_MS {
            self.window_start_ms = now_ms;
            self.result = self.counter;
            self.counter = 0;
            return true;
        }

        false
    }

    /// Frames counted in the last closed window.
    pub fn count(&self) -> u16 {
        self.result
    }
}
