//! Fixed-interval polling of the command and signal queues.

use std::time::{Duration, Instant};

use winit::event_loop::{ActiveEventLoop, ControlFlow};

use super::core::LanternApp;

/// How often to drain the queues (approx 120 Hz).
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(8);

impl LanternApp {
    /// Drain both queues when the interval has elapsed and schedule the
    /// next wake-up. Commands run first so their signals are picked up
    /// in the same pass.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        if now.duration_since(self.last_poll) >= POLL_INTERVAL {
            self.last_poll = now;
            self.drain_chrome_commands();
            self.drain_surface_signals();
        }

        event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + POLL_INTERVAL));
    }
}
