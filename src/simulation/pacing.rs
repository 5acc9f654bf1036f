//! Timing collaborator: the pause between generations

use std::time::Duration;

/// Invoked once per generation after the world has been stepped
pub trait Pacer {
    fn pause(&mut self);
}

/// Blocks the thread for a fixed delay
#[derive(Debug, Clone, Copy)]
pub struct FixedDelay(pub Duration);

impl Pacer for FixedDelay {
    fn pause(&mut self) {
        if !self.0.is_zero() {
            std::thread::sleep(self.0);
        }
    }
}

/// Never waits; for headless runs
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl Pacer for NoDelay {
    fn pause(&mut self) {}
}
