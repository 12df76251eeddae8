//! Host-side fakes for the collaborator traits

use core::cell::Cell;

use embedded_hal::delay::DelayNs;
use heapless::Vec;

use crate::input::{ButtonEvent, PendingButton};
use crate::traits::{DisplayState, Monotonic, RateSensor, RawSample, StatusDisplay};

/// One scripted sensor read
#[derive(Debug, Clone, Copy)]
pub enum Feed {
    /// Return this sample
    Sample(RawSample),
    /// Simulate a button press arriving during this read
    Press(ButtonEvent),
}

/// Sensor replaying a script; returns a resting sample once exhausted
pub struct ScriptedSensor<'a> {
    feed: Vec<Feed, 128>,
    next: usize,
    reads: u32,
    pending: &'a PendingButton,
}

impl<'a> ScriptedSensor<'a> {
    pub fn new(pending: &'a PendingButton) -> Self {
        Self {
            feed: Vec::new(),
            next: 0,
            reads: 0,
            pending,
        }
    }

    pub fn extend(&mut self, feed: &[Feed]) {
        self.feed.extend_from_slice(feed).unwrap();
    }

    pub fn reads(&self) -> u32 {
        self.reads
    }
}

impl RateSensor for ScriptedSensor<'_> {
    fn read_sample(&mut self) -> RawSample {
        self.reads += 1;
        let item = self.feed.get(self.next).copied();
        if item.is_some() {
            self.next += 1;
        }
        match item {
            Some(Feed::Sample(sample)) => sample,
            Some(Feed::Press(event)) => {
                self.pending.publish(event);
                RawSample::default()
            }
            None => RawSample::default(),
        }
    }
}

/// Clock that advances by a fixed step every time it is read
pub struct SteppingClock {
    now_us: Cell<u64>,
    step_us: u64,
}

impl SteppingClock {
    pub fn new(step_us: u64) -> Self {
        Self {
            now_us: Cell::new(0),
            step_us,
        }
    }
}

impl Monotonic for SteppingClock {
    fn now_us(&self) -> u64 {
        let now = self.now_us.get();
        self.now_us.set(now + self.step_us);
        now
    }
}

/// Delay that only accumulates the requested time
#[derive(Default)]
pub struct CountingDelay {
    total_ns: u64,
}

impl CountingDelay {
    pub fn total_ms(&self) -> u64 {
        self.total_ns / 1_000_000
    }
}

impl DelayNs for CountingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += ns as u64;
    }

    fn delay_ms(&mut self, ms: u32) {
        self.total_ns += ms as u64 * 1_000_000;
    }
}

/// Display that logs every notification
#[derive(Default)]
pub struct LogDisplay {
    log: Vec<DisplayState, 64>,
}

impl LogDisplay {
    pub fn log(&self) -> &[DisplayState] {
        &self.log
    }

    pub fn clear(&mut self) {
        self.log.clear();
    }
}

impl StatusDisplay for LogDisplay {
    fn notify(&mut self, state: DisplayState) {
        self.log.push(state).unwrap();
    }
}
