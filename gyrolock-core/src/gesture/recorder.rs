//! Gesture recording sessions
//!
//! A session samples the rate sensor in a tight loop, quantizes each
//! axis and appends a gesture point whenever the symbol triple changes.
//! The loop blocks the caller until one of:
//!
//! 1. `MAX_POINTS` points have been collected
//! 2. A button event is pending (the event is consumed)
//! 3. The session timeout elapses (timed sessions only)
//!
//! Timeout granularity is one sensor poll; the clock is sampled once per
//! iteration.

use super::axis::AxisQuantizer;
use super::sequence::{GesturePoint, GestureSequence};
use crate::config::LockConfig;
use crate::input::{ButtonEvent, PendingButton};
use crate::traits::{Monotonic, RateSensor};

/// Whether a session may be abandoned on timeout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RecordMode {
    /// Runs until full or a button press
    Untimed,
    /// Additionally abandoned after the session timeout
    Timed,
}

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StopReason {
    /// Sequence reached `MAX_POINTS`
    Complete,
    /// User pressed the button
    Button(ButtonEvent),
    /// Session timeout elapsed
    Timeout,
}

/// Result of one recording session
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Recording {
    /// Points collected, possibly fewer than `MAX_POINTS`
    pub sequence: GestureSequence,
    /// Termination condition
    pub stop: StopReason,
    /// Raw samples read during the session
    pub samples: u32,
}

/// Drives recording sessions
///
/// Owns the per-axis hysteresis state, which is reset at the start of
/// every session so nothing carries over from a previous one.
#[derive(Debug, Clone)]
pub struct GestureRecorder {
    axes: [AxisQuantizer; 3],
    session_timeout_us: u64,
}

impl GestureRecorder {
    /// Create a recorder from the lock configuration
    pub fn new(config: &LockConfig) -> Self {
        Self {
            axes: [AxisQuantizer::new(config.change_trigger); 3],
            session_timeout_us: config.session_timeout_us,
        }
    }

    /// Center and re-arm all axes
    pub fn reset(&mut self) {
        for axis in &mut self.axes {
            axis.reset();
        }
    }

    /// Symbol triple currently held by the quantizers
    pub fn current_point(&self) -> GesturePoint {
        GesturePoint::new(
            self.axes[0].symbol(),
            self.axes[1].symbol(),
            self.axes[2].symbol(),
        )
    }

    /// Run one recording session
    ///
    /// Any button event pending when the session starts is discarded.
    pub fn record<S, M>(
        &mut self,
        sensor: &mut S,
        clock: &M,
        button: &PendingButton,
        mode: RecordMode,
    ) -> Recording
    where
        S: RateSensor,
        M: Monotonic,
    {
        self.reset();
        button.clear();

        let mut sequence = GestureSequence::new();
        let mut last = self.current_point();
        let mut samples: u32 = 0;
        let started_us = clock.now_us();

        let stop = loop {
            if sequence.is_full() {
                break StopReason::Complete;
            }

            let sample = sensor.read_sample();
            samples = samples.saturating_add(1);

            let point = GesturePoint::new(
                self.axes[0].update(sample.x),
                self.axes[1].update(sample.y),
                self.axes[2].update(sample.z),
            );

            if point != last {
                // Cannot fail: capacity checked above, point differs from last
                let _ = sequence.push(point);
                last = point;
            }

            if let Some(event) = button.take() {
                break StopReason::Button(event);
            }

            if mode == RecordMode::Timed && clock.elapsed_us(started_us) > self.session_timeout_us
            {
                break StopReason::Timeout;
            }
        };

        Recording {
            sequence,
            stop,
            samples,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MAX_POINTS;
    use crate::gesture::AxisSymbol::*;
    use crate::test_support::{Feed, ScriptedSensor, SteppingClock};
    use crate::traits::RawSample;

    const HIGH: i16 = 30_000;
    const LOW: i16 = -30_000;

    fn sample(x: i16, y: i16, z: i16) -> Feed {
        Feed::Sample(RawSample::new(x, y, z))
    }

    #[test]
    fn test_records_on_symbol_change_only() {
        let pending = PendingButton::new();
        let mut sensor = ScriptedSensor::new(&pending);
        sensor.extend(&[
            sample(HIGH, 0, 0),
            sample(HIGH, 0, 0),
            sample(0, 0, 0),
            sample(0, 0, 0),
            sample(LOW, HIGH, 0),
            sample(0, 0, 0),
            Feed::Press(ButtonEvent::Short),
        ]);
        let clock = SteppingClock::new(1_000);
        let mut recorder = GestureRecorder::new(&LockConfig::default());

        let recording = recorder.record(&mut sensor, &clock, &pending, RecordMode::Untimed);

        assert_eq!(recording.stop, StopReason::Button(ButtonEvent::Short));
        assert_eq!(
            recording.sequence.points(),
            &[
                GesturePoint::new(Positive, Center, Center),
                GesturePoint::new(Center, Positive, Center),
            ]
        );
        assert_eq!(recording.samples, 7);
        // Abort event is consumed
        assert_eq!(pending.take(), None);
    }

    #[test]
    fn test_stops_at_max_points() {
        let pending = PendingButton::new();
        let mut sensor = ScriptedSensor::new(&pending);
        for _ in 0..4 {
            sensor.extend(&[sample(0, 0, HIGH), sample(0, 0, 0), sample(0, 0, LOW), sample(0, 0, 0)]);
        }
        let clock = SteppingClock::new(1_000);
        let mut recorder = GestureRecorder::new(&LockConfig::default());

        let recording = recorder.record(&mut sensor, &clock, &pending, RecordMode::Untimed);

        assert_eq!(recording.stop, StopReason::Complete);
        assert_eq!(recording.sequence.len(), MAX_POINTS);
        assert_eq!(
            recording.sequence.points()[..2],
            [
                GesturePoint::new(Center, Center, Positive),
                GesturePoint::new(Center, Center, Center),
            ]
        );
    }

    #[test]
    fn test_timed_session_times_out_with_prefix() {
        let pending = PendingButton::new();
        let mut sensor = ScriptedSensor::new(&pending);
        sensor.extend(&[sample(0, LOW, 0)]);
        let clock = SteppingClock::new(1_000_000);
        let mut recorder = GestureRecorder::new(&LockConfig::default());

        let recording = recorder.record(&mut sensor, &clock, &pending, RecordMode::Timed);

        assert_eq!(recording.stop, StopReason::Timeout);
        assert_eq!(
            recording.sequence.points(),
            &[GesturePoint::new(Center, Negative, Center)]
        );
        // 15 s timeout at 1 s per poll, strictly greater than
        assert_eq!(recording.samples, 16);
    }

    #[test]
    fn test_untimed_session_ignores_timeout() {
        let pending = PendingButton::new();
        let mut sensor = ScriptedSensor::new(&pending);
        for _ in 0..40 {
            sensor.extend(&[sample(0, 0, 0)]);
        }
        sensor.extend(&[Feed::Press(ButtonEvent::Long)]);
        let clock = SteppingClock::new(1_000_000);
        let mut recorder = GestureRecorder::new(&LockConfig::default());

        let recording = recorder.record(&mut sensor, &clock, &pending, RecordMode::Untimed);

        assert_eq!(recording.stop, StopReason::Button(ButtonEvent::Long));
        assert!(recording.sequence.is_empty());
        assert_eq!(recording.samples, 41);
    }

    #[test]
    fn test_stale_event_discarded_at_start() {
        let pending = PendingButton::new();
        pending.publish(ButtonEvent::Short);
        let mut sensor = ScriptedSensor::new(&pending);
        sensor.extend(&[sample(HIGH, 0, 0), Feed::Press(ButtonEvent::Short)]);
        let clock = SteppingClock::new(1_000);
        let mut recorder = GestureRecorder::new(&LockConfig::default());

        let recording = recorder.record(&mut sensor, &clock, &pending, RecordMode::Timed);

        assert_eq!(recording.sequence.len(), 1);
        assert_eq!(recording.samples, 2);
    }

    #[test]
    fn test_hysteresis_reset_between_sessions() {
        let pending = PendingButton::new();
        let mut sensor = ScriptedSensor::new(&pending);
        // First session ends with x pinned high and disarmed
        sensor.extend(&[sample(HIGH, 0, 0), Feed::Press(ButtonEvent::Short)]);
        // Second session: a fresh high swing must register again
        sensor.extend(&[sample(HIGH, 0, 0), Feed::Press(ButtonEvent::Short)]);
        let clock = SteppingClock::new(1_000);
        let mut recorder = GestureRecorder::new(&LockConfig::default());

        let first = recorder.record(&mut sensor, &clock, &pending, RecordMode::Untimed);
        let second = recorder.record(&mut sensor, &clock, &pending, RecordMode::Untimed);

        assert_eq!(first.sequence, second.sequence);
        assert_eq!(
            second.sequence.points(),
            &[GesturePoint::new(Positive, Center, Center)]
        );
    }
}
