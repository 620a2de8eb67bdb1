// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt;

/// Averaged frame statistics over one reporting interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    /// Mean frame time in milliseconds.
    pub frame_time_ms: f32,
    /// Frames per second, rounded to the nearest integer.
    pub fps: u32,
}

impl fmt::Display for FrameReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Frame Time: {:.2}ms, FPS: {}",
            self.frame_time_ms, self.fps
        )
    }
}

/// Accumulates frame times and publishes a [`FrameReport`] once per interval.
#[derive(Debug, Clone)]
pub struct FrameTimer {
    interval: f32,
    elapsed: f32,
    frames: u32,
    last: Option<FrameReport>,
}

impl FrameTimer {
    /// Creates a timer reporting every `interval` seconds.
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            elapsed: 0.0,
            frames: 0,
            last: None,
        }
    }

    /// Records one frame of `dt` seconds.
    ///
    /// Returns a new report once the accumulated time exceeds the interval,
    /// then starts a new window.
    pub fn tick(&mut self, dt: f32) -> Option<FrameReport> {
        self.elapsed += dt;
        self.frames += 1;
        if self.elapsed <= self.interval {
            return None;
        }

        let mean = self.elapsed / self.frames as f32;
        let report = FrameReport {
            frame_time_ms: mean * 1000.0,
            fps: (1.0 / mean).round() as u32,
        };
        self.elapsed = 0.0;
        self.frames = 0;
        self.last = Some(report);
        Some(report)
    }

    /// The most recent report, if any window has completed.
    pub fn last_report(&self) -> Option<FrameReport> {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_report_after_interval() {
        let mut timer = FrameTimer::new(0.5);
        let dt = 1.0 / 32.0;
        // Reaching the interval exactly is not enough.
        for _ in 0..16 {
            assert!(timer.tick(dt).is_none());
        }
        let report = timer.tick(dt).expect("interval exceeded");
        assert_relative_eq!(report.frame_time_ms, 31.25, epsilon = 1e-3);
        assert_eq!(report.fps, 32);
        assert_eq!(timer.last_report(), Some(report));
        // The window starts over.
        assert!(timer.tick(dt).is_none());
    }

    #[test]
    fn test_report_display() {
        let report = FrameReport {
            frame_time_ms: 16.6667,
            fps: 60,
        };
        assert_eq!(report.to_string(), "Frame Time: 16.67ms, FPS: 60");
    }
}
