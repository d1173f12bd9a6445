//! Frame-rate capping and FPS reporting.

use std::time::Duration;

/// Caps the loop at a target frame rate by sleeping off leftover frame time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FramePacer {
    target_fps: Option<f64>,
}

impl FramePacer {
    pub fn new(target_fps: Option<f64>) -> Self {
        Self {
            target_fps: target_fps.filter(|fps| *fps > 0.0 && fps.is_finite()),
        }
    }

    pub fn uncapped() -> Self {
        Self { target_fps: None }
    }

    pub fn target_fps(&self) -> Option<f64> {
        self.target_fps
    }

    /// `1 / target_fps - elapsed`, or `None` when there is nothing to sleep.
    pub fn sleep_time(&self, elapsed_secs: f64) -> Option<Duration> {
        let fps = self.target_fps?;
        let remaining = 1.0 / fps - elapsed_secs;
        if remaining > 0.0 {
            Some(Duration::from_secs_f64(remaining))
        } else {
            None
        }
    }
}

/// Instantaneous frames per second for one frame interval.
pub fn instantaneous_fps(elapsed_secs: f64) -> f64 {
    if elapsed_secs > 0.0 {
        1.0 / elapsed_secs
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sleeps_only_for_leftover_time() {
        let pacer = FramePacer::new(Some(50.0));
        let sleep = pacer.sleep_time(0.005).unwrap();
        assert!((sleep.as_secs_f64() - 0.015).abs() < 1e-9);
        assert_eq!(pacer.sleep_time(0.02), None);
        assert_eq!(pacer.sleep_time(0.5), None);
    }

    #[test]
    fn uncapped_never_sleeps() {
        assert_eq!(FramePacer::uncapped().sleep_time(0.0), None);
        assert_eq!(FramePacer::new(Some(0.0)).target_fps(), None);
        assert_eq!(FramePacer::new(Some(-5.0)).sleep_time(0.0), None);
    }

    #[test]
    fn fps_is_reciprocal_of_elapsed() {
        assert_eq!(instantaneous_fps(0.25), 4.0);
        assert_eq!(instantaneous_fps(0.0), 0.0);
    }
}
