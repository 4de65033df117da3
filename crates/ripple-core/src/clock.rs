use crate::config::TimeStep;
use crate::constants::MAX_FRAME_DT_SEC;
use instant::Instant;

/// Shader time accumulator.
#[derive(Clone, Debug)]
pub struct Clock {
    step: TimeStep,
    elapsed: f32,
    last: Option<Instant>,
}

impl Clock {
    pub fn new(step: TimeStep) -> Self {
        Self {
            step,
            elapsed: 0.0,
            last: None,
        }
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Advance for one animation frame and return the new elapsed time.
    pub fn tick(&mut self) -> f32 {
        match self.step {
            TimeStep::Fixed(step) => self.elapsed += step.max(0.0),
            TimeStep::PerSecond(_) => {
                let now = Instant::now();
                let dt = self
                    .last
                    .map(|t| now.duration_since(t).as_secs_f32())
                    .unwrap_or(0.0);
                self.last = Some(now);
                self.advance_by(dt);
            }
        }
        self.elapsed
    }

    /// Advance by `dt_sec` of wall-clock time. Ignored for fixed steps.
    pub fn advance_by(&mut self, dt_sec: f32) {
        if let TimeStep::PerSecond(rate) = self.step {
            self.elapsed += dt_sec.clamp(0.0, MAX_FRAME_DT_SEC) * rate.max(0.0);
        }
    }

    /// Forget the last wall-clock sample so time does not jump after a pause.
    pub fn pause(&mut self) {
        self.last = None;
    }
}
