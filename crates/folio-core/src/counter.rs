//! Stat counters and skill bars. Both fire once per animator instance.

use crate::latch::Latch;
use tracing::debug;

/// Ramp from 0 to `target`, one display string per animation frame.
///
/// Each intermediate frame shows `ceil(current)+"+"`; the final frame is
/// exactly `target+"+"`.
#[derive(Debug, Clone)]
pub struct CountUp {
    target: u64,
    increment: f64,
    current: f64,
    done: bool,
}

impl CountUp {
    pub fn new(target: u64, steps: u32) -> Self {
        Self {
            target,
            increment: target as f64 / f64::from(steps.max(1)),
            current: 0.0,
            done: false,
        }
    }

    /// Build from a `data-target` attribute. Non-integer targets are skipped.
    pub fn parse(raw: &str, steps: u32) -> Option<Self> {
        raw.trim().parse::<u64>().ok().map(|t| Self::new(t, steps))
    }

    pub fn target(&self) -> u64 {
        self.target
    }
}

impl Iterator for CountUp {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.done {
            return None;
        }
        self.current += self.increment;
        if self.current < self.target as f64 {
            Some(format!("{}+", self.current.ceil() as u64))
        } else {
            self.done = true;
            Some(format!("{}+", self.target))
        }
    }
}

#[derive(Debug, Default)]
pub struct CounterAnimator {
    latch: Latch,
}

impl CounterAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ramps for each target on the first trigger; `None` afterwards.
    pub fn trigger<'a, I>(&self, targets: I, steps: u32) -> Option<Vec<Option<CountUp>>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        if !self.latch.fire() {
            return None;
        }
        let ramps: Vec<_> = targets
            .into_iter()
            .map(|raw| CountUp::parse(raw, steps))
            .collect();
        debug!("counters triggered: {} targets", ramps.len());
        Some(ramps)
    }
}

/// CSS width for a `data-progress` value, clamped to 0–100%.
pub fn skill_width(raw: &str) -> Option<String> {
    let value: f64 = raw.trim().parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    Some(format!("{}%", value.clamp(0.0, 100.0)))
}

#[derive(Debug, Default)]
pub struct SkillBarAnimator {
    latch: Latch,
}

impl SkillBarAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trigger<'a, I>(&self, progress: I) -> Option<Vec<Option<String>>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        if !self.latch.fire() {
            return None;
        }
        Some(progress.into_iter().map(skill_width).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_to_exact_target() {
        let frames: Vec<String> = CountUp::new(150, 100).collect();
        assert_eq!(frames.last().map(String::as_str), Some("150+"));
        for frame in &frames {
            let n: u64 = frame.trim_end_matches('+').parse().unwrap();
            assert!(n <= 150, "frame {frame} overshoots");
        }
        assert!(frames.len() >= 100 && frames.len() <= 101);
    }

    #[test]
    fn ramp_stays_finished_after_last_frame() {
        let mut ramp = CountUp::new(3, 2);
        assert_eq!(ramp.next().as_deref(), Some("2+"));
        assert_eq!(ramp.next().as_deref(), Some("3+"));
        assert_eq!(ramp.next(), None);
        assert_eq!(ramp.next(), None);
    }

    #[test]
    fn first_frame_rounds_up() {
        let mut ramp = CountUp::new(50, 100);
        assert_eq!(ramp.next().as_deref(), Some("1+"));
    }

    #[test]
    fn zero_target_finishes_immediately() {
        let frames: Vec<String> = CountUp::new(0, 100).collect();
        assert_eq!(frames, vec!["0+".to_owned()]);
    }

    #[test]
    fn bad_target_is_skipped() {
        assert!(CountUp::parse("lots", 100).is_none());
        assert!(CountUp::parse("-3", 100).is_none());
        assert_eq!(CountUp::parse(" 42 ", 100).map(|c| c.target()), Some(42));
    }

    #[test]
    fn counters_fire_once() {
        let anim = CounterAnimator::new();
        let first = anim.trigger(["10", "x"], 100).unwrap();
        assert!(first[0].is_some());
        assert!(first[1].is_none());
        assert!(anim.trigger(["10"], 100).is_none());
    }

    #[test]
    fn skill_widths_clamp() {
        assert_eq!(skill_width("85").as_deref(), Some("85%"));
        assert_eq!(skill_width("92.5").as_deref(), Some("92.5%"));
        assert_eq!(skill_width("140").as_deref(), Some("100%"));
        assert_eq!(skill_width("").as_deref(), None);
    }

    #[test]
    fn skill_bars_fire_once() {
        let anim = SkillBarAnimator::new();
        assert_eq!(
            anim.trigger(["90", "75"]),
            Some(vec![Some("90%".to_owned()), Some("75%".to_owned())])
        );
        assert_eq!(anim.trigger(["90"]), None);
    }
}
