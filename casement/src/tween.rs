use std::collections::HashMap;
use std::time::Instant;

use crate::transitions::TransitionConfig;

/// Which numeric element property a tween drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TweenProperty {
    TranslateXPct,
    TranslateY,
    Left,
    Top,
    Opacity,
}

#[derive(Debug, Clone)]
struct ActiveTween {
    from: f32,
    to: f32,
    start: Instant,
    config: TransitionConfig,
}

impl ActiveTween {
    fn progress(&self, now: Instant) -> f32 {
        if self.config.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start);
        (elapsed.as_secs_f32() / self.config.duration.as_secs_f32()).min(1.0)
    }

    fn value(&self, now: Instant) -> f32 {
        let eased = self.config.easing.apply(self.progress(now));
        self.from + (self.to - self.from) * eased
    }

    fn finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}

/// Time-based property animation, keyed by element ID and property.
/// Owners drive it from their tick, read interpolated values, and react
/// to completions exactly once.
#[derive(Debug, Default)]
pub struct TweenState {
    active: HashMap<(String, TweenProperty), ActiveTween>,
}

impl TweenState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a tween. An active tween for the same element/property is
    /// replaced, retargeting from its current interpolated value.
    pub fn start(
        &mut self,
        id: &str,
        property: TweenProperty,
        from: f32,
        to: f32,
        config: TransitionConfig,
        now: Instant,
    ) {
        let key = (id.to_string(), property);
        let from = match self.active.get(&key) {
            Some(existing) => existing.value(now),
            None => from,
        };
        self.active.insert(
            key,
            ActiveTween {
                from,
                to,
                start: now,
                config,
            },
        );
    }

    /// Cancel any tween for the element/property (the owner applies the
    /// value directly).
    pub fn set(&mut self, id: &str, property: TweenProperty) {
        self.active.remove(&(id.to_string(), property));
    }

    /// Current interpolated value, if a tween is active.
    pub fn value(&self, id: &str, property: TweenProperty, now: Instant) -> Option<f32> {
        self.active
            .get(&(id.to_string(), property))
            .map(|tween| tween.value(now))
    }

    /// Target value of an active tween.
    pub fn target(&self, id: &str, property: TweenProperty) -> Option<f32> {
        self.active
            .get(&(id.to_string(), property))
            .map(|tween| tween.to)
    }

    /// All current values, for applying to the tree each frame.
    pub fn values(&self, now: Instant) -> Vec<(String, TweenProperty, f32)> {
        self.active
            .iter()
            .map(|((id, property), tween)| (id.clone(), *property, tween.value(now)))
            .collect()
    }

    /// Prune finished tweens and report each exactly once, with its
    /// final value. Completion callbacks are wired off this.
    pub fn tick(&mut self, now: Instant) -> Vec<(String, TweenProperty, f32)> {
        let mut finished = Vec::new();
        self.active.retain(|(id, property), tween| {
            if tween.finished(now) {
                finished.push((id.clone(), *property, tween.to));
                false
            } else {
                true
            }
        });
        finished
    }

    /// Cancel all tweens for an element.
    pub fn cancel_all(&mut self, id: &str) {
        self.active.retain(|(tween_id, _), _| tween_id != id);
    }

    /// Drop every tween.
    pub fn clear(&mut self) {
        self.active.clear();
    }

    pub fn has_active(&self) -> bool {
        !self.active.is_empty()
    }

    /// Earliest instant at which an active tween finishes.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.active
            .values()
            .map(|tween| tween.start + tween.config.duration)
            .min()
    }
}
