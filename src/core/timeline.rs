use super::constants::{NAV_OFFSET_FROM_PERCENT, TIMELINE_DEFAULT_SEC};
use super::ease::{lerp, Ease};
use smallvec::SmallVec;

/// Properties the entrance timeline animates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimelineProperty {
    /// Uniform scale of the sphere mesh.
    ObjectScale,
    /// Vertical offset of the navigation bar, in percent of its height.
    NavOffsetPercent,
    /// Opacity of the page title.
    TitleOpacity,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimelineEntry {
    pub property: TimelineProperty,
    pub from: f32,
    pub to: f32,
    pub duration: f32,
    pub start: f32,
}

impl TimelineEntry {
    #[inline]
    pub fn end(&self) -> f32 {
        self.start + self.duration
    }
}

#[derive(Clone, Copy, Debug)]
struct Slot {
    entry: TimelineEntry,
    done: bool,
}

/// One-shot sequence of property tweens.
///
/// Entries are appended back-to-back. The first `advance` writes every
/// entry's from-value, then each entry plays once and emits its final
/// value exactly once. There is no way to rewind or restart.
#[derive(Clone, Debug)]
pub struct Timeline {
    slots: SmallVec<[Slot; 4]>,
    default_duration: f32,
    ease: Ease,
    elapsed: f32,
    started: bool,
}

impl Timeline {
    pub fn new(default_duration: f32) -> Self {
        Self {
            slots: SmallVec::new(),
            default_duration: default_duration.max(0.0),
            ease: Ease::Power1Out,
            elapsed: 0.0,
            started: false,
        }
    }

    /// Startup sequence: sphere grows in, nav slides down, title fades in.
    pub fn entrance() -> Self {
        Self::new(TIMELINE_DEFAULT_SEC)
            .then(TimelineProperty::ObjectScale, 0.0, 1.0)
            .then(TimelineProperty::NavOffsetPercent, NAV_OFFSET_FROM_PERCENT, 0.0)
            .then(TimelineProperty::TitleOpacity, 0.0, 1.0)
    }

    pub fn then(self, property: TimelineProperty, from: f32, to: f32) -> Self {
        let duration = self.default_duration;
        self.then_with_duration(property, from, to, duration)
    }

    pub fn then_with_duration(
        mut self,
        property: TimelineProperty,
        from: f32,
        to: f32,
        duration: f32,
    ) -> Self {
        let start = self.duration();
        self.slots.push(Slot {
            entry: TimelineEntry {
                property,
                from,
                to,
                duration: duration.max(0.0),
                start,
            },
            done: false,
        });
        self
    }

    /// Total length in seconds.
    pub fn duration(&self) -> f32 {
        self.slots
            .iter()
            .map(|s| s.entry.end())
            .fold(0.0, f32::max)
    }

    pub fn entries(&self) -> impl Iterator<Item = &TimelineEntry> {
        self.slots.iter().map(|s| &s.entry)
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.started && self.slots.iter().all(|s| s.done)
    }

    /// Step the playhead and hand each changed property to `apply`.
    pub fn advance(&mut self, dt_sec: f32, mut apply: impl FnMut(TimelineProperty, f32)) {
        if !self.started {
            self.started = true;
            for slot in &self.slots {
                apply(slot.entry.property, slot.entry.from);
            }
        } else {
            self.elapsed += if dt_sec.is_finite() { dt_sec.max(0.0) } else { 0.0 };
        }

        let was_finished = self.slots.iter().all(|s| s.done);
        for slot in self.slots.iter_mut().filter(|s| !s.done) {
            let e = slot.entry;
            if self.elapsed < e.start {
                continue;
            }
            let t = if e.duration > 0.0 {
                ((self.elapsed - e.start) / e.duration).min(1.0)
            } else {
                1.0
            };
            if t >= 1.0 {
                slot.done = true;
                apply(e.property, e.to);
            } else {
                apply(e.property, lerp(e.from, e.to, self.ease.apply(t)));
            }
        }
        if !was_finished && self.is_finished() {
            log::info!("[timeline] entrance finished after {:.2}s", self.elapsed);
        }
    }
}
