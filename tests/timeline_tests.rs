// Host-side tests for the one-shot entrance timeline.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod ease {
    include!("../src/core/ease.rs");
}
mod timeline {
    include!("../src/core/timeline.rs");
}

use timeline::*;

const DT: f32 = 1.0 / 60.0;

fn record(tl: &mut Timeline, dt: f32) -> Vec<(TimelineProperty, f32)> {
    let mut out = Vec::new();
    tl.advance(dt, |p, v| out.push((p, v)));
    out
}

#[test]
fn entrance_entries_play_back_to_back() {
    let tl = Timeline::entrance();
    let entries: Vec<_> = tl.entries().copied().collect();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].property, TimelineProperty::ObjectScale);
    assert_eq!(entries[1].property, TimelineProperty::NavOffsetPercent);
    assert_eq!(entries[2].property, TimelineProperty::TitleOpacity);
    assert_eq!(entries[0].start, 0.0);
    assert!((entries[1].start - 0.9).abs() < 1e-6);
    assert!((entries[2].start - 1.8).abs() < 1e-6);
    assert!((tl.duration() - 2.7).abs() < 1e-5);
    assert_eq!((entries[1].from, entries[1].to), (-100.0, 0.0));
}

#[test]
fn first_tick_applies_every_from_value() {
    let mut tl = Timeline::entrance();
    let first = record(&mut tl, DT);
    for (prop, from) in [
        (TimelineProperty::ObjectScale, 0.0),
        (TimelineProperty::NavOffsetPercent, -100.0),
        (TimelineProperty::TitleOpacity, 0.0),
    ] {
        assert!(first.contains(&(prop, from)), "{prop:?} from-value missing");
    }
    assert!(!tl.is_finished());
}

#[test]
fn later_entries_wait_for_their_slot() {
    let mut tl = Timeline::entrance();
    record(&mut tl, DT);
    for _ in 0..30 {
        let ups = record(&mut tl, DT);
        assert!(ups.iter().all(|(p, _)| *p == TimelineProperty::ObjectScale));
    }
}

#[test]
fn runs_to_final_values_in_order() {
    let mut tl = Timeline::entrance();
    let mut last: Vec<(TimelineProperty, f32, usize)> = Vec::new();
    let mut last_scale = -1.0;
    for frame in 0..400 {
        for (p, v) in record(&mut tl, DT) {
            if p == TimelineProperty::ObjectScale {
                assert!(v >= last_scale, "scale never shrinks");
                last_scale = v;
            }
            last.retain(|(q, _, _)| *q != p);
            last.push((p, v, frame));
        }
    }
    assert!(tl.is_finished());
    let order: Vec<_> = last.iter().map(|(p, v, _)| (*p, *v)).collect();
    assert_eq!(
        order,
        vec![
            (TimelineProperty::ObjectScale, 1.0),
            (TimelineProperty::NavOffsetPercent, 0.0),
            (TimelineProperty::TitleOpacity, 1.0),
        ]
    );
    // everything settled well inside the 400 frames
    assert!(last.iter().all(|(_, _, f)| *f < 200));
}

#[test]
fn finished_timeline_stays_silent() {
    let mut tl = Timeline::entrance();
    record(&mut tl, 0.0);
    record(&mut tl, 10.0);
    assert!(tl.is_finished());
    for _ in 0..10 {
        assert!(record(&mut tl, 1.0).is_empty());
    }
}

#[test]
fn duration_override_and_zero_length_entries() {
    let mut tl = Timeline::new(0.9)
        .then_with_duration(TimelineProperty::TitleOpacity, 0.0, 1.0, 0.0)
        .then_with_duration(TimelineProperty::ObjectScale, 0.0, 2.0, 0.5);
    assert!((tl.duration() - 0.5).abs() < 1e-6);
    let first = record(&mut tl, 0.0);
    assert!(first.contains(&(TimelineProperty::TitleOpacity, 1.0)));
    record(&mut tl, 0.6);
    assert!(tl.is_finished());
}

#[test]
fn empty_timeline_finishes_on_start() {
    let mut tl = Timeline::new(0.9);
    assert!(!tl.is_finished());
    assert!(record(&mut tl, DT).is_empty());
    assert!(tl.is_finished());
}
