use crate::constants::{NAV_SELECTOR, TITLE_SELECTOR};
use crate::core::timeline::TimelineProperty;
use crate::dom;
use web_sys as web;

/// Apply one timeline value to the page chrome drawn over the canvas.
///
/// Missing elements are skipped so the remaining entries still play.
pub fn apply(document: &web::Document, property: TimelineProperty, value: f32) {
    match property {
        TimelineProperty::NavOffsetPercent => {
            dom::set_style_all(
                document,
                NAV_SELECTOR,
                "transform",
                &format!("translateY({value}%)"),
            );
        }
        TimelineProperty::TitleOpacity => {
            dom::set_style_all(document, TITLE_SELECTOR, "opacity", &format!("{value}"));
        }
        // mesh scale is owned by the scene
        TimelineProperty::ObjectScale => {}
    }
}
