//! Profile card state
//!
//! Holds the hover flag and the motion pipeline behind the person icon's
//! tooltip. The Dioxus component owns one of these per mounted card and
//! forwards pointer events to it; the frame loop calls [`ProfileCardState::tick`].

use crate::analytics::{Analytics, TrackingEvent};
use crate::browser::Browser;
use crate::links::LinkPool;
use crate::motion::{LinearMap, MotionValue, Spring, TILT_SPRING, TOOLTIP_SPRING};

/// Pointer offset → tooltip rotation in degrees
pub const ROTATE_MAP: LinearMap = LinearMap::new((-100.0, 100.0), (-45.0, 45.0));

/// Pointer offset → tooltip horizontal drift in pixels
pub const TRANSLATE_X_MAP: LinearMap = LinearMap::new((-100.0, 100.0), (-50.0, 50.0));

/// Vertical slide (px) of the tooltip before it has entered
const ENTRANCE_SLIDE_PX: f64 = 20.0;

/// Scale of the tooltip before it has entered
const ENTRANCE_SCALE: f64 = 0.6;

/// Resolved tooltip transform for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipStyle {
    pub opacity: f64,
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale: f64,
    pub rotate: f64,
}

impl TooltipStyle {
    /// Inline CSS for the tooltip element.
    ///
    /// The tooltip is anchored at `left: 50%`, so the base `-50%` keeps it
    /// centred before the spring drift is applied.
    pub fn to_css(&self) -> String {
        format!(
            "opacity: {:.3}; transform: translateX(-50%) translate({:.2}px, {:.2}px) scale({:.3}) rotate({:.2}deg);",
            self.opacity.clamp(0.0, 1.0),
            self.translate_x,
            self.translate_y,
            self.scale,
            self.rotate,
        )
    }
}

/// Hover and motion state of one profile card
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileCardState {
    hovered: bool,
    pointer_x: MotionValue,
    rotate: Spring,
    translate_x: Spring,
    entrance: Spring,
}

impl Default for ProfileCardState {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileCardState {
    pub fn new() -> Self {
        Self {
            hovered: false,
            pointer_x: MotionValue::default(),
            rotate: Spring::new(TILT_SPRING, 0.0),
            translate_x: Spring::new(TILT_SPRING, 0.0),
            entrance: Spring::new(TOOLTIP_SPRING, 0.0),
        }
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// The tooltip and highlight overlay exist exactly while hovered.
    pub fn tooltip_visible(&self) -> bool {
        self.hovered
    }

    /// Raw horizontal pointer offset from the icon's centre
    pub fn pointer_offset(&self) -> f64 {
        self.pointer_x.get()
    }

    /// Unsmoothed rotation for the current offset
    pub fn rotate_target(&self) -> f64 {
        ROTATE_MAP.apply(self.pointer_x.get())
    }

    /// Unsmoothed drift for the current offset
    pub fn translate_x_target(&self) -> f64 {
        TRANSLATE_X_MAP.apply(self.pointer_x.get())
    }

    /// Spring-smoothed rotation in degrees
    pub fn rotate(&self) -> f64 {
        self.rotate.value()
    }

    /// Spring-smoothed drift in pixels
    pub fn translate_x(&self) -> f64 {
        self.translate_x.value()
    }

    /// Pointer entered the icon.
    pub fn pointer_enter(&mut self, analytics: &dyn Analytics) {
        self.hovered = true;
        self.entrance.jump(0.0);
        self.entrance.set_target(1.0);
        analytics.track(TrackingEvent::HoveredOnPersonIcon { is_hovered: true });
    }

    /// Pointer left the icon; the offset snaps back to neutral.
    pub fn pointer_leave(&mut self, analytics: &dyn Analytics) {
        self.hovered = false;
        self.entrance.jump(0.0);
        self.set_pointer_offset(0.0);
        analytics.track(TrackingEvent::HoveredOnPersonIcon { is_hovered: false });
    }

    /// Pointer moved to `element_x` within an element `element_width` wide.
    ///
    /// Ignored while not hovered. Returns whether the offset was applied.
    pub fn pointer_move(&mut self, element_x: f64, element_width: f64) -> bool {
        if !self.hovered {
            return false;
        }
        self.set_pointer_offset(element_x - element_width / 2.0)
    }

    fn set_pointer_offset(&mut self, offset: f64) -> bool {
        if !self.pointer_x.set(offset) {
            return false;
        }
        self.rotate.set_target(self.rotate_target());
        self.translate_x.set_target(self.translate_x_target());
        true
    }

    /// Person icon clicked: open a random link from `links`.
    ///
    /// Exactly one event is tracked and one open request made, even when
    /// the pool is empty (the target is then an empty string).
    pub fn click(&self, links: &LinkPool, analytics: &dyn Analytics, browser: &dyn Browser) -> String {
        let link = links.random_link().unwrap_or_default();
        analytics.track(TrackingEvent::ClickedOnPersonIcon { link: link.clone() });
        browser.open_in_new_tab(&link);
        link
    }

    /// Advance the springs by `dt` seconds. Returns whether all are at rest.
    pub fn tick(&mut self, dt: f64) -> bool {
        let rotate = self.rotate.step(dt);
        let translate = self.translate_x.step(dt);
        let entrance = self.entrance.step(dt);
        rotate && translate && entrance
    }

    pub fn is_settled(&self) -> bool {
        self.rotate.is_at_rest() && self.translate_x.is_at_rest() && self.entrance.is_at_rest()
    }

    /// Tooltip transform for the current frame, `None` when hidden.
    pub fn tooltip_style(&self) -> Option<TooltipStyle> {
        if !self.tooltip_visible() {
            return None;
        }

        let progress = self.entrance.value();
        Some(TooltipStyle {
            opacity: progress,
            translate_x: self.translate_x.value(),
            translate_y: ENTRANCE_SLIDE_PX * (1.0 - progress),
            scale: ENTRANCE_SCALE + (1.0 - ENTRANCE_SCALE) * progress,
            rotate: self.rotate.value(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::MemoryAnalytics;
    use crate::browser::MemoryBrowser;

    const FRAME: f64 = 1.0 / 60.0;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {} to be close to {}",
            actual,
            expected
        );
    }

    #[test]
    fn starts_idle() {
        let card = ProfileCardState::new();
        assert!(!card.is_hovered());
        assert!(card.tooltip_style().is_none());
        assert!(card.is_settled());
        assert_eq!(card.pointer_offset(), 0.0);
    }

    #[test]
    fn hover_events_report_new_state() {
        let analytics = MemoryAnalytics::new();
        let mut card = ProfileCardState::new();

        card.pointer_enter(&analytics);
        card.pointer_leave(&analytics);

        assert_eq!(
            analytics.events(),
            vec![
                TrackingEvent::HoveredOnPersonIcon { is_hovered: true },
                TrackingEvent::HoveredOnPersonIcon { is_hovered: false },
            ]
        );
    }

    #[test]
    fn move_ignored_when_not_hovered() {
        let mut card = ProfileCardState::new();
        assert!(!card.pointer_move(90.0, 100.0));
        assert_eq!(card.pointer_offset(), 0.0);
    }

    #[test]
    fn move_offsets_from_centre() {
        let analytics = MemoryAnalytics::new();
        let mut card = ProfileCardState::new();
        card.pointer_enter(&analytics);

        assert!(card.pointer_move(90.0, 100.0));
        assert_eq!(card.pointer_offset(), 40.0);
        assert_close(card.rotate_target(), 18.0);
        assert_close(card.translate_x_target(), 20.0);

        card.pointer_move(30.0, 92.0);
        assert_eq!(card.pointer_offset(), -16.0);
        assert_close(card.rotate_target(), -7.2);
        assert_close(card.translate_x_target(), -8.0);

        card.pointer_move(0.0, 100.0);
        assert_eq!(card.pointer_offset(), -50.0);
    }

    #[test]
    fn leave_resets_offset() {
        let analytics = MemoryAnalytics::new();
        let mut card = ProfileCardState::new();
        card.pointer_enter(&analytics);
        card.pointer_move(100.0, 100.0);
        card.pointer_leave(&analytics);

        assert_eq!(card.pointer_offset(), 0.0);
        assert_eq!(card.rotate_target(), 0.0);
    }

    #[test]
    fn springs_follow_pointer() {
        let analytics = MemoryAnalytics::new();
        let mut card = ProfileCardState::new();
        card.pointer_enter(&analytics);
        card.pointer_move(200.0, 100.0);

        for _ in 0..(60 * 20) {
            if card.tick(FRAME) {
                break;
            }
        }

        assert!(card.is_settled());
        assert_eq!(card.rotate(), 45.0);
        assert_eq!(card.translate_x(), 50.0);
    }

    #[test]
    fn tooltip_enters_from_below() {
        let analytics = MemoryAnalytics::new();
        let mut card = ProfileCardState::new();
        card.pointer_enter(&analytics);

        let first = card.tooltip_style().unwrap();
        assert_close(first.opacity, 0.0);
        assert_close(first.translate_y, 20.0);
        assert_close(first.scale, 0.6);

        for _ in 0..(60 * 5) {
            card.tick(FRAME);
        }
        let settled = card.tooltip_style().unwrap();
        assert_close(settled.opacity, 1.0);
        assert_close(settled.translate_y, 0.0);
        assert_close(settled.scale, 1.0);
    }

    #[test]
    fn click_opens_and_tracks_link() {
        let analytics = MemoryAnalytics::new();
        let browser = MemoryBrowser::new();
        let links = LinkPool::new(vec!["https://a.dev".to_string()]);
        let card = ProfileCardState::new();

        let link = card.click(&links, &analytics, &browser);

        assert_eq!(link, "https://a.dev");
        assert_eq!(browser.opened(), vec!["https://a.dev".to_string()]);
        assert_eq!(
            analytics.events(),
            vec![TrackingEvent::ClickedOnPersonIcon { link: "https://a.dev".into() }]
        );
    }

    #[test]
    fn css_contains_transform_parts() {
        let style = TooltipStyle {
            opacity: 1.0,
            translate_x: 12.0,
            translate_y: 0.0,
            scale: 1.0,
            rotate: -9.5,
        };
        let css = style.to_css();
        assert!(css.starts_with("opacity: 1.000;"));
        assert!(css.contains("translate(12.00px, 0.00px)"));
        assert!(css.contains("rotate(-9.50deg)"));
    }
}
