//! Bottom panel that can be dragged between a collapsed preview and full
//! screen, or toggled with the arrow at its top edge.

use std::time::Duration;

/// Fraction of the screen height covered by the collapsed panel.
pub const COLLAPSED_FRACTION: f64 = 0.20;

/// Vertical movement needed before a touch is treated as a drag.
pub const DRAG_START_THRESHOLD: f64 = 20.0;

/// Net movement on release needed to snap to an end state.
pub const RELEASE_THRESHOLD: f64 = 50.0;

pub const ANIMATION_DURATION: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowDirection {
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    pub from: f64,
    pub to: f64,
    pub duration: Duration,
    pub elapsed: Duration,
}

impl Animation {
    pub fn new(from: f64, to: f64) -> Self {
        Self {
            from,
            to,
            duration: ANIMATION_DURATION,
            elapsed: Duration::ZERO,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Eased value at the current elapsed time.
    pub fn value(&self) -> f64 {
        if self.is_finished() {
            return self.to;
        }

        let t = self.elapsed.as_secs_f64() / self.duration.as_secs_f64();
        let eased = t * t * (3.0 - 2.0 * t);

        self.from + (self.to - self.from) * eased
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Drag {
    start_height: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PanelController {
    min_height: f64,
    max_height: f64,
    height: f64,
    expanded: bool,
    drag: Option<Drag>,
    animation: Option<Animation>,
}

impl PanelController {
    /// Non-finite or negative heights are treated as zero.
    pub fn new(screen_height: f64) -> Self {
        let screen_height = if screen_height.is_finite() {
            screen_height.max(0.0)
        } else {
            0.0
        };
        let min_height = screen_height * COLLAPSED_FRACTION;

        Self {
            min_height,
            max_height: screen_height,
            height: min_height,
            expanded: false,
            drag: None,
            animation: None,
        }
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn min_height(&self) -> f64 {
        self.min_height
    }

    pub fn max_height(&self) -> f64 {
        self.max_height
    }

    /// Last committed toggle state. Not affected by drags in progress.
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn animation(&self) -> Option<&Animation> {
        self.animation.as_ref()
    }

    pub fn arrow(&self) -> ArrowDirection {
        if self.expanded {
            ArrowDirection::Down
        } else {
            ArrowDirection::Up
        }
    }

    /// `dy` is the cumulative vertical movement since the touch started,
    /// negative when moving up.
    pub fn on_move(&mut self, dy: f64) {
        let drag = match self.drag {
            Some(drag) => drag,
            None if dy.abs() > DRAG_START_THRESHOLD => {
                self.animation = None;
                let drag = Drag {
                    start_height: self.height,
                };
                self.drag = Some(drag);
                drag
            }
            None => return,
        };

        self.height = self.clamp(drag.start_height - dy);
    }

    pub fn on_release(&mut self, dy: f64) {
        if self.drag.take().is_none() {
            return;
        }

        if dy < -RELEASE_THRESHOLD {
            self.expand();
        } else if dy > RELEASE_THRESHOLD {
            self.collapse();
        }
    }

    pub fn toggle(&mut self) {
        if self.expanded {
            self.collapse();
        } else {
            self.expand();
        }
    }

    pub fn expand(&mut self) {
        self.animate_to(self.max_height);
    }

    pub fn collapse(&mut self) {
        self.animate_to(self.min_height);
    }

    pub fn tick(&mut self, dt: Duration) {
        let Some(animation) = self.animation.as_mut() else {
            return;
        };

        animation.elapsed += dt;
        self.height = animation.value();

        if animation.is_finished() {
            self.expanded = animation.to >= self.max_height;
            self.animation = None;
        }
    }

    fn animate_to(&mut self, target: f64) {
        self.drag = None;
        self.animation = Some(Animation::new(self.height, target));
    }

    fn clamp(&self, height: f64) -> f64 {
        height.clamp(self.min_height, self.max_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: f64 = 800.0;

    fn finish(panel: &mut PanelController) {
        panel.tick(ANIMATION_DURATION);
    }

    #[test]
    fn starts_collapsed() {
        let panel = PanelController::new(SCREEN);

        assert_eq!(panel.height(), 160.0);
        assert_eq!(panel.max_height(), SCREEN);
        assert!(!panel.is_expanded());
        assert_eq!(panel.arrow(), ArrowDirection::Up);
    }

    #[test]
    fn small_moves_are_not_drags() {
        let mut panel = PanelController::new(SCREEN);

        panel.on_move(-15.0);
        assert!(!panel.is_dragging());
        assert_eq!(panel.height(), 160.0);

        panel.on_release(-15.0);
        assert!(panel.animation().is_none());
    }

    #[test]
    fn invalid_screen_height_does_not_panic() {
        for screen in [f64::NAN, f64::INFINITY, -100.0] {
            let mut panel = PanelController::new(screen);

            panel.on_move(-30.0);
            panel.on_release(-80.0);
            finish(&mut panel);

            assert_eq!(panel.height(), 0.0);
        }
    }

    #[test]
    fn drag_needs_more_than_start_threshold() {
        let mut panel = PanelController::new(SCREEN);

        panel.on_move(-DRAG_START_THRESHOLD);
        assert!(!panel.is_dragging());
        panel.on_move(DRAG_START_THRESHOLD);
        assert!(!panel.is_dragging());
        assert_eq!(panel.height(), 160.0);

        panel.on_move(-21.0);
        assert!(panel.is_dragging());
    }

    #[test]
    fn release_exactly_at_threshold_keeps_height() {
        let mut panel = PanelController::new(SCREEN);

        panel.on_move(-RELEASE_THRESHOLD);
        panel.on_release(-RELEASE_THRESHOLD);
        assert!(panel.animation().is_none());
        assert_eq!(panel.height(), 210.0);

        panel.on_move(RELEASE_THRESHOLD);
        panel.on_release(RELEASE_THRESHOLD);
        assert!(panel.animation().is_none());
        assert_eq!(panel.height(), 160.0);
    }

    #[test]
    fn short_downward_release_keeps_height() {
        let mut panel = PanelController::new(SCREEN);
        panel.toggle();
        finish(&mut panel);

        panel.on_move(35.0);
        panel.on_release(35.0);
        finish(&mut panel);

        assert_eq!(panel.height(), 765.0);
        assert!(panel.is_expanded());
    }

    #[test]
    fn drag_tracks_height_continuously() {
        let mut panel = PanelController::new(SCREEN);

        panel.on_move(-30.0);
        assert!(panel.is_dragging());
        assert_eq!(panel.height(), 190.0);

        panel.on_move(-200.0);
        assert_eq!(panel.height(), 360.0);

        panel.on_move(-120.0);
        assert_eq!(panel.height(), 280.0);
    }

    #[test]
    fn drag_height_is_bounded() {
        let mut panel = PanelController::new(SCREEN);

        panel.on_move(-5000.0);
        assert_eq!(panel.height(), SCREEN);

        panel.on_move(5000.0);
        assert_eq!(panel.height(), 160.0);
    }

    #[test]
    fn release_upward_past_threshold_expands() {
        let mut panel = PanelController::new(SCREEN);

        panel.on_move(-80.0);
        panel.on_release(-80.0);
        assert!(!panel.is_expanded());

        finish(&mut panel);
        assert_eq!(panel.height(), SCREEN);
        assert!(panel.is_expanded());
        assert_eq!(panel.arrow(), ArrowDirection::Down);
    }

    #[test]
    fn release_downward_past_threshold_collapses() {
        let mut panel = PanelController::new(SCREEN);
        panel.toggle();
        finish(&mut panel);

        panel.on_move(60.0);
        panel.on_move(400.0);
        panel.on_release(400.0);
        finish(&mut panel);

        assert_eq!(panel.height(), 160.0);
        assert!(!panel.is_expanded());
    }

    #[test]
    fn release_within_threshold_keeps_height() {
        let mut panel = PanelController::new(SCREEN);

        panel.on_move(-45.0);
        panel.on_release(-45.0);

        assert!(panel.animation().is_none());
        assert_eq!(panel.height(), 205.0);

        finish(&mut panel);
        assert_eq!(panel.height(), 205.0);
        assert!(!panel.is_expanded());
    }

    #[test]
    fn arrow_ignores_live_drag_position() {
        let mut panel = PanelController::new(SCREEN);

        panel.on_move(-640.0);
        assert_eq!(panel.height(), SCREEN);
        assert_eq!(panel.arrow(), ArrowDirection::Up);
    }

    #[test]
    fn toggle_switches_between_end_heights() {
        let mut panel = PanelController::new(SCREEN);

        panel.on_move(-45.0);
        panel.on_release(-45.0);

        panel.toggle();
        finish(&mut panel);
        assert_eq!(panel.height(), SCREEN);

        panel.toggle();
        finish(&mut panel);
        assert_eq!(panel.height(), 160.0);
    }

    #[test]
    fn toggle_from_mid_height_when_expanded_collapses() {
        let mut panel = PanelController::new(SCREEN);
        panel.toggle();
        finish(&mut panel);

        panel.on_move(30.0);
        panel.on_release(30.0);
        assert_eq!(panel.height(), 770.0);

        panel.toggle();
        finish(&mut panel);
        assert_eq!(panel.height(), 160.0);
        assert!(!panel.is_expanded());
    }

    #[test]
    fn animation_progresses_over_fixed_duration() {
        let mut panel = PanelController::new(SCREEN);
        panel.toggle();

        panel.tick(Duration::from_millis(150));
        let midway = panel.height();
        assert!(midway > 160.0 && midway < SCREEN);
        assert!(!panel.is_expanded());

        panel.tick(Duration::from_millis(150));
        assert_eq!(panel.height(), SCREEN);
        assert!(panel.is_expanded());
    }

    #[test]
    fn drag_cancels_running_animation() {
        let mut panel = PanelController::new(SCREEN);
        panel.toggle();
        panel.tick(Duration::from_millis(100));
        let height = panel.height();

        panel.on_move(25.0);
        assert!(panel.animation().is_none());
        assert_eq!(panel.height(), (height - 25.0).max(160.0));

        finish(&mut panel);
        assert!(!panel.is_expanded());
    }
}
