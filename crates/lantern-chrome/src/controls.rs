//! Toolbar control state and the navigation-state projection.

use lantern_common::SurfaceSnapshot;

/// Enabled state of the history buttons.
///
/// Mutated only by applying [`ControlsState::project`] output — the
/// buttons never change independently of the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ControlsState {
    pub back_enabled: bool,
    pub forward_enabled: bool,
}

impl ControlsState {
    /// Project button state from a surface snapshot.
    ///
    /// Pure and stateless: the buttons mirror the snapshot exactly,
    /// with no debouncing and nothing retained between calls.
    pub fn project(snapshot: &SurfaceSnapshot) -> Self {
        Self {
            back_enabled: snapshot.can_go_back,
            forward_enabled: snapshot.can_go_forward,
        }
    }

    /// The launch state: nothing to go back or forward to yet.
    pub fn disabled() -> Self {
        Self::default()
    }
}

/// Visibility and value of the load progress indicator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressState {
    pub visible: bool,
    pub value: f64,
}

impl ProgressState {
    /// Project the indicator from a progress value in `[0, 1]`.
    ///
    /// The bar shows while a load is under way and hides the moment
    /// progress reaches 1.0; the value tracks progress exactly.
    pub fn from_progress(value: f64) -> Self {
        Self {
            visible: value < 1.0,
            value,
        }
    }

    /// The idle state: hidden and zeroed.
    pub fn idle() -> Self {
        Self {
            visible: false,
            value: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_mirrors_reachability_exactly() {
        for back in [false, true] {
            for forward in [false, true] {
                let snapshot = SurfaceSnapshot {
                    can_go_back: back,
                    can_go_forward: forward,
                    ..Default::default()
                };
                let controls = ControlsState::project(&snapshot);
                assert_eq!(controls.back_enabled, back);
                assert_eq!(controls.forward_enabled, forward);
            }
        }
    }

    #[test]
    fn launch_state_has_both_buttons_disabled() {
        let controls = ControlsState::project(&SurfaceSnapshot::default());
        assert_eq!(controls, ControlsState::disabled());
        assert!(!controls.back_enabled);
        assert!(!controls.forward_enabled);
    }

    #[test]
    fn projection_ignores_loading_and_progress() {
        let snapshot = SurfaceSnapshot {
            is_loading: true,
            estimated_progress: 0.5,
            ..Default::default()
        };
        assert_eq!(
            ControlsState::project(&snapshot),
            ControlsState::disabled()
        );
    }

    #[test]
    fn progress_visible_strictly_below_one() {
        for value in [0.0, 0.1, 0.4, 0.7, 0.999] {
            let progress = ProgressState::from_progress(value);
            assert!(progress.visible, "expected visible at {value}");
            assert_eq!(progress.value, value);
        }
    }

    #[test]
    fn progress_hides_exactly_at_one() {
        let progress = ProgressState::from_progress(1.0);
        assert!(!progress.visible);
        assert_eq!(progress.value, 1.0);
    }

    #[test]
    fn progress_sequence_shows_then_hides() {
        let states: Vec<ProgressState> = [0.0, 0.5, 1.0]
            .iter()
            .map(|&p| ProgressState::from_progress(p))
            .collect();

        assert_eq!(
            states.iter().map(|s| s.visible).collect::<Vec<_>>(),
            vec![true, true, false]
        );
        assert_eq!(
            states.iter().map(|s| s.value).collect::<Vec<_>>(),
            vec![0.0, 0.5, 1.0]
        );
    }

    #[test]
    fn idle_is_hidden_and_zeroed() {
        let idle = ProgressState::idle();
        assert!(!idle.visible);
        assert_eq!(idle.value, 0.0);
    }
}
