//! Signal-to-update reflection.
//!
//! The pure half of the event loop: each drained surface signal maps
//! to the toolbar updates that keep the controls consistent with the
//! surface snapshot. Nothing here touches a webview, which is what
//! makes the reflection contract testable end to end.

use lantern_chrome::{ChromeUpdate, ControlsState, ProgressState};
use lantern_common::SurfaceSnapshot;
use lantern_surface::SurfaceSignal;

/// Toolbar updates for one signal, given the snapshot taken at drain
/// time.
pub(super) fn updates_for_signal(
    signal: &SurfaceSignal,
    snapshot: &SurfaceSnapshot,
) -> Vec<ChromeUpdate> {
    match signal {
        SurfaceSignal::LoadingChanged => {
            let controls = ControlsState::project(snapshot);
            vec![ChromeUpdate::Controls {
                back_enabled: controls.back_enabled,
                forward_enabled: controls.forward_enabled,
            }]
        }
        SurfaceSignal::ProgressChanged(p) => {
            let progress = ProgressState::from_progress(*p);
            vec![ChromeUpdate::Progress {
                visible: progress.visible,
                value: progress.value,
                animate: true,
            }]
        }
        // The window title is applied directly; the toolbar shows nothing.
        SurfaceSignal::TitleChanged { .. } => Vec::new(),
        SurfaceSignal::NavigationFinished { url } => {
            // Snap the bar back to idle for the next load. It is
            // already hidden by the time progress reached 1.0.
            let idle = ProgressState::idle();
            vec![
                ChromeUpdate::Progress {
                    visible: idle.visible,
                    value: idle.value,
                    animate: false,
                },
                ChromeUpdate::Address { url: url.clone() },
            ]
        }
        SurfaceSignal::NavigationFailed { message } => vec![ChromeUpdate::Alert {
            message: message.clone(),
        }],
    }
}
