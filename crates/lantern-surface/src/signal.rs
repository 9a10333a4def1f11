//! Signals emitted by the page surface.

/// Ordered notifications from the page surface to the chrome layer.
///
/// Signals are appended to a pending queue as engine callbacks fire and
/// drained by the event loop in push order. They carry only what the
/// chrome needs; everything else is read from the surface snapshot.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceSignal {
    /// The loading flag flipped. Carries no payload — the consumer
    /// re-reads back/forward reachability from the snapshot.
    LoadingChanged,
    /// Estimated load progress moved. Value is in `[0, 1]`.
    ProgressChanged(f64),
    /// The document title changed.
    TitleChanged { title: String },
    /// A load completed. Carries the URL the engine reported.
    NavigationFinished { url: String },
    /// A load failed. Carries a user-presentable message.
    NavigationFailed { message: String },
}
