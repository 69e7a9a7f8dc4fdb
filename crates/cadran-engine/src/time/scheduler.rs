use std::time::Duration;

/// Host redraw seam.
///
/// The clock drives its own animation: every paint ends by asking the host
/// for one future frame, and a mode switch asks for one immediate frame.
/// There is no cancellation; the loop halts when the host stops delivering
/// paint callbacks (widget detached, window closed).
///
/// Implementations forward to the host event loop (an event-loop proxy, a
/// timer wheel, a channel); tests record the requests.
pub trait RedrawScheduler {
    /// Asks the host to deliver another frame after `delay`.
    ///
    /// `Duration::ZERO` means "as soon as possible".
    fn request_redraw(&self, delay: Duration);
}
