/// Zero-argument callback run on the next frame
pub type FrameCallback = Box<dyn FnOnce() + 'static>;

/// Port for the host's per-frame scheduling primitive
///
/// Implementations run each requested callback once, before the next
/// repaint. Callbacks requested while a frame is running are deferred to the
/// following frame, in request order.
pub trait FrameScheduler {
    /// Queue `callback` for the next frame
    fn request_frame(&self, callback: FrameCallback);
}
