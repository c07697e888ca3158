use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use ticktack_ports::{FrameCallback, FrameScheduler};

/// In-process frame scheduler
///
/// Callbacks requested through [`FrameScheduler::request_frame`] wait until
/// the host calls [`run_frame`](Self::run_frame). A frame runs exactly the
/// callbacks queued before it started; anything requested while it runs
/// lands in the next frame.
#[derive(Default)]
pub struct FrameQueue {
    pending: RefCell<VecDeque<FrameCallback>>,
    frames_run: Cell<u64>,
}

impl FrameQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one frame, returning how many callbacks it ran
    pub fn run_frame(&self) -> usize {
        let batch = std::mem::take(&mut *self.pending.borrow_mut());
        let count = batch.len();

        for callback in batch {
            callback();
        }

        self.frames_run.set(self.frames_run.get() + 1);
        count
    }

    /// Run `frames` frames back to back, returning the total callbacks run
    pub fn run_frames(&self, frames: usize) -> usize {
        (0..frames).map(|_| self.run_frame()).sum()
    }

    /// Callbacks waiting for the next frame
    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Frames run so far
    pub fn frames_run(&self) -> u64 {
        self.frames_run.get()
    }
}

impl FrameScheduler for FrameQueue {
    fn request_frame(&self, callback: FrameCallback) {
        self.pending.borrow_mut().push_back(callback);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn test_callbacks_run_in_request_order() {
        let queue = FrameQueue::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        for i in 0..3 {
            let log = log.clone();
            queue.request_frame(Box::new(move || log.borrow_mut().push(i)));
        }

        assert_eq!(queue.pending(), 3);
        assert_eq!(queue.run_frame(), 3);
        assert_eq!(*log.borrow(), vec![0, 1, 2]);
        assert_eq!(queue.pending(), 0);
        assert_eq!(queue.frames_run(), 1);
    }

    #[test]
    fn test_requests_during_frame_wait_for_next() {
        let queue = Rc::new(FrameQueue::new());
        let hits = Rc::new(Cell::new(0));

        let inner_queue = queue.clone();
        let inner_hits = hits.clone();
        queue.request_frame(Box::new(move || {
            let hits = inner_hits.clone();
            inner_queue.request_frame(Box::new(move || hits.set(hits.get() + 1)));
        }));

        assert_eq!(queue.run_frame(), 1);
        assert_eq!(hits.get(), 0);
        assert_eq!(queue.pending(), 1);

        assert_eq!(queue.run_frame(), 1);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_empty_frames_still_count() {
        let queue = FrameQueue::new();
        assert_eq!(queue.run_frames(4), 0);
        assert_eq!(queue.frames_run(), 4);
    }
}
