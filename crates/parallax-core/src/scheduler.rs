//! Fixed-rate frame scheduling.
//!
//! The host offers a frame opportunity per display refresh. The scheduler
//! takes every one of them (so the chain never breaks) but only reports a
//! frame as due once `frame_interval_ms` of wall-clock time has passed.

use crate::constants::FRAME_INTERVAL_MS;
use crate::error::SchedulerError;

/// Host primitive for recurring frame callbacks (e.g. requestAnimationFrame).
pub trait FrameHost {
    type Request: Copy;

    /// Ask for one callback at the next opportunity.
    fn request_frame(&mut self) -> Option<Self::Request>;

    /// Withdraw a request that has not fired yet.
    fn cancel_frame(&mut self, request: Self::Request);
}

/// The single live loop: its generation and the request currently pending.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoopHandle<R> {
    generation: u64,
    pending: Option<R>,
}

impl<R: Copy> LoopHandle<R> {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn pending(&self) -> Option<R> {
        self.pending
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FramePoll {
    /// No loop is active; the host must not re-arm.
    Stopped,
    /// Opportunity consumed without doing work.
    Idle,
    /// Interval elapsed; run one update.
    Due,
}

#[derive(Debug)]
pub struct FrameScheduler<R> {
    frame_interval_ms: f64,
    last_tick_ms: Option<f64>,
    generation: u64,
    handle: Option<LoopHandle<R>>,
}

impl<R: Copy> FrameScheduler<R> {
    pub fn new(frame_interval_ms: f64) -> Self {
        Self {
            frame_interval_ms,
            last_tick_ms: None,
            generation: 0,
            handle: None,
        }
    }

    pub fn frame_interval_ms(&self) -> f64 {
        self.frame_interval_ms
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    pub fn handle(&self) -> Option<&LoopHandle<R>> {
        self.handle.as_ref()
    }

    pub fn last_tick_ms(&self) -> Option<f64> {
        self.last_tick_ms
    }

    /// Acquire the loop and arm the first frame.
    pub fn start<H>(&mut self, host: &mut H) -> Result<u64, SchedulerError>
    where
        H: FrameHost<Request = R>,
    {
        if let Some(h) = &self.handle {
            return Err(SchedulerError::AlreadyRunning {
                generation: h.generation,
            });
        }
        let pending = host.request_frame().ok_or(SchedulerError::RequestRejected)?;
        self.generation += 1;
        self.handle = Some(LoopHandle {
            generation: self.generation,
            pending: Some(pending),
        });
        log::debug!("[frame] loop #{} started", self.generation);
        Ok(self.generation)
    }

    /// Release the loop, withdrawing its pending request. Returns whether a
    /// loop was actually running.
    pub fn stop<H>(&mut self, host: &mut H) -> bool
    where
        H: FrameHost<Request = R>,
    {
        match self.handle.take() {
            Some(handle) => {
                if let Some(request) = handle.pending {
                    host.cancel_frame(request);
                }
                log::debug!("[frame] loop #{} cancelled", handle.generation);
                true
            }
            None => false,
        }
    }

    /// Cancel the current loop (if any) and start a fresh one.
    pub fn restart<H>(&mut self, host: &mut H) -> Result<u64, SchedulerError>
    where
        H: FrameHost<Request = R>,
    {
        self.stop(host);
        self.start(host)
    }

    /// Consume one host opportunity at `now_ms` and re-arm the next one.
    pub fn poll<H>(&mut self, host: &mut H, now_ms: f64) -> FramePoll
    where
        H: FrameHost<Request = R>,
    {
        let Some(handle) = self.handle.as_mut() else {
            return FramePoll::Stopped;
        };

        let due = match self.last_tick_ms {
            None => true,
            Some(last) if now_ms < last => {
                // clock stepped backwards
                self.last_tick_ms = Some(now_ms);
                false
            }
            Some(last) => now_ms - last >= self.frame_interval_ms,
        };
        if due {
            self.last_tick_ms = Some(now_ms);
        }

        handle.pending = host.request_frame();
        if handle.pending.is_none() {
            log::warn!(
                "[frame] host refused the next frame for loop #{}",
                handle.generation
            );
        }

        if due {
            FramePoll::Due
        } else {
            FramePoll::Idle
        }
    }
}

impl<R: Copy> Default for FrameScheduler<R> {
    fn default() -> Self {
        Self::new(FRAME_INTERVAL_MS)
    }
}
