// Page lifecycle as seen by the render loop. A `pagehide` with
// `persisted == true` means the page is entering the back/forward cache and
// may come back through `pageshow`, so only a non-persisted hide is final.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageEvent {
    Hide { persisted: bool },
    Show { persisted: bool },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Running,
    /// Frames stopped, GPU kept for a bfcache restore.
    Suspended,
    /// Frames stopped and GPU released. Terminal.
    Stopped,
}

impl LoopState {
    pub fn on(self, event: PageEvent) -> LoopState {
        match (self, event) {
            (LoopState::Stopped, _) => LoopState::Stopped,
            (_, PageEvent::Hide { persisted: false }) => LoopState::Stopped,
            (LoopState::Running, PageEvent::Hide { persisted: true }) => LoopState::Suspended,
            (LoopState::Suspended, PageEvent::Show { persisted: true }) => LoopState::Running,
            (state, _) => state,
        }
    }

    #[inline]
    pub fn is_running(self) -> bool {
        self == LoopState::Running
    }

    /// GPU resources are only dropped once the page is gone for good.
    #[inline]
    pub fn releases_gpu(self) -> bool {
        self == LoopState::Stopped
    }
}
