use std::cell::Cell;

/// Fire-once gate. Each animator owns its own, so two page instances never
/// share trigger state.
#[derive(Debug, Default)]
pub struct Latch {
    fired: Cell<bool>,
}

impl Latch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` on the first call only.
    pub fn fire(&self) -> bool {
        !self.fired.replace(true)
    }

    pub fn is_fired(&self) -> bool {
        self.fired.get()
    }
}
