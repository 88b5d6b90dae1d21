//! User-triggered invocation events.

/// A click on the `invoke` control.
///
/// Handlers call [`InvokeEvent::prevent_default`] so the control's own
/// action (navigation) does not run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvokeEvent {
    default_prevented: bool,
}

impl InvokeEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}
