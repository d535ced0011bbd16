//! Interaction state supplied by the host

/// Control state a style resolves against.
///
/// Hosts pass this explicitly on every resolve; styles never read ambient
/// environment state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct InteractionState {
    pub enabled: bool,
    pub pressed: bool,
    pub focused: bool,
    pub has_error: bool,
}

impl InteractionState {
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn pressed(mut self, pressed: bool) -> Self {
        self.pressed = pressed;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn has_error(mut self, has_error: bool) -> Self {
        self.has_error = has_error;
        self
    }

    /// Shorthand for a disabled control
    pub fn disabled() -> Self {
        Self::default().enabled(false)
    }
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            enabled: true,
            pressed: false,
            focused: false,
            has_error: false,
        }
    }
}
