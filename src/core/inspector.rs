//! Core domain: frame inspector for stepping the simulation one tick at a time.

/// While enabled, the simulation only advances on an explicit step request. Rendering and input
/// processing are unaffected.
#[derive(Debug, Clone, Default)]
pub struct FrameInspector {
    pub enabled: bool,
    step_requested: bool,
}

impl FrameInspector {
    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
        self.step_requested = false;
    }

    /// Ask for one tick. Ignored while the inspector is off.
    pub fn request_step(&mut self) {
        if self.enabled {
            self.step_requested = true;
        }
    }

    #[cfg(test)]
    pub fn step_pending(&self) -> bool {
        self.step_requested
    }

    /// Whether this frame may tick. Consumes a pending step.
    pub fn can_tick(&mut self) -> bool {
        if !self.enabled {
            return true;
        }

        std::mem::take(&mut self.step_requested)
    }
}
