//! Open/closed state for floating panels (mobile menu, chat widget).

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PanelState {
    open: bool,
}

impl PanelState {
    pub fn closed() -> Self {
        Self { open: false }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Flip the panel and return the new open flag.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        assert!(!PanelState::default().is_open());
        assert_eq!(PanelState::default(), PanelState::closed());
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut panel = PanelState::closed();
        assert!(panel.toggle());
        assert!(!panel.toggle());
        assert_eq!(panel, PanelState::closed());
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut panel = PanelState::closed();
        panel.toggle();
        assert!(panel.is_open());
        panel.close();
        panel.close();
        assert!(!panel.is_open());
    }
}
