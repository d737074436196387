use super::feedback::CopyFeedback;

/// Pointer presence over a code block.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HoverRegion {
    hovering: bool,
}

impl HoverRegion {
    pub fn enter(&mut self) {
        self.hovering = true;
    }

    pub fn leave(&mut self) {
        self.hovering = false;
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    /// The copy control stays visible while its confirmation is showing,
    /// even after the pointer has left the block.
    pub fn control_visible(&self, feedback: CopyFeedback) -> bool {
        self.hovering || feedback.is_copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_event_wins() {
        let mut region = HoverRegion::default();
        for _ in 0..10 {
            region.enter();
            region.leave();
        }
        assert!(!region.is_hovering());

        region.leave();
        region.enter();
        assert!(region.is_hovering());
    }

    #[test]
    fn visible_while_copied_after_leave() {
        let mut region = HoverRegion::default();
        assert!(!region.control_visible(CopyFeedback::Idle));

        region.enter();
        assert!(region.control_visible(CopyFeedback::Idle));

        region.leave();
        assert!(region.control_visible(CopyFeedback::Copied));
        assert!(!region.control_visible(CopyFeedback::Idle));
    }
}
