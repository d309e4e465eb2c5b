use serde::Serialize;

/// Expand/collapse flag for one content block. Starts collapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SectionToggle {
    expanded: bool,
}

impl SectionToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Flips the flag and returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.expanded = !self.expanded;
        self.expanded
    }

    pub fn set_expanded(&mut self, expanded: bool) {
        self.expanded = expanded;
    }
}

/// Handle to a toggle registered in a [`SectionToggles`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SectionId(usize);

/// Arena of independent section toggles.
///
/// Each registered section gets its own slot; toggling one slot never
/// touches another. Unknown ids read as collapsed and ignore toggles.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SectionToggles {
    toggles: Vec<SectionToggle>,
}

impl SectionToggles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a collapsed section and returns its id.
    pub fn register(&mut self) -> SectionId {
        self.toggles.push(SectionToggle::new());
        SectionId(self.toggles.len() - 1)
    }

    pub fn is_expanded(&self, id: SectionId) -> bool {
        self.toggles
            .get(id.0)
            .is_some_and(SectionToggle::is_expanded)
    }

    /// Flips one section and returns its new state.
    pub fn toggle(&mut self, id: SectionId) -> bool {
        match self.toggles.get_mut(id.0) {
            Some(toggle) => toggle.toggle(),
            None => {
                log::warn!("Ignoring toggle for unregistered section {}", id.0);
                false
            }
        }
    }
}
