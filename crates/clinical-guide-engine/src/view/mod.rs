//! Interaction state owned by a rendered view.
//!
//! Content is immutable; everything a user can change lives here and is
//! scoped to one view instance.

mod toggle;
mod treatment;

pub use toggle::{SectionId, SectionToggle, SectionToggles};
pub use treatment::TreatmentState;

use crate::filter::ResourceFilter;
use crate::models::Severity;

/// State of one disorder page: the screening and diagnosis sections plus the
/// treatment selector.
#[derive(Debug, Clone, PartialEq)]
pub struct DisorderView {
    screening: SectionId,
    diagnosis: SectionId,
    sections: SectionToggles,
    treatment: TreatmentState,
}

impl DisorderView {
    pub fn new(treatment: TreatmentState) -> Self {
        let mut sections = SectionToggles::new();
        let screening = sections.register();
        let diagnosis = sections.register();
        Self {
            screening,
            diagnosis,
            sections,
            treatment,
        }
    }

    pub fn screening(&self) -> SectionId {
        self.screening
    }

    pub fn diagnosis(&self) -> SectionId {
        self.diagnosis
    }

    pub fn treatment(&self) -> TreatmentState {
        self.treatment
    }

    pub fn is_expanded(&self, section: SectionId) -> bool {
        self.sections.is_expanded(section)
    }

    pub fn toggle_section(&mut self, section: SectionId) -> bool {
        self.sections.toggle(section)
    }

    pub fn select_severity(&mut self, severity: Severity) {
        self.treatment.select_severity(severity);
    }

    pub fn select_filter(&mut self, filter: ResourceFilter) {
        self.treatment.select_filter(filter);
    }
}

impl Default for DisorderView {
    fn default() -> Self {
        Self::new(TreatmentState::default())
    }
}
