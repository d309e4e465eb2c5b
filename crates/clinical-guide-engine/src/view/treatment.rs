use crate::filter::ResourceFilter;
use crate::models::{Resource, Severity, SeverityContent, Treatment};
use serde::{Deserialize, Serialize};

/// Severity selector plus resource filter for a treatment block.
///
/// The two selections are independent: changing severity keeps the filter
/// and changing the filter keeps the severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TreatmentState {
    pub severity: Severity,
    pub filter: ResourceFilter,
}

impl TreatmentState {
    pub fn new(severity: Severity, filter: ResourceFilter) -> Self {
        Self { severity, filter }
    }

    pub fn select_severity(&mut self, severity: Severity) {
        self.severity = severity;
    }

    pub fn select_filter(&mut self, filter: ResourceFilter) {
        self.filter = filter;
    }

    /// Copy of this state with a different severity.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.select_severity(severity);
        self
    }

    /// Copy of this state with a different filter.
    pub fn with_filter(mut self, filter: ResourceFilter) -> Self {
        self.select_filter(filter);
        self
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Content of the selected tier.
    pub fn content<'a>(&self, treatment: &'a Treatment) -> &'a SeverityContent {
        treatment.tier(self.severity)
    }

    /// Resources of the selected tier that pass the filter.
    pub fn visible_resources<'a>(&self, treatment: &'a Treatment) -> Vec<&'a Resource> {
        self.filter.apply(&self.content(treatment).resources)
    }
}
