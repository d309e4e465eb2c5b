//! Built-in clinical content.
//!
//! The tables are assembled once per process and never change afterwards;
//! [`ContentStore::global`] hands out the shared instance.

mod anxiety;
mod depression;
mod home;
mod substance_use;

use crate::models::{DisorderId, DisorderRecord, HomeContent, Notice};
use std::collections::BTreeMap;
use std::sync::LazyLock;

static BUILTIN: LazyLock<ContentStore> = LazyLock::new(ContentStore::builtin);

/// Read-only lookup of disorder records plus home page content.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentStore {
    disorders: BTreeMap<DisorderId, DisorderRecord>,
    home: HomeContent,
    disorder_notice: Notice,
}

impl ContentStore {
    /// The built-in content, shared for the lifetime of the process.
    pub fn global() -> &'static ContentStore {
        &BUILTIN
    }

    pub fn new(
        disorders: impl IntoIterator<Item = (DisorderId, DisorderRecord)>,
        home: HomeContent,
        disorder_notice: Notice,
    ) -> Self {
        Self {
            disorders: disorders.into_iter().collect(),
            home,
            disorder_notice,
        }
    }

    fn builtin() -> Self {
        log::debug!("Building clinical content tables");
        Self::new(
            [
                (DisorderId::Depression, depression::record()),
                (DisorderId::Anxiety, anxiety::record()),
                (DisorderId::SubstanceUse, substance_use::record()),
            ],
            home::content(),
            home::disorder_notice(),
        )
    }

    pub fn get(&self, id: DisorderId) -> Option<&DisorderRecord> {
        self.disorders.get(&id)
    }

    /// Records in identifier order.
    pub fn disorders(&self) -> impl Iterator<Item = (DisorderId, &DisorderRecord)> {
        self.disorders.iter().map(|(id, record)| (*id, record))
    }

    pub fn home(&self) -> &HomeContent {
        &self.home
    }

    /// Notice shown at the foot of every disorder page.
    pub fn disorder_notice(&self) -> &Notice {
        &self.disorder_notice
    }
}

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NO_LINK, ResourceType, Severity};

    #[test]
    fn test_every_disorder_is_present() {
        let store = ContentStore::global();
        for id in DisorderId::ALL {
            assert!(store.get(id).is_some(), "missing record for {id}");
        }
        assert_eq!(store.disorders().count(), 3);
    }

    #[test]
    fn test_global_is_built_once() {
        let first = ContentStore::global() as *const ContentStore;
        let second = ContentStore::global() as *const ContentStore;
        assert_eq!(first, second);
    }

    #[test]
    fn test_every_tier_has_content() {
        for (id, record) in ContentStore::global().disorders() {
            for severity in Severity::ALL {
                let tier = record.treatment.tier(severity);
                assert!(!tier.description.is_empty(), "{id}/{severity}");
                assert!(!tier.psychotherapy.is_empty(), "{id}/{severity}");
                assert!(!tier.resources.is_empty(), "{id}/{severity}");
            }
        }
    }

    #[test]
    fn test_titles_match_navigation_labels() {
        for (id, record) in ContentStore::global().disorders() {
            assert_eq!(record.title, id.label());
        }
    }

    #[test]
    fn test_depression_severe_resources_in_source_order() {
        let record = ContentStore::global().get(DisorderId::Depression).unwrap();
        let titles: Vec<_> = record
            .treatment
            .severe
            .resources
            .iter()
            .map(|r| r.title.as_str())
            .collect();
        assert_eq!(
            titles,
            vec![
                "988 Suicide & Crisis Lifeline",
                "Crisis Text Line",
                "Psychiatric Emergency Services",
                "Intensive Outpatient Programs (IOP)",
                "Partial Hospitalization Programs (PHP)",
            ]
        );
    }

    #[test]
    fn test_mixed_provider_resources_are_marked_both() {
        let record = ContentStore::global().get(DisorderId::SubstanceUse).unwrap();
        let both: Vec<_> = [Severity::Moderate, Severity::Severe]
            .into_iter()
            .flat_map(|s| record.treatment.tier(s).resources.iter())
            .filter(|r| r.resource_type == ResourceType::Both)
            .map(|r| r.title.as_str())
            .collect();
        assert_eq!(
            both,
            vec![
                "Medication-Assisted Treatment (MAT) Clinics",
                "Medical Detoxification",
            ]
        );
    }

    #[test]
    fn test_regional_resources_all_have_links() {
        let home = ContentStore::global().home();
        assert_eq!(home.regional_resources.len(), 15);
        assert!(
            home.regional_resources
                .iter()
                .all(|r| r.link != NO_LINK && r.cost.is_some() && r.format.is_some())
        );
    }

    #[test]
    fn test_custom_store_can_omit_a_disorder() {
        let global = ContentStore::global();
        let depression = global.get(DisorderId::Depression).unwrap().clone();
        let store = ContentStore::new(
            [(DisorderId::Depression, depression)],
            global.home().clone(),
            global.disorder_notice().clone(),
        );

        assert!(store.get(DisorderId::Depression).is_some());
        assert!(store.get(DisorderId::Anxiety).is_none());
    }
}
