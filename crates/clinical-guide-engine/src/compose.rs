//! View Composer: maps content records plus view state to display models.
//!
//! The models carry every field of the source record in source order; the
//! UI layer only decides markup. Nothing here depends on a rendering backend.

use crate::classify::{LifestyleKind, ListItemKind, classify_lifestyle_line, classify_list_item};
use crate::content::ContentStore;
use crate::filter::ResourceFilter;
use crate::models::{
    DisorderId, DisorderRecord, Notice, Resource, ResourceType, ScreeningTool, Severity,
};
use crate::view::{DisorderView, SectionId, TreatmentState};
use serde::Serialize;

pub const DISORDER_SUBTITLE: &str =
    "Clinical guidance for screening, diagnosis, and treatment planning";

/// One classified line of list content.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListLine {
    pub kind: ListItemKind,
    pub text: String,
}

impl ListLine {
    pub fn classify(text: &str) -> Self {
        Self {
            kind: classify_list_item(text),
            text: text.to_string(),
        }
    }
}

/// One classified lifestyle line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LifestyleLine {
    pub kind: LifestyleKind,
    pub text: String,
    /// Subheadings after the first line get a gap above them.
    pub spaced: bool,
}

/// A link that leaves the site. `href` is `None` for placeholder links, in
/// which case only the label is shown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolLink {
    pub label: String,
    pub href: Option<String>,
}

impl From<&ScreeningTool> for ToolLink {
    fn from(tool: &ScreeningTool) -> Self {
        Self {
            label: tool.name.clone(),
            href: tool.outbound_link().map(str::to_string),
        }
    }
}

/// An expandable block of classified lines.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionModel {
    pub id: SectionId,
    pub title: String,
    pub expanded: bool,
    pub lines: Vec<ListLine>,
    pub tools: Vec<ToolLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardDetail {
    pub label: &'static str,
    pub value: String,
}

/// Display form of a [`Resource`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceCard {
    pub title: String,
    pub badge: ResourceType,
    pub description: String,
    pub details: Vec<CardDetail>,
    pub link: Option<String>,
}

impl From<&Resource> for ResourceCard {
    fn from(resource: &Resource) -> Self {
        let mut details = Vec::new();
        if let Some(location) = &resource.location {
            details.push(CardDetail {
                label: "Location",
                value: location.clone(),
            });
        }
        if !resource.services.is_empty() {
            details.push(CardDetail {
                label: "Services",
                value: resource.services.join(", "),
            });
        }
        if let Some(cost) = &resource.cost {
            details.push(CardDetail {
                label: "Cost",
                value: cost.clone(),
            });
        }
        if let Some(format) = resource.format {
            details.push(CardDetail {
                label: "Format",
                value: format.label().to_string(),
            });
        }
        if let Some(considerations) = &resource.considerations {
            details.push(CardDetail {
                label: "Considerations",
                value: considerations.clone(),
            });
        }

        Self {
            title: resource.title.clone(),
            badge: resource.resource_type,
            description: resource.description.clone(),
            details,
            link: resource.outbound_link().map(str::to_string),
        }
    }
}

/// Resource region of the treatment block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ResourceListing {
    Cards(Vec<ResourceCard>),
    /// Nothing passed the filter; show the message instead of an empty list.
    Empty(String),
}

impl ResourceListing {
    pub fn build(resources: &[Resource], filter: ResourceFilter) -> Self {
        let cards: Vec<ResourceCard> = filter
            .apply(resources)
            .into_iter()
            .map(ResourceCard::from)
            .collect();
        if cards.is_empty() {
            ResourceListing::Empty(filter.empty_message())
        } else {
            ResourceListing::Cards(cards)
        }
    }

    pub fn cards(&self) -> &[ResourceCard] {
        match self {
            ResourceListing::Cards(cards) => cards,
            ResourceListing::Empty(_) => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreatmentModel {
    pub state: TreatmentState,
    pub heading: String,
    pub description: String,
    pub psychotherapy: Vec<ListLine>,
    pub lifestyle: Vec<LifestyleLine>,
    pub resources: ResourceListing,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisorderPageModel {
    pub id: DisorderId,
    pub title: String,
    pub subtitle: &'static str,
    pub screening: SectionModel,
    pub diagnosis: SectionModel,
    pub treatment: TreatmentModel,
    pub notice: Notice,
}

/// Result of composing a disorder route against a store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum PageModel {
    Disorder(Box<DisorderPageModel>),
    /// The store has no record for the requested disorder.
    Missing { requested: DisorderId },
}

pub fn classify_lines(lines: &[String]) -> Vec<ListLine> {
    lines.iter().map(|line| ListLine::classify(line)).collect()
}

pub fn classify_lifestyle(lines: &[String]) -> Vec<LifestyleLine> {
    lines
        .iter()
        .enumerate()
        .map(|(index, line)| {
            let kind = classify_lifestyle_line(line);
            LifestyleLine {
                kind,
                text: line.clone(),
                spaced: kind == LifestyleKind::Subheading && index > 0,
            }
        })
        .collect()
}

pub fn severity_heading(severity: Severity) -> String {
    format!("{} Severity", severity.label())
}

pub fn compose_treatment(record: &DisorderRecord, state: TreatmentState) -> TreatmentModel {
    let content = state.content(&record.treatment);
    TreatmentModel {
        state,
        heading: severity_heading(state.severity),
        description: content.description.clone(),
        psychotherapy: classify_lines(&content.psychotherapy),
        lifestyle: classify_lifestyle(&content.lifestyle),
        resources: ResourceListing::build(&content.resources, state.filter),
    }
}

pub fn compose_disorder_page(
    id: DisorderId,
    record: &DisorderRecord,
    view: &DisorderView,
    notice: &Notice,
) -> DisorderPageModel {
    let screening = &record.screening;
    let diagnosis = &record.diagnosis;

    DisorderPageModel {
        id,
        title: record.title.clone(),
        subtitle: DISORDER_SUBTITLE,
        screening: SectionModel {
            id: view.screening(),
            title: screening.title.clone(),
            expanded: view.is_expanded(view.screening()),
            lines: classify_lines(&screening.content),
            tools: screening.tools.iter().map(ToolLink::from).collect(),
        },
        diagnosis: SectionModel {
            id: view.diagnosis(),
            title: diagnosis.title.clone(),
            expanded: view.is_expanded(view.diagnosis()),
            lines: classify_lines(&diagnosis.content),
            tools: Vec::new(),
        },
        treatment: compose_treatment(record, view.treatment()),
        notice: notice.clone(),
    }
}

/// Looks the disorder up and composes its page, or reports it missing.
pub fn compose_page(store: &ContentStore, id: DisorderId, view: &DisorderView) -> PageModel {
    match store.get(id) {
        Some(record) => PageModel::Disorder(Box::new(compose_disorder_page(
            id,
            record,
            view,
            store.disorder_notice(),
        ))),
        None => {
            log::warn!("No content for disorder '{id}', composing fallback page");
            PageModel::Missing { requested: id }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        DeliveryFormat, Diagnosis, NO_LINK, Screening, SeverityContent, Treatment,
    };
    use pretty_assertions::assert_eq;

    fn tier(tag: &str, lifestyle: &[&str], resources: Vec<Resource>) -> SeverityContent {
        SeverityContent {
            description: format!("{tag} description"),
            psychotherapy: vec![format!("{tag} therapy"), "1. numbered step".to_string()],
            lifestyle: lifestyle.iter().map(|s| s.to_string()).collect(),
            resources,
        }
    }

    fn record() -> DisorderRecord {
        DisorderRecord {
            title: "Test Disorder".to_string(),
            screening: Screening {
                title: "Screen".to_string(),
                content: vec![
                    "Ask about mood".to_string(),
                    "1. First question".to_string(),
                    "(2) Second question".to_string(),
                    "".to_string(),
                ],
                tools: vec![
                    ScreeningTool::new("Tool A", "https://example.org/a"),
                    ScreeningTool::new("Tool B", NO_LINK),
                ],
            },
            diagnosis: Diagnosis {
                title: "Diagnose".to_string(),
                content: vec!["Criteria".to_string(), "(a) subtype".to_string()],
            },
            treatment: Treatment {
                mild: tier(
                    "mild",
                    &["Movement:", "Walk daily", "Sleep:", "Keep a schedule"],
                    vec![Resource::public("Helpline", "Call", "https://example.org")],
                ),
                moderate: tier(
                    "moderate",
                    &[],
                    vec![
                        Resource::private("Clinic", "Therapy", NO_LINK)
                            .with_cost("$100")
                            .with_format(DeliveryFormat::Both),
                    ],
                ),
                severe: tier("severe", &["Bullet first", "Heading:"], vec![]),
            },
        }
    }

    fn notice() -> Notice {
        Notice {
            title: "Notice".to_string(),
            body: "Use judgment".to_string(),
        }
    }

    #[test]
    fn test_sections_keep_every_line_in_order() {
        let record = record();
        let page = compose_disorder_page(
            DisorderId::Depression,
            &record,
            &DisorderView::default(),
            &notice(),
        );

        let texts: Vec<_> = page.screening.lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["Ask about mood", "1. First question", "(2) Second question", ""]);

        let kinds: Vec<_> = page.screening.lines.iter().map(|l| l.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ListItemKind::Bulleted,
                ListItemKind::SelfNumbered,
                ListItemKind::SelfNumbered,
                ListItemKind::Bulleted,
            ]
        );

        assert_eq!(page.diagnosis.lines[1].kind, ListItemKind::Bulleted);
        assert_eq!(page.title, "Test Disorder");
        assert_eq!(page.subtitle, DISORDER_SUBTITLE);
        assert_eq!(page.notice, notice());
    }

    #[test]
    fn test_placeholder_tool_link_is_dropped() {
        let page = compose_disorder_page(
            DisorderId::Depression,
            &record(),
            &DisorderView::default(),
            &notice(),
        );
        assert_eq!(
            page.screening.tools,
            vec![
                ToolLink {
                    label: "Tool A".to_string(),
                    href: Some("https://example.org/a".to_string()),
                },
                ToolLink {
                    label: "Tool B".to_string(),
                    href: None,
                },
            ]
        );
        assert!(page.diagnosis.tools.is_empty());
    }

    #[test]
    fn test_expanded_flags_follow_view() {
        let mut view = DisorderView::default();
        view.toggle_section(view.diagnosis());
        let page = compose_disorder_page(DisorderId::Anxiety, &record(), &view, &notice());

        assert!(!page.screening.expanded);
        assert!(page.diagnosis.expanded);
    }

    #[test]
    fn test_lifestyle_subheadings_after_start_are_spaced() {
        let record = record();
        let mild = compose_treatment(&record, TreatmentState::default());
        let spacing: Vec<_> = mild
            .lifestyle
            .iter()
            .map(|l| (l.kind, l.spaced))
            .collect();
        assert_eq!(
            spacing,
            vec![
                (LifestyleKind::Subheading, false),
                (LifestyleKind::Bullet, false),
                (LifestyleKind::Subheading, true),
                (LifestyleKind::Bullet, false),
            ]
        );

        let severe = compose_treatment(&record, TreatmentState::default().with_severity(Severity::Severe));
        assert_eq!(severe.lifestyle[1].kind, LifestyleKind::Subheading);
        assert!(severe.lifestyle[1].spaced);
    }

    #[test]
    fn test_treatment_reflects_selected_tier() {
        let record = record();
        let model = compose_treatment(
            &record,
            TreatmentState::new(Severity::Moderate, ResourceFilter::All),
        );

        assert_eq!(model.heading, "Moderate Severity");
        assert_eq!(model.description, "moderate description");
        assert_eq!(model.psychotherapy[1].kind, ListItemKind::SelfNumbered);
        assert!(model.lifestyle.is_empty());
        assert_eq!(model.resources.cards().len(), 1);
    }

    #[test]
    fn test_empty_filter_result_becomes_message() {
        let record = record();
        let model = compose_treatment(
            &record,
            TreatmentState::new(Severity::Moderate, ResourceFilter::Public),
        );
        assert_eq!(
            model.resources,
            ResourceListing::Empty(
                "No public resources available for this severity level.".to_string()
            )
        );

        let severe = compose_treatment(
            &record,
            TreatmentState::new(Severity::Severe, ResourceFilter::All),
        );
        assert!(matches!(severe.resources, ResourceListing::Empty(_)));
    }

    #[test]
    fn test_resource_card_details_in_display_order() {
        let resource = Resource::private("Clinic", "Therapy", NO_LINK)
            .with_considerations("Waitlist")
            .with_format(DeliveryFormat::Virtual)
            .with_cost("$90")
            .with_services(["CBT", "IPT"])
            .with_location("Kentville");
        let card = ResourceCard::from(&resource);

        let labels: Vec<_> = card.details.iter().map(|d| d.label).collect();
        assert_eq!(
            labels,
            vec!["Location", "Services", "Cost", "Format", "Considerations"]
        );
        assert_eq!(card.details[1].value, "CBT, IPT");
        assert_eq!(card.details[3].value, "virtual");
        assert_eq!(card.link, None);
        assert_eq!(card.badge, ResourceType::Private);
    }

    #[test]
    fn test_resource_card_without_optional_fields() {
        let card = ResourceCard::from(&Resource::public("988", "Call", "https://988lifeline.org"));
        assert!(card.details.is_empty());
        assert_eq!(card.link.as_deref(), Some("https://988lifeline.org"));
    }

    #[test]
    fn test_missing_disorder_composes_fallback() {
        let global = ContentStore::global();
        let store = ContentStore::new(
            [],
            global.home().clone(),
            global.disorder_notice().clone(),
        );
        let page = compose_page(&store, DisorderId::Anxiety, &DisorderView::default());
        assert_eq!(
            page,
            PageModel::Missing {
                requested: DisorderId::Anxiety
            }
        );
    }

    #[test]
    fn test_depression_severe_public_end_to_end() {
        let mut view = DisorderView::default();
        view.select_severity(Severity::Severe);
        view.select_filter(ResourceFilter::Public);

        let PageModel::Disorder(page) =
            compose_page(ContentStore::global(), DisorderId::Depression, &view)
        else {
            panic!("depression should be in the built-in store");
        };

        let titles: Vec<_> = page
            .treatment
            .resources
            .cards()
            .iter()
            .map(|c| c.title.as_str())
            .collect();
        assert_eq!(
            titles,
            vec![
                "988 Suicide & Crisis Lifeline",
                "Crisis Text Line",
                "Psychiatric Emergency Services",
            ]
        );
        assert!(
            page.treatment
                .resources
                .cards()
                .iter()
                .all(|c| c.badge == ResourceType::Public)
        );
    }

    #[test]
    fn test_every_builtin_tier_and_filter_composes() {
        let store = ContentStore::global();
        for id in DisorderId::ALL {
            for severity in Severity::ALL {
                for filter in ResourceFilter::ALL {
                    let view = DisorderView::new(TreatmentState::new(severity, filter));
                    let PageModel::Disorder(page) = compose_page(store, id, &view) else {
                        panic!("{id} missing from built-in store");
                    };
                    let record = store.get(id).unwrap();
                    let expected = filter.apply(&record.treatment.tier(severity).resources).len();
                    assert_eq!(page.treatment.resources.cards().len(), expected);
                }
            }
        }
    }
}
