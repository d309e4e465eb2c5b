mod choice_control;
mod content_list;
mod disorder_page;
mod expandable_section;
mod external_link;
mod home_page;
mod lifestyle_panel;
mod navigation;
mod not_found;
mod notice_box;
mod resource_card;
mod route_link;
mod therapy_article;
mod treatment_section;

pub use choice_control::ChoiceControl;
pub use content_list::ContentList;
pub use disorder_page::DisorderPage;
pub use expandable_section::ExpandableSection;
pub use external_link::ExternalLink;
pub use home_page::HomePage;
pub use lifestyle_panel::LifestylePanel;
pub use navigation::Navigation;
pub use not_found::NotFound;
pub use notice_box::NoticeBox;
pub use resource_card::ResourceCardView;
pub use route_link::RouteLink;
pub use therapy_article::TherapyArticle;
pub use treatment_section::TreatmentSection;
