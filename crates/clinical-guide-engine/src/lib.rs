pub mod classify;
pub mod compose;
pub mod content;
pub mod filter;
pub mod io;
pub mod models;
pub mod routing;
pub mod view;

// Re-export key types for easier usage
pub use classify::*;
pub use compose::*;
pub use content::ContentStore;
pub use filter::ResourceFilter;
pub use io::*;
pub use models::*;
pub use routing::{NavLink, Route, RouteError, SITE_NAME};
pub use view::*;
