pub mod disorder;
pub mod home;
pub mod resource;
pub mod severity;

pub use disorder::*;
pub use home::*;
pub use resource::*;
pub use severity::Severity;
