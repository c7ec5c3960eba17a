pub mod model;
pub mod repository;

pub use model::{NewPlatform, Platform};
pub use repository::PlatformRepository;
