pub mod model;
pub mod repository;

pub use model::{Admin, NewAdmin};
pub use repository::AdminRepository;
