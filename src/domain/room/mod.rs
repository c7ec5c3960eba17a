pub mod model;
pub mod repository;

pub use model::{NewRoom, Room, RoomStatus};
pub use repository::RoomRepository;
