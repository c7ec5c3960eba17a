pub mod model;
pub mod repository;

pub use model::{NewRoomNote, NoteType, RoomNote, PROGRESS_VALUES};
pub use repository::RoomNoteRepository;
