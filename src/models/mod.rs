pub mod book;
pub mod definition;
pub mod ids;
pub mod reading;
pub mod student;
pub mod title_map;

// Re-export commonly used types
pub use book::Book;
pub use definition::WordDefinition;
pub use ids::{BookId, StudentId};
pub use reading::{ReadingLog, ReadingStatus, StudentReadingData};
pub use student::Student;
pub use title_map::TitleMap;
