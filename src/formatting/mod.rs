pub mod books;
pub mod theme;
pub mod utils;

pub use books::{print_book_detail, print_books, print_definitions, print_students, OutputFormat};
pub use utils::{dictionary_url, format_level, mask_secret, shelf_icon, truncate};
