pub mod board;
pub mod evaluation;
pub mod keyboard;
pub mod session;
pub mod word_list;

// Re-export main components
pub use board::*;
pub use evaluation::*;
pub use keyboard::*;
pub use session::*;
pub use word_list::*;
