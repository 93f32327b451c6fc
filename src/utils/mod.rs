pub mod terminal;

pub use terminal::sanitize_for_terminal;
