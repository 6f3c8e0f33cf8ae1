pub mod color;
pub mod error;
pub mod font;
pub mod path;
pub mod prelude;
