pub mod reader;

pub use reader::InputReader;
