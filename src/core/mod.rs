pub mod errors;
pub mod http;

pub use errors::{ Result, VocBuilderError };
