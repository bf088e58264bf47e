pub mod parse;
pub mod redirect;
