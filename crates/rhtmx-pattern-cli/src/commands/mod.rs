pub mod build;
pub mod check;
pub mod parse;
pub mod url;
