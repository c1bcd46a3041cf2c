//! XML Parser Module
//!
//! Tokenizer and tree builder producing the intermediate tree

pub mod ast;
pub mod entities;
pub mod lexer;
pub mod parser;
pub mod tags;
pub mod tokens;

pub use ast::*;
pub use entities::unescape;
pub use lexer::tokenize;
pub use parser::Parser;
pub use tags::parse_open_tag;
pub use tokens::*;
