//! Main module for rst library functionality

pub mod ast;
pub mod blocks;
pub mod diagnostics;
pub mod formats;
pub mod hooks;
pub mod inlines;
pub mod lines;
pub mod links;
pub mod numbering;
pub mod parser;
pub mod testing;
