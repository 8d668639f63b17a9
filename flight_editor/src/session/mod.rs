//! Interactive editing session.
//!
//! A line-oriented console over any `BufRead`/`Write` pair offering the
//! editor's menu: search, sort, insert, delete, update, save and quit, plus
//! paging through the table.
//!
//! - [`command`]: parsing one input line into a [`Command`]
//! - [`console`]: the [`EditorSession`] executing commands against a store

pub mod command;
pub mod console;


pub use command::Command;
pub use console::{EditorSession, Flow};
