pub mod check;
pub mod history;

pub use check::{CheckCommands, CheckImageArgs, CheckTextArgs};
pub use history::{HistoryCommands, HistoryShowArgs};
