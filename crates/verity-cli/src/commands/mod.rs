pub mod check;
pub mod dispatch;
pub mod health;
pub mod history;
pub mod open;
pub mod schema;
pub mod share;
pub mod shared;
