pub mod endpoints;
pub mod router;
pub mod types;

use crate::db;

#[derive(Clone, Default)]
pub struct State {
    pub db: db::Connection,
}

impl State {
    pub fn new(db: db::Connection) -> Self {
        Self { db }
    }
}
