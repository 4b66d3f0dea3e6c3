//! Data contracts with the game's external collaborators: the round-catalog
//! file the session consumes and the history file past results are ranked
//! against. The engine never learns where either comes from.

pub use self::{
    adapt::{adapt_catalog, CatalogError},
    history::{rank_among, HistoryError, HistoryStore, SessionRecord},
    loader::CatalogLoader,
    schema::{RawAnswer, RawImage, RawRound},
};

mod adapt;
mod history;
mod loader;
mod schema;
