pub use self::{
    outcome_strip::OutcomeStrip, results_table::ResultsTable, status_header::StatusHeader,
};

mod outcome_strip;
mod results_table;
mod status_header;
