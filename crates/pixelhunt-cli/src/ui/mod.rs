pub use self::widgets::{OutcomeStrip, ResultsTable, StatusHeader};

mod widgets;
