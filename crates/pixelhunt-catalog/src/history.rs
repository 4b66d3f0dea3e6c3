use std::{
    fs::{self, File},
    io::BufReader,
    path::PathBuf,
};

use chrono::{DateTime, Utc};
use pixelhunt_engine::{compute_score, RoundOutcome, SessionVerdict};
use serde::{Deserialize, Serialize};

/// One persisted play-through: what the results collaborator receives for
/// the current session and what it hands back for past ones.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    /// When the session finished (ISO 8601).
    pub recorded_at: DateTime<Utc>,
    pub player_name: String,
    /// Per-round outcome tags in round order.
    pub outcomes: Vec<RoundOutcome>,
    /// Remaining lives at the end of the session (negative for a loss).
    pub lives: i32,
    pub answers: Vec<bool>,
    /// Recorded seconds per resolved round.
    pub elapsed: Vec<u32>,
    pub verdict: SessionVerdict,
}

impl SessionRecord {
    /// Score of this record, `None` when it holds no winning score.
    #[must_use]
    pub fn score(&self) -> Option<i32> {
        compute_score(&self.answers, &self.elapsed, self.lives)
    }
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum HistoryError {
    #[display("failed to access history file: {_0}")]
    Io(std::io::Error),
    #[display("failed to parse history file: {_0}")]
    Parse(serde_json::Error),
}

/// JSON-array file of past session records, oldest first.
///
/// A missing file is an empty history, so a first run needs no setup step.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    pub fn load(&self) -> Result<Vec<SessionRecord>, HistoryError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };
        let records = serde_json::from_reader(BufReader::new(file))?;
        Ok(records)
    }

    /// Appends a record, preserving arrival order.
    pub fn append(&self, record: SessionRecord) -> Result<(), HistoryError> {
        let mut records = self.load()?;
        records.push(record);
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&records)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// Rank of a freshly finished session among past scores, 1-based.
///
/// The rank is one plus the number of past sessions with a strictly greater
/// score: ties break toward arrival order, so an equal past score never
/// pushes the current result down. A past record without a winning score
/// cannot outrank anything.
#[must_use]
pub fn rank_among<I>(current: Option<i32>, past_scores: I) -> usize
where
    I: IntoIterator<Item = Option<i32>>,
{
    let beaten_by = past_scores
        .into_iter()
        .flatten()
        .filter(|&past| match current {
            Some(current) => past > current,
            // A session with no score is outranked by any scored one.
            None => true,
        })
        .count();
    beaten_by + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(answers: [bool; 10], elapsed: [u32; 10], lives: i32) -> SessionRecord {
        let outcomes = answers
            .iter()
            .map(|&correct| {
                if correct {
                    RoundOutcome::Success
                } else {
                    RoundOutcome::Fail
                }
            })
            .collect();
        SessionRecord {
            recorded_at: Utc::now(),
            player_name: "Ada".to_owned(),
            outcomes,
            lives,
            answers: answers.to_vec(),
            elapsed: elapsed.to_vec(),
            verdict: if lives < 0 {
                SessionVerdict::Lost
            } else {
                SessionVerdict::Won
            },
        }
    }

    #[test]
    fn record_scores_like_the_engine() {
        let won = record([true; 10], [20; 10], 3);
        assert_eq!(won.score(), Some(1650));

        let lost = record([false; 10], [30; 10], -1);
        assert_eq!(lost.score(), None);
    }

    #[test]
    fn rank_counts_strictly_greater_scores() {
        let past = vec![Some(1650), Some(1000), Some(450)];
        assert_eq!(rank_among(Some(1000), past.clone()), 2);
        assert_eq!(rank_among(Some(2000), past.clone()), 1);
        assert_eq!(rank_among(Some(100), past), 4);
    }

    #[test]
    fn ties_keep_arrival_order() {
        // An equal past score does not outrank the newcomer.
        let past = vec![Some(1000), Some(1000)];
        assert_eq!(rank_among(Some(1000), past), 1);
    }

    #[test]
    fn invalid_scores_never_outrank() {
        let past = vec![None, None, Some(450)];
        assert_eq!(rank_among(Some(400), past.clone()), 2);
        // An unscored current session sits below every scored one.
        assert_eq!(rank_among(None, past), 2);
    }

    #[test]
    fn records_round_trip_through_json() {
        let original = record([true; 10], [15; 10], 2);
        let json = serde_json::to_string(&vec![original.clone()]).unwrap();
        let parsed: Vec<SessionRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].player_name, original.player_name);
        assert_eq!(parsed[0].answers, original.answers);
        assert_eq!(parsed[0].score(), original.score());
    }

    #[test]
    fn missing_history_file_is_empty() {
        let store = HistoryStore::new(PathBuf::from("/nonexistent/history.json"));
        assert!(store.load().unwrap().is_empty());
    }
}
