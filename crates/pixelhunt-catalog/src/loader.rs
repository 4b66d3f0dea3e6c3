use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
    sync::mpsc::{self, Receiver, TryRecvError},
    thread,
};

use pixelhunt_engine::RoundDescriptor;

use crate::{adapt::adapt_catalog, adapt::CatalogError, schema::RawRound};

fn load_catalog(path: &Path) -> Result<Vec<RoundDescriptor>, CatalogError> {
    let file = File::open(path)?;
    let raw: Vec<RawRound> = serde_json::from_reader(BufReader::new(file))?;
    adapt_catalog(raw)
}

/// Loads the round catalog off the control thread.
///
/// The session machine is single-threaded and event-driven; the only thing
/// that leaves that thread is this read. The result crosses back exactly
/// once over a channel and is picked up by polling [`try_take`](Self::try_take)
/// from the app's tick handler. A failed load is delivered as a value, not a
/// panic; catalog failures are non-fatal and the session stays on the intro.
#[derive(Debug)]
pub struct CatalogLoader {
    result: Receiver<Result<Vec<RoundDescriptor>, CatalogError>>,
    done: bool,
}

impl CatalogLoader {
    /// Starts reading and adapting the catalog at `path` in the background.
    #[must_use]
    pub fn spawn(path: PathBuf) -> Self {
        let (sender, receiver) = mpsc::channel();
        thread::spawn(move || {
            // The receiver may be gone if the app exited early.
            let _ = sender.send(load_catalog(&path));
        });
        Self {
            result: receiver,
            done: false,
        }
    }

    /// Takes the load result if it has arrived. Yields a value at most once.
    pub fn try_take(&mut self) -> Option<Result<Vec<RoundDescriptor>, CatalogError>> {
        if self.done {
            return None;
        }
        match self.result.try_recv() {
            Ok(result) => {
                self.done = true;
                Some(result)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.done = true;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    /// Polls the loader the way the app's tick handler does.
    fn poll(mut loader: CatalogLoader) -> Option<Result<Vec<RoundDescriptor>, CatalogError>> {
        for _ in 0..100 {
            if let Some(result) = loader.try_take() {
                return Some(result);
            }
            thread::sleep(Duration::from_millis(10));
        }
        None
    }

    #[test]
    fn missing_file_is_delivered_as_an_error() {
        let loader = CatalogLoader::spawn(PathBuf::from("/nonexistent/catalog.json"));
        let result = poll(loader).expect("loader should deliver a result");
        assert!(matches!(result, Err(CatalogError::Io(_))));
    }

    #[test]
    fn delivers_at_most_once() {
        let mut loader = CatalogLoader::spawn(PathBuf::from("/nonexistent/catalog.json"));
        let mut delivered = 0;
        for _ in 0..200 {
            if loader.try_take().is_some() {
                delivered += 1;
            }
            thread::sleep(Duration::from_millis(5));
            if delivered > 0 {
                // A few extra polls must stay empty.
                assert!(loader.try_take().is_none());
                break;
            }
        }
        assert_eq!(delivered, 1);
    }
}
