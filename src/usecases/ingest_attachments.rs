//! Batch image ingestion for the pending-attachment buffer.
//!
//! Each file goes through a two-stage pipeline (read bytes, decode image)
//! behind the `ImageSource` trait. A batch runs every file on its own scoped
//! thread and joins them all before anything is handed back, so the caller
//! only ever sees fully-resolved attachments. The batch is best-effort:
//! failures are reported per path and never abort their siblings.

use std::path::{Path, PathBuf};
use std::thread;

use thiserror::Error;

use crate::domain::message::Attachment;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IngestError {
    #[error("failed to read file: {0}")]
    Read(String),
    #[error("failed to decode image: {0}")]
    Decode(String),
}

/// Loads one image file into a fully-resolved attachment.
pub trait ImageSource {
    fn load_image(&self, path: &Path) -> Result<Attachment, IngestError>;
}

impl<T: ImageSource + ?Sized> ImageSource for &T {
    fn load_image(&self, path: &Path) -> Result<Attachment, IngestError> {
        (*self).load_image(path)
    }
}

/// Result of one ingestion batch. `attachments` keeps the request order of
/// the files that succeeded.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BatchOutcome {
    pub attachments: Vec<Attachment>,
    pub failures: Vec<(PathBuf, IngestError)>,
}

/// Ingests every path concurrently and joins all of them, in any completion
/// order, before returning.
pub fn ingest_attachments<S>(source: &S, paths: &[PathBuf]) -> BatchOutcome
where
    S: ImageSource + Sync,
{
    let results: Vec<Result<Attachment, IngestError>> = thread::scope(|scope| {
        let handles: Vec<_> = paths
            .iter()
            .map(|path| scope.spawn(move || source.load_image(path)))
            .collect();
        handles
            .into_iter()
            .map(|handle| {
                handle
                    .join()
                    .unwrap_or_else(|_| Err(IngestError::Decode("ingestion worker panicked".to_owned())))
            })
            .collect()
    });

    let mut outcome = BatchOutcome::default();
    for (path, result) in paths.iter().zip(results) {
        match result {
            Ok(attachment) => outcome.attachments.push(attachment),
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "attachment ingestion failed");
                outcome.failures.push((path.clone(), error));
            }
        }
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Source that fails for any path containing "corrupt".
    struct StubSource;

    impl ImageSource for StubSource {
        fn load_image(&self, path: &Path) -> Result<Attachment, IngestError> {
            let name = path.display().to_string();
            if name.contains("corrupt") {
                Err(IngestError::Decode("bad image data".to_owned()))
            } else if name.contains("missing") {
                Err(IngestError::Read("no such file".to_owned()))
            } else {
                Ok(Attachment::image(
                    format!("data:image/png;base64,{}", name),
                    Some(4),
                    Some(4),
                ))
            }
        }
    }

    fn paths(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn empty_batch_yields_empty_outcome() {
        let outcome = ingest_attachments(&StubSource, &[]);

        assert!(outcome.attachments.is_empty());
        assert!(outcome.failures.is_empty());
    }

    #[test]
    fn all_good_files_are_ingested_in_request_order() {
        let outcome = ingest_attachments(&StubSource, &paths(&["a.png", "b.png", "c.png"]));

        let urls: Vec<&str> = outcome.attachments.iter().map(|a| a.url.as_str()).collect();
        assert_eq!(
            urls,
            [
                "data:image/png;base64,a.png",
                "data:image/png;base64,b.png",
                "data:image/png;base64,c.png"
            ]
        );
        assert!(outcome.failures.is_empty());
    }

    #[test]
    fn corrupt_file_does_not_block_the_valid_one() {
        let outcome = ingest_attachments(&StubSource, &paths(&["good.png", "corrupt.png"]));

        assert_eq!(outcome.attachments.len(), 1);
        assert_eq!(outcome.attachments[0].url, "data:image/png;base64,good.png");
        assert_eq!(outcome.failures.len(), 1);
        assert_eq!(outcome.failures[0].0, PathBuf::from("corrupt.png"));
        assert_eq!(
            outcome.failures[0].1,
            IngestError::Decode("bad image data".to_owned())
        );
    }

    #[test]
    fn read_and_decode_failures_are_distinguished() {
        let outcome = ingest_attachments(&StubSource, &paths(&["missing.png", "corrupt.png"]));

        assert!(outcome.attachments.is_empty());
        assert!(matches!(outcome.failures[0].1, IngestError::Read(_)));
        assert!(matches!(outcome.failures[1].1, IngestError::Decode(_)));
    }
}
