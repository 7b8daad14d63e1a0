//! Batch processing of many documents.
//!
//! Documents are independent: each one is rendered to pages by a
//! [`PageSource`], processed once, and handed to a [`ResultSink`]. A failure
//! is recorded for its document and never stops the rest of the batch.
//!
//! # Example
//!
//! ```no_run
//! use unoutline::batch::{BatchOptions, BatchProcessor, JsonDirSink, TextDirSource};
//! use unoutline::DocumentProcessor;
//!
//! fn main() -> unoutline::Result<()> {
//!     let source = TextDirSource::open("./input")?;
//!     let sink = JsonDirSink::create("./output")?;
//!     let batch = BatchProcessor::new(DocumentProcessor::new(), BatchOptions::new())?;
//!
//!     let report = batch.run(&source.list_documents()?, &source, &sink)?;
//!     for failure in &report.failures {
//!         eprintln!("{}", failure);
//!     }
//!     Ok(())
//! }
//! ```

mod fs;

pub use fs::{JsonDirSink, TextDirSource};

use crate::error::{Error, Result};
use crate::infer::DocumentProcessor;
use crate::model::{Document, StructuralResult};
use chrono::{DateTime, Utc};
use crossbeam_channel::unbounded;
use rayon::prelude::*;
use std::fmt;

/// Default number of worker threads.
pub const DEFAULT_WORKERS: usize = 4;

/// Turns a document identifier into rendered pages.
pub trait PageSource: Send + Sync {
    /// Render the pages of a document.
    fn pages(&self, id: &str) -> Result<Document>;
}

/// Receives one structural result per document.
pub trait ResultSink: Send + Sync {
    /// Persist the result of a document.
    fn accept(&self, id: &str, result: &StructuralResult) -> Result<()>;
}

/// Options for batch processing.
///
/// Output formatting belongs to the sink, see [`JsonDirSink::with_format`].
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Number of worker threads
    pub workers: usize,
}

impl BatchOptions {
    /// Create new batch options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of worker threads.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
        }
    }
}

/// A document that could not be processed.
#[derive(Debug)]
pub struct BatchFailure {
    /// Document identifier
    pub id: String,

    /// Why it failed
    pub error: Error,
}

impl fmt::Display for BatchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error processing {}: {}", self.id, self.error)
    }
}

/// Outcome of a single document, reported as soon as it is known.
#[derive(Debug, Clone, Copy)]
pub enum Outcome<'a> {
    /// The result was produced and accepted by the sink
    Done {
        /// Document identifier
        id: &'a str,
        /// Structural result
        result: &'a StructuralResult,
    },
    /// The document failed
    Failed {
        /// Document identifier
        id: &'a str,
        /// Failure cause
        error: &'a Error,
    },
}

/// Summary of a batch run.
#[derive(Debug)]
pub struct BatchReport {
    /// Documents processed successfully, sorted by id
    pub processed: Vec<String>,

    /// Documents that failed, sorted by id
    pub failures: Vec<BatchFailure>,

    /// When the run started
    pub started_at: DateTime<Utc>,

    /// When the run finished
    pub finished_at: DateTime<Utc>,
}

impl BatchReport {
    /// Check if every document succeeded.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Total number of documents attempted.
    pub fn total(&self) -> usize {
        self.processed.len() + self.failures.len()
    }

    /// Wall-clock duration of the run.
    pub fn elapsed(&self) -> chrono::Duration {
        self.finished_at - self.started_at
    }
}

/// Runs a [`DocumentProcessor`] over many documents on a fixed worker pool.
pub struct BatchProcessor {
    processor: DocumentProcessor,
    options: BatchOptions,
}

impl BatchProcessor {
    /// Create a batch processor.
    pub fn new(processor: DocumentProcessor, options: BatchOptions) -> Result<Self> {
        if options.workers == 0 {
            return Err(Error::InvalidOption("workers must be at least 1".into()));
        }
        Ok(Self { processor, options })
    }

    /// Batch options in use.
    pub fn options(&self) -> &BatchOptions {
        &self.options
    }

    /// Process every document in `ids`.
    pub fn run(
        &self,
        ids: &[String],
        source: &dyn PageSource,
        sink: &dyn ResultSink,
    ) -> Result<BatchReport> {
        self.run_with_progress(ids, source, sink, |_| {})
    }

    /// Process every document in `ids`, reporting each outcome to `progress`.
    ///
    /// `progress` is called from worker threads, in completion order.
    pub fn run_with_progress<F>(
        &self,
        ids: &[String],
        source: &dyn PageSource,
        sink: &dyn ResultSink,
        progress: F,
    ) -> Result<BatchReport>
    where
        F: Fn(Outcome<'_>) + Sync,
    {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.options.workers)
            .thread_name(|i| format!("unoutline-worker-{}", i))
            .build()
            .map_err(|e| Error::Other(format!("failed to start worker pool: {}", e)))?;

        let started_at = Utc::now();
        log::info!(
            "processing {} documents with {} workers",
            ids.len(),
            self.options.workers
        );

        let (done_tx, done_rx) = unbounded::<String>();
        let (err_tx, err_rx) = unbounded::<BatchFailure>();

        pool.install(|| {
            ids.par_iter()
                .for_each_with((done_tx, err_tx), |(done_tx, err_tx), id| {
                    match self.process_one(id, source, sink) {
                        Ok(result) => {
                            log::info!("processed {} ({} headings)", id, result.outline.len());
                            progress(Outcome::Done {
                                id,
                                result: &result,
                            });
                            // Receivers outlive the pool.
                            let _ = done_tx.send(id.clone());
                        }
                        Err(error) => {
                            log::warn!("failed {}: {}", id, error);
                            progress(Outcome::Failed { id, error: &error });
                            let _ = err_tx.send(BatchFailure {
                                id: id.clone(),
                                error,
                            });
                        }
                    }
                });
        });

        let mut processed: Vec<String> = done_rx.iter().collect();
        let mut failures: Vec<BatchFailure> = err_rx.iter().collect();
        processed.sort();
        failures.sort_by(|a, b| a.id.cmp(&b.id));

        Ok(BatchReport {
            processed,
            failures,
            started_at,
            finished_at: Utc::now(),
        })
    }

    fn process_one(
        &self,
        id: &str,
        source: &dyn PageSource,
        sink: &dyn ResultSink,
    ) -> Result<StructuralResult> {
        let document = source.pages(id)?;
        let result = self.processor.process_document(&document)?;
        sink.accept(id, &result)?;
        Ok(result)
    }
}
