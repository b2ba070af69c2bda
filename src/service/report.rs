use crate::error::HolocronError;
use serde::Serialize;

/// Aggregate outcome of a bulk import: one entry per fetched record.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct ImportReport {
    pub fetched: usize,
    pub imported: usize,
    pub failed: Vec<ImportFailure>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ImportFailure {
    pub name: String,
    pub error: String,
}

impl ImportReport {
    pub fn from_outcomes<T, I>(fetched: usize, outcomes: I) -> Self
    where
        I: IntoIterator<Item = (String, Result<T, HolocronError>)>,
    {
        let mut report = Self {
            fetched,
            ..Default::default()
        };
        for (name, outcome) in outcomes {
            match outcome {
                Ok(_) => report.imported += 1,
                Err(e) => report.failed.push(ImportFailure {
                    name,
                    error: e.to_string(),
                }),
            }
        }
        report
    }

    pub fn is_complete(&self) -> bool {
        self.failed.is_empty() && self.imported == self.fetched
    }
}
