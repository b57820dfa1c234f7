// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use bento_app::{CandidateId, DashboardData, MetricKey};
use std::collections::BTreeSet;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataError {
    #[error("candidate #{index} has an empty id")]
    EmptyId { index: usize },
    #[error("candidate {id} has an empty name")]
    EmptyName { id: CandidateId },
    #[error("candidate id {id} appears more than once")]
    DuplicateId { id: CandidateId },
    #[error("candidate {id} has no {metric} metric", metric = .key.as_str())]
    MissingMetric { id: CandidateId, key: MetricKey },
    #[error("candidate {id} has no {metric} score", metric = .key.as_str())]
    MissingScore { id: CandidateId, key: MetricKey },
}

/// Checks that every candidate can be rendered by widgets reading
/// `required` metrics.
pub fn validate_document(data: &DashboardData, required: &[MetricKey]) -> Result<(), DataError> {
    let mut seen = BTreeSet::new();
    for (index, candidate) in data.candidates.iter().enumerate() {
        if candidate.id.as_str().trim().is_empty() {
            return Err(DataError::EmptyId { index });
        }
        if candidate.name.trim().is_empty() {
            return Err(DataError::EmptyName {
                id: candidate.id.clone(),
            });
        }
        if !seen.insert(&candidate.id) {
            return Err(DataError::DuplicateId {
                id: candidate.id.clone(),
            });
        }

        for key in required {
            if candidate.metric(*key).is_none() {
                return Err(DataError::MissingMetric {
                    id: candidate.id.clone(),
                    key: *key,
                });
            }
            if candidate.score(*key).is_none() {
                return Err(DataError::MissingScore {
                    id: candidate.id.clone(),
                    key: *key,
                });
            }
        }
    }
    Ok(())
}
