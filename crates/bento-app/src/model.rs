// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::ids::CandidateId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MetricKey {
    TeamPerformance,
    ActiveCandidates,
    InterviewRate,
    SuccessRate,
    AiInsights,
    RecruitmentGoal,
    PipelineHealth,
    ResponseTime,
    QualityScore,
    TeamEfficiency,
    NewMetric,
    Satisfaction,
}

impl MetricKey {
    pub const ALL: [Self; 12] = [
        Self::TeamPerformance,
        Self::ActiveCandidates,
        Self::InterviewRate,
        Self::SuccessRate,
        Self::AiInsights,
        Self::RecruitmentGoal,
        Self::PipelineHealth,
        Self::ResponseTime,
        Self::QualityScore,
        Self::TeamEfficiency,
        Self::NewMetric,
        Self::Satisfaction,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TeamPerformance => "teamPerformance",
            Self::ActiveCandidates => "activeCandidates",
            Self::InterviewRate => "interviewRate",
            Self::SuccessRate => "successRate",
            Self::AiInsights => "aiInsights",
            Self::RecruitmentGoal => "recruitmentGoal",
            Self::PipelineHealth => "pipelineHealth",
            Self::ResponseTime => "responseTime",
            Self::QualityScore => "qualityScore",
            Self::TeamEfficiency => "teamEfficiency",
            Self::NewMetric => "newMetric",
            Self::Satisfaction => "satisfaction",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: CandidateId,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub job_relevance_rank: u32,
    #[serde(default)]
    pub linkedin_url: String,
    #[serde(default)]
    pub metrics: BTreeMap<MetricKey, String>,
    #[serde(default)]
    pub scores: BTreeMap<MetricKey, String>,
}

impl Candidate {
    pub fn metric(&self, key: MetricKey) -> Option<&str> {
        self.metrics.get(&key).map(String::as_str)
    }

    pub fn score(&self, key: MetricKey) -> Option<&str> {
        self.scores.get(&key).map(String::as_str)
    }

    pub fn rank_tier(&self) -> RankTier {
        RankTier::for_rank(self.job_relevance_rank)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankTier {
    Top,
    Middle,
    Low,
}

impl RankTier {
    pub const fn for_rank(rank: u32) -> Self {
        if rank <= 2 {
            Self::Top
        } else if rank <= 4 {
            Self::Middle
        } else {
            Self::Low
        }
    }
}

/// The static document behind the dashboard. Every field may be absent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DashboardData {
    pub requirements: Vec<String>,
    pub tech_skills: Vec<String>,
    pub candidates: Vec<Candidate>,
}

impl DashboardData {
    pub fn candidate(&self, id: &CandidateId) -> Option<&Candidate> {
        self.candidates.iter().find(|candidate| &candidate.id == id)
    }
}
