// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use bento_app::{Candidate, CandidateId, DashboardData, MetricKey};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

const FIRST_NAMES: [&str; 16] = [
    "Avery", "Jordan", "Taylor", "Riley", "Morgan", "Casey", "Alex", "Quinn", "Parker", "Drew",
    "Kai", "Elliot", "Robin", "Cameron", "Hayden", "Rowan",
];
const LAST_NAMES: [&str; 18] = [
    "Walker", "Martin", "Hill", "Evans", "Lopez", "Gray", "Ward", "Young", "Diaz", "Reed",
    "Campbell", "Turner", "Flores", "Bennett", "Price", "Morris", "Foster", "Brooks",
];
const GRADES: [&str; 6] = ["A+", "A", "A-", "B+", "B", "C"];
const HEALTH: [&str; 4] = ["Excellent", "Good", "Fair", "Weak"];

pub const REQUIREMENTS: [&str; 3] = [
    "5+ years of software development experience",
    "Strong problem-solving skills",
    "Excellent communication abilities",
];
pub const TECH_SKILLS: [&str; 4] = ["Rust", "Tokio", "PostgreSQL", "Docker"];

#[derive(Debug, Clone)]
struct DeterministicRng {
    state: u64,
}

impl DeterministicRng {
    fn new(seed: u64) -> Self {
        let mut state = seed ^ 0x9E37_79B9_7F4A_7C15;
        if state == 0 {
            state = 0xA409_3822_299F_31D0;
        }
        Self { state }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);

        let mut x = self.state;
        x ^= x >> 13;
        x ^= x << 7;
        x ^= x >> 17;
        x
    }

    fn int_n(&mut self, n: usize) -> usize {
        if n <= 1 {
            return 0;
        }
        (self.next_u64() % (n as u64)) as usize
    }
}

/// Deterministic candidate generator; every candidate carries a value and
/// score for every metric key.
#[derive(Debug, Clone)]
pub struct CandidateFaker {
    rng: DeterministicRng,
    next_id: usize,
}

impl CandidateFaker {
    pub fn new(seed: u64) -> Self {
        let normalized = if seed == 0 { 1 } else { seed };
        Self {
            rng: DeterministicRng::new(normalized),
            next_id: 1,
        }
    }

    pub fn candidate(&mut self) -> Candidate {
        let id = self.next_id;
        self.next_id += 1;

        let first = self.pick(&FIRST_NAMES);
        let last = self.pick(&LAST_NAMES);
        let slug = format!("{first}{last}").to_ascii_lowercase();

        let mut metrics = BTreeMap::new();
        let mut scores = BTreeMap::new();
        for key in MetricKey::ALL {
            metrics.insert(key, self.metric_value(key));
            scores.insert(key, self.pick(&GRADES).to_owned());
        }

        Candidate {
            id: CandidateId::new(id.to_string()),
            name: format!("{first} {last}"),
            email: format!("{slug}@example.com"),
            job_relevance_rank: id as u32,
            linkedin_url: format!("https://linkedin.com/in/{slug}"),
            metrics,
            scores,
        }
    }

    pub fn candidates(&mut self, count: usize) -> Vec<Candidate> {
        (0..count).map(|_| self.candidate()).collect()
    }

    pub fn document(&mut self, count: usize) -> DashboardData {
        DashboardData {
            requirements: REQUIREMENTS.iter().map(|line| (*line).to_owned()).collect(),
            tech_skills: TECH_SKILLS.iter().map(|skill| (*skill).to_owned()).collect(),
            candidates: self.candidates(count),
        }
    }

    fn metric_value(&mut self, key: MetricKey) -> String {
        match key {
            MetricKey::PipelineHealth => self.pick(&HEALTH).to_owned(),
            MetricKey::ResponseTime => format!("{}.{}h", 1 + self.rng.int_n(9), self.rng.int_n(10)),
            MetricKey::QualityScore | MetricKey::Satisfaction => {
                format!("{}.{}", 5 + self.rng.int_n(5), self.rng.int_n(10))
            }
            MetricKey::ActiveCandidates | MetricKey::RecruitmentGoal => {
                (1 + self.rng.int_n(300)).to_string()
            }
            _ => format!("{}%", 40 + self.rng.int_n(60)),
        }
    }

    fn pick<'a>(&mut self, values: &'a [&'a str]) -> &'a str {
        values[self.rng.int_n(values.len())]
    }
}

/// Bob Smith, id "2": interview rate 73% graded A+, every other metric set.
pub fn bob_smith() -> Candidate {
    let mut candidate = CandidateFaker::new(2).candidate();
    candidate.id = CandidateId::from("2");
    candidate.name = "Bob Smith".to_owned();
    candidate.email = "bob.smith@example.com".to_owned();
    candidate.job_relevance_rank = 2;
    candidate.linkedin_url = "https://linkedin.com/in/bobsmith".to_owned();
    candidate
        .metrics
        .insert(MetricKey::InterviewRate, "73%".to_owned());
    candidate
        .scores
        .insert(MetricKey::InterviewRate, "A+".to_owned());
    candidate
}

pub fn temp_data_path() -> Result<(tempfile::TempDir, PathBuf)> {
    let dir = tempfile::tempdir().context("create temp dir")?;
    let path = dir.path().join("data.json");
    Ok((dir, path))
}

pub fn write_document(path: &Path, data: &DashboardData) -> Result<()> {
    let raw = serde_json::to_string_pretty(data).context("encode dashboard document")?;
    std::fs::write(path, raw).with_context(|| format!("write {}", path.display()))
}
