// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use bento_app::{Candidate, CandidateId, DashboardData, MetricKey};
use std::collections::BTreeMap;

const REQUIREMENTS: [&str; 6] = [
    "5+ years of software development experience",
    "Strong problem-solving skills",
    "Excellent communication abilities",
    "Team collaboration experience",
    "Agile/Scrum methodology familiarity",
    "Bachelor's degree in Computer Science or related field",
];

const TECH_SKILLS: [&str; 12] = [
    "React",
    "TypeScript",
    "Node.js",
    "Python",
    "AWS",
    "Docker",
    "Git",
    "PostgreSQL",
    "GraphQL",
    "REST APIs",
    "MongoDB",
    "Redis",
];

struct DemoCandidate {
    id: &'static str,
    name: &'static str,
    email: &'static str,
    slug: &'static str,
    // value, score; indexed like MetricKey::ALL
    metrics: [(&'static str, &'static str); 12],
}

const CANDIDATES: [DemoCandidate; 5] = [
    DemoCandidate {
        id: "1",
        name: "Sarah Johnson",
        email: "sarah.j@email.com",
        slug: "sarahjohnson",
        metrics: [
            ("+18%", "9.1/10"),
            ("12", "97%"),
            ("81%", "A+"),
            ("92%", "9.5/10"),
            ("Strong fit", "96%"),
            ("4", "80%"),
            ("Excellent", "A"),
            ("1.2h", "Fast"),
            ("9.4", "High"),
            ("96%", "High"),
            ("Stellar", "99%"),
            ("9.6", "Excellent"),
        ],
    },
    DemoCandidate {
        id: "2",
        name: "Bob Smith",
        email: "bob.smith@email.com",
        slug: "bobsmith",
        metrics: [
            ("+9%", "8.0/10"),
            ("8", "90%"),
            ("73%", "A+"),
            ("85%", "8.8/10"),
            ("Good fit", "91%"),
            ("3", "70%"),
            ("Good", "B+"),
            ("2.8h", "Average"),
            ("8.7", "High"),
            ("90%", "High"),
            ("Solid", "88%"),
            ("9.1", "Great"),
        ],
    },
    DemoCandidate {
        id: "3",
        name: "Emily Rodriguez",
        email: "emily.r@email.com",
        slug: "emilyrodriguez",
        metrics: [
            ("+11%", "8.4/10"),
            ("10", "93%"),
            ("69%", "A"),
            ("87%", "9.0/10"),
            ("Promising", "89%"),
            ("3", "65%"),
            ("Good", "A-"),
            ("3.1h", "Average"),
            ("8.9", "High"),
            ("88%", "Medium"),
            ("Rising", "85%"),
            ("8.8", "Great"),
        ],
    },
    DemoCandidate {
        id: "4",
        name: "David Kim",
        email: "david.k@email.com",
        slug: "davidkim",
        metrics: [
            ("+6%", "7.6/10"),
            ("7", "86%"),
            ("64%", "B+"),
            ("79%", "8.1/10"),
            ("Moderate fit", "82%"),
            ("2", "55%"),
            ("Fair", "B"),
            ("4.0h", "Slow"),
            ("8.1", "Medium"),
            ("83%", "Medium"),
            ("Steady", "80%"),
            ("8.2", "Good"),
        ],
    },
    DemoCandidate {
        id: "5",
        name: "Lisa Thompson",
        email: "lisa.t@email.com",
        slug: "lisathompson",
        metrics: [
            ("+4%", "7.1/10"),
            ("5", "81%"),
            ("58%", "B"),
            ("74%", "7.7/10"),
            ("Developing", "76%"),
            ("2", "50%"),
            ("Fair", "B-"),
            ("5.2h", "Slow"),
            ("7.6", "Medium"),
            ("78%", "Low"),
            ("Emerging", "72%"),
            ("7.9", "Good"),
        ],
    },
];

/// A complete document with every metric filled in for every candidate.
pub fn demo_document() -> DashboardData {
    DashboardData {
        requirements: REQUIREMENTS.iter().map(|line| (*line).to_owned()).collect(),
        tech_skills: TECH_SKILLS.iter().map(|skill| (*skill).to_owned()).collect(),
        candidates: CANDIDATES
            .iter()
            .enumerate()
            .map(|(index, demo)| demo_candidate(index, demo))
            .collect(),
    }
}

fn demo_candidate(index: usize, demo: &DemoCandidate) -> Candidate {
    let mut metrics = BTreeMap::new();
    let mut scores = BTreeMap::new();
    for (key, (value, score)) in MetricKey::ALL.into_iter().zip(demo.metrics) {
        metrics.insert(key, value.to_owned());
        scores.insert(key, score.to_owned());
    }

    Candidate {
        id: CandidateId::from(demo.id),
        name: demo.name.to_owned(),
        email: demo.email.to_owned(),
        job_relevance_rank: index as u32 + 1,
        linkedin_url: format!("https://linkedin.com/in/{}", demo.slug),
        metrics,
        scores,
    }
}
