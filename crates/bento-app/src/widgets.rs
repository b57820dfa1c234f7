// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Result, bail};
use std::collections::BTreeSet;

use crate::layout::WidgetDescriptor;
use crate::model::{Candidate, MetricKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Emerald,
    Blue,
    Amber,
    Purple,
    Green,
    Cyan,
}

/// One metric card: which metric it tracks and what it shows while no
/// candidate is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetSpec {
    pub id: &'static str,
    pub key: MetricKey,
    pub header: &'static str,
    pub default_value: &'static str,
    pub default_score: &'static str,
    pub default_person: &'static str,
    pub caption: Option<&'static str>,
    pub accent: Accent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricCard {
    pub header: &'static str,
    pub value: String,
    pub score: String,
    pub person: String,
    pub caption: Option<&'static str>,
    pub accent: Accent,
}

impl WidgetSpec {
    pub fn card(&self, selected: Option<&Candidate>) -> MetricCard {
        let (value, score, person) = match selected {
            None => (
                self.default_value.to_owned(),
                self.default_score.to_owned(),
                self.default_person.to_owned(),
            ),
            Some(candidate) => (
                candidate.metric(self.key).unwrap_or_default().to_owned(),
                candidate.score(self.key).unwrap_or_default().to_owned(),
                candidate.name.clone(),
            ),
        };

        MetricCard {
            header: self.header,
            value,
            score,
            person,
            caption: self.caption,
            accent: self.accent,
        }
    }
}

pub type Widget = WidgetDescriptor<&'static WidgetSpec>;

pub const REGISTRY: [WidgetSpec; 12] = [
    WidgetSpec {
        id: "team-performance",
        key: MetricKey::TeamPerformance,
        header: "Team Performance",
        default_value: "+12%",
        default_score: "8.5/10",
        default_person: "Sarah M.",
        caption: None,
        accent: Accent::Emerald,
    },
    WidgetSpec {
        id: "active-candidates",
        key: MetricKey::ActiveCandidates,
        header: "Active Candidates",
        default_value: "247",
        default_score: "95%",
        default_person: "Mike R.",
        caption: None,
        accent: Accent::Blue,
    },
    WidgetSpec {
        id: "interview-rate",
        key: MetricKey::InterviewRate,
        header: "Interview Rate",
        default_value: "73%",
        default_score: "A+",
        default_person: "Lisa K.",
        caption: None,
        accent: Accent::Amber,
    },
    WidgetSpec {
        id: "success-rate",
        key: MetricKey::SuccessRate,
        header: "Success Rate",
        default_value: "89%",
        default_score: "9.2/10",
        default_person: "David L.",
        caption: Some("Conversion Rate"),
        accent: Accent::Purple,
    },
    WidgetSpec {
        id: "ai-insights",
        key: MetricKey::AiInsights,
        header: "AI Insights",
        default_value: "AI",
        default_score: "98%",
        default_person: "Emma W.",
        caption: Some("Ready"),
        accent: Accent::Blue,
    },
    WidgetSpec {
        id: "recruitment-goal",
        key: MetricKey::RecruitmentGoal,
        header: "Recruitment Goal",
        default_value: "15",
        default_score: "75%",
        default_person: "Alex T.",
        caption: Some("Hires this month"),
        accent: Accent::Emerald,
    },
    WidgetSpec {
        id: "pipeline-health",
        key: MetricKey::PipelineHealth,
        header: "Pipeline Health",
        default_value: "Excellent",
        default_score: "A",
        default_person: "Tom B.",
        caption: None,
        accent: Accent::Green,
    },
    WidgetSpec {
        id: "response-time",
        key: MetricKey::ResponseTime,
        header: "Response Time",
        default_value: "2.3h",
        default_score: "Fast",
        default_person: "Nina P.",
        caption: None,
        accent: Accent::Blue,
    },
    WidgetSpec {
        id: "quality-score",
        key: MetricKey::QualityScore,
        header: "Quality Score",
        default_value: "9.1",
        default_score: "High",
        default_person: "Ryan S.",
        caption: None,
        accent: Accent::Purple,
    },
    WidgetSpec {
        id: "team-efficiency",
        key: MetricKey::TeamEfficiency,
        header: "Team Efficiency",
        default_value: "94%",
        default_score: "High",
        default_person: "Maya L.",
        caption: None,
        accent: Accent::Green,
    },
    WidgetSpec {
        id: "new-metric",
        key: MetricKey::NewMetric,
        header: "New Metric",
        default_value: "Amazing!",
        default_score: "100%",
        default_person: "You!",
        caption: None,
        accent: Accent::Cyan,
    },
    WidgetSpec {
        id: "satisfaction",
        key: MetricKey::Satisfaction,
        header: "Satisfaction",
        default_value: "9.8",
        default_score: "Excellent",
        default_person: "Jordan M.",
        caption: None,
        accent: Accent::Emerald,
    },
];

pub const DEFAULT_WIDGETS: [&str; 9] = [
    "team-performance",
    "active-candidates",
    "interview-rate",
    "success-rate",
    "ai-insights",
    "pipeline-health",
    "response-time",
    "quality-score",
    "team-efficiency",
];

pub fn widget_spec(id: &str) -> Option<&'static WidgetSpec> {
    REGISTRY.iter().find(|spec| spec.id == id)
}

/// Builds the mounted widget list in the given order.
pub fn mount_widgets<S: AsRef<str>>(ids: &[S]) -> Result<Vec<Widget>> {
    let mut seen = BTreeSet::new();
    let mut widgets = Vec::with_capacity(ids.len());
    for id in ids {
        let id = id.as_ref();
        let Some(spec) = widget_spec(id) else {
            let known = REGISTRY
                .iter()
                .map(|spec| spec.id)
                .collect::<Vec<_>>()
                .join(", ");
            bail!("unknown widget {id:?}; known widgets: {known}");
        };
        if !seen.insert(spec.id) {
            bail!("widget {id:?} is listed more than once");
        }
        widgets.push(WidgetDescriptor::new(spec.id, spec));
    }
    Ok(widgets)
}

pub fn default_widgets() -> Vec<Widget> {
    DEFAULT_WIDGETS
        .iter()
        .filter_map(|id| widget_spec(id))
        .map(|spec| WidgetDescriptor::new(spec.id, spec))
        .collect()
}

/// Metric keys the mounted widgets read from a selected candidate.
pub fn required_metrics(widgets: &[Widget]) -> Vec<MetricKey> {
    let keys = widgets
        .iter()
        .map(|widget| widget.payload.key)
        .collect::<BTreeSet<_>>();
    keys.into_iter().collect()
}
