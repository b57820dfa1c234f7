// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, bail};
use url::Url;
use url::form_urlencoded::byte_serialize;

use crate::model::Candidate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutboundLink {
    Mail(String),
    Profile(String),
}

impl OutboundLink {
    pub fn target(&self) -> &str {
        match self {
            Self::Mail(target) | Self::Profile(target) => target,
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Mail(_) => "mail",
            Self::Profile(_) => "profile",
        }
    }
}

pub fn contact_subject(candidate: &Candidate) -> String {
    format!("Regarding your application - {}", candidate.name)
}

pub fn contact_body(candidate: &Candidate) -> String {
    format!(
        "Hi {},\n\nI hope this email finds you well.\n\nBest regards",
        candidate.name
    )
}

pub fn mailto_link(candidate: &Candidate) -> Result<OutboundLink> {
    let email = candidate.email.trim();
    if email.is_empty() {
        bail!("{} has no email address", candidate.name);
    }
    Ok(OutboundLink::Mail(format!(
        "mailto:{email}?subject={}&body={}",
        encode_component(&contact_subject(candidate)),
        encode_component(&contact_body(candidate)),
    )))
}

pub fn profile_link(candidate: &Candidate) -> Result<OutboundLink> {
    let raw = candidate.linkedin_url.trim();
    if raw.is_empty() {
        bail!("{} has no profile link", candidate.name);
    }
    let url = Url::parse(raw).with_context(|| format!("invalid profile link {raw:?}"))?;
    if !matches!(url.scheme(), "http" | "https") {
        bail!(
            "profile link {raw:?} uses scheme {:?}; expected http or https",
            url.scheme()
        );
    }
    Ok(OutboundLink::Profile(url.into()))
}

// Mail clients read `+` literally, so spaces are written as %20.
fn encode_component(value: &str) -> String {
    byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

#[cfg(test)]
mod tests {
    use super::{OutboundLink, encode_component, mailto_link, profile_link};
    use crate::{Candidate, CandidateId};
    use std::collections::BTreeMap;

    fn candidate(email: &str, profile: &str) -> Candidate {
        Candidate {
            id: CandidateId::from("1"),
            name: "Ana Lee".to_owned(),
            email: email.to_owned(),
            job_relevance_rank: 1,
            linkedin_url: profile.to_owned(),
            metrics: BTreeMap::new(),
            scores: BTreeMap::new(),
        }
    }

    #[test]
    fn mailto_link_encodes_subject_and_body() {
        let link = mailto_link(&candidate("ana@example.com", "")).expect("email present");
        assert_eq!(
            link,
            OutboundLink::Mail(
                "mailto:ana@example.com?subject=Regarding%20your%20application%20-%20Ana%20Lee&body=Hi%20Ana%20Lee%2C%0A%0AI%20hope%20this%20email%20finds%20you%20well.%0A%0ABest%20regards"
                    .to_owned()
            )
        );
        assert_eq!(link.label(), "mail");
    }

    #[test]
    fn literal_plus_survives_encoding() {
        assert_eq!(encode_component("C++ dev"), "C%2B%2B%20dev");
    }

    #[test]
    fn mailto_requires_an_email() {
        let error = mailto_link(&candidate("  ", "")).expect_err("blank email");
        assert!(error.to_string().contains("no email address"));
    }

    #[test]
    fn profile_link_accepts_web_urls_only() {
        let link = profile_link(&candidate("", "https://linkedin.com/in/analee"))
            .expect("valid profile");
        assert_eq!(link.target(), "https://linkedin.com/in/analee");

        let error =
            profile_link(&candidate("", "javascript:alert(1)")).expect_err("non-web scheme");
        assert!(error.to_string().contains("expected http or https"));

        assert!(profile_link(&candidate("", "")).is_err());
    }
}
