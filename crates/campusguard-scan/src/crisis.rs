//! Crisis support contacts shown next to self-harm content.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrisisResource {
    pub name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<&'static str>,
    pub website: &'static str,
}

const RESOURCES: &[CrisisResource] = &[
    CrisisResource {
        name: "National Suicide Prevention Lifeline",
        phone: Some("988"),
        text: None,
        website: "https://988lifeline.org/",
    },
    CrisisResource {
        name: "Crisis Text Line",
        phone: None,
        text: Some("Text HOME to 741741"),
        website: "https://www.crisistextline.org/",
    },
    CrisisResource {
        name: "The Trevor Project",
        phone: Some("1-866-488-7386"),
        text: None,
        website: "https://www.thetrevorproject.org/",
    },
];

pub fn crisis_resources() -> &'static [CrisisResource] {
    RESOURCES
}
