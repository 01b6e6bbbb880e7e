//! Persona — who the chatbot speaks as, and the system prompt built from it.
//!
//! Built once at startup and shared read-only across requests.

pub mod prompts;

use crate::config::Config;
use crate::documents::Documents;
use crate::persona::prompts::PERSONA_SYSTEM_TEMPLATE;

/// Display name and contact address of the represented person.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerIdentity {
    pub name: String,
    pub email: String,
}

impl OwnerIdentity {
    pub fn from_config(config: &Config) -> Self {
        Self {
            name: config.owner_name.clone(),
            email: config.owner_email.clone(),
        }
    }
}

/// Interpolates identity and grounding documents into the persona template.
///
/// Documents are spliced in last, in a single pass, so text inside them that
/// happens to look like a placeholder is left untouched.
pub fn build_system_prompt(owner: &OwnerIdentity, summary: &str, resume: &str) -> String {
    let rules = PERSONA_SYSTEM_TEMPLATE
        .replace("{owner_name}", &owner.name)
        .replace("{owner_email}", &owner.email);

    let (intro, after_summary) = rules
        .split_once("{summary_text}")
        .unwrap_or((rules.as_str(), ""));
    let (middle, outro) = after_summary
        .split_once("{resume_text}")
        .unwrap_or((after_summary, ""));

    format!("{intro}{summary}{middle}{resume}{outro}")
}

/// Immutable startup state: the identity plus its precomputed system instruction.
#[derive(Debug, Clone)]
pub struct Persona {
    owner: OwnerIdentity,
    system_prompt: String,
}

impl Persona {
    pub fn new(owner: OwnerIdentity, docs: &Documents) -> Self {
        let system_prompt = build_system_prompt(&owner, docs.summary.text(), docs.resume.text());
        Self {
            owner,
            system_prompt,
        }
    }

    pub fn owner(&self) -> &OwnerIdentity {
        &self.owner
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }
}
