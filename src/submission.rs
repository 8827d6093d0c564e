//! Submission payload model and form-construction rules.
//!
//! The proxy route forwards payloads as opaque bytes; this module is the
//! typed side of that contract, used by clients building the payload and by
//! tests. The two rules with teeth live in [`build_submitters`]: at most
//! [`MAX_SUBMITTERS`] entries are kept, and USNs get the institutional prefix
//! attached when it is missing.
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub const MAX_SUBMITTERS: usize = 7;
pub const USN_PREFIX: &str = "1MS";

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionType {
    Assignment,
    Report,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    pub submission_type: SubmissionType,
    pub subject_name: String,
    pub subject_code: String,
    pub semester_number: u8,
    pub branch: String,
    pub topic_name: String,
    pub submitters: IndexMap<String, String>,
    pub faculty_name_with_title: String,
    pub designation: String,
    pub from_ay: u16,
    pub to_ay: u16,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SubmitterEntry {
    pub name: String,
    pub usn: String,
}

/// Collapses form rows into the payload's name-to-USN map. Only the first
/// [`MAX_SUBMITTERS`] rows are considered; rows with a blank name or USN are
/// dropped.
pub fn build_submitters(entries: &[SubmitterEntry]) -> IndexMap<String, String> {
    entries
        .iter()
        .take(MAX_SUBMITTERS)
        .filter(|entry| !entry.name.trim().is_empty() && !entry.usn.trim().is_empty())
        .map(|entry| (entry.name.clone(), with_usn_prefix(&entry.usn)))
        .collect()
}

/// Attaches the institutional prefix to a USN unless it is already there.
pub fn with_usn_prefix(usn: &str) -> String {
    if usn.is_empty() || usn.starts_with(USN_PREFIX) {
        usn.to_string()
    } else {
        format!("{USN_PREFIX}{usn}")
    }
}
