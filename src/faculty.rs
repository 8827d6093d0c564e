//! Faculty autocomplete dataset.
//!
//! The dataset is a newline-delimited JSON file, one record per line. It is
//! read at most once per process and never refreshed; a restart picks up a
//! new file. Search is a plain case-insensitive substring filter over names,
//! capped at [`MAX_RESULTS`], in file order.
use serde::{Deserialize, Serialize};
use tokio::fs::read_to_string;
use tracing::warn;

pub const MAX_RESULTS: usize = 10;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FacultyRecord {
    pub name: String,
    pub prefix: String,
    pub designation: String,
    pub branch: String,
}

/// Reads the dataset file. Fails open: any read or parse error logs a warning
/// and yields an empty list, so autocomplete degrades to free-form input
/// instead of failing the request.
pub async fn load(path: &str) -> Vec<FacultyRecord> {
    let text = match read_to_string(path).await {
        Ok(text) => text,
        Err(e) => {
            warn!("Failed to read faculty data from {path}: {e}");
            return Vec::new();
        }
    };

    parse_records(&text).unwrap_or_else(|e| {
        warn!("Failed to parse faculty data from {path}: {e}");
        Vec::new()
    })
}

fn parse_records(text: &str) -> Result<Vec<FacultyRecord>, serde_json::Error> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(serde_json::from_str)
        .collect()
}

/// Case-insensitive substring filter over record names. Blank queries match
/// nothing. Source order is preserved, no ranking.
pub fn search<'a>(query: &str, records: &'a [FacultyRecord]) -> Vec<&'a FacultyRecord> {
    let query = query.trim().to_lowercase();

    if query.is_empty() {
        return Vec::new();
    }

    records
        .iter()
        .filter(|record| record.name.to_lowercase().contains(&query))
        .take(MAX_RESULTS)
        .collect()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn record(name: &str) -> FacultyRecord {
        FacultyRecord {
            name: name.to_string(),
            prefix: "Dr.".to_string(),
            designation: "Professor".to_string(),
            branch: "Computer Science and Engineering".to_string(),
        }
    }

    #[test]
    fn blank_queries_match_nothing() {
        let records = vec![record("Anita Rao"), record("Ravi Kumar")];

        assert!(search("", &records).is_empty());
        assert!(search("   ", &records).is_empty());
        assert!(search("\t\n", &records).is_empty());
    }

    #[test]
    fn matches_are_case_insensitive_substrings_in_source_order() {
        let records = vec![
            record("Anita Rao"),
            record("Ravi Kumar"),
            record("Sunita Raval"),
            record("Prakash Hegde"),
        ];

        let hits = search("RAV", &records);

        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].name, "Ravi Kumar");
        assert_eq!(hits[1].name, "Sunita Raval");

        for hit in hits {
            assert!(hit.name.to_lowercase().contains("rav"));
        }
    }

    #[test]
    fn results_are_capped_at_ten() {
        let records: Vec<FacultyRecord> = (0..25).map(|i| record(&format!("Rao {i}"))).collect();

        let hits = search("rao", &records);

        assert_eq!(hits.len(), MAX_RESULTS);
        assert_eq!(hits[0].name, "Rao 0");
        assert_eq!(hits[9].name, "Rao 9");
    }

    #[test]
    fn query_whitespace_is_trimmed_before_matching() {
        let records = vec![record("Anita Rao")];

        let hits = search("  rao  ", &records);

        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn parses_one_record_per_line_skipping_blank_lines() {
        let text = concat!(
            r#"{"name":"Anita Rao","prefix":"Dr.","designation":"Professor","branch":"CSE"}"#,
            "\n\n",
            r#"{"name":"Ravi Kumar","prefix":"Mr.","designation":"Assistant Professor","branch":"ISE"}"#,
            "\n",
        );

        let records = parse_records(text).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Anita Rao");
        assert_eq!(records[1].prefix, "Mr.");
    }

    #[tokio::test]
    async fn load_fails_open_on_missing_file() {
        assert!(load("/nonexistent/faculty.jsonl").await.is_empty());
    }

    #[tokio::test]
    async fn load_fails_open_on_malformed_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("faculty.jsonl");

        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            r#"{{"name":"Anita Rao","prefix":"Dr.","designation":"Professor","branch":"CSE"}}"#
        )
        .unwrap();
        writeln!(file, "not json").unwrap();

        assert!(load(path.to_str().unwrap()).await.is_empty());
    }
}
