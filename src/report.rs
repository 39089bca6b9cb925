use crate::validate::ValidationResult;
use anyhow::Result;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Render results as a human-readable report, one line per violation.
pub fn render_text(results: &[ValidationResult]) -> String {
    let mut out = String::new();
    for (i, result) in results.iter().enumerate() {
        if result.valid {
            out.push_str(&format!("legend[{i}]: ok\n"));
        } else {
            out.push_str(&format!(
                "legend[{i}]: {} violation(s)\n",
                result.errors.len()
            ));
            for err in &result.errors {
                let path = if err.path.is_empty() {
                    "(root)"
                } else {
                    err.path.as_str()
                };
                out.push_str(&format!(
                    "  [{}] {}: {}\n",
                    err.kind.as_str(),
                    path,
                    err.message
                ));
            }
        }
    }
    out
}

/// Save results as pretty JSON array.
pub fn save_json<P: AsRef<Path>>(results: &[ValidationResult], path: P) -> Result<()> {
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(results)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::validate_legends;
    use serde_json::json;
    use tempfile::tempdir;

    fn sample_results() -> Vec<ValidationResult> {
        validate_legends(&[
            json!({ "anchor": "bottom", "direction": "row", "itemWidth": 100, "itemHeight": 24 }),
            json!({ "direction": "diagonal", "itemWidth": 100, "itemHeight": 24 }),
        ])
    }

    #[test]
    fn text_report_names_every_violation() {
        let report = render_text(&sample_results());
        assert!(report.contains("legend[0]: ok"));
        assert!(report.contains("legend[1]: 2 violation(s)"));
        assert!(report.contains("[missing-required-field] anchor"));
        assert!(report.contains("[invalid-enum-value] direction"));
    }

    #[test]
    fn json_report_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.json");
        let results = sample_results();
        save_json(&results, &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let back: Vec<ValidationResult> = serde_json::from_str(&text).unwrap();
        assert_eq!(back, results);
    }
}
