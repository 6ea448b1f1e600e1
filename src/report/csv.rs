use std::io;

use chrono::{DateTime, SecondsFormat, Utc};
use csv::{Terminator, WriterBuilder};

use crate::error::{Error, Result};
use crate::models::Report;
use crate::report::format::{or_not_available, window_label, NOT_AVAILABLE};
use crate::report::stats::{contributor_shares, top_languages};

type Rows = Vec<Vec<String>>;

fn timestamp(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn row<const N: usize>(fields: [&str; N]) -> Vec<String> {
    fields.iter().map(|f| f.to_string()).collect()
}

/// Encodes one section. Sections have different widths, hence `flexible`.
fn encode(rows: &Rows) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .flexible(true)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    for record in rows {
        writer.write_record(record)?;
    }

    let bytes = writer.into_inner().map_err(|e| Error::Io(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| Error::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

pub fn render(report: &Report) -> Result<String> {
    let repo = &report.repository;
    let mut sections: Vec<Rows> = Vec::new();

    sections.push(vec![
        row(["Repository Statistics Report"]),
        row(["Generated", &timestamp(&report.generated_at)]),
    ]);

    let pushed = repo
        .pushed_at
        .map(|p| timestamp(&p))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());
    sections.push(vec![
        row(["Repository Overview"]),
        row(["Property", "Value"]),
        row(["Name", &repo.id.to_string()]),
        row(["Owner", repo.id.owner()]),
        row(["Description", or_not_available(repo.description.as_deref())]),
        row(["Homepage", or_not_available(repo.homepage.as_deref())]),
        row(["Created", &timestamp(&repo.created_at)]),
        row(["Last Updated", &timestamp(&repo.updated_at)]),
        row(["Last Push", &pushed]),
        row(["Primary Language", or_not_available(repo.primary_language.as_deref())]),
        row(["License", or_not_available(repo.license.as_deref())]),
        row(["Private", &repo.is_private.to_string()]),
        row(["Archived", &repo.is_archived.to_string()]),
        row(["Fork", &repo.is_fork.to_string()]),
    ]);

    let metrics = [
        ("Stars", repo.stars),
        ("Forks", repo.forks),
        ("Watchers", repo.watchers),
        ("Issues", repo.open_issues),
        ("Pull Requests", repo.pull_requests),
        ("Releases", repo.releases),
        ("Commits", repo.commits),
    ];
    let mut rows = vec![row(["Key Metrics"]), row(["Metric", "Count"])];
    rows.extend(metrics.iter().map(|&(m, c)| row([m, &c.to_string()])));
    sections.push(rows);

    if let Some(contributors) = report.shown_contributors() {
        let mut rows = vec![
            row(["Top Contributors"]),
            row(["Rank", "Username", "Contributions", "Percentage"]),
        ];
        rows.extend(contributor_shares(contributors).iter().map(|s| {
            row([
                &s.rank.to_string(),
                &s.login,
                &s.contributions.to_string(),
                &format!("{:.1}%", s.percentage),
            ])
        }));
        sections.push(rows);
    }

    if let Some(languages) = report.shown_languages() {
        let mut rows = vec![
            row(["Language Distribution"]),
            row(["Language", "Bytes", "Percentage"]),
        ];
        rows.extend(top_languages(languages).iter().map(|s| {
            row([&s.name, &s.bytes.to_string(), &format!("{:.1}%", s.percentage)])
        }));
        sections.push(rows);
    }

    if let Some(activity) = &report.activity {
        sections.push(vec![
            row([&format!("Recent Activity ({})", window_label(activity.window_days))]),
            row(["Type", "Count"]),
            row(["Commits", &activity.commits.to_string()]),
            row(["Issues", &activity.issues.to_string()]),
            row(["Pull Requests", &activity.pull_requests.to_string()]),
        ]);
    }

    let encoded = sections.iter().map(encode).collect::<Result<Vec<_>>>()?;
    Ok(encoded.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_minimal_csv_has_overview_and_metrics_only() {
        let out = render(&fixtures::minimal_report()).unwrap();

        assert!(out.starts_with("Repository Statistics Report\nGenerated,2024-05-02T08:00:00Z\n\n"));
        assert!(out.contains("\nRepository Overview\nProperty,Value\nName,octo-org/widgets\n"));
        assert!(out.contains("\nKey Metrics\nMetric,Count\nStars,1200\nForks,340\n"));
        assert!(!out.contains("Top Contributors"));
        assert!(!out.contains("Language Distribution"));
        assert!(!out.contains("Recent Activity"));
    }

    #[test]
    fn test_fields_with_commas_are_quoted() {
        let out = render(&fixtures::minimal_report()).unwrap();
        assert!(out.contains("\nDescription,\"Widgets, gadgets and gizmos\"\n"), "{out}");
    }

    #[test]
    fn test_missing_fields_marked() {
        let mut report = fixtures::minimal_report();
        report.repository = fixtures::bare_repository();
        let out = render(&report).unwrap();

        assert!(out.contains("\nDescription,N/A\n"));
        assert!(out.contains("\nLicense,N/A\n"));
        assert!(out.contains("\nPrimary Language,N/A\n"));
    }

    #[test]
    fn test_full_csv_sections() {
        let out = render(&fixtures::full_report()).unwrap();
        let tail = &out[out.find("Top Contributors").unwrap()..];

        assert_eq!(
            tail,
            "Top Contributors\n\
             Rank,Username,Contributions,Percentage\n\
             1,alice,50,100.0%\n\
             2,bob,25,50.0%\n\
             3,carol,10,20.0%\n\
             \n\
             Language Distribution\n\
             Language,Bytes,Percentage\n\
             TypeScript,800,80.0%\n\
             JavaScript,200,20.0%\n\
             \n\
             Recent Activity (Last 7 Days)\n\
             Type,Count\n\
             Commits,17\n\
             Issues,5\n\
             Pull Requests,3\n"
        );
    }

    #[test]
    fn test_parses_back_with_csv_reader() {
        let out = render(&fixtures::full_report()).unwrap();
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(out.as_bytes());

        let records: Vec<csv::StringRecord> = reader.records().collect::<std::result::Result<_, _>>().unwrap();
        let description = records.iter().find(|r| &r[0] == "Description").unwrap();
        assert_eq!(&description[1], "Widgets, gadgets and gizmos");
    }
}
