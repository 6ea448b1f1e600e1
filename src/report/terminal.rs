use std::io::Write;

use console::Color;

use crate::error::Result;
use crate::models::{Contributor, LanguageStats, RecentActivity, Report, Repository};
use crate::render::charts::{bar, horizontal_bar, language_chart, pad, sparkline, table};
use crate::render::Renderer;
use crate::report::format::{
    days_between, format_date, format_duration, format_number, or_not_available, window_label,
    NOT_AVAILABLE,
};
use crate::report::stats::{contributor_shares, top_languages};

const RULE_WIDTH: usize = 50;
const LABEL_WIDTH: usize = 14;
const CHART_WIDTH: usize = 40;
const CONTRIBUTOR_WIDTHS: [usize; 5] = [3, 15, 13, 12, 7];
const ACTIVITY_BAR_WIDTH: usize = 20;

pub struct TerminalReport<'a, W: Write> {
    out: W,
    renderer: &'a Renderer,
}

impl<'a, W: Write> TerminalReport<'a, W> {
    pub fn new(out: W, renderer: &'a Renderer) -> Self {
        Self { out, renderer }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn render(&mut self, report: &Report) -> Result<()> {
        self.header()?;
        self.overview(report)?;
        self.key_metrics(&report.repository)?;

        if let Some(contributors) = report.shown_contributors() {
            self.contributors(contributors)?;
        }
        if let Some(languages) = report.shown_languages() {
            self.languages(languages)?;
        }
        if let Some(activity) = &report.activity {
            self.activity(activity)?;
        }

        self.out.flush()?;
        Ok(())
    }

    fn section(&mut self, title: &str) -> Result<()> {
        writeln!(self.out, "{}", self.renderer.bold(title))?;
        writeln!(self.out, "{}", self.renderer.dim(&"─".repeat(RULE_WIDTH)))?;
        Ok(())
    }

    fn field(&mut self, label: &str, value: &str) -> Result<()> {
        writeln!(self.out, "{}{}", self.renderer.muted(&pad(label, LABEL_WIDTH)), value)?;
        Ok(())
    }

    pub fn header(&mut self) -> Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", self.renderer.title("📊 Repository Statistics"))?;
        writeln!(self.out, "{}", self.renderer.dim(&"─".repeat(RULE_WIDTH)))?;
        writeln!(self.out)?;
        Ok(())
    }

    pub fn overview(&mut self, report: &Report) -> Result<()> {
        let repo = &report.repository;
        let now = report.generated_at;
        let r = *self.renderer;

        self.section("📋 Repository Overview")?;
        self.field("Name:", &r.highlight(&repo.id.to_string()))?;
        self.field("Description:", or_not_available(repo.description.as_deref()))?;
        self.field("Homepage:", or_not_available(repo.homepage.as_deref()))?;
        self.field("Created:", &format_date(&repo.created_at))?;
        self.field(
            "Last Updated:",
            &format!(
                "{} ({})",
                format_date(&repo.updated_at),
                format_duration(days_between(&repo.updated_at, &now))
            ),
        )?;
        let pushed = repo
            .pushed_at
            .map(|p| format!("{} ({})", format_date(&p), format_duration(days_between(&p, &now))))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());
        self.field("Last Push:", &pushed)?;
        self.field("Primary Lang:", or_not_available(repo.primary_language.as_deref()))?;
        self.field("License:", or_not_available(repo.license.as_deref()))?;

        let mut badges = Vec::new();
        if repo.is_private {
            badges.push(r.warning("🔒 Private"));
        }
        if repo.is_archived {
            badges.push(r.dim("📦 Archived"));
        }
        if repo.is_fork {
            badges.push(r.color(Color::Blue, "🍴 Fork"));
        }
        if !badges.is_empty() {
            self.field("Status:", &badges.join(" "))?;
        }

        writeln!(self.out)?;
        Ok(())
    }

    pub fn key_metrics(&mut self, repo: &Repository) -> Result<()> {
        self.section("📈 Key Metrics")?;

        let metrics = [
            ("⭐", "Stars", repo.stars),
            ("🍴", "Forks", repo.forks),
            ("👁️", "Watchers", repo.watchers),
            ("🐛", "Issues", repo.open_issues),
            ("🔀", "Pull Requests", repo.pull_requests),
            ("📦", "Releases", repo.releases),
            ("💾", "Commits", repo.commits),
        ];

        for (icon, label, value) in metrics {
            writeln!(
                self.out,
                "{} {:<13} {}",
                icon,
                label,
                self.renderer.value(&format_number(value))
            )?;
        }

        writeln!(self.out)?;
        Ok(())
    }

    pub fn contributors(&mut self, contributors: &[Contributor]) -> Result<()> {
        let shares = contributor_shares(contributors);
        if shares.is_empty() {
            return Ok(());
        }
        self.section("👥 Top Contributors")?;

        let max = shares.iter().map(|s| s.contributions).max().unwrap_or(0) as f64;
        let rows: Vec<Vec<String>> = shares
            .iter()
            .map(|s| {
                vec![
                    s.rank.to_string(),
                    s.login.clone(),
                    format_number(s.contributions),
                    bar(self.renderer, s.contributions as f64, max, 10),
                    format!("{:.1}%", s.percentage),
                ]
            })
            .collect();

        for line in table(
            self.renderer,
            &["#", "Username", "Contributions", "Share", "%"],
            &rows,
            Some(&CONTRIBUTOR_WIDTHS),
        ) {
            writeln!(self.out, "{}", line)?;
        }

        let counts: Vec<f64> = shares.iter().map(|s| s.contributions as f64).collect();
        self.field("Spread:", &sparkline(&counts))?;

        writeln!(self.out)?;
        Ok(())
    }

    pub fn languages(&mut self, languages: &LanguageStats) -> Result<()> {
        let shares = top_languages(languages);
        if shares.is_empty() {
            return Ok(());
        }
        self.section("💻 Language Distribution")?;

        for line in language_chart(self.renderer, &shares, CHART_WIDTH) {
            writeln!(self.out, "{}", line)?;
        }

        writeln!(self.out)?;
        Ok(())
    }

    pub fn activity(&mut self, activity: &RecentActivity) -> Result<()> {
        let r = *self.renderer;
        self.section(&format!("📊 Recent Activity ({})", window_label(activity.window_days)))?;

        let max = activity
            .commits
            .max(activity.issues)
            .max(activity.pull_requests) as f64;
        let rows = [
            (r.color(Color::Magenta, "●"), "Commits:", activity.commits),
            (r.color(Color::Cyan, "●"), "Issues:", activity.issues),
            (r.color(Color::Blue, "●"), "Pull Requests:", activity.pull_requests),
        ];

        for (bullet, label, value) in rows {
            writeln!(
                self.out,
                "{} {}  {}",
                bullet,
                horizontal_bar(&r, label, value as f64, max, ACTIVITY_BAR_WIDTH),
                r.value(&format_number(value))
            )?;
        }

        writeln!(self.out)?;
        Ok(())
    }

    pub fn success(&mut self, message: &str) -> Result<()> {
        writeln!(self.out, "\n✅ {}\n", self.renderer.success(message))?;
        Ok(())
    }
}

/// The single line printed on stderr when an invocation fails.
pub fn error_line(renderer: &Renderer, message: &str) -> String {
    format!("\n❌ {} {}\n", renderer.error("Error:"), message)
}
