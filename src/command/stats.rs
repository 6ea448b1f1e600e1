use std::future::Future;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::config::DEFAULT_ACTIVITY_DAYS;
use crate::error::{Error, Result};
use crate::github::GitHubClient;
use crate::models::{RepoId, Report};
use crate::render::Renderer;
use crate::report::{ReportFormat, TerminalReport};

#[derive(Debug, Clone)]
pub struct StatsOptions {
    pub repo: Option<String>,
    pub contributors: bool,
    pub languages: bool,
    pub activity: bool,
    pub all: bool,
    pub export: Option<String>,
    pub output: Option<PathBuf>,
    pub format: String,
    pub days: u32,
}

impl Default for StatsOptions {
    fn default() -> Self {
        Self {
            repo: None,
            contributors: false,
            languages: false,
            activity: false,
            all: false,
            export: None,
            output: None,
            format: "terminal".to_string(),
            days: DEFAULT_ACTIVITY_DAYS,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    pub contributors: bool,
    pub languages: bool,
    pub activity: bool,
}

impl From<&StatsOptions> for Selection {
    fn from(options: &StatsOptions) -> Self {
        Self {
            contributors: options.all || options.contributors,
            languages: options.all || options.languages,
            activity: options.all || options.activity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPlan {
    pub format: ReportFormat,
    output: Option<PathBuf>,
    export: bool,
}

impl OutputPlan {
    // Runs before anything is fetched.
    pub fn resolve(options: &StatsOptions) -> Result<Self> {
        if let Some(name) = &options.export {
            return Ok(Self {
                format: ReportFormat::from_export_name(name)?,
                output: options.output.clone(),
                export: true,
            });
        }

        let format = ReportFormat::from_output_name(&options.format)?;
        if format == ReportFormat::Terminal && options.output.is_some() {
            tracing::warn!("--output is ignored for terminal output");
        }
        Ok(Self {
            format,
            output: options.output.clone(),
            export: false,
        })
    }

    pub fn destination(&self, repo: &RepoId) -> Destination {
        match (self.format.extension(), &self.output) {
            (None, _) => Destination::Stdout,
            (Some(_), Some(path)) => Destination::File(path.clone()),
            (Some(ext), None) if self.export => {
                Destination::File(PathBuf::from(format!("{}.{}", repo.file_stem(), ext)))
            }
            (Some(_), None) => Destination::Stdout,
        }
    }
}

pub struct StatsCommand {
    client: GitHubClient,
    renderer: Renderer,
    show_progress: bool,
}

impl StatsCommand {
    pub fn new(client: GitHubClient, renderer: Renderer) -> Self {
        Self {
            client,
            renderer,
            show_progress: true,
        }
    }

    pub fn show_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    pub async fn run<W: Write>(&self, options: &StatsOptions, out: &mut W) -> Result<()> {
        let plan = OutputPlan::resolve(options)?;
        let selection = Selection::from(options);

        let repo = match &options.repo {
            Some(id) => RepoId::parse(id)?,
            None => self.client.get_current_repo().await?,
        };

        let spinner = (self.show_progress && plan.format == ReportFormat::Terminal)
            .then(|| spinner(&format!("Fetching statistics for {}", repo)));
        let report = self.fetch_report(&repo, selection, options.days).await;
        if let Some(spinner) = spinner {
            spinner.finish_and_clear();
        }
        let report = report?;

        match plan.destination(&repo) {
            Destination::Stdout if plan.format == ReportFormat::Terminal => {
                TerminalReport::new(out, &self.renderer).render(&report)?;
            }
            Destination::Stdout => {
                let document = plan.format.render(&report, &self.renderer)?;
                writeln!(out, "{}", document)?;
            }
            Destination::File(path) => {
                let document = plan.format.render(&report, &self.renderer)?;
                std::fs::write(&path, document).map_err(|source| Error::Export {
                    path: path.clone(),
                    source,
                })?;
                tracing::info!("Report written to: {}", path.display());
                TerminalReport::new(out, &self.renderer)
                    .success(&format!("Report exported to {}", path.display()))?;
            }
        }

        Ok(())
    }

    pub async fn fetch_report(&self, repo: &RepoId, selection: Selection, days: u32) -> Result<Report> {
        let client = &self.client;

        let (repository, contributors, languages, activity) = futures::try_join!(
            client.get_repository_info(repo),
            optional(selection.contributors, client.get_contributors(repo)),
            optional(selection.languages, client.get_languages(repo)),
            optional(selection.activity, client.get_recent_activity(repo, days)),
        )?;

        Ok(Report::new(repository)
            .with_contributors(contributors)
            .with_languages(languages)
            .with_activity(activity))
    }
}

async fn optional<T>(enabled: bool, fetch: impl Future<Output = Result<T>>) -> Result<Option<T>> {
    if enabled {
        fetch.await.map(Some)
    } else {
        Ok(None)
    }
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
