use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use ghstats::report::terminal::error_line;
use ghstats::{ClientConfig, Config, GitHubClient, Renderer, StatsCommand, StatsOptions};

#[derive(Parser, Debug)]
#[command(name = "gh-stats")]
#[command(version)]
#[command(about = "Show statistics for a GitHub repository")]
struct Args {
    /// Repository as owner/name (defaults to the repository of the current directory)
    repo: Option<String>,

    /// Show top contributors
    #[arg(short, long)]
    contributors: bool,

    /// Show language distribution
    #[arg(short, long)]
    languages: bool,

    /// Show recent activity
    #[arg(short, long)]
    activity: bool,

    /// Show every section
    #[arg(long)]
    all: bool,

    /// Export the report to a file (markdown, md, json, csv)
    #[arg(short, long, value_name = "FORMAT")]
    export: Option<String>,

    /// Output file for exports and JSON output
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Output format (terminal, json)
    #[arg(short, long, default_value = "terminal")]
    format: String,

    /// Recent activity window in days
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    days: Option<u32>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let config = Config::from_env();

    let (renderer, stderr) = if args.no_color || config.no_color {
        (Renderer::plain(), Renderer::plain())
    } else {
        (Renderer::detect(), Renderer::detect_stderr())
    };

    if let Err(e) = run(args, config, renderer).await {
        if let Some(err) = e.downcast_ref::<ghstats::Error>() {
            if !err.is_user_error() {
                tracing::debug!("gh-stats failed: {:?}", err);
            }
        }
        eprintln!("{}", error_line(&stderr, &e.to_string()));
        std::process::exit(1);
    }
}

async fn run(args: Args, config: Config, renderer: Renderer) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive("ghstats=warn".parse()?))
        .init();

    let options = StatsOptions {
        repo: args.repo,
        contributors: args.contributors,
        languages: args.languages,
        activity: args.activity,
        all: args.all,
        export: args.export,
        output: args.output,
        format: args.format,
        days: args.days.unwrap_or(config.activity_days),
    };

    let client = GitHubClient::new(ClientConfig::from(&config));
    let command = StatsCommand::new(client, renderer).show_progress(console::user_attended_stderr());

    command.run(&options, &mut std::io::stdout()).await?;
    Ok(())
}
