use crate::models::Report;
use crate::report::format::{
    format_date, format_number, format_timestamp, or_not_available, window_label, NOT_AVAILABLE,
};
use crate::report::stats::{contributor_shares, top_languages};

fn cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

pub fn render(report: &Report) -> String {
    let repo = &report.repository;
    let mut output = String::new();

    output.push_str(&format!("# 📊 Repository Statistics: {}\n\n", repo.id));
    output.push_str(&format!(
        "*Generated on {}*\n\n",
        format_timestamp(&report.generated_at)
    ));

    output.push_str("## 📋 Overview\n\n");
    output.push_str("| Property | Value |\n|----------|-------|\n");
    let pushed = repo
        .pushed_at
        .map(|p| format_date(&p))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());
    let mut status = vec![if repo.is_private { "Private" } else { "Public" }];
    if repo.is_archived {
        status.push("Archived");
    }
    if repo.is_fork {
        status.push("Fork");
    }
    let overview = [
        ("Name", repo.id.to_string()),
        ("Owner", repo.id.owner().to_string()),
        ("Description", or_not_available(repo.description.as_deref()).to_string()),
        ("Homepage", or_not_available(repo.homepage.as_deref()).to_string()),
        ("Created", format_date(&repo.created_at)),
        ("Last Updated", format_date(&repo.updated_at)),
        ("Last Push", pushed),
        ("Primary Language", or_not_available(repo.primary_language.as_deref()).to_string()),
        ("License", or_not_available(repo.license.as_deref()).to_string()),
        ("Status", status.join(", ")),
    ];
    for (property, value) in overview {
        output.push_str(&format!("| {} | {} |\n", property, cell(&value)));
    }

    output.push_str("\n## 📈 Key Metrics\n\n");
    output.push_str("| Metric | Count |\n|--------|------:|\n");
    let metrics = [
        ("⭐ Stars", repo.stars),
        ("🍴 Forks", repo.forks),
        ("👁️ Watchers", repo.watchers),
        ("🐛 Issues", repo.open_issues),
        ("🔀 Pull Requests", repo.pull_requests),
        ("📦 Releases", repo.releases),
        ("💾 Commits", repo.commits),
    ];
    for (metric, count) in metrics {
        output.push_str(&format!("| {} | {} |\n", metric, format_number(count)));
    }

    if let Some(contributors) = report.shown_contributors() {
        output.push_str("\n## 👥 Top Contributors\n\n");
        output.push_str("| Rank | Username | Contributions | Percentage |\n");
        output.push_str("|-----:|----------|--------------:|-----------:|\n");
        for share in contributor_shares(contributors) {
            output.push_str(&format!(
                "| {} | [{}](https://github.com/{}) | {} | {:.1}% |\n",
                share.rank,
                cell(&share.login),
                share.login,
                format_number(share.contributions),
                share.percentage
            ));
        }
    }

    if let Some(languages) = report.shown_languages() {
        output.push_str("\n## 💻 Language Distribution\n\n");
        output.push_str("| Language | Bytes | Percentage |\n");
        output.push_str("|----------|------:|-----------:|\n");
        for share in top_languages(languages) {
            output.push_str(&format!(
                "| {} | {} | {:.1}% |\n",
                cell(&share.name),
                format_number(share.bytes),
                share.percentage
            ));
        }
    }

    if let Some(activity) = &report.activity {
        output.push_str(&format!(
            "\n## 📊 Recent Activity ({})\n\n",
            window_label(activity.window_days)
        ));
        output.push_str("| Type | Count |\n|------|------:|\n");
        output.push_str(&format!("| Commits | {} |\n", format_number(activity.commits)));
        output.push_str(&format!("| Issues | {} |\n", format_number(activity.issues)));
        output.push_str(&format!(
            "| Pull Requests | {} |\n",
            format_number(activity.pull_requests)
        ));
    }

    output.push_str("\n---\n*Report generated by gh-stats*\n");
    output
}
