//! Output formatting utilities

use console::{style, Style};

use curate_changelog::{Category, RunSummary};

/// Print a success message
pub fn success(message: &str) {
    println!("{} {}", style("✓").green().bold(), message);
}

/// Print an error message
pub fn error(message: &str) {
    eprintln!("{} {}", style("✗").red().bold(), message);
}

/// Print a warning message
pub fn warning(message: &str) {
    println!("{} {}", style("!").yellow().bold(), message);
}

/// Print an info message
pub fn info(message: &str) {
    println!("{} {}", style("→").blue(), message);
}

/// Create a styled header
pub fn header(text: &str) -> String {
    style(text).bold().to_string()
}

/// Create a styled key-value line
pub fn key_value(key: &str, value: &str) -> String {
    format!("  {}: {}", style(key).dim(), value)
}

/// Style for paths
pub fn path_style() -> Style {
    Style::new().cyan()
}

/// Unstyled statistic lines for a run summary
pub fn summary_lines(summary: &RunSummary) -> Vec<(String, String)> {
    let mut lines = vec![
        ("Versions in input".to_string(), summary.input_versions.to_string()),
        (
            "Versions with changes".to_string(),
            summary.versions_with_content().to_string(),
        ),
        ("Commits read".to_string(), summary.total_commits.to_string()),
        ("Dropped as noise".to_string(), summary.dropped_noise.to_string()),
        (
            "Dropped after cleanup".to_string(),
            summary.dropped_short.to_string(),
        ),
    ];

    if summary.dropped_irrelevant > 0 {
        lines.push((
            "Dropped as irrelevant".to_string(),
            summary.dropped_irrelevant.to_string(),
        ));
    }

    for category in Category::ALL {
        let count: usize = summary
            .versions
            .iter()
            .filter_map(|v| v.categories.get(&category))
            .sum();
        if count > 0 {
            lines.push((category.title().to_string(), count.to_string()));
        }
    }

    lines
}

/// Print a run summary as styled text
pub fn print_summary(summary: &RunSummary) {
    println!("{}", header("Summary"));
    for (key, value) in summary_lines(summary) {
        println!("{}", key_value(&key, &value));
    }
    if summary.placeholder {
        warning("No user-facing changes found; wrote a placeholder release");
    }
}
