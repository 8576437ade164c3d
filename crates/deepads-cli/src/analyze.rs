//! `analyze` command: market research report.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use deepads_core::{AppConfig, ResearchInsights};

#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Product or offer description
    #[arg(long)]
    pub product: String,

    /// File with reviews, comments, or transcripts, one statement per line
    #[arg(long)]
    pub voc_file: Option<PathBuf>,

    /// Print the insights as JSON instead of a report
    #[arg(long)]
    pub json: bool,
}

/// Read voice-of-customer text, treating a missing argument as empty text.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub(crate) fn read_voc(path: Option<&Path>) -> anyhow::Result<Option<String>> {
    path.map(|p| {
        std::fs::read_to_string(p)
            .with_context(|| format!("failed to read VOC file {}", p.display()))
    })
    .transpose()
}

/// # Errors
///
/// Returns an error if the VOC file cannot be read or the description is blank.
pub(crate) fn run_analyze(config: &AppConfig, args: &AnalyzeArgs) -> anyhow::Result<()> {
    if args.product.trim().is_empty() {
        anyhow::bail!("product description must be non-empty");
    }

    let voc = read_voc(args.voc_file.as_deref())?.unwrap_or_default();
    let insights = deepads_research::analyze_market_text(&args.product, &voc);
    tracing::info!(
        keywords = insights.top_keywords.len(),
        objections = insights.objections.len(),
        "market analysis computed"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&insights)?);
    } else {
        print!(
            "{}",
            render_insights(
                &insights,
                config.keyword_display_limit,
                config.signal_display_limit
            )
        );
    }

    Ok(())
}

fn push_section(out: &mut String, title: &str, items: &[String], limit: usize) {
    let _ = writeln!(out, "## {title}");
    if items.is_empty() {
        let _ = writeln!(out, "(none)");
    }
    for item in items.iter().take(limit) {
        let _ = writeln!(out, "- {item}");
    }
    out.push('\n');
}

/// Markdown report of the insights. Objections are listed only when present.
pub(crate) fn render_insights(
    insights: &ResearchInsights,
    keyword_limit: usize,
    signal_limit: usize,
) -> String {
    let mut out = String::new();
    push_section(&mut out, "Top Keywords", &insights.top_keywords, keyword_limit);
    push_section(&mut out, "Pain Points", &insights.pains, signal_limit);
    push_section(&mut out, "Desires & Outcomes", &insights.desires, signal_limit);
    if insights.has_objections() {
        push_section(&mut out, "Common Objections", &insights.objections, signal_limit);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ResearchInsights {
        ResearchInsights {
            top_keywords: (0..12).map(|i| format!("kw{i}")).collect(),
            pains: vec!["pain one".to_string()],
            desires: vec!["desire one".to_string()],
            objections: Vec::new(),
            raw_notes: String::new(),
        }
    }

    #[test]
    fn report_limits_keywords() {
        let report = render_insights(&sample(), 10, 6);
        assert!(report.contains("- kw9\n"));
        assert!(!report.contains("- kw10\n"));
    }

    #[test]
    fn report_hides_empty_objections() {
        let report = render_insights(&sample(), 10, 6);
        assert!(report.contains("## Pain Points\n- pain one\n"));
        assert!(!report.contains("Common Objections"));
    }

    #[test]
    fn report_shows_objections_when_present() {
        let mut insights = sample();
        insights.objections.push("too pricey?".to_string());
        let report = render_insights(&insights, 10, 6);
        assert!(report.contains("## Common Objections\n- too pricey?\n"));
    }

    #[test]
    fn report_marks_empty_keywords() {
        let mut insights = sample();
        insights.top_keywords.clear();
        let report = render_insights(&insights, 10, 6);
        assert!(report.starts_with("## Top Keywords\n(none)\n"));
    }

    #[test]
    fn read_voc_none_is_none() {
        assert!(read_voc(None).unwrap().is_none());
    }

    #[test]
    fn read_voc_missing_file_errors() {
        let err = read_voc(Some(Path::new("/nonexistent/voc.txt"))).unwrap_err();
        assert!(err.to_string().contains("failed to read VOC file"));
    }
}
