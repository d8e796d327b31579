//! Output formatters for console, JSON, Markdown and HTML reports

use crate::analysis::{Compatibility, Impact, Issue, IssueType};
use crate::config::OutputFormat;
use crate::error::{AtsError, Result};
use crate::output::report::AtsReport;
use askama::Template;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for formatting ATS reports
pub trait OutputFormatter {
    fn format_report(&self, report: &AtsReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors and score bars
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter emitting the bare analysis result
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for sharing and documentation
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// HTML formatter rendering an askama template
pub struct HtmlFormatter {
    include_styles: bool,
}

/// Report generator that coordinates the formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    html_formatter: HtmlFormatter,
}

#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>ATS Compatibility Report</title>
    {% if include_styles %}
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.6;
            color: #333;
            max-width: 900px;
            margin: 0 auto;
            padding: 20px;
            background: #f8f9fa;
        }
        .container {
            background: white;
            padding: 30px;
            border-radius: 8px;
            box-shadow: 0 2px 10px rgba(0,0,0,0.1);
        }
        .header {
            text-align: center;
            margin-bottom: 30px;
            border-bottom: 3px solid #007acc;
            padding-bottom: 20px;
        }
        .score-badge {
            display: inline-block;
            padding: 8px 16px;
            border-radius: 20px;
            font-weight: bold;
            color: white;
            margin-left: 10px;
        }
        .score-excellent { background: #28a745; }
        .score-good { background: #17a2b8; }
        .score-fair { background: #ffc107; color: #000; }
        .score-poor { background: #dc3545; }
        .section { margin: 25px 0; }
        .section h2 {
            color: #007acc;
            border-bottom: 2px solid #e9ecef;
            padding-bottom: 10px;
        }
        .score-breakdown {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
            gap: 15px;
            margin: 20px 0;
        }
        .score-item {
            background: #f8f9fa;
            padding: 15px;
            border-radius: 6px;
            border-left: 4px solid #007acc;
        }
        .bar { background: #e9ecef; border-radius: 4px; height: 8px; }
        .bar-fill { background: #007acc; border-radius: 4px; height: 8px; }
        .issue {
            background: white;
            padding: 15px;
            margin: 10px 0;
            border-radius: 6px;
            border-left: 4px solid #17a2b8;
        }
        .issue-error { border-left-color: #dc3545; }
        .issue-warning { border-left-color: #ffc107; }
        .issue-suggestion { border-left-color: #17a2b8; }
        .passed {
            background: #f8f9fa;
            padding: 15px;
            border-radius: 6px;
            border-left: 4px solid #28a745;
        }
        .chip {
            display: inline-block;
            background: #e7f3fb;
            border-radius: 12px;
            padding: 4px 10px;
            margin: 4px;
        }
        .metadata {
            background: #e9ecef;
            padding: 15px;
            border-radius: 6px;
            margin-top: 30px;
            font-size: 0.9em;
            color: #6c757d;
        }
    </style>
    {% endif %}
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>📊 ATS Compatibility Report</h1>
            {% if !candidate_name.is_empty() %}<p><strong>{{ candidate_name }}</strong></p>{% endif %}
            <p>Generated: {{ generated_at }} | Processing time: {{ processing_time }}ms</p>
        </div>

        <div class="section">
            <h2>Overall Score</h2>
            <h3>{{ overall_score }}% <span class="score-badge {{ score_class }}">{{ score_label }}</span></h3>
            <p><strong>Verdict:</strong> {{ verdict }}</p>

            <div class="score-breakdown">
                {% for section in sections %}
                <div class="score-item">
                    <h4>{{ section.name }}</h4>
                    <p><strong>{{ section.score }}%</strong></p>
                    <div class="bar"><div class="bar-fill" style="width: {{ section.score }}%"></div></div>
                </div>
                {% endfor %}
            </div>
        </div>

        {% if !issue_groups.is_empty() %}
        <div class="section">
            <h2>🎯 Issues</h2>
            {% for group in issue_groups %}
            <h3>{{ group.category }}</h3>
            {% for issue in group.issues %}
            <div class="issue issue-{{ issue.issue_type }}">
                <strong>{{ issue.title }}</strong> <em>({{ issue.issue_type }}, {{ issue.impact }} impact)</em>
                <p>{{ issue.description }}</p>
                <p><strong>Fix:</strong> {{ issue.fix }}</p>
            </div>
            {% endfor %}
            {% endfor %}
        </div>
        {% endif %}

        {% if !passed_checks.is_empty() %}
        <div class="section">
            <h2>✅ Passed Checks</h2>
            <div class="passed">
                <ul>
                {% for check in passed_checks %}
                    <li>{{ check }}</li>
                {% endfor %}
                </ul>
            </div>
        </div>
        {% endif %}

        {% if !keywords.is_empty() %}
        <div class="section">
            <h2>🔍 Keyword Density</h2>
            {% for kw in keywords %}
            <span class="chip">{{ kw.keyword }} &middot; {{ kw.count }} ({{ kw.percentage }}%)</span>
            {% endfor %}
        </div>
        {% endif %}

        <div class="section">
            <h2>📋 Recommendations</h2>
            <ol>
            {% for rec in recommendations %}
                <li>{{ rec }}</li>
            {% endfor %}
            </ol>
        </div>

        <div class="metadata">
            <p><strong>ℹ️ Generated by resume-ats v{{ version }}</strong></p>
            <p><strong>Resume:</strong> {{ resume_file }}</p>
        </div>
    </div>
</body>
</html>"#, ext = "html")]
struct HtmlTemplate {
    include_styles: bool,
    generated_at: String,
    processing_time: u64,
    candidate_name: String,
    overall_score: u8,
    score_class: &'static str,
    score_label: &'static str,
    verdict: &'static str,
    sections: Vec<HtmlSection>,
    issue_groups: Vec<HtmlIssueGroup>,
    passed_checks: Vec<String>,
    keywords: Vec<HtmlKeyword>,
    recommendations: Vec<String>,
    version: String,
    resume_file: String,
}

struct HtmlSection {
    name: String,
    score: u8,
}

struct HtmlIssueGroup {
    category: String,
    issues: Vec<HtmlIssue>,
}

struct HtmlIssue {
    title: String,
    issue_type: String,
    impact: String,
    description: String,
    fix: String,
}

struct HtmlKeyword {
    keyword: String,
    count: usize,
    percentage: String,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            3 => "▒",
            _ => "░",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            3 => Color::Yellow,
            _ => Color::White,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, compatibility: Compatibility) -> String {
        let color = match compatibility {
            Compatibility::Excellent => Color::Green,
            Compatibility::Good => Color::BrightGreen,
            Compatibility::Fair => Color::Yellow,
            Compatibility::Poor => Color::BrightRed,
        };
        let badge = compatibility.label().to_uppercase();

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn format_score_bar(&self, score: u8) -> String {
        let filled = usize::from(score) / 10;
        let bar = format!("{}{}", "█".repeat(filled), "░".repeat(10 - filled));
        let color = match score {
            80..=100 => Color::Green,
            60..=79 => Color::Yellow,
            _ => Color::Red,
        };
        self.colorize(&bar, color)
    }

    fn format_issue_icon(&self, issue_type: IssueType) -> String {
        if self.use_colors {
            let icon = match issue_type {
                IssueType::Error => "🚨",
                IssueType::Warning => "⚠️",
                IssueType::Suggestion => "💡",
            };
            format!("{} ", icon)
        } else {
            let text_icon = match issue_type {
                IssueType::Error => "[!]",
                IssueType::Warning => "[*]",
                IssueType::Suggestion => "[+]",
            };
            format!("{} ", text_icon)
        }
    }

    fn format_issue(&self, issue: &Issue) -> String {
        let title_color = match issue.issue_type {
            IssueType::Error => Color::Red,
            IssueType::Warning => Color::Yellow,
            IssueType::Suggestion => Color::Cyan,
        };

        let mut output = format!(
            "  {}{} ({} impact)\n",
            self.format_issue_icon(issue.issue_type),
            self.colorize(&issue.title, title_color),
            issue.impact
        );
        if self.detailed {
            output.push_str(&format!("     {}\n", issue.description));
        }
        output.push_str(&format!(
            "     {} {}\n",
            self.colorize("Fix:", Color::Cyan),
            issue.fix
        ));
        output
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &AtsReport) -> Result<String> {
        let analysis = &report.analysis;
        let mut output = String::new();

        // Header
        output.push_str(&self.format_header("📊 ATS COMPATIBILITY ANALYSIS", 1));
        output.push_str(&format!(
            "Generated: {} | Processing time: {}ms\n",
            report.generated_at_display(),
            report.metadata.processing_time_ms
        ));
        if report.metadata.candidate_name.is_empty() {
            output.push_str(&format!("Resume: {}\n", report.resume_file_name()));
        } else {
            output.push_str(&format!(
                "Resume: {} ({})\n",
                report.resume_file_name(),
                report.metadata.candidate_name
            ));
        }

        // Summary
        output.push_str(&self.format_header("Overall Score", 2));
        output.push_str(&format!(
            "Overall Score: {}% {}\n",
            analysis.score.overall,
            self.format_score_badge(analysis.estimated_ats_compatibility)
        ));
        output.push_str(&format!(
            "Verdict: {}\n",
            self.colorize(report.verdict(), Color::Cyan)
        ));

        // Section scores
        output.push_str(&self.format_header("Section Scores", 3));
        for (category, score) in analysis.score.sections.iter() {
            output.push_str(&format!(
                "  {:<14} {:>3}% {}\n",
                category.to_string(),
                score,
                self.format_score_bar(score)
            ));
        }

        // Issues
        if analysis.issues.is_empty() {
            output.push_str(&self.format_header("🎯 Issues", 2));
            output.push_str(&format!("  {}\n", self.colorize("No issues found", Color::Green)));
        } else {
            output.push_str(
                &self.format_header(&format!("🎯 Issues ({})", analysis.issues.len()), 2),
            );
            for (category, issues) in analysis.issues_by_category() {
                output.push_str(&self.format_header(&category.to_string(), 3));
                for issue in issues {
                    output.push_str(&self.format_issue(issue));
                }
            }
        }

        // Passed checks
        if !analysis.passed_checks.is_empty() {
            output.push_str(&self.format_header("✅ Passed Checks", 2));
            for check in &analysis.passed_checks {
                output.push_str(&format!("  • {}\n", self.colorize(check, Color::Green)));
            }
        }

        // Keyword density
        if !analysis.keyword_density.is_empty() {
            output.push_str(&self.format_header("🔍 Keyword Density", 2));
            let chips: Vec<String> = analysis
                .keyword_density
                .iter()
                .map(|kd| format!("{} ×{} ({:.2}%)", kd.keyword, kd.count, kd.percentage))
                .collect();
            output.push_str(&format!("  {}\n", chips.join(" · ")));
        }

        // Recommendations
        output.push_str(&self.format_header("📋 Recommendations", 2));
        for (i, rec) in analysis.recommendations.iter().enumerate() {
            output.push_str(&format!("  {}. {}\n", i + 1, rec));
        }

        if self.detailed && analysis.has_errors() {
            output.push('\n');
            output.push_str(&self.colorize(
                "Errors above are likely to get this resume rejected by ATS filters. Fix them first.",
                Color::Red,
            ));
            output.push('\n');
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &AtsReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(&report.analysis)?)
        } else {
            Ok(serde_json::to_string(&report.analysis)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl HtmlFormatter {
    pub fn new(include_styles: bool) -> Self {
        Self { include_styles }
    }

    fn create_template_data(&self, report: &AtsReport) -> HtmlTemplate {
        let analysis = &report.analysis;
        let compatibility = analysis.estimated_ats_compatibility;
        let score_class = match compatibility {
            Compatibility::Excellent => "score-excellent",
            Compatibility::Good => "score-good",
            Compatibility::Fair => "score-fair",
            Compatibility::Poor => "score-poor",
        };

        let sections = analysis
            .score
            .sections
            .iter()
            .map(|(category, score)| HtmlSection {
                name: category.to_string(),
                score,
            })
            .collect();

        let issue_groups = analysis
            .issues_by_category()
            .into_iter()
            .map(|(category, issues)| HtmlIssueGroup {
                category: category.to_string(),
                issues: issues
                    .into_iter()
                    .map(|issue| HtmlIssue {
                        title: issue.title.clone(),
                        issue_type: issue.issue_type.to_string(),
                        impact: issue.impact.to_string(),
                        description: issue.description.clone(),
                        fix: issue.fix.clone(),
                    })
                    .collect(),
            })
            .collect();

        let keywords = analysis
            .keyword_density
            .iter()
            .map(|kd| HtmlKeyword {
                keyword: kd.keyword.clone(),
                count: kd.count,
                percentage: format!("{:.2}", kd.percentage),
            })
            .collect();

        HtmlTemplate {
            include_styles: self.include_styles,
            generated_at: report.generated_at_display(),
            processing_time: report.metadata.processing_time_ms,
            candidate_name: report.metadata.candidate_name.clone(),
            overall_score: analysis.score.overall,
            score_class,
            score_label: compatibility.label(),
            verdict: report.verdict(),
            sections,
            issue_groups,
            passed_checks: analysis.passed_checks.clone(),
            keywords,
            recommendations: analysis.recommendations.clone(),
            version: report.metadata.analyzer_version.clone(),
            resume_file: report.resume_file_name(),
        }
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_report(&self, report: &AtsReport) -> Result<String> {
        let template_data = self.create_template_data(report);
        template_data
            .render()
            .map_err(|e| AtsError::OutputFormatting(e.to_string()))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn markdown_score_badge(compatibility: Compatibility) -> &'static str {
        match compatibility {
            Compatibility::Excellent => "🟢 **Excellent**",
            Compatibility::Good => "🔵 **Good**",
            Compatibility::Fair => "🟡 **Fair**",
            Compatibility::Poor => "🔴 **Poor**",
        }
    }

    fn impact_marker(impact: Impact) -> &'static str {
        match impact {
            Impact::High => "🔴",
            Impact::Medium => "🟡",
            Impact::Low => "🟢",
        }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &AtsReport) -> Result<String> {
        let analysis = &report.analysis;
        let mut output = String::new();

        output.push_str("# 📊 ATS Compatibility Report\n\n");

        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {} | **Processing Time:** {}ms\n",
                report.generated_at_display(),
                report.metadata.processing_time_ms
            ));
            output.push_str(&format!("**Resume:** `{}`", report.resume_file_name()));
            if !report.metadata.candidate_name.is_empty() {
                output.push_str(&format!(" | **Candidate:** {}", report.metadata.candidate_name));
            }
            output.push_str("\n\n");
        }

        // Summary
        output.push_str("## Summary\n\n");
        output.push_str(&format!(
            "**Overall Score:** {}% {}\n\n",
            analysis.score.overall,
            Self::markdown_score_badge(analysis.estimated_ats_compatibility)
        ));
        output.push_str(&format!("**Verdict:** {}\n\n", report.verdict()));

        output.push_str("### Section Scores\n\n");
        output.push_str("| Section | Score |\n");
        output.push_str("|---------|-------|\n");
        for (category, score) in analysis.score.sections.iter() {
            output.push_str(&format!("| {} | {}% |\n", category, score));
        }
        output.push('\n');

        // Issues
        output.push_str("## 🎯 Issues\n\n");
        if analysis.issues.is_empty() {
            output.push_str("No issues found.\n\n");
        }
        for (category, issues) in analysis.issues_by_category() {
            output.push_str(&format!("### {}\n\n", category));
            for issue in issues {
                output.push_str(&format!(
                    "- {} **{}** _({}, {} impact)_  \n  {}  \n  **Fix:** {}\n",
                    Self::impact_marker(issue.impact),
                    issue.title,
                    issue.issue_type,
                    issue.impact,
                    issue.description,
                    issue.fix
                ));
            }
            output.push('\n');
        }

        // Passed checks
        if !analysis.passed_checks.is_empty() {
            output.push_str("## ✅ Passed Checks\n\n");
            for check in &analysis.passed_checks {
                output.push_str(&format!("- {}\n", check));
            }
            output.push('\n');
        }

        // Keyword density
        if !analysis.keyword_density.is_empty() {
            output.push_str("## 🔍 Keyword Density\n\n");
            output.push_str("| Keyword | Count | Share |\n");
            output.push_str("|---------|-------|-------|\n");
            for kd in &analysis.keyword_density {
                output.push_str(&format!(
                    "| {} | {} | {:.2}% |\n",
                    kd.keyword, kd.count, kd.percentage
                ));
            }
            output.push('\n');
        }

        // Recommendations
        output.push_str("## 📋 Recommendations\n\n");
        for (i, rec) in analysis.recommendations.iter().enumerate() {
            output.push_str(&format!("{}. {}\n", i + 1, rec));
        }

        if self.include_metadata {
            output.push_str(&format!(
                "\n---\n_Generated by resume-ats v{}_\n",
                report.metadata.analyzer_version
            ));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(true, false),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
            html_formatter: HtmlFormatter::new(true),
        }
    }

    pub fn with_options(
        use_colors: bool,
        detailed: bool,
        pretty_json: bool,
        include_metadata: bool,
        include_html_styles: bool,
    ) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
            html_formatter: HtmlFormatter::new(include_html_styles),
        }
    }

    pub fn generate_report(&self, report: &AtsReport, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
            OutputFormat::Html => self.html_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

// Utility functions for saving reports
pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: OutputFormat, resume_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    format!(
        "{}_ats{}.{}",
        base_name,
        timestamp_suffix,
        format.extension()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;
    use crate::model::ResumeData;
    use tempfile::TempDir;

    fn sample_report(name: &str) -> AtsReport {
        let mut resume = ResumeData::default();
        resume.personal_info.full_name = name.to_string();
        resume.skills.languages = vec!["Python".to_string(), "Java".to_string()];
        AtsReport::new(analyze(&resume), "resumes/sample.json", name, 1)
    }

    #[test]
    fn test_console_plain_output() {
        let report = sample_report("Jane Doe");
        let output = ConsoleFormatter::new(false, true).format_report(&report).unwrap();

        assert!(output.contains("Resume: sample.json (Jane Doe)"));
        assert!(output.contains(&format!("Overall Score: {}% [POOR]", report.analysis.score.overall)));
        assert!(output.contains("[*] Resume Too Short (medium impact)"));
        assert!(output.contains("[!] No Work Experience (high impact)"));
        assert!(output.contains("Fix:"));
        assert!(output.contains("python ×1"));
        assert!(!output.contains('\u{1b}'));
    }

    #[test]
    fn test_console_summary_hides_descriptions() {
        let report = sample_report("Jane Doe");
        let brief = ConsoleFormatter::new(false, false).format_report(&report).unwrap();
        let detailed = ConsoleFormatter::new(false, true).format_report(&report).unwrap();

        let description = &report.analysis.issues[0].description;
        assert!(!brief.contains(description.as_str()));
        assert!(detailed.contains(description.as_str()));
    }

    #[test]
    fn test_json_is_bare_analysis() {
        let report = sample_report("Jane Doe");
        let output = JsonFormatter::new(false).format_report(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["estimatedATSCompatibility"], "poor");
        assert!(value["score"]["sections"]["keywords"].is_u64());
        assert!(value.get("metadata").is_none());
        assert!(!output.contains('\n'));
    }

    #[test]
    fn test_markdown_tables() {
        let report = sample_report("Jane Doe");
        let output = MarkdownFormatter::new(true).format_report(&report).unwrap();

        assert!(output.starts_with("# 📊 ATS Compatibility Report"));
        assert!(output.contains("| Keywords | 40% |"));
        assert!(output.contains("### Completeness"));
        assert!(output.contains("| python | 1 |"));
        assert!(output.contains("**Candidate:** Jane Doe"));
    }

    #[test]
    fn test_html_escapes_content() {
        let report = sample_report("<script>alert()</script>");
        let output = HtmlFormatter::new(false).format_report(&report).unwrap();

        assert!(output.starts_with("<!DOCTYPE html>"));
        assert!(!output.contains("<style>"));
        assert!(!output.contains("<script>"));
        assert!(output.contains("score-poor"));
        assert!(output.contains("Resume Too Short"));
    }

    #[test]
    fn test_report_generator_dispatch() {
        let report = sample_report("Jane Doe");
        let generator = ReportGenerator::with_options(false, false, true, false, true);

        let json = generator.generate_report(&report, OutputFormat::Json).unwrap();
        assert!(json.contains("\"passedChecks\""));
        let md = generator.generate_report(&report, OutputFormat::Markdown).unwrap();
        assert!(!md.contains("**Generated:**"));
        let html = generator.generate_report(&report, OutputFormat::Html).unwrap();
        assert!(html.contains("<style>"));
    }

    #[test]
    fn test_formatters_report_their_format() {
        assert_eq!(ConsoleFormatter::new(false, false).supports_format(), OutputFormat::Console);
        assert_eq!(JsonFormatter::new(true).supports_format(), OutputFormat::Json);
        assert_eq!(MarkdownFormatter::new(true).supports_format(), OutputFormat::Markdown);
        assert_eq!(HtmlFormatter::new(true).supports_format(), OutputFormat::Html);
    }

    #[test]
    fn test_suggest_filename() {
        assert_eq!(
            suggest_filename(OutputFormat::Markdown, "cv/jane_doe.json", false),
            "jane_doe_ats.md"
        );
        assert_eq!(
            suggest_filename(OutputFormat::Console, "jane.toml", false),
            "jane_ats.txt"
        );
        let stamped = suggest_filename(OutputFormat::Html, "jane.json", true);
        assert!(stamped.starts_with("jane_ats_"));
        assert!(stamped.ends_with(".html"));
    }

    #[test]
    fn test_save_report_creates_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("reports").join("out.md");

        save_report_to_file("# report", &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# report");
    }
}
