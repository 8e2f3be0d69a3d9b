use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use resumatch::models::AnalysisReport;
use resumatch::{extract, normalize, AnalysisPipeline, Config};

#[derive(Parser, Debug)]
#[command(name = "resumatch")]
#[command(version = "0.1.0")]
#[command(about = "Match a resume against job-description skills")]
struct Args {
    /// Resume file to analyze (PDF or Word .docx)
    #[arg(short, long)]
    resume: Option<PathBuf>,

    /// Comma-separated job description skills
    #[arg(short, long)]
    skills: Option<String>,

    /// Output format (json, text, markdown)
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<String>,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("resumatch=info".parse()?),
        )
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let args = Args::parse();

    // Load configuration
    let config = Config::from_env();

    // Extract and normalize the resume text; a document with no text
    // layer degrades to the missing-document case below.
    let resume_text = match &args.resume {
        Some(path) => normalize(&extract::extract_text(path)?),
        None => String::new(),
    };

    let skill_input = args.skills.as_deref().unwrap_or("").trim();

    // Both inputs must be present before the matcher runs.
    if resume_text.is_empty() || skill_input.is_empty() {
        println!("Please upload a resume and enter job description skills.");
        return Ok(());
    }

    let pipeline = AnalysisPipeline::new(&config);
    let report = pipeline.analyze(&resume_text, skill_input);

    output_report(&report, &args)?;

    Ok(())
}

fn output_report(report: &AnalysisReport, args: &Args) -> anyhow::Result<()> {
    let output = match args.format.as_str() {
        "json" => serde_json::to_string_pretty(report)?,
        "markdown" => format_markdown(report),
        _ => format_text(report),
    };

    if let Some(ref path) = args.output {
        std::fs::write(path, &output)?;
        tracing::info!("Output written to: {}", path);
    } else {
        println!("{}", output);
    }

    Ok(())
}

fn format_text(report: &AnalysisReport) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "\n=== Resume Match Analysis ===\n\nMatch Score: {:.2}%\n{}\n",
        report.result.match_percentage, report.label
    ));

    output.push_str("\nMatched Skills:\n");
    if report.result.matched_skills.is_empty() {
        output.push_str("  No skills matched\n");
    } else {
        for skill in &report.result.matched_skills {
            output.push_str(&format!("  + {}\n", skill));
        }
    }

    output.push_str("\nMissing Skills:\n");
    if report.result.unmatched_skills.is_empty() {
        output.push_str("  No missing skills\n");
    } else {
        for skill in &report.result.unmatched_skills {
            output.push_str(&format!("  - {}\n", skill));
        }
    }

    if report.result.skill_count() == 0 {
        output.push_str("\nNo skills could be parsed from the input.\n");
    }

    if !report.suggestions.is_empty() {
        output.push_str("\nImprovement Suggestions:\n");
        for line in &report.suggestions {
            output.push_str(&format!("  * {}\n", line));
        }
    }

    output.push_str(&format!(
        "\nAnalyzed on: {}\n",
        report.analyzed_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output
}

fn format_markdown(report: &AnalysisReport) -> String {
    let mut output = String::new();

    output.push_str("# Resume Match Analysis\n\n");
    output.push_str(&format!(
        "**Match Score:** {:.2}% - {}\n",
        report.result.match_percentage, report.label
    ));

    output.push_str("\n## Matched Skills\n\n");
    if report.result.matched_skills.is_empty() {
        output.push_str("_No skills matched_\n");
    } else {
        for skill in &report.result.matched_skills {
            output.push_str(&format!("- {}\n", skill));
        }
    }

    output.push_str("\n## Missing Skills\n\n");
    if report.result.unmatched_skills.is_empty() {
        output.push_str("_No missing skills_\n");
    } else {
        for skill in &report.result.unmatched_skills {
            output.push_str(&format!("- {}\n", skill));
        }
    }

    if !report.suggestions.is_empty() {
        output.push_str("\n## Improvement Suggestions\n\n");
        for line in &report.suggestions {
            output.push_str(&format!("- {}\n", line));
        }
    }

    output.push_str(&format!(
        "\n---\n*Analyzed on {}*\n",
        report.analyzed_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output
}
