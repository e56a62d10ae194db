use crate::briefing::Briefing;
use repobrief_context::BriefingContext;

const RULE_WIDTH: usize = 60;

/// Which engine produced the briefing; only affects the header and footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BriefingSource {
    Local,
    Remote,
}

/// Lay out a briefing as the final report text. No decisions happen here —
/// every field is rendered as-is.
pub fn render(briefing: &Briefing, context: &BriefingContext, source: BriefingSource) -> String {
    let line = "━".repeat(RULE_WIDTH);
    let mut report = String::new();

    report.push_str(&format!("\n{line}\n"));
    match source {
        BriefingSource::Local => report.push_str("REPOBRIEF BRIEFING (Local Analysis)\n\n"),
        BriefingSource::Remote => report.push_str("REPOBRIEF BRIEFING\n\n"),
    }
    report.push_str(&format!("PROJECT TYPE:     {}\n", context.type_label));
    report.push_str(&format!("MAIN PURPOSE:     {}\n", briefing.purpose));
    report.push_str(&format!(
        "ENTRY POINT:      {}\n\n",
        context.entry_point.as_deref().unwrap_or("Not detected")
    ));
    report.push_str(&format!("HOW TO RUN:       {}\n", briefing.how_to_run));

    if !briefing.core_files.is_empty() {
        report.push_str(&format!("\n{line}\n"));
        report.push_str("CORE FILES (likely important):\n\n");
        for note in &briefing.core_files {
            report.push_str(&format!("  {:<25} {}\n", note.file, note.reason));
        }
    }

    if !briefing.safe_areas.is_empty() {
        report.push_str(&format!("\n{line}\n"));
        report.push_str("SAFE TO EDIT (low risk):\n\n");
        for area in &briefing.safe_areas {
            report.push_str(&format!("  {area}\n"));
        }
    }

    if !briefing.dangerous_files.is_empty() {
        report.push_str(&format!("\n{line}\n"));
        report.push_str("RISKY FILES (edit carefully):\n\n");
        for note in &briefing.dangerous_files {
            report.push_str(&format!("  {:<25} {}\n", note.file, note.reason));
        }
    }

    report.push_str(&format!("\n{line}\n"));
    report.push_str("DATA FLOW (estimated):\n\n");
    report.push_str(&format!("  {}\n", briefing.data_flow));

    report.push_str(&format!("\n{line}\n"));
    report.push_str("WHERE TO START:\n\n");
    for (index, step) in briefing.start_steps.iter().enumerate() {
        report.push_str(&format!("  {}. {step}\n", index + 1));
    }

    report.push_str(&format!("\n{line}\n"));
    if source == BriefingSource::Local {
        report.push_str(
            "This is a quick structural analysis.\n\
             For a full briefing, set ANTHROPIC_API_KEY and rerun.\n",
        );
        report.push_str(&format!("\n{line}\n"));
    }

    report
}
