use crate::domain::model::{DestinationDetails, DisplayRecord, RecordOrigin, Severity, Status};
use crate::domain::text::split_paragraphs;
use crate::presentation::theme::Theme;
use std::fmt::Write;

const PARAGRAPH_WIDTH: usize = 300;

/// Format result cards as a string
pub fn format_records(records: &[DisplayRecord], theme: &Theme, enable_emoji: bool) -> String {
    let mut output = String::new();
    let cutoff = "⸺".repeat(40);

    for (i, record) in records.iter().enumerate() {
        let origin = match (record.origin, enable_emoji) {
            (RecordOrigin::Curated, true) => "⭐ [curated]",
            (RecordOrigin::Curated, false) => "[curated]",
            (RecordOrigin::Remote, true) => "🌐 [online]",
            (RecordOrigin::Remote, false) => "[online]",
        };
        writeln!(
            output,
            "{}. {} {}",
            (theme.idx)(&(i + 1).to_string()),
            (theme.title)(&record.title),
            (theme.tag)(origin)
        )
        .ok();

        if let Some(description) = &record.description {
            writeln!(output, "   {}", (theme.description)(description)).ok();
        }
        let image_prefix = if enable_emoji { "🖼 " } else { "img:" };
        writeln!(output, "   {} {}", image_prefix, (theme.link)(&record.image_url)).ok();
        writeln!(output, "   ≫ {}", (theme.link)(&record.detail_link)).ok();

        if i + 1 < records.len() {
            writeln!(output, "  {}", (theme.line)(&cutoff)).ok();
        }
    }

    output
}

pub fn format_status(status: &Status, theme: &Theme, enable_emoji: bool) -> String {
    let (icon, paint): (&str, fn(&str) -> String) = match status.severity {
        Severity::Info => (if enable_emoji { "ℹ️ " } else { "[info]" }, theme.info),
        Severity::Warning => (if enable_emoji { "⚠️ " } else { "[warn]" }, theme.warning),
        Severity::Error => (if enable_emoji { "✘" } else { "[error]" }, theme.error),
    };
    format!("{} {}", icon, paint(&status.message))
}

/// Format the details view: title, gallery and the description split into paragraphs.
pub fn format_details(details: &DestinationDetails, theme: &Theme) -> String {
    let mut output = String::new();

    writeln!(output, "{}", (theme.title)(&details.name)).ok();
    writeln!(output).ok();
    for (i, image) in details.images.iter().enumerate() {
        let label = if i == 0 {
            format!("Main view of {}", details.name)
        } else {
            format!("{} view {}", details.name, i)
        };
        writeln!(output, "  {} {}", (theme.tag)(&label), (theme.link)(image)).ok();
    }

    writeln!(output).ok();
    writeln!(output, "  {}", (theme.title)(&format!("About {}", details.name))).ok();
    for paragraph in split_paragraphs(&details.description, PARAGRAPH_WIDTH) {
        writeln!(output, "  {}", (theme.description)(&paragraph)).ok();
        writeln!(output).ok();
    }

    if let Some(link) = &details.article_link {
        writeln!(output, "  ≫ {}", (theme.link)(link)).ok();
    }

    output
}
