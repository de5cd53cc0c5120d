//! Markdown rendering of assembled verses, for the workflow endpoint.

use crate::verses::models::VerseRecord;

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// `"Retrieved N verse(s) from Chapter"`.
pub fn summary_message(records: &[VerseRecord]) -> String {
    let chapter = records
        .first()
        .map(|r| r.chapter_name.as_str())
        .unwrap_or("the requested chapter");
    format!(
        "Retrieved {} verse{} from {}",
        records.len(),
        plural(records.len()),
        chapter
    )
}

pub fn render_explanation(records: &[VerseRecord]) -> String {
    let mut out = format!("# Quran Verse{} Explanation\n\n", plural(records.len()));

    for (index, record) in records.iter().enumerate() {
        out.push_str(&format!("## {}. {}\n\n", index + 1, record.reference));
        out.push_str(&format!("**Arabic Text:**\n{}\n\n", record.original_text));
        out.push_str(&format!("**English Translation:**\n{}\n\n", record.translation));
        out.push_str("---\n\n");
    }

    out.push_str(&format!("*{}*", summary_message(records)));
    out
}
