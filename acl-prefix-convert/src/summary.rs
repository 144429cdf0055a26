use acl_core::{Action, PrefixListLine};
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConversionSummary {
    pub entries: usize,
    pub permits: usize,
    pub denies: usize,
    pub other_actions: usize,
    pub match_all: usize,
    pub remarks: usize,
    pub first_seq: Option<u32>,
    pub last_seq: Option<u32>,
}

pub fn summarize(lines: &[PrefixListLine]) -> ConversionSummary {
    let mut summary = ConversionSummary::default();
    for line in lines {
        match line {
            PrefixListLine::Remark(_) => summary.remarks += 1,
            PrefixListLine::Entry(entry) => {
                summary.entries += 1;
                match entry.action {
                    Action::Permit => summary.permits += 1,
                    Action::Deny => summary.denies += 1,
                    Action::Other(_) => summary.other_actions += 1,
                }
                if entry.prefix.prefix_len() == 0 {
                    summary.match_all += 1;
                }
                summary.first_seq.get_or_insert(entry.seq);
                summary.last_seq = Some(entry.seq);
            }
        }
    }
    summary
}

pub fn render(summary: &ConversionSummary) -> String {
    format!(
        "convert_summary entries={} permit={} deny={} other={} match_all={} remarks={} seq={}",
        summary.entries,
        summary.permits,
        summary.denies,
        summary.other_actions,
        summary.match_all,
        summary.remarks,
        seq_range(summary)
    )
}

fn seq_range(summary: &ConversionSummary) -> String {
    match (summary.first_seq, summary.last_seq) {
        (Some(first), Some(last)) => format!("{first}..{last}"),
        _ => "none".to_string(),
    }
}
