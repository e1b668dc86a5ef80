//! Plain-text views

use todolog_core::model::{ItemSnapshot, ListSnapshot, ListSummary, StatusChange};

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The index: every list with its counts
pub fn lists(summaries: &[ListSummary]) -> String {
    if summaries.is_empty() {
        return "No lists yet.\n".to_string();
    }

    let mut out = format!("{:<5} {:<30} {:>5} {:>5}\n", "ID", "NAME", "ITEMS", "OPEN");
    for summary in summaries {
        out.push_str(&format!(
            "{:<5} {:<30} {:>5} {:>5}{}\n",
            summary.list.id,
            summary.list.name,
            summary.item_count,
            summary.open_count,
            if summary.can_be_deleted() { "  (deletable)" } else { "" },
        ));
    }
    out
}

/// One list and its items
pub fn list(snapshot: &ListSnapshot) -> String {
    let mut out = format!(
        "{} (#{}, created {})\n",
        snapshot.list.name,
        snapshot.list.id,
        snapshot.list.created_at.format(TIME_FORMAT)
    );

    if snapshot.items.is_empty() {
        out.push_str("  no items\n");
    }
    for item in &snapshot.items {
        out.push_str(&format!(
            "  {:<5} {:<13} {}\n",
            format!("#{}", item.id),
            format!("[{}]", item.status.label()),
            item.title
        ));
    }
    out
}

fn change_line(change: &StatusChange) -> String {
    let old = change
        .old_status
        .map(|status| status.label())
        .unwrap_or("-");
    format!(
        "  {}  {} -> {}\n",
        change.timestamp.format(TIME_FORMAT),
        old,
        change.new_status.label()
    )
}

/// One item and its status history, oldest first
pub fn item(snapshot: &ItemSnapshot) -> String {
    let item = &snapshot.item;
    let mut out = format!(
        "#{} {} [{}] in list #{}\nHistory:\n",
        item.id,
        item.title,
        item.status.label(),
        item.list_id
    );
    for change in &snapshot.history {
        out.push_str(&change_line(change));
    }
    out
}
