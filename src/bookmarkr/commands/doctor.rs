use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Library;
use tracing::warn;

/// Checks the activity ledger against the books' reading days and rebuilds it from
/// them when they disagree.
pub fn run(library: &mut Library) -> Result<CmdResult> {
    let issues = library.activity.discrepancies(&library.books);
    let mut result = CmdResult::default();

    if issues.is_empty() {
        result.add_message(CmdMessage::success("No inconsistencies found."));
        return Ok(result);
    }

    result.add_message(CmdMessage::warning("Inconsistencies found and fixed:"));
    for issue in &issues {
        warn!(
            date = %issue.date,
            recorded = issue.recorded,
            attributed = issue.attributed,
            "ledger mismatch"
        );
        result.add_message(CmdMessage::info(format!(
            "  - {}: ledger had {} page(s), books account for {}",
            issue.date, issue.recorded, issue.attributed
        )));
    }
    library.activity.rebuild(&library.books);

    Ok(result)
}
