//! Report command - print the benchmark summary

use anstream::{print, println};
use tap_release::error::{Error, Result};
use tap_release::report::{recorded_report, render};

/// Run the report command
pub fn run_report(json: bool) -> Result<()> {
    let report = recorded_report();
    if json {
        let text = serde_json::to_string_pretty(&report)
            .map_err(|e| Error::Internal(format!("Failed to serialize report: {e}")))?;
        println!("{text}");
    } else {
        print!("{}", render(&report));
    }
    Ok(())
}
