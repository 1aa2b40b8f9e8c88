//! Merge command implementation
//!
//! Load base, load header, overlay header onto base, then either write the
//! result to the output path or print it for a dry run.

use std::io::Write;

use console::Style;

use crate::cli::MergeArgs;
use crate::document::{self, Document};
use crate::error::{Result, io_error};
use crate::merge::shallow_merge;

/// Run the merge described by `args`
pub fn run(args: &MergeArgs) -> Result<()> {
    let merged = merge_inputs(args)?;

    if args.dry_run {
        let yaml = merged.encode()?;
        std::io::stdout()
            .lock()
            .write_all(yaml.as_bytes())
            .map_err(|e| io_error(format!("Failed to write to stdout: {e}")))?;
        return Ok(());
    }

    document::store(&merged, &args.output)?;
    tracing::info!(
        output = %args.output.display(),
        keys = merged.len(),
        "merged document written"
    );

    if !args.quiet {
        print_summary(args, &merged);
    }
    Ok(())
}

/// Load both inputs and overlay the header onto the base
fn merge_inputs(args: &MergeArgs) -> Result<Document> {
    let base = document::load(&args.base)?;
    let header = document::load(&args.header)?;

    let mut merged = shallow_merge(base, header);
    if args.sort_keys {
        merged.sort_keys();
    }
    Ok(merged)
}

fn print_summary(args: &MergeArgs, merged: &Document) {
    let green = Style::new().green().bold();
    let cyan = Style::new().cyan();
    let keys = merged.len();

    println!(
        "{} {} over {} into {} ({} top-level {})",
        green.apply_to("Merged"),
        cyan.apply_to(args.header.display()),
        cyan.apply_to(args.base.display()),
        cyan.apply_to(args.output.display()),
        keys,
        if keys == 1 { "key" } else { "keys" }
    );
}
