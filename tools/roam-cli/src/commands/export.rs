//! Booking CSV export command.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context as _, Result};
use dialoguer::Confirm;
use roam_core::prelude::*;
use serde_json::json;

use super::ExportArgs;
use crate::context::Context;

/// Run the export command.
pub fn run(args: ExportArgs, ctx: &Context) -> Result<()> {
    let content = fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read input file: {}", args.input))?;
    let records: Vec<BookingRecord> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse bookings: {}", args.input))?;

    ctx.output.debug(&format!("{} bookings loaded", records.len()));

    let csv = export_bookings_csv(&records, &ctx.config.export);

    if args.stdout {
        ctx.output.plain(csv.trim_end());
        return Ok(());
    }

    let path = target_path(&args, ctx);

    if path.exists() && !args.yes {
        if ctx.output.is_json() {
            bail!(
                "Output file already exists: {}. Use --yes to overwrite.",
                path.display()
            );
        }
        let confirmed = Confirm::new()
            .with_prompt(format!("Overwrite {}?", path.display()))
            .default(false)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Export cancelled");
            return Ok(());
        }
    }

    fs::write(&path, &csv).with_context(|| format!("Failed to write {}", path.display()))?;

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "path": path.display().to_string(),
            "rows": records.len(),
        }));
    } else {
        ctx.output.success(&format!(
            "Exported {} booking(s) to {}",
            records.len(),
            path.display()
        ));
    }

    Ok(())
}

fn target_path(args: &ExportArgs, ctx: &Context) -> PathBuf {
    match args.output {
        Some(ref output) => PathBuf::from(output),
        None => {
            let listing = args.listing.as_deref().unwrap_or("all");
            let today = chrono::Local::now().date_naive();
            ctx.cwd.join(export_file_name(listing, today))
        }
    }
}
