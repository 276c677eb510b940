//! Slug and detail-path commands.

use anyhow::Result;
use roam_core::prelude::*;
use serde_json::json;

use super::{SlugArgs, SlugCommand};
use crate::context::Context;

/// Run the slug command.
pub fn run(args: SlugArgs, ctx: &Context) -> Result<()> {
    let codec = SlugCodec::new(&ctx.config.slug);

    match args.command {
        SlugCommand::Generate { name, location } => {
            let slug = codec.slug(&name, location.as_deref());
            if ctx.output.is_json() {
                ctx.output.json(&json!({ "slug": slug }));
            } else {
                ctx.output.plain(&slug);
            }
        }
        SlugCommand::Path {
            kind,
            id,
            name,
            location,
        } => {
            let kind = normalize_kind(&kind, ctx);
            let path = codec.detail_path(&kind, &id, &name, location.as_deref());
            if ctx.output.is_json() {
                ctx.output.json(&json!({ "kind": kind, "id": id, "path": path }));
            } else {
                ctx.output.plain(&path);
            }
        }
        SlugCommand::Extract { segment } => {
            let id = codec.extract(last_segment(&segment));
            if id.is_empty() {
                ctx.output.warn("No id could be recovered");
            }
            if ctx.output.is_json() {
                ctx.output.json(&json!({ "segment": segment, "id": id }));
            } else {
                ctx.output.plain(&id);
            }
        }
    }

    Ok(())
}

/// Canonical kind name when known; unknown kinds pass through as typed.
fn normalize_kind(raw: &str, ctx: &Context) -> String {
    match raw.parse::<ListingKind>() {
        Ok(kind) => kind.as_str().to_string(),
        Err(e) => {
            ctx.output.debug(&e.to_string());
            raw.to_string()
        }
    }
}

/// Final non-empty path segment, so full detail paths are accepted.
fn last_segment(input: &str) -> &str {
    input
        .trim()
        .rsplit('/')
        .find(|s| !s.is_empty())
        .unwrap_or("")
}
