// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `pxb categories` - List the categories the detection engine emits

use crate::output::{write_list, OutputFormat};
use anyhow::Result;
use clap::Args;
use pxb_core::category::KNOWN;
use pxb_core::Category;
use serde::Serialize;
use std::fmt;

#[derive(Args)]
pub struct CategoriesArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Serialize)]
struct CategoryRow {
    category: String,
    event: String,
}

impl fmt::Display for CategoryRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<24} {}", self.category, self.event)
    }
}

pub fn handle(args: CategoriesArgs) -> Result<()> {
    let rows: Vec<CategoryRow> = KNOWN
        .iter()
        .map(|name| {
            let category = Category::from(*name);
            CategoryRow {
                event: category.dom_event_name(),
                category: category.to_string(),
            }
        })
        .collect();
    write_list(&mut std::io::stdout().lock(), &rows, args.format)?;
    Ok(())
}
