//! `list`: show the keys each fragment table accepts.

use anyhow::Result;
use std::collections::HashMap;

use zodiac_prompt_core::{Catalog, FragmentTable, ZodiacSign};

use crate::cli::args::{validate_list_category, GenerateArgs, LIST_CATEGORIES};
use crate::cli::commands::generate::load_catalog;
use crate::config::ZodiacPromptConfig;

fn table_lines<R>(table: &FragmentTable<R>) -> Vec<String> {
    table
        .keys()
        .map(|key| {
            if key == table.fallback_key() {
                format!("{} (fallback)", key)
            } else {
                key.to_string()
            }
        })
        .collect()
}

/// Keys for one table; signs are listed Aries through Pisces.
pub fn category_lines(catalog: &Catalog, category: &str) -> Vec<String> {
    match category {
        "genders" => table_lines(catalog.genders()),
        "tones" => table_lines(catalog.tones()),
        "themes" => table_lines(catalog.themes()),
        "signs" => {
            let fallback = catalog.signs().fallback_key();
            ZodiacSign::ALL
                .iter()
                .map(|sign| {
                    if sign.name() == fallback {
                        format!("{} (fallback)", sign.name())
                    } else {
                        sign.name().to_string()
                    }
                })
                .collect()
        }
        _ => Vec::new(),
    }
}

pub fn render_listing(catalog: &Catalog, category: Option<&str>) -> String {
    let categories: Vec<&str> = match category {
        Some(name) => vec![name],
        None => LIST_CATEGORIES.to_vec(),
    };

    categories
        .iter()
        .map(|name| {
            let mut block = format!("{}:", name);
            for line in category_lines(catalog, name) {
                block.push_str("\n  ");
                block.push_str(&line);
            }
            block
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn run_list_command(args: GenerateArgs, category: Option<String>) -> Result<()> {
    validate_list_category(category.as_deref())?;

    let env_vars: HashMap<String, String> = std::env::vars().collect();
    let config =
        ZodiacPromptConfig::load_with_precedence(args.config.as_deref(), &args, &env_vars)?;
    let catalog = load_catalog(&config)?;

    println!("{}", render_listing(&catalog, category.as_deref()));
    Ok(())
}
