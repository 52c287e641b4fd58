//! CLI knowledge-base inspection.

use anyhow::Result;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;

use portico_types::knowledge::KnowledgeBase;

/// `portico kb` -- print the built-in knowledge base.
pub fn show(json: bool) -> Result<()> {
    let kb = KnowledgeBase::builtin();

    if json {
        println!("{}", serde_json::to_string_pretty(&kb)?);
        return Ok(());
    }

    println!();
    println!(
        "  {} -- {}",
        style(&kb.about.name).cyan().bold(),
        kb.about.profession
    );
    println!(
        "  {} | {} | {}",
        kb.about.email, kb.about.phone, kb.about.city
    );
    println!();

    let mut services = Table::new();
    services
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("#").fg(Color::Cyan),
            Cell::new("Service"),
            Cell::new("Description"),
        ]);
    for (index, service) in kb.services.iter().enumerate() {
        services.add_row(vec![
            Cell::new((index + 1).to_string()),
            Cell::new(&service.name),
            Cell::new(&service.description),
        ]);
    }
    println!("{services}");
    println!();

    let mut skills = Table::new();
    skills
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Category").fg(Color::Cyan),
            Cell::new("Skills"),
        ]);
    for category in &kb.skills {
        skills.add_row(vec![
            Cell::new(&category.label),
            Cell::new(category.items.join(", ")),
        ]);
    }
    println!("{skills}");
    println!();

    println!(
        "  Portfolio: {}",
        style(kb.portfolio.join(", ")).cyan()
    );
    println!();

    Ok(())
}
