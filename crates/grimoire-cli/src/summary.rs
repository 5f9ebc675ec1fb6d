use anyhow::{Context, Result};
use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;

use grimoire_map::{Extraction, SlotOrigin, Spell};
use grimoire_model::Category;

use crate::types::{EfficiencyReport, ElementMapping, VocabRow};

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("serialize output")?;
    println!("{json}");
    Ok(())
}

pub fn extraction_table(extraction: &Extraction) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Category"),
        header_cell("Component"),
        header_cell("Source"),
        header_cell("Score"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    for category in Category::ALL {
        let (source, score) = match extraction.origin(category) {
            SlotOrigin::Matched(candidate) => (
                Cell::new(candidate.reason.as_str()).fg(Color::Green),
                Cell::new(candidate.score),
            ),
            SlotOrigin::Explicit => (Cell::new("explicit").fg(Color::Green), dim_cell("-")),
            SlotOrigin::Defaulted => (dim_cell("default"), dim_cell("-")),
        };
        table.add_row(vec![
            category_cell(category),
            Cell::new(extraction.components.get(category)),
            source,
            score,
        ]);
    }
    table
}

pub fn print_extraction(extraction: &Extraction) {
    println!("{}", extraction_table(extraction));
}

pub fn spell_table(spell: &Spell) -> Table {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.add_row(vec![
        header_cell("Name"),
        Cell::new(&spell.name).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![header_cell("Description"), Cell::new(&spell.description)]);
    for category in Category::ALL {
        table.add_row(vec![
            category_cell(category),
            Cell::new(spell.components.get(category)),
        ]);
    }
    if let (Some(bloodline), Some(efficiency)) = (&spell.bloodline, &spell.efficiency) {
        table.add_row(vec![
            header_cell("Efficiency"),
            efficiency_cell(&format!("{bloodline}: {efficiency}"), efficiency.percentage),
        ]);
    }
    table
}

pub fn print_spell(spell: &Spell) {
    println!("{}", spell_table(spell));
}

pub fn print_mapping(mapping: &ElementMapping) {
    let candidates = if mapping.candidates.is_empty() {
        "-".to_string()
    } else {
        mapping.candidates.join(", ")
    };
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.add_row(vec![header_cell("Element"), Cell::new(&mapping.source)]);
    if let Some(effect) = &mapping.effect {
        table.add_row(vec![header_cell("Effect"), Cell::new(effect)]);
    }
    table.add_row(vec![
        header_cell("Template element"),
        Cell::new(&mapping.template_element)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![header_cell("Candidates"), dim_cell(candidates)]);
    println!("{table}");
}

pub fn print_efficiency(report: &EfficiencyReport) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Bloodline"),
        header_cell("Element"),
        header_cell("Affinity"),
        header_cell("%"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    table.add_row(vec![
        Cell::new(&report.bloodline),
        Cell::new(&report.element),
        efficiency_cell(&report.efficiency.label, report.efficiency.percentage),
        Cell::new(report.efficiency.percentage),
    ]);
    println!("{table}");
}

pub fn print_vocab(rows: &[VocabRow]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Category"),
        header_cell("Name"),
        header_cell("Affix"),
        header_cell("Synonyms"),
    ]);
    apply_summary_table_style(&mut table);
    for row in rows {
        let synonyms = if row.synonyms.is_empty() {
            dim_cell("-")
        } else {
            Cell::new(row.synonyms.join(", "))
        };
        table.add_row(vec![
            category_cell(row.category),
            Cell::new(&row.name),
            Cell::new(&row.affix),
            synonyms,
        ]);
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn category_cell(category: Category) -> Cell {
    Cell::new(category.as_str())
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn efficiency_cell(text: &str, percentage: u8) -> Cell {
    let color = match percentage {
        80.. => Color::Green,
        60..=79 => Color::Cyan,
        41..=59 => Color::White,
        _ => Color::Yellow,
    };
    Cell::new(text).fg(color)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
