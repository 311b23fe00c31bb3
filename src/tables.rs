use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    core::{assignment::Assignment, facility::Facility},
    error::ReportError,
    quantity::cost::Cost,
    statistics::average::FacilityAverage,
};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

#[must_use]
pub fn build_facilities_table(facilities: &[Facility]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["ID", "Name", "Address"]);
    for facility in facilities {
        table.add_row(vec![
            Cell::new(facility.id).add_attribute(Attribute::Dim),
            Cell::new(&facility.name).add_attribute(Attribute::Bold),
            Cell::new(&facility.address),
        ]);
    }
    table
}

#[must_use]
pub fn build_averages_table(averages: &[FacilityAverage]) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Facility"),
        Cell::new("Daily average").set_alignment(CellAlignment::Right),
    ]);
    for average in averages {
        table.add_row(vec![
            Cell::new(&average.facility.name),
            match average.average {
                Ok(energy) => Cell::new(format!("{energy:.2}")),
                Err(_) => Cell::new("n/a").fg(Color::Red),
            }
            .set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

/// Build the rota table with facility names, finishing with the total cost.
pub fn build_assignment_table(
    assignment: &Assignment,
    facilities: &[Facility],
    switching_penalty: Cost,
) -> Result<Table, ReportError> {
    let names = assignment.named(facilities)?;
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Day"),
        Cell::new("Consumption").set_alignment(CellAlignment::Right),
        Cell::new("Cost").set_alignment(CellAlignment::Right),
    ]);
    for (step, name) in assignment.steps.iter().zip(names) {
        table.add_row(vec![
            Cell::new(name).fg(if step.is_switch { Color::DarkYellow } else { Color::Reset }),
            Cell::new(format!("{:.2}", step.consumption)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.2}", step.cost(switching_penalty)))
                .set_alignment(CellAlignment::Right)
                .fg(if step.is_switch { Color::Red } else { Color::Reset }),
        ]);
    }
    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        Cell::new(""),
        Cell::new(format!("{:.2}", assignment.total_cost))
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Bold),
    ]);
    Ok(table)
}
