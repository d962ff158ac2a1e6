use std::collections::BTreeSet;

use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    core::{classifier::CleanFuels, daily::DailyEnergyMix, window::ChargingWindow},
    fmt::FormattedPercentage,
};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

fn clean_share_color(percentage: f64) -> Color {
    if percentage >= 50.0 {
        Color::Green
    } else if percentage >= 25.0 {
        Color::DarkYellow
    } else {
        Color::Red
    }
}

/// One row per date, one column per fuel reported on any of the dates.
pub fn build_daily_mix_table(days: &[DailyEnergyMix], clean_fuels: &CleanFuels) -> Table {
    let fuels: BTreeSet<&str> =
        days.iter().flat_map(|day| day.average_percentages.keys().map(String::as_str)).collect();

    let mut table = new_table();
    table.set_header(
        ["Date", "Clean"]
            .into_iter()
            .map(Cell::new)
            .chain(fuels.iter().map(|fuel| {
                let cell = Cell::new(fuel);
                if clean_fuels.is_clean(fuel) { cell.fg(Color::Green) } else { cell }
            }))
            .collect::<Vec<_>>(),
    );
    for day in days {
        let mut row = vec![
            Cell::new(day.date.format("%a %b %d")),
            Cell::new(FormattedPercentage(day.clean_energy_percentage))
                .set_alignment(CellAlignment::Right)
                .fg(clean_share_color(day.clean_energy_percentage)),
        ];
        row.extend(fuels.iter().map(|fuel| match day.average_percentages.get(*fuel) {
            Some(average) => {
                Cell::new(FormattedPercentage(*average)).set_alignment(CellAlignment::Right)
            }
            None => Cell::new("–").set_alignment(CellAlignment::Right).add_attribute(Attribute::Dim),
        }));
        table.add_row(row);
    }
    table
}

pub fn build_charging_window_table(window: &ChargingWindow) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Date", "Start", "End", "Clean"]);
    table.add_row(vec![
        Cell::new(window.start.format("%b %d")).add_attribute(Attribute::Dim),
        Cell::new(window.start.format("%H:%M")),
        Cell::new(window.end.format("%H:%M")).add_attribute(Attribute::Dim),
        Cell::new(FormattedPercentage(window.average_clean_percentage))
            .set_alignment(CellAlignment::Right)
            .fg(clean_share_color(window.average_clean_percentage)),
    ]);
    table
}
