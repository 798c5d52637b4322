use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    core::{reference::REFERENCES, session::Session},
    fmt::FormattedMagnitude,
};

pub const FORMULA_NOTES: [&str; 3] = [
    "單相功率 = 電壓(V) × 電流(A) ÷ 1000",
    "三相功率 = √3 (1.732) × 線電壓(V) × 電流(A) ÷ 1000",
    "實際充電速度可能受限於車載充電器 (OBC) 或電網負載。",
];

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

#[must_use]
pub fn build_session_table(session: &Session) -> Table {
    let state = session.state();
    let mode = state.calculation_mode;
    let phase = state.phase_mode;

    let mut table = new_table();
    table.add_row(vec![Cell::new("Mode"), Cell::new(mode)]);
    table.add_row(vec![
        Cell::new("Phase"),
        Cell::new(format!("{phase} · {}", phase.description())).fg(phase.color()),
    ]);
    table.add_row(vec![
        Cell::new("Voltage"),
        Cell::new(format!("{} ({})", state.voltage, session.defaults().hint(phase))),
    ]);
    table.add_row(vec![
        Cell::new("Input"),
        Cell::new(format!("{} {}", state.input, mode.input_unit()))
            .set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new(format!("計算結果 ({})", mode.result_caption()))
            .add_attribute(Attribute::Bold),
        Cell::new(session.reading())
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Bold)
            .fg(Color::Cyan),
    ]);
    table
}

#[must_use]
pub fn build_references_table() -> Table {
    let mut table = new_table();
    table.set_header(vec!["#", "常見規格", "相數", "電壓 / 電流", "Approx.", "Computed"]);
    for (index, spec) in REFERENCES.iter().enumerate() {
        table.add_row(vec![
            Cell::new(index + 1).add_attribute(Attribute::Dim),
            Cell::new(spec.label),
            Cell::new(spec.phase.label()).fg(spec.phase.color()),
            Cell::new(format!("{}V / {}A", spec.voltage.0, spec.current.0)),
            Cell::new(format!("~ {} kW", FormattedMagnitude(spec.approximate_power.get())))
                .set_alignment(CellAlignment::Right)
                .add_attribute(Attribute::Dim),
            Cell::new(spec.power()).set_alignment(CellAlignment::Right).fg(Color::Blue),
        ]);
    }
    table
}
