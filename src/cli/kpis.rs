use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::dataset;
use crate::error::Result;
use crate::fmt::cop;
use crate::settings::load_settings;
use crate::stats::compute_kpis;

pub fn run(data: Option<String>) -> Result<()> {
    let settings = load_settings();
    let dataset = dataset::load(data.as_deref(), &settings)?;
    let kpis = compute_kpis(&dataset.projects);

    let mut table = Table::new();
    table.set_header(vec!["Indicador", "Valor"]);
    table.add_row(vec![Cell::new("Proyectos"), Cell::new(kpis.projects)]);
    table.add_row(vec![Cell::new("Clientes"), Cell::new(kpis.clients)]);
    table.add_row(vec![
        Cell::new("Total hist\u{f3}rico aproximado".bold()),
        Cell::new(cop(kpis.total_cop)),
    ]);
    println!("Key Figures\n{table}");
    Ok(())
}
