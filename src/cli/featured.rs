use comfy_table::{Cell, Table};

use crate::company::{find_featured, title_case, FEATURED};
use crate::dataset;
use crate::error::Result;
use crate::fmt::cop;
use crate::settings::load_settings;

pub fn run(data: Option<String>) -> Result<()> {
    let settings = load_settings();
    let dataset = dataset::load(data.as_deref(), &settings)?;

    let mut table = Table::new();
    table.set_header(vec!["Obra", "Cliente", "Fecha", "Valor COP", "Foto"]);
    for (needle, photo) in FEATURED {
        match find_featured(&dataset.projects, needle) {
            Some(p) => {
                let fecha = if p.date.is_empty() { "\u{2014}" } else { &p.date };
                // A zero value renders as missing, same as no value at all.
                let valor = if p.value_cop > 0 {
                    cop(p.value_cop)
                } else {
                    "\u{2014}".to_string()
                };
                table.add_row(vec![
                    Cell::new(&p.work),
                    Cell::new(&p.client),
                    Cell::new(fecha),
                    Cell::new(valor),
                    Cell::new(photo),
                ]);
            }
            None => {
                table.add_row(vec![
                    Cell::new(title_case(needle)),
                    Cell::new("Cliente"),
                    Cell::new("\u{2014}"),
                    Cell::new("\u{2014}"),
                    Cell::new(photo),
                ]);
            }
        }
    }
    println!("Featured Projects\n{table}");
    Ok(())
}
