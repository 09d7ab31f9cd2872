use comfy_table::{Cell, Table};

use crate::dataset;
use crate::error::Result;
use crate::fmt::cop;
use crate::query::{run_query, ProjectQuery};
use crate::settings::load_settings;

pub fn run(
    search: Option<String>,
    year: Option<String>,
    category: Option<String>,
    sort: String,
    direction: String,
    page: usize,
    page_size: usize,
    data: Option<String>,
) -> Result<()> {
    let settings = load_settings();
    let dataset = dataset::load(data.as_deref(), &settings)?;
    let (sort, direction) = super::parse_sort(&sort, &direction)?;

    let query = ProjectQuery {
        search: search.unwrap_or_default(),
        year,
        category,
        sort,
        direction,
        page,
        page_size,
    };
    let result = run_query(&dataset.projects, &query);

    if result.total == 0 {
        println!("No projects match the current filters.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Fecha", "Cliente", "Obra", "Tipo", "Valor COP"]);
    for p in &result.rows {
        let fecha = if p.date.is_empty() { "\u{2014}" } else { &p.date };
        let tipo = if p.categories.is_empty() {
            "\u{2014}".to_string()
        } else {
            p.categories.join(", ")
        };
        table.add_row(vec![
            Cell::new(fecha),
            Cell::new(&p.client),
            Cell::new(&p.work),
            Cell::new(tipo),
            Cell::new(cop(p.value_cop)),
        ]);
    }
    println!("Projects\n{table}");
    println!(
        "\n{}-{} of {} | Page {}/{}",
        result.start + 1,
        result.end,
        result.total,
        result.page,
        result.total_pages,
    );
    Ok(())
}
