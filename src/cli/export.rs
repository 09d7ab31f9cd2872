use std::io::Write;

use csv::Writer;

use crate::dataset;
use crate::error::Result;
use crate::models::Project;
use crate::query::{filter_and_sort, ProjectQuery};
use crate::settings::load_settings;

pub fn run(
    search: Option<String>,
    year: Option<String>,
    category: Option<String>,
    sort: String,
    direction: String,
    output: Option<String>,
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
        ..ProjectQuery::default()
    };
    let rows = filter_and_sort(&dataset.projects, &query);

    match output {
        Some(path) => {
            let mut wtr = Writer::from_path(&path)?;
            write_rows(&mut wtr, &rows)?;
            wtr.flush()?;
            println!("Wrote {} projects to {path}", rows.len());
        }
        None => {
            let mut wtr = Writer::from_writer(std::io::stdout());
            write_rows(&mut wtr, &rows)?;
            wtr.flush()?;
        }
    }
    Ok(())
}

fn write_rows<W: Write>(wtr: &mut Writer<W>, rows: &[&Project]) -> Result<()> {
    wtr.write_record([
        "fecha",
        "cliente",
        "obra",
        "tipo",
        "valor_cop",
        "contacto",
        "descripcion",
    ])?;
    for p in rows {
        let tipo = p.categories.join(", ");
        let valor = p.value_cop.to_string();
        wtr.write_record([
            p.date.as_str(),
            p.client.as_str(),
            p.work.as_str(),
            tipo.as_str(),
            valor.as_str(),
            p.contact.as_deref().unwrap_or(""),
            p.description.as_deref().unwrap_or(""),
        ])?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(client: &str, work: &str, date: &str, cats: &[&str], value: u64) -> Project {
        Project {
            client: client.to_string(),
            work: work.to_string(),
            date: date.to_string(),
            categories: cats.iter().map(|c| c.to_string()).collect(),
            value_cop: value,
            description: None,
            contact: None,
        }
    }

    #[test]
    fn test_csv_columns_and_quoting() {
        let projects = vec![
            project(
                "Alkosto S.A.",
                "Puente peatonal",
                "2023-04-11",
                &["Urbanismo", "Edificaciones"],
                96_500_000,
            ),
            project("EMCALI", "Canal norte", "2021-09-02", &[], 0),
        ];
        let rows: Vec<&Project> = projects.iter().collect();

        let mut wtr = Writer::from_writer(vec![]);
        write_rows(&mut wtr, &rows).unwrap();
        let bytes = wtr.into_inner().unwrap();
        let csv = String::from_utf8(bytes).unwrap();

        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("fecha,cliente,obra,tipo,valor_cop,contacto,descripcion")
        );
        // A multi-category tipo keeps its comma inside quotes.
        assert_eq!(
            lines.next(),
            Some("2023-04-11,Alkosto S.A.,Puente peatonal,\"Urbanismo, Edificaciones\",96500000,,")
        );
        assert_eq!(lines.next(), Some("2021-09-02,EMCALI,Canal norte,,0,,"));
        assert_eq!(lines.next(), None);
    }
}
