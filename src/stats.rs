use std::collections::BTreeSet;

use crate::models::Project;

// ---------------------------------------------------------------------------
// KPIs
// ---------------------------------------------------------------------------

pub struct Kpis {
    pub projects: usize,
    pub clients: usize,
    pub total_cop: u64,
}

/// Headline numbers for the whole catalog. Client counting is deliberately
/// exact: names differing in case or whitespace count separately.
pub fn compute_kpis(projects: &[Project]) -> Kpis {
    let clients: BTreeSet<&str> = projects.iter().map(|p| p.client.as_str()).collect();
    Kpis {
        projects: projects.len(),
        clients: clients.len(),
        total_cop: projects.iter().map(|p| p.value_cop).sum(),
    }
}

// ---------------------------------------------------------------------------
// Derived filter options
// ---------------------------------------------------------------------------

/// Distinct four-digit year prefixes of dates, ascending. Dates that did
/// not normalize to a canonical layout contribute nothing.
pub fn available_years(projects: &[Project]) -> Vec<String> {
    let mut years = BTreeSet::new();
    for p in projects {
        let prefix: String = p.date.chars().take(4).collect();
        if prefix.len() == 4 && prefix.chars().all(|c| c.is_ascii_digit()) {
            years.insert(prefix);
        }
    }
    years.into_iter().collect()
}

/// Distinct category labels across the catalog, ascending.
pub fn available_categories(projects: &[Project]) -> Vec<String> {
    let cats: BTreeSet<&str> = projects
        .iter()
        .flat_map(|p| p.categories.iter().map(String::as_str))
        .collect();
    cats.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(client: &str, date: &str, categories: &[&str], value: u64) -> Project {
        Project {
            client: client.to_string(),
            work: format!("Obra {client}"),
            date: date.to_string(),
            categories: categories.iter().map(|c| c.to_string()).collect(),
            value_cop: value,
            description: None,
            contact: None,
        }
    }

    #[test]
    fn test_kpis_counts_and_total() {
        let data = vec![
            sample("Postobón", "2024-03-05", &["Demolición"], 1_000_000),
            sample("Postobón", "2023-01-10", &["Vías"], 0),
            sample("Alkosto", "2022-07-19", &["Urbanismo"], 5_000_000),
        ];
        let k = compute_kpis(&data);
        assert_eq!(k.projects, 3);
        assert_eq!(k.clients, 2);
        assert_eq!(k.total_cop, 6_000_000);
    }

    #[test]
    fn test_kpis_client_counting_is_exact() {
        let data = vec![
            sample("ACME", "2024-01-01", &[], 1),
            sample("acme", "2024-01-02", &[], 1),
            sample("ACME ", "2024-01-03", &[], 1),
        ];
        assert_eq!(compute_kpis(&data).clients, 3);
    }

    #[test]
    fn test_kpis_empty_catalog() {
        let k = compute_kpis(&[]);
        assert_eq!(k.projects, 0);
        assert_eq!(k.clients, 0);
        assert_eq!(k.total_cop, 0);
    }

    #[test]
    fn test_available_years_skips_prose_dates() {
        let data = vec![
            sample("A", "2024-03-05", &[], 0),
            sample("B", "2019-11-07", &[], 0),
            sample("C", "Marzo 2022", &[], 0),
            sample("D", "2024-08-01", &[], 0),
            sample("E", "", &[], 0),
        ];
        assert_eq!(available_years(&data), vec!["2019", "2024"]);
    }

    #[test]
    fn test_available_categories_dedups_and_sorts() {
        let data = vec![
            sample("A", "2024-01-01", &["Vías", "Demolición"], 0),
            sample("B", "2024-01-02", &["Demolición", "Urbanismo"], 0),
        ];
        assert_eq!(
            available_categories(&data),
            vec!["Demolición", "Urbanismo", "Vías"]
        );
    }
}
