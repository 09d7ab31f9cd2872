use regex::Regex;

use crate::models::{Project, RawCategories, RawProject, RawValue};

// ---------------------------------------------------------------------------
// Dates
// ---------------------------------------------------------------------------

/// Normalizes a raw date to "YYYY-MM-DD" when the layout allows it.
/// Already-canonical dates pass through trimmed, "D/M/YY" and "D/M/YYYY"
/// are zero-padded and pivoted, and anything else comes back trimmed but
/// otherwise untouched. Total: never fails, never validates calendars.
pub fn normalize_date(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return String::new();
    };
    let t = raw.trim();
    if t.is_empty() {
        return String::new();
    }
    let canonical = Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid regex");
    if canonical.is_match(t) {
        return t.to_string();
    }
    let slashed = Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{2,4})$").expect("valid regex");
    if let Some(caps) = slashed.captures(t) {
        let day = &caps[1];
        let month = &caps[2];
        let year = &caps[3];
        // Two-digit years pivot at 50: 00-49 land in the 2000s, 50-99 in
        // the 1900s. Three-digit years are kept verbatim.
        let year = if year.len() == 2 {
            let yy: u32 = year.parse().unwrap_or(0);
            if yy < 50 {
                format!("20{year}")
            } else {
                format!("19{year}")
            }
        } else {
            year.to_string()
        };
        return format!("{year}-{month:0>2}-{day:0>2}");
    }
    t.to_string()
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// Splits a category string on runs of `|`, `,`, `;` or `/`, trimming each
/// piece and dropping empties.
pub fn split_categories(raw: &str) -> Vec<String> {
    let sep = Regex::new(r"[|,;/]+").expect("valid regex");
    sep.split(raw)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

/// A list is taken as-is; a string is split. No dedup in either case.
pub fn normalize_categories(raw: Option<RawCategories>) -> Vec<String> {
    match raw {
        None => Vec::new(),
        Some(RawCategories::Many(list)) => list,
        Some(RawCategories::One(s)) => split_categories(&s),
    }
}

// ---------------------------------------------------------------------------
// Values
// ---------------------------------------------------------------------------

/// Strips every non-digit character and parses what is left as COP.
/// Empty/unparseable input comes back as 0, so the result is never negative.
pub fn parse_cop(raw: &str) -> u64 {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

pub fn normalize_value(raw: Option<RawValue>) -> u64 {
    match raw {
        None => 0,
        Some(RawValue::Number(n)) => parse_cop(&n.to_string()),
        Some(RawValue::Text(s)) => parse_cop(&s),
    }
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

pub fn normalize_record(raw: RawProject) -> Project {
    Project {
        client: raw.cliente,
        work: raw.obra,
        date: normalize_date(raw.fecha.as_deref()),
        categories: normalize_categories(raw.tipo),
        value_cop: normalize_value(raw.valor_cop),
        description: raw.descripcion,
        contact: raw.contacto,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_date_pads_and_pivots() {
        assert_eq!(normalize_date(Some("5/3/24")), "2024-03-05");
        assert_eq!(normalize_date(Some("5/3/71")), "1971-03-05");
        assert_eq!(normalize_date(Some("31/12/49")), "2049-12-31");
        assert_eq!(normalize_date(Some("1/1/50")), "1950-01-01");
    }

    #[test]
    fn test_normalize_date_four_digit_year() {
        assert_eq!(normalize_date(Some("15/8/2023")), "2023-08-15");
        assert_eq!(normalize_date(Some("7/11/2019")), "2019-11-07");
    }

    #[test]
    fn test_normalize_date_canonical_is_fixed_point() {
        assert_eq!(normalize_date(Some("2019-09-04")), "2019-09-04");
        assert_eq!(normalize_date(Some("  2019-09-04  ")), "2019-09-04");
        let once = normalize_date(Some("5/3/24"));
        assert_eq!(normalize_date(Some(&once)), once);
    }

    #[test]
    fn test_normalize_date_keeps_unknown_layouts() {
        assert_eq!(normalize_date(Some("Marzo 2022")), "Marzo 2022");
        assert_eq!(normalize_date(Some("  Marzo 2022  ")), "Marzo 2022");
        assert_eq!(normalize_date(Some("")), "");
        assert_eq!(normalize_date(Some("   ")), "");
        assert_eq!(normalize_date(None), "");
    }

    #[test]
    fn test_normalize_date_never_validates_calendars() {
        assert_eq!(normalize_date(Some("31/2/24")), "2024-02-31"); // Feb 31 kept
        assert_eq!(normalize_date(Some("5/3/197")), "197-03-05"); // 3-digit year kept
    }

    #[test]
    fn test_split_categories() {
        assert_eq!(
            split_categories("Demolición | Excavaciones"),
            vec!["Demolición", "Excavaciones"]
        );
        assert_eq!(split_categories("Vías; Urbanismo /  "), vec!["Vías", "Urbanismo"]);
        assert_eq!(split_categories("a,b;c/d|e"), vec!["a", "b", "c", "d", "e"]);
        assert_eq!(split_categories("Urbanismo"), vec!["Urbanismo"]);
        assert!(split_categories("").is_empty());
        assert!(split_categories(" ;; | ").is_empty());
    }

    #[test]
    fn test_normalize_categories_list_passthrough() {
        let raw = RawCategories::Many(vec![" Demolición ".to_string(), "Vías".to_string()]);
        // Lists are trusted as-is, untrimmed and undeduped.
        assert_eq!(normalize_categories(Some(raw)), vec![" Demolición ", "Vías"]);
        assert!(normalize_categories(None).is_empty());
    }

    #[test]
    fn test_parse_cop() {
        assert_eq!(parse_cop("$12.500.000"), 12_500_000);
        assert_eq!(parse_cop(" 980000 "), 980_000);
        assert_eq!(parse_cop("COP 3.200.000"), 3_200_000);
        assert_eq!(parse_cop(""), 0);
        assert_eq!(parse_cop("n/a"), 0);
    }

    #[test]
    fn test_normalize_value() {
        assert_eq!(normalize_value(None), 0);
        assert_eq!(normalize_value(Some(RawValue::Number(980_000.0))), 980_000);
        assert_eq!(
            normalize_value(Some(RawValue::Text("$12.500.000".to_string()))),
            12_500_000
        );
        assert_eq!(normalize_value(Some(RawValue::Text(String::new()))), 0);
    }

    #[test]
    fn test_normalize_record_leaves_identity_fields_alone() {
        let raw = RawProject {
            cliente: "Postobón S.A.".to_string(),
            obra: "Demolición planta Yumbo".to_string(),
            fecha: Some("5/3/24".to_string()),
            tipo: Some(RawCategories::One("Demolición | Excavaciones".to_string())),
            valor_cop: Some(RawValue::Text("$12.500.000".to_string())),
            descripcion: Some("Retiro de estructuras".to_string()),
            contacto: None,
        };
        let p = normalize_record(raw);
        assert_eq!(p.client, "Postobón S.A.");
        assert_eq!(p.work, "Demolición planta Yumbo");
        assert_eq!(p.date, "2024-03-05");
        assert_eq!(p.categories, vec!["Demolición", "Excavaciones"]);
        assert_eq!(p.value_cop, 12_500_000);
        assert_eq!(p.description.as_deref(), Some("Retiro de estructuras"));
        assert!(p.contact.is_none());
    }
}
