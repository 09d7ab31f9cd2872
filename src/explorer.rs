use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Layout},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::gallery::{GalleryGroup, Lightbox};
use crate::models::Project;
use crate::query::{run_query, ProjectQuery, SortDirection, SortKey, PAGE_SIZES};
use crate::stats::{available_categories, available_years};
use crate::tui::{self, FOOTER_STYLE, HEADER_STYLE, SELECTED_STYLE};
use crate::tui::{InteractiveView, ViewAction};

// ---------------------------------------------------------------------------
// Catalog explorer
// ---------------------------------------------------------------------------

enum ExplorerMode {
    Normal,
    /// Editing the search box; holds the text to restore on Esc.
    Search(String),
    Detail,
}

pub struct CatalogExplorer {
    projects: Vec<Project>,
    years: Vec<String>,
    categories: Vec<String>,
    query: ProjectQuery,
    selected: usize,
    mode: ExplorerMode,
    status_message: Option<String>,
    table_state: TableState,
}

impl CatalogExplorer {
    pub fn new(projects: Vec<Project>) -> Self {
        let years = available_years(&projects);
        let categories = available_categories(&projects);
        Self {
            projects,
            years,
            categories,
            query: ProjectQuery::default(),
            selected: 0,
            mode: ExplorerMode::Normal,
            status_message: None,
            table_state: TableState::default(),
        }
    }

    /// Filters or sort changed; back to the first page and the top row.
    fn reset_view(&mut self) {
        self.query.page = 1;
        self.selected = 0;
    }

    fn filters_line(&self) -> String {
        let mut parts = Vec::new();
        if !self.query.search.is_empty() {
            parts.push(format!("search:\"{}\"", self.query.search));
        }
        if let Some(ref y) = self.query.year {
            parts.push(format!("year:{y}"));
        }
        if let Some(ref c) = self.query.category {
            parts.push(format!("tipo:{c}"));
        }
        parts.push(format!("sort:{}", sort_label(&self.query)));
        parts.push(format!("size:{}", self.query.page_size));
        parts.join("  |  ")
    }

    fn handle_normal_key(&mut self, code: KeyCode) -> ViewAction {
        let info = run_query(&self.projects, &self.query);
        let (page, total_pages, on_page) = (info.page, info.total_pages, info.rows.len());
        self.selected = self.selected.min(on_page.saturating_sub(1));

        match code {
            KeyCode::Char('q') | KeyCode::Esc => return ViewAction::Close,
            KeyCode::Down => {
                if on_page > 0 && self.selected + 1 < on_page {
                    self.selected += 1;
                }
            }
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Char('n') | KeyCode::Char(']') | KeyCode::Right | KeyCode::PageDown => {
                if page < total_pages {
                    self.query.page = page + 1;
                    self.selected = 0;
                }
            }
            KeyCode::Char('p') | KeyCode::Char('[') | KeyCode::Left | KeyCode::PageUp => {
                if page > 1 {
                    self.query.page = page - 1;
                    self.selected = 0;
                }
            }
            KeyCode::Home => {
                self.query.page = 1;
                self.selected = 0;
            }
            KeyCode::End => {
                self.query.page = total_pages;
                self.selected = 0;
            }
            KeyCode::Char('/') => {
                self.mode = ExplorerMode::Search(self.query.search.clone());
            }
            KeyCode::Char('y') => {
                self.query.year = cycle_option(&self.years, self.query.year.as_deref(), true);
                self.reset_view();
            }
            KeyCode::Char('Y') => {
                self.query.year = cycle_option(&self.years, self.query.year.as_deref(), false);
                self.reset_view();
            }
            KeyCode::Char('t') => {
                self.query.category =
                    cycle_option(&self.categories, self.query.category.as_deref(), true);
                self.reset_view();
            }
            KeyCode::Char('T') => {
                self.query.category =
                    cycle_option(&self.categories, self.query.category.as_deref(), false);
                self.reset_view();
            }
            KeyCode::Char('s') => {
                self.query.sort = cycle_sort(self.query.sort);
                self.reset_view();
            }
            KeyCode::Char('d') => {
                self.query.direction = match self.query.direction {
                    SortDirection::Asc => SortDirection::Desc,
                    SortDirection::Desc => SortDirection::Asc,
                };
                self.reset_view();
            }
            // Column shortcuts behave like clicking a header: same key flips
            // the direction, a new key starts ascending.
            KeyCode::Char('1') => {
                self.query.toggle_sort(SortKey::Date);
                self.selected = 0;
            }
            KeyCode::Char('2') => {
                self.query.toggle_sort(SortKey::Client);
                self.selected = 0;
            }
            KeyCode::Char('3') => {
                self.query.toggle_sort(SortKey::Value);
                self.selected = 0;
            }
            KeyCode::Char('+') => {
                let i = PAGE_SIZES
                    .iter()
                    .position(|&s| s == self.query.page_size)
                    .unwrap_or(0);
                self.query.page_size = PAGE_SIZES[(i + 1) % PAGE_SIZES.len()];
                // page is kept; run_query clamps it back into range
            }
            KeyCode::Char('c') => {
                self.query.search.clear();
                self.query.year = None;
                self.query.category = None;
                self.reset_view();
                self.status_message = Some("Filters cleared".to_string());
            }
            KeyCode::Enter => {
                if on_page > 0 {
                    self.mode = ExplorerMode::Detail;
                }
            }
            _ => {}
        }
        ViewAction::Continue
    }

    fn handle_search_key(&mut self, code: KeyCode) -> ViewAction {
        match code {
            KeyCode::Esc => {
                let prior = std::mem::replace(&mut self.mode, ExplorerMode::Normal);
                if let ExplorerMode::Search(text) = prior {
                    self.query.search = text;
                }
                self.reset_view();
            }
            KeyCode::Enter => self.mode = ExplorerMode::Normal,
            KeyCode::Backspace => {
                self.query.search.pop();
                self.reset_view();
            }
            KeyCode::Char(c) => {
                self.query.search.push(c);
                self.reset_view();
            }
            _ => {}
        }
        ViewAction::Continue
    }
}

impl InteractiveView for CatalogExplorer {
    fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let narrow = area.width < 100;

        let areas = Layout::vertical([
            Constraint::Length(1), // title
            Constraint::Length(1), // filters
            Constraint::Fill(1),   // table or detail
            Constraint::Length(1), // status
            Constraint::Length(1), // keys
        ])
        .split(area);
        let title_area = areas[0];
        let filters_area = areas[1];
        let body_area = areas[2];
        let status_area = areas[3];
        let keys_area = areas[4];

        frame.render_widget(
            Paragraph::new("Project Catalog").style(HEADER_STYLE),
            title_area,
        );
        frame.render_widget(
            Paragraph::new(self.filters_line()).style(FOOTER_STYLE),
            filters_area,
        );

        let info = run_query(&self.projects, &self.query);
        self.selected = self.selected.min(info.rows.len().saturating_sub(1));

        if matches!(self.mode, ExplorerMode::Detail) {
            let text_width = body_area.width.saturating_sub(18).max(20) as usize;
            let mut lines: Vec<Line> = Vec::new();
            if let Some(p) = info.rows.get(self.selected) {
                let fecha = if p.date.is_empty() { "\u{2014}" } else { p.date.as_str() };
                let tipo = if p.categories.is_empty() {
                    "\u{2014}".to_string()
                } else {
                    p.categories.join(", ")
                };
                lines.push(detail_line("Cliente", &p.client));
                for (i, row) in tui::wrap_text(&p.work, text_width).0.lines().enumerate() {
                    if i == 0 {
                        lines.push(detail_line("Obra", row));
                    } else {
                        lines.push(Line::from(format!("{:<14}{row}", "")));
                    }
                }
                lines.push(detail_line("Fecha", fecha));
                lines.push(detail_line("Tipo", &tipo));
                lines.push(Line::from(vec![
                    Span::styled(format!("{:<14}", "Valor:"), HEADER_STYLE),
                    tui::value_span(p.value_cop),
                ]));
                lines.push(detail_line(
                    "Contacto",
                    p.contact.as_deref().unwrap_or("\u{2014}"),
                ));
                let descripcion = p.description.as_deref().unwrap_or("\u{2014}");
                for (i, row) in tui::wrap_text(descripcion, text_width).0.lines().enumerate() {
                    if i == 0 {
                        lines.push(detail_line("Descripci\u{f3}n", row));
                    } else {
                        lines.push(Line::from(format!("{:<14}{row}", "")));
                    }
                }
            }
            frame.render_widget(Paragraph::new(lines), body_area);
        } else if info.rows.is_empty() {
            frame.render_widget(
                Paragraph::new("No projects match the current filters.").style(FOOTER_STYLE),
                body_area,
            );
        } else {
            // Fixed columns plus spacing decide how much room Obra gets.
            let (fixed_cols, num_cols): (u16, u16) =
                if narrow { (10 + 24 + 16, 4) } else { (10 + 24 + 24 + 16, 5) };
            let obra_width = body_area
                .width
                .saturating_sub(fixed_cols + (num_cols - 1))
                .max(10) as usize;

            let mut rendered_rows = Vec::new();
            for p in &info.rows {
                let (obra, line_count) = tui::wrap_text(&p.work, obra_width);
                let fecha = if p.date.is_empty() {
                    "\u{2014}".to_string()
                } else {
                    p.date.clone()
                };
                let valor = Cell::from(tui::value_span(p.value_cop));
                let cells: Vec<Cell> = if narrow {
                    vec![
                        Cell::from(fecha),
                        Cell::from(p.client.clone()),
                        Cell::from(obra),
                        valor,
                    ]
                } else {
                    let tipo = if p.categories.is_empty() {
                        "\u{2014}".to_string()
                    } else {
                        p.categories.join(", ")
                    };
                    vec![
                        Cell::from(fecha),
                        Cell::from(p.client.clone()),
                        Cell::from(obra),
                        Cell::from(tipo),
                        valor,
                    ]
                };
                rendered_rows.push(Row::new(cells).height(line_count));
            }

            let widths: Vec<Constraint> = if narrow {
                vec![
                    Constraint::Length(10),
                    Constraint::Length(24),
                    Constraint::Fill(1),
                    Constraint::Length(16),
                ]
            } else {
                vec![
                    Constraint::Length(10),
                    Constraint::Length(24),
                    Constraint::Fill(1),
                    Constraint::Length(24),
                    Constraint::Length(16),
                ]
            };
            let header_cells: Vec<&str> = if narrow {
                vec!["Fecha", "Cliente", "Obra", "Valor COP"]
            } else {
                vec!["Fecha", "Cliente", "Obra", "Tipo", "Valor COP"]
            };

            self.table_state.select(Some(self.selected));
            let table = Table::new(rendered_rows, widths)
                .header(Row::new(header_cells).style(HEADER_STYLE).bottom_margin(1))
                .column_spacing(1)
                .row_highlight_style(SELECTED_STYLE);
            frame.render_stateful_widget(table, body_area, &mut self.table_state);
        }

        let range = if info.total == 0 {
            "0 of 0".to_string()
        } else {
            format!("{}-{} of {}", info.start + 1, info.end, info.total)
        };
        let status = match &self.status_message {
            Some(msg) => format!(
                "Projects {range} | Page {}/{} | {msg}",
                info.page, info.total_pages
            ),
            None => format!("Projects {range} | Page {}/{}", info.page, info.total_pages),
        };
        frame.render_widget(Paragraph::new(status).style(FOOTER_STYLE), status_area);

        let keys_widget = match &self.mode {
            ExplorerMode::Normal => Paragraph::new(
                "\u{2191}/\u{2193}:select  \u{2190}/\u{2192}:page  /:search  y:year  t:tipo  s:sort  d:dir  1-3:column  +:size  c:clear  Enter:detail  q:quit",
            )
            .style(FOOTER_STYLE),
            ExplorerMode::Search(_) => Paragraph::new(format!(
                "Search: {}\u{2588}  (Enter=done, Esc=cancel)",
                self.query.search
            )),
            ExplorerMode::Detail => {
                Paragraph::new("Esc:back").style(FOOTER_STYLE)
            }
        };
        frame.render_widget(keys_widget, keys_area);
    }

    fn handle_key(&mut self, code: KeyCode) -> ViewAction {
        self.status_message = None;
        match &self.mode {
            ExplorerMode::Normal => self.handle_normal_key(code),
            ExplorerMode::Search(_) => self.handle_search_key(code),
            ExplorerMode::Detail => {
                if matches!(code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
                    self.mode = ExplorerMode::Normal;
                }
                ViewAction::Continue
            }
        }
    }
}

fn detail_line(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<14}", format!("{label}:")), HEADER_STYLE),
        Span::raw(value.to_string()),
    ])
}

fn sort_label(q: &ProjectQuery) -> String {
    let key = match q.sort {
        None => return "dataset order".to_string(),
        Some(SortKey::Date) => "fecha",
        Some(SortKey::Client) => "cliente",
        Some(SortKey::Value) => "valor",
    };
    let dir = match q.direction {
        SortDirection::Asc => "asc",
        SortDirection::Desc => "desc",
    };
    format!("{key} {dir}")
}

/// Step an optional filter through None -> options[0] -> ... -> last -> None.
fn cycle_option(options: &[String], current: Option<&str>, forward: bool) -> Option<String> {
    if options.is_empty() {
        return None;
    }
    let idx = current.and_then(|v| options.iter().position(|o| o == v));
    let next = if forward {
        match idx {
            None => Some(0),
            Some(i) if i + 1 < options.len() => Some(i + 1),
            Some(_) => None,
        }
    } else {
        match idx {
            None => Some(options.len() - 1),
            Some(0) => None,
            Some(i) => Some(i - 1),
        }
    };
    next.map(|i| options[i].clone())
}

fn cycle_sort(current: Option<SortKey>) -> Option<SortKey> {
    match current {
        None => Some(SortKey::Date),
        Some(SortKey::Date) => Some(SortKey::Client),
        Some(SortKey::Client) => Some(SortKey::Value),
        Some(SortKey::Value) => None,
    }
}

// ---------------------------------------------------------------------------
// Gallery explorer
// ---------------------------------------------------------------------------

pub struct GalleryExplorer {
    groups: Vec<GalleryGroup>,
    selected_group: usize,
    selected_image: usize,
    lightbox: Lightbox,
    group_state: TableState,
    image_state: TableState,
}

impl GalleryExplorer {
    pub fn new(groups: Vec<GalleryGroup>) -> Self {
        Self {
            groups,
            selected_group: 0,
            selected_image: 0,
            lightbox: Lightbox::Closed,
            group_state: TableState::default(),
            image_state: TableState::default(),
        }
    }

    fn images_in_group(&self) -> usize {
        self.groups
            .get(self.selected_group)
            .map_or(0, |g| g.images.len())
    }
}

impl InteractiveView for GalleryExplorer {
    fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let areas = Layout::vertical([
            Constraint::Length(1), // title
            Constraint::Fill(1),   // panes
            Constraint::Length(1), // status
            Constraint::Length(1), // keys
        ])
        .split(area);
        let title_area = areas[0];
        let body_area = areas[1];
        let status_area = areas[2];
        let keys_area = areas[3];

        frame.render_widget(
            Paragraph::new("Photo Gallery").style(HEADER_STYLE),
            title_area,
        );

        let panes = Layout::horizontal([Constraint::Length(32), Constraint::Fill(1)])
            .split(body_area);
        let group_area = panes[0];
        let image_area = panes[1];

        let group_rows: Vec<Row> = self
            .groups
            .iter()
            .map(|g| {
                Row::new(vec![
                    Cell::from(g.category.clone()),
                    Cell::from(g.images.len().to_string()),
                ])
            })
            .collect();
        self.group_state.select(Some(self.selected_group));
        let group_table = Table::new(
            group_rows,
            vec![Constraint::Fill(1), Constraint::Length(5)],
        )
        .header(Row::new(vec!["Tipo de obra", "Fotos"]).style(HEADER_STYLE).bottom_margin(1))
        .column_spacing(1)
        .row_highlight_style(SELECTED_STYLE);
        frame.render_stateful_widget(group_table, group_area, &mut self.group_state);

        if let Lightbox::Open { group, image } = self.lightbox {
            let mut lines: Vec<Line> = Vec::new();
            if let Some(img) = self.lightbox.current(&self.groups) {
                let count = self.groups[group].images.len();
                lines.push(Line::from(Span::styled(
                    img.category.clone(),
                    HEADER_STYLE,
                )));
                lines.push(Line::from(img.file_name.clone()));
                lines.push(Line::from(format!("Photo {} of {count}", image + 1)));
                lines.push(Line::from(Span::styled(
                    img.path.display().to_string(),
                    FOOTER_STYLE,
                )));
            }
            frame.render_widget(Paragraph::new(lines), image_area);
        } else if self.groups.is_empty() {
            frame.render_widget(
                Paragraph::new("No images found.").style(FOOTER_STYLE),
                image_area,
            );
        } else {
            let image_rows: Vec<Row> = self.groups[self.selected_group]
                .images
                .iter()
                .map(|img| {
                    Row::new(vec![
                        Cell::from(img.order.to_string()),
                        Cell::from(img.file_name.clone()),
                    ])
                })
                .collect();
            self.image_state.select(Some(self.selected_image));
            let image_table = Table::new(
                image_rows,
                vec![Constraint::Length(4), Constraint::Fill(1)],
            )
            .header(Row::new(vec!["#", "Archivo"]).style(HEADER_STYLE).bottom_margin(1))
            .column_spacing(1)
            .row_highlight_style(SELECTED_STYLE);
            frame.render_stateful_widget(image_table, image_area, &mut self.image_state);
        }

        let status = if self.groups.is_empty() {
            "0 groups".to_string()
        } else {
            format!(
                "Group {}/{} | Photo {}/{}",
                self.selected_group + 1,
                self.groups.len(),
                self.selected_image + 1,
                self.images_in_group(),
            )
        };
        frame.render_widget(Paragraph::new(status).style(FOOTER_STYLE), status_area);

        let keys = if self.lightbox.is_open() {
            "\u{2190}/\u{2192}:navigate  Esc:close"
        } else {
            "\u{2191}/\u{2193}:group  \u{2190}/\u{2192}:photo  Enter:open  q:quit"
        };
        frame.render_widget(Paragraph::new(keys).style(FOOTER_STYLE), keys_area);
    }

    fn handle_key(&mut self, code: KeyCode) -> ViewAction {
        if self.lightbox.is_open() {
            match code {
                KeyCode::Esc | KeyCode::Char('q') => self.lightbox.close(),
                KeyCode::Right | KeyCode::Char('n') => self.lightbox.next(&self.groups),
                KeyCode::Left | KeyCode::Char('p') => self.lightbox.prev(),
                _ => {}
            }
            return ViewAction::Continue;
        }

        match code {
            KeyCode::Char('q') | KeyCode::Esc => return ViewAction::Close,
            KeyCode::Down => {
                if self.selected_group + 1 < self.groups.len() {
                    self.selected_group += 1;
                    self.selected_image = 0;
                }
            }
            KeyCode::Up => {
                if self.selected_group > 0 {
                    self.selected_group -= 1;
                    self.selected_image = 0;
                }
            }
            KeyCode::Right => {
                if self.selected_image + 1 < self.images_in_group() {
                    self.selected_image += 1;
                }
            }
            KeyCode::Left => self.selected_image = self.selected_image.saturating_sub(1),
            KeyCode::Enter => {
                if self.images_in_group() > 0 {
                    self.lightbox = Lightbox::open(self.selected_group, self.selected_image);
                }
            }
            _ => {}
        }
        ViewAction::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::GalleryImage;
    use std::path::PathBuf;

    fn make_projects(n: usize) -> Vec<Project> {
        (0..n)
            .map(|i| Project {
                client: format!("Cliente {:02}", i + 1),
                work: format!("Obra {:02}", i + 1),
                date: format!("20{:02}-06-15", 18 + i % 5),
                categories: if i % 2 == 0 {
                    vec!["V\u{ed}as".to_string()]
                } else {
                    vec!["Demolici\u{f3}n".to_string()]
                },
                value_cop: (i as u64 + 1) * 1_000_000,
                description: None,
                contact: None,
            })
            .collect()
    }

    fn make_explorer(n: usize) -> CatalogExplorer {
        let mut ex = CatalogExplorer::new(make_projects(n));
        ex.query.page_size = 10;
        ex
    }

    #[test]
    fn test_search_typing_filters_and_resets_page() {
        let mut ex = make_explorer(30);
        ex.query.page = 3;
        ex.handle_key(KeyCode::Char('/'));
        ex.handle_key(KeyCode::Char('0'));
        ex.handle_key(KeyCode::Char('1'));
        assert_eq!(ex.query.search, "01");
        assert_eq!(ex.query.page, 1);
        ex.handle_key(KeyCode::Enter);
        assert!(matches!(ex.mode, ExplorerMode::Normal));
        assert_eq!(run_query(&ex.projects, &ex.query).total, 1);
    }

    #[test]
    fn test_search_escape_restores_prior_text() {
        let mut ex = make_explorer(30);
        ex.query.search = "Obra 05".to_string();
        ex.handle_key(KeyCode::Char('/'));
        ex.handle_key(KeyCode::Backspace);
        ex.handle_key(KeyCode::Char('9'));
        assert_eq!(ex.query.search, "Obra 09");
        ex.handle_key(KeyCode::Esc);
        assert_eq!(ex.query.search, "Obra 05");
        assert!(matches!(ex.mode, ExplorerMode::Normal));
    }

    #[test]
    fn test_year_cycle_wraps_through_all() {
        let mut ex = make_explorer(30);
        assert_eq!(ex.years, vec!["2018", "2019", "2020", "2021", "2022"]);

        ex.handle_key(KeyCode::Char('y'));
        assert_eq!(ex.query.year.as_deref(), Some("2018"));
        for _ in 0..4 {
            ex.handle_key(KeyCode::Char('y'));
        }
        assert_eq!(ex.query.year.as_deref(), Some("2022"));
        ex.handle_key(KeyCode::Char('y'));
        assert_eq!(ex.query.year, None);

        ex.handle_key(KeyCode::Char('Y'));
        assert_eq!(ex.query.year.as_deref(), Some("2022"));
    }

    #[test]
    fn test_category_cycle_resets_page() {
        let mut ex = make_explorer(30);
        ex.query.page = 2;
        ex.handle_key(KeyCode::Char('t'));
        assert_eq!(ex.query.category.as_deref(), Some("Demolici\u{f3}n"));
        assert_eq!(ex.query.page, 1);
        ex.handle_key(KeyCode::Char('t'));
        assert_eq!(ex.query.category.as_deref(), Some("V\u{ed}as"));
        ex.handle_key(KeyCode::Char('t'));
        assert_eq!(ex.query.category, None);
    }

    #[test]
    fn test_sort_cycle_and_direction_reset_page() {
        let mut ex = make_explorer(30);
        assert_eq!(ex.query.sort, Some(SortKey::Date));

        ex.query.page = 2;
        ex.handle_key(KeyCode::Char('s'));
        assert_eq!(ex.query.sort, Some(SortKey::Client));
        assert_eq!(ex.query.page, 1);

        ex.handle_key(KeyCode::Char('s'));
        assert_eq!(ex.query.sort, Some(SortKey::Value));
        ex.handle_key(KeyCode::Char('s'));
        assert_eq!(ex.query.sort, None);
        ex.handle_key(KeyCode::Char('s'));
        assert_eq!(ex.query.sort, Some(SortKey::Date));

        ex.query.page = 2;
        ex.handle_key(KeyCode::Char('d'));
        assert_eq!(ex.query.direction, SortDirection::Desc);
        assert_eq!(ex.query.page, 1);
    }

    #[test]
    fn test_column_shortcut_flips_direction() {
        let mut ex = make_explorer(30);
        ex.handle_key(KeyCode::Char('3'));
        assert_eq!(ex.query.sort, Some(SortKey::Value));
        assert_eq!(ex.query.direction, SortDirection::Asc);
        ex.handle_key(KeyCode::Char('3'));
        assert_eq!(ex.query.direction, SortDirection::Desc);
        ex.handle_key(KeyCode::Char('2'));
        assert_eq!(ex.query.sort, Some(SortKey::Client));
        assert_eq!(ex.query.direction, SortDirection::Asc);
    }

    #[test]
    fn test_page_navigation_clamps_at_bounds() {
        let mut ex = make_explorer(30); // 3 pages of 10
        ex.handle_key(KeyCode::Right);
        assert_eq!(ex.query.page, 2);
        ex.handle_key(KeyCode::Right);
        ex.handle_key(KeyCode::Right);
        assert_eq!(ex.query.page, 3);

        ex.handle_key(KeyCode::Left);
        assert_eq!(ex.query.page, 2);
        ex.handle_key(KeyCode::Home);
        assert_eq!(ex.query.page, 1);
        ex.handle_key(KeyCode::Left);
        assert_eq!(ex.query.page, 1);
        ex.handle_key(KeyCode::End);
        assert_eq!(ex.query.page, 3);
    }

    #[test]
    fn test_page_size_cycle_keeps_page() {
        let mut ex = make_explorer(30);
        ex.query.page = 3;
        ex.handle_key(KeyCode::Char('+'));
        assert_eq!(ex.query.page_size, 25);
        assert_eq!(ex.query.page, 3);
        // The engine pulls the stale page back into range on the next read.
        assert_eq!(run_query(&ex.projects, &ex.query).page, 2);
    }

    #[test]
    fn test_selection_moves_within_page() {
        let mut ex = make_explorer(15); // last page has 5 rows
        for _ in 0..12 {
            ex.handle_key(KeyCode::Down);
        }
        assert_eq!(ex.selected, 9);
        ex.handle_key(KeyCode::Up);
        assert_eq!(ex.selected, 8);

        ex.handle_key(KeyCode::End);
        assert_eq!(ex.selected, 0);
        for _ in 0..12 {
            ex.handle_key(KeyCode::Down);
        }
        assert_eq!(ex.selected, 4);
    }

    #[test]
    fn test_clear_filters() {
        let mut ex = make_explorer(30);
        ex.query.search = "Obra".to_string();
        ex.query.year = Some("2019".to_string());
        ex.query.category = Some("V\u{ed}as".to_string());
        ex.query.page = 2;
        ex.handle_key(KeyCode::Char('c'));
        assert!(!ex.query.has_filters());
        assert_eq!(ex.query.page, 1);
        assert!(ex.status_message.is_some());
    }

    #[test]
    fn test_detail_opens_and_closes() {
        let mut ex = make_explorer(10);
        ex.handle_key(KeyCode::Enter);
        assert!(matches!(ex.mode, ExplorerMode::Detail));
        ex.handle_key(KeyCode::Esc);
        assert!(matches!(ex.mode, ExplorerMode::Normal));
    }

    #[test]
    fn test_detail_needs_rows() {
        let mut ex = make_explorer(10);
        ex.query.search = "no such obra".to_string();
        ex.handle_key(KeyCode::Enter);
        assert!(matches!(ex.mode, ExplorerMode::Normal));
    }

    #[test]
    fn test_quit_on_q() {
        let mut ex = make_explorer(5);
        assert!(matches!(ex.handle_key(KeyCode::Char('q')), ViewAction::Close));
    }

    #[test]
    fn test_cycle_option_empty_list() {
        assert_eq!(cycle_option(&[], None, true), None);
        assert_eq!(cycle_option(&[], None, false), None);
    }

    // -- gallery ------------------------------------------------------------

    fn make_groups() -> Vec<GalleryGroup> {
        let img = |cat: &str, name: &str, order: u32| GalleryImage {
            path: PathBuf::from(format!("/obras/{name}")),
            file_name: name.to_string(),
            category: cat.to_string(),
            order,
        };
        vec![
            GalleryGroup {
                category: "Demolici\u{f3}n".to_string(),
                images: vec![
                    img("Demolici\u{f3}n", "Demolici\u{f3}n 1.jpg", 1),
                    img("Demolici\u{f3}n", "Demolici\u{f3}n 2.jpg", 2),
                    img("Demolici\u{f3}n", "Demolici\u{f3}n 3.jpg", 3),
                ],
            },
            GalleryGroup {
                category: "V\u{ed}as".to_string(),
                images: vec![
                    img("V\u{ed}as", "V\u{ed}as 1.jpg", 1),
                    img("V\u{ed}as", "V\u{ed}as 2.jpg", 2),
                ],
            },
        ]
    }

    #[test]
    fn test_gallery_navigation_clamps() {
        let mut gx = GalleryExplorer::new(make_groups());
        gx.handle_key(KeyCode::Up);
        assert_eq!(gx.selected_group, 0);
        gx.handle_key(KeyCode::Down);
        assert_eq!(gx.selected_group, 1);
        gx.handle_key(KeyCode::Down);
        assert_eq!(gx.selected_group, 1);

        gx.handle_key(KeyCode::Right);
        assert_eq!(gx.selected_image, 1);
        gx.handle_key(KeyCode::Right);
        assert_eq!(gx.selected_image, 1); // group has 2 images

        gx.handle_key(KeyCode::Up);
        assert_eq!(gx.selected_image, 0); // group change resets the photo
    }

    #[test]
    fn test_gallery_lightbox_opens_at_selection() {
        let mut gx = GalleryExplorer::new(make_groups());
        gx.handle_key(KeyCode::Down);
        gx.handle_key(KeyCode::Right);
        gx.handle_key(KeyCode::Enter);
        assert!(matches!(gx.lightbox, Lightbox::Open { group: 1, image: 1 }));

        let current = gx.lightbox.current(&gx.groups).unwrap();
        assert_eq!(current.file_name, "V\u{ed}as 2.jpg");
    }

    #[test]
    fn test_gallery_escape_closes_lightbox_then_quits() {
        let mut gx = GalleryExplorer::new(make_groups());
        gx.handle_key(KeyCode::Enter);
        assert!(gx.lightbox.is_open());

        let action = gx.handle_key(KeyCode::Esc);
        assert!(matches!(action, ViewAction::Continue));
        assert!(!gx.lightbox.is_open());

        let action = gx.handle_key(KeyCode::Esc);
        assert!(matches!(action, ViewAction::Close));
    }

    #[test]
    fn test_gallery_lightbox_arrows_clamp() {
        let mut gx = GalleryExplorer::new(make_groups());
        gx.handle_key(KeyCode::Enter);
        for _ in 0..5 {
            gx.handle_key(KeyCode::Right);
        }
        assert!(matches!(gx.lightbox, Lightbox::Open { group: 0, image: 2 }));
        for _ in 0..5 {
            gx.handle_key(KeyCode::Left);
        }
        assert!(matches!(gx.lightbox, Lightbox::Open { group: 0, image: 0 }));
    }

    #[test]
    fn test_gallery_enter_needs_images() {
        let mut gx = GalleryExplorer::new(vec![]);
        gx.handle_key(KeyCode::Enter);
        assert!(!gx.lightbox.is_open());
    }
}
