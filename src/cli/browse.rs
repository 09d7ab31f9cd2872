use std::path::Path;

use crate::dataset;
use crate::error::Result;
use crate::explorer::{CatalogExplorer, GalleryExplorer};
use crate::gallery::scan_gallery;
use crate::settings::{load_settings, shellexpand_path};
use crate::tui;

pub fn catalog(data: Option<String>) -> Result<()> {
    let settings = load_settings();
    let dataset = dataset::load(data.as_deref(), &settings)?;
    if dataset.projects.is_empty() {
        println!("No projects in the dataset.");
        return Ok(());
    }
    let mut view = CatalogExplorer::new(dataset.projects);
    tui::run_view(&mut view)
}

pub fn gallery(dir: Option<String>) -> Result<()> {
    let settings = load_settings();
    let dir = shellexpand_path(&dir.unwrap_or_else(|| settings.gallery_dir.clone()));
    let groups = scan_gallery(Path::new(&dir))?;
    if groups.is_empty() {
        println!("No images found in {dir}");
        return Ok(());
    }
    let mut view = GalleryExplorer::new(groups);
    tui::run_view(&mut view)
}
