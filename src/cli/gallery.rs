use std::path::Path;

use colored::Colorize;

use crate::error::{ObraError, Result};
use crate::gallery::scan_gallery;
use crate::settings::{load_settings, shellexpand_path};

pub fn run(dir: Option<String>, category: Option<String>) -> Result<()> {
    let settings = load_settings();
    let dir = shellexpand_path(&dir.unwrap_or_else(|| settings.gallery_dir.clone()));
    let mut groups = scan_gallery(Path::new(&dir))?;

    if let Some(ref wanted) = category {
        groups.retain(|g| &g.category == wanted);
        if groups.is_empty() {
            return Err(ObraError::UnknownCategory(wanted.clone()));
        }
    }

    if groups.is_empty() {
        println!("No images found in {dir}");
        return Ok(());
    }

    for group in &groups {
        let count = group.images.len();
        let label = if count == 1 { "photo" } else { "photos" };
        println!("{} ({count} {label})", group.category.bold());
        for img in &group.images {
            println!("  {:>3}  {}", img.order, img.file_name);
        }
        println!();
    }
    Ok(())
}
