use std::path::Path;

use crate::dataset;
use crate::error::Result;
use crate::fmt::cop;
use crate::gallery::scan_gallery;
use crate::settings::{load_settings, settings_file_exists, settings_path, shellexpand_path};
use crate::stats::{available_years, compute_kpis};

pub fn run(data: Option<String>) -> Result<()> {
    let settings = load_settings();

    let settings_note = if settings_file_exists() { "" } else { " (defaults)" };
    println!("Settings:    {}{settings_note}", settings_path().display());

    let dataset = dataset::load(data.as_deref(), &settings)?;
    println!("Dataset:     {}", dataset.source);
    println!("Fingerprint: {}", &dataset.fingerprint[..12]);

    let kpis = compute_kpis(&dataset.projects);
    let years = available_years(&dataset.projects);
    println!();
    println!("Projects:  {}", kpis.projects);
    println!("Clients:   {}", kpis.clients);
    println!("Years:     {}", years.len());
    println!("Total:     {}", cop(kpis.total_cop));

    println!();
    let gallery_dir = shellexpand_path(&settings.gallery_dir);
    match scan_gallery(Path::new(&gallery_dir)) {
        Ok(groups) => {
            let photos: usize = groups.iter().map(|g| g.images.len()).sum();
            println!(
                "Gallery:   {gallery_dir} ({photos} photos in {} groups)",
                groups.len()
            );
        }
        Err(_) => println!("Gallery:   {gallery_dir} (not found)"),
    }
    println!("Outbox:    {}", shellexpand_path(&settings.outbox_dir));
    Ok(())
}
