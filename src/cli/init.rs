use crate::error::Result;
use crate::settings::{load_settings, save_settings, settings_path};

pub fn run(
    gallery_dir: Option<String>,
    outbox_dir: Option<String>,
    data: Option<String>,
) -> Result<()> {
    let mut settings = load_settings();
    if let Some(dir) = gallery_dir {
        settings.gallery_dir = dir;
    }
    if let Some(dir) = outbox_dir {
        settings.outbox_dir = dir;
    }
    if let Some(path) = data {
        settings.dataset_path = path;
    }
    save_settings(&settings)?;

    println!("Settings written to {}", settings_path().display());
    println!("Gallery dir: {}", settings.gallery_dir);
    println!("Outbox dir:  {}", settings.outbox_dir);
    let dataset = if settings.dataset_path.is_empty() {
        "bundled"
    } else {
        &settings.dataset_path
    };
    println!("Dataset:     {dataset}");
    Ok(())
}
