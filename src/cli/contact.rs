use std::path::PathBuf;

use colored::Colorize;

use crate::contact::{compose, ContactDelivery, Outbox};
use crate::error::Result;
use crate::settings::{load_settings, shellexpand_path};

pub fn run(name: String, email: String, message: String, outbox: Option<String>) -> Result<()> {
    let settings = load_settings();
    let dir = outbox.unwrap_or_else(|| settings.outbox_dir.clone());
    let dir = PathBuf::from(shellexpand_path(&dir));

    let msg = compose(&name, &email, &message)?;
    match Outbox::new(dir).deliver(&msg) {
        Ok(path) => {
            println!(
                "{}",
                "\u{2705} Mensaje enviado. Te contactaremos pronto.".green()
            );
            println!("Saved to {}", path.display());
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", "\u{274c} No se pudo enviar.".red());
            Err(e)
        }
    }
}
