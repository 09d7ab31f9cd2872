use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::company::{CAPABILITIES, PROFILE, SERVICES};
use crate::error::Result;

pub fn run() -> Result<()> {
    println!("{}", PROFILE.name.bold());
    println!("{}", PROFILE.tagline);
    println!();
    println!("{}", textwrap::fill(PROFILE.about, 78));

    let mut table = Table::new();
    table.set_header(vec!["Capacidad", "Detalle"]);
    for cap in CAPABILITIES {
        table.add_row(vec![Cell::new(cap.title), Cell::new(cap.text)]);
    }
    println!("\nCapabilities\n{table}");

    println!();
    println!("Tel:        {}", PROFILE.phone);
    println!("Email:      {}", PROFILE.email);
    println!("Direcci\u{f3}n:  {}", PROFILE.address);
    Ok(())
}

pub fn services() -> Result<()> {
    println!("{}", textwrap::fill(PROFILE.description, 78));
    println!();
    for service in SERVICES {
        println!("{}", service.title.bold());
        println!("  {}", service.summary);
        for bullet in &service.bullets {
            println!("  - {bullet}");
        }
        println!();
    }
    Ok(())
}
