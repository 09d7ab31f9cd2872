pub mod browse;
pub mod contact;
pub mod export;
pub mod featured;
pub mod gallery;
pub mod info;
pub mod init;
pub mod kpis;
pub mod projects;
pub mod status;

use clap::{Parser, Subcommand};

use crate::error::{ObraError, Result};
use crate::query::{SortDirection, SortKey};

pub(crate) fn parse_sort(sort: &str, direction: &str) -> Result<(Option<SortKey>, SortDirection)> {
    let key = match sort {
        "date" | "fecha" => Some(SortKey::Date),
        "client" | "cliente" => Some(SortKey::Client),
        "value" | "valor" => Some(SortKey::Value),
        "none" => None,
        other => return Err(ObraError::Other(format!("unknown sort column: {other}"))),
    };
    let direction = match direction {
        "asc" => SortDirection::Asc,
        "desc" => SortDirection::Desc,
        other => return Err(ObraError::Other(format!("unknown sort direction: {other}"))),
    };
    Ok((key, direction))
}

#[derive(Parser)]
#[command(
    name = "obra",
    about = "Project catalog, KPIs and photo gallery for FerreExpress S.A.S."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List catalog projects with filters, sorting and paging.
    Projects {
        /// Case-insensitive text filter over client, work and description
        #[arg(long)]
        search: Option<String>,
        /// Year filter: YYYY (matches the start of the normalized date)
        #[arg(long)]
        year: Option<String>,
        /// Work type filter, exact label (e.g. 'Vías')
        #[arg(long = "type")]
        category: Option<String>,
        /// Sort column: date, client, value, none
        #[arg(long, default_value = "date")]
        sort: String,
        /// Sort direction: asc or desc
        #[arg(long = "dir", default_value = "asc")]
        direction: String,
        /// 1-based page number (clamped into range)
        #[arg(long, default_value = "1")]
        page: usize,
        /// Rows per page: 10, 25, 50 or 100
        #[arg(long = "page-size", default_value = "25")]
        page_size: usize,
        /// Dataset JSON path (default: settings, then the bundled catalog)
        #[arg(long)]
        data: Option<String>,
    },
    /// Show the headline figures: projects, clients and contracted value.
    Kpis {
        #[arg(long)]
        data: Option<String>,
    },
    /// Show the flagship projects resolved against the catalog.
    Featured {
        #[arg(long)]
        data: Option<String>,
    },
    /// List gallery photos grouped by work type.
    Gallery {
        /// Image directory (default: the configured gallery dir)
        #[arg(long)]
        dir: Option<String>,
        /// Show a single group, exact label
        #[arg(long)]
        category: Option<String>,
    },
    /// Interactively browse the catalog or the gallery.
    Browse {
        #[command(subcommand)]
        command: Option<BrowseCommands>,
    },
    /// Show the company profile and capabilities.
    Info,
    /// Show the service lines.
    Services,
    /// Write a contact message to the outbox.
    Contact {
        /// Sender name
        #[arg(long)]
        name: String,
        /// Reply-to email address
        #[arg(long)]
        email: String,
        /// Message body
        #[arg(long)]
        message: String,
        /// Outbox directory (default: the configured outbox dir)
        #[arg(long)]
        outbox: Option<String>,
    },
    /// Export the filtered catalog as CSV.
    Export {
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        year: Option<String>,
        #[arg(long = "type")]
        category: Option<String>,
        #[arg(long, default_value = "date")]
        sort: String,
        #[arg(long = "dir", default_value = "asc")]
        direction: String,
        /// Output file (default: stdout)
        #[arg(long)]
        output: Option<String>,
        #[arg(long)]
        data: Option<String>,
    },
    /// Show dataset, gallery and settings diagnostics.
    Status {
        #[arg(long)]
        data: Option<String>,
    },
    /// Write the settings file.
    Init {
        /// Gallery image directory
        #[arg(long = "gallery-dir")]
        gallery_dir: Option<String>,
        /// Outbox directory for contact messages
        #[arg(long = "outbox-dir")]
        outbox_dir: Option<String>,
        /// Dataset JSON path (empty keeps the bundled catalog)
        #[arg(long)]
        data: Option<String>,
    },
    /// Generate shell completions.
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand)]
pub enum BrowseCommands {
    /// Interactive project catalog: filters, sorting, paging, detail view.
    Catalog {
        #[arg(long)]
        data: Option<String>,
    },
    /// Interactive photo gallery with a lightbox.
    Gallery {
        #[arg(long)]
        dir: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sort_accepts_both_languages() {
        assert_eq!(
            parse_sort("date", "asc").unwrap(),
            (Some(SortKey::Date), SortDirection::Asc)
        );
        assert_eq!(
            parse_sort("valor", "desc").unwrap(),
            (Some(SortKey::Value), SortDirection::Desc)
        );
        assert_eq!(parse_sort("none", "asc").unwrap(), (None, SortDirection::Asc));
        assert!(parse_sort("size", "asc").is_err());
        assert!(parse_sort("date", "up").is_err());
    }
}
