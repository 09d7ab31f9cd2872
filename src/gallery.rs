use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use regex::Regex;
use walkdir::WalkDir;

use crate::error::{ObraError, Result};

pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "avif"];

/// Fixed spelling corrections for derived labels. Matching is
/// case-insensitive; the replacement is the canonical form, so corrected
/// names land in the properly spelled bucket.
const CORRECTIONS: &[(&str, &str)] = &[
    ("vialidades", "Vías"),
    ("rigido", "rígido"),
    ("topografia", "topografía"),
];

#[derive(Debug, Clone)]
pub struct GalleryImage {
    pub path: PathBuf,
    pub file_name: String,
    pub category: String,
    pub order: u32,
}

#[derive(Debug, Clone)]
pub struct GalleryGroup {
    pub category: String,
    pub images: Vec<GalleryImage>,
}

// ---------------------------------------------------------------------------
// Name classification
// ---------------------------------------------------------------------------

/// Derives the category label and carousel order from a file name.
/// "Vías 2.jpg" gives ("Vías", 2). Order is the last digit run anywhere in
/// the base name, 0 when there is none. Digits without a leading space stay
/// in the label: "Vías1.jpg" gives ("Vías1", 1).
pub fn classify(file_name: &str) -> (String, u32) {
    let ext = Regex::new(r"(?i)\.(jpg|jpeg|png|webp|avif)$").expect("valid regex");
    let base = ext.replace(file_name, "").to_string();
    let trailing = Regex::new(r"\s+\d+$").expect("valid regex");
    let raw = trailing.replace(&base, "").trim().to_string();
    let digits = Regex::new(r"\d+").expect("valid regex");
    let order = digits
        .find_iter(&base)
        .last()
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0);
    (prettify(&raw), order)
}

fn prettify(raw: &str) -> String {
    let mut out = raw.to_string();
    for (wrong, fixed) in CORRECTIONS {
        let re = Regex::new(&format!("(?i){wrong}")).expect("valid regex");
        out = re.replace_all(&out, *fixed).to_string();
    }
    out
}

/// Lowercases and strips Spanish diacritics so "Vías" collates with "vias".
pub fn collation_key(s: &str) -> String {
    s.chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'á' => 'a',
            'é' => 'e',
            'í' => 'i',
            'ó' => 'o',
            'ú' | 'ü' => 'u',
            'ñ' => 'n',
            other => other,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Scan + group
// ---------------------------------------------------------------------------

/// Reads the top level of the gallery directory, admitting only known image
/// extensions (case-insensitive). Subdirectories are not descended into.
pub fn scan_gallery(dir: &Path) -> Result<Vec<GalleryGroup>> {
    if !dir.is_dir() {
        return Err(ObraError::GalleryDir(dir.display().to_string()));
    }
    let mut images = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| ObraError::Other(format!("{}: {e}", dir.display())))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let file_name = entry.file_name().to_string_lossy().to_string();
        let Some(ext) = Path::new(&file_name).extension().and_then(|e| e.to_str()) else {
            continue;
        };
        if !IMAGE_EXTENSIONS.iter().any(|ok| ext.eq_ignore_ascii_case(ok)) {
            continue;
        }
        let (category, order) = classify(&file_name);
        images.push(GalleryImage {
            path: entry.into_path(),
            file_name,
            category,
            order,
        });
    }
    Ok(group_images(images))
}

/// Buckets by exact label, orders each bucket by carousel order then file
/// name, and orders buckets by label. Name and label comparisons fold case
/// and accents, with the raw string as the final tie-break.
pub fn group_images(images: Vec<GalleryImage>) -> Vec<GalleryGroup> {
    let mut buckets: BTreeMap<String, Vec<GalleryImage>> = BTreeMap::new();
    for img in images {
        buckets.entry(img.category.clone()).or_default().push(img);
    }
    let mut groups: Vec<GalleryGroup> = buckets
        .into_iter()
        .map(|(category, mut images)| {
            images.sort_by(|a, b| {
                a.order
                    .cmp(&b.order)
                    .then_with(|| collation_key(&a.file_name).cmp(&collation_key(&b.file_name)))
                    .then_with(|| a.file_name.cmp(&b.file_name))
            });
            GalleryGroup { category, images }
        })
        .collect();
    groups.sort_by(|a, b| {
        collation_key(&a.category)
            .cmp(&collation_key(&b.category))
            .then_with(|| a.category.cmp(&b.category))
    });
    groups
}

// ---------------------------------------------------------------------------
// Lightbox
// ---------------------------------------------------------------------------

/// Viewer state over a fixed set of groups. Navigation clamps at both ends
/// of the active group; there is no wraparound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lightbox {
    Closed,
    Open { group: usize, image: usize },
}

impl Lightbox {
    pub fn open(group: usize, image: usize) -> Self {
        Lightbox::Open { group, image }
    }

    pub fn close(&mut self) {
        *self = Lightbox::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Lightbox::Open { .. })
    }

    /// The image list is re-read from the active group on every move, so a
    /// stale index can never cross into another group.
    pub fn next(&mut self, groups: &[GalleryGroup]) {
        if let Lightbox::Open { group, image } = self {
            let len = groups.get(*group).map_or(0, |g| g.images.len());
            if len > 0 {
                *image = (*image + 1).min(len - 1);
            }
        }
    }

    pub fn prev(&mut self) {
        if let Lightbox::Open { image, .. } = self {
            *image = image.saturating_sub(1);
        }
    }

    pub fn current<'a>(&self, groups: &'a [GalleryGroup]) -> Option<&'a GalleryImage> {
        match self {
            Lightbox::Closed => None,
            Lightbox::Open { group, image } => {
                groups.get(*group).and_then(|g| g.images.get(*image))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(dir: &Path, name: &str) {
        std::fs::write(dir.join(name), b"").unwrap();
    }

    #[test]
    fn test_classify_labels_and_order() {
        assert_eq!(classify("Vías 2.jpg"), ("Vías".to_string(), 2));
        assert_eq!(classify("vialidades 3.JPG"), ("Vías".to_string(), 3));
        assert_eq!(classify("pavimento rigido 1.png"), ("pavimento rígido".to_string(), 1));
        assert_eq!(classify("topografia 4.webp"), ("topografía".to_string(), 4));
        assert_eq!(classify("Urbanismo.jpg"), ("Urbanismo".to_string(), 0));
        assert_eq!(classify("cargue y retiro 12.jpeg"), ("cargue y retiro".to_string(), 12));
        // No space before the digits: they stay in the label.
        assert_eq!(classify("Vías1.jpg"), ("Vías1".to_string(), 1));
    }

    #[test]
    fn test_grouping_unifies_corrected_spellings() {
        let images = ["Vías 1.jpg", "Vías 2.jpg", "vialidades 3.jpg"]
            .iter()
            .map(|name| {
                let (category, order) = classify(name);
                GalleryImage {
                    path: PathBuf::from(name),
                    file_name: name.to_string(),
                    category,
                    order,
                }
            })
            .collect();
        let groups = group_images(images);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].category, "Vías");
        let orders: Vec<u32> = groups[0].images.iter().map(|i| i.order).collect();
        assert_eq!(orders, vec![1, 2, 3]);
    }

    #[test]
    fn test_groups_sorted_with_accent_folding() {
        let mk = |name: &str| {
            let (category, order) = classify(name);
            GalleryImage {
                path: PathBuf::from(name),
                file_name: name.to_string(),
                category,
                order,
            }
        };
        let groups = group_images(vec![
            mk("vías 1.jpg"),
            mk("Urbanismo 1.jpg"),
            mk("Ávila 1.jpg"),
            mk("Demolición 1.jpg"),
        ]);
        let labels: Vec<&str> = groups.iter().map(|g| g.category.as_str()).collect();
        // Byte order would push "Ávila" past "vías"; folded order keeps it
        // at the front.
        assert_eq!(labels, vec!["Ávila", "Demolición", "Urbanismo", "vías"]);
    }

    #[test]
    fn test_scan_gallery_filters_and_groups() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "Demolición 2.jpg");
        touch(dir.path(), "Demolición 1.JPG");
        touch(dir.path(), "Vías 1.webp");
        touch(dir.path(), "notas.txt");
        touch(dir.path(), "sin-extension");
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        touch(&dir.path().join("sub"), "oculta 1.jpg");

        let groups = scan_gallery(dir.path()).unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].category, "Demolición");
        let names: Vec<&str> = groups[0].images.iter().map(|i| i.file_name.as_str()).collect();
        assert_eq!(names, vec!["Demolición 1.JPG", "Demolición 2.jpg"]);
        assert_eq!(groups[1].category, "Vías");
    }

    #[test]
    fn test_scan_gallery_missing_dir_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("no-existe");
        assert!(scan_gallery(&missing).is_err());
    }

    #[test]
    fn test_scan_gallery_empty_dir_is_empty_not_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(scan_gallery(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_lightbox_clamps_at_both_ends() {
        let mk = |name: &str, order: u32| GalleryImage {
            path: PathBuf::from(name),
            file_name: name.to_string(),
            category: "Vías".to_string(),
            order,
        };
        let groups = vec![GalleryGroup {
            category: "Vías".to_string(),
            images: vec![mk("Vías 1.jpg", 1), mk("Vías 2.jpg", 2)],
        }];

        let mut lb = Lightbox::open(0, 0);
        lb.prev();
        assert_eq!(lb, Lightbox::Open { group: 0, image: 0 });
        lb.next(&groups);
        assert_eq!(lb, Lightbox::Open { group: 0, image: 1 });
        lb.next(&groups);
        assert_eq!(lb, Lightbox::Open { group: 0, image: 1 });
        assert_eq!(lb.current(&groups).unwrap().file_name, "Vías 2.jpg");
        lb.close();
        assert_eq!(lb, Lightbox::Closed);
        assert!(lb.current(&groups).is_none());
    }

    #[test]
    fn test_lightbox_reads_lengths_from_the_active_group() {
        let mk = |cat: &str, n: u32| GalleryImage {
            path: PathBuf::from(format!("{cat} {n}.jpg")),
            file_name: format!("{cat} {n}.jpg"),
            category: cat.to_string(),
            order: n,
        };
        let groups = vec![
            GalleryGroup {
                category: "Demolición".to_string(),
                images: vec![mk("Demolición", 1), mk("Demolición", 2), mk("Demolición", 3)],
            },
            GalleryGroup {
                category: "Vías".to_string(),
                images: vec![mk("Vías", 1)],
            },
        ];
        let mut lb = Lightbox::open(1, 0);
        lb.next(&groups);
        lb.next(&groups);
        // The second group has a single image, so navigation stays put.
        assert_eq!(lb, Lightbox::Open { group: 1, image: 0 });
    }
}
