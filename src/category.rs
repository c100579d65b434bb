//! Extension-based file classification.
//! Maps a file name to one of a fixed set of categories; the category label doubles
//! as the name of the destination subfolder.
//!
//! Notes:
//! - The table is scanned in declaration order, so an extension listed under two
//!   categories resolves to the first one (`.xlsx` -> Documents).
//! - Matching is case-insensitive; only the last extension counts (`a.tar.gz` -> `.gz`).

use std::fmt;

/// Destination category for a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Images,
    Pdfs,
    Documents,
    Spreadsheets,
    Archives,
    /// Fallback when no other category claims the extension.
    Others,
}

/// Ordered lookup table. `Others` is absent: it owns no extensions.
const TABLE: &[(Category, &[&str])] = &[
    (Category::Images, &[".jpg", ".jpeg", ".png", ".gif", ".bmp"]),
    (Category::Pdfs, &[".pdf"]),
    (
        Category::Documents,
        &[".docx", ".txt", ".pptx", ".xlsx", ".doc", ".odt"],
    ),
    (Category::Spreadsheets, &[".xlsx", ".xls", ".csv"]),
    (Category::Archives, &[".zip", ".rar", ".tar", ".gz"]),
];

impl Category {
    /// All categories in table order, fallback last.
    pub const ALL: [Category; 6] = [
        Category::Images,
        Category::Pdfs,
        Category::Documents,
        Category::Spreadsheets,
        Category::Archives,
        Category::Others,
    ];

    /// Folder name for this category.
    pub fn label(self) -> &'static str {
        match self {
            Category::Images => "Images",
            Category::Pdfs => "PDFs",
            Category::Documents => "Documents",
            Category::Spreadsheets => "Spreadsheets",
            Category::Archives => "Archives",
            Category::Others => "Others",
        }
    }

    /// Lowercase extensions (dot included) owned by this category.
    pub fn extensions(self) -> &'static [&'static str] {
        TABLE
            .iter()
            .find(|(cat, _)| *cat == self)
            .map(|(_, exts)| *exts)
            .unwrap_or(&[])
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Extension of `name` including the dot, or "" when there is none.
/// Leading dots are part of the stem, so `.bashrc` has no extension.
fn extension_of(name: &str) -> &str {
    let stem_start = name.len() - name.trim_start_matches('.').len();
    match name[stem_start..].rfind('.') {
        Some(i) => &name[stem_start + i..],
        None => "",
    }
}

/// Classify a file name. Pure and total: every input maps to some category.
pub fn classify(name: &str) -> Category {
    let ext = extension_of(name).to_lowercase();
    TABLE
        .iter()
        .find(|(_, exts)| exts.contains(&ext.as_str()))
        .map(|(cat, _)| *cat)
        .unwrap_or(Category::Others)
}
