//! Terminal rendering of catalog data

use crate::application::FolderTree;
use crate::application::dto::FailedFile;
use crate::domain::entities::CatalogEntry;
use console::style;

const LABEL_WIDTH: usize = 18;

pub fn print_tree(tree: &FolderTree) {
    for (folder, names) in tree {
        let folder = if folder.is_empty() { "." } else { folder };
        println!("{}", style(folder).cyan().bold());
        for name in names {
            println!("  {}", name);
        }
    }
}

pub fn print_entry(path: &str, entry: &CatalogEntry) {
    println!("{}", style(path).cyan().bold());
    for (field, value) in entry.fields() {
        println!("  {:<width$} {}", format!("{}:", field.label()), value, width = LABEL_WIDTH);
    }
}

pub fn print_failures(failures: &[FailedFile]) {
    for failure in failures {
        println!(
            "[!] {} {}",
            style(failure.path.display()).yellow(),
            failure.reason
        );
    }
}
