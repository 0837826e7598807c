use log::trace;

use crate::options::{BarrelPattern, NamedExportConfig};

/// Returns the first pattern whose `barrel` is exactly `source`.
pub fn match_barrel<'p>(source: &str, patterns: &'p [BarrelPattern]) -> Option<&'p BarrelPattern> {
    let found = patterns.iter().find(|pattern| pattern.barrel == source);
    if found.is_some() {
        trace!("Import source '{}' matches a barrel pattern", source);
    }
    found
}

/// Returns the first configured suffix `imported_name` ends with.
pub fn match_named_export_suffix<'c>(
    imported_name: &str,
    named_exports: Option<&'c NamedExportConfig>,
) -> Option<&'c str> {
    named_exports?
        .suffixes
        .iter()
        .find(|suffix| imported_name.ends_with(suffix.as_str()))
        .map(String::as_str)
}
