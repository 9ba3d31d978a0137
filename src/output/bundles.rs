//! Bundle output formatter

use clap::ValueEnum;
use serde::Serialize;

use super::common::{new_table, print_document, print_table};
use crate::cli::DocumentFormat;
use crate::qbee::bundles::{Bundle, BundleEntry, BundleKind};
use crate::qbee::Target;

/// Bundle document with where it came from
#[derive(Serialize)]
struct BundleDocument<'a, B> {
    target: String,
    formtype: &'static str,
    #[serde(flatten)]
    entry: &'a BundleEntry<B>,
}

/// Output a configured bundle
pub fn output_bundle_entry<B: Bundle>(target: &Target, entry: &BundleEntry<B>, format: &DocumentFormat) {
    let document = BundleDocument {
        target: target.to_string(),
        formtype: B::FORM_TYPE,
        entry,
    };
    print_document(&document, format);
}

/// Output the list of supported bundle kinds
pub fn output_bundle_kinds() {
    let mut table = new_table(vec!["Kind", "Form Type"]);

    for kind in BundleKind::all() {
        let name = kind
            .to_possible_value()
            .map(|v| v.get_name().to_string())
            .unwrap_or_default();
        table.add_row(vec![name, kind.form_type().to_string()]);
    }

    print_table(&table, BundleKind::all().len(), "kind");
}
