//! Report formatting and printing utilities.
//!
//! Separate from the audit logic so output can be captured in tests
//! through the writer seam.

use std::{
    collections::BTreeSet,
    io::{self, Write},
};

use colored::Colorize;

use crate::audit::NamespaceAudit;

/// Maximum number of differing keys to display per section.
const MAX_KEYS_DISPLAY: usize = 20;

/// Human-readable language name for a locale code.
///
/// Falls back to the code itself for locales not in the table.
fn language_name(locale: &str) -> &str {
    match locale {
        "ar" => "Arabic",
        "de" => "German",
        "en" => "English",
        "es" => "Spanish",
        "fr" => "French",
        "he" => "Hebrew",
        "ru" => "Russian",
        other => other,
    }
}

/// Print the full audit report to stdout.
pub fn print_report(audits: &[NamespaceAudit], verbose: bool) {
    report_to(audits, verbose, &mut io::stdout().lock());
}

/// Print the full audit report to a custom writer.
///
/// Sections appear in fixed order: key counts, missing keys per
/// namespace, extra keys per namespace.
pub fn report_to<W: Write>(audits: &[NamespaceAudit], verbose: bool, writer: &mut W) {
    print_counts(audits, writer);

    for audit in audits {
        let header = format!(
            "=== Missing in {} {}.json ===",
            language_name(&audit.target.locale),
            audit.namespace()
        );
        let _ = writeln!(writer, "\n{}", header.bold());
        print_key_section(&audit.missing, "Total missing", verbose, writer);
    }

    for audit in audits {
        let header = format!(
            "=== Extra keys in {} {}.json (not in {}) ===",
            language_name(&audit.target.locale),
            audit.namespace(),
            language_name(&audit.reference.locale)
        );
        let _ = writeln!(writer, "\n{}", header.bold());
        print_key_section(&audit.extra, "Total extra", verbose, writer);
    }
}

fn print_counts<W: Write>(audits: &[NamespaceAudit], writer: &mut W) {
    let _ = writeln!(writer, "{}", "=== Key Counts ===".bold());
    for audit in audits {
        for bundle in [&audit.reference, &audit.target] {
            let _ = writeln!(
                writer,
                "{} {}.json: {} keys",
                bundle.locale.to_uppercase(),
                bundle.namespace,
                bundle.leaf_count
            );
        }
    }
}

/// Print one differing-key section: the total, then the keys in sorted
/// order, truncated at `MAX_KEYS_DISPLAY` with an "... and N more"
/// footer unless `verbose` lifts the cap.
fn print_key_section<W: Write>(
    keys: &BTreeSet<String>,
    label: &str,
    verbose: bool,
    writer: &mut W,
) {
    let _ = writeln!(writer, "{}: {}", label, keys.len());
    if keys.is_empty() {
        return;
    }

    let display_count = if verbose {
        keys.len()
    } else {
        keys.len().min(MAX_KEYS_DISPLAY)
    };
    for key in keys.iter().take(display_count) {
        let _ = writeln!(writer, "  - {}", key);
    }

    let remaining = keys.len() - display_count;
    if remaining > 0 {
        let _ = writeln!(writer, "  ... and {} more", remaining);
    }
}
