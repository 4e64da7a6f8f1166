use tracing::warn;

/// Three-letter month abbreviation to two-digit month number.
const MONTHS: [(&str, &str); 12] = [
    ("jan", "01"),
    ("feb", "02"),
    ("mar", "03"),
    ("apr", "04"),
    ("may", "05"),
    ("jun", "06"),
    ("jul", "07"),
    ("aug", "08"),
    ("sep", "09"),
    ("oct", "10"),
    ("nov", "11"),
    ("dec", "12"),
];

/// Builds the `last_contact_date` value for a campaign row. The campaign's
/// observation year is fixed at 2022.
pub fn format_contact_date(day: u32, month: &str) -> String {
    format!("2022-{}-{:02}", month_number(month), day)
}

/// An unrecognized abbreviation falls back to `01` rather than failing the
/// run. See DESIGN.md on whether this should become an error.
fn month_number(abbrev: &str) -> &'static str {
    let key = abbrev.trim().to_ascii_lowercase();
    for (name, number) in MONTHS {
        if name == key {
            return number;
        }
    }
    warn!(month = %abbrev, "unrecognized month abbreviation, using 01");
    "01"
}
