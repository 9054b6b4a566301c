/// View model for a decomposition: labelled rows, table markup
use crate::decomposition::Decomposition;
use crate::fragment::percent_decode;

/// One displayed row of a decomposition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRow {
    pub label: &'static str,
    /// Element id used by the field view.
    pub id: &'static str,
    /// Decoded, unescaped display text.
    pub value: String,
}

/// Labels and ids in display order: ten string fields then three flags.
pub const FIELDS: [(&str, &str); 13] = [
    ("Scheme", "scheme"),
    ("Username", "username"),
    ("Password", "password"),
    ("Hostname", "hostname"),
    ("Port", "port"),
    ("Path", "path"),
    ("Query", "query"),
    ("Anchor", "anchor"),
    ("Domain", "domain"),
    ("Public Suffix", "public-suffix"),
    ("Rulable?", "is-rulable"),
    ("Sub-Domain?", "is-subdomain"),
    ("Public Suffix?", "is-public-suffix"),
];

pub fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

/// Service values are percent-encoded.
pub fn display_value(raw: &str) -> String {
    percent_decode(raw)
}

/// Only `<` is escaped; that is enough to keep a value from opening a tag.
pub fn escape_markup(text: &str) -> String {
    text.replace('<', "&lt;")
}

pub fn rows(decomposition: &Decomposition) -> Vec<FieldRow> {
    let d = decomposition;
    let values = [
        display_value(&d.scheme),
        display_value(&d.username),
        display_value(&d.password),
        display_value(&d.hostname),
        display_value(&d.port),
        display_value(&d.path),
        display_value(&d.query),
        display_value(&d.anchor),
        display_value(&d.domain),
        display_value(&d.public_suffix),
        yes_no(d.is_rulable).to_string(),
        yes_no(d.is_subdomain).to_string(),
        yes_no(d.is_public_suffix).to_string(),
    ];

    FIELDS
        .iter()
        .zip(values)
        .map(|(&(label, id), value)| FieldRow { label, id, value })
        .collect()
}

/// Rows with no values, for the field view while nothing is shown.
pub fn blank_rows() -> Vec<FieldRow> {
    FIELDS
        .iter()
        .map(|&(label, id)| FieldRow {
            label,
            id,
            value: String::new(),
        })
        .collect()
}

/// Markup for the table view.
pub fn table_markup(rows: &[FieldRow]) -> String {
    let body: String = rows
        .iter()
        .map(|row| {
            format!(
                "<tr><td>{}</td><td><code>{}</code></td></tr>",
                row.label,
                escape_markup(&row.value)
            )
        })
        .collect();

    format!("<table class=\"centered responsive-table striped\">{}</table>", body)
}
