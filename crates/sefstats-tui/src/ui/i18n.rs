//! Interface label localization. Labels are keyed by their English text,
//! the way the site's own interface strings work; anything missing from
//! the table falls back to English.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterfaceLang {
    #[default]
    English,
    Hebrew,
}

const HEBREW_LABELS: [(&str, &str); 16] = [
    ("Year to Date", "מתחילת השנה"),
    ("All Time", "כל הזמן"),
    ("Your Overall Activity", "הפעילות הכללית שלך"),
    ("Texts Read", "טקסטים שנקראו"),
    ("Sheets Read", "דפי מקורות שנקראו"),
    ("Sheets Created", "דפי מקורות שנוצרו"),
    ("Your Reading by Category", "הקריאה שלך לפי קטגוריה"),
    ("Your Reading", "הקריאה שלך"),
    ("Average Sefaria User", "משתמש ספריא ממוצע"),
    ("Your Top Categories", "הקטגוריות המובילות שלך"),
    ("Your Favorite Texts", "הטקסטים האהובים עליך"),
    ("Your Favorite Sheets", "דפי המקורות האהובים עליך"),
    ("Your Most Popular Sheets", "דפי המקורות הפופולריים שלך"),
    ("Views", "צפיות"),
    ("User ID", "מספר משתמש"),
    ("No reading data", "אין נתוני קריאה"),
];

/// Resolve a label for the active language.
pub fn tr(lang: InterfaceLang, label: &str) -> &str {
    match lang {
        InterfaceLang::English => label,
        InterfaceLang::Hebrew => HEBREW_LABELS
            .iter()
            .find(|(en, _)| *en == label)
            .map(|(_, he)| *he)
            .unwrap_or(label),
    }
}
