//! Static mapping from provider condition codes to the widget's icons.

/// Icon shown next to the temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConditionIcon {
    Sun,
    Cloud,
    Drizzle,
    Rain,
    Snow,
}

/// Condition code to icon table. Codes not listed here fall back to
/// [`ConditionIcon::Cloud`].
///
/// The zero-padded `010*` / `013*` entries are kept alongside the codes the
/// provider actually sends (`10*` / `13*`).
pub const ICON_TABLE: &[(&str, ConditionIcon)] = &[
    ("01d", ConditionIcon::Sun),
    ("01n", ConditionIcon::Sun),
    ("02d", ConditionIcon::Cloud),
    ("02n", ConditionIcon::Cloud),
    ("03d", ConditionIcon::Drizzle),
    ("03n", ConditionIcon::Drizzle),
    ("04d", ConditionIcon::Drizzle),
    ("04n", ConditionIcon::Drizzle),
    ("09d", ConditionIcon::Rain),
    ("09n", ConditionIcon::Rain),
    ("010d", ConditionIcon::Rain),
    ("010n", ConditionIcon::Rain),
    ("10d", ConditionIcon::Rain),
    ("10n", ConditionIcon::Rain),
    ("013d", ConditionIcon::Snow),
    ("013n", ConditionIcon::Snow),
    ("13d", ConditionIcon::Snow),
    ("13n", ConditionIcon::Snow),
];

/// Look up `code` in [`ICON_TABLE`]. Matching is exact and case-sensitive.
pub fn icon_for_code(code: &str) -> ConditionIcon {
    ICON_TABLE
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, icon)| *icon)
        .unwrap_or(ConditionIcon::Cloud)
}

impl ConditionIcon {
    pub fn label(&self) -> &'static str {
        match self {
            ConditionIcon::Sun => "Sun",
            ConditionIcon::Cloud => "Cloud",
            ConditionIcon::Drizzle => "Drizzle",
            ConditionIcon::Rain => "Rain",
            ConditionIcon::Snow => "Snow",
        }
    }

    /// Small text-art glyph, five lines tall, every line the same width.
    pub fn art(&self) -> &'static [&'static str] {
        match self {
            ConditionIcon::Sun => &[
                r"    \   /    ",
                r"     .-.     ",
                r"  ― (   ) ―  ",
                r"     `-’     ",
                r"    /   \    ",
            ],
            ConditionIcon::Cloud => &[
                r"             ",
                r"     .--.    ",
                r"  .-(    ).  ",
                r" (___.__)__) ",
                r"             ",
            ],
            ConditionIcon::Drizzle => &[
                r"     .-.     ",
                r"    (   ).   ",
                r"   (___(__)  ",
                r"    ‘ ‘ ‘ ‘  ",
                r"   ‘ ‘ ‘ ‘   ",
            ],
            ConditionIcon::Rain => &[
                r"     .-.     ",
                r"    (   ).   ",
                r"   (___(__)  ",
                r"  ‚‘‚‘‚‘‚‘   ",
                r"  ‚’‚’‚’‚’   ",
            ],
            ConditionIcon::Snow => &[
                r"     .-.     ",
                r"    (   ).   ",
                r"   (___(__)  ",
                r"    *  *  *  ",
                r"   *  *  *   ",
            ],
        }
    }
}

impl std::fmt::Display for ConditionIcon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_sky_maps_to_sun() {
        assert_eq!(icon_for_code("01d"), ConditionIcon::Sun);
        assert_eq!(icon_for_code("01n"), ConditionIcon::Sun);
    }

    #[test]
    fn every_table_entry_is_returned_exactly() {
        for (code, icon) in ICON_TABLE {
            assert_eq!(icon_for_code(code), *icon, "code {code}");
        }
    }

    #[test]
    fn unmapped_codes_fall_back_to_cloud() {
        assert_eq!(icon_for_code("11d"), ConditionIcon::Cloud);
        assert_eq!(icon_for_code("50n"), ConditionIcon::Cloud);
        assert_eq!(icon_for_code(""), ConditionIcon::Cloud);
        assert_eq!(icon_for_code("01D"), ConditionIcon::Cloud);
    }

    #[test]
    fn provider_rain_and_snow_codes_are_mapped() {
        assert_eq!(icon_for_code("10d"), ConditionIcon::Rain);
        assert_eq!(icon_for_code("13n"), ConditionIcon::Snow);
    }

    #[test]
    fn art_lines_share_a_width() {
        for icon in [
            ConditionIcon::Sun,
            ConditionIcon::Cloud,
            ConditionIcon::Drizzle,
            ConditionIcon::Rain,
            ConditionIcon::Snow,
        ] {
            let art = icon.art();
            assert_eq!(art.len(), 5);
            let width = art[0].chars().count();
            assert!(art.iter().all(|line| line.chars().count() == width), "{icon}");
        }
    }
}
