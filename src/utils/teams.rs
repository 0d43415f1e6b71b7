use std::collections::HashMap;

/// Board abbreviations as they appear in tables and scoreboards
const DEFAULT_TEAM_NAMES: &[(&str, &str)] = &[
    ("IND", "India"),
    ("AUS", "Australia"),
    ("ENG", "England"),
    ("PAK", "Pakistan"),
    ("SA", "South Africa"),
    ("RSA", "South Africa"),
    ("NZ", "New Zealand"),
    ("WI", "West Indies"),
    ("SL", "Sri Lanka"),
    ("BAN", "Bangladesh"),
    ("AFG", "Afghanistan"),
    ("ZIM", "Zimbabwe"),
    ("IRE", "Ireland"),
    ("SCO", "Scotland"),
    ("NAM", "Namibia"),
    ("NED", "Netherlands"),
    ("NEP", "Nepal"),
    ("USA", "USA"),
    ("UAE", "UAE"),
    ("OMAN", "Oman"),
    ("ITA", "Italy"),
    ("PNG", "Papua New Guinea"),
    ("CAN", "Canada"),
    ("HK", "Hong Kong"),
    ("KEN", "Kenya"),
    ("UGA", "Uganda"),
];

/// Maps team codes to display names. Unknown codes pass through unchanged.
#[derive(Debug, Clone)]
pub struct TeamNameResolver {
    names: HashMap<String, String>,
}

impl TeamNameResolver {
    pub fn new(names: HashMap<String, String>) -> Self {
        Self { names }
    }

    pub fn resolve<'a>(&'a self, code: &'a str) -> &'a str {
        self.names.get(code).map(String::as_str).unwrap_or(code)
    }

    /// True when `code` resolves to `full_name`
    pub fn same_team(&self, code: &str, full_name: &str) -> bool {
        self.resolve(code).eq_ignore_ascii_case(full_name)
    }
}

impl Default for TeamNameResolver {
    fn default() -> Self {
        Self::new(
            DEFAULT_TEAM_NAMES
                .iter()
                .map(|(code, name)| (code.to_string(), name.to_string()))
                .collect(),
        )
    }
}
