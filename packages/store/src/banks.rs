//! # Bank lookup tables — RIB codes and presentation themes
//!
//! Two immutable, compile-time tables keyed on the partner banks:
//!
//! | Bank | RIB code | Bank id |
//! |------|----------|---------|
//! | CIH Bank | `230` | 17 |
//! | Attijariwafa Bank | `007` | 18 |
//! | Banque Populaire | `145` | 19 |
//!
//! [`bank_id_from_rib`] resolves a bank id from the leading 3-digit bank code
//! of a RIB. The RIB is considered more trustworthy than whatever `bank_id`
//! the profile endpoint stored, so callers apply it first and only fall back
//! to the stored value for unrecognized codes.
//!
//! [`BankTheme`] is purely presentational (Tailwind color tokens and a logo
//! path); [`theme_for_bank`] never fails and hands out [`DEFAULT_THEME`] for
//! unknown or absent bank ids.

/// Presentation theme for a partner bank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankTheme {
    pub id: &'static str,
    pub name: &'static str,
    pub bank_id: i32,
    pub rib_code: &'static str,
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub text: &'static str,
    pub hex: &'static str,
    pub logo: &'static str,
    pub gradient: &'static str,
}

pub const CIH_THEME: BankTheme = BankTheme {
    id: "cih",
    name: "CIH Bank",
    bank_id: 17,
    rib_code: "230",
    primary: "bg-cyan-600",
    secondary: "bg-cyan-800",
    accent: "bg-cyan-500",
    text: "text-cyan-700",
    hex: "#06B6D4",
    logo: "/logos/cih.png",
    gradient: "from-cyan-500 to-cyan-700",
};

pub const ATTIJARIWAFA_THEME: BankTheme = BankTheme {
    id: "attijariwafa",
    name: "Attijariwafa Bank",
    bank_id: 18,
    rib_code: "007",
    primary: "bg-amber-600",
    secondary: "bg-amber-800",
    accent: "bg-amber-500",
    text: "text-amber-700",
    hex: "#d97706",
    logo: "/logos/tijari.png",
    gradient: "from-amber-500 to-amber-700",
};

pub const BCP_THEME: BankTheme = BankTheme {
    id: "bcp",
    name: "Banque Populaire",
    bank_id: 19,
    rib_code: "145",
    primary: "bg-orange-300",
    secondary: "bg-orange-400",
    accent: "bg-orange-500",
    text: "text-orange-700",
    hex: "#d27722",
    logo: "/logos/bcp.png",
    gradient: "from-orange-300 to-orange-500",
};

/// Fallback theme when no bank affiliation is known.
pub const DEFAULT_THEME: BankTheme = BankTheme {
    id: "default",
    name: "FraudDetect",
    bank_id: 0,
    rib_code: "000",
    primary: "bg-blue-600",
    secondary: "bg-blue-700",
    accent: "bg-blue-500",
    text: "text-blue-600",
    hex: "#2563eb",
    logo: "/logos/default.png",
    gradient: "from-blue-500 to-blue-700",
};

/// Resolve a bank id from the leading 3-digit bank code of a RIB.
///
/// Returns `None` for RIBs shorter than 3 characters or with a code that is
/// not one of the partner banks.
pub fn bank_id_from_rib(rib: &str) -> Option<i32> {
    let code = rib.get(..3)?;
    match code {
        "230" => Some(17),
        "007" => Some(18),
        "145" => Some(19),
        _ => None,
    }
}

/// Theme for a bank id; unknown or absent ids get [`DEFAULT_THEME`].
pub fn theme_for_bank(bank_id: Option<i32>) -> &'static BankTheme {
    match bank_id {
        Some(17) => &CIH_THEME,
        Some(18) => &ATTIJARIWAFA_THEME,
        Some(19) => &BCP_THEME,
        _ => &DEFAULT_THEME,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_rib_codes_resolve() {
        assert_eq!(bank_id_from_rib("2301234567890123456789"), Some(17));
        assert_eq!(bank_id_from_rib("0071234567890123456789"), Some(18));
        assert_eq!(bank_id_from_rib("1451234567890123456789"), Some(19));
    }

    #[test]
    fn unknown_or_short_ribs_do_not_resolve() {
        assert_eq!(bank_id_from_rib("9991234567890123456789"), None);
        assert_eq!(bank_id_from_rib("23"), None);
        assert_eq!(bank_id_from_rib(""), None);
    }

    #[test]
    fn themes_match_their_rib_codes() {
        for theme in [&CIH_THEME, &ATTIJARIWAFA_THEME, &BCP_THEME] {
            assert_eq!(bank_id_from_rib(theme.rib_code), Some(theme.bank_id));
            assert_eq!(theme_for_bank(Some(theme.bank_id)), theme);
        }
    }

    #[test]
    fn unknown_bank_gets_default_theme() {
        assert_eq!(theme_for_bank(None), &DEFAULT_THEME);
        assert_eq!(theme_for_bank(Some(42)), &DEFAULT_THEME);
    }
}
