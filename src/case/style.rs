use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output case style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStyle {
    Camel,
    Kebab,
    Dot,
    Snake,
    Pascal,
    Constant,
}

impl CaseStyle {
    pub const ALL: [CaseStyle; 6] = [
        CaseStyle::Camel,
        CaseStyle::Kebab,
        CaseStyle::Dot,
        CaseStyle::Snake,
        CaseStyle::Pascal,
        CaseStyle::Constant,
    ];

    pub fn separator(self) -> &'static str {
        match self {
            CaseStyle::Camel | CaseStyle::Pascal => "",
            CaseStyle::Kebab => "-",
            CaseStyle::Dot => ".",
            CaseStyle::Snake | CaseStyle::Constant => "_",
        }
    }

    /// Join lowercase tokens into this style.
    pub fn render(self, tokens: &[String]) -> String {
        match self {
            CaseStyle::Camel => tokens
                .iter()
                .enumerate()
                .map(|(i, token)| {
                    if i == 0 {
                        token.to_lowercase()
                    } else {
                        capitalize(token)
                    }
                })
                .collect(),
            CaseStyle::Pascal => tokens.iter().map(|token| capitalize(token)).collect(),
            CaseStyle::Constant => tokens
                .iter()
                .map(|token| token.to_uppercase())
                .collect::<Vec<_>>()
                .join(self.separator()),
            CaseStyle::Kebab | CaseStyle::Dot | CaseStyle::Snake => tokens
                .iter()
                .map(|token| token.to_lowercase())
                .collect::<Vec<_>>()
                .join(self.separator()),
        }
    }
}

/// Uppercase the first character and lowercase the rest.
///
/// An initial whose uppercase form is more than one character (`ß`) is kept
/// as is, so the word still tokenizes back to itself.
fn capitalize(token: &str) -> String {
    let lower = token.to_lowercase();
    let mut chars = lower.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut upper = first.to_uppercase();
    let mut word = String::with_capacity(lower.len());
    match (upper.next(), upper.next()) {
        (Some(single), None) => word.push(single),
        _ => word.push(first),
    }
    word.push_str(chars.as_str());
    word
}

impl FromStr for CaseStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "camel" | "camelcase" => Ok(CaseStyle::Camel),
            "kebab" | "kebab-case" => Ok(CaseStyle::Kebab),
            "dot" | "dot.case" => Ok(CaseStyle::Dot),
            "snake" | "snake_case" => Ok(CaseStyle::Snake),
            "pascal" | "pascalcase" => Ok(CaseStyle::Pascal),
            "constant" | "screaming_snake_case" => Ok(CaseStyle::Constant),
            _ => Err(format!("Unknown case style: {}", s)),
        }
    }
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseStyle::Camel => write!(f, "camel"),
            CaseStyle::Kebab => write!(f, "kebab"),
            CaseStyle::Dot => write!(f, "dot"),
            CaseStyle::Snake => write!(f, "snake"),
            CaseStyle::Pascal => write!(f, "pascal"),
            CaseStyle::Constant => write!(f, "constant"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_render_each_style() {
        let words = tokens(&["user", "profile", "2"]);
        assert_eq!(CaseStyle::Camel.render(&words), "userProfile2");
        assert_eq!(CaseStyle::Kebab.render(&words), "user-profile-2");
        assert_eq!(CaseStyle::Dot.render(&words), "user.profile.2");
        assert_eq!(CaseStyle::Snake.render(&words), "user_profile_2");
        assert_eq!(CaseStyle::Pascal.render(&words), "UserProfile2");
        assert_eq!(CaseStyle::Constant.render(&words), "USER_PROFILE_2");
    }

    #[test]
    fn test_render_empty_sequence() {
        for style in CaseStyle::ALL {
            assert_eq!(style.render(&[]), "");
        }
    }

    #[test]
    fn test_camel_lowercases_remainder() {
        let words = tokens(&["SCREEN", "NAME"]);
        assert_eq!(CaseStyle::Camel.render(&words), "screenName");
    }

    #[test]
    fn test_capitalize_non_ascii_initial() {
        assert_eq!(capitalize("éclair"), "Éclair");
        assert_eq!(capitalize("straße"), "Straße");
        assert_eq!(capitalize("ßa"), "ßa");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_parse_style_names() {
        assert_eq!("camelCase".parse::<CaseStyle>().unwrap(), CaseStyle::Camel);
        assert_eq!("kebab-case".parse::<CaseStyle>().unwrap(), CaseStyle::Kebab);
        assert_eq!("dot.case".parse::<CaseStyle>().unwrap(), CaseStyle::Dot);
        assert_eq!(
            "SCREAMING_SNAKE_CASE".parse::<CaseStyle>().unwrap(),
            CaseStyle::Constant
        );
        assert!("title".parse::<CaseStyle>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for style in CaseStyle::ALL {
            assert_eq!(style.to_string().parse::<CaseStyle>().unwrap(), style);
        }
    }
}
