//! Main menu options

use std::fmt;

/// A service offered after login
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Deposit,
    Withdraw,
    PrintBalance,
    PrintHistory,
    ChangePassword,
    Exit,
}

impl MenuChoice {
    /// Every option, in menu order
    pub const ALL: [MenuChoice; 6] = [
        Self::Deposit,
        Self::Withdraw,
        Self::PrintBalance,
        Self::PrintHistory,
        Self::ChangePassword,
        Self::Exit,
    ];

    /// The number typed to pick this option
    pub fn number(&self) -> u8 {
        match self {
            Self::Deposit => 1,
            Self::Withdraw => 2,
            Self::PrintBalance => 3,
            Self::PrintHistory => 4,
            Self::ChangePassword => 5,
            Self::Exit => 6,
        }
    }

    /// Interpret one input token
    ///
    /// Non-numeric and out-of-range tokens yield `None`: no selection.
    pub fn parse(token: &str) -> Option<Self> {
        let number: i64 = token.trim().parse().ok()?;
        Self::ALL
            .into_iter()
            .find(|choice| i64::from(choice.number()) == number)
    }

    /// The full menu text, ending just before the option prompt
    pub fn render() -> String {
        let mut menu = String::from("\nWhat service would you like?\n");
        for choice in Self::ALL {
            menu.push_str(&format!("{}. {}\n", choice.number(), choice));
        }
        menu
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Deposit => "Deposit",
            Self::Withdraw => "Withdraw",
            Self::PrintBalance => "Print Balance",
            Self::PrintHistory => "Print Activities",
            Self::ChangePassword => "Change Password",
            Self::Exit => "Exit",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Deposit));
        assert_eq!(MenuChoice::parse("4"), Some(MenuChoice::PrintHistory));
        assert_eq!(MenuChoice::parse("6"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("+2"), Some(MenuChoice::Withdraw));
    }

    #[test]
    fn test_parse_no_selection() {
        for token in ["0", "7", "-1", "abc", "1.0", "", "99999999999999999999"] {
            assert_eq!(MenuChoice::parse(token), None, "{token:?}");
        }
    }

    #[test]
    fn test_render() {
        let menu = MenuChoice::render();
        assert!(menu.contains("What service would you like?"));
        assert!(menu.contains("1. Deposit\n"));
        assert!(menu.contains("4. Print Activities\n"));
        assert!(menu.ends_with("6. Exit\n"));
    }
}
