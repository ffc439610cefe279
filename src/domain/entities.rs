//! Core value types shared by the tree and the exploration loop

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::Side;

/// Language used for narration, menu keys and built-in room names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Portuguese: `e` esquerda, `d` direita, `s` sair
    #[default]
    Pt,
    /// English: `l` left, `r` right, `q` quit
    En,
}

/// A recognised player choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Go(Side),
    Quit,
}

impl Language {
    /// Menu key for each choice, lowercase.
    pub fn key(&self, command: Command) -> char {
        match (self, command) {
            (Language::Pt, Command::Go(Side::Left)) => 'e',
            (Language::Pt, Command::Go(Side::Right)) => 'd',
            (Language::Pt, Command::Quit) => 's',
            (Language::En, Command::Go(Side::Left)) => 'l',
            (Language::En, Command::Go(Side::Right)) => 'r',
            (Language::En, Command::Quit) => 'q',
        }
    }

    /// Maps one key press to a command, ignoring case.
    pub fn parse_key(&self, key: char) -> Option<Command> {
        let key = key.to_ascii_lowercase();
        [Command::Go(Side::Left), Command::Go(Side::Right), Command::Quit]
            .into_iter()
            .find(|&command| self.key(command) == key)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::Pt => write!(f, "pt"),
            Language::En => write!(f, "en"),
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pt" | "pt-br" | "portuguese" => Ok(Language::Pt),
            "en" | "english" => Ok(Language::En),
            other => Err(format!("unsupported language: {other} (expected pt or en)")),
        }
    }
}
