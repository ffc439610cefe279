//! Console wording for one exploration session, per language

use crate::domain::{Command, Language, Side};

/// Produces every line the explorer prints.
#[derive(Debug, Clone, Copy, Default)]
pub struct Narrator {
    language: Language,
}

impl Narrator {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn empty_map(&self) -> String {
        match self.language {
            Language::Pt => "Mapa vazio. Não há salas para explorar.".into(),
            Language::En => "Empty map. There are no rooms to explore.".into(),
        }
    }

    pub fn banner(&self, start: &str) -> String {
        match self.language {
            Language::Pt => format!(
                "Bem-vindo(a) a Detective Quest - Exploração da Mansão!\nVocê começará por: {start}.\n"
            ),
            Language::En => format!(
                "Welcome to Detective Quest - Mansion Exploration!\nYou will start at: {start}.\n"
            ),
        }
    }

    pub fn current_room(&self, name: &str) -> String {
        match self.language {
            Language::Pt => format!("Você está em: {name}"),
            Language::En => format!("You are in: {name}"),
        }
    }

    pub fn moved_to(&self, name: &str) -> String {
        match self.language {
            Language::Pt => format!("Você foi para: {name}"),
            Language::En => format!("You went to: {name}"),
        }
    }

    fn side_label(&self, side: Side) -> &'static str {
        match (self.language, side) {
            (Language::Pt, Side::Left) => "esquerda",
            (Language::Pt, Side::Right) => "direita",
            (Language::En, Side::Left) => "left",
            (Language::En, Side::Right) => "right",
        }
    }

    fn quit_label(&self) -> &'static str {
        match self.language {
            Language::Pt => "sair",
            Language::En => "quit",
        }
    }

    fn option(&self, command: Command) -> String {
        let label = match command {
            Command::Go(side) => self.side_label(side),
            Command::Quit => self.quit_label(),
        };
        format!("({}) {}", self.language.key(command), label)
    }

    /// Menu listing only the directions that exist, then quit.
    pub fn menu(&self, has_left: bool, has_right: bool) -> String {
        let mut options = Vec::with_capacity(3);
        if has_left {
            options.push(self.option(Command::Go(Side::Left)));
        }
        if has_right {
            options.push(self.option(Command::Go(Side::Right)));
        }
        options.push(self.option(Command::Quit));

        let title = match self.language {
            Language::Pt => "Escolha o caminho",
            Language::En => "Choose a path",
        };
        format!("\n{}: {}", title, options.join(" | "))
    }

    pub fn prompt(&self) -> &'static str {
        match self.language {
            Language::Pt => "Digite sua escolha: ",
            Language::En => "Enter your choice: ",
        }
    }

    pub fn no_path(&self, side: Side, from: &str) -> String {
        match (self.language, side) {
            (Language::Pt, Side::Left) => {
                format!("Não há caminho para a esquerda a partir de {from}.")
            }
            (Language::Pt, Side::Right) => {
                format!("Não há caminho para a direita a partir de {from}.")
            }
            (Language::En, side) => format!("There is no path to the {side} from {from}."),
        }
    }

    pub fn unreadable(&self) -> String {
        match self.language {
            Language::Pt => "Entrada inválida. Tente novamente.".into(),
            Language::En => "Invalid input. Try again.".into(),
        }
    }

    pub fn invalid_option(&self) -> String {
        let options = [Command::Go(Side::Left), Command::Go(Side::Right), Command::Quit]
            .map(|c| match c {
                Command::Go(side) => format!("'{}' ({})", self.language.key(c), self.side_label(side)),
                Command::Quit => format!("'{}' ({})", self.language.key(c), self.quit_label()),
            });
        match self.language {
            Language::Pt => format!(
                "Opção inválida. Use {}, {} ou {}.",
                options[0], options[1], options[2]
            ),
            Language::En => format!(
                "Invalid option. Use {}, {} or {}.",
                options[0], options[1], options[2]
            ),
        }
    }

    pub fn player_quit(&self) -> String {
        match self.language {
            Language::Pt => "Saindo da exploração por solicitação do usuário.".into(),
            Language::En => "Leaving the exploration at your request.".into(),
        }
    }

    pub fn dead_end(&self, name: &str) -> String {
        match self.language {
            Language::Pt => format!("\nVocê chegou a um cômodo sem mais caminhos ({name})."),
            Language::En => format!("\nYou reached a room with no more paths ({name})."),
        }
    }

    pub fn log_full(&self, capacity: usize) -> String {
        match self.language {
            Language::Pt => format!(
                "Limite de {capacity} salas visitadas atingido. Encerrando a exploração."
            ),
            Language::En => format!(
                "Limit of {capacity} visited rooms reached. Ending the exploration."
            ),
        }
    }

    pub fn summary_header(&self) -> &'static str {
        match self.language {
            Language::Pt => "\n--- Resumo das salas visitadas ---",
            Language::En => "\n--- Summary of visited rooms ---",
        }
    }

    pub fn summary_footer(&self) -> &'static str {
        "----------------------------------"
    }

    pub fn farewell(&self) -> &'static str {
        match self.language {
            Language::Pt => "\nExploração finalizada. Obrigado por jogar!",
            Language::En => "\nExploration finished. Thanks for playing!",
        }
    }
}
