use colored::Colorize;

pub struct Theme {
    pub title: fn(&str) -> String,
    pub description: fn(&str) -> String,
    pub link: fn(&str) -> String,
    pub line: fn(&str) -> String,
    pub idx: fn(&str) -> String,
    pub tag: fn(&str) -> String,
    pub info: fn(&str) -> String,
    pub warning: fn(&str) -> String,
    pub error: fn(&str) -> String,
}

impl Theme {
    pub fn from_name(name: &str) -> Self {
        match name {
            "default" | "" => Self::default_theme(),
            "sunset" => Self::sunset(),
            "plain" => Self::plain(),
            _ => {
                eprintln!("{}", format!("✘ Unknown theme: {}", name).red());
                Self::default_theme()
            }
        }
    }

    fn default_theme() -> Self {
        Self {
            title: |s| s.bright_magenta().bold().underline().to_string(),
            description: |s| s.white().to_string(),
            link: |s| s.bright_black().italic().to_string(),
            line: |s| s.bright_black().dimmed().to_string(),
            idx: |s| s.bright_white().to_string(),
            tag: |s| s.cyan().to_string(),
            info: |s| s.cyan().to_string(),
            warning: |s| s.yellow().to_string(),
            error: |s| s.red().bold().to_string(),
        }
    }

    fn sunset() -> Self {
        Self {
            title: |s| s.truecolor(0xE8, 0xAC, 0x20).bold().to_string(),
            description: |s| s.bright_white().to_string(),
            link: |s| s.truecolor(0xE8, 0xAC, 0x20).dimmed().italic().to_string(),
            line: |s| s.bright_black().dimmed().to_string(),
            idx: |s| s.yellow().to_string(),
            tag: |s| s.green().italic().to_string(),
            info: |s| s.bright_cyan().to_string(),
            warning: |s| s.bright_yellow().to_string(),
            error: |s| s.bright_red().bold().to_string(),
        }
    }

    fn plain() -> Self {
        Self {
            title: |s| s.to_string(),
            description: |s| s.to_string(),
            link: |s| s.to_string(),
            line: |s| s.to_string(),
            idx: |s| s.to_string(),
            tag: |s| s.to_string(),
            info: |s| s.to_string(),
            warning: |s| s.to_string(),
            error: |s| s.to_string(),
        }
    }
}
