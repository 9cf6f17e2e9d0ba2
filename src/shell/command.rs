/// A single line typed at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dir,
    Cd(String),
    SortSize,
    SortName,
    Mkdir(String),
    Mkfile(String),
    Exit,
    Invalid(String),
}

impl Command {
    /// Commands with an argument take everything after the first space,
    /// so names may contain spaces. An empty argument makes the line invalid.
    pub fn parse(line: &str) -> Self {
        let line = line.trim_end_matches(['\r', '\n']);

        match line {
            "dir" => return Command::Dir,
            "sortsize" => return Command::SortSize,
            "sortname" => return Command::SortName,
            "exit" => return Command::Exit,
            _ => {}
        }

        let Some((keyword, argument)) = line.split_once(' ') else {
            return Command::Invalid(line.to_string());
        };
        if argument.is_empty() {
            return Command::Invalid(line.to_string());
        }

        match keyword {
            "cd" => Command::Cd(argument.to_string()),
            "mkdir" => Command::Mkdir(argument.to_string()),
            "mkfile" => Command::Mkfile(argument.to_string()),
            _ => Command::Invalid(line.to_string()),
        }
    }
}
