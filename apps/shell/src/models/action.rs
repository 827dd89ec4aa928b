use std::fmt;
use std::str::FromStr;

/// One user interaction with the selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SelectType(String),
    Toggle(String),
    Set { option: String, value: String },
}

impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (verb, arg) = s
            .split_once('=')
            .ok_or_else(|| format!("expected <verb>=<argument>, got '{s}'"))?;
        if arg.is_empty() {
            return Err(format!("'{verb}' needs an argument"));
        }

        match verb {
            "type" => Ok(Self::SelectType(arg.to_owned())),
            "toggle" => Ok(Self::Toggle(arg.to_owned())),
            "set" => {
                let (option, value) = arg
                    .split_once(':')
                    .ok_or_else(|| format!("expected set=<option>:<value>, got '{s}'"))?;
                Ok(Self::Set { option: option.to_owned(), value: value.to_owned() })
            },
            other => Err(format!("unknown action '{other}' (use type, toggle or set)")),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SelectType(id) => write!(f, "type={id}"),
            Self::Toggle(option) => write!(f, "toggle={option}"),
            Self::Set { option, value } => write!(f, "set={option}:{value}"),
        }
    }
}
