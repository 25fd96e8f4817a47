#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crate::command::Command;
    use crate::command::parser::parse_command;
    use crate::error::Error;

    #[test]
    fn test_menu_numbers() {
        assert_eq!(parse_command("1").unwrap(), Command::Load { path: None });
        assert_eq!(parse_command(" 2 ").unwrap(), Command::List);
        assert_eq!(parse_command("3").unwrap(), Command::Describe { key: None });
        assert_eq!(parse_command("9").unwrap(), Command::Exit);
    }

    #[test]
    fn test_words_and_arguments() {
        assert_eq!(
            parse_command("load data/courses with spaces.csv").unwrap(),
            Command::Load {
                path: Some(PathBuf::from("data/courses with spaces.csv"))
            }
        );
        assert_eq!(
            parse_command("3 csci400").unwrap(),
            Command::Describe {
                key: Some("csci400".to_string())
            }
        );
        assert_eq!(
            parse_command("SHOW CSCI100").unwrap(),
            Command::Describe {
                key: Some("CSCI100".to_string())
            }
        );
        assert_eq!(parse_command("stats").unwrap(), Command::Stats);
        assert_eq!(parse_command("Audit").unwrap(), Command::Audit);
        assert_eq!(parse_command("help").unwrap(), Command::Help);
        assert_eq!(parse_command("quit").unwrap(), Command::Exit);
    }

    #[test]
    fn test_invalid_input() {
        for input in ["", "4", "list everything", "exit now", "drop table"] {
            let err = parse_command(input).unwrap_err();
            assert!(matches!(err, Error::InvalidCommand(_)), "{input}");
        }
        assert_eq!(
            parse_command("7").unwrap_err().to_string(),
            "7 is not a valid option."
        );
    }
}
