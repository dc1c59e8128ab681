#[derive(Debug, Clone)]
pub struct Sender {
    pub display_name: String,
}

#[derive(Debug, Clone)]
pub struct GroupContext {
    pub id: i64,
    pub name: String,
}

/// One inbound command, already stripped of the command prefix.
#[derive(Debug)]
pub struct Instruction {
    pub command: String,
    pub args: Vec<String>,
    pub sender: Sender,
    pub group: Option<GroupContext>,
}

impl Instruction {
    // The first non-empty token is the command, the rest are its arguments.
    // Sender and group come from the message context, never from the text.
    pub fn parse(text: &str, sender: Sender, group: Option<GroupContext>) -> Self {
        let mut tokens = text.split([' ', '\t']).filter(|token| !token.is_empty());
        let command = tokens.next().unwrap_or_default().to_string();
        let args = tokens.map(str::to_string).collect();

        Self {
            command,
            args,
            sender,
            group,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn parse(text: &str) -> Instruction {
        Instruction::parse(
            text,
            Sender {
                display_name: String::from("tester"),
            },
            None,
        )
    }

    #[test]
    fn splits_command_and_arguments() {
        let instruction = parse("bot on");
        assert_eq!(instruction.command, "bot");
        assert_eq!(instruction.args, vec!["on"]);
    }

    #[test]
    fn drops_empty_tokens_and_keeps_argument_order() {
        let instruction = parse("  bot \t on  off\t");
        assert_eq!(instruction.command, "bot");
        assert_eq!(instruction.args, vec!["on", "off"]);
    }

    #[test]
    fn whitespace_only_input_yields_an_empty_instruction() {
        for text in ["", "   ", "\t\t", " \t "] {
            let instruction = parse(text);
            assert_eq!(instruction.command, "");
            assert!(instruction.args.is_empty());
        }
    }

    #[test]
    fn only_spaces_and_tabs_separate_tokens() {
        let instruction = parse("r2d6\u{3000}now");
        assert_eq!(instruction.command, "r2d6\u{3000}now");
        assert!(instruction.args.is_empty());
    }
}
