use crate::token::{Comment, Job, Token, Unrecognized, Variable};

/// Tokenize crontab text into a sequence of typed tokens.
///
/// Each non-blank line becomes exactly one token; blank lines are
/// skipped. Classification order matters and the first match wins:
/// job line, variable line, comment line, unrecognized.
///
/// This function never fails. A line the lexer does not understand
/// becomes an [`Unrecognized`] token instead of an error, so
/// arbitrary text can always be tokenized.
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut tokens = Vec::new();

    // Armed by a `##` comment, consumed by the job directly below it.
    // Any other line in between (including a blank one) disarms it.
    let mut pending_description: Option<String> = None;

    for line in input.lines() {
        let line = line.trim();
        if line.is_empty() {
            pending_description = None;
            continue;
        }

        if is_job_line(line) {
            let (schedule, command) = split_schedule_and_command(line);
            tokens.push(Token::Job(Job {
                schedule,
                command,
                description: pending_description.take(),
            }));
        } else if is_variable_line(line) {
            pending_description = None;
            tokens.push(make_variable_token(line));
        } else if line.starts_with('#') {
            pending_description = description_of(line);
            tokens.push(Token::Comment(Comment {
                value: line.to_string(),
            }));
        } else {
            pending_description = None;
            tokens.push(Token::Unrecognized(Unrecognized {
                value: line.to_string(),
            }));
        }
    }

    tokens
}

fn is_job_line(line: &str) -> bool {
    line.starts_with(|c: char| c.is_ascii_digit() || c == '*' || c == '@')
}

fn is_variable_line(line: &str) -> bool {
    line.contains('=') && line.starts_with(|c: char| c.is_ascii_alphabetic() || c == '_')
}

/// Split a job line into its schedule and command parts.
///
/// This is a naive splitter: a schedule is one field if it is an
/// `@`-shortcut, five fields otherwise. Fields are counted by
/// splitting on single spaces, so runs of spaces produce empty
/// pieces that don't count as fields but are rejoined as-is —
/// irregular spacing inside the schedule survives. Once the schedule
/// is consumed, the rest of the line is the command.
///
/// Short lines don't error: whatever fields exist become the
/// schedule, and the command may come out empty.
fn split_schedule_and_command(line: &str) -> (String, String) {
    let target_field_count = if line.starts_with('@') { 1 } else { 5 };

    let mut schedule: Vec<&str> = Vec::new();
    let mut command: Vec<&str> = Vec::new();
    let mut field_count = 0;

    for piece in line.split(' ') {
        if field_count < target_field_count {
            schedule.push(piece);
            if !piece.is_empty() {
                field_count += 1;
            }
        } else {
            command.push(piece);
        }
    }

    (
        schedule.join(" ").trim().to_string(),
        command.join(" ").trim().to_string(),
    )
}

fn make_variable_token(line: &str) -> Token {
    // Only the first '=' delimits; later ones (connection strings,
    // base64 values) belong to the value.
    let (identifier, value) = line
        .split_once('=')
        .unwrap_or((line, ""));

    Token::Variable(Variable {
        identifier: identifier.trim().to_string(),
        value: value.trim().to_string(),
    })
}

/// Derive a job description from a comment line.
///
/// Comments starting with `##` describe the job directly below them.
/// The description is the comment minus the `##` marker and leading
/// whitespace; if nothing remains there is no description.
fn description_of(line: &str) -> Option<String> {
    let description = line.strip_prefix("##")?.trim_start();
    if description.is_empty() {
        None
    } else {
        Some(description.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn blank_lines_produce_no_token() {
        assert!(tokenize("\n   \n\t\n").is_empty());
    }

    #[test]
    fn job_with_five_field_schedule() {
        let tokens = tokenize("30 20 * * * echo hi");
        assert_eq!(
            tokens,
            vec![Token::Job(Job {
                schedule: String::from("30 20 * * *"),
                command: String::from("echo hi"),
                description: None,
            })]
        );
    }

    #[test]
    fn job_with_shortcut_schedule() {
        let tokens = tokenize("@reboot /usr/bin/bash ~/startup.sh");
        assert_eq!(
            tokens,
            vec![Token::Job(Job {
                schedule: String::from("@reboot"),
                command: String::from("/usr/bin/bash ~/startup.sh"),
                description: None,
            })]
        );
    }

    #[test]
    fn schedule_keeps_irregular_internal_spacing() {
        let tokens = tokenize("30  20 * * *  echo hi");
        assert_eq!(
            tokens,
            vec![Token::Job(Job {
                schedule: String::from("30  20 * * *"),
                command: String::from("echo hi"),
                description: None,
            })]
        );
    }

    #[test]
    fn short_job_line_never_errors() {
        let tokens = tokenize("30 20 *");
        assert_eq!(
            tokens,
            vec![Token::Job(Job {
                schedule: String::from("30 20 *"),
                command: String::new(),
                description: None,
            })]
        );
    }

    #[test]
    fn description_comment_labels_next_job() {
        let tokens = tokenize("## Update.\n30 20 * * * echo hi");
        assert_eq!(
            tokens,
            vec![
                Token::Comment(Comment {
                    value: String::from("## Update."),
                }),
                Token::Job(Job {
                    schedule: String::from("30 20 * * *"),
                    command: String::from("echo hi"),
                    description: Some(String::from("Update.")),
                }),
            ]
        );
    }

    #[test]
    fn blank_line_breaks_description_adjacency() {
        let tokens = tokenize("## Update.\n\n30 20 * * * echo hi");
        assert_eq!(tokens.len(), 2);
        assert!(matches!(
            &tokens[1],
            Token::Job(Job { description: None, .. })
        ));
    }

    #[test]
    fn regular_comment_breaks_description_adjacency() {
        let tokens = tokenize("## Update.\n# note\n30 20 * * * echo hi");
        assert!(matches!(
            &tokens[2],
            Token::Job(Job { description: None, .. })
        ));
    }

    #[test]
    fn single_hash_comment_is_not_a_description() {
        let tokens = tokenize("# Update.\n30 20 * * * echo hi");
        assert!(matches!(
            &tokens[1],
            Token::Job(Job { description: None, .. })
        ));
    }

    #[test]
    fn empty_description_comment_gives_no_description() {
        let tokens = tokenize("##\n30 20 * * * echo hi");
        assert!(matches!(
            &tokens[1],
            Token::Job(Job { description: None, .. })
        ));
    }

    #[test]
    fn comment_kept_verbatim() {
        let tokens = tokenize("# plain comment");
        assert_eq!(
            tokens,
            vec![Token::Comment(Comment {
                value: String::from("# plain comment"),
            })]
        );
    }

    #[test]
    fn variable_split_on_first_equals_only() {
        let tokens = tokenize("FOO=a=b");
        assert_eq!(
            tokens,
            vec![Token::Variable(Variable {
                identifier: String::from("FOO"),
                value: String::from("a=b"),
            })]
        );
    }

    #[test]
    fn variable_sides_are_trimmed() {
        let tokens = tokenize("FOO = bar baz");
        assert_eq!(
            tokens,
            vec![Token::Variable(Variable {
                identifier: String::from("FOO"),
                value: String::from("bar baz"),
            })]
        );
    }

    #[test]
    fn underscore_starts_a_variable() {
        let tokens = tokenize("_FOO=bar");
        assert!(matches!(&tokens[0], Token::Variable(_)));
    }

    #[test]
    fn word_without_equals_is_unrecognized() {
        let tokens = tokenize("gibberish line");
        assert_eq!(
            tokens,
            vec![Token::Unrecognized(Unrecognized {
                value: String::from("gibberish line"),
            })]
        );
    }

    #[test]
    fn lines_are_trimmed_before_classification() {
        let tokens = tokenize("   @daily echo hi   ");
        assert!(matches!(&tokens[0], Token::Job(_)));
    }

    #[test]
    fn crlf_line_endings() {
        let tokens = tokenize("FOO=bar\r\n@daily echo hi\r\n");
        assert_eq!(tokens.len(), 2);
        assert!(matches!(&tokens[0], Token::Variable(_)));
        assert!(matches!(&tokens[1], Token::Job(_)));
    }
}
