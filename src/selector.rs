use crate::error::SelectionError;
use crate::instance::InstanceRecord;
use std::io::{BufRead, Write};

const RULE_WIDTH: usize = 89;

pub const PROMPT: &str = "Enter the option number to start an SSM Session (or 'q' to quit): ";

/// What the operator chose at the prompt.
#[derive(Debug, PartialEq, Eq)]
pub enum Selection<'a> {
    Chosen(&'a InstanceRecord),
    Cancelled,
}

fn format_row(option: &str, id: &str, name: &str, ip: &str) -> String {
    format!("{:<8} {:<20} {:<30} {:<15}", option, id, name, ip)
}

/// Writes the numbered instance table. Options are 1-based.
pub fn render_table<W: Write>(out: &mut W, instances: &[InstanceRecord]) -> std::io::Result<()> {
    let rule = "-".repeat(RULE_WIDTH);

    writeln!(out)?;
    writeln!(out, "Available EC2 Instances:")?;
    writeln!(out, "{}", rule)?;
    writeln!(
        out,
        "{}",
        format_row("OPTION", "INSTANCE ID", "NAME", "PRIVATE IP")
    )?;
    writeln!(out, "{}", rule)?;

    for (i, instance) in instances.iter().enumerate() {
        writeln!(
            out,
            "{}",
            format_row(
                &(i + 1).to_string(),
                &instance.instance_id,
                instance.display_name(),
                instance.display_private_ip(),
            )
        )?;
    }

    writeln!(out, "{}", rule)?;
    Ok(())
}

/// Interprets one line of operator input against `instances`.
pub fn parse_selection<'a>(
    input: &str,
    instances: &'a [InstanceRecord],
) -> Result<Selection<'a>, SelectionError> {
    let trimmed = input.trim().to_lowercase();

    if trimmed == "q" {
        return Ok(Selection::Cancelled);
    }

    let value: i64 = trimmed
        .parse()
        .map_err(|_| SelectionError::NotANumber(trimmed.clone()))?;

    if value < 1 || value as u64 > instances.len() as u64 {
        return Err(SelectionError::OutOfRange {
            value,
            max: instances.len(),
        });
    }

    Ok(Selection::Chosen(&instances[(value - 1) as usize]))
}

/// Renders the table, prompts, and reads exactly one line.
pub fn prompt_for_selection<'a, R, W>(
    input: &mut R,
    out: &mut W,
    instances: &'a [InstanceRecord],
) -> Result<Selection<'a>, SelectionError>
where
    R: BufRead,
    W: Write,
{
    render_table(out, instances)?;
    write!(out, "{}", PROMPT)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(SelectionError::NoInput);
    }

    parse_selection(&line, instances)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn instances() -> Vec<InstanceRecord> {
        vec![
            InstanceRecord {
                instance_id: "i-0aaa".to_string(),
                name: Some("web".to_string()),
                private_ip: Some("10.0.0.1".to_string()),
            },
            InstanceRecord {
                instance_id: "i-0bbb".to_string(),
                name: None,
                private_ip: Some("10.0.0.2".to_string()),
            },
            InstanceRecord {
                instance_id: "i-0ccc".to_string(),
                name: Some("worker".to_string()),
                private_ip: None,
            },
        ]
    }

    #[test]
    fn test_render_table_layout() {
        let mut out = Vec::new();
        render_table(&mut out, &instances()).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "Available EC2 Instances:");
        assert_eq!(lines[2], "-".repeat(89));
        assert_eq!(
            lines[3],
            format!(
                "{:<8} {:<20} {:<30} {:<15}",
                "OPTION", "INSTANCE ID", "NAME", "PRIVATE IP"
            )
        );
        assert_eq!(
            lines[5],
            format!("{:<8} {:<20} {:<30} {:<15}", "1", "i-0aaa", "web", "10.0.0.1")
        );
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[8], "-".repeat(89));
    }

    #[test]
    fn test_render_table_uses_placeholder_for_missing_name() {
        let mut out = Vec::new();
        render_table(&mut out, &instances()).unwrap();
        let text = String::from_utf8(out).unwrap();
        let row = text.lines().find(|l| l.contains("i-0bbb")).unwrap();

        assert!(row.starts_with("2 "));
        assert_eq!(&row[30..33], "N/A");
    }

    #[test]
    fn test_every_index_maps_to_its_record() {
        let instances = instances();
        for (i, expected) in instances.iter().enumerate() {
            let selection = parse_selection(&format!("{}\n", i + 1), &instances).unwrap();
            assert_eq!(selection, Selection::Chosen(expected));
        }
    }

    #[test]
    fn test_quit_is_case_insensitive() {
        let instances = instances();
        assert_eq!(parse_selection("q\n", &instances).unwrap(), Selection::Cancelled);
        assert_eq!(parse_selection("  Q  \n", &instances).unwrap(), Selection::Cancelled);
    }

    #[test]
    fn test_out_of_range() {
        let instances = instances();
        for input in ["0", "4", "-1", "99999999999"] {
            let err = parse_selection(input, &instances).unwrap_err();
            assert!(
                matches!(err, SelectionError::OutOfRange { max: 3, .. }),
                "input {input:?} gave {err}"
            );
        }
    }

    #[test]
    fn test_not_a_number() {
        let instances = instances();
        for input in ["", "\n", "abc", "1.5", "quit", "i-0aaa"] {
            let err = parse_selection(input, &instances).unwrap_err();
            assert!(
                matches!(err, SelectionError::NotANumber(_)),
                "input {input:?} gave {err}"
            );
        }
    }

    #[test]
    fn test_prompt_reads_single_line() {
        let instances = instances();
        let mut input = Cursor::new("3\n1\n");
        let mut out = Vec::new();

        let selection = prompt_for_selection(&mut input, &mut out, &instances).unwrap();

        assert_eq!(selection, Selection::Chosen(&instances[2]));
        assert!(String::from_utf8(out).unwrap().ends_with(PROMPT));

        let mut rest = String::new();
        input.read_line(&mut rest).unwrap();
        assert_eq!(rest, "1\n");
    }

    #[test]
    fn test_prompt_without_trailing_newline() {
        let instances = instances();
        let mut input = Cursor::new("2");
        let mut out = Vec::new();

        let selection = prompt_for_selection(&mut input, &mut out, &instances).unwrap();
        assert_eq!(selection, Selection::Chosen(&instances[1]));
    }

    #[test]
    fn test_prompt_eof() {
        let instances = instances();
        let mut input = Cursor::new("");
        let mut out = Vec::new();

        let err = prompt_for_selection(&mut input, &mut out, &instances).unwrap_err();
        assert!(matches!(err, SelectionError::NoInput));
    }
}
