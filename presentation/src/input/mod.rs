//! Interactive stdin collection
//!
//! Line-based collection helpers for the journal workflows. The parsing
//! cores take any `BufRead` so they can be tested without a terminal.

use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Collect bullet points until an empty line
pub fn read_bullet_points(prompt: &str) -> io::Result<Vec<String>> {
    println!();
    println!(
        "{} {}",
        prompt.bold(),
        "(enter an empty line to finish):".dimmed()
    );
    bullet_points_from(&mut io::stdin().lock())
}

/// Collect free-form lines until a line reading `END`
pub fn read_multiline(prompt: &str) -> io::Result<String> {
    println!();
    println!(
        "{} {}",
        prompt.bold(),
        "(type 'END' on its own line to finish):".dimmed()
    );
    multiline_from(&mut io::stdin().lock())
}

/// Ask for a 1-5 productivity score, re-prompting until valid
pub fn read_score() -> io::Result<u8> {
    let mut stdin = io::stdin().lock();
    loop {
        print!("\n{} ", "Productivity score (1-5):".bold());
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            // EOF: fall back to the lowest score rather than looping forever
            return Ok(1);
        }
        match parse_score(&line) {
            Some(score) => return Ok(score),
            None => println!("{}", "Invalid score. Enter a number between 1 and 5.".red()),
        }
    }
}

fn bullet_points_from(reader: &mut impl BufRead) -> io::Result<Vec<String>> {
    let mut items = Vec::new();
    loop {
        print!("- ");
        io::stdout().flush()?;

        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        let item = line.trim();
        if item.is_empty() {
            break;
        }
        items.push(item.to_string());
    }
    Ok(items)
}

fn multiline_from(reader: &mut impl BufRead) -> io::Result<String> {
    let mut lines = String::new();
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        if line.trim().eq_ignore_ascii_case("END") {
            break;
        }
        lines.push_str(&line);
    }
    Ok(lines)
}

fn parse_score(line: &str) -> Option<u8> {
    line.trim()
        .parse::<u8>()
        .ok()
        .filter(|score| (1..=5).contains(score))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bullet_points_stop_at_empty_line() {
        let mut input = "first item\nsecond item\n\nignored\n".as_bytes();
        let items = bullet_points_from(&mut input).unwrap();
        assert_eq!(items, vec!["first item", "second item"]);
    }

    #[test]
    fn test_bullet_points_stop_at_eof() {
        let mut input = "only item\n".as_bytes();
        let items = bullet_points_from(&mut input).unwrap();
        assert_eq!(items, vec!["only item"]);
    }

    #[test]
    fn test_multiline_stops_at_end_marker() {
        let mut input = "line one\nline two\nEND\nafter\n".as_bytes();
        let text = multiline_from(&mut input).unwrap();
        assert_eq!(text, "line one\nline two\n");
    }

    #[test]
    fn test_multiline_end_is_case_insensitive() {
        let mut input = "body\nend\n".as_bytes();
        assert_eq!(multiline_from(&mut input).unwrap(), "body\n");
    }

    #[test]
    fn test_parse_score_bounds() {
        assert_eq!(parse_score("3\n"), Some(3));
        assert_eq!(parse_score(" 5 "), Some(5));
        assert_eq!(parse_score("0"), None);
        assert_eq!(parse_score("6"), None);
        assert_eq!(parse_score("three"), None);
    }
}
