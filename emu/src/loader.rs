use arch::operand::parse_with_prefix;
use std::fs::File;
use std::io::Read;

use crate::{error::Error, label::Labels, vars::Vars};

/// Invalid UTF-8 is replaced, not rejected.
pub fn read_lines(path: &str) -> Result<Vec<String>, Error> {
    let mut file = File::open(path).map_err(|e| Error::FileOpen(path.to_string(), e))?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)
        .map_err(|e| Error::FileRead(path.to_string(), e))?;
    Ok(String::from_utf8_lossy(&bytes)
        .lines()
        .map(String::from)
        .collect())
}

/// Scans the program once for variables and labels. Never fails: anything
/// that does not look like a declaration or a label is ignored, and a
/// declaration without a readable value declares a zero.
pub fn load<S: AsRef<str>>(lines: &[S]) -> (Vars, Labels) {
    (collect_vars(lines), collect_labels(lines))
}

/// `name : .word value` lines from the first `.data` onwards.
pub fn collect_vars<S: AsRef<str>>(lines: &[S]) -> Vars {
    let mut vars = Vars::new();

    let Some(start) = lines.iter().position(|l| l.as_ref().contains(".data")) else {
        return vars;
    };

    for line in &lines[start..] {
        let line = line.as_ref();
        if !line.contains(".word") {
            continue;
        }
        match parse_word(line) {
            Some((name, value)) => {
                vars.set(name, value);
            }
            None => {
                if let Some((name, _)) = line.split_once(':') {
                    let name = name.trim();
                    if !name.is_empty() {
                        vars.slot(name);
                    }
                }
            }
        }
    }
    vars
}

/// Every line whose first word ends in `:`, wherever it is.
pub fn collect_labels<S: AsRef<str>>(lines: &[S]) -> Labels {
    let mut labels = Labels::new();
    for (idx, line) in lines.iter().enumerate() {
        if let Some(name) = label_name(line.as_ref()) {
            labels.insert(name.to_string(), idx);
        }
    }
    labels
}

fn parse_word(line: &str) -> Option<(&str, i32)> {
    let code = match line.split_once(';') {
        Some((code, _)) => code,
        None => line,
    };
    let (head, tail) = code.split_once(':')?;
    let name = head.split_whitespace().last()?;
    let tail = tail.trim_start().strip_prefix(".word")?;
    if !tail.starts_with(char::is_whitespace) {
        return None;
    }
    let token = tail.split_whitespace().next()?;
    let value = parse_with_prefix(token)
        .ok()
        .or_else(|| leading_decimal(token))?;
    Some((name, value))
}

// `7abc` reads as 7, `-3;` as -3
fn leading_decimal(token: &str) -> Option<i32> {
    let sign = usize::from(token.starts_with(['-', '+']));
    let digits = token[sign..].bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    parse_with_prefix(&token[..sign + digits]).ok()
}

fn label_name(line: &str) -> Option<&str> {
    let (head, _) = line.trim_start().split_once(':')?;
    if head.is_empty() || head.contains(char::is_whitespace) {
        None
    } else {
        Some(head)
    }
}
