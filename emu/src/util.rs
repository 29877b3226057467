use arch::Line;
use color_print::cformat;

use crate::vars::Vars;

pub fn print_listing<S: AsRef<str>>(path: &str, lines: &[S]) {
    let rule = format!("+------+{}", "-".repeat(52));
    println!("{}", rule);
    println!("| {:<58}", path);
    println!("{}", rule);
    for (idx, raw) in lines.iter().enumerate() {
        let raw = raw.as_ref();
        let comment = match raw.split_once(';') {
            Some((_, comment)) => cformat!(" <dim>;{}</>", comment),
            None => "".to_string(),
        };
        let body = match Line::parse(raw) {
            Line::Directive => cformat!("<magenta>{}</>", raw.trim()),
            Line::Comment => "".to_string(),
            line => line.cformat(),
        };
        println!("| {:>4} | {}{}", idx + 1, body, comment);
    }
    println!("{}", rule);
}

/// The final variable table, one `name = value` per line in slot order.
pub fn report(vars: &Vars) -> String {
    format!("\n--- VM variable values ---\n{}", vars)
}
