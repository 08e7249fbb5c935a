use std::io;
use std::io::Write;

use rpassword::read_password;

pub fn input(prompt: &str) -> io::Result<String> {
    print!("{} ", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

/// Like [`input`], but returns `None` for an empty answer.
pub fn input_optional(prompt: &str) -> io::Result<Option<String>> {
    let value = input(prompt)?;
    Ok(if value.is_empty() { None } else { Some(value) })
}

pub fn input_password(prompt: &str) -> io::Result<String> {
    print!("{} ", prompt);
    io::stdout().flush()?;
    Ok(read_password()?.trim().to_string())
}

pub fn confirm(prompt: &str) -> io::Result<bool> {
    let answer = input(&format!("{} [y/N]", prompt))?;
    Ok(matches!(answer.to_lowercase().as_str(), "y" | "yes"))
}
