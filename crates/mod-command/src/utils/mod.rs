use crate::errors::CliError;
use inquire::Confirm;

pub mod config;

#[macro_export]
macro_rules! println_pad {
    ($($arg:tt)*) => {{
        let __s = format!($($arg)*);
        for __line in __s.lines() {
            println!("    {}", __line);
        }
    }};
}

/// Ask a yes/no question, defaulting to "no". `assume_yes` skips the prompt.
pub fn confirm(message: &str, assume_yes: bool) -> Result<bool, CliError> {
    if assume_yes {
        return Ok(true);
    }

    let answer = Confirm::new(message).with_default(false).prompt()?;
    Ok(answer)
}
