use color_print::cprintln;
use thiserror::Error;

/// Failures that stop the interpreter before the program starts.
/// Running a program never fails.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to open file: {0}")]
    FileOpen(String, #[source] std::io::Error),

    #[error("Failed to read file: {0}")]
    FileRead(String, #[source] std::io::Error),

    #[error("Failed to open config: {0}")]
    ConfigOpen(String, #[source] std::io::Error),

    #[error("Invalid config: {0}")]
    ConfigParse(String, #[source] serde_yaml::Error),
}

impl Error {
    pub fn print_diag(&self) {
        cprintln!("<red,bold>error</>: {}", self);
        if let Some(source) = std::error::Error::source(self) {
            cprintln!("     <blue>=</> {}", source);
        }
    }
}
