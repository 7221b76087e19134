use crate::domain::optional::OptionalValue;
use crate::utils::error::TourError;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrinterError {
    #[error("out of paper")]
    OutOfPaper,

    #[error("no toner")]
    NoToner,

    #[error("on fire")]
    OnFire,
}

pub const NEVER_HAS_TONER: &str = "Never Has Toner";
pub const EMPTY_TRAY: &str = "Empty Tray";
pub const ON_FIRE: &str = "On Fire";

pub fn send(job: u32, printer_name: &str) -> Result<String, PrinterError> {
    tracing::debug!("Sending job {} to printer '{}'", job, printer_name);
    match printer_name {
        NEVER_HAS_TONER => Err(PrinterError::NoToner),
        EMPTY_TRAY => Err(PrinterError::OutOfPaper),
        ON_FIRE => Err(PrinterError::OnFire),
        _ => Ok("Job sent".to_string()),
    }
}

/// `try?`：只關心是否成功
pub fn try_send(job: u32, printer_name: &str) -> OptionalValue<String> {
    OptionalValue::from_result(send(job, printer_name))
}

/// 先比對特定錯誤，再比對印表機類別，最後兜底
pub fn handle_outcome(outcome: Result<String, TourError>) -> String {
    match outcome {
        Ok(response) => response,
        Err(TourError::Printer(PrinterError::OnFire)) => {
            "I'll just put this over here, with the rest of the fire.".to_string()
        }
        Err(TourError::Printer(printer_error)) => format!("Printer error: {}.", printer_error),
        Err(other) => other.to_string(),
    }
}

pub fn handle_send(job: u32, printer_name: &str) -> String {
    handle_outcome(send(job, printer_name).map_err(TourError::from))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_to_working_printer() {
        assert_eq!(send(1040, "Bi Sheng"), Ok("Job sent".to_string()));
    }

    #[test]
    fn test_send_failure_kinds() {
        assert_eq!(send(1885, NEVER_HAS_TONER), Err(PrinterError::NoToner));
        assert_eq!(send(1, EMPTY_TRAY), Err(PrinterError::OutOfPaper));
        assert_eq!(send(1, ON_FIRE), Err(PrinterError::OnFire));
    }

    #[test]
    fn test_try_send_converts_to_optional() {
        assert_eq!(try_send(1884, "Mergenthaler"), OptionalValue::some("Job sent".to_string()));
        assert!(try_send(1885, NEVER_HAS_TONER).is_none());
    }

    #[test]
    fn test_handlers_match_most_specific_first() {
        assert_eq!(handle_send(1440, "Gutenberg"), "Job sent");
        assert_eq!(
            handle_send(1440, ON_FIRE),
            "I'll just put this over here, with the rest of the fire."
        );
        assert_eq!(handle_send(1440, NEVER_HAS_TONER), "Printer error: no toner.");
        assert_eq!(
            handle_outcome(Err(TourError::ConfigError {
                message: "no printers".to_string()
            })),
            "Configuration error: no printers"
        );
    }
}
