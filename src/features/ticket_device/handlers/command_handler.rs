use crate::core::error::{AppError, Result};
use crate::features::ticket_device::dtos::CommandOutcomeDto;
use crate::features::ticket_device::services::TicketDeviceService;
use crate::shared::constants::HELP_TEXT;
use crate::shared::types::CommandResponse;

/// A parsed console command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceCommand {
    Deposit(i64),
    Issue,
    Refund,
    Status,
    Help,
    Quit,
}

/// Parse one input line. Returns `Ok(None)` for blank lines.
pub fn parse_command(line: &str) -> Result<Option<DeviceCommand>> {
    let mut parts = line.split_whitespace();
    let Some(verb) = parts.next() else {
        return Ok(None);
    };
    let arg = parts.next();

    if parts.next().is_some() {
        return Err(AppError::BadRequest(format!(
            "too many arguments: {}",
            line.trim()
        )));
    }

    let command = match (verb.to_ascii_lowercase().as_str(), arg) {
        ("deposit", Some(raw)) => {
            let amount = raw
                .parse::<i64>()
                .map_err(|e| AppError::BadRequest(format!("Invalid amount '{}': {}", raw, e)))?;
            DeviceCommand::Deposit(amount)
        }
        ("deposit", None) => {
            return Err(AppError::BadRequest(
                "deposit requires an amount".to_string(),
            ))
        }
        ("issue", None) => DeviceCommand::Issue,
        ("refund", None) => DeviceCommand::Refund,
        ("status", None) => DeviceCommand::Status,
        ("help", None) => DeviceCommand::Help,
        ("quit" | "exit", None) => DeviceCommand::Quit,
        (name @ ("issue" | "refund" | "status" | "help" | "quit" | "exit"), Some(_)) => {
            return Err(AppError::BadRequest(format!("{} takes no arguments", name)))
        }
        (other, _) => {
            return Err(AppError::BadRequest(format!(
                "Unknown command '{}'. {}",
                other, HELP_TEXT
            )))
        }
    };

    Ok(Some(command))
}

/// Run a command against the device
pub fn handle_command(
    service: &TicketDeviceService,
    command: DeviceCommand,
) -> Result<CommandResponse<CommandOutcomeDto>> {
    let response = match command {
        DeviceCommand::Deposit(amount) => {
            let snapshot = service.deposit(amount)?;
            CommandResponse::success(Some(CommandOutcomeDto::Deposited(snapshot)), None)
        }
        DeviceCommand::Issue => {
            let outcome = service.issue_ticket()?;
            let message = if outcome.issued {
                "Ticket issued"
            } else {
                "Insufficient balance"
            };
            CommandResponse::success(
                Some(CommandOutcomeDto::Issue(outcome)),
                Some(message.to_string()),
            )
        }
        DeviceCommand::Refund | DeviceCommand::Quit => {
            let outcome = service.refund()?;
            CommandResponse::success(Some(CommandOutcomeDto::Refund(outcome)), None)
        }
        DeviceCommand::Status => {
            let snapshot = service.snapshot()?;
            CommandResponse::success(Some(CommandOutcomeDto::Status(snapshot)), None)
        }
        DeviceCommand::Help => CommandResponse::success(
            Some(CommandOutcomeDto::Help {
                usage: HELP_TEXT.to_string(),
            }),
            None,
        ),
    };

    Ok(response)
}
