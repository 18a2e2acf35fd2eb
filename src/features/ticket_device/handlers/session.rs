use std::io::{BufRead, Write};

use crate::core::error::{AppError, Result};
use crate::features::ticket_device::dtos::DeviceSnapshotDto;
use crate::features::ticket_device::handlers::{handle_command, parse_command, DeviceCommand};
use crate::features::ticket_device::services::TicketDeviceService;

/// Drive one console session: a command per input line, a JSON response per
/// output line.
///
/// The session ends on `quit` or when input runs out. Either way the remaining
/// balance is refunded before the final snapshot is returned.
pub fn run_session<R, W>(
    service: &TicketDeviceService,
    input: R,
    mut output: W,
) -> Result<DeviceSnapshotDto>
where
    R: BufRead,
    W: Write,
{
    let mut quit_seen = false;

    for line in input.lines() {
        let line = line?;

        let response = match parse_command(&line) {
            Ok(None) => continue,
            Ok(Some(command)) => {
                quit_seen = command == DeviceCommand::Quit;
                handle_command(service, command).and_then(|r| {
                    r.to_json_line()
                        .map_err(|e| AppError::Internal(e.to_string()))
                })
            }
            Err(e) => Err(e),
        };

        let json = match response {
            Ok(json) => json,
            Err(e) => e
                .into_response()
                .to_json_line()
                .map_err(|e| AppError::Internal(e.to_string()))?,
        };
        writeln!(output, "{}", json)?;
        output.flush()?;

        if quit_seen {
            break;
        }
    }

    // Input closed without quit
    if !quit_seen {
        let refunded = service.refund()?.refunded;
        if refunded > 0 {
            tracing::info!("Session ended, refunded remaining balance: {}", refunded);
        }
    }

    let summary = service.snapshot()?;
    tracing::info!(
        "Session closed: tickets_issued={}, total_revenue={}",
        summary.tickets_issued,
        summary.total_revenue
    );

    Ok(summary)
}
