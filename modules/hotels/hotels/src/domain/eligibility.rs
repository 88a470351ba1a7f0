//! Hotel access policy.
//!
//! A ticket grants access to hotel data only when it is paid, for in-person
//! attendance, and of a type that includes accommodation.

use std::fmt;

use hotels_sdk::{TicketStatus, TicketWithType};

/// Why a ticket does not grant hotel access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ineligibility {
    NotPaid,
    RemoteTicket,
    HotelNotIncluded,
}

impl fmt::Display for Ineligibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Ineligibility::NotPaid => "ticket is not paid",
            Ineligibility::RemoteTicket => "ticket is remote",
            Ineligibility::HotelNotIncluded => "ticket type does not include hotel",
        };
        f.write_str(reason)
    }
}

/// Decide whether `ticket` grants hotel access.
///
/// Conditions are checked in a fixed order (payment, remote, hotel inclusion)
/// and the first failing one is reported.
///
/// # Errors
/// Returns the [`Ineligibility`] reason when access is denied.
pub fn check_hotel_access(ticket: &TicketWithType) -> Result<(), Ineligibility> {
    if ticket.ticket.status != TicketStatus::Paid {
        return Err(Ineligibility::NotPaid);
    }
    if ticket.ticket_type.is_remote {
        return Err(Ineligibility::RemoteTicket);
    }
    if !ticket.ticket_type.includes_hotel {
        return Err(Ineligibility::HotelNotIncluded);
    }
    Ok(())
}
