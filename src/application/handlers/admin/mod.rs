//! Admin panel use cases.

mod edit_interpretations;
mod manage_emails;

pub use edit_interpretations::{
    DeleteInterpretationCommand, EditInterpretationsHandler, UpsertInterpretationCommand,
};
pub use manage_emails::{AddEmailCommand, ManageEmailsHandler, RemoveEmailCommand};
