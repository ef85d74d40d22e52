//! Name list, round-robin letter partition and summary formatting shared by the
//! desktop app and the command-line front end.

pub mod domain;
pub mod error;
pub mod names;
pub mod partition;
pub mod summary;

pub use domain::{NameEntry, NameId};
pub use error::NameError;
pub use names::NameList;
pub use partition::{assign_letters, assignments, letters_label, Assignment, ALPHABET};
pub use summary::{summary_line, summary_text};
