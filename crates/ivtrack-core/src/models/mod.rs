pub mod procedure;

pub use procedure::{AccessType, Outcome, ProcedureRecord, Provider, Room, Sex};
