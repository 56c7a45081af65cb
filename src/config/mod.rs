mod settings;

pub use settings::{Settings, APPROVERS_ENV, DEFAULT_APPROVERS};
