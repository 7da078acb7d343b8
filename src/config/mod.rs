pub mod settings;

pub use settings::{CognitoSettings, ServerSettings, Settings};
