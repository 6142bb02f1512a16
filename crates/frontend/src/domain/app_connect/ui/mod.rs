pub mod details;

pub use details::AppConnectSettings;
