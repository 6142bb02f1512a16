pub mod credentials_step;
pub mod view;

pub use credentials_step::CredentialsStep;
pub use view::AppConnectSettings;
