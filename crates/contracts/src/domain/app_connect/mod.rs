pub mod credentials;

pub use credentials::{
    AppConnectCredentials, AppConnectCredentialsDto, CredentialField, PrivateKey,
};
