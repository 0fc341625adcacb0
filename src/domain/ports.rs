/// Read-only view of the stored credentials the API client is built from.
pub trait CredentialsProvider: Send + Sync {
    fn host(&self) -> &str;
    fn user(&self) -> &str;
    fn access_token(&self) -> &str;
}
