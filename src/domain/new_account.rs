use secrecy::Secret;

#[derive(Debug)]
pub struct NewAccount {
    pub email: String,
    pub password: Secret<String>,
    pub full_name: String,
}
