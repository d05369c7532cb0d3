// UI layer: console credential prompt using `dialoguer`.
// Prompts go to stderr so query results on stdout stay pipeable.

use crate::api::Credentials;
use anyhow::Result;
use dialoguer::{Input, Password};

/// Prompt on the console for the email address and password to log in
/// to the MGP API. The email is echoed as typed; the password is not
/// shown while the user types it. Neither field is validated here, the
/// server is the authority on both.
pub fn prompt_credentials() -> Result<Credentials> {
    // `Input` and `Password` render their prompts on stderr.
    let email: String = Input::new()
        .with_prompt("Enter email used for MGP authentication")
        .interact_text()?;
    let password: String = Password::new().with_prompt("Password").interact()?;
    Ok(Credentials { email, password })
}
