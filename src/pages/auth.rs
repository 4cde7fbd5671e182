use crate::app::ContentHub;
use crate::auth::Identity;
use crate::common::{PageError, ValidationError};
use crate::shell::merge_slots;
use crate::views::format::escape_html;

/// Signed-out visitors get the sign-in/sign-up forms; signed-in
/// visitors get their account summary.
pub(crate) async fn render(hub: &ContentHub) -> Result<String, PageError> {
    let shell = hub.templates.fetch("auth").await?;

    let fragment = match hub.session.current() {
        Some(identity) => account_view(&identity, hub.session.is_admin()),
        None => AUTH_FORMS.to_string(),
    };

    Ok(merge_slots(&shell, &[("content", &fragment)]))
}

fn account_view(identity: &Identity, is_admin: bool) -> String {
    let username = identity
        .display_name
        .as_deref()
        .filter(|name| !name.is_empty())
        .unwrap_or("Not set");
    let account_type = if is_admin { "Administrator" } else { "Member" };

    format!(
        r#"<div class="account-view">
    <h2>My Account</h2>
    <dl class="account-details">
        <dt>Username</dt><dd>{}</dd>
        <dt>Email</dt><dd>{}</dd>
        <dt>Account type</dt><dd>{}</dd>
    </dl>
    <button class="btn btn-secondary" id="sign-out-btn">Sign Out</button>
</div>"#,
        escape_html(username),
        escape_html(&identity.email),
        account_type
    )
}

const AUTH_FORMS: &str = r##"<div class="auth-forms">
    <form id="signin-form" class="auth-form">
        <h2>Sign In</h2>
        <div class="form-group">
            <label for="signin-email">Email</label>
            <input type="email" id="signin-email" required>
        </div>
        <div class="form-group">
            <label for="signin-password">Password</label>
            <input type="password" id="signin-password" required>
        </div>
        <button type="submit" class="btn btn-primary">Sign In</button>
        <a href="#" id="forgot-password-link">Forgot password?</a>
    </form>
    <form id="signup-form" class="auth-form">
        <h2>Sign Up</h2>
        <div class="form-group">
            <label for="signup-username">Username</label>
            <input type="text" id="signup-username" required>
        </div>
        <div class="form-group">
            <label for="signup-email">Email</label>
            <input type="email" id="signup-email" required>
        </div>
        <div class="form-group">
            <label for="signup-password">Password</label>
            <input type="password" id="signup-password" required>
        </div>
        <div class="form-group">
            <label for="signup-confirm">Confirm Password</label>
            <input type="password" id="signup-confirm" required>
        </div>
        <button type="submit" class="btn btn-primary">Create Account</button>
    </form>
</div>"##;

/// Drives the sign-in/sign-up/reset interactions of the auth page.
/// Every outcome is reported through the notifier; the boolean tells
/// the caller whether to re-render.
pub struct AuthController {
    hub: ContentHub,
}

impl AuthController {
    pub(crate) fn new(hub: ContentHub) -> Self {
        Self { hub }
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> bool {
        match self.hub.identity.sign_in(email.trim(), password).await {
            Ok(identity) => {
                self.hub
                    .notifier
                    .success(format!("Welcome back, {}!", identity.display()));
                true
            }
            Err(e) => {
                self.hub.notifier.error(e.to_string());
                false
            }
        }
    }

    /// Password/confirmation equality is checked here, before the
    /// provider is involved.
    pub async fn sign_up(
        &self,
        username: &str,
        email: &str,
        password: &str,
        confirm: &str,
    ) -> bool {
        if password != confirm {
            self.hub
                .notifier
                .error(ValidationError::PasswordMismatch.to_string());
            return false;
        }

        match self
            .hub
            .identity
            .sign_up(email.trim(), password, username)
            .await
        {
            Ok(identity) => {
                self.hub
                    .notifier
                    .success(format!("Account created. Welcome, {}!", identity.display()));
                true
            }
            Err(e) => {
                self.hub.notifier.error(e.to_string());
                false
            }
        }
    }

    pub async fn send_reset(&self, email: &str) -> bool {
        if email.trim().is_empty() {
            self.hub.notifier.error("Please enter your email address");
            return false;
        }

        match self.hub.identity.send_password_reset(email).await {
            Ok(()) => {
                self.hub
                    .notifier
                    .success("Password reset email sent! Check your inbox.");
                true
            }
            Err(e) => {
                self.hub.notifier.error(e.to_string());
                false
            }
        }
    }

    pub async fn sign_out(&self) -> bool {
        match self.hub.identity.sign_out().await {
            Ok(()) => {
                self.hub.notifier.success("Signed out successfully.");
                true
            }
            Err(e) => {
                self.hub.notifier.error(e.to_string());
                false
            }
        }
    }
}
