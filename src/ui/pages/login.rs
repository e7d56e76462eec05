//! Login page component
//!
//! The entry point at `/`. Redirects to the role dashboard when a session
//! already exists.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::core::Role;
use crate::ui::auth::{LoginForm, use_auth_context};
use crate::ui::page_shell::PageShell;

/// Login page component
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth_context();

    // Redirect if already authenticated
    Effect::new(move |_| {
        if auth.restored.get() {
            if let Some(role) = auth.role() {
                let navigate = use_navigate();
                navigate(role.dashboard_path(), Default::default());
            }
        }
    });

    // Handle successful login
    let on_success = move |role: Role| {
        let navigate = use_navigate();
        navigate(role.dashboard_path(), Default::default());
    };

    // Switch to signup page
    let on_signup_click = move |_| {
        let navigate = use_navigate();
        navigate("/signup", Default::default());
    };

    view! {
        <PageShell>
            <main class="flex-1 flex items-center justify-center p-4">
                <div class="w-full max-w-md">
                    <LoginForm
                        on_success=Callback::new(on_success)
                        on_signup_click=Callback::new(on_signup_click)
                    />
                </div>
            </main>
        </PageShell>
    }
}
