//! Signup page component
//!
//! Creating an account never signs the user in; on success we return to the
//! login entry point for an explicit sign-in.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::ui::auth::SignupForm;
use crate::ui::page_shell::PageShell;

/// Signup page component
#[component]
pub fn SignupPage() -> impl IntoView {
    // Back to login, both after success and from the "Sign in" link
    let on_success = move |_| {
        let navigate = use_navigate();
        navigate("/", Default::default());
    };

    let on_login_click = move |_| {
        let navigate = use_navigate();
        navigate("/", Default::default());
    };

    view! {
        <PageShell>
            <main class="flex-1 flex items-center justify-center p-4">
                <div class="w-full max-w-md">
                    <SignupForm
                        on_success=Callback::new(on_success)
                        on_login_click=Callback::new(on_login_click)
                    />
                </div>
            </main>
        </PageShell>
    }
}
