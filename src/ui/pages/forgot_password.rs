//! Forgot-password page component
//!
//! Presentational entry point; the backend exposes no reset endpoint in
//! scope, so this only validates the email locally and acknowledges.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::validation::validate_email;
use crate::ui::notifications::use_notifications;
use crate::ui::page_shell::PageShell;

/// Forgot-password page component
#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let notifications = use_notifications();

    let email = RwSignal::new(String::new());
    let email_error = RwSignal::new(None::<String>);
    let submitted = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_email(&email.get()) {
            Ok(()) => {
                email_error.set(None);
                submitted.set(true);
                notifications.info("If an account exists for this email, you will receive reset instructions.");
            }
            Err(e) => email_error.set(Some(e.to_string())),
        }
    };

    view! {
        <PageShell>
            <main class="flex-1 flex items-center justify-center p-4">
                <div class="w-full max-w-md mx-auto bg-theme-primary rounded-xl shadow-lg p-6 border border-theme">
                    <form on:submit=on_submit class="space-y-6">
                        <div class="text-center">
                            <h2 class="text-2xl font-bold text-theme-primary">
                                "Reset Password"
                            </h2>
                            <p class="mt-2 text-sm text-theme-secondary">
                                "Enter your email and we'll send you reset instructions"
                            </p>
                        </div>

                        <Show
                            when=move || !submitted.get()
                            fallback=|| view! {
                                <div class="p-3 bg-green-100 dark:bg-green-900/30 border border-green-300 dark:border-green-700 rounded-lg">
                                    <p class="text-sm text-green-700 dark:text-green-300">
                                        "Check your inbox for reset instructions."
                                    </p>
                                </div>
                            }
                        >
                            <div>
                                <label for="reset_email" class="block text-sm font-medium text-theme-primary mb-1">
                                    "Email"
                                </label>
                                <input
                                    type="email"
                                    id="reset_email"
                                    name="email"
                                    autocomplete="email"
                                    placeholder="you@example.com"
                                    class="w-full px-3 py-2 bg-theme-secondary border border-theme rounded-lg
                                           text-theme-primary placeholder-theme-tertiary
                                           focus:outline-none focus:ring-2 focus:ring-accent-primary focus:border-transparent
                                           transition-colors"
                                    class:border-red-500=move || email_error.get().is_some()
                                    prop:value=move || email.get()
                                    on:input=move |ev| {
                                        email.set(event_target_value(&ev));
                                        email_error.set(None);
                                    }
                                />
                                {move || {
                                    email_error.get().map(|error| {
                                        view! {
                                            <p class="mt-1 text-sm text-red-500">{error}</p>
                                        }
                                    })
                                }}
                            </div>

                            <button
                                type="submit"
                                class="w-full py-2.5 px-4 bg-accent-primary hover:bg-accent-primary-hover
                                       text-white font-medium rounded-lg transition-colors"
                            >
                                "Send Reset Link"
                            </button>
                        </Show>

                        <div class="text-center text-sm text-theme-secondary">
                            <A href="/" attr:class="text-accent-primary hover:text-accent-primary-hover font-medium">
                                "Back to sign in"
                            </A>
                        </div>
                    </form>
                </div>
            </main>
        </PageShell>
    }
}
