//! Login form component
//!
//! Validates email and password locally before any network call, then
//! exchanges the credentials for a bearer token and stores it.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::Role;
use crate::core::validation::{validate_email, validate_password};
use crate::ui::api;
use crate::ui::auth::use_auth_context;
use crate::ui::icon::{Icon, icons};
use crate::ui::notifications::use_notifications;

/// Login form component
#[component]
pub fn LoginForm(
    /// Callback when login is successful, carrying the signed-in role
    #[prop(optional, into)]
    on_success: Option<Callback<Role>>,
    /// Callback to switch to the signup form
    #[prop(optional, into)]
    on_signup_click: Option<Callback<()>>,
) -> impl IntoView {
    let auth = use_auth_context();
    let notifications = use_notifications();

    // Form state
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let submitting = RwSignal::new(false);
    let form_error = RwSignal::new(None::<String>);

    // Form validation
    let email_error = RwSignal::new(None::<String>);
    let password_error = RwSignal::new(None::<String>);

    let validate_email_field = move || match validate_email(&email.get()) {
        Ok(()) => {
            email_error.set(None);
            true
        }
        Err(e) => {
            email_error.set(Some(e.to_string()));
            false
        }
    };

    let validate_password_field = move || match validate_password(&password.get()) {
        Ok(()) => {
            password_error.set(None);
            true
        }
        Err(e) => {
            password_error.set(Some(e.to_string()));
            false
        }
    };

    // Handle form submission
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        form_error.set(None);

        // Fail fast on invalid input, no round-trip
        let email_valid = validate_email_field();
        let password_valid = validate_password_field();
        if !email_valid || !password_valid {
            return;
        }

        let email_val = email.get();
        let password_val = password.get();

        submitting.set(true);
        spawn_local(async move {
            match api::login(&email_val, &password_val).await {
                Ok(resp) => {
                    let role = resp.role;
                    auth.login(resp.access_token, role);
                    if let Some(callback) = on_success {
                        callback.run(role);
                    }
                }
                Err(err) => {
                    form_error.set(Some(err.message.clone()));
                    notifications.error(err.message);
                }
            }
            submitting.set(false);
        });
    };

    view! {
        <div class="w-full max-w-md mx-auto bg-theme-primary rounded-xl shadow-lg p-6 border border-theme">
            <form on:submit=on_submit class="space-y-6">
                // Header
                <div class="text-center">
                    <h2 class="text-2xl font-bold text-theme-primary">
                        "Welcome Back"
                    </h2>
                    <p class="mt-2 text-sm text-theme-secondary">
                        "Sign in to your account to continue"
                    </p>
                </div>

                // Global error message
                {move || {
                    form_error.get().map(|error| {
                        view! {
                            <div class="p-3 bg-red-100 dark:bg-red-900/30 border border-red-300 dark:border-red-700 rounded-lg">
                                <p class="text-sm text-red-700 dark:text-red-300">{error}</p>
                            </div>
                        }
                    })
                }}

                // Email field
                <div>
                    <label for="email" class="block text-sm font-medium text-theme-primary mb-1">
                        "Email"
                    </label>
                    <input
                        type="email"
                        id="email"
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
                        on:blur=move |_| { validate_email_field(); }
                    />
                    {move || {
                        email_error.get().map(|error| {
                            view! {
                                <p class="mt-1 text-sm text-red-500">{error}</p>
                            }
                        })
                    }}
                </div>

                // Password field
                <div>
                    <label for="password" class="block text-sm font-medium text-theme-primary mb-1">
                        "Password"
                    </label>
                    <div class="relative">
                        <input
                            type=move || if show_password.get() { "text" } else { "password" }
                            id="password"
                            name="password"
                            autocomplete="current-password"
                            placeholder="Enter your password"
                            class="w-full px-3 py-2 pr-10 bg-theme-secondary border border-theme rounded-lg
                                   text-theme-primary placeholder-theme-tertiary
                                   focus:outline-none focus:ring-2 focus:ring-accent-primary focus:border-transparent
                                   transition-colors"
                            class:border-red-500=move || password_error.get().is_some()
                            prop:value=move || password.get()
                            on:input=move |ev| {
                                password.set(event_target_value(&ev));
                                password_error.set(None);
                            }
                            on:blur=move |_| { validate_password_field(); }
                        />
                        <button
                            type="button"
                            class="absolute inset-y-0 right-0 pr-3 flex items-center text-theme-tertiary hover:text-theme-secondary"
                            on:click=move |_| show_password.update(|v| *v = !*v)
                        >
                            {move || {
                                if show_password.get() {
                                    view! {
                                        <Icon name=icons::EYE_CLOSED class="h-5 w-5" />
                                    }.into_any()
                                } else {
                                    view! {
                                        <Icon name=icons::EYE class="h-5 w-5" />
                                    }.into_any()
                                }
                            }}
                        </button>
                    </div>
                    {move || {
                        password_error.get().map(|error| {
                            view! {
                                <p class="mt-1 text-sm text-red-500">{error}</p>
                            }
                        })
                    }}
                </div>

                // Submit button
                <button
                    type="submit"
                    class="w-full py-2.5 px-4 bg-accent-primary hover:bg-accent-primary-hover
                           text-white font-medium rounded-lg
                           focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-accent-primary
                           disabled:opacity-50 disabled:cursor-not-allowed
                           transition-colors"
                    disabled=move || submitting.get()
                >
                    {move || {
                        if submitting.get() {
                            view! {
                                <span class="flex items-center justify-center">
                                    <Icon name=icons::LOADER class="animate-spin -ml-1 mr-2 h-4 w-4 text-white" />
                                    "Signing in..."
                                </span>
                            }.into_any()
                        } else {
                            view! { <span class="block">"Sign In"</span> }.into_any()
                        }
                    }}
                </button>

                // Links
                <div class="text-center text-sm text-theme-secondary space-y-2">
                    <p>
                        "Don't have an account? "
                        <button
                            type="button"
                            class="text-accent-primary hover:text-accent-primary-hover font-medium"
                            on:click=move |_| {
                                if let Some(callback) = on_signup_click.as_ref() {
                                    callback.run(());
                                }
                            }
                        >
                            "Sign up"
                        </button>
                    </p>
                    <p>
                        <a href="/forgot-password" class="text-accent-primary hover:text-accent-primary-hover font-medium">
                            "Forgot password?"
                        </a>
                    </p>
                </div>
            </form>
        </div>
    }
}
