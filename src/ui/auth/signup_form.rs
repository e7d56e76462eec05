//! Signup form component
//!
//! One form, three role variants. The role selector is mutually exclusive;
//! switching roles clears role-specific validation errors but keeps the
//! shared fields (name, email, password). Signing up never authenticates:
//! on success the user is sent back to the login entry point.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::models::{EmployerSignup, InstituteSignup, SignupBase, SignupRequest};
use crate::core::validation::{
    fields, validate_confirm_password, validate_contact_number, validate_email, validate_password,
    validate_required,
};
use crate::core::{ALL_ROLES, Role};
use crate::ui::api;
use crate::ui::icon::{Icon, icons};
use crate::ui::notifications::use_notifications;

/// Signup form component
#[component]
pub fn SignupForm(
    /// Callback when the account was created (user is NOT signed in)
    #[prop(optional, into)]
    on_success: Option<Callback<()>>,
    /// Callback to switch to the login form
    #[prop(optional, into)]
    on_login_click: Option<Callback<()>>,
) -> impl IntoView {
    let notifications = use_notifications();

    // Shared fields
    let role = RwSignal::new(Role::Student);
    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());

    // Employer fields
    let company_name = RwSignal::new(String::new());
    // Institute fields
    let institute_name = RwSignal::new(String::new());
    let aishe_code = RwSignal::new(String::new());
    // Shared by employer and institute
    let contact_number = RwSignal::new(String::new());

    let submitting = RwSignal::new(false);
    let form_error = RwSignal::new(None::<String>);

    // Per-field errors
    let full_name_error = RwSignal::new(None::<String>);
    let email_error = RwSignal::new(None::<String>);
    let password_error = RwSignal::new(None::<String>);
    let confirm_error = RwSignal::new(None::<String>);
    let company_name_error = RwSignal::new(None::<String>);
    let institute_name_error = RwSignal::new(None::<String>);
    let aishe_code_error = RwSignal::new(None::<String>);
    let contact_number_error = RwSignal::new(None::<String>);

    // Switching roles clears role-specific errors, never the shared fields
    let select_role = move |selected: Role| {
        role.set(selected);
        company_name_error.set(None);
        institute_name_error.set(None);
        aishe_code_error.set(None);
        contact_number_error.set(None);
    };

    let check = move |result: Result<(), crate::core::validation::ValidationError>,
                      error: RwSignal<Option<String>>| {
        match result {
            Ok(()) => {
                error.set(None);
                true
            }
            Err(e) => {
                error.set(Some(e.to_string()));
                false
            }
        }
    };

    let validate_shared = move || {
        let name_ok = check(
            validate_required(fields::FULL_NAME, &full_name.get()),
            full_name_error,
        );
        let email_ok = check(validate_email(&email.get()), email_error);
        let password_ok = check(validate_password(&password.get()), password_error);
        let confirm_ok = check(
            validate_confirm_password(&password.get(), &confirm_password.get()),
            confirm_error,
        );
        name_ok && email_ok && password_ok && confirm_ok
    };

    let validate_role_fields = move || match role.get() {
        Role::Student => true,
        Role::Employer => {
            let company_ok = check(
                validate_required(fields::COMPANY_NAME, &company_name.get()),
                company_name_error,
            );
            let contact_ok = check(
                validate_contact_number(&contact_number.get()),
                contact_number_error,
            );
            company_ok && contact_ok
        }
        Role::Institute => {
            let institute_ok = check(
                validate_required(fields::INSTITUTE_NAME, &institute_name.get()),
                institute_name_error,
            );
            let aishe_ok = check(
                validate_required(fields::AISHE_CODE, &aishe_code.get()),
                aishe_code_error,
            );
            let contact_ok = check(
                validate_contact_number(&contact_number.get()),
                contact_number_error,
            );
            institute_ok && aishe_ok && contact_ok
        }
    };

    // Handle form submission
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        form_error.set(None);

        // Both halves always run, so every invalid field is flagged at once
        let shared_ok = validate_shared();
        let role_ok = validate_role_fields();
        if !shared_ok || !role_ok {
            return;
        }

        let base = SignupBase {
            email: email.get(),
            full_name: full_name.get(),
            password: password.get(),
            role: role.get(),
        };
        let request = match role.get() {
            Role::Student => SignupRequest::Student(base),
            Role::Employer => SignupRequest::Employer(EmployerSignup {
                base,
                company_name: company_name.get(),
                contact_number: contact_number.get(),
            }),
            Role::Institute => SignupRequest::Institute(InstituteSignup {
                base,
                institute_name: institute_name.get(),
                aishe_code: aishe_code.get(),
                contact_number: contact_number.get(),
            }),
        };

        submitting.set(true);
        spawn_local(async move {
            match api::signup(&request).await {
                Ok(()) => {
                    notifications.success("Account created. Please sign in.");
                    if let Some(callback) = on_success {
                        callback.run(());
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

    let text_input_class = "w-full px-3 py-2 bg-theme-secondary border border-theme rounded-lg
                            text-theme-primary placeholder-theme-tertiary
                            focus:outline-none focus:ring-2 focus:ring-accent-primary focus:border-transparent
                            transition-colors";

    let field_error = move |error: RwSignal<Option<String>>| {
        move || {
            error.get().map(|message| {
                view! {
                    <p class="mt-1 text-sm text-red-500">{message}</p>
                }
            })
        }
    };

    view! {
        <div class="w-full max-w-md mx-auto bg-theme-primary rounded-xl shadow-lg p-6 border border-theme">
            <form on:submit=on_submit class="space-y-5">
                // Header
                <div class="text-center">
                    <h2 class="text-2xl font-bold text-theme-primary">
                        "Create Account"
                    </h2>
                    <p class="mt-2 text-sm text-theme-secondary">
                        "Join InternLink to find and post internships"
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

                // Role selector
                <div>
                    <label class="block text-sm font-medium text-theme-primary mb-1">
                        "I am a"
                    </label>
                    <div class="grid grid-cols-3 gap-2">
                        {ALL_ROLES.into_iter().map(|kind| {
                            view! {
                                <button
                                    type="button"
                                    class="py-2 px-3 rounded-lg border text-sm font-medium transition-colors"
                                    class:bg-accent-primary=move || role.get() == kind
                                    class:text-white=move || role.get() == kind
                                    class:border-theme=move || role.get() != kind
                                    class:text-theme-secondary=move || role.get() != kind
                                    on:click=move |_| select_role(kind)
                                >
                                    {kind.label()}
                                </button>
                            }
                        }).collect_view()}
                    </div>
                </div>

                // Full name
                <div>
                    <label for="full_name" class="block text-sm font-medium text-theme-primary mb-1">
                        "Full Name"
                    </label>
                    <input
                        type="text"
                        id="full_name"
                        name="full_name"
                        autocomplete="name"
                        placeholder="Your full name"
                        class=text_input_class
                        class:border-red-500=move || full_name_error.get().is_some()
                        prop:value=move || full_name.get()
                        on:input=move |ev| {
                            full_name.set(event_target_value(&ev));
                            full_name_error.set(None);
                        }
                    />
                    {field_error(full_name_error)}
                </div>

                // Email
                <div>
                    <label for="signup_email" class="block text-sm font-medium text-theme-primary mb-1">
                        "Email"
                    </label>
                    <input
                        type="email"
                        id="signup_email"
                        name="email"
                        autocomplete="email"
                        placeholder="you@example.com"
                        class=text_input_class
                        class:border-red-500=move || email_error.get().is_some()
                        prop:value=move || email.get()
                        on:input=move |ev| {
                            email.set(event_target_value(&ev));
                            email_error.set(None);
                        }
                    />
                    {field_error(email_error)}
                </div>

                // Employer-specific fields
                <Show when=move || role.get() == Role::Employer>
                    <div>
                        <label for="company_name" class="block text-sm font-medium text-theme-primary mb-1">
                            "Company Name"
                        </label>
                        <input
                            type="text"
                            id="company_name"
                            name="company_name"
                            placeholder="Your company"
                            class=text_input_class
                            class:border-red-500=move || company_name_error.get().is_some()
                            prop:value=move || company_name.get()
                            on:input=move |ev| {
                                company_name.set(event_target_value(&ev));
                                company_name_error.set(None);
                            }
                        />
                        {field_error(company_name_error)}
                    </div>
                </Show>

                // Institute-specific fields
                <Show when=move || role.get() == Role::Institute>
                    <div>
                        <label for="institute_name" class="block text-sm font-medium text-theme-primary mb-1">
                            "Institute Name"
                        </label>
                        <input
                            type="text"
                            id="institute_name"
                            name="institute_name"
                            placeholder="Your institute"
                            class=text_input_class
                            class:border-red-500=move || institute_name_error.get().is_some()
                            prop:value=move || institute_name.get()
                            on:input=move |ev| {
                                institute_name.set(event_target_value(&ev));
                                institute_name_error.set(None);
                            }
                        />
                        {field_error(institute_name_error)}
                    </div>
                    <div>
                        <label for="aishe_code" class="block text-sm font-medium text-theme-primary mb-1">
                            "AISHE Code"
                        </label>
                        <input
                            type="text"
                            id="aishe_code"
                            name="aishe_code"
                            placeholder="e.g. C-12345"
                            class=text_input_class
                            class:border-red-500=move || aishe_code_error.get().is_some()
                            prop:value=move || aishe_code.get()
                            on:input=move |ev| {
                                aishe_code.set(event_target_value(&ev));
                                aishe_code_error.set(None);
                            }
                        />
                        {field_error(aishe_code_error)}
                    </div>
                </Show>

                // Contact number (employer and institute)
                <Show when=move || role.get() != Role::Student>
                    <div>
                        <label for="contact_number" class="block text-sm font-medium text-theme-primary mb-1">
                            "Contact Number"
                        </label>
                        <input
                            type="tel"
                            id="contact_number"
                            name="contact_number"
                            autocomplete="tel"
                            placeholder="10-digit number"
                            class=text_input_class
                            class:border-red-500=move || contact_number_error.get().is_some()
                            prop:value=move || contact_number.get()
                            on:input=move |ev| {
                                contact_number.set(event_target_value(&ev));
                                contact_number_error.set(None);
                            }
                        />
                        {field_error(contact_number_error)}
                    </div>
                </Show>

                // Password
                <div>
                    <label for="signup_password" class="block text-sm font-medium text-theme-primary mb-1">
                        "Password"
                    </label>
                    <input
                        type="password"
                        id="signup_password"
                        name="password"
                        autocomplete="new-password"
                        placeholder="At least 8 characters"
                        class=text_input_class
                        class:border-red-500=move || password_error.get().is_some()
                        prop:value=move || password.get()
                        on:input=move |ev| {
                            password.set(event_target_value(&ev));
                            password_error.set(None);
                        }
                    />
                    {field_error(password_error)}
                </div>

                // Confirm password
                <div>
                    <label for="confirm_password" class="block text-sm font-medium text-theme-primary mb-1">
                        "Confirm Password"
                    </label>
                    <input
                        type="password"
                        id="confirm_password"
                        name="confirm_password"
                        autocomplete="new-password"
                        placeholder="Repeat your password"
                        class=text_input_class
                        class:border-red-500=move || confirm_error.get().is_some()
                        prop:value=move || confirm_password.get()
                        on:input=move |ev| {
                            confirm_password.set(event_target_value(&ev));
                            confirm_error.set(None);
                        }
                    />
                    {field_error(confirm_error)}
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
                                    "Creating account..."
                                </span>
                            }.into_any()
                        } else {
                            view! { <span class="block">"Sign Up"</span> }.into_any()
                        }
                    }}
                </button>

                // Login link
                <div class="text-center text-sm text-theme-secondary">
                    "Already have an account? "
                    <button
                        type="button"
                        class="text-accent-primary hover:text-accent-primary-hover font-medium"
                        on:click=move |_| {
                            if let Some(callback) = on_login_click.as_ref() {
                                callback.run(());
                            }
                        }
                    >
                        "Sign in"
                    </button>
                </div>
            </form>
        </div>
    }
}
