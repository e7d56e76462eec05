//! Unauthorized page component
//!
//! Shown when an authenticated session navigates to a section scoped to a
//! different role. Offers the way back to the session's own dashboard and a
//! logout action.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::ui::auth::use_auth_context;
use crate::ui::page_shell::PageShell;

/// Unauthorized page component
#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    let auth = use_auth_context();

    let handle_logout = move |_| {
        auth.logout();
        let navigate = use_navigate();
        navigate("/", Default::default());
    };

    view! {
        <PageShell>
            <main class="flex-1 flex items-center justify-center p-4">
                <div class="max-w-md w-full text-center space-y-6">
                    <div class="p-6 bg-yellow-50 dark:bg-yellow-900/20 border border-yellow-300 dark:border-yellow-700 rounded-lg">
                        <h2 class="text-xl font-bold text-yellow-800 dark:text-yellow-200">
                            "Access Denied"
                        </h2>
                        <p class="mt-2 text-sm text-yellow-700 dark:text-yellow-300">
                            "Your account does not have access to this section."
                        </p>
                    </div>

                    {move || {
                        auth.role().map(|role| {
                            view! {
                                <A
                                    href=role.dashboard_path()
                                    attr:class="inline-block py-2.5 px-6 bg-accent-primary hover:bg-accent-primary-hover
                                                text-white font-medium rounded-lg transition-colors"
                                >
                                    {format!("Go to your {} dashboard", role.label().to_lowercase())}
                                </A>
                            }
                        })
                    }}

                    <div>
                        <button
                            class="text-sm text-theme-secondary hover:text-theme-primary font-medium"
                            on:click=handle_logout
                        >
                            "Sign out"
                        </button>
                    </div>
                </div>
            </main>
        </PageShell>
    }
}
