//! Shared page chrome: branded header, content area, footer.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::core::Role;
use crate::ui::auth::use_auth_context;

/// Wraps a page in the standard header/footer layout.
#[component]
pub fn PageShell(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-theme-primary flex flex-col">
            // Header
            <header class="border-b border-theme">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="flex items-center justify-between h-16">
                        // Logo
                        <A href="/" attr:class="flex items-center gap-3 hover:opacity-80 transition-opacity">
                            <div class="w-8 h-8 bg-accent-primary rounded-lg flex items-center justify-center">
                                <svg class="w-5 h-5 text-white" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                                          d="M21 13.255A23.931 23.931 0 0112 15c-3.183 0-6.22-.62-9-1.745M16 6V4a2 2 0 00-2-2h-4a2 2 0 00-2 2v2m4 6h.01M5 20h14a2 2 0 002-2V8a2 2 0 00-2-2H5a2 2 0 00-2 2v10a2 2 0 002 2z" />
                                </svg>
                            </div>
                            <span class="text-xl font-bold text-theme-primary">"InternLink"</span>
                        </A>
                    </div>
                </div>
            </header>

            {children()}

            // Footer
            <footer class="py-4 border-t border-theme">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <p class="text-center text-sm text-theme-tertiary">
                        "© 2025 InternLink. All rights reserved."
                    </p>
                </div>
            </footer>
        </div>
    }
}

/// Header + content wrapper for the role dashboards, with the session's
/// role badge and a sign-out action.
#[component]
pub fn DashboardShell(
    /// The role this dashboard is scoped to
    role: Role,
    children: Children,
) -> impl IntoView {
    let auth = use_auth_context();

    let handle_logout = move |_| {
        auth.logout();
        let navigate = use_navigate();
        navigate("/", Default::default());
    };

    view! {
        <div class="min-h-screen bg-theme-primary">
            // Header
            <header class="border-b border-theme">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="flex items-center justify-between h-16">
                        <A href="/" attr:class="flex items-center gap-3 hover:opacity-80 transition-opacity">
                            <span class="text-xl font-bold text-theme-primary">"InternLink"</span>
                        </A>

                        <div class="flex items-center gap-4">
                            <span class="px-2.5 py-0.5 text-xs font-medium rounded-full bg-theme-secondary text-theme-secondary">
                                {role.label()}
                            </span>
                            <button
                                class="text-sm text-theme-secondary hover:text-theme-primary font-medium"
                                on:click=handle_logout
                            >
                                "Sign out"
                            </button>
                        </div>
                    </div>
                </div>
            </header>

            // Main content
            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                {children()}
            </main>
        </div>
    }
}
