//! Institute dashboard page component
//!
//! The backend exposes no institute-facing endpoints in scope, so this is
//! an identity view behind the role guard.

use leptos::prelude::*;

use crate::core::Role;
use crate::ui::page_shell::DashboardShell;

/// Institute dashboard page component
#[component]
pub fn InstitutePage() -> impl IntoView {
    view! {
        <DashboardShell role=Role::Institute>
            <div class="space-y-4">
                <h1 class="text-2xl font-bold text-theme-primary">"Institute Dashboard"</h1>
                <p class="text-theme-secondary">
                    "You are signed in as an institute. Student placement tracking will appear here."
                </p>
            </div>
        </DashboardShell>
    }
}
