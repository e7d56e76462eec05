//! Student dashboard page component
//!
//! The backend exposes no student-facing endpoints in scope, so this is an
//! identity view behind the role guard.

use leptos::prelude::*;

use crate::core::Role;
use crate::ui::page_shell::DashboardShell;

/// Student dashboard page component
#[component]
pub fn StudentPage() -> impl IntoView {
    view! {
        <DashboardShell role=Role::Student>
            <div class="space-y-4">
                <h1 class="text-2xl font-bold text-theme-primary">"Student Dashboard"</h1>
                <p class="text-theme-secondary">
                    "You are signed in as a student. Internship listings and your applications will appear here."
                </p>
            </div>
        </DashboardShell>
    }
}
