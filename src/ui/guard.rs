//! Role-gated rendering for dashboard routes.
//!
//! The decision itself lives in `core::guard`; this component applies it
//! reactively, so it is re-evaluated on every navigation and on every
//! session change rather than cached.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::core::{Role, RouteDecision, decide};
use crate::ui::auth::use_auth_context;

/// Wraps a page scoped to one role.
#[component]
pub fn RequireRole(
    /// The role this section belongs to
    scope: Role,
    children: ChildrenFn,
) -> impl IntoView {
    let auth = use_auth_context();

    view! {
        {move || {
            if !auth.restored.get() {
                // Persisted session not read yet (server render or the tick
                // before the restore effect runs); deciding now would bounce
                // a valid session to login.
                return view! {
                    <div class="flex items-center justify-center py-20">
                        <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-accent-primary"></div>
                    </div>
                }
                .into_any();
            }
            match decide(&auth.session.get(), scope) {
                RouteDecision::Render => children().into_any(),
                RouteDecision::RedirectToLogin => view! { <Redirect path="/"/> }.into_any(),
                RouteDecision::RedirectToUnauthorized => {
                    view! { <Redirect path="/unauthorized"/> }.into_any()
                }
            }
        }}
    }
}
