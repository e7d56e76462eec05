use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::core::Role;
use crate::ui::auth::provide_auth_context;
use crate::ui::pages::{
    EmployerPage, ForgotPasswordPage, InstitutePage, LoginPage, NotFoundPage, SignupPage,
    StudentPage, UnauthorizedPage,
};
use crate::ui::{RequireRole, ToastContainer, provide_notifications};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // Session store and toast queue, injected once at the composition root
    let _auth = provide_auth_context();
    let _notifications = provide_notifications();

    view! {
        // injects a stylesheet into the document <head>
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/internlink.css"/>

        // sets the document title
        <Title text="InternLink - Internship Marketplace"/>

        <Router>
            <ToastContainer/>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=path!("/") view=LoginPage/>
                <Route path=path!("/signup") view=SignupPage/>
                <Route path=path!("/forgot-password") view=ForgotPasswordPage/>
                <Route path=path!("/unauthorized") view=UnauthorizedPage/>
                <Route path=path!("/student") view=|| view! {
                    <RequireRole scope=Role::Student>
                        <StudentPage/>
                    </RequireRole>
                }/>
                <Route path=path!("/employer") view=|| view! {
                    <RequireRole scope=Role::Employer>
                        <EmployerPage/>
                    </RequireRole>
                }/>
                <Route path=path!("/institute") view=|| view! {
                    <RequireRole scope=Role::Institute>
                        <InstitutePage/>
                    </RequireRole>
                }/>
            </Routes>
        </Router>
    }
}
