// Composition root for the sign_up context.
//
// Responsibilities
// - Hold the shared state of the mock sign-up endpoint.
// - Build the router and serve it on a bound listener.
// - Mount a sign-up form wired to the HTTP gateway from settings.
// - The binary (main.rs) reads settings and calls into here.

pub mod http;
pub mod sign_up_page;
pub mod state;
