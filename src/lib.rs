pub mod shared {
    pub mod config;
}

pub mod modules {
    pub mod sign_up {
        pub mod core {
            pub mod fields;
            pub mod intents;
            pub mod notification;
            pub mod submission;
            pub mod validation;
        }
        pub mod use_cases {
            pub mod edit_form {
                pub mod controller;
            }
            pub mod submit_sign_up {
                pub mod gateway_port;
                pub mod handler;
                pub mod payload;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod gateway_in_memory;
                pub mod http_gateway;
            }
        }
    }
}

pub mod shell;
