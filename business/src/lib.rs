pub mod application {
    pub mod cart {
        pub mod checkout;
    }
    pub mod menu {
        pub mod load;
    }
}

pub mod domain {
    pub mod logger;
    pub mod cart {
        pub mod model;
        pub mod use_cases {
            pub mod checkout;
        }
    }
    pub mod menu {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod view_state;
        pub mod use_cases {
            pub mod load;
        }
    }
    pub mod restaurant {
        pub mod catalog;
        pub mod errors;
        pub mod model;
    }
}
