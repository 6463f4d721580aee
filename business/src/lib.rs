pub mod application {
    pub mod cart {
        pub mod add_item;
        pub mod clear;
        pub mod decrease_item;
        pub mod delete_item;
        pub mod get;
        pub mod increase_item;
    }
    pub mod category {
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_id;
        pub mod get_children;
        pub mod get_main;
        pub mod update;
    }
    pub mod product {
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_category;
        pub mod get_by_id;
        pub mod update;
    }
    pub mod user {
        pub mod get_current;
        pub mod login;
        pub mod register;
    }
    pub mod voucher {
        pub mod apply_discount;
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_code;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod add_item;
            pub mod clear;
            pub mod decrease_item;
            pub mod delete_item;
            pub mod get;
            pub mod increase_item;
        }
    }
    pub mod category {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_id;
            pub mod get_children;
            pub mod get_main;
            pub mod update;
        }
    }
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_category;
            pub mod get_by_id;
            pub mod update;
        }
    }
    pub mod user {
        pub mod errors;
        pub mod model;
        pub mod password;
        pub mod repository;
        pub mod services;
        pub mod use_cases {
            pub mod get_current;
            pub mod login;
            pub mod register;
        }
    }
    pub mod voucher {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod value_objects;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_code;
        }
    }
}

#[cfg(test)]
pub(crate) mod test_utils;
