pub mod db;
pub mod errors;
pub mod money;
pub mod user {
    pub mod entity;
    pub mod repository;
}
pub mod category {
    pub mod entity;
    pub mod repository;
}
pub mod product {
    pub mod entity;
    pub mod repository;
}
pub mod voucher {
    pub mod entity;
    pub mod repository;
}
pub mod cart {
    pub mod entity;
    pub mod unit_of_work;
}
